//! # Choosing a factory
//!
//! Every presenter builds the same kind of view-model from the same inputs:
//! an initial count and two notification streams. They differ in how those
//! inputs are passed to whatever builds the view-model.
//!
//! ## Tuple initializers
//!
//! The simplest option is a boxed closure taking every dependency as its own
//! argument:
//!
//! ```
//! use viewmodel_injection::{
//!     CounterPresenter, CounterViewModel, CounterViewModelType,
//!     CounterWidgets, InitViewModel, Notifications, TupleCounterPresenter,
//! };
//!
//! let init_view_model: InitViewModel = Box::new(
//!     |count: i64,
//!      increment: Notifications,
//!      decrement: Notifications|
//!      -> Box<dyn CounterViewModelType> {
//!         Box::new(CounterViewModel::new(count * 10, increment, decrement))
//!     },
//! );
//!
//! let mut presenter = TupleCounterPresenter::new(2, init_view_model);
//! let widgets = CounterWidgets::new();
//! presenter.attach(widgets.clone()).unwrap();
//! assert_eq!(Some("20".to_owned()), widgets.count_label.text());
//! ```
//!
//! This works well until the view-model needs another dependency. Then the
//! signature of [`InitViewModel`](crate::InitViewModel) changes, and so does
//! every initializer and every presenter holding one.
//!
//! ## Dependency bags
//!
//! Grouping the dependencies in a struct keeps the initializer's signature
//! stable. The struct is named once, by the factory's
//! [`StaticViewModelFactory::Dependency`](crate::StaticViewModelFactory):
//!
//! ```
//! use viewmodel_injection::{
//!     CounterDependency, CounterPresenter, CounterViewModel,
//!     CounterViewModelType, CounterWidgets, StaticViewModelFactory,
//!     TypedCounterPresenter,
//! };
//!
//! enum StartsHigh {}
//!
//! impl StaticViewModelFactory for StartsHigh {
//!     type Dependency = CounterDependency;
//!     type ViewModel = Box<dyn CounterViewModelType>;
//!
//!     fn initialize(dependency: CounterDependency) -> Self::ViewModel {
//!         Box::new(CounterViewModel::new(
//!             dependency.count + 100,
//!             dependency.increment,
//!             dependency.decrement,
//!         ))
//!     }
//! }
//!
//! let mut presenter = TypedCounterPresenter::new(1, StartsHigh::initializer());
//! let widgets = CounterWidgets::new();
//! presenter.attach(widgets.clone()).unwrap();
//! assert_eq!(Some("101".to_owned()), widgets.count_label.text());
//! ```
//!
//! ## Factory objects
//!
//! The presenter still carries the initial count in both cases above, even
//! though it has no use for it. A [`ViewModelFactory`](crate::ViewModelFactory)
//! is an object, so it can hold the count itself, and the presenter only ever
//! passes it the widget events. Any closure over the dependency bag is a
//! factory too, which keeps test doubles short:
//!
//! ```
//! use viewmodel_injection::{
//!     CounterPresenter, CounterViewModel, CounterViewModelFactory,
//!     CounterViewModelType, CounterWidgets, FactoryCounterPresenter,
//!     TapEvents,
//! };
//!
//! let mut presenter =
//!     FactoryCounterPresenter::new(CounterViewModelFactory::new(4));
//! let widgets = CounterWidgets::new();
//! presenter.attach(widgets.clone()).unwrap();
//! assert_eq!(Some("4".to_owned()), widgets.count_label.text());
//!
//! let mut presenter = FactoryCounterPresenter::new(
//!     |events: TapEvents| -> Box<dyn CounterViewModelType> {
//!         Box::new(CounterViewModel::new(-1, events.increment, events.decrement))
//!     },
//! );
//! let widgets = CounterWidgets::new();
//! presenter.attach(widgets.clone()).unwrap();
//! assert!(!widgets.decrement.is_enabled());
//! ```
//!
//! ## Choosing at runtime
//!
//! [`PresenterHandle`](crate::PresenterHandle) wraps any of the three, so the
//! variant can come from configuration:
//!
//! ```
//! use viewmodel_injection::{
//!     Control, DecrementPolicy, FactorySupplier, Label, PresenterHandle,
//!     Variant,
//! };
//!
//! let variant: Variant = "factory".parse().unwrap();
//! let supplier =
//!     FactorySupplier::default_for(variant, DecrementPolicy::FloorAtZero);
//! let mut handle = PresenterHandle::construct(0, supplier);
//!
//! let (increment, decrement, label) =
//!     (Control::new(), Control::new(), Label::new());
//! handle
//!     .attach_widgets(increment, decrement.clone(), label.clone())
//!     .unwrap();
//!
//! // Even when the control is bypassed, the count stays at zero.
//! decrement.send_actions(viewmodel_injection::ControlEvent::TouchUpInside);
//! assert_eq!(Some("0".to_owned()), label.text());
//! ```
