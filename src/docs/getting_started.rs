//! # Getting started
//!
//! A counter screen has two buttons and a label. Let's wire them up by hand
//! first, without any presenter:
//!
//! ```
//! use viewmodel_injection::{CounterViewModel, CounterWidgets};
//!
//! let widgets = CounterWidgets::new();
//! let view_model = CounterViewModel::new(
//!     0,
//!     widgets.increment.taps(),
//!     widgets.decrement.taps(),
//! );
//!
//! widgets.increment.tap();
//! widgets.increment.tap();
//! assert_eq!(2, view_model.count());
//! ```
//!
//! The view-model counts, but nothing shows the count yet. Its outputs are
//! streams which replay the current value to every new subscriber, so a
//! label bound late still shows the right text:
//!
//! ```
//! use viewmodel_injection::{
//!     bind, CounterViewModel, CounterViewModelType, CounterWidgets,
//! };
//!
//! let widgets = CounterWidgets::new();
//! let view_model = CounterViewModel::new(
//!     3,
//!     widgets.increment.taps(),
//!     widgets.decrement.taps(),
//! );
//!
//! let _bindings = bind(&view_model, &widgets);
//! assert_eq!(Some("3".to_owned()), widgets.count_label.text());
//!
//! widgets.decrement.tap();
//! assert_eq!(Some("2".to_owned()), widgets.count_label.text());
//! ```
//!
//! There is a catch though: the view-model can only be built once the
//! widgets exist, because it consumes their event streams. Whoever creates
//! the screen usually knows the initial count long before that. This is what
//! presenters are for. A presenter is handed whatever it needs to build the
//! view-model later, and builds it when the widgets are attached:
//!
//! ```
//! use viewmodel_injection::{
//!     tuple_initializer, CounterPresenter, CounterWidgets,
//!     TupleCounterPresenter,
//! };
//!
//! // Nothing is built here.
//! let mut presenter = TupleCounterPresenter::new(1, tuple_initializer());
//! assert!(presenter.view_model().is_none());
//!
//! let widgets = CounterWidgets::new();
//! presenter.attach(widgets.clone()).unwrap();
//! assert!(widgets.decrement.is_enabled());
//!
//! widgets.decrement.tap();
//! assert!(!widgets.decrement.is_enabled());
//!
//! // Disabled controls ignore taps, so the count never goes negative.
//! assert!(!widgets.decrement.tap());
//! assert_eq!(Some("0".to_owned()), widgets.count_label.text());
//! ```
//!
//! Detaching releases everything the presenter registered on the widgets:
//!
//! ```
//! use viewmodel_injection::{
//!     tuple_initializer, CounterPresenter, CounterWidgets,
//!     TupleCounterPresenter,
//! };
//!
//! let mut presenter = TupleCounterPresenter::new(0, tuple_initializer());
//! let widgets = CounterWidgets::new();
//! presenter.attach(widgets.clone()).unwrap();
//! assert_eq!(1, widgets.increment.target_count());
//!
//! presenter.detach();
//! assert_eq!(0, widgets.increment.target_count());
//!
//! widgets.increment.tap();
//! assert_eq!(Some("0".to_owned()), widgets.count_label.text());
//! ```
//!
//! There are three ways of handing a presenter its view-model. Which one to
//! pick is covered in [choosing a factory](crate::docs::choosing_a_factory).
