use crate::{
    presenters::lifecycle::Lifecycle, AnyViewModelFactory, CounterFactory,
    CounterPresenter, CounterViewModelType, CounterWidgets, PresentResult,
    PresenterState, TapEvents, ViewModelFactory,
};
use std::fmt::{Debug, Formatter};

/// A counter presenter injected with nothing but a [`CounterFactory`]. The
/// initial count lives in the factory, so the presenter never sees it.
///
/// ```
/// use viewmodel_injection::{
///     CounterPresenter, CounterViewModelFactory, CounterWidgets,
///     FactoryCounterPresenter,
/// };
///
/// let mut presenter =
///     FactoryCounterPresenter::new(CounterViewModelFactory::new(0));
/// let widgets = CounterWidgets::new();
/// presenter.attach(widgets.clone()).unwrap();
/// assert!(!widgets.decrement.is_enabled());
///
/// widgets.increment.tap();
/// assert_eq!(Some("1".to_owned()), widgets.count_label.text());
/// assert!(widgets.decrement.is_enabled());
/// ```
pub struct FactoryCounterPresenter {
    lifecycle: Lifecycle<CounterFactory>,
}

impl FactoryCounterPresenter {
    /// Creates an unattached presenter, erasing the type of `factory`.
    #[must_use]
    pub fn new<F>(factory: F) -> Self
    where
        F: ViewModelFactory<TapEvents, ViewModel = Box<dyn CounterViewModelType>>
            + 'static,
    {
        FactoryCounterPresenter::from_any(AnyViewModelFactory::new(factory))
    }

    /// Creates an unattached presenter from an already erased factory.
    #[must_use]
    pub fn from_any(factory: CounterFactory) -> Self {
        FactoryCounterPresenter {
            lifecycle: Lifecycle::Unattached(factory),
        }
    }

    /// The injected factory, until it has been used.
    #[must_use]
    pub fn factory(&self) -> Option<&CounterFactory> {
        self.lifecycle.injected()
    }
}

impl CounterPresenter for FactoryCounterPresenter {
    fn attach(&mut self, widgets: CounterWidgets) -> PresentResult<()> {
        self.lifecycle.attach(widgets, |factory, widgets| {
            factory.initialize(TapEvents {
                increment: widgets.increment.taps(),
                decrement: widgets.decrement.taps(),
            })
        })
    }

    fn detach(&mut self) -> bool {
        self.lifecycle.detach()
    }

    fn state(&self) -> PresenterState {
        self.lifecycle.state()
    }

    fn view_model(&self) -> Option<&dyn CounterViewModelType> {
        self.lifecycle.view_model()
    }

    fn widgets(&self) -> Option<&CounterWidgets> {
        self.lifecycle.widgets()
    }
}

impl Debug for FactoryCounterPresenter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactoryCounterPresenter")
            .field("state", &self.state())
            .field("widgets", &self.widgets())
            .finish()
    }
}
