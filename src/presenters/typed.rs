use crate::{
    presenters::lifecycle::Lifecycle, CounterDependency, CounterPresenter,
    CounterViewModelType, CounterWidgets, Initializer, PresentResult,
    PresenterState,
};
use std::fmt::{Debug, Formatter};

/// The initializer a [`TypedCounterPresenter`] is injected with.
pub type CounterViewModelInitializer =
    Initializer<CounterDependency, Box<dyn CounterViewModelType>>;

struct Injected {
    count: i64,
    initializer: CounterViewModelInitializer,
}

/// A counter presenter injected with the initial count and an
/// [`Initializer`] over the [`CounterDependency`] bag. Adding a dependency to
/// the view-model means adding a field to the bag; the initializer's type
/// stays the same.
///
/// ```
/// use viewmodel_injection::{
///     CounterInitializer, CounterPresenter, CounterWidgets,
///     StaticViewModelFactory, TypedCounterPresenter,
/// };
///
/// let mut presenter =
///     TypedCounterPresenter::new(5, CounterInitializer::initializer());
/// let widgets = CounterWidgets::new();
/// presenter.attach(widgets.clone()).unwrap();
///
/// widgets.decrement.tap();
/// assert_eq!(Some("4".to_owned()), widgets.count_label.text());
/// ```
pub struct TypedCounterPresenter {
    lifecycle: Lifecycle<Injected>,
}

impl TypedCounterPresenter {
    /// Creates an unattached presenter.
    #[must_use]
    pub fn new(count: i64, initializer: CounterViewModelInitializer) -> Self {
        TypedCounterPresenter {
            lifecycle: Lifecycle::Unattached(Injected { count, initializer }),
        }
    }

    /// The count the view-model will start from, until it has been built.
    #[must_use]
    pub fn initial_count(&self) -> Option<i64> {
        self.lifecycle.injected().map(|injected| injected.count)
    }
}

impl CounterPresenter for TypedCounterPresenter {
    fn attach(&mut self, widgets: CounterWidgets) -> PresentResult<()> {
        self.lifecycle.attach(widgets, |injected, widgets| {
            (injected.initializer)(CounterDependency {
                count: injected.count,
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

impl Debug for TypedCounterPresenter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypedCounterPresenter")
            .field("state", &self.state())
            .field("widgets", &self.widgets())
            .finish()
    }
}
