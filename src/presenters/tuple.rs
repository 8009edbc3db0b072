use crate::{
    presenters::lifecycle::Lifecycle, CounterPresenter, CounterViewModelType,
    CounterWidgets, InitViewModel, PresentResult, PresenterState,
};
use std::fmt::{Debug, Formatter};

struct Injected {
    count: i64,
    init_view_model: InitViewModel,
}

/// A counter presenter injected with the initial count and an initializer
/// taking the view-model's dependencies as separate arguments.
///
/// ```
/// use viewmodel_injection::{
///     tuple_initializer, CounterPresenter, CounterWidgets,
///     TupleCounterPresenter,
/// };
///
/// let mut presenter = TupleCounterPresenter::new(0, tuple_initializer());
/// let widgets = CounterWidgets::new();
/// presenter.attach(widgets.clone()).unwrap();
///
/// widgets.increment.tap();
/// assert_eq!(Some("1".to_owned()), widgets.count_label.text());
/// assert!(widgets.decrement.is_enabled());
/// ```
pub struct TupleCounterPresenter {
    lifecycle: Lifecycle<Injected>,
}

impl TupleCounterPresenter {
    /// Creates an unattached presenter.
    #[must_use]
    pub fn new(count: i64, init_view_model: InitViewModel) -> Self {
        TupleCounterPresenter {
            lifecycle: Lifecycle::Unattached(Injected {
                count,
                init_view_model,
            }),
        }
    }

    /// The count the view-model will start from, until it has been built.
    #[must_use]
    pub fn initial_count(&self) -> Option<i64> {
        self.lifecycle.injected().map(|injected| injected.count)
    }
}

impl CounterPresenter for TupleCounterPresenter {
    fn attach(&mut self, widgets: CounterWidgets) -> PresentResult<()> {
        self.lifecycle.attach(widgets, |injected, widgets| {
            (injected.init_view_model)(
                injected.count,
                widgets.increment.taps(),
                widgets.decrement.taps(),
            )
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

impl Debug for TupleCounterPresenter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TupleCounterPresenter")
            .field("state", &self.state())
            .field("widgets", &self.widgets())
            .finish()
    }
}
