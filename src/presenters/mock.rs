use crate::{
    CounterViewModelType, Notifications, Publisher, Stream, Subscription,
};
use std::{cell::Cell, rc::Rc};

/// A view-model whose outputs are driven by hand and whose inputs are
/// forwarded to publishers the test can observe.
pub(crate) struct MockCounterViewModel {
    pub count_text: Publisher<String>,
    pub is_decrement_enabled: Publisher<bool>,
    pub increment: Publisher<()>,
    pub decrement: Publisher<()>,
    pub count: Cell<Option<i64>>,
}

impl MockCounterViewModel {
    pub fn new() -> Rc<Self> {
        Rc::new(MockCounterViewModel {
            count_text: Publisher::new(),
            is_decrement_enabled: Publisher::new(),
            increment: Publisher::new(),
            decrement: Publisher::new(),
            count: Cell::new(None),
        })
    }

    /// Records the injected dependencies and returns the mock as the
    /// presenter's view-model. The inputs stay forwarded until the presenter
    /// drops it.
    pub fn inject(
        self: &Rc<Self>,
        count: Option<i64>,
        increment: &Notifications,
        decrement: &Notifications,
    ) -> Box<dyn CounterViewModelType> {
        self.count.set(count);
        Box::new(Injected {
            mock: self.clone(),
            _inputs: vec![
                forward(increment, &self.increment),
                forward(decrement, &self.decrement),
            ],
        })
    }

    /// Counts the notifications forwarded from one of the inputs.
    pub fn received(input: &Publisher<()>) -> (Rc<Cell<usize>>, Subscription) {
        let received = Rc::new(Cell::new(0));
        let subscription = input.stream().subscribe({
            let received = received.clone();
            move |_| received.set(received.get() + 1)
        });
        (received, subscription)
    }
}

impl CounterViewModelType for Rc<MockCounterViewModel> {
    fn count_text(&self) -> Stream<String> {
        self.count_text.stream()
    }

    fn is_decrement_enabled(&self) -> Stream<bool> {
        self.is_decrement_enabled.stream()
    }
}

struct Injected {
    mock: Rc<MockCounterViewModel>,
    _inputs: Vec<Subscription>,
}

impl CounterViewModelType for Injected {
    fn count_text(&self) -> Stream<String> {
        self.mock.count_text()
    }

    fn is_decrement_enabled(&self) -> Stream<bool> {
        self.mock.is_decrement_enabled()
    }
}

fn forward(stream: &Notifications, to: &Publisher<()>) -> Subscription {
    let to = to.clone();
    stream.subscribe(move |_| to.send(()))
}
