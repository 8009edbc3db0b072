mod counter;
mod policy;

pub use counter::*;
pub use policy::*;

use crate::Stream;

/// The outputs a counter presenter binds to its widgets. Presenters only see
/// this interface, so any implementation (including test doubles) can be
/// injected through a factory.
pub trait CounterViewModelType {
    /// The label text. Emits the current text on subscription, then once per
    /// change of the count.
    fn count_text(&self) -> Stream<String>;

    /// Whether the decrement control should accept input. Emits the current
    /// value on subscription, then once per change of the count.
    fn is_decrement_enabled(&self) -> Stream<bool>;
}

impl<T: CounterViewModelType + ?Sized> CounterViewModelType for Box<T> {
    fn count_text(&self) -> Stream<String> {
        (**self).count_text()
    }

    fn is_decrement_enabled(&self) -> Stream<bool> {
        (**self).is_decrement_enabled()
    }
}
