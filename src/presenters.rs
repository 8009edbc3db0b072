mod binding;
mod erased;
mod handle;
mod lifecycle;
#[cfg(test)]
mod mock;
mod tuple;
mod typed;

pub use binding::*;
pub use erased::*;
pub use handle::*;
pub use lifecycle::PresenterState;
pub use tuple::*;
pub use typed::*;

use crate::{CounterViewModelType, CounterWidgets, PresentResult};

/// A view controller for the counter screen.
///
/// A presenter is created with whatever it needs to build its view-model
/// later, but it cannot build it yet: the view-model consumes the widgets'
/// event streams, and the widgets only exist once they are attached.
/// [`CounterPresenter::attach`] therefore performs the construction and
/// binds the view-model's outputs onto the widgets in one step.
pub trait CounterPresenter {
    /// Takes ownership of the widgets, builds the view-model from their event
    /// streams and binds its outputs back onto them. Can only succeed once.
    fn attach(&mut self, widgets: CounterWidgets) -> PresentResult<()>;

    /// Releases the bindings, the view-model and the widgets. Afterwards,
    /// interacting with the widgets has no effect. Returns whether the
    /// presenter was attached.
    fn detach(&mut self) -> bool;

    /// Where this presenter is in its lifecycle.
    fn state(&self) -> PresenterState;

    /// The view-model, available once attached.
    fn view_model(&self) -> Option<&dyn CounterViewModelType>;

    /// The attached widgets.
    fn widgets(&self) -> Option<&CounterWidgets>;

    /// Whether widgets are attached and bound.
    fn is_attached(&self) -> bool {
        self.state() == PresenterState::Attached
    }
}
