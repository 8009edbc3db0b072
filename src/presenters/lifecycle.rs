use crate::{
    bind, CounterViewModelType, CounterWidgets, PresentResult,
    PresenterError, Subscription,
};
use derive_more::Display;

/// The lifecycle of a presenter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display)]
pub enum PresenterState {
    /// Created, waiting for widgets. No view-model exists yet.
    #[display(fmt = "unattached")]
    Unattached,

    /// Widgets attached, view-model built and bound.
    #[display(fmt = "attached")]
    Attached,

    /// Torn down. Nothing is bound anymore.
    #[display(fmt = "detached")]
    Detached,
}

// Fields drop in declaration order: bindings stop widget updates before the
// view-model releases its control targets.
pub(crate) struct Screen {
    bindings: Vec<Subscription>,
    view_model: Box<dyn CounterViewModelType>,
    widgets: CounterWidgets,
}

/// `P` is whatever the presenter was injected with, held until the view-model
/// can be built from it.
pub(crate) enum Lifecycle<P> {
    Unattached(P),
    Attached(Screen),
    Detached,
}

impl<P> Lifecycle<P> {
    pub(crate) fn attach<F>(
        &mut self,
        widgets: CounterWidgets,
        build: F,
    ) -> PresentResult<()>
    where
        F: FnOnce(P, &CounterWidgets) -> Box<dyn CounterViewModelType>,
    {
        match std::mem::replace(self, Lifecycle::Detached) {
            Lifecycle::Unattached(injected) => {
                let view_model = build(injected, &widgets);
                let bindings = bind(&*view_model, &widgets);
                tracing::debug!(
                    bindings = bindings.len(),
                    "attached widgets to counter presenter"
                );

                *self = Lifecycle::Attached(Screen {
                    bindings,
                    view_model,
                    widgets,
                });
                Ok(())
            }
            attached @ Lifecycle::Attached(_) => {
                *self = attached;
                Err(PresenterError::AlreadyAttached)
            }
            Lifecycle::Detached => Err(PresenterError::Detached),
        }
    }

    pub(crate) fn detach(&mut self) -> bool {
        let was_attached = matches!(self, Lifecycle::Attached(_));
        *self = Lifecycle::Detached;
        if was_attached {
            tracing::debug!("detached counter presenter");
        }
        was_attached
    }

    pub(crate) fn state(&self) -> PresenterState {
        match self {
            Lifecycle::Unattached(_) => PresenterState::Unattached,
            Lifecycle::Attached(_) => PresenterState::Attached,
            Lifecycle::Detached => PresenterState::Detached,
        }
    }

    pub(crate) fn view_model(&self) -> Option<&dyn CounterViewModelType> {
        match self {
            Lifecycle::Attached(screen) => Some(&*screen.view_model),
            _ => None,
        }
    }

    pub(crate) fn widgets(&self) -> Option<&CounterWidgets> {
        match self {
            Lifecycle::Attached(screen) => Some(&screen.widgets),
            _ => None,
        }
    }

    pub(crate) fn injected(&self) -> Option<&P> {
        match self {
            Lifecycle::Unattached(injected) => Some(injected),
            _ => None,
        }
    }
}
