use derive_more::{Display, Error};

/// A result from driving a presenter through its lifecycle.
pub type PresentResult<T> = Result<T, PresenterError>;

/// An error caused by using a presenter out of lifecycle order.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Display, Error)]
#[non_exhaustive]
pub enum PresenterError {
    /// Widgets were attached to a presenter that already has its widgets.
    #[display(fmt = "widgets are already attached to this presenter")]
    AlreadyAttached,

    /// Widgets were attached to a presenter that has been detached.
    #[display(fmt = "the presenter was detached and cannot be attached again")]
    Detached,
}

/// The name of a presenter variant could not be parsed.
#[derive(Clone, PartialEq, Eq, Debug, Display, Error)]
#[display(
    fmt = "unknown presenter variant {:?} (expected tuple, typed or factory)",
    _0
)]
pub struct ParseVariantError(#[error(ignore)] pub String);
