use crate::{
    CounterViewModel, CounterViewModelType, DecrementPolicy, Notifications,
};
use std::fmt::{Debug, Formatter};

/// A factory object producing view-models from a dependency bag. All
/// closures taking the bag are factories automatically, so test doubles can
/// be written inline.
///
/// ## Type parameters
/// * `D` - The dependency bag consumed by [`ViewModelFactory::initialize`].
///
/// ## Example
///
/// ```
/// use viewmodel_injection::{Publisher, TapEvents, ViewModelFactory};
///
/// let factory = |events: TapEvents| events.increment;
/// let taps = Publisher::new();
/// let _increment = factory.initialize(TapEvents {
///     increment: taps.stream(),
///     decrement: Publisher::new().stream(),
/// });
/// ```
pub trait ViewModelFactory<D> {
    /// The view-model produced.
    type ViewModel;

    /// Builds a view-model from its dependencies.
    fn initialize(&self, dependency: D) -> Self::ViewModel;
}

impl<D, VM, F> ViewModelFactory<D> for F
where
    F: Fn(D) -> VM,
{
    type ViewModel = VM;

    fn initialize(&self, dependency: D) -> VM {
        self(dependency)
    }
}

/// A type-erased [`ViewModelFactory`]. Whoever holds one depends only on
/// the dependency and view-model types, never on the concrete factory.
pub struct AnyViewModelFactory<D, VM> {
    initialize: Box<dyn Fn(D) -> VM>,
}

impl<D: 'static, VM: 'static> AnyViewModelFactory<D, VM> {
    /// Erases the concrete type of `factory`.
    #[must_use]
    pub fn new<F>(factory: F) -> Self
    where
        F: ViewModelFactory<D, ViewModel = VM> + 'static,
    {
        AnyViewModelFactory {
            initialize: Box::new(move |dependency: D| -> VM {
                factory.initialize(dependency)
            }),
        }
    }
}

impl<D, VM> ViewModelFactory<D> for AnyViewModelFactory<D, VM> {
    type ViewModel = VM;

    fn initialize(&self, dependency: D) -> VM {
        (self.initialize)(dependency)
    }
}

impl<D, VM> Debug for AnyViewModelFactory<D, VM> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnyViewModelFactory")
            .field("dependency", &std::any::type_name::<D>())
            .field("view_model", &std::any::type_name::<VM>())
            .finish()
    }
}

/// The event streams a counter view-model consumes. The initial count is
/// not part of the bag; it belongs to the factory.
pub struct TapEvents {
    /// Fires once per increment interaction.
    pub increment: Notifications,
    /// Fires once per decrement interaction.
    pub decrement: Notifications,
}

impl Debug for TapEvents {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TapEvents").finish_non_exhaustive()
    }
}

/// The erased factory type counter presenters depend on.
pub type CounterFactory =
    AnyViewModelFactory<TapEvents, Box<dyn CounterViewModelType>>;

/// Builds [`CounterViewModel`]s starting from a fixed count.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CounterViewModelFactory {
    count: i64,
    policy: DecrementPolicy,
}

impl CounterViewModelFactory {
    /// A factory for view-models starting at `count`.
    #[must_use]
    pub fn new(count: i64) -> Self {
        CounterViewModelFactory::with_policy(count, DecrementPolicy::default())
    }

    /// A factory for view-models starting at `count` and applying `policy`.
    #[must_use]
    pub fn with_policy(count: i64, policy: DecrementPolicy) -> Self {
        CounterViewModelFactory { count, policy }
    }

    /// The count the produced view-models start from.
    #[must_use]
    pub fn count(&self) -> i64 {
        self.count
    }
}

impl ViewModelFactory<TapEvents> for CounterViewModelFactory {
    type ViewModel = Box<dyn CounterViewModelType>;

    fn initialize(&self, dependency: TapEvents) -> Self::ViewModel {
        tracing::debug!(
            count = self.count,
            policy = %self.policy,
            "initializing view-model from factory"
        );
        Box::new(CounterViewModel::with_policy(
            self.count,
            dependency.increment,
            dependency.decrement,
            self.policy,
        ))
    }
}
