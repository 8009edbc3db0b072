use crate::{
    CounterViewModel, CounterViewModelType, DecrementPolicy, Notifications,
};
use std::fmt::{Debug, Formatter};

/// A boxed initializer turning a dependency bag into a view-model.
pub type Initializer<D, VM> = Box<dyn Fn(D) -> VM>;

/// A factory that needs no state of its own: the whole dependency bag is
/// passed to [`StaticViewModelFactory::initialize`]. Presenters receive the
/// factory as an [`Initializer`], so the bag type is shared between the
/// presenter and the factory instead of being spelled out at each call site.
pub trait StaticViewModelFactory {
    /// Everything needed to build the view-model.
    type Dependency;

    /// The view-model produced.
    type ViewModel;

    /// Builds a view-model from its dependencies.
    fn initialize(dependency: Self::Dependency) -> Self::ViewModel;

    /// Boxes [`StaticViewModelFactory::initialize`] as an [`Initializer`].
    #[must_use]
    fn initializer() -> Initializer<Self::Dependency, Self::ViewModel>
    where
        Self: Sized + 'static,
    {
        Box::new(Self::initialize)
    }
}

/// The dependency bag of a counter view-model.
pub struct CounterDependency {
    /// The count shown before any interaction.
    pub count: i64,
    /// Fires once per increment interaction.
    pub increment: Notifications,
    /// Fires once per decrement interaction.
    pub decrement: Notifications,
}

impl Debug for CounterDependency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CounterDependency")
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}

impl From<CounterDependency> for CounterViewModel {
    fn from(dependency: CounterDependency) -> Self {
        initialize_with(dependency, DecrementPolicy::default())
    }
}

fn initialize_with(
    dependency: CounterDependency,
    policy: DecrementPolicy,
) -> CounterViewModel {
    tracing::debug!(
        count = dependency.count,
        %policy,
        "initializing view-model from dependency bag"
    );
    CounterViewModel::with_policy(
        dependency.count,
        dependency.increment,
        dependency.decrement,
        policy,
    )
}

/// Builds [`CounterViewModel`]s from a [`CounterDependency`].
///
/// ```
/// use viewmodel_injection::{
///     CounterDependency, CounterInitializer, CounterViewModelType, Publisher,
///     StaticViewModelFactory,
/// };
/// use std::{cell::RefCell, rc::Rc};
///
/// let initialize = CounterInitializer::initializer();
/// let view_model = initialize(CounterDependency {
///     count: 5,
///     increment: Publisher::new().stream(),
///     decrement: Publisher::new().stream(),
/// });
///
/// let enabled = Rc::new(RefCell::new(None));
/// let _subscription = view_model.is_decrement_enabled().subscribe({
///     let enabled = enabled.clone();
///     move |value: &bool| *enabled.borrow_mut() = Some(*value)
/// });
/// assert_eq!(Some(true), *enabled.borrow());
/// ```
#[derive(Debug)]
pub enum CounterInitializer {}

impl CounterInitializer {
    /// An initializer applying `policy` to the view-models it builds.
    #[must_use]
    pub fn with_policy(
        policy: DecrementPolicy,
    ) -> Initializer<CounterDependency, Box<dyn CounterViewModelType>> {
        Box::new(
            move |dependency: CounterDependency| -> Box<dyn CounterViewModelType> {
                Box::new(initialize_with(dependency, policy))
            },
        )
    }
}

impl StaticViewModelFactory for CounterInitializer {
    type Dependency = CounterDependency;
    type ViewModel = Box<dyn CounterViewModelType>;

    fn initialize(dependency: Self::Dependency) -> Self::ViewModel {
        Box::new(CounterViewModel::from(dependency))
    }
}
