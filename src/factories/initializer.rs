use crate::{
    CounterViewModel, CounterViewModelType, DecrementPolicy, Notifications,
};

/// Builds a counter view-model from its dependencies passed as separate
/// arguments: the initial count, then the increment and decrement
/// notifications.
pub type InitViewModel = Box<
    dyn Fn(i64, Notifications, Notifications) -> Box<dyn CounterViewModelType>,
>;

/// The stock initializer, building a [`CounterViewModel`] that trusts the
/// presenter to disable decrements at zero.
#[must_use]
pub fn tuple_initializer() -> InitViewModel {
    tuple_initializer_with(DecrementPolicy::default())
}

/// Like [`tuple_initializer`], with an explicit decrement policy.
#[must_use]
pub fn tuple_initializer_with(policy: DecrementPolicy) -> InitViewModel {
    Box::new(
        move |count: i64,
              increment: Notifications,
              decrement: Notifications|
              -> Box<dyn CounterViewModelType> {
            tracing::debug!(count, "initializing view-model from arguments");
            Box::new(CounterViewModel::with_policy(
                count, increment, decrement, policy,
            ))
        },
    )
}
