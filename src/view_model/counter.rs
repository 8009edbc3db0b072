use crate::{
    CounterViewModelType, DecrementPolicy, Notifications, Property, Stream,
    Subscription,
};
use std::{
    fmt::{Debug, Formatter},
    rc::{Rc, Weak},
};

#[derive(Clone, Copy, Debug)]
enum Step {
    Increment,
    Decrement,
}

/// The counter view-model. Owns the count, applies increment and decrement
/// notifications in arrival order and publishes the derived label text and
/// decrement enablement.
///
/// ```
/// use viewmodel_injection::{CounterViewModel, CounterViewModelType, Publisher};
/// use std::{cell::RefCell, rc::Rc};
///
/// let increment = Publisher::new();
/// let decrement = Publisher::new();
/// let view_model =
///     CounterViewModel::new(0, increment.stream(), decrement.stream());
///
/// let texts = Rc::new(RefCell::new(Vec::new()));
/// let _subscription = view_model.count_text().subscribe({
///     let texts = texts.clone();
///     move |text: &String| texts.borrow_mut().push(text.clone())
/// });
///
/// increment.send(());
/// increment.send(());
/// decrement.send(());
/// assert_eq!(vec!["0", "1", "2", "1"], *texts.borrow());
/// ```
pub struct CounterViewModel {
    count: Rc<Property<i64>>,
    policy: DecrementPolicy,
    _subscriptions: Vec<Subscription>,
}

impl CounterViewModel {
    /// Creates a view-model that trusts the presenter to disable decrements
    /// at zero.
    #[must_use]
    pub fn new(
        count: i64,
        increment: Notifications,
        decrement: Notifications,
    ) -> Self {
        CounterViewModel::with_policy(
            count,
            increment,
            decrement,
            DecrementPolicy::default(),
        )
    }

    /// Creates a view-model with an explicit decrement policy.
    #[must_use]
    pub fn with_policy(
        count: i64,
        increment: Notifications,
        decrement: Notifications,
        policy: DecrementPolicy,
    ) -> Self {
        let store = Rc::new(Property::new(count));
        let steps = increment
            .map(|_| Step::Increment)
            .merge(&decrement.map(|_| Step::Decrement));

        let mut subscriptions = Vec::new();
        steps
            .subscribe({
                let store: Weak<Property<i64>> = Rc::downgrade(&store);
                move |step| {
                    if let Some(store) = store.upgrade() {
                        apply(&store, *step, policy);
                    }
                }
            })
            .store_in(&mut subscriptions);

        tracing::debug!(count, %policy, "created counter view-model");
        CounterViewModel {
            count: store,
            policy,
            _subscriptions: subscriptions,
        }
    }

    /// The current count.
    #[must_use]
    pub fn count(&self) -> i64 {
        self.count.get()
    }

    /// How decrements at zero are handled.
    #[must_use]
    pub fn policy(&self) -> DecrementPolicy {
        self.policy
    }
}

fn apply(store: &Property<i64>, step: Step, policy: DecrementPolicy) {
    store.try_update(|&current| {
        let next = match step {
            Step::Increment => Some(current.saturating_add(1)),
            Step::Decrement => policy.decrement(current),
        };

        match next {
            Some(to) => tracing::trace!(?step, from = current, to, "count changed"),
            None => tracing::trace!(?step, current, "step ignored at floor"),
        }
        next
    });
}

impl CounterViewModelType for CounterViewModel {
    fn count_text(&self) -> Stream<String> {
        self.count.stream().map(ToString::to_string)
    }

    fn is_decrement_enabled(&self) -> Stream<bool> {
        self.count.stream().map(|count| *count > 0)
    }
}

impl Debug for CounterViewModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CounterViewModel")
            .field("count", &self.count())
            .field("policy", &self.policy)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        CounterViewModel, CounterViewModelType, DecrementPolicy, Publisher,
        Stream,
    };
    use std::{cell::RefCell, rc::Rc};

    struct Inputs {
        increment: Publisher<()>,
        decrement: Publisher<()>,
    }

    fn make(count: i64, policy: DecrementPolicy) -> (Inputs, CounterViewModel) {
        let inputs = Inputs {
            increment: Publisher::new(),
            decrement: Publisher::new(),
        };
        let view_model = CounterViewModel::with_policy(
            count,
            inputs.increment.stream(),
            inputs.decrement.stream(),
            policy,
        );
        (inputs, view_model)
    }

    fn record<T: Clone + 'static>(
        stream: &Stream<T>,
    ) -> (Rc<RefCell<Vec<T>>>, crate::Subscription) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let subscription = stream.subscribe({
            let seen = seen.clone();
            move |value: &T| seen.borrow_mut().push(value.clone())
        });
        (seen, subscription)
    }

    #[test]
    fn starts_at_zero_with_decrement_disabled() {
        let (inputs, view_model) = make(0, DecrementPolicy::TrustControl);
        let (texts, _texts) = record(&view_model.count_text());
        let (enabled, _enabled) = record(&view_model.is_decrement_enabled());

        inputs.increment.send(());
        inputs.decrement.send(());

        assert_eq!(vec!["0", "1", "0"], *texts.borrow());
        assert_eq!(vec![false, true, false], *enabled.borrow());
    }

    #[test]
    fn starts_at_five_with_decrement_enabled() {
        let (_inputs, view_model) = make(5, DecrementPolicy::TrustControl);
        let (texts, _texts) = record(&view_model.count_text());
        let (enabled, _enabled) = record(&view_model.is_decrement_enabled());

        assert_eq!(vec!["5"], *texts.borrow());
        assert_eq!(vec![true], *enabled.borrow());
    }

    #[test]
    fn late_subscriber_gets_current_state_first() {
        let (inputs, view_model) = make(0, DecrementPolicy::TrustControl);
        inputs.increment.send(());
        inputs.increment.send(());

        let (texts, _texts) = record(&view_model.count_text());
        assert_eq!(vec!["2"], *texts.borrow());
        assert_eq!(2, view_model.count());
    }

    #[test]
    fn trust_control_lets_count_go_negative() {
        let (inputs, view_model) = make(0, DecrementPolicy::TrustControl);
        let (texts, _texts) = record(&view_model.count_text());

        inputs.decrement.send(());
        assert_eq!(vec!["0", "-1"], *texts.borrow());
        assert_eq!(-1, view_model.count());
    }

    #[test]
    fn floor_at_zero_ignores_decrement_without_emitting() {
        let (inputs, view_model) = make(0, DecrementPolicy::FloorAtZero);
        let (texts, _texts) = record(&view_model.count_text());
        let (enabled, _enabled) = record(&view_model.is_decrement_enabled());

        inputs.decrement.send(());
        inputs.increment.send(());
        inputs.decrement.send(());
        inputs.decrement.send(());

        assert_eq!(vec!["0", "1", "0"], *texts.borrow());
        assert_eq!(vec![false, true, false], *enabled.borrow());
        assert_eq!(0, view_model.count());
    }

    #[test]
    fn dropping_view_model_releases_inputs() {
        let (inputs, view_model) = make(0, DecrementPolicy::TrustControl);
        assert_eq!(1, inputs.increment.subscriber_count());
        assert_eq!(1, inputs.decrement.subscriber_count());

        drop(view_model);
        assert_eq!(0, inputs.increment.subscriber_count());
        assert_eq!(0, inputs.decrement.subscriber_count());
    }

    #[test]
    fn every_step_is_published_in_arrival_order() {
        let (inputs, view_model) = make(0, DecrementPolicy::TrustControl);
        let (texts, _texts) = record(&view_model.count_text());

        for _ in 0..3 {
            inputs.increment.send(());
        }
        inputs.decrement.send(());
        assert_eq!(vec!["0", "1", "2", "3", "2"], *texts.borrow());
    }

    #[test]
    fn steps_sent_from_an_output_handler_all_apply() {
        let (inputs, view_model) = make(0, DecrementPolicy::TrustControl);
        let _reentrant = view_model.count_text().subscribe({
            let increment = inputs.increment.clone();
            move |text: &String| {
                if text == "1" {
                    increment.send(());
                    increment.send(());
                }
            }
        });

        let observed = Rc::new(RefCell::new(Vec::new()));
        let view_model = Rc::new(view_model);
        let _observer = view_model.count_text().subscribe({
            let view_model = Rc::downgrade(&view_model);
            let observed = observed.clone();
            move |text: &String| {
                if let Some(view_model) = view_model.upgrade() {
                    observed
                        .borrow_mut()
                        .push((text.clone(), view_model.count().to_string()));
                }
            }
        });

        inputs.increment.send(());
        let texts: Vec<_> =
            observed.borrow().iter().map(|(text, _)| text.clone()).collect();
        assert_eq!(vec!["0", "1", "2", "3"], texts);
        assert!(observed.borrow().iter().all(|(text, count)| text == count));
        assert_eq!(3, view_model.count());
    }
}
