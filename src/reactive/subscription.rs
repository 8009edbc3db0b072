use std::fmt::{Debug, Formatter};

/// A handle to an active subscription. Dropping the handle cancels the
/// subscription, so it must be kept alive for as long as values should be
/// received.
///
/// ```
/// use viewmodel_injection::{Publisher, Subscription};
/// use std::{cell::Cell, rc::Rc};
///
/// let publisher = Publisher::new();
/// let received = Rc::new(Cell::new(0));
///
/// let subscription = publisher.stream().subscribe({
///     let received = received.clone();
///     move |value: &i32| received.set(*value)
/// });
///
/// publisher.send(4);
/// subscription.cancel();
/// publisher.send(5);
///
/// assert_eq!(4, received.get());
/// ```
#[must_use = "dropping a subscription cancels it"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Creates a subscription which runs `cancel` exactly once, either when
    /// [`Subscription::cancel`] is called or when the handle is dropped.
    pub fn new<F>(cancel: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Subscription {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Creates a subscription that is not connected to anything.
    pub fn empty() -> Self {
        Subscription { cancel: None }
    }

    /// Cancels the subscription.
    pub fn cancel(mut self) {
        self.run_cancel();
    }

    /// Moves this subscription into a bag of subscriptions that are released
    /// together.
    pub fn store_in(self, bag: &mut Vec<Subscription>) {
        bag.push(self);
    }

    /// Whether cancelling this subscription still has an effect.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

impl Debug for Subscription {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
