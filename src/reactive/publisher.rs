use crate::{Handler, Stream, Subscription};
use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    fmt::{Debug, Formatter},
    rc::{Rc, Weak},
};

struct Subscriber<T> {
    id: u64,
    active: Cell<bool>,
    handler: Handler<T>,
}

struct Registry<T> {
    next_id: u64,
    subscribers: Vec<Rc<Subscriber<T>>>,
    pending: VecDeque<T>,
    delivering: bool,
}

/// A pass-through subject. Each value sent is delivered to the subscribers
/// registered at that moment, in registration order, and then forgotten.
///
/// Delivery is strictly serial. A value sent from inside a handler is queued
/// and delivered once the current value has reached every subscriber, so all
/// subscribers observe the same order and no value is skipped or coalesced.
pub struct Publisher<T: 'static> {
    registry: Rc<RefCell<Registry<T>>>,
}

impl<T: 'static> Publisher<T> {
    /// Creates a publisher with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Publisher {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                subscribers: Vec::new(),
                pending: VecDeque::new(),
                delivering: false,
            })),
        }
    }

    /// Delivers a value to every current subscriber.
    pub fn send(&self, value: T) {
        {
            let mut registry = self.registry.borrow_mut();
            registry.pending.push_back(value);
            if registry.delivering {
                return;
            }
            registry.delivering = true;
        }

        loop {
            let (value, subscribers) = {
                let mut registry = self.registry.borrow_mut();
                match registry.pending.pop_front() {
                    Some(value) => (value, registry.subscribers.clone()),
                    None => {
                        registry.delivering = false;
                        return;
                    }
                }
            };

            for subscriber in &subscribers {
                if subscriber.active.get() {
                    (subscriber.handler)(&value);
                }
            }
        }
    }

    /// A stream of the values sent through this publisher. The stream only
    /// holds the publisher weakly; subscribing after the publisher is gone
    /// yields an inert subscription.
    #[must_use]
    pub fn stream(&self) -> Stream<T> {
        let registry = Rc::downgrade(&self.registry);
        Stream::from_subscribe(move |handler| match registry.upgrade() {
            Some(registry) => register(&registry, handler),
            None => Subscription::empty(),
        })
    }

    /// The number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().subscribers.len()
    }
}

fn register<T: 'static>(
    registry: &Rc<RefCell<Registry<T>>>,
    handler: Handler<T>,
) -> Subscription {
    let subscriber = {
        let mut registry = registry.borrow_mut();
        let subscriber = Rc::new(Subscriber {
            id: registry.next_id,
            active: Cell::new(true),
            handler,
        });
        registry.next_id += 1;
        registry.subscribers.push(subscriber.clone());
        subscriber
    };

    let registry: Weak<RefCell<Registry<T>>> = Rc::downgrade(registry);
    Subscription::new(move || {
        subscriber.active.set(false);
        if let Some(registry) = registry.upgrade() {
            registry
                .borrow_mut()
                .subscribers
                .retain(|other| other.id != subscriber.id);
        }
    })
}

impl<T: 'static> Clone for Publisher<T> {
    fn clone(&self) -> Self {
        Publisher {
            registry: self.registry.clone(),
        }
    }
}

impl<T: 'static> Default for Publisher<T> {
    fn default() -> Self {
        Publisher::new()
    }
}

impl<T: 'static> Debug for Publisher<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Publisher")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
