use crate::{Publisher, Stream, Subscription};
use std::{
    cell::RefCell,
    fmt::{Debug, Formatter},
    rc::Rc,
};

/// A current-value subject. Subscribers to [`Property::stream`] receive the
/// current value immediately and then one value per [`Property::set`] or
/// [`Property::update`], even when the new value equals the old one.
///
/// Values set from inside a handler are delivered after the value being
/// delivered. Until then, [`Property::get`] and new subscribers still see the
/// value that was last delivered, so every observer agrees on the current
/// value at any point.
///
/// ```
/// use viewmodel_injection::Property;
/// use std::{cell::RefCell, rc::Rc};
///
/// let count = Property::new(3);
/// count.set(4);
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let _subscription = count.stream().subscribe({
///     let seen = seen.clone();
///     move |value: &i32| seen.borrow_mut().push(*value)
/// });
///
/// count.update(|value| value + 1);
/// assert_eq!(vec![4, 5], *seen.borrow());
/// ```
pub struct Property<T: 'static> {
    // Last value reaching subscribers.
    delivered: Rc<RefCell<T>>,
    // Last value set, possibly still queued for delivery.
    latest: RefCell<T>,
    publisher: Publisher<T>,
    _delivery: Subscription,
}

impl<T: Clone + 'static> Property<T> {
    /// Creates a property holding `value`.
    #[must_use]
    pub fn new(value: T) -> Self {
        let delivered = Rc::new(RefCell::new(value.clone()));
        let publisher = Publisher::new();

        // Registered first, so the delivered value is updated before any
        // other subscriber sees it.
        let delivery = publisher.stream().subscribe({
            let delivered = Rc::downgrade(&delivered);
            move |value: &T| {
                if let Some(delivered) = delivered.upgrade() {
                    *delivered.borrow_mut() = value.clone();
                }
            }
        });

        Property {
            delivered,
            latest: RefCell::new(value),
            publisher,
            _delivery: delivery,
        }
    }

    /// Gets a copy of the value subscribers currently observe.
    #[must_use]
    pub fn get(&self) -> T {
        self.delivered.borrow().clone()
    }

    /// Replaces the value and publishes it.
    pub fn set(&self, value: T) {
        *self.latest.borrow_mut() = value.clone();
        self.publisher.send(value);
    }

    /// Derives the next value from the last one set and publishes it.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        self.try_update(|value| Some(f(value)));
    }

    /// Like [`Property::update`], except that returning `None` leaves the
    /// value unchanged and publishes nothing. Returns the value set, if any.
    ///
    /// Updates chain on the last value set, so several updates issued from
    /// one handler all take effect.
    pub fn try_update<F>(&self, f: F) -> Option<T>
    where
        F: FnOnce(&T) -> Option<T>,
    {
        let next = f(&self.latest.borrow())?;
        self.set(next.clone());
        Some(next)
    }

    /// A stream replaying the current value to each new subscriber before
    /// forwarding subsequent changes.
    #[must_use]
    pub fn stream(&self) -> Stream<T> {
        let delivered = Rc::downgrade(&self.delivered);
        let changes = self.publisher.stream();
        Stream::from_subscribe(move |handler| match delivered.upgrade() {
            Some(delivered) => {
                let current = delivered.borrow().clone();
                handler(&current);
                changes.subscribe_handler(handler)
            }
            None => Subscription::empty(),
        })
    }
}

impl<T: Clone + Default + 'static> Default for Property<T> {
    fn default() -> Self {
        Property::new(T::default())
    }
}

impl<T: Debug + 'static> Debug for Property<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Property")
            .field("value", &*self.delivered.borrow())
            .field("publisher", &self.publisher)
            .finish()
    }
}
