use crate::Subscription;
use std::{
    fmt::{Debug, Formatter},
    rc::Rc,
};

/// A shared callback receiving values pushed by a [`Stream`].
pub type Handler<T> = Rc<dyn Fn(&T)>;

/// A stream of notifications carrying no payload.
pub type Notifications = Stream<()>;

/// A type-erased, push-based stream of values. Cloning a stream is cheap and
/// both clones subscribe to the same source.
///
/// Streams do not buffer: a subscriber only sees values pushed after it
/// subscribed, unless the source itself replays a current value (see
/// [`Property::stream`](crate::Property::stream)).
///
/// ```
/// use viewmodel_injection::Publisher;
/// use std::{cell::RefCell, rc::Rc};
///
/// let taps = Publisher::new();
/// let labels = taps.stream().map(|count: &i64| format!("{} taps", count));
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let _subscription = labels.subscribe({
///     let seen = seen.clone();
///     move |label: &String| seen.borrow_mut().push(label.clone())
/// });
///
/// taps.send(1);
/// taps.send(2);
/// assert_eq!(vec!["1 taps", "2 taps"], *seen.borrow());
/// ```
pub struct Stream<T: 'static> {
    subscribe: Rc<dyn Fn(Handler<T>) -> Subscription>,
}

impl<T: 'static> Stream<T> {
    /// Creates a stream from a function that connects a handler to some
    /// source and returns the subscription tying them together.
    #[must_use]
    pub fn from_subscribe<F>(subscribe: F) -> Self
    where
        F: Fn(Handler<T>) -> Subscription + 'static,
    {
        Stream {
            subscribe: Rc::new(subscribe),
        }
    }

    /// A stream that never emits.
    #[must_use]
    pub fn empty() -> Self {
        Stream::from_subscribe(|_| Subscription::empty())
    }

    /// Subscribes to this stream. The handler is invoked synchronously for
    /// each value until the returned subscription is cancelled or dropped.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&T) + 'static,
    {
        self.subscribe_handler(Rc::new(handler))
    }

    /// Subscribes an already shared handler to this stream.
    pub fn subscribe_handler(&self, handler: Handler<T>) -> Subscription {
        (self.subscribe)(handler)
    }

    /// Transforms each value of this stream.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Stream<U>
    where
        U: 'static,
        F: Fn(&T) -> U + 'static,
    {
        let source = self;
        let f = Rc::new(f);
        Stream::from_subscribe(move |handler: Handler<U>| {
            let f = f.clone();
            source.subscribe(move |value| handler(&f(value)))
        })
    }

    /// Interleaves the values of two streams in the order they are pushed.
    #[must_use]
    pub fn merge(&self, other: &Stream<T>) -> Stream<T> {
        let first = self.clone();
        let second = other.clone();
        Stream::from_subscribe(move |handler: Handler<T>| {
            let first = first.subscribe_handler(handler.clone());
            let second = second.subscribe_handler(handler);
            Subscription::new(move || {
                first.cancel();
                second.cancel();
            })
        })
    }
}

impl<T: 'static> Clone for Stream<T> {
    fn clone(&self) -> Self {
        Stream {
            subscribe: self.subscribe.clone(),
        }
    }
}

impl<T: 'static> Debug for Stream<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stream")
            .field("item", &std::any::type_name::<T>())
            .finish()
    }
}
