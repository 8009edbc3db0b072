//! # Lazily injected view-models.
//!
//! A presenter (or view controller) usually knows everything its view-model
//! needs except the one thing that matters most: the event streams of its
//! widgets. Those only exist once the widgets do. This crate shows three
//! ways of injecting the *means* of building a view-model into a presenter,
//! so that the presenter can build it once its widgets are attached.
//!
//! ## Getting started
//!
//! If you just want to see a counter screen working, check out the
//! [getting started guide][getting-started]. For a comparison of the
//! injection styles, see [choosing a factory][choosing].
//!
//! [getting-started]: crate::docs::getting_started
//! [choosing]: crate::docs::choosing_a_factory
//!
//! ## Reactive primitives
//!
//! Everything here is single-threaded and push based. A [`Stream`] is a
//! cloneable, type-erased source of values. A [`Publisher`] pushes values to
//! whoever is currently subscribed, while a [`Property`] also remembers its
//! latest value and replays it to new subscribers. Subscribing returns a
//! [`Subscription`], which unsubscribes when dropped.
//!
//! Delivery is serial. Values sent while subscribers are still handling a
//! previous value are queued and delivered afterwards, in the order they
//! were sent.
//!
//! ## Widgets
//!
//! [`Control`] and [`Label`] are headless stand-ins for UI widgets. A control
//! calls its targets when an event is sent to it, and [`Control::taps`]
//! bridges those calls into a notification stream. Tapping a disabled
//! control does nothing, but [`Control::send_actions`] always reaches the
//! targets.
//!
//! ## Injection styles
//!
//! - [`TupleCounterPresenter`]: the initial count and an [`InitViewModel`]
//!   taking each dependency as its own argument.
//! - [`TypedCounterPresenter`]: the initial count and an [`Initializer`] over a
//!   [`CounterDependency`] bag, produced by a [`StaticViewModelFactory`].
//! - [`FactoryCounterPresenter`]: a [`ViewModelFactory`] object which already
//!   holds the initial count, erased as a [`CounterFactory`].
//!
//! [`PresenterHandle`] wraps all three behind one constructor.
//!
//! ## Example
//!
//! ```
//! use viewmodel_injection::{
//!     CounterPresenter, CounterViewModelFactory, CounterWidgets,
//!     FactoryCounterPresenter,
//! };
//!
//! // Nothing is built yet, the presenter only holds the factory.
//! let mut presenter =
//!     FactoryCounterPresenter::new(CounterViewModelFactory::new(0));
//!
//! // Attaching builds the view-model from the widgets' taps and binds its
//! // outputs back onto the widgets.
//! let widgets = CounterWidgets::new();
//! presenter.attach(widgets.clone()).unwrap();
//! assert_eq!(Some("0".to_owned()), widgets.count_label.text());
//! assert!(!widgets.decrement.is_enabled());
//!
//! widgets.increment.tap();
//! assert_eq!(Some("1".to_owned()), widgets.count_label.text());
//! assert!(widgets.decrement.is_enabled());
//!
//! // Tearing down releases the bindings and the view-model.
//! presenter.detach();
//! widgets.increment.tap();
//! assert_eq!(Some("1".to_owned()), widgets.count_label.text());
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![warn(missing_docs)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::doc_markdown
)]

mod error;
mod factories;
mod presenters;
mod reactive;
mod view_model;
mod widgets;

pub use error::*;
pub use factories::*;
pub use presenters::*;
pub use reactive::*;
pub use view_model::*;
pub use widgets::*;

pub mod docs;

#[cfg(test)]
mod tests;
