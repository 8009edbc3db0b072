use crate::{
    tuple_initializer_with, AnyViewModelFactory, Control, CounterFactory,
    CounterInitializer, CounterPresenter, CounterViewModelFactory,
    CounterViewModelInitializer, CounterViewModelType, CounterWidgets,
    DecrementPolicy, FactoryCounterPresenter, InitViewModel, Label,
    ParseVariantError, PresentResult, PresenterState, TupleCounterPresenter,
    TypedCounterPresenter,
};
use derive_more::Display;
use std::{
    fmt::{Debug, Formatter},
    str::FromStr,
};

/// The ways a counter presenter can be given its view-model.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display)]
pub enum Variant {
    /// The initial count and an [`InitViewModel`] taking the dependencies as
    /// separate arguments.
    #[display(fmt = "tuple")]
    Tuple,

    /// The initial count and an initializer over a
    /// [`CounterDependency`](crate::CounterDependency) bag.
    #[display(fmt = "typed")]
    Typed,

    /// A [`CounterFactory`] already holding the initial count.
    #[display(fmt = "factory")]
    Factory,
}

impl Variant {
    /// Every variant, in declaration order.
    pub const ALL: [Variant; 3] =
        [Variant::Tuple, Variant::Typed, Variant::Factory];
}

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Variant::ALL
            .into_iter()
            .find(|variant| variant.to_string().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseVariantError(s.to_owned()))
    }
}

/// What a [`PresenterHandle`] is constructed with. Each case carries the
/// injection of the matching [`Variant`].
pub enum FactorySupplier {
    /// Injection for a [`TupleCounterPresenter`].
    Tuple(InitViewModel),

    /// Injection for a [`TypedCounterPresenter`].
    Typed(CounterViewModelInitializer),

    /// Produces the factory for a [`FactoryCounterPresenter`] from the
    /// initial count.
    Factory(Box<dyn FnOnce(i64) -> CounterFactory>),
}

impl FactorySupplier {
    /// The stock injection for `variant`, building [`CounterViewModel`]s
    /// that apply `policy`.
    ///
    /// [`CounterViewModel`]: crate::CounterViewModel
    #[must_use]
    pub fn default_for(variant: Variant, policy: DecrementPolicy) -> Self {
        match variant {
            Variant::Tuple => {
                FactorySupplier::Tuple(tuple_initializer_with(policy))
            }
            Variant::Typed => {
                FactorySupplier::Typed(CounterInitializer::with_policy(policy))
            }
            Variant::Factory => FactorySupplier::factory(move |count| {
                AnyViewModelFactory::new(CounterViewModelFactory::with_policy(
                    count, policy,
                ))
            }),
        }
    }

    /// Wraps a closure producing the factory from the initial count.
    #[must_use]
    pub fn factory<F>(supply: F) -> Self
    where
        F: FnOnce(i64) -> CounterFactory + 'static,
    {
        FactorySupplier::Factory(Box::new(supply))
    }

    /// The variant this supplier constructs.
    #[must_use]
    pub fn variant(&self) -> Variant {
        match self {
            FactorySupplier::Tuple(_) => Variant::Tuple,
            FactorySupplier::Typed(_) => Variant::Typed,
            FactorySupplier::Factory(_) => Variant::Factory,
        }
    }
}

impl Debug for FactorySupplier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FactorySupplier")
            .field(&self.variant())
            .finish()
    }
}

/// A counter presenter of any [`Variant`], constructed through one entry
/// point.
///
/// ```
/// use viewmodel_injection::{
///     Control, DecrementPolicy, FactorySupplier, Label, PresenterHandle,
///     Variant,
/// };
///
/// for variant in Variant::ALL {
///     let supplier =
///         FactorySupplier::default_for(variant, DecrementPolicy::default());
///     let mut handle = PresenterHandle::construct(0, supplier);
///     assert_eq!(variant, handle.variant());
///
///     let (increment, decrement, label) =
///         (Control::new(), Control::new(), Label::new());
///     handle
///         .attach_widgets(increment.clone(), decrement.clone(), label.clone())
///         .unwrap();
///
///     increment.tap();
///     assert_eq!(Some("1".to_owned()), label.text());
///     decrement.tap();
///     assert_eq!(Some("0".to_owned()), label.text());
///     assert!(!decrement.is_enabled());
/// }
/// ```
#[derive(Debug)]
pub enum PresenterHandle {
    /// See [`Variant::Tuple`].
    Tuple(TupleCounterPresenter),
    /// See [`Variant::Typed`].
    Typed(TypedCounterPresenter),
    /// See [`Variant::Factory`].
    Factory(FactoryCounterPresenter),
}

impl PresenterHandle {
    /// Creates an unattached presenter. No view-model is built until widgets
    /// are attached.
    #[must_use]
    pub fn construct(initial_count: i64, supplier: FactorySupplier) -> Self {
        tracing::debug!(
            variant = %supplier.variant(),
            initial_count,
            "constructing counter presenter"
        );

        match supplier {
            FactorySupplier::Tuple(init_view_model) => PresenterHandle::Tuple(
                TupleCounterPresenter::new(initial_count, init_view_model),
            ),
            FactorySupplier::Typed(initializer) => PresenterHandle::Typed(
                TypedCounterPresenter::new(initial_count, initializer),
            ),
            FactorySupplier::Factory(supply) => PresenterHandle::Factory(
                FactoryCounterPresenter::from_any(supply(initial_count)),
            ),
        }
    }

    /// Attaches the increment control, the decrement control and the count
    /// label, building and binding the view-model.
    pub fn attach_widgets(
        &mut self,
        increment: Control,
        decrement: Control,
        label: Label,
    ) -> PresentResult<()> {
        self.attach(CounterWidgets {
            increment,
            decrement,
            count_label: label,
        })
    }

    /// Which variant this presenter is.
    #[must_use]
    pub fn variant(&self) -> Variant {
        match self {
            PresenterHandle::Tuple(_) => Variant::Tuple,
            PresenterHandle::Typed(_) => Variant::Typed,
            PresenterHandle::Factory(_) => Variant::Factory,
        }
    }

    fn presenter(&self) -> &dyn CounterPresenter {
        match self {
            PresenterHandle::Tuple(presenter) => presenter,
            PresenterHandle::Typed(presenter) => presenter,
            PresenterHandle::Factory(presenter) => presenter,
        }
    }

    fn presenter_mut(&mut self) -> &mut dyn CounterPresenter {
        match self {
            PresenterHandle::Tuple(presenter) => presenter,
            PresenterHandle::Typed(presenter) => presenter,
            PresenterHandle::Factory(presenter) => presenter,
        }
    }
}

impl CounterPresenter for PresenterHandle {
    fn attach(&mut self, widgets: CounterWidgets) -> PresentResult<()> {
        self.presenter_mut().attach(widgets)
    }

    fn detach(&mut self) -> bool {
        self.presenter_mut().detach()
    }

    fn state(&self) -> PresenterState {
        self.presenter().state()
    }

    fn view_model(&self) -> Option<&dyn CounterViewModelType> {
        self.presenter().view_model()
    }

    fn widgets(&self) -> Option<&CounterWidgets> {
        self.presenter().widgets()
    }
}
