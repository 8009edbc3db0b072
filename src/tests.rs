use crate::{
    Control, ControlEvent, CounterPresenter, CounterViewModelType,
    DecrementPolicy, FactorySupplier, Label, PresenterError, PresenterHandle,
    PresenterState, Subscription, Variant,
};
use proptest::prelude::*;
use std::{cell::RefCell, rc::Rc};

struct Screen {
    handle: PresenterHandle,
    increment: Control,
    decrement: Control,
    label: Label,
}

impl Screen {
    fn new(variant: Variant, count: i64) -> Self {
        Screen::with_policy(variant, count, DecrementPolicy::default())
    }

    fn with_policy(
        variant: Variant,
        count: i64,
        policy: DecrementPolicy,
    ) -> Self {
        let mut handle = PresenterHandle::construct(
            count,
            FactorySupplier::default_for(variant, policy),
        );
        let (increment, decrement, label) =
            (Control::new(), Control::new(), Label::new());
        handle
            .attach_widgets(increment.clone(), decrement.clone(), label.clone())
            .unwrap();

        Screen {
            handle,
            increment,
            decrement,
            label,
        }
    }

    fn text(&self) -> Option<String> {
        self.label.text()
    }

    fn view_model(&self) -> &dyn CounterViewModelType {
        self.handle.view_model().unwrap()
    }
}

fn record<T: Clone + 'static>(
    subscribe: impl FnOnce(Box<dyn Fn(&T)>) -> Subscription,
) -> (Rc<RefCell<Vec<T>>>, Subscription) {
    let values = Rc::new(RefCell::new(Vec::new()));
    let subscription = subscribe(Box::new({
        let values = values.clone();
        move |value: &T| values.borrow_mut().push(value.clone())
    }));
    (values, subscription)
}

fn record_text(screen: &Screen) -> (Rc<RefCell<Vec<String>>>, Subscription) {
    record(|handler| screen.view_model().count_text().subscribe(handler))
}

fn record_enabled(screen: &Screen) -> (Rc<RefCell<Vec<bool>>>, Subscription) {
    record(|handler| {
        screen.view_model().is_decrement_enabled().subscribe(handler)
    })
}

#[test]
fn zero_count_scenario() {
    for variant in Variant::ALL {
        let screen = Screen::new(variant, 0);
        assert_eq!(Some("0".to_owned()), screen.text());
        assert!(!screen.decrement.is_enabled());

        assert!(screen.increment.tap());
        assert_eq!(Some("1".to_owned()), screen.text());
        assert!(screen.decrement.is_enabled());

        assert!(screen.decrement.tap());
        assert_eq!(Some("0".to_owned()), screen.text());
        assert!(!screen.decrement.is_enabled());
    }
}

#[test]
fn nonzero_count_scenario() {
    for variant in Variant::ALL {
        let screen = Screen::new(variant, 5);
        assert_eq!(Some("5".to_owned()), screen.text());
        assert!(screen.decrement.is_enabled());
    }
}

#[test]
fn every_notification_emits_both_outputs() {
    for variant in Variant::ALL {
        let screen = Screen::new(variant, 0);
        let (texts, _texts) = record_text(&screen);
        let (enabled, _enabled) = record_enabled(&screen);

        screen.increment.tap();
        screen.increment.tap();
        screen.decrement.tap();

        assert_eq!(vec!["0", "1", "2", "1"], *texts.borrow());
        assert_eq!(vec![false, true, true, true], *enabled.borrow());
    }
}

#[test]
fn late_subscriber_gets_current_state_once() {
    for variant in Variant::ALL {
        let screen = Screen::new(variant, 0);
        screen.increment.tap();
        screen.increment.tap();

        let (texts, _texts) = record_text(&screen);
        let (enabled, _enabled) = record_enabled(&screen);
        assert_eq!(vec!["2"], *texts.borrow());
        assert_eq!(vec![true], *enabled.borrow());
    }
}

#[test]
fn rapid_taps_are_all_counted() {
    for variant in Variant::ALL {
        let screen = Screen::new(variant, 0);
        let (texts, _texts) = record_text(&screen);

        screen.increment.send_actions(ControlEvent::TouchUpInside);
        screen.increment.send_actions(ControlEvent::TouchUpInside);

        assert_eq!(vec!["0", "1", "2"], *texts.borrow());
    }
}

#[test]
fn detach_stops_updates_and_removes_targets() {
    for variant in Variant::ALL {
        let mut screen = Screen::new(variant, 3);
        assert_eq!(1, screen.increment.target_count());
        assert_eq!(1, screen.decrement.target_count());

        assert!(screen.handle.detach());
        assert_eq!(0, screen.increment.target_count());
        assert_eq!(0, screen.decrement.target_count());

        screen.increment.tap();
        screen.decrement.send_actions(ControlEvent::TouchUpInside);
        assert_eq!(Some("3".to_owned()), screen.text());
        assert!(screen.handle.view_model().is_none());
        assert_eq!(PresenterState::Detached, screen.handle.state());
    }
}

#[test]
fn dropping_presenter_removes_targets() {
    for variant in Variant::ALL {
        let Screen {
            handle,
            increment,
            decrement,
            label,
        } = Screen::new(variant, 1);
        drop(handle);

        assert_eq!(0, increment.target_count());
        assert_eq!(0, decrement.target_count());
        increment.tap();
        assert_eq!(Some("1".to_owned()), label.text());
    }
}

#[test]
fn lifecycle_misuse_is_reported() {
    let mut screen = Screen::new(Variant::Tuple, 0);
    assert_eq!(
        Err(PresenterError::AlreadyAttached),
        screen.handle.attach_widgets(
            Control::new(),
            Control::new(),
            Label::new()
        )
    );

    screen.handle.detach();
    assert!(!screen.handle.detach());
    assert_eq!(
        Err(PresenterError::Detached),
        screen.handle.attach_widgets(
            Control::new(),
            Control::new(),
            Label::new()
        )
    );
}

#[test]
fn tap_on_disabled_decrement_is_not_delivered() {
    for variant in Variant::ALL {
        let screen = Screen::new(variant, 0);
        assert!(!screen.decrement.tap());
        assert_eq!(Some("0".to_owned()), screen.text());
    }
}

#[test]
fn programmatic_decrement_at_zero_depends_on_policy() {
    for variant in Variant::ALL {
        let trusting = Screen::new(variant, 0);
        trusting.decrement.send_actions(ControlEvent::TouchUpInside);
        assert_eq!(Some("-1".to_owned()), trusting.text());
        assert!(!trusting.decrement.is_enabled());

        let flooring =
            Screen::with_policy(variant, 0, DecrementPolicy::FloorAtZero);
        let (texts, _texts) = record_text(&flooring);
        flooring.decrement.send_actions(ControlEvent::TouchUpInside);
        assert_eq!(Some("0".to_owned()), flooring.text());
        assert_eq!(vec!["0"], *texts.borrow());
    }
}

fn arb_variant() -> impl Strategy<Value = Variant> {
    prop_oneof![
        Just(Variant::Tuple),
        Just(Variant::Typed),
        Just(Variant::Factory),
    ]
}

proptest! {
    #[test]
    fn label_shows_running_sum(
        variant in arb_variant(),
        initial in -1_000i64..1_000,
        steps in proptest::collection::vec(any::<bool>(), 0..64),
    ) {
        let screen = Screen::new(variant, initial);
        let mut expected = initial;
        for increment in steps {
            let control = if increment {
                expected += 1;
                &screen.increment
            } else {
                expected -= 1;
                &screen.decrement
            };
            control.send_actions(ControlEvent::TouchUpInside);

            prop_assert_eq!(Some(expected.to_string()), screen.text());
            prop_assert_eq!(expected > 0, screen.decrement.is_enabled());
        }
    }

    #[test]
    fn taps_never_go_below_zero(
        variant in arb_variant(),
        initial in 0i64..20,
        steps in proptest::collection::vec(any::<bool>(), 0..64),
    ) {
        let screen = Screen::new(variant, initial);
        let mut expected = initial;
        for increment in steps {
            if increment {
                screen.increment.tap();
                expected += 1;
            } else if screen.decrement.tap() {
                expected -= 1;
            }

            prop_assert!(expected >= 0);
            prop_assert_eq!(Some(expected.to_string()), screen.text());
        }
    }
}
