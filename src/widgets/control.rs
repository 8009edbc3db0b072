use derive_more::Display;
use std::{
    cell::{Cell, RefCell},
    fmt::{Debug, Formatter},
    rc::{Rc, Weak},
};

/// The kinds of interaction a [`Control`] reports.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display)]
pub enum ControlEvent {
    /// A touch started inside the control.
    #[display(fmt = "touch down")]
    TouchDown,

    /// A touch ended inside the control. This is what a tap produces.
    #[display(fmt = "touch up inside")]
    TouchUpInside,

    /// The control's primary action fired, whatever the input method.
    #[display(fmt = "primary action triggered")]
    PrimaryActionTriggered,
}

/// Identifies a target registered on a control.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display)]
#[display(fmt = "target #{}", _0)]
pub struct TargetId(u64);

type Action = Rc<dyn Fn(&Control)>;

struct Target {
    id: TargetId,
    event: ControlEvent,
    action: Action,
}

pub(crate) struct ControlState {
    enabled: Cell<bool>,
    title: RefCell<Option<String>>,
    next_target: Cell<u64>,
    targets: RefCell<Vec<Target>>,
}

/// A headless button-like control. Cloning a control clones the handle; all
/// clones refer to the same widget.
///
/// Actions are registered per [`ControlEvent`] and run synchronously, in
/// registration order, when the event is sent.
///
/// ```
/// use viewmodel_injection::{Control, ControlEvent};
/// use std::{cell::Cell, rc::Rc};
///
/// let button = Control::new();
/// let taps = Rc::new(Cell::new(0));
/// let target = button.add_target(ControlEvent::TouchUpInside, {
///     let taps = taps.clone();
///     move |_| taps.set(taps.get() + 1)
/// });
///
/// assert!(button.tap());
/// button.set_enabled(false);
/// assert!(!button.tap());
///
/// assert!(button.remove_target(target));
/// assert_eq!(1, taps.get());
/// ```
#[derive(Clone)]
pub struct Control {
    state: Rc<ControlState>,
}

impl Control {
    /// Creates an enabled control with no title and no targets.
    #[must_use]
    pub fn new() -> Self {
        Control {
            state: Rc::new(ControlState {
                enabled: Cell::new(true),
                title: RefCell::new(None),
                next_target: Cell::new(0),
                targets: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Whether the control accepts user interaction.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.state.enabled.get()
    }

    /// Enables or disables user interaction.
    pub fn set_enabled(&self, enabled: bool) {
        self.state.enabled.set(enabled);
    }

    /// The text shown on the control, if any.
    #[must_use]
    pub fn title(&self) -> Option<String> {
        self.state.title.borrow().clone()
    }

    /// Sets the text shown on the control.
    pub fn set_title(&self, title: impl Into<String>) {
        *self.state.title.borrow_mut() = Some(title.into());
    }

    /// Registers an action to run whenever `event` is sent to this control.
    pub fn add_target<F>(&self, event: ControlEvent, action: F) -> TargetId
    where
        F: Fn(&Control) + 'static,
    {
        let id = TargetId(self.state.next_target.get());
        self.state.next_target.set(id.0 + 1);
        self.state.targets.borrow_mut().push(Target {
            id,
            event,
            action: Rc::new(action),
        });

        tracing::trace!(%id, %event, "added control target");
        id
    }

    /// Removes a previously registered action. Returns whether the target
    /// was still registered.
    pub fn remove_target(&self, id: TargetId) -> bool {
        let mut targets = self.state.targets.borrow_mut();
        let before = targets.len();
        targets.retain(|target| target.id != id);
        let removed = targets.len() != before;

        tracing::trace!(%id, removed, "removed control target");
        removed
    }

    /// The number of registered targets, across all events.
    #[must_use]
    pub fn target_count(&self) -> usize {
        self.state.targets.borrow().len()
    }

    /// Runs every action registered for `event`. This is a programmatic
    /// trigger and ignores whether the control is enabled.
    pub fn send_actions(&self, event: ControlEvent) {
        let actions: Vec<Action> = self
            .state
            .targets
            .borrow()
            .iter()
            .filter(|target| target.event == event)
            .map(|target| target.action.clone())
            .collect();

        for action in actions {
            action(self);
        }
    }

    /// Simulates a user tapping the control. Disabled controls swallow the
    /// tap. Returns whether the tap was delivered.
    pub fn tap(&self) -> bool {
        if !self.is_enabled() {
            tracing::trace!("tap on disabled control ignored");
            return false;
        }

        self.send_actions(ControlEvent::TouchDown);
        self.send_actions(ControlEvent::TouchUpInside);
        self.send_actions(ControlEvent::PrimaryActionTriggered);
        true
    }

    pub(crate) fn downgrade(&self) -> Weak<ControlState> {
        Rc::downgrade(&self.state)
    }

    pub(crate) fn upgrade(state: &Weak<ControlState>) -> Option<Control> {
        state.upgrade().map(|state| Control { state })
    }
}

impl Default for Control {
    fn default() -> Self {
        Control::new()
    }
}

impl Debug for Control {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Control")
            .field("enabled", &self.is_enabled())
            .field("title", &*self.state.title.borrow())
            .field("targets", &self.target_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Control, ControlEvent};
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn tap_sends_the_touch_sequence() {
        let control = Control::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        for event in [
            ControlEvent::TouchDown,
            ControlEvent::TouchUpInside,
            ControlEvent::PrimaryActionTriggered,
        ] {
            let seen = seen.clone();
            control.add_target(event, move |_| seen.borrow_mut().push(event));
        }

        assert!(control.tap());
        assert_eq!(
            vec![
                ControlEvent::TouchDown,
                ControlEvent::TouchUpInside,
                ControlEvent::PrimaryActionTriggered,
            ],
            *seen.borrow()
        );
    }

    #[test]
    fn send_actions_ignores_enabled_state() {
        let control = Control::new();
        let fired = Rc::new(RefCell::new(0));
        control.add_target(ControlEvent::TouchUpInside, {
            let fired = fired.clone();
            move |_| *fired.borrow_mut() += 1
        });

        control.set_enabled(false);
        assert!(!control.tap());
        control.send_actions(ControlEvent::TouchUpInside);
        assert_eq!(1, *fired.borrow());
    }

    #[test]
    fn action_may_remove_its_own_target() {
        let control = Control::new();
        let id = Rc::new(RefCell::new(None));
        let registered = control.add_target(ControlEvent::TouchUpInside, {
            let id = id.clone();
            move |control| {
                if let Some(id) = *id.borrow() {
                    control.remove_target(id);
                }
            }
        });
        *id.borrow_mut() = Some(registered);

        control.send_actions(ControlEvent::TouchUpInside);
        assert_eq!(0, control.target_count());
        assert!(!control.remove_target(registered));
    }

    #[test]
    fn clones_share_state() {
        let control = Control::new();
        let clone = control.clone();
        clone.set_enabled(false);
        clone.set_title("🔽");

        assert!(!control.is_enabled());
        assert_eq!(Some("🔽".to_owned()), control.title());
    }
}
