use crate::{Control, ControlEvent, Notifications, Stream, Subscription};

impl Control {
    /// Bridges `event` into a notification stream. Every subscription
    /// registers its own target on the control, and cancelling the
    /// subscription removes that target again.
    ///
    /// The stream holds the control weakly. Subscribing once the control has
    /// been dropped yields an inert subscription.
    ///
    /// ```
    /// use viewmodel_injection::{Control, ControlEvent};
    /// use std::{cell::Cell, rc::Rc};
    ///
    /// let button = Control::new();
    /// let presses = Rc::new(Cell::new(0));
    ///
    /// let subscription = button
    ///     .events(ControlEvent::TouchUpInside)
    ///     .subscribe({
    ///         let presses = presses.clone();
    ///         move |_| presses.set(presses.get() + 1)
    ///     });
    /// assert_eq!(1, button.target_count());
    ///
    /// button.send_actions(ControlEvent::TouchUpInside);
    /// subscription.cancel();
    /// button.send_actions(ControlEvent::TouchUpInside);
    ///
    /// assert_eq!(1, presses.get());
    /// assert_eq!(0, button.target_count());
    /// ```
    #[must_use]
    pub fn events(&self, event: ControlEvent) -> Notifications {
        let control = self.downgrade();
        Stream::from_subscribe(move |handler| {
            let control = match Control::upgrade(&control) {
                Some(control) => control,
                None => return Subscription::empty(),
            };

            let target = control.add_target(event, move |_| handler(&()));
            let control = control.downgrade();
            Subscription::new(move || {
                if let Some(control) = Control::upgrade(&control) {
                    control.remove_target(target);
                }
            })
        })
    }

    /// Notifications for each completed tap on this control.
    #[must_use]
    pub fn taps(&self) -> Notifications {
        self.events(ControlEvent::TouchUpInside)
    }
}
