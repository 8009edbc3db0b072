mod control;
mod events;
mod label;

pub use control::*;
pub use events::*;
pub use label::*;

/// The widgets a counter screen is made of. Cloning the set clones the
/// handles, not the widgets.
#[derive(Clone, Debug, Default)]
pub struct CounterWidgets {
    /// Raises the count.
    pub increment: Control,
    /// Lowers the count. Disabled while the count is zero.
    pub decrement: Control,
    /// Shows the count.
    pub count_label: Label,
}

impl CounterWidgets {
    /// Creates a fresh set of widgets, titled the way the counter screen
    /// shows them.
    #[must_use]
    pub fn new() -> Self {
        let widgets = CounterWidgets::default();
        widgets.increment.set_title("🔼");
        widgets.decrement.set_title("🔽");
        widgets
    }
}
