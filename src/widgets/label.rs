use std::{
    cell::RefCell,
    fmt::{Debug, Formatter},
    rc::Rc,
};

/// A headless text label. Cloning a label clones the handle.
#[derive(Clone, Default)]
pub struct Label {
    text: Rc<RefCell<Option<String>>>,
}

impl Label {
    /// Creates a label with no text.
    #[must_use]
    pub fn new() -> Self {
        Label::default()
    }

    /// The text currently shown, if any.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        self.text.borrow().clone()
    }

    /// Replaces the text shown. `None` clears the label.
    pub fn set_text(&self, text: Option<String>) {
        *self.text.borrow_mut() = text;
    }
}

impl Debug for Label {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Label")
            .field("text", &*self.text.borrow())
            .finish()
    }
}
