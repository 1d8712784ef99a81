//! Trait abstraction over the document so validation can run against a fake

use super::{ElementId, InputMode, MessageKind};

/// Capabilities the validator needs from the document.
///
/// Reads of a missing element return `None`, writes to a missing element
/// are ignored.
#[cfg_attr(test, mockall::automock)]
pub trait Document {
    /// Whether the element exists
    fn contains(&self, id: ElementId) -> bool;

    /// Current value of an input
    fn value(&self, id: ElementId) -> Option<String>;

    /// Replace the value of an input
    fn set_value(&mut self, id: ElementId, value: &str);

    /// Checked state of a checkbox
    fn is_checked(&self, id: ElementId) -> Option<bool>;

    fn set_checked(&mut self, id: ElementId, checked: bool);

    /// Text content of a node
    fn text(&self, id: ElementId) -> Option<String>;

    fn set_text(&mut self, id: ElementId, text: &str);

    /// Whether the element carries the error highlight
    fn has_error_marker(&self, id: ElementId) -> bool;

    fn set_error_marker(&mut self, id: ElementId, marked: bool);

    fn is_disabled(&self, id: ElementId) -> Option<bool>;

    fn set_disabled(&mut self, id: ElementId, disabled: bool);

    fn input_mode(&self, id: ElementId) -> Option<InputMode>;

    fn set_input_mode(&mut self, id: ElementId, mode: InputMode);

    /// Class of the aggregate message, `None` clears it
    fn set_message_kind(&mut self, id: ElementId, kind: Option<MessageKind>);

    fn message_kind(&self, id: ElementId) -> Option<MessageKind>;

    /// Restore every form control to its default value and checked state
    fn reset_form(&mut self);
}
