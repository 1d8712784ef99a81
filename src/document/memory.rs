//! In-memory document

use super::{Document, ElementId, FieldId, InputMode, MessageKind};
use std::collections::HashMap;

/// State of a single element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Element {
    value: String,
    default_value: String,
    checked: bool,
    default_checked: bool,
    text: String,
    error_marker: bool,
    disabled: bool,
    /// `Some` for form controls, `None` for text nodes and buttons
    mode: Option<InputMode>,
    message_kind: Option<MessageKind>,
}

impl Element {
    fn control(mode: InputMode) -> Self {
        Self {
            mode: Some(mode),
            ..Default::default()
        }
    }

    fn node() -> Self {
        Self::default()
    }
}

/// Registration document held in memory.
///
/// The terminal UI renders from it and tests inspect it directly.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    elements: HashMap<ElementId, Element>,
}

impl MemoryDocument {
    /// Build the full registration markup
    pub fn registration() -> Self {
        Self::with_elements(ElementId::all())
    }

    /// Build a document containing only the given elements
    pub fn with_elements(ids: impl IntoIterator<Item = ElementId>) -> Self {
        let elements = ids
            .into_iter()
            .map(|id| (id, Self::default_element(id)))
            .collect();
        Self { elements }
    }

    fn default_element(id: ElementId) -> Element {
        match id {
            ElementId::Field(FieldId::Dob) => Element::control(InputMode::Date),
            ElementId::Field(FieldId::Password | FieldId::ConfirmPassword) => {
                Element::control(InputMode::Password)
            }
            ElementId::Field(FieldId::Terms) => Element::control(InputMode::Checkbox),
            ElementId::Field(_) | ElementId::Age => Element::control(InputMode::Text),
            _ => Element::node(),
        }
    }

    /// Set both the current and the reset value of an input
    #[cfg(test)]
    pub fn with_default_value(mut self, id: ElementId, value: &str) -> Self {
        if let Some(el) = self.elements.get_mut(&id) {
            el.value = value.to_string();
            el.default_value = value.to_string();
        }
        self
    }

    /// Set both the current and the reset checked state of a checkbox
    #[cfg(test)]
    pub fn with_default_checked(mut self, id: ElementId, checked: bool) -> Self {
        if let Some(el) = self.elements.get_mut(&id) {
            el.checked = checked;
            el.default_checked = checked;
        }
        self
    }

    /// Append a character to an input, returning whether it exists
    pub fn push_char(&mut self, id: ElementId, c: char) -> bool {
        match self.elements.get_mut(&id) {
            Some(el) => {
                el.value.push(c);
                true
            }
            None => false,
        }
    }

    /// Remove the last character of an input, returning whether it exists
    pub fn pop_char(&mut self, id: ElementId) -> bool {
        match self.elements.get_mut(&id) {
            Some(el) => {
                el.value.pop();
                true
            }
            None => false,
        }
    }
}

impl Document for MemoryDocument {
    fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    fn value(&self, id: ElementId) -> Option<String> {
        self.elements.get(&id).map(|el| el.value.clone())
    }

    fn set_value(&mut self, id: ElementId, value: &str) {
        if let Some(el) = self.elements.get_mut(&id) {
            el.value = value.to_string();
        }
    }

    fn is_checked(&self, id: ElementId) -> Option<bool> {
        self.elements.get(&id).map(|el| el.checked)
    }

    fn set_checked(&mut self, id: ElementId, checked: bool) {
        if let Some(el) = self.elements.get_mut(&id) {
            el.checked = checked;
        }
    }

    fn text(&self, id: ElementId) -> Option<String> {
        self.elements.get(&id).map(|el| el.text.clone())
    }

    fn set_text(&mut self, id: ElementId, text: &str) {
        if let Some(el) = self.elements.get_mut(&id) {
            el.text = text.to_string();
        }
    }

    fn has_error_marker(&self, id: ElementId) -> bool {
        self.elements.get(&id).is_some_and(|el| el.error_marker)
    }

    fn set_error_marker(&mut self, id: ElementId, marked: bool) {
        if let Some(el) = self.elements.get_mut(&id) {
            el.error_marker = marked;
        }
    }

    fn is_disabled(&self, id: ElementId) -> Option<bool> {
        self.elements.get(&id).map(|el| el.disabled)
    }

    fn set_disabled(&mut self, id: ElementId, disabled: bool) {
        if let Some(el) = self.elements.get_mut(&id) {
            el.disabled = disabled;
        }
    }

    fn input_mode(&self, id: ElementId) -> Option<InputMode> {
        self.elements.get(&id).and_then(|el| el.mode)
    }

    fn set_input_mode(&mut self, id: ElementId, mode: InputMode) {
        if let Some(el) = self.elements.get_mut(&id) {
            if el.mode.is_some() {
                el.mode = Some(mode);
            }
        }
    }

    fn set_message_kind(&mut self, id: ElementId, kind: Option<MessageKind>) {
        if let Some(el) = self.elements.get_mut(&id) {
            el.message_kind = kind;
        }
    }

    fn message_kind(&self, id: ElementId) -> Option<MessageKind> {
        self.elements.get(&id).and_then(|el| el.message_kind)
    }

    fn reset_form(&mut self) {
        for el in self.elements.values_mut().filter(|el| el.mode.is_some()) {
            el.value = el.default_value.clone();
            el.checked = el.default_checked;
        }
    }
}
