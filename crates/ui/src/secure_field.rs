use crate::clipboard::Clipboard;
use crate::controls::ControlId;
use crate::notice::Notice;
use tracing::warn;
use zeroize::{Zeroize, Zeroizing};

const MIN_CAPACITY: usize = 32;

/// Sensitive input (card number, CVV, password, ...) with a masked/plain toggle and a
/// clipboard export action.
///
/// The plain value is wiped from memory when the field is dropped. Toggling visibility only
/// affects rendering.
#[derive(Clone)]
pub struct SecureField {
    key: &'static str,
    label: &'static str,
    value: Zeroizing<String>,
    masked: bool,
}

impl std::fmt::Debug for SecureField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureField")
            .field("key", &self.key)
            .field("masked", &self.masked)
            .finish_non_exhaustive()
    }
}

impl SecureField {
    /// A new, empty, masked field.
    pub fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            value: Zeroizing::new(String::with_capacity(MIN_CAPACITY)),
            masked: true,
        }
    }

    pub const fn label(&self) -> &'static str {
        self.label
    }

    pub const fn field_id(&self) -> ControlId {
        ControlId::Field(self.key)
    }

    pub const fn reveal_id(&self) -> ControlId {
        ControlId::Reveal(self.key)
    }

    pub const fn copy_id(&self) -> ControlId {
        ControlId::Copy(self.key)
    }

    pub fn owns(&self, id: ControlId) -> bool {
        id == self.field_id() || id == self.reveal_id() || id == self.copy_id()
    }

    pub fn text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, text: &str) {
        self.value.zeroize();
        self.reserve(text.len());
        self.value.push_str(text);
    }

    pub fn push(&mut self, c: char) {
        self.reserve(c.len_utf8());
        self.value.push(c);
    }

    /// Grows into a fresh buffer so the old one is wiped on drop instead of being reallocated.
    fn reserve(&mut self, additional: usize) {
        let needed = self.value.len() + additional;
        if needed <= self.value.capacity() {
            return;
        }
        let mut grown = Zeroizing::new(String::with_capacity(needed.max(MIN_CAPACITY).next_power_of_two()));
        grown.push_str(&self.value);
        self.value = grown;
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub const fn is_masked(&self) -> bool {
        self.masked
    }

    pub const fn set_masked(&mut self, masked: bool) {
        self.masked = masked;
    }

    /// Flips between masked and plain display.
    pub const fn toggle_visibility(&mut self) {
        self.masked = !self.masked;
    }

    /// Caption of the disclosure control: the action it will perform next.
    pub const fn disclosure_label(&self) -> &'static str {
        if self.masked { "Show" } else { "Hide" }
    }

    /// What the input shows: the value itself, or one mask character per character.
    pub fn display(&self, mask_char: char) -> String {
        if self.masked {
            std::iter::repeat_n(mask_char, self.value.chars().count()).collect()
        } else {
            self.value.to_string()
        }
    }

    /// Exports the plain value, masked or not, and returns the acknowledgment to show.
    pub fn copy_to(&self, clipboard: &mut dyn Clipboard) -> Notice {
        match clipboard.set_text(&self.value) {
            Ok(()) => Notice::success(format!("{} copied to clipboard.", self.label)),
            Err(e) => {
                warn!("Copying {} failed: {}", self.label, e);
                Notice::error(format!("Could not copy {}: {e}", self.label.to_lowercase()))
            }
        }
    }
}
