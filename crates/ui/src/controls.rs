use crate::codelist::{CodeList, CodeListItem};
use crate::secure_field::SecureField;
use std::rc::Rc;
use tracing::debug;
use warden_vault::{CodeIndex, VaultFolder};

/// Identifies an interactive control inside a detail view.
///
/// Field sets name their controls with `'static` keys; a secure field owns three controls
/// (the input and its "Show" and "Copy" actions) sharing one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    ItemName,
    Folder,
    Favorite,
    Notes,
    Field(&'static str),
    Reveal(&'static str),
    Copy(&'static str),
}

#[derive(Debug, Clone)]
pub struct TextInput {
    id: ControlId,
    pub label: &'static str,
    value: String,
}

impl TextInput {
    pub const fn new(id: ControlId, label: &'static str) -> Self {
        Self {
            id,
            label,
            value: String::new(),
        }
    }

    pub const fn id(&self) -> ControlId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, text: &str) {
        self.value.clear();
        self.value.push_str(text);
    }

    pub fn push(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// Selection bound to an immutable code-list snapshot.
///
/// The selection is kept as a position in the snapshot; items store the stable index.
#[derive(Debug, Clone)]
pub struct SelectField {
    id: ControlId,
    pub label: &'static str,
    options: CodeList,
    selected: Option<usize>,
}

impl SelectField {
    pub const fn new(id: ControlId, label: &'static str, options: CodeList) -> Self {
        Self {
            id,
            label,
            options,
            selected: None,
        }
    }

    pub const fn id(&self) -> ControlId {
        self.id
    }

    pub const fn options(&self) -> &CodeList {
        &self.options
    }

    /// Selects the option whose stable index is `index`.
    ///
    /// An index missing from the list leaves the selection unset; it is not an error.
    pub fn select_index(&mut self, index: Option<CodeIndex>) {
        self.selected = index.and_then(|i| {
            let position = self.options.position_of(i);
            if position.is_none() {
                debug!("{}: stored index {} not in code list, leaving unset", self.label, i);
            }
            position
        });
    }

    /// Stable index of the current selection.
    pub fn selected_index(&self) -> Option<CodeIndex> {
        self.selected_item().map(|item| item.index)
    }

    pub fn selected_item(&self) -> Option<&CodeListItem> {
        self.selected.and_then(|pos| self.options.get(pos))
    }

    pub fn select_next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(pos) => (pos + 1) % self.options.len(),
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => self.options.len() - 1,
            Some(pos) => pos - 1,
        });
    }

    pub const fn clear(&mut self) {
        self.selected = None;
    }
}

/// Folder chooser over the shared, read-only folder list. `None` means "No Folder".
#[derive(Debug, Clone)]
pub struct FolderPicker {
    folders: Rc<[VaultFolder]>,
    selected: Option<usize>,
}

impl FolderPicker {
    pub const fn new(folders: Rc<[VaultFolder]>) -> Self {
        Self { folders, selected: None }
    }

    pub fn folders(&self) -> &[VaultFolder] {
        &self.folders
    }

    /// Selects the folder with `id`; unknown ids fall back to "No Folder".
    pub fn select_id(&mut self, id: Option<&str>) {
        self.selected = id.and_then(|id| {
            let position = self.folders.iter().position(|f| f.id == id);
            if position.is_none() {
                debug!("Folder '{}' not in folder list, showing no folder", id);
            }
            position
        });
    }

    pub fn selected_folder(&self) -> Option<&VaultFolder> {
        self.selected.and_then(|pos| self.folders.get(pos))
    }

    pub fn selected_id(&self) -> Option<String> {
        self.selected_folder().map(|f| f.id.clone())
    }

    pub fn display(&self) -> &str {
        self.selected_folder().map_or("No Folder", |f| f.name.as_str())
    }

    // "No Folder" sits before the first folder in the cycle.
    pub fn select_next(&mut self) {
        self.selected = match self.selected {
            None if !self.folders.is_empty() => Some(0),
            Some(pos) if pos + 1 < self.folders.len() => Some(pos + 1),
            _ => None,
        };
    }

    pub fn select_previous(&mut self) {
        self.selected = match self.selected {
            None => self.folders.len().checked_sub(1),
            Some(0) => None,
            Some(pos) => Some(pos - 1),
        };
    }
}

/// Borrowed view of one field-set control, in display order.
pub enum ControlRef<'a> {
    Text(&'a TextInput),
    Select(&'a SelectField),
    Secure(&'a SecureField),
}

pub enum ControlMut<'a> {
    Text(&'a mut TextInput),
    Select(&'a mut SelectField),
    Secure(&'a mut SecureField),
}

impl ControlRef<'_> {
    pub fn label(&self) -> &'static str {
        match self {
            ControlRef::Text(t) => t.label,
            ControlRef::Select(s) => s.label,
            ControlRef::Secure(s) => s.label(),
        }
    }

    /// Every focusable id this control contributes, in tab order.
    pub fn tab_stops(&self) -> Vec<ControlId> {
        match self {
            ControlRef::Text(t) => vec![t.id()],
            ControlRef::Select(s) => vec![s.id()],
            ControlRef::Secure(s) => vec![s.field_id(), s.reveal_id(), s.copy_id()],
        }
    }
}

impl ControlMut<'_> {
    pub fn owns(&self, id: ControlId) -> bool {
        match self {
            ControlMut::Text(t) => t.id() == id,
            ControlMut::Select(s) => s.id() == id,
            ControlMut::Secure(s) => s.owns(id),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn sizes() -> CodeList {
        CodeList::new(vec![
            CodeListItem::new(10, "Small"),
            CodeListItem::new(20, "Medium"),
            CodeListItem::new(30, "Large"),
        ])
    }

    #[test]
    fn test_select_by_stable_index_not_position() {
        let mut field = SelectField::new(ControlId::Field("size"), "Size", sizes());
        field.select_index(Some(20));
        assert_eq!(field.selected_index(), Some(20));
        assert_eq!(field.selected_item().unwrap().label, "Medium");
    }

    #[test]
    fn test_stale_index_leaves_selection_unset() {
        let mut field = SelectField::new(ControlId::Field("size"), "Size", sizes());
        field.select_index(Some(30));
        field.select_index(Some(99));
        assert_eq!(field.selected_index(), None);
    }

    #[test]
    fn test_select_cycles() {
        let mut field = SelectField::new(ControlId::Field("size"), "Size", sizes());
        field.select_next();
        assert_eq!(field.selected_index(), Some(10));
        field.select_previous();
        assert_eq!(field.selected_index(), Some(30));
        field.select_next();
        assert_eq!(field.selected_index(), Some(10));
        field.clear();
        assert_eq!(field.selected_index(), None);
    }

    #[test]
    fn test_select_on_empty_list_stays_unset() {
        let mut field = SelectField::new(ControlId::Field("x"), "X", CodeList::new(Vec::new()));
        field.select_next();
        field.select_previous();
        assert!(field.selected_item().is_none());
    }

    #[test]
    fn test_folder_picker_cycle_includes_no_folder() {
        let folders: Rc<[VaultFolder]> = vec![
            VaultFolder {
                id: "a".into(),
                name: "Alpha".into(),
            },
            VaultFolder {
                id: "b".into(),
                name: "Beta".into(),
            },
        ]
        .into();
        let mut picker = FolderPicker::new(folders);
        assert_eq!(picker.display(), "No Folder");

        picker.select_next();
        assert_eq!(picker.selected_id().as_deref(), Some("a"));
        picker.select_next();
        picker.select_next();
        assert_eq!(picker.selected_id(), None);
        picker.select_previous();
        assert_eq!(picker.display(), "Beta");

        picker.select_id(Some("missing"));
        assert_eq!(picker.selected_id(), None);
    }

    #[test]
    fn test_text_input_editing() {
        let mut input = TextInput::new(ControlId::ItemName, "Name");
        assert!(input.is_blank());
        input.set_text("Visa");
        input.push('!');
        input.backspace();
        assert_eq!(input.text(), "Visa");
        input.set_text("   ");
        assert!(input.is_blank());
    }
}
