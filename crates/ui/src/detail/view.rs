use super::{DetailContext, DetailOutcome, DetailViewState, ItemFields, SaveOutcome, TabOrder};
use crate::clipboard::Clipboard;
use crate::controls::{ControlId, ControlMut, FolderPicker, TextInput};
use crate::error::DetailViewError;
use crate::notice::{Dialog, Notice};
use crate::secure_field::SecureField;
use ratatui::style::{Color, Style};
use std::rc::Rc;
use tracing::{debug, info};
use tui_textarea::TextArea;
use warden_vault::{VaultFolder, VaultItem};

/// Tab positions 0..BASE_TAB_STOPS belong to the common controls.
pub const BASE_TAB_STOPS: usize = 4;

pub struct ItemDetailView<F: ItemFields> {
    pub(super) item: VaultItem,
    pub(super) state: DetailViewState,
    pub(super) name: TextInput,
    pub(super) folder: FolderPicker,
    pub(super) favorite: bool,
    pub(super) notes: TextArea<'static>,
    /// Separator the loaded notes used, restored when the lines are joined back.
    pub(super) notes_line_ending: &'static str,
    pub(super) fields: F,
    pub(super) tab_order: TabOrder,
    pub(super) focus: ControlId,
    pub(super) mask_char: char,
    pub(super) confirmed: bool,
    pub(super) closed: bool,
    pub(super) dialog: Option<Dialog>,
    pub(super) notice: Option<Notice>,
}

impl<F: ItemFields> ItemDetailView<F> {
    /// Builds a view over `item`.
    ///
    /// Controls are created empty, the field set binds its code lists, and in `View` / `Edit`
    /// the item is loaded into them. Focus starts on the item name.
    ///
    /// # Errors
    ///
    /// Returns `DetailViewError::ItemTypeMismatch` when the item is not of the type this view
    /// edits, and `DetailViewError::UnknownListName` when a code list cannot be resolved.
    pub fn open(
        item: VaultItem,
        folders: Rc<[VaultFolder]>,
        state: DetailViewState,
        ctx: DetailContext<'_>,
    ) -> Result<Self, DetailViewError> {
        if item.item_type != F::ITEM_TYPE {
            return Err(DetailViewError::ItemTypeMismatch {
                expected: F::ITEM_TYPE,
                found: item.item_type,
            });
        }

        let mut fields = F::build(ctx.lists)?;
        if ctx.config.reveal_secrets_on_open {
            for control in fields.controls_mut() {
                if let ControlMut::Secure(secure) = control {
                    secure.set_masked(false);
                }
            }
        }

        let mut view = Self {
            item,
            state,
            name: TextInput::new(ControlId::ItemName, "Name"),
            folder: FolderPicker::new(folders),
            favorite: false,
            notes: new_notes_area(),
            notes_line_ending: "\n",
            fields,
            tab_order: TabOrder::new(),
            focus: ControlId::ItemName,
            mask_char: ctx.config.mask_char,
            confirmed: false,
            closed: false,
            dialog: None,
            notice: None,
        };

        if state.loads_item() {
            view.load();
        }
        view.set_tab_order();
        view.focus = ControlId::ItemName;

        debug!(
            "Opened {} view for {} item '{}'",
            state.as_str(),
            F::ITEM_TYPE,
            view.item.id
        );
        Ok(view)
    }

    fn load(&mut self) {
        self.name.set_text(&self.item.name);
        if let Some(notes) = self.item.notes.clone() {
            self.set_notes(&notes);
            self.notes.move_cursor(tui_textarea::CursorMove::Top);
        } else {
            self.notes = new_notes_area();
        }
        self.folder.select_id(self.item.folder_id.as_deref());
        self.favorite = self.item.favorite;

        if let Some(detail) = F::detail(&self.item) {
            self.fields.load(detail);
        }
    }

    /// Writes every control back into the item, creating the sub-object if needed.
    fn update_item(&mut self) {
        self.item.name = self.name.text().trim().to_string();
        self.item.notes = Some(self.notes_text());
        self.item.folder_id = self.folder.selected_id();
        self.item.favorite = self.favorite;

        let detail = self.fields.update(F::detail(&self.item));
        self.item.details = Some(detail.into());
    }

    /// Base stops first, then the field set's stops appended after them.
    pub fn set_tab_order(&mut self) {
        self.tab_order.clear();
        let next = self.tab_order.append(
            0,
            [
                ControlId::ItemName,
                ControlId::Folder,
                ControlId::Favorite,
                ControlId::Notes,
            ],
        );
        debug_assert_eq!(next, BASE_TAB_STOPS);
        self.fields.append_tab_order(&mut self.tab_order, next);
    }

    /// Validates and commits the edit.
    ///
    /// An empty item name opens a blocking error dialog and leaves the item untouched.
    pub fn save(&mut self) -> SaveOutcome {
        if self.closed {
            return SaveOutcome::Closed;
        }
        if !self.state.is_editable() {
            return SaveOutcome::ReadOnly;
        }
        if self.name.is_blank() {
            let message = "Item name must have a value.".to_string();
            info!("Save rejected for item '{}': {}", self.item.id, message);
            self.dialog = Some(Dialog {
                title: "Action failed.".to_string(),
                message: message.clone(),
            });
            return SaveOutcome::Rejected(message);
        }

        self.update_item();
        self.confirmed = true;
        self.closed = true;
        info!("Saved {} item '{}'", F::ITEM_TYPE, self.item.id);
        SaveOutcome::Saved
    }

    /// Closes without writing anything back.
    pub fn cancel(&mut self) {
        if !self.closed {
            info!("Cancelled {} view for item '{}'", self.state.as_str(), self.item.id);
        }
        self.closed = true;
    }

    pub fn focus_next(&mut self) {
        if let Some(next) = self.tab_order.next_after(self.focus) {
            self.focus = next;
        }
    }

    pub fn focus_previous(&mut self) {
        if let Some(prev) = self.tab_order.previous_before(self.focus) {
            self.focus = prev;
        }
    }

    /// Moves focus to `control` if it takes part in the tab order.
    pub fn set_focus(&mut self, control: ControlId) -> bool {
        if self.tab_order.contains(control) {
            self.focus = control;
            true
        } else {
            false
        }
    }

    /// Flips masking of the secure field owning `control`.
    pub fn toggle_secure(&mut self, control: ControlId) -> bool {
        match self.secure_field_mut(control) {
            Some(secure) => {
                secure.toggle_visibility();
                true
            }
            None => false,
        }
    }

    /// Copies the secure field owning `control` and records the acknowledgment.
    pub fn copy_secure(&mut self, control: ControlId, clipboard: &mut dyn Clipboard) -> Option<&Notice> {
        let notice = self.secure_field(control)?.copy_to(clipboard);
        self.notice = Some(notice);
        self.notice.as_ref()
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn secure_field(&self, control: ControlId) -> Option<&SecureField> {
        self.fields.controls().into_iter().find_map(|c| match c {
            crate::controls::ControlRef::Secure(s) if s.owns(control) => Some(s),
            _ => None,
        })
    }

    fn secure_field_mut(&mut self, control: ControlId) -> Option<&mut SecureField> {
        self.fields.controls_mut().into_iter().find_map(|c| match c {
            ControlMut::Secure(s) if s.owns(control) => Some(s),
            _ => None,
        })
    }

    pub fn item(&self) -> &VaultItem {
        &self.item
    }

    pub const fn state(&self) -> DetailViewState {
        self.state
    }

    pub const fn fields(&self) -> &F {
        &self.fields
    }

    pub const fn fields_mut(&mut self) -> &mut F {
        &mut self.fields
    }

    pub const fn focus(&self) -> ControlId {
        self.focus
    }

    pub const fn tab_order(&self) -> &TabOrder {
        &self.tab_order
    }

    pub fn item_name(&self) -> &str {
        self.name.text()
    }

    pub fn set_item_name(&mut self, name: &str) {
        self.name.set_text(name);
    }

    pub fn notes_text(&self) -> String {
        self.notes.lines().join(self.notes_line_ending)
    }

    pub fn set_notes(&mut self, notes: &str) {
        self.notes_line_ending = if notes.contains("\r\n") { "\r\n" } else { "\n" };
        self.notes = new_notes_area();
        self.notes.insert_str(notes);
    }

    pub const fn folder(&self) -> &FolderPicker {
        &self.folder
    }

    pub const fn folder_mut(&mut self) -> &mut FolderPicker {
        &mut self.folder
    }

    pub const fn is_favorite(&self) -> bool {
        self.favorite
    }

    pub const fn set_favorite(&mut self, favorite: bool) {
        self.favorite = favorite;
    }

    pub const fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    pub const fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Hands the item back with the confirmation flag.
    pub fn into_outcome(self) -> DetailOutcome {
        DetailOutcome {
            confirmed: self.confirmed,
            item: self.item,
        }
    }
}

fn new_notes_area() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_line_number_style(Style::default().fg(Color::DarkGray));
    textarea.set_placeholder_text("Notes...");
    textarea
}
