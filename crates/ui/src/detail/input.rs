use super::{ItemDetailView, ItemFields};
use crate::clipboard::Clipboard;
use crate::controls::{ControlId, ControlMut};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

impl<F: ItemFields> ItemDetailView<F> {
    /// Dispatches one key press.
    ///
    /// Esc cancels, Ctrl+S saves, Tab / Shift+Tab (and Up / Down outside the notes) move focus.
    /// Everything else goes to the focused control. While a dialog is open only Enter, Esc and
    /// Space do anything, and they dismiss it.
    pub fn handle_key(&mut self, key: KeyEvent, clipboard: &mut dyn Clipboard) {
        if key.kind != KeyEventKind::Press || self.closed {
            return;
        }

        if self.dialog.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.dismiss_dialog();
            }
            return;
        }

        self.notice = None;

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('s' | 'S') = key.code {
                self.save();
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.cancel(),
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_previous(),
            KeyCode::Down if self.focus != ControlId::Notes => self.focus_next(),
            KeyCode::Up if self.focus != ControlId::Notes => self.focus_previous(),
            _ => self.handle_focused(key, clipboard),
        }
    }

    fn handle_focused(&mut self, key: KeyEvent, clipboard: &mut dyn Clipboard) {
        let editable = self.state.is_editable();
        let focus = self.focus;

        match focus {
            ControlId::ItemName if editable => match key.code {
                KeyCode::Char(c) => self.name.push(c),
                KeyCode::Backspace => self.name.backspace(),
                _ => {}
            },
            ControlId::Folder if editable => match key.code {
                KeyCode::Right | KeyCode::Char(' ') => self.folder.select_next(),
                KeyCode::Left => self.folder.select_previous(),
                _ => {}
            },
            ControlId::Favorite if editable => {
                if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                    self.favorite = !self.favorite;
                }
            }
            ControlId::Notes if editable => {
                self.notes.input(key);
            }
            ControlId::Reveal(_) => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.toggle_secure(focus);
                }
            }
            ControlId::Copy(_) => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.copy_secure(focus, clipboard);
                }
            }
            ControlId::Field(_) if editable => self.edit_field(focus, key),
            _ => {}
        }
    }

    fn edit_field(&mut self, focus: ControlId, key: KeyEvent) {
        let Some(control) = self.fields.controls_mut().into_iter().find(|c| c.owns(focus)) else {
            return;
        };

        match control {
            ControlMut::Text(text) => match key.code {
                KeyCode::Char(c) => text.push(c),
                KeyCode::Backspace => text.backspace(),
                _ => {}
            },
            ControlMut::Secure(secure) => match key.code {
                KeyCode::Char(c) => secure.push(c),
                KeyCode::Backspace => secure.backspace(),
                _ => {}
            },
            ControlMut::Select(select) => match key.code {
                KeyCode::Right | KeyCode::Char(' ') => select.select_next(),
                KeyCode::Left => select.select_previous(),
                KeyCode::Backspace | KeyCode::Delete => select.clear(),
                _ => {}
            },
        }
    }
}
