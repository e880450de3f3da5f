use super::{ItemFields, TabOrder};
use crate::codelist::CodeListProvider;
use crate::controls::{ControlMut, ControlRef};
use crate::error::DetailViewError;
use warden_vault::{ItemType, SecureNote, VaultItem};

/// A secure note is all base controls: the text lives in the item's notes.
#[derive(Debug, Clone, Default)]
pub struct SecureNoteFields;

impl ItemFields for SecureNoteFields {
    type Detail = SecureNote;

    const ITEM_TYPE: ItemType = ItemType::SecureNote;

    fn build(_lists: &dyn CodeListProvider) -> Result<Self, DetailViewError> {
        Ok(Self)
    }

    fn detail(item: &VaultItem) -> Option<&SecureNote> {
        item.secure_note()
    }

    fn load(&mut self, _note: &SecureNote) {}

    fn update(&self, current: Option<&SecureNote>) -> SecureNote {
        current.cloned().unwrap_or_default()
    }

    fn append_tab_order(&self, _order: &mut TabOrder, start: usize) -> usize {
        start
    }

    fn controls(&self) -> Vec<ControlRef<'_>> {
        Vec::new()
    }

    fn controls_mut(&mut self) -> Vec<ControlMut<'_>> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::codelist::CodeListManager;

    #[test]
    fn test_update_yields_generic_note() {
        let fields = SecureNoteFields::build(&CodeListManager::new()).unwrap();
        assert_eq!(fields.update(None), SecureNote { note_type: 0 });
        assert_eq!(
            fields.update(Some(&SecureNote { note_type: 3 })),
            SecureNote { note_type: 3 }
        );
    }

    #[test]
    fn test_appends_no_stops() {
        let mut order = TabOrder::new();
        assert_eq!(SecureNoteFields.append_tab_order(&mut order, 4), 4);
        assert!(order.stops().is_empty());
    }
}
