use super::{ItemFields, TabOrder};
use crate::codelist::{CARD_BRANDS, CodeListProvider, EXPIRY_MONTHS};
use crate::controls::{ControlId, ControlMut, ControlRef, SelectField, TextInput};
use crate::error::DetailViewError;
use crate::secure_field::SecureField;
use warden_vault::{Card, ItemType, VaultItem};

/// Controls of a payment card.
#[derive(Debug, Clone)]
pub struct CardFields {
    pub cardholder: TextInput,
    pub brand: SelectField,
    pub number: SecureField,
    pub code: SecureField,
    pub exp_month: SelectField,
    pub exp_year: TextInput,
}

impl ItemFields for CardFields {
    type Detail = Card;

    const ITEM_TYPE: ItemType = ItemType::Card;

    fn build(lists: &dyn CodeListProvider) -> Result<Self, DetailViewError> {
        Ok(Self {
            cardholder: TextInput::new(ControlId::Field("cardholder_name"), "Cardholder name"),
            brand: SelectField::new(ControlId::Field("brand"), "Brand", lists.get_list(CARD_BRANDS)?),
            number: SecureField::new("number", "Card number"),
            code: SecureField::new("code", "Security code"),
            exp_month: SelectField::new(
                ControlId::Field("exp_month"),
                "Expiration month",
                lists.get_list(EXPIRY_MONTHS)?,
            ),
            // Free text; the year is not validated.
            exp_year: TextInput::new(ControlId::Field("exp_year"), "Expiration year"),
        })
    }

    fn detail(item: &VaultItem) -> Option<&Card> {
        item.card()
    }

    fn load(&mut self, card: &Card) {
        self.cardholder.set_text(card.cardholder_name.as_deref().unwrap_or_default());
        self.number.set_text(card.number.as_deref().unwrap_or_default());
        self.code.set_text(card.code.as_deref().unwrap_or_default());
        self.exp_year.set_text(card.exp_year.as_deref().unwrap_or_default());
        self.brand.select_index(card.brand);
        self.exp_month.select_index(card.exp_month);
    }

    fn update(&self, current: Option<&Card>) -> Card {
        let mut card = current.cloned().unwrap_or_default();
        card.cardholder_name = Some(self.cardholder.text().to_string());
        card.number = Some(self.number.text().to_string());
        card.code = Some(self.code.text().to_string());
        card.exp_year = Some(self.exp_year.text().to_string());
        card.brand = self.brand.selected_index();
        card.exp_month = self.exp_month.selected_index();
        card
    }

    fn append_tab_order(&self, order: &mut TabOrder, start: usize) -> usize {
        order.append(
            start,
            [
                self.cardholder.id(),
                self.brand.id(),
                self.number.field_id(),
                self.number.reveal_id(),
                self.number.copy_id(),
                self.code.field_id(),
                self.code.reveal_id(),
                self.code.copy_id(),
                self.exp_month.id(),
                self.exp_year.id(),
            ],
        )
    }

    fn controls(&self) -> Vec<ControlRef<'_>> {
        vec![
            ControlRef::Text(&self.cardholder),
            ControlRef::Select(&self.brand),
            ControlRef::Secure(&self.number),
            ControlRef::Secure(&self.code),
            ControlRef::Select(&self.exp_month),
            ControlRef::Text(&self.exp_year),
        ]
    }

    fn controls_mut(&mut self) -> Vec<ControlMut<'_>> {
        vec![
            ControlMut::Text(&mut self.cardholder),
            ControlMut::Select(&mut self.brand),
            ControlMut::Secure(&mut self.number),
            ControlMut::Secure(&mut self.code),
            ControlMut::Select(&mut self.exp_month),
            ControlMut::Text(&mut self.exp_year),
        ]
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::codelist::CodeListManager;

    fn full_card() -> Card {
        Card {
            cardholder_name: Some("Ada Lovelace".into()),
            number: Some("4111111111111111".into()),
            exp_month: Some(4),
            exp_year: Some("2027".into()),
            brand: Some(2),
            code: Some("123".into()),
        }
    }

    #[test]
    fn test_load_then_update_reproduces_card() {
        let lists = CodeListManager::with_builtin_lists();
        let mut fields = CardFields::build(&lists).unwrap();
        fields.load(&full_card());

        assert_eq!(fields.brand.selected_item().unwrap().label, "Visa");
        assert_eq!(fields.exp_month.selected_item().unwrap().label, "April");
        assert_eq!(fields.update(None), full_card());
    }

    #[test]
    fn test_update_writes_empty_strings_and_unset_indices() {
        let lists = CodeListManager::with_builtin_lists();
        let fields = CardFields::build(&lists).unwrap();

        let card = fields.update(None);
        assert_eq!(card.number.as_deref(), Some(""));
        assert_eq!(card.cardholder_name.as_deref(), Some(""));
        assert_eq!(card.brand, None);
        assert_eq!(card.exp_month, None);
    }

    #[test]
    fn test_stale_brand_index_is_left_unset() {
        let lists = CodeListManager::with_builtin_lists();
        let mut fields = CardFields::build(&lists).unwrap();
        fields.load(&Card {
            brand: Some(999),
            ..full_card()
        });

        assert_eq!(fields.brand.selected_index(), None);
        assert_eq!(fields.exp_month.selected_index(), Some(4));
    }

    #[test]
    fn test_tab_order_follows_layout() {
        let lists = CodeListManager::with_builtin_lists();
        let fields = CardFields::build(&lists).unwrap();
        let mut order = TabOrder::new();

        let next = fields.append_tab_order(&mut order, 4);

        assert_eq!(next, 14);
        let controls: Vec<_> = order.controls().collect();
        assert_eq!(
            controls,
            vec![
                ControlId::Field("cardholder_name"),
                ControlId::Field("brand"),
                ControlId::Field("number"),
                ControlId::Reveal("number"),
                ControlId::Copy("number"),
                ControlId::Field("code"),
                ControlId::Reveal("code"),
                ControlId::Copy("code"),
                ControlId::Field("exp_month"),
                ControlId::Field("exp_year"),
            ]
        );
    }

    #[test]
    fn test_unknown_list_fails_build() {
        let lists = CodeListManager::new();
        let err = CardFields::build(&lists).unwrap_err();
        assert_eq!(err, DetailViewError::UnknownListName(CARD_BRANDS.to_string()));
    }
}
