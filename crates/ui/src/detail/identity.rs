use super::{ItemFields, TabOrder};
use crate::codelist::{CodeListProvider, IDENTITY_TITLES};
use crate::controls::{ControlId, ControlMut, ControlRef, SelectField, TextInput};
use crate::error::DetailViewError;
use crate::secure_field::SecureField;
use warden_vault::{Identity, ItemType, VaultItem};

#[derive(Debug, Clone)]
pub struct IdentityFields {
    pub title: SelectField,
    pub first_name: TextInput,
    pub middle_name: TextInput,
    pub last_name: TextInput,
    pub company: TextInput,
    pub email: TextInput,
    pub phone: TextInput,
    pub address1: TextInput,
    pub address2: TextInput,
    pub city: TextInput,
    pub state: TextInput,
    pub postal_code: TextInput,
    pub country: TextInput,
    pub ssn: SecureField,
    pub passport_number: SecureField,
    pub license_number: SecureField,
}

fn text(key: &'static str, label: &'static str) -> TextInput {
    TextInput::new(ControlId::Field(key), label)
}

fn owned(input: &TextInput) -> Option<String> {
    Some(input.text().to_string())
}

impl ItemFields for IdentityFields {
    type Detail = Identity;

    const ITEM_TYPE: ItemType = ItemType::Identity;

    fn build(lists: &dyn CodeListProvider) -> Result<Self, DetailViewError> {
        Ok(Self {
            title: SelectField::new(ControlId::Field("title"), "Title", lists.get_list(IDENTITY_TITLES)?),
            first_name: text("first_name", "First name"),
            middle_name: text("middle_name", "Middle name"),
            last_name: text("last_name", "Last name"),
            company: text("company", "Company"),
            email: text("email", "Email"),
            phone: text("phone", "Phone"),
            address1: text("address1", "Address 1"),
            address2: text("address2", "Address 2"),
            city: text("city", "City / Town"),
            state: text("state", "State / Province"),
            postal_code: text("postal_code", "Zip / Postal code"),
            country: text("country", "Country"),
            ssn: SecureField::new("ssn", "Social Security number"),
            passport_number: SecureField::new("passport_number", "Passport number"),
            license_number: SecureField::new("license_number", "License number"),
        })
    }

    fn detail(item: &VaultItem) -> Option<&Identity> {
        item.identity()
    }

    fn load(&mut self, identity: &Identity) {
        self.title.select_index(identity.title);
        let texts = [
            (&mut self.first_name, &identity.first_name),
            (&mut self.middle_name, &identity.middle_name),
            (&mut self.last_name, &identity.last_name),
            (&mut self.company, &identity.company),
            (&mut self.email, &identity.email),
            (&mut self.phone, &identity.phone),
            (&mut self.address1, &identity.address1),
            (&mut self.address2, &identity.address2),
            (&mut self.city, &identity.city),
            (&mut self.state, &identity.state),
            (&mut self.postal_code, &identity.postal_code),
            (&mut self.country, &identity.country),
        ];
        for (input, value) in texts {
            input.set_text(value.as_deref().unwrap_or_default());
        }
        self.ssn.set_text(identity.ssn.as_deref().unwrap_or_default());
        self.passport_number
            .set_text(identity.passport_number.as_deref().unwrap_or_default());
        self.license_number
            .set_text(identity.license_number.as_deref().unwrap_or_default());
    }

    fn update(&self, current: Option<&Identity>) -> Identity {
        let mut identity = current.cloned().unwrap_or_default();
        identity.title = self.title.selected_index();
        identity.first_name = owned(&self.first_name);
        identity.middle_name = owned(&self.middle_name);
        identity.last_name = owned(&self.last_name);
        identity.company = owned(&self.company);
        identity.email = owned(&self.email);
        identity.phone = owned(&self.phone);
        identity.address1 = owned(&self.address1);
        identity.address2 = owned(&self.address2);
        identity.city = owned(&self.city);
        identity.state = owned(&self.state);
        identity.postal_code = owned(&self.postal_code);
        identity.country = owned(&self.country);
        identity.ssn = Some(self.ssn.text().to_string());
        identity.passport_number = Some(self.passport_number.text().to_string());
        identity.license_number = Some(self.license_number.text().to_string());
        identity
    }

    fn append_tab_order(&self, order: &mut TabOrder, start: usize) -> usize {
        order.append(start, self.controls().iter().flat_map(ControlRef::tab_stops))
    }

    fn controls(&self) -> Vec<ControlRef<'_>> {
        vec![
            ControlRef::Select(&self.title),
            ControlRef::Text(&self.first_name),
            ControlRef::Text(&self.middle_name),
            ControlRef::Text(&self.last_name),
            ControlRef::Text(&self.company),
            ControlRef::Text(&self.email),
            ControlRef::Text(&self.phone),
            ControlRef::Text(&self.address1),
            ControlRef::Text(&self.address2),
            ControlRef::Text(&self.city),
            ControlRef::Text(&self.state),
            ControlRef::Text(&self.postal_code),
            ControlRef::Text(&self.country),
            ControlRef::Secure(&self.ssn),
            ControlRef::Secure(&self.passport_number),
            ControlRef::Secure(&self.license_number),
        ]
    }

    fn controls_mut(&mut self) -> Vec<ControlMut<'_>> {
        vec![
            ControlMut::Select(&mut self.title),
            ControlMut::Text(&mut self.first_name),
            ControlMut::Text(&mut self.middle_name),
            ControlMut::Text(&mut self.last_name),
            ControlMut::Text(&mut self.company),
            ControlMut::Text(&mut self.email),
            ControlMut::Text(&mut self.phone),
            ControlMut::Text(&mut self.address1),
            ControlMut::Text(&mut self.address2),
            ControlMut::Text(&mut self.city),
            ControlMut::Text(&mut self.state),
            ControlMut::Text(&mut self.postal_code),
            ControlMut::Text(&mut self.country),
            ControlMut::Secure(&mut self.ssn),
            ControlMut::Secure(&mut self.passport_number),
            ControlMut::Secure(&mut self.license_number),
        ]
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::codelist::CodeListManager;

    #[test]
    fn test_load_then_update_round_trips() {
        let lists = CodeListManager::with_builtin_lists();
        let mut fields = IdentityFields::build(&lists).unwrap();
        let identity = Identity {
            title: Some(5),
            first_name: Some("Grace".into()),
            last_name: Some("Hopper".into()),
            city: Some("Arlington".into()),
            ssn: Some("078-05-1120".into()),
            ..Identity::default()
        };

        fields.load(&identity);
        assert_eq!(fields.title.selected_item().unwrap().label, "Dr");
        assert!(fields.ssn.is_masked());

        let updated = fields.update(Some(&identity));
        assert_eq!(updated.title, Some(5));
        assert_eq!(updated.first_name.as_deref(), Some("Grace"));
        assert_eq!(updated.ssn.as_deref(), Some("078-05-1120"));
        assert_eq!(updated.middle_name.as_deref(), Some(""));
    }

    #[test]
    fn test_tab_order_has_every_control_once() {
        let lists = CodeListManager::with_builtin_lists();
        let fields = IdentityFields::build(&lists).unwrap();
        let mut order = TabOrder::new();

        // 13 single-stop controls plus three secure fields with three stops each.
        let next = fields.append_tab_order(&mut order, 4);
        assert_eq!(next, 4 + 13 + 9);
        assert_eq!(order.stops().len(), 22);
        assert!(order.is_strictly_increasing());
        assert_eq!(order.position_of(ControlId::Copy("license_number")), Some(25));
    }
}
