use super::{ItemFields, TabOrder};
use crate::codelist::{CodeListProvider, URI_MATCH_TYPES};
use crate::controls::{ControlId, ControlMut, ControlRef, SelectField, TextInput};
use crate::error::DetailViewError;
use crate::secure_field::SecureField;
use warden_vault::{ItemType, Login, LoginUri, VaultItem};

/// Controls of a website login.
///
/// Only the first URI is editable here; any further URIs on the item are carried through
/// unchanged.
#[derive(Debug, Clone)]
pub struct LoginFields {
    pub username: TextInput,
    pub password: SecureField,
    pub totp: SecureField,
    pub uri: TextInput,
    pub uri_match: SelectField,
}

impl ItemFields for LoginFields {
    type Detail = Login;

    const ITEM_TYPE: ItemType = ItemType::Login;

    fn build(lists: &dyn CodeListProvider) -> Result<Self, DetailViewError> {
        Ok(Self {
            username: TextInput::new(ControlId::Field("username"), "Username"),
            password: SecureField::new("password", "Password"),
            totp: SecureField::new("totp", "Authenticator key"),
            uri: TextInput::new(ControlId::Field("uri"), "URI"),
            uri_match: SelectField::new(
                ControlId::Field("uri_match"),
                "Match detection",
                lists.get_list(URI_MATCH_TYPES)?,
            ),
        })
    }

    fn detail(item: &VaultItem) -> Option<&Login> {
        item.login()
    }

    fn load(&mut self, login: &Login) {
        self.username.set_text(login.username.as_deref().unwrap_or_default());
        self.password.set_text(login.password.as_deref().unwrap_or_default());
        self.totp.set_text(login.totp.as_deref().unwrap_or_default());

        let first = login.uris.first();
        self.uri
            .set_text(first.and_then(|u| u.uri.as_deref()).unwrap_or_default());
        self.uri_match.select_index(first.and_then(|u| u.match_type));
    }

    fn update(&self, current: Option<&Login>) -> Login {
        let mut login = current.cloned().unwrap_or_default();
        login.username = Some(self.username.text().to_string());
        login.password = Some(self.password.text().to_string());
        login.totp = Some(self.totp.text().to_string());

        let uri = LoginUri {
            uri: Some(self.uri.text().to_string()),
            match_type: self.uri_match.selected_index(),
        };
        match login.uris.first_mut() {
            Some(first) => *first = uri,
            None if !self.uri.text().is_empty() || uri.match_type.is_some() => login.uris.push(uri),
            None => {}
        }
        login
    }

    fn append_tab_order(&self, order: &mut TabOrder, start: usize) -> usize {
        order.append(start, self.controls().iter().flat_map(ControlRef::tab_stops))
    }

    fn controls(&self) -> Vec<ControlRef<'_>> {
        vec![
            ControlRef::Text(&self.username),
            ControlRef::Secure(&self.password),
            ControlRef::Secure(&self.totp),
            ControlRef::Text(&self.uri),
            ControlRef::Select(&self.uri_match),
        ]
    }

    fn controls_mut(&mut self) -> Vec<ControlMut<'_>> {
        vec![
            ControlMut::Text(&mut self.username),
            ControlMut::Secure(&mut self.password),
            ControlMut::Secure(&mut self.totp),
            ControlMut::Text(&mut self.uri),
            ControlMut::Select(&mut self.uri_match),
        ]
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::codelist::CodeListManager;

    fn login_with_two_uris() -> Login {
        Login {
            username: Some("ada".into()),
            password: Some("correct horse".into()),
            totp: None,
            uris: vec![
                LoginUri {
                    uri: Some("https://example.com".into()),
                    match_type: Some(3),
                },
                LoginUri {
                    uri: Some("https://backup.example.com".into()),
                    match_type: None,
                },
            ],
        }
    }

    #[test]
    fn test_first_uri_is_bound_and_the_rest_preserved() {
        let lists = CodeListManager::with_builtin_lists();
        let mut fields = LoginFields::build(&lists).unwrap();
        let original = login_with_two_uris();
        fields.load(&original);

        assert_eq!(fields.uri.text(), "https://example.com");
        assert_eq!(fields.uri_match.selected_item().unwrap().label, "Exact");

        fields.uri.set_text("https://example.org");
        let updated = fields.update(Some(&original));

        assert_eq!(updated.uris.len(), 2);
        assert_eq!(updated.uris[0].uri.as_deref(), Some("https://example.org"));
        assert_eq!(updated.uris[0].match_type, Some(3));
        assert_eq!(updated.uris[1], original.uris[1]);
        assert_eq!(updated.totp.as_deref(), Some(""));
    }

    #[test]
    fn test_update_without_uris_adds_one_only_when_filled() {
        let lists = CodeListManager::with_builtin_lists();
        let mut fields = LoginFields::build(&lists).unwrap();

        let login = fields.update(None);
        assert!(login.uris.is_empty());

        fields.uri.set_text("https://example.org");
        let login = fields.update(None);
        assert_eq!(login.uris.len(), 1);
        assert_eq!(login.uris[0].uri.as_deref(), Some("https://example.org"));
        assert_eq!(login.uris[0].match_type, None);
    }

    #[test]
    fn test_match_selection_alone_adds_a_uri() {
        let lists = CodeListManager::with_builtin_lists();
        let mut fields = LoginFields::build(&lists).unwrap();
        fields.uri_match.select_next();

        let login = fields.update(None);
        assert_eq!(login.uris.len(), 1);
        assert_eq!(login.uris[0].uri.as_deref(), Some(""));
        assert!(login.uris[0].match_type.is_some());
    }

    #[test]
    fn test_tab_order_covers_secure_actions() {
        let lists = CodeListManager::with_builtin_lists();
        let fields = LoginFields::build(&lists).unwrap();
        let mut order = TabOrder::new();

        let next = fields.append_tab_order(&mut order, 4);

        assert_eq!(next, 4 + 9);
        assert_eq!(order.position_of(ControlId::Field("username")), Some(4));
        assert_eq!(order.position_of(ControlId::Copy("password")), Some(7));
        assert_eq!(order.position_of(ControlId::Field("uri_match")), Some(12));
    }
}
