use crate::{CodeIndex, ItemType};
use serde::{Deserialize, Serialize};

/// Payment card. Every field is optional here; required-ness is decided by the editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Card {
    pub cardholder_name: Option<String>,
    pub number: Option<String>,
    /// Index into the `ExpiryMonths` code list.
    pub exp_month: Option<CodeIndex>,
    pub exp_year: Option<String>,
    /// Index into the `CardBrands` code list.
    pub brand: Option<CodeIndex>,
    pub code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginUri {
    pub uri: Option<String>,
    /// Index into the `UriMatchTypes` code list; `None` means the client default.
    pub match_type: Option<CodeIndex>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Login {
    pub username: Option<String>,
    pub password: Option<String>,
    pub totp: Option<String>,
    pub uris: Vec<LoginUri>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecureNote {
    /// 0 is the generic note kind, the only one clients create today.
    pub note_type: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Identity {
    /// Index into the `IdentityTitles` code list.
    pub title: Option<CodeIndex>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub ssn: Option<String>,
    pub passport_number: Option<String>,
    pub license_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemDetails {
    Login(Login),
    SecureNote(SecureNote),
    Card(Card),
    Identity(Identity),
}

impl ItemDetails {
    #[must_use]
    pub const fn item_type(&self) -> ItemType {
        match self {
            ItemDetails::Login(_) => ItemType::Login,
            ItemDetails::SecureNote(_) => ItemType::SecureNote,
            ItemDetails::Card(_) => ItemType::Card,
            ItemDetails::Identity(_) => ItemType::Identity,
        }
    }
}

impl From<Card> for ItemDetails {
    fn from(card: Card) -> Self {
        ItemDetails::Card(card)
    }
}

impl From<Login> for ItemDetails {
    fn from(login: Login) -> Self {
        ItemDetails::Login(login)
    }
}

impl From<SecureNote> for ItemDetails {
    fn from(note: SecureNote) -> Self {
        ItemDetails::SecureNote(note)
    }
}

impl From<Identity> for ItemDetails {
    fn from(identity: Identity) -> Self {
        ItemDetails::Identity(identity)
    }
}
