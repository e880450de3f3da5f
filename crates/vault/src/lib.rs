pub mod details;
pub mod document;

// Re-export commonly used types and functions for easier access
pub use details::{Card, Identity, ItemDetails, Login, LoginUri, SecureNote};
pub use document::{read_folders, read_item, write_item};

use color_eyre::eyre::eyre;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Stable integer key of an entry in a code list (card brand, expiry month, ...).
pub type CodeIndex = u32;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Login,
    SecureNote,
    Card,
    Identity,
}

impl std::str::FromStr for ItemType {
    type Err = color_eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "login" | "password" | "pwd" => Ok(ItemType::Login),
            "securenote" | "secure_note" | "secure-note" | "note" => Ok(ItemType::SecureNote),
            "card" | "creditcard" | "credit-card" => Ok(ItemType::Card),
            "identity" | "id" => Ok(ItemType::Identity),
            other => Err(eyre!("Unknown item type '{other}'")),
        }
    }
}

impl ItemType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ItemType::Login => "login",
            ItemType::SecureNote => "securenote",
            ItemType::Card => "card",
            ItemType::Identity => "identity",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [ItemType] {
        &[ItemType::Login, ItemType::SecureNote, ItemType::Card, ItemType::Identity]
    }

    /// Returns a user-friendly display name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            ItemType::Login => "Login",
            ItemType::SecureNote => "Secure Note",
            ItemType::Card => "Card",
            ItemType::Identity => "Identity",
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultFolder {
    pub id: String,
    pub name: String,
}

impl VaultFolder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultItem {
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub folder_id: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub favorite: bool,
    /// Typed sub-object. When present it always matches `item_type`.
    #[serde(default)]
    pub details: Option<ItemDetails>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub creation_date: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub revision_date: Option<OffsetDateTime>,
}

impl VaultItem {
    /// Creates an empty item of the given type with a fresh id and no sub-object.
    pub fn new(item_type: ItemType) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            item_type,
            name: String::new(),
            folder_id: None,
            notes: None,
            favorite: false,
            details: None,
            creation_date: None,
            revision_date: None,
        }
    }

    /// Attaches a typed sub-object.
    ///
    /// # Errors
    ///
    /// Returns an error if the sub-object's type differs from the item's declared type; the item
    /// is left unchanged in that case.
    pub fn set_details(&mut self, details: ItemDetails) -> color_eyre::Result<()> {
        if details.item_type() != self.item_type {
            return Err(eyre!(
                "Cannot attach {} details to a {} item",
                details.item_type(),
                self.item_type
            ));
        }
        self.details = Some(details);
        Ok(())
    }

    /// Returns `true` when the sub-object is absent or matches the declared type.
    pub fn is_consistent(&self) -> bool {
        self.details
            .as_ref()
            .is_none_or(|d| d.item_type() == self.item_type)
    }

    pub fn card(&self) -> Option<&Card> {
        match &self.details {
            Some(ItemDetails::Card(card)) => Some(card),
            _ => None,
        }
    }

    pub fn login(&self) -> Option<&Login> {
        match &self.details {
            Some(ItemDetails::Login(login)) => Some(login),
            _ => None,
        }
    }

    pub fn secure_note(&self) -> Option<&SecureNote> {
        match &self.details {
            Some(ItemDetails::SecureNote(note)) => Some(note),
            _ => None,
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        match &self.details {
            Some(ItemDetails::Identity(identity)) => Some(identity),
            _ => None,
        }
    }
}
