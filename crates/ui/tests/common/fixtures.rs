#![allow(dead_code)]

use std::rc::Rc;
use time::macros::datetime;
use warden_vault::{Card, Identity, ItemType, Login, LoginUri, SecureNote, VaultFolder, VaultItem};

pub const CARD_NUMBER: &str = "4111111111111111";

pub fn sample_folders() -> Rc<[VaultFolder]> {
    vec![
        VaultFolder {
            id: "f-personal".to_string(),
            name: "Personal".to_string(),
        },
        VaultFolder {
            id: "f-work".to_string(),
            name: "Work".to_string(),
        },
    ]
    .into()
}

pub fn sample_card() -> Card {
    Card {
        cardholder_name: Some("Ada Lovelace".to_string()),
        number: Some(CARD_NUMBER.to_string()),
        exp_month: Some(11),
        exp_year: Some("2028".to_string()),
        brand: Some(3),
        code: Some("9876".to_string()),
    }
}

pub fn sample_card_item() -> VaultItem {
    let mut item = VaultItem::new(ItemType::Card);
    item.id = "card-1".to_string();
    item.name = "Company Amex".to_string();
    item.folder_id = Some("f-work".to_string());
    item.notes = Some("Expense card\nReport monthly".to_string());
    item.favorite = true;
    item.details = Some(sample_card().into());
    item.creation_date = Some(datetime!(2024-01-15 09:30 UTC));
    item.revision_date = Some(datetime!(2025-02-01 18:00 UTC));
    item
}

pub fn sample_login_item() -> VaultItem {
    let mut item = VaultItem::new(ItemType::Login);
    item.name = "Forge".to_string();
    item.details = Some(
        Login {
            username: Some("ada".to_string()),
            password: Some("correct horse battery staple".to_string()),
            totp: Some("JBSWY3DPEHPK3PXP".to_string()),
            uris: vec![
                LoginUri {
                    uri: Some("https://forge.example.com".to_string()),
                    match_type: Some(0),
                },
                LoginUri {
                    uri: Some("https://git.example.com".to_string()),
                    match_type: Some(1),
                },
            ],
        }
        .into(),
    );
    item
}

pub fn sample_identity_item() -> VaultItem {
    let mut item = VaultItem::new(ItemType::Identity);
    item.name = "Me".to_string();
    item.details = Some(
        Identity {
            title: Some(4),
            first_name: Some("Alex".to_string()),
            last_name: Some("Doe".to_string()),
            passport_number: Some("X1234567".to_string()),
            ..Identity::default()
        }
        .into(),
    );
    item
}

pub fn sample_note_item() -> VaultItem {
    let mut item = VaultItem::new(ItemType::SecureNote);
    item.name = "Wifi".to_string();
    item.notes = Some("guest / hunter2".to_string());
    item.details = Some(SecureNote::default().into());
    item
}
