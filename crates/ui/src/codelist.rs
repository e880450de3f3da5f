use crate::error::DetailViewError;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::ops::Deref;
use std::rc::Rc;
use tracing::debug;
use warden_vault::CodeIndex;

pub const CARD_BRANDS: &str = "CardBrands";
pub const EXPIRY_MONTHS: &str = "ExpiryMonths";
pub const IDENTITY_TITLES: &str = "IdentityTitles";
pub const URI_MATCH_TYPES: &str = "UriMatchTypes";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeListItem {
    /// Stable key stored on vault items
    pub index: CodeIndex,
    /// Text shown in selection controls
    pub label: String,
}

impl CodeListItem {
    pub fn new(index: CodeIndex, label: impl Into<String>) -> Self {
        Self {
            index,
            label: label.into(),
        }
    }
}

/// Immutable, shared snapshot of a code list.
///
/// Cloning a `CodeList` clones the handle, not the entries, so every control bound to the
/// same list name sees the same slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeList(Rc<[CodeListItem]>);

impl CodeList {
    pub fn new(items: Vec<CodeListItem>) -> Self {
        Self(items.into())
    }

    /// On-screen position of the entry whose stable index is `index`.
    pub fn position_of(&self, index: CodeIndex) -> Option<usize> {
        self.0.iter().position(|item| item.index == index)
    }

    /// True when both handles point at the same cached slice.
    pub fn shares_with(&self, other: &CodeList) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for CodeList {
    type Target = [CodeListItem];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Source of named code lists. Views only see this trait, so tests can hand them a fake.
pub trait CodeListProvider {
    /// Returns the list registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns `DetailViewError::UnknownListName` if no source is defined for `name`.
    fn get_list(&self, name: &str) -> Result<CodeList, DetailViewError>;
}

type ListSource = Rc<dyn Fn() -> Vec<CodeListItem>>;

/// Process-wide registry of code lists, populated lazily and cached by name.
///
/// Built once at startup and passed by reference into each view.
#[derive(Default)]
pub struct CodeListManager {
    sources: RefCell<HashMap<String, ListSource>>,
    cache: RefCell<HashMap<String, CodeList>>,
}

impl CodeListManager {
    /// An empty registry with no sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry knowing the built-in lists (card brands, months, identity titles, URI match types).
    pub fn with_builtin_lists() -> Self {
        let manager = Self::new();
        manager.register_source(CARD_BRANDS, card_brands);
        manager.register_source(EXPIRY_MONTHS, expiry_months);
        manager.register_source(IDENTITY_TITLES, identity_titles);
        manager.register_source(URI_MATCH_TYPES, uri_match_types);
        manager
    }

    /// Defines how the list `name` is produced on first request.
    ///
    /// Lists are immutable once produced, so registering a source for a name that has already
    /// been populated does not change the cached snapshot.
    pub fn register_source<F>(&self, name: &str, source: F)
    where
        F: Fn() -> Vec<CodeListItem> + 'static,
    {
        self.sources.borrow_mut().insert(name.to_string(), Rc::new(source));
    }

    /// Registers a fixed list of entries under `name`.
    pub fn register(&self, name: &str, items: Vec<CodeListItem>) {
        self.register_source(name, move || items.clone());
    }

    pub fn is_cached(&self, name: &str) -> bool {
        self.cache.borrow().contains_key(name)
    }
}

impl CodeListProvider for CodeListManager {
    fn get_list(&self, name: &str) -> Result<CodeList, DetailViewError> {
        if let Some(list) = self.cache.borrow().get(name) {
            return Ok(list.clone());
        }

        // No borrow is held while the source runs, so a source may itself ask for lists.
        let source = self
            .sources
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| DetailViewError::UnknownListName(name.to_string()))?;
        let built = CodeList::new(source());

        // A re-entrant call may have populated the name meanwhile; its snapshot wins.
        let mut cache = self.cache.borrow_mut();
        let list = cache.entry(name.to_string()).or_insert_with(|| {
            debug!("Populated code list '{}' with {} entries", name, built.len());
            built
        });
        Ok(list.clone())
    }
}

fn card_brands() -> Vec<CodeListItem> {
    [
        "Mastercard",
        "Visa",
        "American Express",
        "Discover",
        "Diners Club",
        "JCB",
        "Maestro",
        "UnionPay",
        "RuPay",
        "Other",
    ]
    .into_iter()
    .zip(1..)
    .map(|(label, index)| CodeListItem::new(index, label))
    .collect()
}

fn expiry_months() -> Vec<CodeListItem> {
    [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ]
    .into_iter()
    .zip(1..)
    .map(|(label, index)| CodeListItem::new(index, label))
    .collect()
}

fn identity_titles() -> Vec<CodeListItem> {
    ["Mr", "Mrs", "Ms", "Mx", "Dr"]
        .into_iter()
        .zip(1..)
        .map(|(label, index)| CodeListItem::new(index, label))
        .collect()
}

fn uri_match_types() -> Vec<CodeListItem> {
    ["Base domain", "Host", "Starts with", "Exact", "Regular expression", "Never"]
        .into_iter()
        .zip(0..)
        .map(|(label, index)| CodeListItem::new(index, label))
        .collect()
}
