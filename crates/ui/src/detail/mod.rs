//! Item detail views.
//!
//! `ItemDetailView` owns the lifecycle shared by every item type (View / Edit / Add, the
//! common controls, validation, save and cancel). Each item type supplies an `ItemFields`
//! implementation that declares its controls and moves values between them and the item's
//! typed sub-object. The base always drives the same sequence against it:
//! `build` → `load` (View/Edit only) → `append_tab_order`, and `update` on save.

mod card;
mod identity;
mod input;
mod login;
mod note;
mod render;
mod tab_order;
mod view;

pub use card::CardFields;
pub use identity::IdentityFields;
pub use login::LoginFields;
pub use note::SecureNoteFields;
pub use tab_order::{TabOrder, TabStop};
pub use view::ItemDetailView;

use crate::clipboard::Clipboard;
use crate::codelist::CodeListProvider;
use crate::config::UiConfig;
use crate::controls::{ControlMut, ControlRef};
use crate::error::DetailViewError;
use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use std::rc::Rc;
use warden_vault::{ItemDetails, ItemType, VaultFolder, VaultItem};

pub type CardDetailView = ItemDetailView<CardFields>;
pub type LoginDetailView = ItemDetailView<LoginFields>;
pub type SecureNoteDetailView = ItemDetailView<SecureNoteFields>;
pub type IdentityDetailView = ItemDetailView<IdentityFields>;

/// Fixed at construction; "View then Edit" is two separate views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailViewState {
    View,
    Edit,
    Add,
}

impl DetailViewState {
    pub const fn as_str(self) -> &'static str {
        match self {
            DetailViewState::View => "View",
            DetailViewState::Edit => "Edit",
            DetailViewState::Add => "Add",
        }
    }

    /// Whether controls start populated from the item.
    pub const fn loads_item(self) -> bool {
        matches!(self, DetailViewState::View | DetailViewState::Edit)
    }

    pub const fn is_editable(self) -> bool {
        matches!(self, DetailViewState::Edit | DetailViewState::Add)
    }
}

/// Collaborators handed to every view at construction.
#[derive(Clone, Copy)]
pub struct DetailContext<'a> {
    pub lists: &'a dyn CodeListProvider,
    pub config: &'a UiConfig,
}

/// The per-item-type half of a detail view.
pub trait ItemFields: Sized {
    /// Typed sub-object this field set edits.
    type Detail: Clone + Default + Into<ItemDetails>;

    const ITEM_TYPE: ItemType;

    /// Creates the controls in their empty state and binds code lists.
    ///
    /// # Errors
    ///
    /// Fails when a requested code list is unknown.
    fn build(lists: &dyn CodeListProvider) -> Result<Self, DetailViewError>;

    /// The item's sub-object, if present and of this type.
    fn detail(item: &VaultItem) -> Option<&Self::Detail>;

    /// Copies the sub-object into the controls.
    fn load(&mut self, detail: &Self::Detail);

    /// Returns the sub-object holding the current control values, starting from `current`
    /// (or a fresh default when the item has none yet).
    fn update(&self, current: Option<&Self::Detail>) -> Self::Detail;

    /// Assigns tab positions from `start` and returns the next free position.
    fn append_tab_order(&self, order: &mut TabOrder, start: usize) -> usize;

    /// Controls in display order.
    fn controls(&self) -> Vec<ControlRef<'_>>;

    fn controls_mut(&mut self) -> Vec<ControlMut<'_>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Item updated, view confirmed and closed.
    Saved,
    /// Validation failed; the view stays open with a blocking dialog.
    Rejected(String),
    /// The view was opened read-only.
    ReadOnly,
    /// The view had already been closed.
    Closed,
}

/// What the caller gets back when a view closes.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailOutcome {
    pub confirmed: bool,
    pub item: VaultItem,
}

/// Object-safe face of a detail view, so hosts can drive any item type.
pub trait DetailView {
    fn item_type(&self) -> ItemType;
    fn state(&self) -> DetailViewState;
    fn handle_key(&mut self, key: KeyEvent, clipboard: &mut dyn Clipboard);
    fn draw(&self, f: &mut Frame, area: Rect);
    fn is_closed(&self) -> bool;
    fn finish(self: Box<Self>) -> DetailOutcome;
}

impl<F: ItemFields> DetailView for ItemDetailView<F> {
    fn item_type(&self) -> ItemType {
        F::ITEM_TYPE
    }

    fn state(&self) -> DetailViewState {
        ItemDetailView::state(self)
    }

    fn handle_key(&mut self, key: KeyEvent, clipboard: &mut dyn Clipboard) {
        ItemDetailView::handle_key(self, key, clipboard);
    }

    fn draw(&self, f: &mut Frame, area: Rect) {
        ItemDetailView::draw(self, f, area);
    }

    fn is_closed(&self) -> bool {
        ItemDetailView::is_closed(self)
    }

    fn finish(self: Box<Self>) -> DetailOutcome {
        self.into_outcome()
    }
}

/// Opens the detail view matching the item's declared type.
///
/// # Errors
///
/// Returns an error if a code list needed by the view is unknown.
pub fn open_detail_view(
    item: VaultItem,
    folders: Rc<[VaultFolder]>,
    state: DetailViewState,
    ctx: DetailContext<'_>,
) -> Result<Box<dyn DetailView>, DetailViewError> {
    let view: Box<dyn DetailView> = match item.item_type {
        ItemType::Card => Box::new(CardDetailView::open(item, folders, state, ctx)?),
        ItemType::Login => Box::new(LoginDetailView::open(item, folders, state, ctx)?),
        ItemType::SecureNote => Box::new(SecureNoteDetailView::open(item, folders, state, ctx)?),
        ItemType::Identity => Box::new(IdentityDetailView::open(item, folders, state, ctx)?),
    };
    Ok(view)
}
