pub mod clipboard;
pub mod codelist;
pub mod config;
pub mod controls;
pub mod detail;
pub mod error;
pub mod notice;
pub mod secure_field;
pub mod ui;

// Re-export commonly used types and functions for easier access
pub use clipboard::{Clipboard, SystemClipboard};
pub use codelist::{CodeList, CodeListItem, CodeListManager, CodeListProvider};
pub use config::UiConfig;
pub use controls::{ControlId, FolderPicker, SelectField, TextInput};
pub use detail::{
    CardDetailView, CardFields, DetailContext, DetailOutcome, DetailView, DetailViewState, IdentityDetailView,
    IdentityFields, ItemDetailView, ItemFields, LoginDetailView, LoginFields, SaveOutcome, SecureNoteDetailView,
    SecureNoteFields, TabOrder, open_detail_view,
};
pub use error::DetailViewError;
pub use notice::{Dialog, Notice, StatusType};
pub use secure_field::SecureField;
pub use ui::run_detail_view;
