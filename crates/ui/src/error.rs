use warden_vault::ItemType;

/// Configuration errors that make a detail view impossible to build.
///
/// Validation failures are not errors: they are reported through `SaveOutcome::Rejected`
/// and the view stays open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailViewError {
    /// A field asked for a code list that has no defined source.
    UnknownListName(String),
    /// The item handed to a view is of a different type than the view edits.
    ItemTypeMismatch { expected: ItemType, found: ItemType },
}

impl std::fmt::Display for DetailViewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetailViewError::UnknownListName(name) => write!(f, "Unknown code list '{name}'"),
            DetailViewError::ItemTypeMismatch { expected, found } => {
                write!(f, "Cannot open a {found} item in the {expected} editor")
            }
        }
    }
}

impl std::error::Error for DetailViewError {}
