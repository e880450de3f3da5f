//! JSON documents standing in for the external vault store.
//!
//! The editor never persists on its own; the binary reads an item (and optionally a folder
//! list) from disk before opening a view and writes the item back after a confirmed save.

use crate::{VaultFolder, VaultItem};
use color_eyre::Result;
use color_eyre::eyre::eyre;
use std::fs;
use std::path::Path;

/// Reads a single vault item from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON for a `VaultItem`, or holds a
/// sub-object whose type differs from the declared item type.
pub fn read_item(path: &Path) -> Result<VaultItem> {
    let content = fs::read_to_string(path).map_err(|e| eyre!("Failed to read {}: {e}", path.display()))?;
    let item: VaultItem = serde_json::from_str(&content)?;
    if !item.is_consistent() {
        return Err(eyre!(
            "Item '{}' declares type {} but carries different details",
            item.name,
            item.item_type
        ));
    }
    Ok(item)
}

/// Writes a vault item as pretty-printed JSON, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created, serialization fails or the file
/// cannot be written.
pub fn write_item(path: &Path, item: &VaultItem) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let content = serde_json::to_string_pretty(item)?;
    fs::write(path, content)?;
    Ok(())
}

/// Reads the folder list. A missing file is an empty list.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn read_folders(path: &Path) -> Result<Vec<VaultFolder>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    let folders: Vec<VaultFolder> = serde_json::from_str(&content)?;
    Ok(folders)
}
