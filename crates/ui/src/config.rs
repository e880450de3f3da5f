use crate::codelist::{CodeListItem, CodeListManager};
use color_eyre::Result;
use color_eyre::eyre::eyre;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Show secure fields in plain text when a view opens
    pub reveal_secrets_on_open: bool,

    /// Character drawn for each hidden character of a secure field
    pub mask_char: char,

    /// Log filter directive used when `WARDEN_LOG` is not set
    pub log_filter: String,

    /// Log file path (the terminal belongs to the TUI)
    pub log_file: PathBuf,

    /// Extra code lists, registered next to the built-in ones
    pub code_lists: BTreeMap<String, Vec<CodeListItem>>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            reveal_secrets_on_open: false,
            mask_char: '•',
            log_filter: "info".to_string(),
            log_file: config_dir().join("warden.log"),
            code_lists: BTreeMap::new(),
        }
    }
}

impl UiConfig {
    /// Loads the configuration from `ui_config.json` in the Warden config directory.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or deserialized.
    pub fn load_default() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Loads the configuration from `path`, falling back to defaults when the file is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or deserialized.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: UiConfig =
                serde_json::from_str(&content).map_err(|e| eyre!("Invalid config {}: {e}", path.display()))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Writes the configuration as pretty-printed JSON, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> PathBuf {
        config_dir().join("ui_config.json")
    }

    /// Builds the code-list registry: built-in lists plus the ones declared here.
    ///
    /// A configured list with a built-in name replaces the built-in one.
    pub fn code_list_manager(&self) -> CodeListManager {
        let manager = CodeListManager::with_builtin_lists();
        for (name, items) in &self.code_lists {
            manager.register(name, items.clone());
        }
        manager
    }
}

fn config_dir() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("warden")
}
