use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error;

/// Default file name of the saved-defaults store.
pub const SETTINGS_FILE_NAME: &str = "avdata.toml";

#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsDocument {
    #[serde(rename = "Defaults", default)]
    defaults: PersistedSettings,
}

/// The inputs of the last request, reloaded at startup and rewritten in
/// full on every request. Stored as a single `[Defaults]` table.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSettings {
    #[serde(rename = "API_Key", default)]
    pub api_key: String,
    #[serde(rename = "Symbol", default)]
    pub symbol: String,
    /// The catalog label of the selected series, e.g. `Daily Adjusted`.
    #[serde(rename = "Time_Series", default)]
    pub time_series: String,
    #[serde(rename = "Directory", default)]
    pub directory: String,
}

impl PersistedSettings {
    /// A missing or unparsable file yields empty defaults, same as an
    /// untouched install.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str::<SettingsDocument>(&content)
                .map(|document| document.defaults)
                .unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), error::Settings> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(error::Settings::Write)?;
            }
        }
        let document = SettingsDocument {
            defaults: self.clone(),
        };
        let content = toml::to_string(&document)?;
        std::fs::write(path, content).map_err(error::Settings::Write)?;
        Ok(())
    }

    /// The saved directory, or the user's documents folder when unset.
    pub fn directory_or_default(&self) -> PathBuf {
        if self.directory.is_empty() {
            dirs::document_dir().unwrap_or_else(|| PathBuf::from("."))
        } else {
            PathBuf::from(&self.directory)
        }
    }
}
