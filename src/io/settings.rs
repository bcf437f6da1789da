use std::path::Path;

use serde::{Deserialize, Serialize};

use super::StoreError;
use crate::ui::theme_manager::ThemeMode;

/// Persisted user settings (lives in the OS config directory).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub theme_mode: ThemeMode,
}

impl AppSettings {
    /// Load settings; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        match std::fs::read_to_string(path) {
            Ok(json) => serde_json::from_str(&json).map_err(|e| StoreError::json(path, e)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(StoreError::io(path, e)),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| StoreError::json(path, e))?;
        std::fs::write(path, json).map_err(|e| StoreError::io(path, e))
    }
}
