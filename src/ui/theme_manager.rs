//! Theme mode selection, user theme overrides and their persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::io::{AppSettings, ConfigPaths};
use crate::ui::theme_def::{ThemeDefinition, ThemeVariant};

/// Which theme the user asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::System, ThemeMode::Light, ThemeMode::Dark];

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::System => "System",
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }

    /// Concrete variant, given what the windowing system reports.
    /// An unknown system preference counts as dark.
    pub fn resolve(self, system: Option<ThemeVariant>) -> ThemeVariant {
        match self {
            ThemeMode::Light => ThemeVariant::Light,
            ThemeMode::Dark => ThemeVariant::Dark,
            ThemeMode::System => system.unwrap_or(ThemeVariant::Dark),
        }
    }
}

/// Holds the light and dark themes and the user's mode selection.
pub struct ThemeManager {
    mode: ThemeMode,
    light: ThemeDefinition,
    dark: ThemeDefinition,
    themes_dir: PathBuf,
    settings_path: PathBuf,
}

impl ThemeManager {
    /// Load the persisted mode and any user theme overrides.
    pub fn new(paths: &ConfigPaths) -> Self {
        let themes_dir = paths.themes_dir();
        let settings_path = paths.settings();

        let settings = AppSettings::load(&settings_path).unwrap_or_else(|e| {
            tracing::warn!("ignoring settings: {e}");
            AppSettings::default()
        });

        write_reference_themes(&themes_dir);

        let mut manager = Self {
            mode: settings.theme_mode,
            light: ThemeDefinition::light(),
            dark: ThemeDefinition::dark(),
            themes_dir,
            settings_path,
        };
        manager.reload_user_themes();
        manager
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn themes_dir(&self) -> &Path {
        &self.themes_dir
    }

    /// The theme to paint with this frame.
    pub fn active(&self, system: Option<ThemeVariant>) -> &ThemeDefinition {
        match self.mode.resolve(system) {
            ThemeVariant::Light => &self.light,
            ThemeVariant::Dark => &self.dark,
        }
    }

    /// Switch mode and persist it. Returns `false` if nothing changed.
    pub fn set_mode(&mut self, mode: ThemeMode) -> bool {
        if mode == self.mode {
            return false;
        }
        self.mode = mode;
        tracing::info!(mode = mode.label(), "theme mode changed");
        let settings = AppSettings { theme_mode: mode };
        if let Err(e) = settings.save(&self.settings_path) {
            tracing::warn!("failed to save settings: {e}");
        }
        true
    }

    /// Re-read `light.json` / `dark.json` from the themes folder.
    pub fn reload_user_themes(&mut self) {
        self.light = load_override(&self.themes_dir.join("light.json"))
            .unwrap_or_else(ThemeDefinition::light);
        self.dark = load_override(&self.themes_dir.join("dark.json"))
            .unwrap_or_else(ThemeDefinition::dark);
    }
}

fn load_override(path: &Path) -> Option<ThemeDefinition> {
    let contents = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str::<ThemeDefinition>(&contents) {
        Ok(def) => {
            tracing::info!(theme = %def.meta.name, "loaded user theme {}", path.display());
            Some(def)
        }
        Err(e) => {
            tracing::warn!("failed to parse theme {}: {}", path.display(), e);
            None
        }
    }
}

/// Write the built-in themes as `_reference_*.json` on first run, so users
/// have an example to copy.
fn write_reference_themes(themes_dir: &Path) {
    if let Err(e) = std::fs::create_dir_all(themes_dir) {
        tracing::warn!("cannot create {}: {}", themes_dir.display(), e);
        return;
    }
    for (file, def) in [
        ("_reference_light.json", ThemeDefinition::light()),
        ("_reference_dark.json", ThemeDefinition::dark()),
    ] {
        let path = themes_dir.join(file);
        if path.exists() {
            continue;
        }
        if let Ok(json) = serde_json::to_string_pretty(&def) {
            if let Err(e) = std::fs::write(&path, json) {
                tracing::warn!("cannot write {}: {}", path.display(), e);
            }
        }
    }
}
