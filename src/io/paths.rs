use std::path::{Path, PathBuf};

/// Fixed key under which the profile snapshot is stored.
pub const PROFILE_KEY: &str = "userData";

/// Locations of every file the app reads or writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    root: PathBuf,
}

impl ConfigPaths {
    /// Resolve the OS config directory, falling back to the working directory.
    pub fn discover() -> Self {
        match directories::ProjectDirs::from("", "", "LifeCalendar") {
            Some(dirs) => Self::at(dirs.config_dir()),
            None => {
                tracing::warn!("no home directory found, using ./ for configuration");
                Self::at(".")
            }
        }
    }

    pub fn at(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn profile(&self) -> PathBuf {
        self.root.join(format!("{PROFILE_KEY}.json"))
    }

    pub fn settings(&self) -> PathBuf {
        self.root.join("settings.json")
    }

    pub fn themes_dir(&self) -> PathBuf {
        self.root.join("themes")
    }

    pub fn life_table(&self) -> PathBuf {
        self.root.join("life_expectancy.csv")
    }
}
