use std::path::{Path, PathBuf};

use super::StoreError;
use crate::model::UserProfile;

/// Persists the last submitted profile as a single JSON snapshot.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot. A missing file means no profile has been saved yet.
    pub fn load(&self) -> Result<Option<UserProfile>, StoreError> {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };
        let profile = serde_json::from_str(&json).map_err(|e| StoreError::json(&self.path, e))?;
        Ok(Some(profile))
    }

    pub fn save(&self, profile: &UserProfile) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }
        let json =
            serde_json::to_string_pretty(profile).map_err(|e| StoreError::json(&self.path, e))?;
        std::fs::write(&self.path, json).map_err(|e| StoreError::io(&self.path, e))
    }

    /// Delete the snapshot. Clearing an absent snapshot is not an error.
    pub fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(&self.path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Gender;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn sample() -> UserProfile {
        UserProfile::new(
            NaiveDate::from_ymd_opt(1988, 11, 2).unwrap(),
            81.9,
            Gender::Male,
            "Switzerland",
        )
    }

    #[test]
    fn save_load_clear_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("nested").join("userData.json"));

        assert_eq!(store.load().unwrap(), None);
        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), Some(sample()));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        store.clear().unwrap();
    }

    #[test]
    fn reads_snapshot_written_by_hand() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("userData.json");
        std::fs::write(
            &path,
            r#"{"birthDate":"1988-11-02","lifeExpectancy":81.9,"gender":"male","country":"Switzerland"}"#,
        )
        .unwrap();
        assert_eq!(ProfileStore::new(path).load().unwrap(), Some(sample()));
    }

    #[test]
    fn corrupt_snapshot_is_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("userData.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = ProfileStore::new(path).load().unwrap_err();
        assert!(matches!(err, StoreError::Json { .. }), "{err}");
    }
}
