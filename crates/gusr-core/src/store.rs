use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::identity::GitUser;

pub const CONFIG_FILE_NAME: &str = "git-users.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unsupported operating system: {0}")]
    UnsupportedPlatform(String),
    #[error("unable to resolve the user home directory")]
    HomeNotFound,
    #[error("store IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse stored users: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Platform directory holding the users file. Windows keeps it under
/// `%APPDATA%\GitUser`, macOS and Linux under `~/.git-user`.
pub fn config_dir() -> Result<PathBuf, StoreError> {
    match std::env::consts::OS {
        "windows" => appdata_dir()
            .map(|dir| dir.join("GitUser"))
            .ok_or(StoreError::HomeNotFound),
        "macos" | "linux" => home_dir()
            .map(|home| home.join(".git-user"))
            .ok_or(StoreError::HomeNotFound),
        other => Err(StoreError::UnsupportedPlatform(other.to_string())),
    }
}

pub fn config_file_path() -> Result<PathBuf, StoreError> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

fn home_dir() -> Option<PathBuf> {
    // Minimal, dependency-free home resolution for common platforms.
    for key in ["HOME", "USERPROFILE"] {
        if let Ok(value) = std::env::var(key) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
    }
    None
}

fn appdata_dir() -> Option<PathBuf> {
    let value = std::env::var("APPDATA").ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(PathBuf::from(trimmed))
}

/// File-backed store for the ordered user collection. The path is injected at
/// construction so tests and callers never depend on process-global state.
#[derive(Debug, Clone)]
pub struct UserStore {
    path: PathBuf,
}

impl UserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform default location.
    pub fn open_default() -> Result<Self, StoreError> {
        Ok(Self::new(config_file_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the containing directory and seed an empty collection. An
    /// existing file is left untouched, well-formed or not.
    pub fn ensure(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        if self.path.exists() {
            return Ok(());
        }
        self.save(&[])
    }

    pub fn load(&self) -> Result<Vec<GitUser>, StoreError> {
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Truncate and rewrite the whole collection. Compact JSON plus a trailing
    /// newline, the same shape the file is seeded with.
    pub fn save(&self, users: &[GitUser]) -> Result<(), StoreError> {
        let mut body = serde_json::to_string(users)?;
        body.push('\n');
        fs::write(&self.path, body)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn store_in(temp: &TempDir) -> UserStore {
        UserStore::new(temp.path().join(".git-user").join(CONFIG_FILE_NAME))
    }

    #[test]
    fn ensure_creates_directory_and_empty_collection() {
        let temp = TempDir::new().expect("tempdir");
        let store = store_in(&temp);

        store.ensure().expect("ensure");
        assert!(store.path().is_file());
        assert_eq!(store.load().expect("load"), Vec::<GitUser>::new());
    }

    #[test]
    fn ensure_leaves_existing_file_untouched() {
        let temp = TempDir::new().expect("tempdir");
        let store = store_in(&temp);
        store.ensure().expect("ensure");
        store
            .save(&[GitUser::new("Alice", "alice@example.com")])
            .expect("save");
        let before = fs::read_to_string(store.path()).expect("read");

        store.ensure().expect("ensure again");
        let after = fs::read_to_string(store.path()).expect("read");
        assert_eq!(after, before);
    }

    #[test]
    fn save_then_load_round_trips_in_order() {
        let temp = TempDir::new().expect("tempdir");
        let store = store_in(&temp);
        store.ensure().expect("ensure");

        let users = vec![
            GitUser::new("Alice", "alice@example.com").with_gpg_key("ABCD1234"),
            GitUser::new("Bob", "bob@example.com"),
        ];
        store.save(&users).expect("save");
        assert_eq!(store.load().expect("load"), users);
    }

    #[test]
    fn save_overwrites_previous_content() {
        let temp = TempDir::new().expect("tempdir");
        let store = store_in(&temp);
        store.ensure().expect("ensure");
        store
            .save(&[
                GitUser::new("Alice", "alice@example.com"),
                GitUser::new("Bob", "bob@example.com"),
            ])
            .expect("save");

        let replacement = vec![GitUser::new("Carol", "carol@example.com")];
        store.save(&replacement).expect("save again");
        assert_eq!(store.load().expect("load"), replacement);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let temp = TempDir::new().expect("tempdir");
        let store = store_in(&temp);
        assert!(matches!(store.load(), Err(StoreError::Io(_))));
    }

    #[test]
    fn load_garbage_is_decode_error() {
        let temp = TempDir::new().expect("tempdir");
        let store = store_in(&temp);
        store.ensure().expect("ensure");
        fs::write(store.path(), "not json").expect("write");
        assert!(matches!(store.load(), Err(StoreError::Decode(_))));
    }

    #[test]
    fn stored_shape_matches_wire_format() {
        let temp = TempDir::new().expect("tempdir");
        let store = store_in(&temp);
        store.ensure().expect("ensure");
        store
            .save(&[GitUser::new("Alice", "alice@example.com")])
            .expect("save");

        let raw = fs::read_to_string(store.path()).expect("read");
        assert_eq!(
            raw.trim_end(),
            r#"[{"name":"Alice","email":"alice@example.com","gpgKey":""}]"#
        );
    }
}
