//! Key-value stores for the single saved-game blob

use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Store for one serialized game blob
///
/// Writes and removes are fire-and-forget. A read that fails for any reason
/// reports `None`, which callers treat the same as "no saved game".
pub trait SaveStore {
    /// Read the blob, `None` if absent or unreadable
    fn get(&self) -> Option<String>;

    /// Write the blob, best-effort
    fn set(&mut self, value: &str);

    /// Delete the blob, best-effort
    fn remove(&mut self);
}

/// On-disk store under the platform config directory
pub struct FileStore {
    save_path: PathBuf,
}

impl FileStore {
    /// Create a store at the default platform location
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined or created.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "wordle-tui").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not determine config directory")
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(Self {
            save_path: config_dir.join("game.json"),
        })
    }

    /// Create a store at an explicit path (used by the `--save-file` flag)
    #[must_use]
    pub fn at(save_path: PathBuf) -> Self {
        Self { save_path }
    }
}

impl SaveStore for FileStore {
    fn get(&self) -> Option<String> {
        fs::read_to_string(&self.save_path).ok()
    }

    fn set(&mut self, value: &str) {
        // Best-effort: a full disk or revoked permissions must not kill the game
        let _ = fs::write(&self.save_path, value);
    }

    fn remove(&mut self) {
        let _ = fs::remove_file(&self.save_path);
    }
}

/// In-memory store for tests and ephemeral play
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    blob: Option<String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with a blob, as if a game had been saved earlier
    #[must_use]
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
        }
    }
}

impl SaveStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.blob.clone()
    }

    fn set(&mut self, value: &str) {
        self.blob = Some(value.to_string());
    }

    fn remove(&mut self) {
        self.blob = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn memory_store_starts_empty() {
        let store = MemoryStore::new();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn memory_store_set_get_remove() {
        let mut store = MemoryStore::new();
        store.set("blob");
        assert_eq!(store.get().as_deref(), Some("blob"));

        store.set("newer");
        assert_eq!(store.get().as_deref(), Some("newer"));

        store.remove();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn memory_store_remove_when_empty_is_noop() {
        let mut store = MemoryStore::new();
        store.remove();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn file_store_round_trip() {
        let dir = std::env::temp_dir().join("wordle-tui-store-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("game.json");
        let _ = fs::remove_file(&path);

        let mut store = FileStore::at(path.clone());
        assert_eq!(store.get(), None);

        store.set(r#"{"target":"CRANE"}"#);
        assert_eq!(store.get().as_deref(), Some(r#"{"target":"CRANE"}"#));

        store.remove();
        assert_eq!(store.get(), None);

        let _ = fs::remove_dir(&dir);
    }

    #[test]
    fn file_store_missing_file_reads_none() {
        let store = FileStore::at(std::env::temp_dir().join("wordle-tui-does-not-exist.json"));
        assert_eq!(store.get(), None);
    }
}
