//! Key-value persistence port for durable client-side state.
//!
//! The engine's only durable state is small (a ten-entry list of recent
//! searches), so persistence is modeled as a minimal key-value port:
//! [`KeyValueStore::get`] and [`KeyValueStore::set`] over string payloads.
//! Anything that can hold a string per key can sit behind it.
//!
//! Two implementations ship with the crate: [`FileStore`], which keeps one
//! file per key under a data directory, and [`MemoryStore`] for tests and
//! ephemeral sessions.

use std::{
  collections::BTreeMap,
  fs,
  io::ErrorKind,
  sync::{Mutex, PoisonError},
};

use super::*;

/// Minimal persistence port: one string payload per key.
///
/// Implementations must tolerate concurrent readers; the engine itself never
/// writes a key from two places at once.
pub trait KeyValueStore: Send + Sync {
  /// Reads the payload stored under `key`, `None` when absent.
  fn get(&self, key: &str) -> Result<Option<String>>;

  /// Stores `value` under `key`, replacing any previous payload.
  fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// File-backed store keeping one file per key under a root directory.
///
/// The root is created lazily on first write, so constructing a store never
/// touches the file system.
///
/// # Examples
///
/// ```no_run
/// use seeker::storage::{FileStore, KeyValueStore};
///
/// # fn example() -> Result<(), seeker::error::SeekerError> {
/// let store = FileStore::new(FileStore::default_path());
/// store.set("recent-searches", "[]")?;
/// assert_eq!(store.get("recent-searches")?.as_deref(), Some("[]"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
  /// Directory holding one file per key.
  root: PathBuf,
}

impl FileStore {
  /// Creates a store rooted at the given directory.
  pub fn new(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }

  /// Returns the platform default data directory for this engine.
  ///
  /// - On Unix: `~/.local/share/seeker`
  /// - On macOS: `~/Library/Application Support/seeker`
  /// - On Windows: `%APPDATA%\seeker`
  /// - Fallback: `./seeker` in the current directory
  pub fn default_path() -> PathBuf {
    dirs::data_dir().unwrap_or_else(|| PathBuf::from(".")).join("seeker")
  }
}

impl KeyValueStore for FileStore {
  fn get(&self, key: &str) -> Result<Option<String>> {
    match fs::read_to_string(self.root.join(key)) {
      Ok(value) => Ok(Some(value)),
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
      Err(e) => Err(e.into()),
    }
  }

  fn set(&self, key: &str, value: &str) -> Result<()> {
    fs::create_dir_all(&self.root)?;
    fs::write(self.root.join(key), value)?;
    Ok(())
  }
}

/// In-memory store for tests and sessions that should leave no trace.
#[derive(Debug, Default)]
pub struct MemoryStore {
  /// Backing map behind a mutex so the store stays `Sync`.
  entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
  /// Creates an empty in-memory store.
  pub fn new() -> Self { Self::default() }
}

impl KeyValueStore for MemoryStore {
  fn get(&self, key: &str) -> Result<Option<String>> {
    let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
    Ok(entries.get(key).cloned())
  }

  fn set(&self, key: &str, value: &str) -> Result<()> {
    let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
    entries.insert(key.to_owned(), value.to_owned());
    Ok(())
  }
}
