//! Recent-search history: a capped, deduplicated cache for autocomplete.
//!
//! The cache holds the most recent distinct search strings, newest first,
//! persisted as a JSON array under a single key of the [`storage`] port.
//! It is deliberately forgiving: a missing or corrupt persisted list loads
//! as empty, and a failing write (quota, read-only storage) is logged and
//! swallowed while the in-memory list keeps working for the session.

use super::*;

/// Storage key the history is persisted under.
pub const HISTORY_KEY: &str = "recent-searches";
/// Maximum number of entries retained.
pub const HISTORY_CAP: usize = 10;
/// Maximum number of suggestions returned per lookup.
pub const SUGGESTION_CAP: usize = 5;

/// Most-recent-first list of past search strings.
///
/// # Examples
///
/// ```
/// use seeker::{history::RecentSearches, storage::MemoryStore};
///
/// let mut history = RecentSearches::load(Box::new(MemoryStore::new()));
/// history.record("rust async");
/// history.record("rust traits");
///
/// assert_eq!(history.suggest("rust"), vec!["rust traits", "rust async"]);
/// assert_eq!(history.suggest("python"), Vec::<String>::new());
/// ```
pub struct RecentSearches {
  /// Durable backing store; failures on the write path are non-fatal.
  store:   Box<dyn KeyValueStore>,
  /// Entries, most recent first, never more than [`HISTORY_CAP`].
  entries: Vec<String>,
}

impl RecentSearches {
  /// Loads the history persisted in `store`.
  ///
  /// An absent key, an unreadable store, or a payload that fails to parse as
  /// a JSON string array all yield an empty history. Corruption is logged
  /// and discarded, never propagated.
  pub fn load(store: Box<dyn KeyValueStore>) -> Self {
    let entries = match store.get(HISTORY_KEY) {
      Ok(Some(raw)) => match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(entries) => entries,
        Err(e) => {
          warn!("discarding corrupt search history: {e}");
          Vec::new()
        },
      },
      Ok(None) => Vec::new(),
      Err(e) => {
        warn!("search history unavailable, starting empty: {e}");
        Vec::new()
      },
    };
    Self { store, entries }
  }

  /// Records a successfully executed search.
  ///
  /// Empty text is ignored. An existing occurrence anywhere in the list is
  /// moved to the front rather than duplicated, the list is truncated to
  /// [`HISTORY_CAP`], and the result is persisted best-effort.
  pub fn record(&mut self, text: &str) {
    if text.is_empty() {
      return;
    }
    self.entries.retain(|entry| entry != text);
    self.entries.insert(0, text.to_owned());
    self.entries.truncate(HISTORY_CAP);
    self.persist();
  }

  /// Returns cached entries containing `prefix` case-insensitively.
  ///
  /// Results keep cache order (most recent first) and are capped at
  /// [`SUGGESTION_CAP`].
  pub fn suggest(&self, prefix: &str) -> Vec<String> {
    let needle = prefix.to_lowercase();
    self
      .entries
      .iter()
      .filter(|entry| entry.to_lowercase().contains(&needle))
      .take(SUGGESTION_CAP)
      .cloned()
      .collect()
  }

  /// All cached entries, most recent first.
  pub fn entries(&self) -> &[String] { &self.entries }

  /// True when nothing has been recorded (or everything was cleared).
  pub fn is_empty(&self) -> bool { self.entries.is_empty() }

  /// Removes every entry and persists the empty list best-effort.
  pub fn clear(&mut self) {
    self.entries.clear();
    self.persist();
  }

  /// Writes the current list to the backing store, swallowing failures.
  fn persist(&self) {
    let raw = match serde_json::to_string(&self.entries) {
      Ok(raw) => raw,
      Err(e) => {
        warn!("failed to encode search history: {e}");
        return;
      },
    };
    if let Err(e) = self.store.set(HISTORY_KEY, &raw) {
      warn!("failed to persist search history, continuing in memory: {e}");
    }
  }
}
