use seeker::{
  error::{Result, SeekerError},
  history::{RecentSearches, HISTORY_CAP, HISTORY_KEY, SUGGESTION_CAP},
  storage::{FileStore, KeyValueStore, MemoryStore},
};
use tempfile::tempdir;
use tracing_test::traced_test;

use crate::TestResult;

/// Store whose writes always fail, as with exhausted quota or read-only
/// storage. Reads succeed and find nothing.
struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
  fn get(&self, _key: &str) -> Result<Option<String>> { Ok(None) }

  fn set(&self, _key: &str, _value: &str) -> Result<()> {
    Err(SeekerError::Storage(std::io::Error::new(
      std::io::ErrorKind::Other,
      "storage quota exceeded",
    )))
  }
}

#[test]
fn test_record_is_most_recent_first() {
  let mut history = RecentSearches::load(Box::new(MemoryStore::new()));

  history.record("rust");
  history.record("react");
  history.record("python");

  assert_eq!(history.entries(), ["python", "react", "rust"]);
}

#[test]
fn test_record_ignores_empty_text() {
  let mut history = RecentSearches::load(Box::new(MemoryStore::new()));

  history.record("");
  assert!(history.is_empty());
}

#[test]
fn test_record_moves_duplicates_to_front() {
  let mut history = RecentSearches::load(Box::new(MemoryStore::new()));

  history.record("rust");
  history.record("react");
  history.record("rust");

  assert_eq!(history.entries(), ["rust", "react"]);
}

#[test]
fn test_cap_after_twelve_distinct_searches() {
  let mut history = RecentSearches::load(Box::new(MemoryStore::new()));

  for n in 1..=12 {
    history.record(&format!("query {n}"));
  }

  // Exactly the ten most recent, most recent first, no duplicates
  assert_eq!(history.entries().len(), HISTORY_CAP);
  assert_eq!(history.entries()[0], "query 12");
  assert_eq!(history.entries()[HISTORY_CAP - 1], "query 3");
}

#[test]
fn test_suggest_is_case_insensitive_and_capped() {
  let mut history = RecentSearches::load(Box::new(MemoryStore::new()));

  for n in 1..=8 {
    history.record(&format!("Rust topic {n}"));
  }
  history.record("unrelated");

  let suggestions = history.suggest("rust");
  assert_eq!(suggestions.len(), SUGGESTION_CAP);
  // Cache order: most recent matches first
  assert_eq!(suggestions[0], "Rust topic 8");

  // Matching is contains, not prefix-only
  assert_eq!(history.suggest("topic 3"), ["Rust topic 3"]);
  assert!(history.suggest("python").is_empty());
}

#[test]
fn test_reload_from_disk() -> TestResult<()> {
  let dir = tempdir()?;
  let store = FileStore::new(dir.path());

  let mut history = RecentSearches::load(Box::new(store.clone()));
  history.record("rust");
  history.record("react");

  let reloaded = RecentSearches::load(Box::new(store));
  assert_eq!(reloaded.entries(), ["react", "rust"]);
  Ok(())
}

#[traced_test]
#[test]
fn test_corrupt_storage_loads_as_empty() -> TestResult<()> {
  let dir = tempdir()?;
  let store = FileStore::new(dir.path());
  store.set(HISTORY_KEY, "{not json at all")?;

  let history = RecentSearches::load(Box::new(store.clone()));
  assert!(history.is_empty());
  assert!(history.suggest("anything").is_empty());

  // New records replace the corrupt payload
  let mut history = history;
  history.record("rust");
  let reloaded = RecentSearches::load(Box::new(store));
  assert_eq!(reloaded.entries(), ["rust"]);
  Ok(())
}

#[traced_test]
#[test]
fn test_write_failures_keep_the_session_working() {
  let mut history = RecentSearches::load(Box::new(ReadOnlyStore));

  history.record("rust");
  history.record("react");

  // The failure is logged, not raised, and the in-memory list keeps working
  assert!(logs_contain("failed to persist search history"));
  assert_eq!(history.entries(), ["react", "rust"]);
  assert_eq!(history.suggest("re"), ["react"]);
}

#[test]
fn test_clear_empties_the_cache() {
  let mut history = RecentSearches::load(Box::new(MemoryStore::new()));

  history.record("rust");
  history.clear();

  assert!(history.is_empty());
  assert!(history.suggest("rust").is_empty());
}
