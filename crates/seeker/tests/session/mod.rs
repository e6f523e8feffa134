use std::sync::{
  atomic::{AtomicBool, AtomicU64, Ordering},
  Arc,
};

use async_trait::async_trait;
use seeker::{
  client::SearchBackend,
  error::{Result, SeekerError},
  query::QueryState,
  resource::SearchResults,
  session::{Phase, RefreshOutcome, SearchSession},
};
use tokio::sync::Notify;

use crate::{empty_history, sample_results, TestResult};

/// Backend that counts calls and can be switched into a failing mode.
///
/// Successful responses encode the request's page number in
/// `pagination.total` so tests can tell which query a page answered.
#[derive(Default)]
struct StubBackend {
  calls: AtomicU64,
  fail:  AtomicBool,
}

impl StubBackend {
  fn calls(&self) -> u64 { self.calls.load(Ordering::SeqCst) }

  fn set_failing(&self, failing: bool) { self.fail.store(failing, Ordering::SeqCst); }
}

#[async_trait]
impl SearchBackend for StubBackend {
  async fn fetch(&self, state: &QueryState) -> Result<SearchResults> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    if self.fail.load(Ordering::SeqCst) {
      return Err(SeekerError::InvalidQuery("stub backend set to fail".into()));
    }
    Ok(sample_results(u64::from(state.page)))
  }
}

/// Backend whose first request blocks until the test releases it, so a
/// second, newer request can finish first.
struct GatedBackend {
  calls:         AtomicU64,
  first_started: Notify,
  release_first: Notify,
}

impl GatedBackend {
  fn new() -> Self {
    Self { calls: AtomicU64::new(0), first_started: Notify::new(), release_first: Notify::new() }
  }
}

#[async_trait]
impl SearchBackend for GatedBackend {
  async fn fetch(&self, _state: &QueryState) -> Result<SearchResults> {
    if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
      self.first_started.notify_one();
      self.release_first.notified().await;
      // The slow response for the superseded query
      Ok(sample_results(1))
    } else {
      Ok(sample_results(2))
    }
  }
}

fn session_with(backend: Arc<dyn SearchBackend>) -> SearchSession {
  SearchSession::new(backend, empty_history())
}

#[tokio::test]
async fn test_idle_state_never_issues_a_request() {
  let backend = Arc::new(StubBackend::default());
  let session = session_with(backend.clone());

  assert_eq!(session.refresh().await, RefreshOutcome::Idle);
  assert_eq!(backend.calls(), 0);
  assert_eq!(session.results(), None);
  assert_eq!(session.phase(), Phase::Idle);
}

#[tokio::test]
async fn test_refresh_commits_results_and_records_history() {
  let backend = Arc::new(StubBackend::default());
  let session = session_with(backend.clone());

  session.update(|state| state.set_search_text("react"));
  let outcome = session.refresh().await;

  assert!(matches!(outcome, RefreshOutcome::Committed(_)));
  assert_eq!(backend.calls(), 1);
  assert!(session.results().is_some());
  assert_eq!(session.recent_searches(), ["react"]);
}

#[tokio::test]
async fn test_filter_only_search_is_not_recorded() {
  let backend = Arc::new(StubBackend::default());
  let session = session_with(backend.clone());

  session.update(|state| state.toggle_tag("frontend"));
  let outcome = session.refresh().await;

  // The query ran, but there is no search text to remember
  assert!(matches!(outcome, RefreshOutcome::Committed(_)));
  assert!(session.recent_searches().is_empty());
}

#[tokio::test]
async fn test_returning_to_idle_clears_results() {
  let backend = Arc::new(StubBackend::default());
  let session = session_with(backend.clone());

  session.update(|state| state.set_search_text("react"));
  session.refresh().await;
  assert!(session.results().is_some());

  session.update(|state| state.set_search_text(""));
  assert_eq!(session.refresh().await, RefreshOutcome::Idle);
  assert_eq!(session.results(), None);
  assert_eq!(backend.calls(), 1);
}

#[tokio::test]
async fn test_failure_keeps_previous_results() {
  let backend = Arc::new(StubBackend::default());
  let session = session_with(backend.clone());

  session.update(|state| state.set_search_text("react"));
  session.refresh().await;
  let committed = session.results();
  assert!(committed.is_some());

  backend.set_failing(true);
  session.update(|state| state.set_search_text("vue"));
  assert_eq!(session.refresh().await, RefreshOutcome::Failed);

  // Stale-but-consistent: the old page is still what the renderer sees
  assert_eq!(session.results(), committed);
  // And the failed search never reaches the history
  assert_eq!(session.recent_searches(), ["react"]);
}

#[test]
fn test_commit_rejects_stale_tickets() {
  let session = session_with(Arc::new(StubBackend::default()));

  let first = session.begin_ticket();
  let second = session.begin_ticket();

  // The newer response lands first and wins
  assert!(session.commit(second, sample_results(2)));
  // The older response resolves afterwards and is discarded
  assert!(!session.commit(first, sample_results(1)));

  assert_eq!(session.results().unwrap().pagination.total, 2);
}

#[test]
fn test_commit_requires_the_newest_ticket() {
  let session = session_with(Arc::new(StubBackend::default()));

  let first = session.begin_ticket();
  assert!(session.commit(first, sample_results(1)));

  // Once a newer request exists, the old ticket is dead even though its
  // response already committed once
  let _second = session.begin_ticket();
  assert!(!session.commit(first, sample_results(1)));
}

#[tokio::test]
async fn test_superseding_refresh_wins_regardless_of_arrival_order() -> TestResult<()> {
  let backend = Arc::new(GatedBackend::new());
  let session = Arc::new(SearchSession::new(backend.clone(), empty_history()));

  session.update(|state| state.set_search_text("alpha"));
  let slow = tokio::spawn({
    let session = session.clone();
    async move { session.refresh().await }
  });

  // Wait until the first request is actually in flight, then supersede it
  backend.first_started.notified().await;
  assert_eq!(session.phase(), Phase::Loading);

  session.update(|state| state.set_search_text("beta"));
  let fast = session.refresh().await;
  assert!(matches!(fast, RefreshOutcome::Committed(_)));

  // Now let the stale response arrive late
  backend.release_first.notify_one();
  assert_eq!(slow.await?, RefreshOutcome::Superseded);

  // The visible state reflects the newest query, never the stale one
  assert_eq!(session.results().unwrap().pagination.total, 2);
  assert_eq!(session.phase(), Phase::Idle);
  Ok(())
}
