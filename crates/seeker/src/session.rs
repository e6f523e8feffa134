//! The remote query executor: one session tying state, history and backend
//! together.
//!
//! [`SearchSession`] owns the canonical [`QueryState`], the visible results,
//! the recent-search history, and a [`SearchBackend`]. Its lifecycle is the
//! loop `Idle → Loading → {Success, Failure} → Idle`; every state change
//! re-enters `Loading` through [`SearchSession::refresh`].
//!
//! Two policies define the executor and are worth stating up front:
//!
//! - **Empty-state policy**: an idle state (no text, no filters) never issues
//!   a request. The alternative is an expensive unfiltered listing nobody
//!   asked for; the renderer shows an idle prompt instead.
//! - **Last-issued-wins**: every request carries a ticket from a monotonic
//!   counter and a response commits only while its ticket is still the newest
//!   issued. Under rapid successive changes, a slow stale response can never
//!   overwrite a newer one, regardless of arrival order.
//!
//! Failures degrade instead of propagating: a failed request logs and leaves
//! the previous results visible.

use std::sync::{
  atomic::{AtomicU64, Ordering},
  Mutex, MutexGuard, PoisonError,
};

use super::*;

/// Where the session currently is in its query lifecycle.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
  /// No request in flight.
  Idle,
  /// At least one request in flight.
  Loading,
}

/// What a call to [`SearchSession::refresh`] did.
///
/// `refresh` never fails from the caller's perspective; every degraded path
/// is an outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
  /// The state was idle; no request was issued and results were cleared.
  Idle,
  /// The response committed and is now the visible result set.
  Committed(SearchResults),
  /// A newer request was issued meanwhile; this response was discarded.
  Superseded,
  /// The request failed; the previous results remain visible.
  Failed,
}

/// A live search session against one backend.
///
/// All methods take `&self`; the session is safe to share behind an `Arc`
/// and drive from overlapping tasks, which is exactly the situation the
/// ticket discipline exists for.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use seeker::{
///   client::HttpBackend,
///   history::RecentSearches,
///   session::{RefreshOutcome, SearchSession},
///   storage::MemoryStore,
/// };
///
/// # async fn example() -> Result<(), seeker::error::SeekerError> {
/// let backend = HttpBackend::new("https://api.example.com/resources/search")?;
/// let history = RecentSearches::load(Box::new(MemoryStore::new()));
/// let session = SearchSession::new(Arc::new(backend), history);
///
/// session.update(|state| state.set_search_text("rust"));
/// if let RefreshOutcome::Committed(page) = session.refresh().await {
///   println!("{} matches", page.pagination.total);
/// }
/// # Ok(())
/// # }
/// ```
pub struct SearchSession {
  /// Transport the executor issues requests through.
  backend:   Arc<dyn SearchBackend>,
  /// Optional analytics sink for successful non-empty searches.
  analytics: Option<Arc<AnalyticsClient>>,
  /// Recent-search history, updated on successful non-empty searches.
  history:   Mutex<RecentSearches>,
  /// The canonical query state.
  state:     Mutex<QueryState>,
  /// The visible results; `None` renders as the idle prompt.
  results:   Mutex<Option<SearchResults>>,
  /// Ticket of the most recently issued request.
  issued:    AtomicU64,
  /// Number of requests currently in flight.
  in_flight: AtomicU64,
}

impl SearchSession {
  /// Creates a session over the given backend and history.
  pub fn new(backend: Arc<dyn SearchBackend>, history: RecentSearches) -> Self {
    Self {
      backend,
      analytics: None,
      history: Mutex::new(history),
      state: Mutex::new(QueryState::default()),
      results: Mutex::new(None),
      issued: AtomicU64::new(0),
      in_flight: AtomicU64::new(0),
    }
  }

  /// Attaches a fire-and-forget analytics sink.
  pub fn with_analytics(mut self, analytics: AnalyticsClient) -> Self {
    self.analytics = Some(Arc::new(analytics));
    self
  }

  /// A snapshot of the current query state.
  pub fn state(&self) -> QueryState { lock(&self.state).clone() }

  /// Applies a mutation to the query state.
  ///
  /// This is the single mutation point; pair it with [`refresh`](Self::refresh)
  /// to re-execute the query.
  pub fn update<F: FnOnce(&mut QueryState)>(&self, apply: F) {
    let mut state = lock(&self.state);
    apply(&mut state);
  }

  /// Replaces the search text and returns autocomplete suggestions.
  ///
  /// Suggestions come from the recent-search history and are only looked up
  /// once the text is longer than one character, mirroring when a renderer
  /// would show a dropdown.
  pub fn set_search_text(&self, text: impl Into<String>) -> Vec<String> {
    let text = text.into();
    let suggestions =
      if text.chars().count() > 1 { lock(&self.history).suggest(&text) } else { Vec::new() };
    lock(&self.state).set_search_text(text);
    suggestions
  }

  /// The currently visible results, if any response has committed.
  pub fn results(&self) -> Option<SearchResults> { lock(&self.results).clone() }

  /// Whether a request is currently in flight.
  pub fn phase(&self) -> Phase {
    if self.in_flight.load(Ordering::SeqCst) > 0 {
      Phase::Loading
    } else {
      Phase::Idle
    }
  }

  /// Autocomplete suggestions for a prefix, most recent first, capped.
  pub fn suggest(&self, prefix: &str) -> Vec<String> { lock(&self.history).suggest(prefix) }

  /// The recorded search history, most recent first.
  pub fn recent_searches(&self) -> Vec<String> { lock(&self.history).entries().to_vec() }

  /// Clears the recorded search history.
  pub fn clear_history(&self) { lock(&self.history).clear() }

  /// Issues a ticket for a request about to be sent.
  ///
  /// Tickets are strictly increasing; issuing a new one invalidates every
  /// earlier ticket for commit purposes. Exposed so custom transports can
  /// participate in the same ordering discipline [`refresh`](Self::refresh)
  /// uses.
  pub fn begin_ticket(&self) -> u64 { self.issued.fetch_add(1, Ordering::SeqCst) + 1 }

  /// Commits a response page if its ticket is still the newest issued.
  ///
  /// Returns `false`, and changes nothing, for a stale ticket. Commit is
  /// atomic from a reader's perspective: [`results`](Self::results) observes
  /// either the previous page or the whole new one.
  pub fn commit(&self, ticket: u64, page: SearchResults) -> bool {
    if ticket != self.issued.load(Ordering::SeqCst) {
      debug!("discarding stale response for request {ticket}");
      return false;
    }
    *lock(&self.results) = Some(page);
    true
  }

  /// Re-executes the query for the current state.
  ///
  /// - An idle state short-circuits: no request, results cleared, outcome
  ///   [`RefreshOutcome::Idle`].
  /// - On success the page commits (subject to the ticket check), a
  ///   non-empty search text is recorded in the history, and an analytics
  ///   event fires best-effort.
  /// - On failure the previous results stay visible and the outcome is
  ///   [`RefreshOutcome::Failed`]; the error itself is logged.
  pub async fn refresh(&self) -> RefreshOutcome {
    let state = self.state();
    if state.is_idle() {
      *lock(&self.results) = None;
      return RefreshOutcome::Idle;
    }

    let ticket = self.begin_ticket();
    self.in_flight.fetch_add(1, Ordering::SeqCst);
    let fetched = self.backend.fetch(&state).await;
    self.in_flight.fetch_sub(1, Ordering::SeqCst);

    match fetched {
      Ok(page) => {
        if !self.commit(ticket, page.clone()) {
          return RefreshOutcome::Superseded;
        }
        if !state.search_text.is_empty() {
          lock(&self.history).record(&state.search_text);
          self.report_search(&state.search_text, page.pagination.total);
        }
        RefreshOutcome::Committed(page)
      },
      Err(e) => {
        warn!("search request failed, keeping previous results: {e}");
        RefreshOutcome::Failed
      },
    }
  }

  /// Spawns the analytics event off the main flow, logging any failure.
  fn report_search(&self, query: &str, results_count: u64) {
    let Some(analytics) = self.analytics.clone() else {
      return;
    };
    let event = SearchEvent { query: query.to_owned(), results_count };
    tokio::spawn(async move {
      if let Err(e) = analytics.report(&event).await {
        warn!("analytics event dropped: {e}");
      }
    });
  }
}

/// Locks a mutex, recovering the guard from a poisoned lock.
///
/// No code path panics while holding one of the session's locks, so a
/// poisoned lock still guards consistent data.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
  mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
