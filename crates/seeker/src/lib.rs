//! Search and filter engine for career-development resources.
//!
//! `seeker` is a client-side engine for querying a remote catalog of
//! career-development resources, providing:
//!
//! - A canonical, serializable query state (text, filters, sort, pagination)
//! - Bidirectional mapping between query states and shareable URL query strings
//! - A persisted, capped history of recent searches for autocomplete
//! - A remote query executor with last-issued-wins ordering under rapid
//!   re-querying
//!
//! # Features
//!
//! - **Total state operations**: every mutation of the query state is a total
//!   function; there is no invalid in-memory state to defend against
//! - **Minimal shareable URLs**: equal logical states always serialize to the
//!   same minimal query string, with defaults omitted
//! - **Stale-response discipline**: each request carries a monotonic ticket and
//!   only the most recently issued request may update visible results
//! - **Degrade, don't crash**: network failures keep the previous results;
//!   storage failures leave the history running in memory
//!
//! # Getting Started
//!
//! ```no_run
//! use seeker::{config::Config, Seeker};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   // Assemble the engine from a configuration
//!   let seeker = Seeker::with_config(Config::new("https://api.example.com/resources/search"))?;
//!
//!   // Mutate the query state
//!   seeker.session.update(|state| {
//!     state.set_search_text("react");
//!     state.toggle_tag("frontend");
//!   });
//!
//!   // Run the search; the outcome says whether results committed
//!   let outcome = seeker.session.refresh().await;
//!   println!("{outcome:?}");
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`query`]: Query state and URL query-string synchronization
//! - [`resource`]: Wire types for the backend contract (resources, facets,
//!   pagination)
//! - [`history`]: Recent-search cache backed by the [`storage`] port
//! - [`client`]: HTTP backend and fire-and-forget analytics client
//! - [`session`]: The executor tying state, history, and backend together
//! - [`config`]: TOML configuration and platform default paths
//!
//! # Design Philosophy
//!
//! The engine never throws past its own boundary: failed requests are logged
//! and leave prior results visible, corrupt storage loads as empty, and URL
//! parsing falls back to defaults instead of erroring. The one correctness
//! property treated as non-negotiable is response ordering: a stale response
//! must never overwrite a newer one.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  path::{Path, PathBuf},
  sync::Arc,
  time::Duration,
};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

pub mod client;
pub mod config;
pub mod error;
pub mod history;
pub mod query;
pub mod resource;
pub mod session;
pub mod storage;

use crate::{
  client::*, config::*, error::*, history::*, query::*, resource::*, session::*, storage::*,
};

/// Common traits and types for ergonomic imports.
///
/// # Usage
///
/// ```no_run
/// use seeker::{prelude::*, query::QueryState};
///
/// fn example() -> Result<(), SeekerError> {
///   let state = QueryState::text("react");
///   state.validate()?;
///   Ok(())
/// }
/// ```
pub mod prelude {
  pub use crate::{client::SearchBackend, error::SeekerError, storage::KeyValueStore};
}

/// Fully assembled search engine: configuration plus a ready [`SearchSession`].
///
/// This is the convenience entry point used by the CLI. Library users who want
/// to supply their own backend or storage can construct a [`SearchSession`]
/// directly.
///
/// # Examples
///
/// ```no_run
/// use seeker::{config::Config, Seeker};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let seeker = Seeker::with_config(Config::new("https://api.example.com/resources/search"))?;
/// println!("history at {:?}", seeker.config.history_dir());
/// # Ok(())
/// # }
/// ```
pub struct Seeker {
  /// The configuration this engine was assembled from.
  pub config:  Config,
  /// The live search session driving queries against the backend.
  pub session: SearchSession,
}

impl Seeker {
  /// Loads the configuration at `path` and assembles the engine from it.
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    Self::with_config(Config::from_path(path)?)
  }

  /// Assembles the engine from an in-memory configuration.
  ///
  /// This wires the file-backed recent-search store, the HTTP backend with the
  /// configured timeout, and (when configured) the analytics client into one
  /// [`SearchSession`].
  ///
  /// # Errors
  ///
  /// Returns an error when the configured API or analytics URL fails to parse
  /// or the HTTP client cannot be constructed.
  pub fn with_config(config: Config) -> Result<Self> {
    let history = RecentSearches::load(Box::new(FileStore::new(config.history_dir())));
    let backend = HttpBackend::with_timeout(
      &config.api_url,
      Duration::from_secs(config.request_timeout_secs),
    )?;

    let mut session = SearchSession::new(Arc::new(backend), history);
    if let Some(endpoint) = &config.analytics_url {
      session = session.with_analytics(AnalyticsClient::new(endpoint)?);
    }

    Ok(Self { config, session })
  }
}
