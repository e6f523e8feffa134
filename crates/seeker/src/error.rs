//! Error types for the seeker library.
//!
//! This module provides a single error type covering every failure mode in
//! the engine:
//! - Network requests against the resources and analytics endpoints
//! - Key-value storage behind the recent-search history
//! - Configuration parsing
//! - Query validation
//!
//! Note that most of these never reach callers of [`SearchSession::refresh`]
//! (crate::session::SearchSession::refresh): the executor consumes network and
//! storage failures at its boundary, per the engine's degrade-don't-crash
//! policy. The error type exists for the construction and configuration paths
//! where propagation is the right behavior.

use thiserror::Error;

/// Error type alias used for the [`seeker`](crate) crate.
pub type Result<T> = core::result::Result<T, SeekerError>;

/// Errors that can occur when working with the seeker library.
///
/// Most variants wrap an underlying error transparently; the custom variants
/// carry enough context to act on without chasing a source chain.
#[derive(Error, Debug)]
pub enum SeekerError {
  /// A network request failed.
  ///
  /// This can occur when:
  /// - The network is unavailable or the endpoint is unreachable
  /// - The request exceeds the client timeout
  /// - The server answers with an error status
  #[error(transparent)]
  Network(#[from] reqwest::Error),

  /// A file system operation failed.
  ///
  /// Raised by the file-backed key-value store and by configuration
  /// reads/writes. The history cache swallows these on the write path and
  /// keeps operating in memory.
  #[error(transparent)]
  Storage(#[from] std::io::Error),

  /// A JSON payload could not be serialized or deserialized.
  ///
  /// Covers both backend response bodies and the persisted recent-search
  /// list. A corrupt persisted list is recovered as empty rather than
  /// propagated.
  #[error(transparent)]
  Serde(#[from] serde_json::Error),

  /// A TOML configuration file could not be parsed.
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// A configuration could not be rendered to TOML.
  #[error(transparent)]
  TomlSer(#[from] toml::ser::Error),

  /// An endpoint URL could not be parsed.
  #[error(transparent)]
  UrlParse(#[from] url::ParseError),

  /// The query state failed caller-side validation.
  ///
  /// Currently raised when `dateFrom` is later than `dateTo`; the state
  /// itself remains representable, the validation is advisory before issuing
  /// a request.
  #[error("Invalid query: {0}")]
  InvalidQuery(String),

  /// The configuration is missing or unusable.
  #[error("{0}")]
  Config(String),
}
