//! Error types for the seekerd CLI.
//!
//! Wraps the library's error type together with the CLI-only failure modes
//! (terminal interaction, file system access) so command functions can use
//! `?` uniformly.

use seeker::error::SeekerError;
use thiserror::Error;

/// Error type alias used for the `seekerd` crate.
pub type Result<T> = core::result::Result<T, SeekerdError>;

/// Errors that can occur while running CLI commands.
#[derive(Error, Debug)]
pub enum SeekerdError {
  /// An engine operation failed (configuration, network, storage).
  #[error(transparent)]
  Seeker(#[from] SeekerError),

  /// A file system operation failed.
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// A terminal prompt failed or was interrupted.
  #[error(transparent)]
  Dialoguer(#[from] dialoguer::Error),
}
