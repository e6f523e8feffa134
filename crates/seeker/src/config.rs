//! TOML configuration for assembling the engine.
//!
//! The configuration names the two remote endpoints and where the
//! recent-search history lives on disk. Defaults resolve against platform
//! directories, so an empty file (or [`Config::default`]) is a working
//! development setup.

use std::fs;

use super::*;

/// Default client-side request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Engine configuration, stored as TOML.
///
/// # Examples
///
/// ```
/// use seeker::config::Config;
///
/// let config: Config = toml::from_str(
///   r#"
///     api_url = "https://api.example.com/resources/search"
///     analytics_url = "https://api.example.com/analytics/search"
///   "#,
/// )
/// .unwrap();
/// assert_eq!(config.request_timeout_secs, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
  /// The resources-search endpoint queries are issued against.
  pub api_url: String,
  /// Optional analytics endpoint for best-effort search events.
  #[serde(default)]
  pub analytics_url: Option<String>,
  /// Directory for the recent-search history; platform data dir when unset.
  #[serde(default)]
  pub history_path: Option<PathBuf>,
  /// Client-side request timeout in seconds.
  #[serde(default = "default_timeout_secs")]
  pub request_timeout_secs: u64,
}

/// Serde default for [`Config::request_timeout_secs`].
fn default_timeout_secs() -> u64 { DEFAULT_TIMEOUT_SECS }

impl Default for Config {
  fn default() -> Self { Self::new("http://localhost:4000/api/resources/search") }
}

impl Config {
  /// Creates a configuration pointing at the given resources endpoint.
  pub fn new(api_url: impl Into<String>) -> Self {
    Self {
      api_url: api_url.into(),
      analytics_url: None,
      history_path: None,
      request_timeout_secs: DEFAULT_TIMEOUT_SECS,
    }
  }

  /// Sets the analytics endpoint.
  pub fn with_analytics_url(mut self, url: impl Into<String>) -> Self {
    self.analytics_url = Some(url.into());
    self
  }

  /// Sets the history directory.
  pub fn with_history_path(mut self, path: impl Into<PathBuf>) -> Self {
    self.history_path = Some(path.into());
    self
  }

  /// Returns the default path for the configuration file.
  ///
  /// - On Unix: `~/.config/seeker/config.toml`
  /// - On macOS: `~/Library/Application Support/seeker/config.toml`
  /// - On Windows: `%APPDATA%\seeker\config.toml`
  /// - Fallback: `./seeker/config.toml` in the current directory
  pub fn default_path() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("seeker").join("config.toml")
  }

  /// Reads and parses the configuration at `path`.
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    Ok(toml::from_str(&fs::read_to_string(path)?)?)
  }

  /// Writes the configuration to `path`, creating parent directories.
  pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
      fs::create_dir_all(parent)?;
    }
    fs::write(path, toml::to_string_pretty(self)?)?;
    Ok(())
  }

  /// The directory the recent-search history lives in.
  pub fn history_dir(&self) -> PathBuf {
    self.history_path.clone().unwrap_or_else(FileStore::default_path)
  }
}
