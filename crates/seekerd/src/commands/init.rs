//! Module for setting up a [`seeker`] configuration.

use super::*;

/// Arguments that can be used for the [`Commands::Init`]
#[derive(Args, Clone)]
pub struct InitOptions {
  /// Resources-search endpoint to write into the configuration
  #[arg(long)]
  pub api_url: Option<String>,

  /// Analytics endpoint for best-effort search events
  #[arg(long)]
  pub analytics_url: Option<String>,

  /// Directory for the recent-search history
  #[arg(long)]
  pub history_path: Option<PathBuf>,
}

/// Function for the [`Commands::Init`] in the CLI.
///
/// Writes a configuration file at `config_path`, asking before overwriting an
/// existing one.
pub fn init<I: UserInteraction>(
  interaction: &I,
  config_path: &Path,
  init_options: InitOptions,
) -> Result<()> {
  let InitOptions { api_url, analytics_url, history_path } = init_options;

  if config_path.exists()
    && !interaction
      .confirm("A configuration already exists at this location, do you want to overwrite it?")?
  {
    interaction.reply(ResponseContent::Info(
      "Keeping the existing configuration. Pass --config to write somewhere else.",
    ))?;
    return Ok(());
  }

  let mut config = match api_url {
    Some(api_url) => Config::new(api_url),
    None => Config::default(),
  };
  if let Some(analytics_url) = analytics_url {
    config = config.with_analytics_url(analytics_url);
  }
  if let Some(history_path) = history_path {
    config = config.with_history_path(history_path);
  }

  config.write(config_path)?;

  interaction.reply(ResponseContent::Success(&format!(
    "Created Seeker configuration with\nConfig path: {:?}\nAPI endpoint: {}\nHistory path: {:?}",
    config_path,
    config.api_url,
    config.history_dir(),
  )))
}
