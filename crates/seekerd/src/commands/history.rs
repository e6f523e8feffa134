//! Module for inspecting and clearing the recent-search history.

use super::*;

/// Arguments that can be used for the [`Commands::History`]
#[derive(Args, Clone)]
pub struct HistoryOptions {
  /// Clear the recorded history instead of listing it
  #[arg(long)]
  pub clear: bool,
}

/// Function for the [`Commands::History`] in the CLI.
pub fn history<I: UserInteraction>(
  interaction: &I,
  seeker: &Seeker,
  history_options: HistoryOptions,
) -> Result<()> {
  if history_options.clear {
    if interaction.confirm("Clear the recent-search history?")? {
      seeker.session.clear_history();
      interaction.reply(ResponseContent::Success("Recent-search history cleared"))
    } else {
      interaction.reply(ResponseContent::Info("Keeping the recent-search history"))
    }
  } else {
    let entries = seeker.session.recent_searches();
    if entries.is_empty() {
      interaction.reply(ResponseContent::Info("No recent searches recorded"))
    } else {
      interaction.reply(ResponseContent::History(&entries))
    }
  }
}
