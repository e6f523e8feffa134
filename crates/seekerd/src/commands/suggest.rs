//! Module for abstracting the "suggest" functionality of the [`seeker`] engine.

use super::*;

/// Arguments that can be used for the [`Commands::Suggest`]
#[derive(Args, Clone)]
pub struct SuggestOptions {
  /// Prefix to complete against the recent-search history
  pub prefix: String,
}

/// Function for the [`Commands::Suggest`] in the CLI.
pub fn suggest<I: UserInteraction>(
  interaction: &I,
  seeker: &Seeker,
  suggest_options: SuggestOptions,
) -> Result<()> {
  let suggestions = seeker.session.suggest(&suggest_options.prefix);

  if suggestions.is_empty() {
    interaction.reply(ResponseContent::Info("No recent searches match"))
  } else {
    interaction.reply(ResponseContent::Suggestions(&suggestions))
  }
}
