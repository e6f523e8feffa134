//! Module for abstracting the "search" functionality of the [`seeker`] engine.

use super::*;

/// Arguments that can be used for the [`Commands::Search`]
#[derive(Args, Clone)]
pub struct SearchOptions {
  /// Search text; omit to browse with filters only
  pub query: Option<String>,

  /// Search filters
  #[command(flatten)]
  pub filter: SearchFilter,

  /// Sort key (date, rating, popularity, relevance)
  #[arg(long)]
  pub sort: Option<SortBy>,

  /// Sort oldest/smallest first instead of the default descending order
  #[arg(long)]
  pub ascending: bool,

  /// Result page to fetch
  #[arg(long, default_value_t = 1)]
  pub page: u32,

  /// Also print the shareable query string for this search
  #[arg(long)]
  pub url: bool,
}

/// Filter options for resource searches
#[derive(Args, Clone)]
pub struct SearchFilter {
  /// Filter by category
  #[arg(long)]
  pub category: Option<String>,

  /// Filter by tag; repeat the flag to require several tags at once
  #[arg(long = "tag")]
  pub tags: Vec<String>,

  /// Filter by difficulty (beginner, intermediate, advanced)
  #[arg(long)]
  pub difficulty: Option<Difficulty>,

  /// Filter by author name
  #[arg(long)]
  pub author: Option<String>,

  /// Only resources created on or after this date (YYYY-MM-DD)
  #[arg(long)]
  pub from: Option<NaiveDate>,

  /// Only resources created on or before this date (YYYY-MM-DD)
  #[arg(long)]
  pub to: Option<NaiveDate>,
}

/// Function for the [`Commands::Search`] in the CLI.
///
/// Builds the query state from the arguments, runs exactly one refresh, and
/// renders the outcome. A failed request is reported as a warning rather than
/// an error: the engine's contract is to degrade, not to crash.
pub async fn search<I: UserInteraction>(
  interaction: &I,
  seeker: &Seeker,
  search_options: SearchOptions,
) -> Result<()> {
  let SearchOptions { query, filter, sort, ascending, page, url } = search_options;

  seeker.session.update(|state| {
    if let Some(text) = &query {
      state.set_search_text(text.clone());
    }
    state.category = filter.category.clone();
    for tag in &filter.tags {
      state.toggle_tag(tag);
    }
    state.difficulty = filter.difficulty;
    state.author = filter.author.clone();
    state.date_from = filter.from;
    state.date_to = filter.to;
    if let Some(sort_by) = sort {
      state.sort_by = sort_by;
    }
    if ascending {
      state.sort_order = SortOrder::Asc;
    }
    state.set_page(page);
  });

  let state = seeker.session.state();
  state.validate()?;

  if url {
    interaction
      .reply(ResponseContent::Info(&format!("Share this search: ?{}", state.to_query_string())))?;
  }

  match seeker.session.refresh().await {
    RefreshOutcome::Idle => interaction.reply(ResponseContent::Info(
      "Nothing to search for yet. Give me some text or a filter to get started.",
    )),
    RefreshOutcome::Committed(results) =>
      if results.is_empty() {
        interaction.reply(ResponseContent::Info("No resources found matching all criteria"))
      } else {
        interaction.reply(ResponseContent::Results(&results))
      },
    // A lone CLI invocation has no competing requests
    RefreshOutcome::Superseded => Ok(()),
    RefreshOutcome::Failed => interaction.reply(ResponseContent::Warning(
      "Search failed; any previous results are still valid. Check the API endpoint and try again.",
    )),
  }
}
