use super::*;

pub mod history;
pub mod init;
pub mod search;
pub mod suggest;

pub use history::{history, HistoryOptions};
pub use init::{init, InitOptions};
pub use search::{search, SearchOptions};
pub use suggest::{suggest, SuggestOptions};

/// Available commands for the CLI
#[derive(Subcommand, Clone)]
pub enum Commands {
  /// Write a starting configuration file
  Init(InitOptions),

  /// Search the resources catalog
  Search(SearchOptions),

  /// Autocomplete a prefix from your recent searches
  Suggest(SuggestOptions),

  /// Show or clear the recent-search history
  History(HistoryOptions),
}
