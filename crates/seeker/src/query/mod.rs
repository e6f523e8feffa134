//! Query state: the complete, serializable set of search inputs.
//!
//! [`QueryState`] is the single in-memory representation of everything a
//! caller has chosen: free text, filter selections, sort order, and page.
//! Every mutation is a total function over the state shape; there is no
//! invalid state to construct. Serialization to and from shareable URL query
//! strings lives in [`url`](self::url).
//!
//! # Examples
//!
//! Builder-style construction for one-shot queries:
//!
//! ```
//! use seeker::{
//!   query::{QueryState, SortBy},
//!   resource::Difficulty,
//! };
//!
//! let state = QueryState::text("react")
//!   .with_difficulty(Difficulty::Beginner)
//!   .with_tag("frontend")
//!   .order_by(SortBy::Rating);
//!
//! assert!(!state.is_idle());
//! assert_eq!(state.page, 1);
//! ```

use std::{collections::BTreeSet, fmt::Display, str::FromStr};

use super::*;

pub mod url;

/// Date format used on the wire and in shareable URLs (`yyyy-MM-dd`).
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Available sort keys for search results.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
  /// Order by creation date (the default)
  #[default]
  Date,
  /// Order by aggregate rating
  Rating,
  /// Order by popularity
  Popularity,
  /// Order by relevance to the search text
  Relevance,
}

impl Display for SortBy {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      SortBy::Date => write!(f, "date"),
      SortBy::Rating => write!(f, "rating"),
      SortBy::Popularity => write!(f, "popularity"),
      SortBy::Relevance => write!(f, "relevance"),
    }
  }
}

impl FromStr for SortBy {
  type Err = SeekerError;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "date" => Ok(SortBy::Date),
      "rating" => Ok(SortBy::Rating),
      "popularity" => Ok(SortBy::Popularity),
      "relevance" => Ok(SortBy::Relevance),
      other => Err(SeekerError::InvalidQuery(format!("unknown sort key: {other}"))),
    }
  }
}

/// Sort direction, descending by default.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
  /// Smallest (or oldest) first
  Asc,
  /// Largest (or newest) first (the default)
  #[default]
  Desc,
}

impl Display for SortOrder {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      SortOrder::Asc => write!(f, "asc"),
      SortOrder::Desc => write!(f, "desc"),
    }
  }
}

impl FromStr for SortOrder {
  type Err = SeekerError;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "asc" => Ok(SortOrder::Asc),
      "desc" => Ok(SortOrder::Desc),
      other => Err(SeekerError::InvalidQuery(format!("unknown sort order: {other}"))),
    }
  }
}

/// The complete set of user-chosen search, filter, sort and page inputs.
///
/// A state is fully derivable from its URL query string and vice versa; see
/// [`QueryState::to_query_string`] and [`QueryState::from_query_string`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryState {
  /// Free-form search text, possibly empty
  pub search_text: String,
  /// Single-value category filter
  pub category:    Option<String>,
  /// Selected tag filters (conjunctive with every other dimension)
  pub tags:        BTreeSet<String>,
  /// Single-value difficulty filter
  pub difficulty:  Option<Difficulty>,
  /// Free-text author filter
  pub author:      Option<String>,
  /// Inclusive lower date bound
  pub date_from:   Option<NaiveDate>,
  /// Inclusive upper date bound
  pub date_to:     Option<NaiveDate>,
  /// Sort key, `date` by default
  pub sort_by:     SortBy,
  /// Sort direction, `desc` by default
  pub sort_order:  SortOrder,
  /// Page number, always ≥ 1
  pub page:        u32,
}

impl Default for QueryState {
  fn default() -> Self {
    Self {
      search_text: String::new(),
      category:    None,
      tags:        BTreeSet::new(),
      difficulty:  None,
      author:      None,
      date_from:   None,
      date_to:     None,
      sort_by:     SortBy::default(),
      sort_order:  SortOrder::default(),
      page:        1,
    }
  }
}

impl QueryState {
  /// Creates an empty (idle) query state.
  pub fn new() -> Self { Self::default() }

  /// Creates a state searching for the given text.
  pub fn text(query: impl Into<String>) -> Self {
    Self { search_text: query.into(), ..Self::default() }
  }

  /// Sets the category filter.
  pub fn with_category(mut self, category: impl Into<String>) -> Self {
    self.category = Some(category.into());
    self
  }

  /// Adds a tag to the selection set.
  pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
    self.tags.insert(tag.into());
    self
  }

  /// Sets the difficulty filter.
  pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
    self.difficulty = Some(difficulty);
    self
  }

  /// Sets the author filter.
  pub fn with_author(mut self, author: impl Into<String>) -> Self {
    self.author = Some(author.into());
    self
  }

  /// Sets the inclusive date bounds; either side may be open.
  pub fn between(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
    self.date_from = from;
    self.date_to = to;
    self
  }

  /// Sets the sort key.
  pub fn order_by(mut self, sort_by: SortBy) -> Self {
    self.sort_by = sort_by;
    self
  }

  /// Sets the sort direction to ascending (default is descending).
  pub fn ascending(mut self) -> Self {
    self.sort_order = SortOrder::Asc;
    self
  }

  /// Sets the page, clamped to ≥ 1.
  pub fn on_page(mut self, page: u32) -> Self {
    self.set_page(page);
    self
  }

  /// Replaces the search text.
  pub fn set_search_text(&mut self, text: impl Into<String>) { self.search_text = text.into(); }

  /// Adds the tag to the selection set if absent, removes it otherwise.
  pub fn toggle_tag(&mut self, tag: &str) {
    if !self.tags.remove(tag) {
      self.tags.insert(tag.to_owned());
    }
  }

  /// Sets the page number, clamped to ≥ 1.
  ///
  /// There is no upper clamp here; the upper bound is whatever the backend's
  /// pagination envelope reports for the query.
  pub fn set_page(&mut self, page: u32) { self.page = page.max(1); }

  /// Resets every field except the search text to its default.
  pub fn clear_filters(&mut self) {
    let search_text = std::mem::take(&mut self.search_text);
    *self = Self { search_text, ..Self::default() };
  }

  /// True when any filter dimension is active.
  ///
  /// Sort and page are presentation choices rather than filters, and do not
  /// count.
  pub fn has_filters(&self) -> bool {
    self.category.is_some()
      || !self.tags.is_empty()
      || self.difficulty.is_some()
      || self.author.is_some()
      || self.date_from.is_some()
      || self.date_to.is_some()
  }

  /// True when there is nothing to search for: no text and no filters.
  ///
  /// Idle states never trigger a request; see
  /// [`SearchSession::refresh`](crate::session::SearchSession::refresh).
  pub fn is_idle(&self) -> bool { self.search_text.is_empty() && !self.has_filters() }

  /// Validates caller-side constraints the state shape cannot express.
  ///
  /// # Errors
  ///
  /// Returns [`SeekerError::InvalidQuery`] when both date bounds are present
  /// and `date_from` is later than `date_to`.
  pub fn validate(&self) -> Result<()> {
    if let (Some(from), Some(to)) = (self.date_from, self.date_to) {
      if from > to {
        return Err(SeekerError::InvalidQuery(format!(
          "dateFrom {from} is later than dateTo {to}"
        )));
      }
    }
    Ok(())
  }
}
