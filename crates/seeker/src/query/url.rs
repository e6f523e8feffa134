//! Bidirectional mapping between [`QueryState`] and URL query strings.
//!
//! The point of this mapping is shareable, bookmarkable search states: two
//! logically equal states always produce the identical minimal string, and
//! any string (including garbage) parses back to a usable state.
//!
//! Two rules keep the strings minimal and stable:
//! - defaults are omitted (empty text, default sort, page 1, empty filters)
//! - tags are normalized into a sorted, comma-joined list
//!
//! Parsing is total. A missing parameter means "default"; an unparseable
//! value (a garbled page number, an unknown difficulty) falls back to the
//! default for that field rather than failing the whole string.
//!
//! # Examples
//!
//! ```
//! use seeker::query::QueryState;
//!
//! let state = QueryState::text("react").with_tag("frontend");
//! let query = state.to_query_string();
//! assert_eq!(query, "search=react&tags=frontend");
//! assert_eq!(QueryState::from_query_string(&query), state);
//! ```

use ::url::form_urlencoded;

use super::*;

/// URL parameter for the free-text search.
const PARAM_SEARCH: &str = "search";
/// URL parameter for the category filter.
const PARAM_CATEGORY: &str = "category";
/// URL parameter for the comma-joined tag selection.
const PARAM_TAGS: &str = "tags";
/// URL parameter for the difficulty filter.
const PARAM_DIFFICULTY: &str = "difficulty";
/// URL parameter for the author filter.
const PARAM_AUTHOR: &str = "author";
/// URL parameter for the inclusive lower date bound.
const PARAM_DATE_FROM: &str = "dateFrom";
/// URL parameter for the inclusive upper date bound.
const PARAM_DATE_TO: &str = "dateTo";
/// URL parameter for the sort key.
const PARAM_SORT_BY: &str = "sortBy";
/// URL parameter for the sort direction.
const PARAM_SORT_ORDER: &str = "sortOrder";
/// URL parameter for the page number.
const PARAM_PAGE: &str = "page";

impl QueryState {
  /// Serializes this state into a minimal URL query string.
  ///
  /// Only non-default fields are emitted, so equal logical states yield
  /// byte-identical strings and the idle state yields an empty one. The
  /// result carries no leading `?`.
  ///
  /// # Examples
  ///
  /// ```
  /// use seeker::{query::QueryState, resource::Difficulty};
  ///
  /// let state = QueryState::text("react").with_difficulty(Difficulty::Beginner);
  /// assert_eq!(state.to_query_string(), "search=react&difficulty=beginner");
  /// assert_eq!(QueryState::new().to_query_string(), "");
  /// ```
  pub fn to_query_string(&self) -> String {
    let mut pairs = form_urlencoded::Serializer::new(String::new());

    if !self.search_text.is_empty() {
      pairs.append_pair(PARAM_SEARCH, &self.search_text);
    }
    if let Some(category) = &self.category {
      pairs.append_pair(PARAM_CATEGORY, category);
    }
    if !self.tags.is_empty() {
      pairs.append_pair(PARAM_TAGS, &self.joined_tags());
    }
    if let Some(difficulty) = self.difficulty {
      pairs.append_pair(PARAM_DIFFICULTY, &difficulty.to_string());
    }
    if let Some(author) = &self.author {
      pairs.append_pair(PARAM_AUTHOR, author);
    }
    if let Some(from) = self.date_from {
      pairs.append_pair(PARAM_DATE_FROM, &from.format(DATE_FORMAT).to_string());
    }
    if let Some(to) = self.date_to {
      pairs.append_pair(PARAM_DATE_TO, &to.format(DATE_FORMAT).to_string());
    }
    if self.sort_by != SortBy::default() {
      pairs.append_pair(PARAM_SORT_BY, &self.sort_by.to_string());
    }
    if self.sort_order != SortOrder::default() {
      pairs.append_pair(PARAM_SORT_ORDER, &self.sort_order.to_string());
    }
    if self.page > 1 {
      pairs.append_pair(PARAM_PAGE, &self.page.to_string());
    }

    pairs.finish()
  }

  /// Parses a URL query string into a state, applying defaults for anything
  /// missing or unparseable.
  ///
  /// A leading `?` is tolerated. Unknown parameters are ignored. This is a
  /// total function: no input can make it fail.
  ///
  /// # Examples
  ///
  /// ```
  /// use seeker::query::{QueryState, SortOrder};
  ///
  /// let state = QueryState::from_query_string("?search=react&page=3&sortOrder=asc");
  /// assert_eq!(state.search_text, "react");
  /// assert_eq!(state.page, 3);
  /// assert_eq!(state.sort_order, SortOrder::Asc);
  ///
  /// // Garbage degrades to defaults field by field
  /// let state = QueryState::from_query_string("page=none&difficulty=expert&search=ok");
  /// assert_eq!(state.page, 1);
  /// assert_eq!(state.difficulty, None);
  /// assert_eq!(state.search_text, "ok");
  /// ```
  pub fn from_query_string(query: &str) -> Self {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut state = Self::default();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
      match key.as_ref() {
        PARAM_SEARCH => state.search_text = value.into_owned(),
        PARAM_CATEGORY => state.category = non_empty(value.into_owned()),
        PARAM_TAGS =>
          state.tags =
            value.split(',').filter(|tag| !tag.is_empty()).map(str::to_owned).collect(),
        PARAM_DIFFICULTY => state.difficulty = value.parse().ok(),
        PARAM_AUTHOR => state.author = non_empty(value.into_owned()),
        PARAM_DATE_FROM =>
          state.date_from = NaiveDate::parse_from_str(&value, DATE_FORMAT).ok(),
        PARAM_DATE_TO => state.date_to = NaiveDate::parse_from_str(&value, DATE_FORMAT).ok(),
        PARAM_SORT_BY => state.sort_by = value.parse().unwrap_or_default(),
        PARAM_SORT_ORDER => state.sort_order = value.parse().unwrap_or_default(),
        PARAM_PAGE => state.page = value.parse::<u32>().map_or(1, |page| page.max(1)),
        _ => {},
      }
    }

    state
  }

  /// The tag selection as the comma-joined list used on the wire.
  ///
  /// `BTreeSet` iteration keeps the order sorted, which is what makes equal
  /// selections serialize identically.
  pub(crate) fn joined_tags(&self) -> String {
    self.tags.iter().map(String::as_str).collect::<Vec<_>>().join(",")
  }
}

/// Maps an empty string to `None`, anything else to `Some`.
fn non_empty(value: String) -> Option<String> { (!value.is_empty()).then_some(value) }
