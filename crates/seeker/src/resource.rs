//! Wire types for the resources backend contract.
//!
//! This module defines the shapes exchanged with the remote resources API:
//! the [`Resource`] records themselves, the [`Pagination`] envelope, and the
//! [`Facets`] breakdowns the backend derives for each result page. All of it
//! is read-only from the client's perspective: resources are created,
//! mutated, and destroyed entirely by the backend.
//!
//! The API speaks camelCase JSON; the serde derives below own that mapping so
//! nothing else in the crate has to care.

use std::{collections::BTreeMap, fmt::Display, str::FromStr};

use super::*;

/// A single career-development resource as returned by the backend.
///
/// The client treats this as an opaque record: `id` is unique within any
/// result set, and every other field exists for display and filtering only.
///
/// # Examples
///
/// ```
/// let raw = r#"{
///   "id": "res-42",
///   "title": "Intro to Rust",
///   "url": "https://example.com/rust",
///   "category": "programming",
///   "tags": ["rust", "backend"],
///   "difficulty": "beginner",
///   "readingTime": 12,
///   "rating": 4.5,
///   "createdAt": "2024-03-01T12:00:00Z"
/// }"#;
///
/// let resource: seeker::resource::Resource = serde_json::from_str(raw).unwrap();
/// assert_eq!(resource.id, "res-42");
/// assert_eq!(resource.difficulty, Some(seeker::resource::Difficulty::Beginner));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
  /// Unique identifier within any result set
  pub id:           String,
  /// Display title
  pub title:        String,
  /// Optional longer description
  #[serde(default)]
  pub description:  Option<String>,
  /// Link to the resource itself
  pub url:          String,
  /// Single classifying category
  pub category:     String,
  /// Tags in the backend's display order
  #[serde(default)]
  pub tags:         Option<Vec<String>>,
  /// Optional author attribution
  #[serde(default)]
  pub author:       Option<String>,
  /// Optional difficulty classification
  #[serde(default)]
  pub difficulty:   Option<Difficulty>,
  /// Estimated reading time in minutes
  #[serde(default)]
  pub reading_time: Option<u32>,
  /// Aggregate rating on a 0–5 scale
  #[serde(default)]
  pub rating:       Option<f32>,
  /// Creation timestamp
  pub created_at:   DateTime<Utc>,
}

/// Difficulty classification of a resource.
///
/// Also usable as a query filter; the wire form is the lowercase name on both
/// the request and response side.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
///
/// use seeker::resource::Difficulty;
///
/// let beginner = Difficulty::from_str("beginner").unwrap();
/// assert_eq!(beginner.to_string(), "beginner");
/// assert!(Difficulty::from_str("expert").is_err());
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
  /// Suitable without prior background
  Beginner,
  /// Assumes working familiarity with the area
  Intermediate,
  /// Assumes deep familiarity with the area
  Advanced,
}

impl Display for Difficulty {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Difficulty::Beginner => write!(f, "beginner"),
      Difficulty::Intermediate => write!(f, "intermediate"),
      Difficulty::Advanced => write!(f, "advanced"),
    }
  }
}

impl FromStr for Difficulty {
  type Err = SeekerError;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "beginner" => Ok(Difficulty::Beginner),
      "intermediate" => Ok(Difficulty::Intermediate),
      "advanced" => Ok(Difficulty::Advanced),
      other => Err(SeekerError::InvalidQuery(format!("unknown difficulty: {other}"))),
    }
  }
}

/// Pagination envelope returned alongside each result page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
  /// The page this response covers (1-based)
  pub page:  u32,
  /// Page size the backend applied
  pub limit: u32,
  /// Total number of matching resources across all pages
  pub total: u64,
  /// Total number of pages for this query
  pub pages: u32,
}

/// Match-count breakdowns per filter dimension, derived by the backend.
///
/// Counts reflect conjunctive filter semantics: each count answers "how many
/// results would remain with this value added to the current query".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facets {
  /// Matching resource count per category
  #[serde(default)]
  pub categories:   BTreeMap<String, u64>,
  /// Matching resource count per tag
  #[serde(default)]
  pub tags:         BTreeMap<String, u64>,
  /// Matching resource count per difficulty
  #[serde(default)]
  pub difficulties: BTreeMap<String, u64>,
}

/// One page of search results plus its derived context.
///
/// This is the unit the executor commits atomically: a renderer never sees
/// resources from one response combined with facets from another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
  /// The resources on this page
  pub resources:  Vec<Resource>,
  /// Where this page sits in the full result set
  pub pagination: Pagination,
  /// Facet breakdowns for the query that produced this page
  pub facets:     Facets,
}

impl SearchResults {
  /// True when the query matched nothing at all.
  pub fn is_empty(&self) -> bool { self.resources.is_empty() && self.pagination.total == 0 }
}
