use chrono::NaiveDate;
use seeker::{
  client::{HttpBackend, SearchEvent, PAGE_SIZE},
  query::QueryState,
  resource::{Difficulty, SearchResults},
};

use crate::TestResult;

fn backend() -> HttpBackend {
  HttpBackend::new("https://api.example.com/resources/search").unwrap()
}

#[test]
fn test_request_carries_explicit_defaults() {
  // The wire form never relies on the backend agreeing about defaults
  let url = backend().request_url(&QueryState::text("react"));
  assert_eq!(url.query(), Some("search=react&sortBy=date&sortOrder=desc&page=1&limit=12"));
}

#[test]
fn test_request_carries_every_active_dimension() {
  // Conjunctive semantics: each active filter appears alongside the others
  let state = QueryState::text("rust async")
    .with_category("programming")
    .with_tag("backend")
    .with_tag("async")
    .with_difficulty(Difficulty::Intermediate)
    .with_author("Alice Writer")
    .between(NaiveDate::from_ymd_opt(2024, 1, 1), NaiveDate::from_ymd_opt(2024, 6, 30))
    .on_page(2);

  let url = backend().request_url(&state);
  let query = url.query().unwrap();

  assert!(query.contains("search=rust+async"));
  assert!(query.contains("category=programming"));
  assert!(query.contains("tags=async%2Cbackend"));
  assert!(query.contains("difficulty=intermediate"));
  assert!(query.contains("author=Alice+Writer"));
  assert!(query.contains("dateFrom=2024-01-01"));
  assert!(query.contains("dateTo=2024-06-30"));
  assert!(query.contains("page=2"));
  assert!(query.contains(&format!("limit={PAGE_SIZE}")));
}

#[test]
fn test_request_omits_inactive_filters() {
  let url = backend().request_url(&QueryState::new().with_tag("frontend"));
  let query = url.query().unwrap();

  assert!(!query.contains("search="));
  assert!(!query.contains("category="));
  assert!(!query.contains("difficulty="));
  assert!(query.contains("tags=frontend"));
}

#[test]
fn test_response_deserializes_backend_payload() -> TestResult<()> {
  let raw = r#"{
    "resources": [{
      "id": "res-1",
      "title": "Intro to Rust",
      "description": null,
      "url": "https://example.com/rust",
      "category": "programming",
      "tags": ["rust"],
      "author": "Alice Writer",
      "difficulty": "beginner",
      "readingTime": 15,
      "rating": 4.2,
      "createdAt": "2024-03-01T12:00:00Z"
    }],
    "pagination": { "page": 1, "limit": 12, "total": 7, "pages": 1 },
    "facets": {
      "categories": { "programming": 7 },
      "tags": { "rust": 4, "backend": 3 },
      "difficulties": { "beginner": 5, "advanced": 2 }
    }
  }"#;

  let results: SearchResults = serde_json::from_str(raw)?;

  assert_eq!(results.resources.len(), 1);
  assert_eq!(results.resources[0].difficulty, Some(Difficulty::Beginner));
  assert_eq!(results.resources[0].reading_time, Some(15));
  assert_eq!(results.pagination.total, 7);
  assert_eq!(results.facets.tags["rust"], 4);
  assert!(!results.is_empty());
  Ok(())
}

#[test]
fn test_response_tolerates_sparse_resources() -> TestResult<()> {
  // Only the non-nullable fields are required
  let raw = r#"{
    "resources": [{
      "id": "res-2",
      "title": "Bare minimum",
      "url": "https://example.com/bare",
      "category": "career",
      "createdAt": "2024-01-15T08:30:00Z"
    }],
    "pagination": { "page": 1, "limit": 12, "total": 1, "pages": 1 },
    "facets": {}
  }"#;

  let results: SearchResults = serde_json::from_str(raw)?;
  let resource = &results.resources[0];

  assert_eq!(resource.description, None);
  assert_eq!(resource.tags, None);
  assert_eq!(resource.difficulty, None);
  assert_eq!(resource.rating, None);
  Ok(())
}

#[test]
fn test_search_event_wire_format() -> TestResult<()> {
  let event = SearchEvent { query: "react".to_owned(), results_count: 7 };
  assert_eq!(serde_json::to_string(&event)?, r#"{"query":"react","resultsCount":7}"#);
  Ok(())
}
