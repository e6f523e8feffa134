use chrono::NaiveDate;
use seeker::{
  query::{QueryState, SortBy, SortOrder},
  resource::Difficulty,
};

use crate::TestResult;

#[test]
fn test_toggle_tag_adds_and_removes() {
  let mut state = QueryState::new();

  state.toggle_tag("frontend");
  assert!(state.tags.contains("frontend"));

  state.toggle_tag("frontend");
  assert!(state.tags.is_empty());
}

#[test]
fn test_set_page_clamps_to_one() {
  let mut state = QueryState::new();

  state.set_page(0);
  assert_eq!(state.page, 1);

  state.set_page(7);
  assert_eq!(state.page, 7);
}

#[test]
fn test_clear_filters_preserves_search_text() {
  let mut state = QueryState::text("react")
    .with_category("programming")
    .with_tag("frontend")
    .with_difficulty(Difficulty::Advanced)
    .with_author("Alice")
    .order_by(SortBy::Rating)
    .ascending()
    .on_page(4);

  state.clear_filters();

  assert_eq!(state.search_text, "react");
  assert_eq!(state.category, None);
  assert!(state.tags.is_empty());
  assert_eq!(state.difficulty, None);
  assert_eq!(state.author, None);
  assert_eq!(state.sort_by, SortBy::Date);
  assert_eq!(state.sort_order, SortOrder::Desc);
  assert_eq!(state.page, 1);
}

#[test]
fn test_is_idle() {
  assert!(QueryState::new().is_idle());
  assert!(!QueryState::text("react").is_idle());
  assert!(!QueryState::new().with_tag("frontend").is_idle());

  // Sort and page are presentation, not filters
  let mut state = QueryState::new().order_by(SortBy::Rating);
  state.set_page(3);
  assert!(state.is_idle());
}

#[test]
fn test_validate_rejects_inverted_date_range() -> TestResult<()> {
  let from = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
  let to = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

  let state = QueryState::text("react").between(Some(from), Some(to));
  assert!(state.validate().is_err());

  let state = QueryState::text("react").between(Some(to), Some(from));
  state.validate()?;

  // Open-ended bounds are always fine
  QueryState::text("react").between(Some(from), None).validate()?;
  Ok(())
}

#[test]
fn test_idle_state_serializes_to_empty_string() {
  assert_eq!(QueryState::new().to_query_string(), "");
}

#[test]
fn test_defaults_are_omitted_from_query_string() {
  // The worked example: only the non-default fields appear
  let state = QueryState::text("react").with_difficulty(Difficulty::Beginner);
  assert_eq!(state.to_query_string(), "search=react&difficulty=beginner");
}

#[test]
fn test_non_default_sort_and_page_are_emitted() {
  let state = QueryState::text("react").order_by(SortBy::Rating).ascending().on_page(2);
  assert_eq!(state.to_query_string(), "search=react&sortBy=rating&sortOrder=asc&page=2");
}

#[test]
fn test_round_trip_with_every_field_set() {
  let state = QueryState::text("rust async")
    .with_category("programming")
    .with_tag("backend")
    .with_tag("async")
    .with_difficulty(Difficulty::Intermediate)
    .with_author("Alice Writer")
    .between(NaiveDate::from_ymd_opt(2024, 1, 1), NaiveDate::from_ymd_opt(2024, 6, 30))
    .order_by(SortBy::Relevance)
    .ascending()
    .on_page(3);

  assert_eq!(QueryState::from_query_string(&state.to_query_string()), state);
}

#[test]
fn test_round_trip_normalizes_tag_order() {
  let parsed = QueryState::from_query_string("tags=zebra,alpha,zebra");

  assert_eq!(parsed.tags.len(), 2);
  // The set re-serializes sorted, and stays stable from there on
  assert_eq!(parsed.to_query_string(), "tags=alpha%2Czebra");
  assert_eq!(QueryState::from_query_string(&parsed.to_query_string()), parsed);
}

#[test]
fn test_parse_tolerates_leading_question_mark() {
  let state = QueryState::from_query_string("?search=react&page=2");
  assert_eq!(state.search_text, "react");
  assert_eq!(state.page, 2);
}

#[test]
fn test_parse_degrades_garbage_to_defaults() {
  let state = QueryState::from_query_string(
    "search=ok&page=banana&difficulty=expert&sortBy=chaos&dateFrom=01/02/2024&unknown=x",
  );

  assert_eq!(state.search_text, "ok");
  assert_eq!(state.page, 1);
  assert_eq!(state.difficulty, None);
  assert_eq!(state.sort_by, SortBy::Date);
  assert_eq!(state.date_from, None);
}

#[test]
fn test_parse_clamps_page_zero() {
  assert_eq!(QueryState::from_query_string("page=0").page, 1);
}

#[test]
fn test_round_trip_percent_encoded_text() {
  let state = QueryState::text("C++ & systems");
  assert_eq!(QueryState::from_query_string(&state.to_query_string()), state);
}
