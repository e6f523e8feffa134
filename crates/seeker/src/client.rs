//! HTTP access to the resources backend and the analytics sink.
//!
//! The backend contract is one GET endpoint returning a page of resources
//! with pagination and facet context. [`SearchBackend`] is the seam the
//! executor talks through, so tests (or a non-HTTP deployment) can substitute
//! their own transport; [`HttpBackend`] is the production implementation.
//!
//! Unlike the shareable URL form (which omits defaults), the wire request
//! carries every effective parameter explicitly (sort key, order, page and
//! page size included) so the backend never has to agree with the client
//! about defaults.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;

use super::*;

/// Fixed page size requested from the backend.
pub const PAGE_SIZE: u32 = 12;

/// Client-side request timeout; a timeout is an ordinary request failure.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Transport seam between the executor and the resources backend.
///
/// Implementations translate a [`QueryState`] into one request and return a
/// full [`SearchResults`] page. They should not retry internally; ordering
/// and failure policy live in the session.
#[async_trait]
pub trait SearchBackend: Send + Sync {
  /// Executes one search for the given state.
  async fn fetch(&self, state: &QueryState) -> Result<SearchResults>;
}

/// Production backend issuing GET requests against the resources endpoint.
///
/// # Examples
///
/// ```no_run
/// use seeker::client::HttpBackend;
///
/// # fn example() -> Result<(), seeker::error::SeekerError> {
/// let backend = HttpBackend::new("https://api.example.com/resources/search")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpBackend {
  /// Shared connection pool with the configured timeout applied.
  client:   reqwest::Client,
  /// The resources-search endpoint requests are issued against.
  endpoint: Url,
}

impl HttpBackend {
  /// Creates a backend with the default [`REQUEST_TIMEOUT`].
  ///
  /// # Errors
  ///
  /// Returns an error when the endpoint fails to parse as a URL or the HTTP
  /// client cannot be constructed.
  pub fn new(endpoint: &str) -> Result<Self> { Self::with_timeout(endpoint, REQUEST_TIMEOUT) }

  /// Creates a backend with an explicit request timeout.
  pub fn with_timeout(endpoint: &str, timeout: Duration) -> Result<Self> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    Ok(Self { client, endpoint: Url::parse(endpoint)? })
  }

  /// Builds the request URL for a query state.
  ///
  /// Every effective parameter is explicit: active filters appear when set,
  /// and `sortBy`, `sortOrder`, `page` and `limit` are always present. Dates
  /// are formatted as `yyyy-MM-dd`, tags comma-joined.
  ///
  /// # Examples
  ///
  /// ```no_run
  /// use seeker::{client::HttpBackend, query::QueryState};
  ///
  /// # fn example() -> Result<(), seeker::error::SeekerError> {
  /// let backend = HttpBackend::new("https://api.example.com/resources/search")?;
  /// let url = backend.request_url(&QueryState::text("react"));
  /// assert_eq!(
  ///   url.query(),
  ///   Some("search=react&sortBy=date&sortOrder=desc&page=1&limit=12")
  /// );
  /// # Ok(())
  /// # }
  /// ```
  pub fn request_url(&self, state: &QueryState) -> Url {
    let mut url = self.endpoint.clone();
    {
      let mut pairs = url.query_pairs_mut();
      if !state.search_text.is_empty() {
        pairs.append_pair("search", &state.search_text);
      }
      if let Some(category) = &state.category {
        pairs.append_pair("category", category);
      }
      if !state.tags.is_empty() {
        pairs.append_pair("tags", &state.joined_tags());
      }
      if let Some(difficulty) = state.difficulty {
        pairs.append_pair("difficulty", &difficulty.to_string());
      }
      if let Some(author) = &state.author {
        pairs.append_pair("author", author);
      }
      pairs.append_pair("sortBy", &state.sort_by.to_string());
      pairs.append_pair("sortOrder", &state.sort_order.to_string());
      pairs.append_pair("page", &state.page.to_string());
      pairs.append_pair("limit", &PAGE_SIZE.to_string());
      if let Some(from) = state.date_from {
        pairs.append_pair("dateFrom", &from.format(DATE_FORMAT).to_string());
      }
      if let Some(to) = state.date_to {
        pairs.append_pair("dateTo", &to.format(DATE_FORMAT).to_string());
      }
    }
    url
  }
}

#[async_trait]
impl SearchBackend for HttpBackend {
  async fn fetch(&self, state: &QueryState) -> Result<SearchResults> {
    let url = self.request_url(state);
    debug!("querying resources via: {url}");

    let response = self.client.get(url).send().await?.error_for_status()?;
    let data = response.bytes().await?;
    trace!("resources response: {}", String::from_utf8_lossy(&data));

    Ok(serde_json::from_slice(&data)?)
  }
}

/// Payload of the best-effort analytics event fired on successful searches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEvent {
  /// The executed search text
  pub query:         String,
  /// Total matches the backend reported for it
  pub results_count: u64,
}

/// Fire-and-forget analytics sink.
///
/// Reporting is best-effort by contract: the session spawns it off the main
/// flow and logs failures without surfacing them.
#[derive(Debug, Clone)]
pub struct AnalyticsClient {
  /// Shared connection pool with the default timeout applied.
  client:   reqwest::Client,
  /// The analytics endpoint events are posted to.
  endpoint: Url,
}

impl AnalyticsClient {
  /// Creates a client posting to the given analytics endpoint.
  pub fn new(endpoint: &str) -> Result<Self> {
    let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    Ok(Self { client, endpoint: Url::parse(endpoint)? })
  }

  /// Posts one search event.
  ///
  /// # Errors
  ///
  /// Returns the underlying network error; callers decide whether that is
  /// worth more than a log line (the session decides it is not).
  pub async fn report(&self, event: &SearchEvent) -> Result<()> {
    self.client.post(self.endpoint.clone()).json(event).send().await?.error_for_status()?;
    Ok(())
  }
}
