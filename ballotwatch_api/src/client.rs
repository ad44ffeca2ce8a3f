//! HTTP client for the Google Civic Information API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{Query, RepresentativesQuery, VoterInfoQuery},
    types::{ElectionsResponse, VoterInfoResponse},
    Error,
};

/// Request timeout for provider calls. No per-call override exists; one
/// best-effort request per invocation, no retries.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the civic information provider.
///
/// Holds the API key and a single `reqwest::Client` reused across requests.
/// The key is validated eagerly at construction so a missing credential
/// surfaces once at startup rather than on every request.
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    /// Base URL for the API. Defaults to `https://www.googleapis.com/civicinfo/v2`.
    base_api_url: String,
}

impl Client {
    /// Creates a new client pointing at the production Civic Information API.
    ///
    /// Fails with [`Error::MissingApiKey`] when the key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::with_base_url("https://www.googleapis.com/civicinfo/v2", api_key)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: impl Into<String>) -> Result<Self, Error> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(Error::MissingApiKey);
        }
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self {
            http,
            api_key,
            base_api_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client from the `GOOGLE_CIVIC_API_KEY` environment variable.
    ///
    /// Intended to be called once at process startup; an unset variable is a
    /// fatal configuration error, not a per-request condition.
    pub fn from_env() -> Result<Self, Error> {
        let api_key = std::env::var("GOOGLE_CIVIC_API_KEY").map_err(|_| Error::MissingApiKey)?;
        Self::new(api_key)
    }

    fn get_url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        let mut url = match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        };
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }

    async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        let resp = self
            .http
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach civic API: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Civic API request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::error!("Failed to parse civic API response: {} | body: {}", e, truncate_body(&body));
            Error::MalformedResponse
        })?;

        Ok(parsed)
    }

    /// Fetches the list of elections the provider currently knows about.
    pub async fn elections(&self) -> Result<ElectionsResponse, Error> {
        self.get::<ElectionsResponse, VoterInfoQuery>("/elections", None)
            .await
    }

    /// Fetches ballot and polling information for the query's address.
    pub async fn voter_info(&self, query: &VoterInfoQuery) -> Result<VoterInfoResponse, Error> {
        self.get::<VoterInfoResponse, VoterInfoQuery>("/voterinfo", Some(query))
            .await
    }

    /// Fetches elected representatives for the query's address.
    ///
    /// The payload shape varies by jurisdiction and is passed through
    /// undecoded; callers that need structure should project it themselves.
    pub async fn representatives(
        &self,
        query: &RepresentativesQuery,
    ) -> Result<serde_json::Value, Error> {
        self.get::<serde_json::Value, RepresentativesQuery>("/representatives", Some(query))
            .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Back off to a char boundary so a multibyte character straddling the
    // limit cannot panic the slice.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::truncate_body;

    #[test]
    fn truncate_body_short_bodies_pass_through() {
        assert_eq!(truncate_body("Forbidden"), "Forbidden");
    }

    #[test]
    fn truncate_body_cuts_long_bodies() {
        let body = "a".repeat(3000);
        let out = truncate_body(&body);
        assert_eq!(out.len(), 2000 + "...[truncated]".len());
        assert!(out.ends_with("...[truncated]"));
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        // 'é' is two bytes; the last one straddles the 2000-byte limit.
        let mut body = "a".repeat(1999);
        body.push_str(&"é".repeat(10));
        let out = truncate_body(&body);
        assert!(out.starts_with(&"a".repeat(1999)));
        assert_eq!(out, format!("{}...[truncated]", "a".repeat(1999)));
    }
}
