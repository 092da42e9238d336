// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! NewsAPI client implementation.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument, trace};

use crate::decode::decode_envelope;
use crate::error::NewsApiError;
use crate::query::QueryParams;
use crate::types::{NewsResponse, SourcesResponse};

const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(2);

/// Client for the NewsAPI.org v2 REST API.
///
/// Holds only static configuration (credential, timeout, base URL); every
/// call is stateless and independent, so one client may be shared across
/// concurrent tasks.
#[derive(Debug, Clone)]
pub struct NewsApiClient {
	http_client: Client,
	api_key: String,
	base_url: String,
}

impl NewsApiClient {
	/// Creates a new client with the given API key.
	///
	/// Requests carry the key verbatim in the `Authorization` header and
	/// time out after 2 seconds.
	pub fn new(api_key: impl Into<String>) -> Self {
		Self {
			http_client: kiosk_common_http::new_client_with_timeout(REQUEST_TIMEOUT),
			api_key: api_key.into(),
			base_url: DEFAULT_BASE_URL.to_string(),
		}
	}

	/// Sets a custom base URL for the API (useful for testing).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	/// Fetches the top headlines matching the given parameters.
	#[instrument(skip(self, params), fields(params = params.len()))]
	pub async fn top_headlines(
		&self,
		params: QueryParams,
	) -> Result<NewsResponse, NewsApiError> {
		self.get_json("top-headlines", &params).await
	}

	/// Searches every indexed article matching the given parameters.
	#[instrument(skip(self, params), fields(params = params.len()))]
	pub async fn everything(&self, params: QueryParams) -> Result<NewsResponse, NewsApiError> {
		self.get_json("everything", &params).await
	}

	/// Lists the sources matching the given parameters.
	#[instrument(skip(self, params), fields(params = params.len()))]
	pub async fn sources(&self, params: QueryParams) -> Result<SourcesResponse, NewsApiError> {
		self.get_json("sources", &params).await
	}

	/// Shared request path for all three endpoints: build the URL, issue
	/// an authenticated GET, decode the status-discriminated envelope.
	///
	/// The body is handed to the decoder regardless of HTTP status code:
	/// NewsAPI reports failures inside the JSON envelope, and a non-200
	/// response with a parseable error body must surface as an API error
	/// rather than a transport one.
	async fn get_json<T: DeserializeOwned>(
		&self,
		endpoint: &str,
		params: &QueryParams,
	) -> Result<T, NewsApiError> {
		let mut url = Url::parse(&format!("{}/{}", self.base_url, endpoint))
			.map_err(|e| NewsApiError::InvalidRequest(e.to_string()))?;
		params.apply(&mut url);

		debug!(url = %url, "Sending request to NewsAPI");

		let response = self
			.http_client
			.get(url)
			.header("Authorization", &self.api_key)
			.send()
			.await
			.map_err(|e| {
				if e.is_timeout() {
					error!("Request timed out");
					return NewsApiError::Timeout;
				}
				error!(error = %e, "Network error during NewsAPI request");
				NewsApiError::Transport(e)
			})?;

		let status = response.status();
		debug!(status = %status, "Received response from NewsAPI");

		let body = response.text().await.map_err(|e| {
			if e.is_timeout() {
				error!("Request timed out reading response body");
				return NewsApiError::Timeout;
			}
			error!(error = %e, "Failed to read response body");
			NewsApiError::Transport(e)
		})?;

		trace!(body = %body, "Response body");

		decode_envelope(&body)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_client_creation() {
		let client = NewsApiClient::new("test-api-key");
		assert_eq!(client.api_key, "test-api-key");
		assert_eq!(client.base_url, DEFAULT_BASE_URL);
	}

	#[test]
	fn test_with_base_url() {
		let client = NewsApiClient::new("key").with_base_url("http://127.0.0.1:9000");
		assert_eq!(client.base_url, "http://127.0.0.1:9000");
	}

	#[tokio::test]
	async fn test_malformed_base_url_returns_invalid_request() {
		let client = NewsApiClient::new("key").with_base_url("not a url");
		let err = client.sources(QueryParams::new()).await.unwrap_err();
		assert!(matches!(err, NewsApiError::InvalidRequest(_)));
	}
}
