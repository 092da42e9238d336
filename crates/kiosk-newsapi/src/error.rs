// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the NewsAPI client.

use thiserror::Error;

/// Errors that can occur when interacting with the NewsAPI.
#[derive(Debug, Error)]
pub enum NewsApiError {
	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Transport(#[from] reqwest::Error),

	/// Request timed out.
	#[error("Request timed out")]
	Timeout,

	/// The request URL could not be constructed.
	#[error("Invalid request URL: {0}")]
	InvalidRequest(String),

	/// Response body is not valid JSON or does not match the expected
	/// shape.
	#[error("Invalid response from NewsAPI: {0}")]
	Decode(#[from] serde_json::Error),

	/// NewsAPI reported an error in the response envelope.
	#[error("NewsAPI error: code: {code} message: {message}")]
	Api { code: String, message: String },
}
