// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP client with consistent User-Agent header.

use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Creates a new HTTP client builder with the standard Kiosk User-Agent
/// header.
///
/// Use this when you need to customize the client (e.g., set timeout).
///
/// # Example
/// ```ignore
/// let client = kiosk_common_http::builder()
///     .timeout(Duration::from_secs(2))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Creates a new HTTP client with a custom timeout and the standard
/// User-Agent.
pub fn new_client_with_timeout(timeout: Duration) -> Client {
	builder()
		.timeout(timeout)
		.build()
		.expect("failed to build HTTP client")
}

/// Returns the standard Kiosk User-Agent string.
///
/// Format: `kiosk/{version}`
pub fn user_agent() -> String {
	format!("kiosk/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn user_agent_has_correct_format() {
		let ua = user_agent();
		let parts: Vec<&str> = ua.split('/').collect();
		assert_eq!(parts.len(), 2);
		assert_eq!(parts[0], "kiosk");
		assert!(!parts[1].is_empty());
	}

	#[test]
	fn builder_builds_with_timeout() {
		let client = builder().timeout(Duration::from_secs(2)).build();
		assert!(client.is_ok());
	}

	#[test]
	fn new_client_with_timeout_builds() {
		let _client = new_client_with_timeout(Duration::from_secs(2));
	}
}
