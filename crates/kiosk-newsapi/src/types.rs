// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Response types for the NewsAPI v2 endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Envelope returned by `top-headlines` and `everything`.
///
/// Article order matches the API response order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
	pub status: String,
	pub total_results: u64,
	pub articles: Vec<Article>,
}

/// A single news article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
	pub source: ArticleSource,
	/// The API returns `null` for articles without a named author.
	pub author: Option<String>,
	pub title: String,
	pub description: Option<String>,
	pub url: String,
	pub url_to_image: Option<String>,
	pub published_at: DateTime<Utc>,
}

/// Source reference embedded in an [`Article`].
///
/// `id` is `null` for outlets NewsAPI does not index as a source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSource {
	pub id: Option<String>,
	pub name: String,
}

/// Envelope returned by `sources`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcesResponse {
	pub status: String,
	pub sources: Vec<Source>,
}

/// A news publisher registered with NewsAPI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
	pub id: String,
	pub name: String,
	pub description: String,
	pub url: String,
	pub category: String,
	pub language: String,
	pub country: String,
}
