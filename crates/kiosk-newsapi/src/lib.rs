// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! NewsAPI.org v2 client for Kiosk.
//!
//! This crate provides a typed Rust client for the NewsAPI REST API,
//! encapsulating HTTP communication and response parsing. Three read
//! operations are exposed: top headlines, full-text article search, and
//! source listing. All three share one request/decode path: ordered query
//! parameters, an authenticated GET with a 2-second timeout, and a JSON
//! envelope whose `status` field discriminates success from an
//! API-reported error.

pub mod client;
pub mod decode;
pub mod error;
pub mod query;
pub mod types;

pub use client::NewsApiClient;
pub use error::NewsApiError;
pub use query::QueryParams;
pub use types::{Article, ArticleSource, NewsResponse, Source, SourcesResponse};
