// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Ordered query parameters for NewsAPI requests.
//!
//! NewsAPI takes filters as URL query parameters (`country=ca`,
//! `q=bitcoin`). Parameters are kept as an ordered name/value list and each
//! value is percent-encoded individually when the URL is built, so a value
//! containing `&` or `=` cannot corrupt adjacent parameters.

use reqwest::Url;

/// An ordered list of query parameters.
///
/// Insertion order is preserved in the built query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
	params: Vec<(String, String)>,
}

impl QueryParams {
	/// Creates an empty parameter list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a single parameter.
	pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.params.push((name.into(), value.into()));
	}

	/// Appends a parameter, consuming and returning `self` for chaining.
	pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.push(name, value);
		self
	}

	/// Builds a parameter list from pre-formatted `key=value` fragments.
	///
	/// Each fragment is split at its first `=`; a fragment with no `=`
	/// becomes a parameter with an empty value. Fragment order is
	/// preserved. Values are still percent-encoded individually when the
	/// URL is built.
	pub fn from_fragments<I, S>(fragments: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut params = Self::new();
		for fragment in fragments {
			let fragment = fragment.as_ref();
			match fragment.split_once('=') {
				Some((name, value)) => params.push(name, value),
				None => params.push(fragment, ""),
			}
		}
		params
	}

	pub fn is_empty(&self) -> bool {
		self.params.is_empty()
	}

	pub fn len(&self) -> usize {
		self.params.len()
	}

	/// Appends the parameters to `url`, percent-encoding each value.
	///
	/// With zero parameters the URL is left untouched, so a request may
	/// carry no query string at all.
	pub fn apply(&self, url: &mut Url) {
		if self.params.is_empty() {
			return;
		}
		let mut pairs = url.query_pairs_mut();
		for (name, value) in &self.params {
			pairs.append_pair(name, value);
		}
	}
}

impl<S: Into<String>> FromIterator<(S, S)> for QueryParams {
	fn from_iter<I: IntoIterator<Item = (S, S)>>(iter: I) -> Self {
		Self {
			params: iter
				.into_iter()
				.map(|(name, value)| (name.into(), value.into()))
				.collect(),
		}
	}
}
