// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Decoding of the NewsAPI response envelope.
//!
//! Every endpoint answers with the same envelope: a `status` field plus
//! either a success payload or `code`/`message` error fields. The
//! discriminator is inspected first; only then is the body committed to
//! the target shape or the error shape.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::NewsApiError;

#[derive(Debug, Deserialize)]
struct EnvelopeStatus {
	status: String,
}

#[derive(Debug, Deserialize)]
struct EnvelopeError {
	code: String,
	message: String,
}

/// Decodes a raw response body into `T`, or into a typed API error when
/// the envelope's `status` field is `"error"`.
///
/// A body that is not valid JSON, or that does not match the shape the
/// discriminator committed us to, is a [`NewsApiError::Decode`], distinct
/// from the server-reported [`NewsApiError::Api`].
pub fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<T, NewsApiError> {
	let envelope: EnvelopeStatus = serde_json::from_str(body)?;

	if envelope.status == "error" {
		let err: EnvelopeError = serde_json::from_str(body)?;
		return Err(NewsApiError::Api {
			code: err.code,
			message: err.message,
		});
	}

	Ok(serde_json::from_str(body)?)
}
