// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Endpoint catalog: thin typed wrappers over [`ApiClient::request`],
//! grouped by resource.
//!
//! [`ApiClient::request`]: crate::services::http::ApiClient::request

mod admin;
mod adoptions;
mod auth;
mod notifications;
mod pets;
mod profile;
mod reports;
mod rewards;

use crate::error::Result;
use serde::Serialize;

/// Serialize a value as the text of a multipart field.
fn json_text<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value).map_err(anyhow::Error::from)?)
}

/// Multipart form holding the given text fields.
fn text_form(fields: Vec<(&'static str, String)>) -> reqwest::multipart::Form {
    fields
        .into_iter()
        .fold(reqwest::multipart::Form::new(), |form, (name, value)| {
            form.text(name, value)
        })
}
