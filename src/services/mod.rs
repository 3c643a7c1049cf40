// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - session, accounts, request wrapper and endpoints.

pub mod accounts;
mod catalog;
pub mod http;
pub mod media;
pub mod session;

pub use accounts::AccountDirectory;
pub use http::{ApiClient, Navigator, RequestBody, RequestOptions, TracingNavigator};
pub use media::{get_image_url, media_root};
pub use session::{Session, SessionStore};
