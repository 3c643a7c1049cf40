// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Pet-rescue client: typed access to the pet-rescue platform API.
//!
//! This crate provides the session and authentication layer of the
//! pet-rescue frontend: a request wrapper that injects the bearer token and
//! handles expired sessions, a local multi-account directory, image URL
//! normalization and typed methods for every backend endpoint.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod time_utils;

pub use config::ClientConfig;
pub use error::{ApiError, Result};
pub use services::{AccountDirectory, ApiClient, Navigator, RequestOptions, SessionStore};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
