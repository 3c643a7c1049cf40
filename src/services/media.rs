// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Image URL normalization.
//!
//! The backend returns image paths in several forms (`/media/x.png`,
//! `media/x.png`, bare `x.png`, or already-absolute URLs). Media is served
//! from the API host without the `/api` prefix.

/// Media root for an API base URL: the base with a trailing `/api` segment
/// removed.
pub fn media_root(api_base_url: &str) -> &str {
    let base = api_base_url.trim_end_matches('/');
    base.strip_suffix("/api").unwrap_or(base)
}

/// Turn a backend image path into an absolute URL.
///
/// Empty input gives an empty string. Anything that already carries a URL
/// scheme is returned unchanged.
pub fn get_image_url(api_base_url: &str, path: Option<&str>) -> String {
    let Some(path) = path.map(str::trim).filter(|p| !p.is_empty()) else {
        return String::new();
    };

    if has_scheme(path) {
        return path.to_string();
    }

    let root = media_root(api_base_url);
    let relative = path.trim_start_matches('/');
    if relative.starts_with("media/") {
        format!("{}/{}", root, relative)
    } else {
        format!("{}/media/{}", root, relative)
    }
}

fn has_scheme(path: &str) -> bool {
    if path.starts_with("data:") || path.starts_with("blob:") {
        return true;
    }
    match path.split_once("://") {
        Some((scheme, _)) => {
            !scheme.is_empty()
                && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}
