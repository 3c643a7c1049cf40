// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reward points and feedback stories.

use super::report::ImageUpload;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reward {
    /// User id
    pub user: u64,
    pub points: i64,
    pub badge: String,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// A published success story. `user` is the author's display name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackStory {
    pub id: u64,
    pub user: String,
    pub title: String,
    pub story: String,
    pub pet_name: String,
    pub submitted_at: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// New feedback story, sent as multipart.
#[derive(Debug, Clone, Default)]
pub struct FeedbackStoryCreate {
    pub title: String,
    pub story: String,
    pub pet_name: String,
    pub image: Option<ImageUpload>,
}
