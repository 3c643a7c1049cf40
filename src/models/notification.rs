// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Notification and "my requests" models.

use super::pet::Pet;
use super::report::PetReport;
use super::user::User;
use serde::{Deserialize, Serialize};

/// Notification for a user or an admin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    #[serde(alias = "notification_id")]
    pub id: u64,
    #[serde(default)]
    pub sender: Option<User>,
    #[serde(default)]
    pub receiver: Option<User>,
    pub content: String,
    #[serde(default)]
    pub pet: Option<Pet>,
    #[serde(default)]
    pub report: Option<PetReport>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct NotificationsEnvelope {
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct UnreadCount {
    pub unread_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRequestReport {
    pub id: u64,
    pub pet_name: String,
    pub pet_status: String,
    pub report_status: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_resolved: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRequestAdoption {
    pub id: u64,
    pub pet_name: String,
    pub status: String,
}

/// The current user's own reports and adoption requests (`/my-requests/`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRequests {
    #[serde(default)]
    pub reports: Vec<UserRequestReport>,
    #[serde(default)]
    pub adoptions: Vec<UserRequestAdoption>,
}
