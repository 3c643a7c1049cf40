// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Notifications and the user's request overview.

use crate::error::Result;
use crate::models::notification::NotificationsEnvelope;
use crate::models::{Notification, UserRequests};
use crate::services::http::{ApiClient, RequestOptions};
use reqwest::Method;

impl ApiClient {
    pub async fn get_notifications(&self) -> Result<Vec<Notification>> {
        self.get("/notifications/").await
    }

    /// Notifications addressed to the logged-in user.
    pub async fn get_user_notifications(&self) -> Result<Vec<Notification>> {
        let envelope: NotificationsEnvelope = self.get("/get-notifications/").await?;
        Ok(envelope.notifications)
    }

    pub async fn mark_notification_as_read(&self, id: u64) -> Result<Notification> {
        self.request(
            &format!("/notifications/{}/mark_as_read/", id),
            RequestOptions::new(Method::PATCH),
        )
        .await
    }

    pub async fn delete_notification(&self, id: u64) -> Result<()> {
        self.delete(&format!("/notifications/{}/", id)).await
    }

    /// The user's own reports and adoption requests.
    pub async fn get_user_requests(&self) -> Result<UserRequests> {
        self.get("/my-requests/").await
    }
}
