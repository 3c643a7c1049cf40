// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Admin console endpoints.

use crate::error::{ApiError, Result};
use crate::models::notification::NotificationsEnvelope;
use crate::models::user::AdminUserListWire;
use crate::models::{
    AdminApprovalRequest, AdminPetReport, AdminUser, AdminUserList, AdminUserQuery,
    AdminUserUpdate, ApprovalAction, MessageResponse, Notification, ReportStatus, UnreadCount,
};
use crate::services::http::ApiClient;
use serde::Serialize;

#[derive(Serialize)]
struct ReportStatusUpdate {
    report_status: ReportStatus,
}

#[derive(Serialize)]
struct ReportAction {
    action: ApprovalAction,
}

impl ApiClient {
    pub async fn get_admin_lost_pets(&self) -> Result<Vec<AdminPetReport>> {
        self.get("/admin/lost-pet-requests/").await
    }

    pub async fn get_admin_found_pets(&self) -> Result<Vec<AdminPetReport>> {
        self.get("/admin/found-pet-requests/").await
    }

    pub async fn get_admin_notifications(&self) -> Result<Vec<Notification>> {
        let envelope: NotificationsEnvelope = self.get("/admin/notifications/").await?;
        Ok(envelope.notifications)
    }

    pub async fn get_unread_admin_notification_count(&self) -> Result<u64> {
        let count: UnreadCount = self.get("/admin/notifications/unread-count/").await?;
        Ok(count.unread_count)
    }

    /// Approve or reject a pending lost/found/adoption request.
    pub async fn admin_approval(&self, request: &AdminApprovalRequest) -> Result<MessageResponse> {
        self.post_json("/admin/approve/", request).await
    }

    /// Move a report to `Accepted`, `Resolved` or `Reunited`. Other
    /// statuses are rejected before anything is sent.
    pub async fn manage_report_status(
        &self,
        report_id: u64,
        status: ReportStatus,
    ) -> Result<MessageResponse> {
        if !matches!(
            status,
            ReportStatus::Accepted | ReportStatus::Resolved | ReportStatus::Reunited
        ) {
            return Err(ApiError::Validation(format!(
                "report_status: {:?} cannot be set from the admin console",
                status
            )));
        }

        self.patch_json(
            &format!("/admin/manage-report/{}/", report_id),
            &ReportStatusUpdate {
                report_status: status,
            },
        )
        .await
    }

    /// User listing, filtered. Paginated and unpaginated responses both
    /// come back as an [`AdminUserList`].
    pub async fn get_admin_users(&self, query: &AdminUserQuery) -> Result<AdminUserList> {
        let wire: AdminUserListWire = self
            .get(&format!("/admin/users/{}", query.to_query_string()))
            .await?;
        Ok(wire.into())
    }

    pub async fn update_admin_user(&self, id: u64, update: &AdminUserUpdate) -> Result<AdminUser> {
        self.patch_json(&format!("/admin/users/{}/", id), update)
            .await
    }

    pub async fn get_admin_reports(&self) -> Result<Vec<AdminPetReport>> {
        self.get("/admin/reports/").await
    }

    pub async fn update_admin_report(
        &self,
        report_id: u64,
        action: ApprovalAction,
    ) -> Result<MessageResponse> {
        self.patch_json(
            &format!("/admin/reports/{}/", report_id),
            &ReportAction { action },
        )
        .await
    }

    pub async fn delete_admin_report(&self, report_id: u64) -> Result<()> {
        self.delete(&format!("/admin/reports/{}/", report_id)).await
    }
}
