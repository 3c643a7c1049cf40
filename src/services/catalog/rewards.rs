// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rewards, feedback stories and user reports.

use super::text_form;
use crate::error::Result;
use crate::models::{
    AdminUserReport, FeedbackStory, FeedbackStoryCreate, ReportStatus, Reward, UserReportPayload,
};
use crate::services::http::ApiClient;
use reqwest::Method;
use serde::Serialize;

#[derive(Serialize)]
struct UserReportStatusUpdate {
    report_status: ReportStatus,
}

impl ApiClient {
    /// Leaderboard of every user's reward points (admin only).
    pub async fn get_all_rewards(&self) -> Result<Vec<Reward>> {
        self.get("/all-rewards/").await
    }

    pub async fn get_my_rewards(&self) -> Result<Reward> {
        self.get("/my-rewards/").await
    }

    pub async fn get_feedback_stories(&self) -> Result<Vec<FeedbackStory>> {
        self.get("/feedback-stories/").await
    }

    pub async fn create_feedback_story(&self, story: FeedbackStoryCreate) -> Result<FeedbackStory> {
        let mut form = text_form(vec![
            ("title", story.title),
            ("story", story.story),
            ("pet_name", story.pet_name),
        ]);
        if let Some(image) = story.image {
            form = form.part("image", image.into_part()?);
        }
        self.send_multipart(Method::POST, "/feedback-stories/", form)
            .await
    }

    /// Report someone else's pet report to the admins.
    pub async fn create_user_report(&self, payload: &UserReportPayload) -> Result<AdminUserReport> {
        self.post_json("/user-reports/", payload).await
    }

    pub async fn get_admin_user_reports(&self) -> Result<Vec<AdminUserReport>> {
        self.get("/user-reports/").await
    }

    pub async fn update_user_report_status(
        &self,
        report_id: u64,
        status: ReportStatus,
    ) -> Result<AdminUserReport> {
        self.patch_json(
            &format!("/user-reports/{}/", report_id),
            &UserReportStatusUpdate {
                report_status: status,
            },
        )
        .await
    }
}
