// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile endpoints.

use super::text_form;
use crate::error::Result;
use crate::models::user::AdminChangePasswordData;
use crate::models::{
    ChangePasswordData, CurrentUser, ImageUpload, MessageResponse, ProfileUpdate, User,
};
use crate::services::http::{ApiClient, RequestOptions};
use reqwest::Method;

impl ApiClient {
    /// The logged-in user.
    pub async fn get_profile(&self) -> Result<CurrentUser> {
        self.get("/profile_details/").await
    }

    pub async fn get_profiles(&self) -> Result<Vec<User>> {
        self.get("/profiles/").await
    }

    /// Create a profile from the set fields, plus an optional image.
    pub async fn create_profile(
        &self,
        profile: &ProfileUpdate,
        profile_image: Option<ImageUpload>,
    ) -> Result<User> {
        let mut form = text_form(profile.form_fields());
        if let Some(image) = profile_image {
            form = form.part("profile_image", image.into_part()?);
        }
        self.send_multipart(Method::POST, "/profiles/", form).await
    }

    pub async fn update_profile(&self, id: u64, profile: &ProfileUpdate) -> Result<User> {
        self.patch_json(&format!("/profiles/{}/", id), profile)
            .await
    }

    /// Partial update that also replaces the profile image.
    pub async fn update_profile_with_image(
        &self,
        id: u64,
        profile: &ProfileUpdate,
        profile_image: ImageUpload,
    ) -> Result<User> {
        let form =
            text_form(profile.form_fields()).part("profile_image", profile_image.into_part()?);
        self.send_multipart(Method::PATCH, &format!("/profiles/{}/", id), form)
            .await
    }

    pub async fn delete_profile(&self, id: u64) -> Result<()> {
        self.delete(&format!("/profiles/{}/", id)).await
    }

    /// Remove the logged-in user's profile image.
    pub async fn delete_profile_image(&self) -> Result<MessageResponse> {
        self.request("/profiles/delete-image/", RequestOptions::new(Method::DELETE))
            .await
    }

    pub async fn change_password(&self, data: &ChangePasswordData) -> Result<MessageResponse> {
        self.post_json("/profiles/change-password/", data).await
    }

    /// Password change from the admin console.
    pub async fn admin_change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<MessageResponse> {
        self.post_json(
            "/admin/change-password/",
            &AdminChangePasswordData {
                current_password,
                new_password,
            },
        )
        .await
    }
}
