// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login, registration, logout and token refresh.

use crate::error::{ApiError, Result};
use crate::models::user::LoginWire;
use crate::models::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest, RegisterResponse};
use crate::services::http::ApiClient;
use crate::services::media;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Validate)]
struct VerifyAccountRequest {
    #[validate(email(message = "Enter a valid email"))]
    email: String,
    #[validate(length(min = 1, message = "Verification code is required"))]
    code: String,
}

#[derive(Debug, Serialize, Validate)]
struct PasswordResetRequest {
    #[validate(email(message = "Enter a valid email"))]
    email: String,
}

#[derive(Debug, Serialize, Validate)]
struct PasswordResetConfirm {
    #[validate(email(message = "Enter a valid email"))]
    email: String,
    #[validate(length(min = 1, message = "OTP is required"))]
    otp: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    new_password: String,
}

#[derive(Debug, Serialize)]
struct TokenRefreshRequest<'a> {
    refresh: &'a str,
}

/// SimpleJWT refresh response; `refresh` is only present when rotation is on.
#[derive(Debug, Deserialize)]
struct TokenRefreshResponse {
    access: String,
    #[serde(default)]
    refresh: Option<String>,
}

impl ApiClient {
    /// Log in and persist the returned token pair.
    ///
    /// The account directory is left alone; callers remember the account
    /// with [`AccountDirectory::add_stored_account`] if they want to.
    ///
    /// [`AccountDirectory::add_stored_account`]: crate::services::accounts::AccountDirectory::add_stored_account
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let credentials = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        credentials.validate()?;

        let wire: LoginWire = self.post_json("/login/", &credentials).await?;
        let login = wire.normalize()?;
        self.session()
            .save(&login.access_token, &login.refresh_token)?;

        tracing::info!(user_id = login.user_id, "Logged in");
        Ok(login)
    }

    /// Create an account. The backend emails a verification code; nothing
    /// is stored locally.
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse> {
        request.validate()?;
        self.post_json("/register/", request).await
    }

    /// Confirm a new account with the emailed code.
    pub async fn verify_account(&self, email: &str, code: &str) -> Result<MessageResponse> {
        let body = VerifyAccountRequest {
            email: email.trim().to_string(),
            code: code.trim().to_string(),
        };
        body.validate()?;
        self.post_json("/verify-register/", &body).await
    }

    pub async fn request_password_reset(&self, email: &str) -> Result<MessageResponse> {
        let body = PasswordResetRequest {
            email: email.trim().to_string(),
        };
        body.validate()?;
        self.post_json("/password-reset-request/", &body).await
    }

    pub async fn confirm_password_reset(
        &self,
        email: &str,
        otp: &str,
        new_password: &str,
    ) -> Result<MessageResponse> {
        let body = PasswordResetConfirm {
            email: email.trim().to_string(),
            otp: otp.trim().to_string(),
            new_password: new_password.to_string(),
        };
        body.validate()?;
        self.post_json("/password-reset-confirm/", &body).await
    }

    /// Exchange the stored refresh token for a new access token.
    ///
    /// Returns the new access token. A rotated refresh token, if the backend
    /// sends one, replaces the stored one.
    pub async fn refresh_session(&self) -> Result<String> {
        let refresh_token = self
            .session()
            .refresh_token()?
            .ok_or(ApiError::NotAuthenticated)?;

        let response: TokenRefreshResponse = self
            .post_json(
                "/token/refresh/",
                &TokenRefreshRequest {
                    refresh: &refresh_token,
                },
            )
            .await?;

        match &response.refresh {
            Some(rotated) => self.session().save(&response.access, rotated)?,
            None => self.session().set_access_token(&response.access)?,
        }

        tracing::debug!(rotated = response.refresh.is_some(), "Session refreshed");
        Ok(response.access)
    }

    /// Forget the session and the current-account pointer. The remembered
    /// accounts are wiped too unless the client was configured to keep them.
    /// Other persisted keys are untouched.
    pub fn logout(&self) -> Result<()> {
        self.session().clear()?;
        self.accounts().clear_current()?;
        if !self.keep_accounts_on_logout() {
            self.accounts().clear_directory()?;
        }

        tracing::info!("Logged out");
        Ok(())
    }

    pub fn is_authenticated(&self) -> Result<bool> {
        self.session().is_authenticated()
    }

    /// Absolute URL for an image path returned by the backend.
    pub fn get_image_url(&self, path: Option<&str>) -> String {
        media::get_image_url(self.base_url(), path)
    }
}
