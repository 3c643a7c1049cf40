// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User, profile and account models.

use super::lenient;
use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

/// Full user record as returned by the profile endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub pincode: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub is_superuser: bool,
}

/// Profile as embedded in admin user reports and returned after image removal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: u64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub pincode: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub is_superuser: bool,
}

/// The logged-in user (`/profile_details/`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentUser {
    pub id: u64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub pincode: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// Row of the admin user listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminUser {
    pub id: u64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub gender: Option<String>,
}

/// Admin user listing, normalized from either a bare array or a paginated
/// `{results, count}` object.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminUserList {
    pub users: Vec<AdminUser>,
    /// Total count across pages (equals `users.len()` when unpaginated)
    pub count: usize,
}

#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum AdminUserListWire {
    Paginated {
        results: Vec<AdminUser>,
        count: usize,
    },
    Plain(Vec<AdminUser>),
}

impl From<AdminUserListWire> for AdminUserList {
    fn from(wire: AdminUserListWire) -> Self {
        match wire {
            AdminUserListWire::Paginated { results, count } => Self {
                users: results,
                count,
            },
            AdminUserListWire::Plain(users) => Self {
                count: users.len(),
                users,
            },
        }
    }
}

/// Filters for the admin user listing.
#[derive(Debug, Clone, Default)]
pub struct AdminUserQuery {
    pub search: Option<String>,
    /// `"all"` means no filter and is not sent
    pub role: Option<String>,
    pub page: Option<u32>,
    pub gender: Option<String>,
    pub superuser: Option<String>,
}

impl AdminUserQuery {
    /// Build `?a=b&c=d` (or an empty string when no filter is set).
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();

        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_string()));
        }
        if let Some(role) = self
            .role
            .as_deref()
            .filter(|r| !r.is_empty() && *r != "all")
        {
            pairs.push(("role", role.to_string()));
        }
        if let Some(page) = self.page.filter(|p| *p > 0) {
            pairs.push(("page", page.to_string()));
        }
        if let Some(gender) = self.gender.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("gender", gender.to_string()));
        }
        if let Some(superuser) = self.superuser.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("superuser", superuser.to_string()));
        }

        if pairs.is_empty() {
            return String::new();
        }

        let query: Vec<String> = pairs
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(&v)))
            .collect();
        format!("?{}", query.join("&"))
    }
}

/// Partial profile update, sent as JSON.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
}

impl ProfileUpdate {
    /// Non-empty fields as `(name, value)` pairs, for multipart bodies.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        [
            ("username", &self.username),
            ("email", &self.email),
            ("password", &self.password),
            ("gender", &self.gender),
            ("phone", &self.phone),
            ("address", &self.address),
            ("pincode", &self.pincode),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.clone().map(|v| (name, v)))
        .collect()
    }
}

/// Admin-side partial update of another user.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AdminUserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_staff: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_superuser: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

/// Body of `/profiles/change-password/`.
#[derive(Debug, Clone, Serialize)]
pub struct ChangePasswordData {
    pub old_password: String,
    pub new_password: String,
}

/// Body of `/admin/change-password/`, which names the old password differently.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct AdminChangePasswordData<'a> {
    pub current_password: &'a str,
    pub new_password: &'a str,
}

/// Credentials for `/login/`.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Email is invalid"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Successful login, normalized.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user_id: u64,
    pub username: String,
    pub email: String,
    pub is_superuser: bool,
}

/// Login body as the backend may send it: either flat, or the SimpleJWT
/// `{access, refresh, user: {...}}` form.
#[derive(Debug, Deserialize)]
pub(crate) struct LoginWire {
    #[serde(alias = "access")]
    access_token: Option<String>,
    #[serde(alias = "refresh")]
    refresh_token: Option<String>,
    user_id: Option<u64>,
    username: Option<String>,
    email: Option<String>,
    is_superuser: Option<bool>,
    user: Option<LoginWireUser>,
}

#[derive(Debug, Deserialize)]
struct LoginWireUser {
    id: u64,
    #[serde(default)]
    username: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    is_superuser: bool,
}

impl LoginWire {
    pub(crate) fn normalize(self) -> Result<LoginResponse, ApiError> {
        let access_token = self
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::MalformedResponse("login response has no access token".into()))?;
        let refresh_token = self.refresh_token.unwrap_or_default();

        let (user_id, username, email, is_superuser) = match self.user {
            Some(user) => (user.id, user.username, user.email, user.is_superuser),
            None => (
                self.user_id.ok_or_else(|| {
                    ApiError::MalformedResponse("login response has no user id".into())
                })?,
                self.username.unwrap_or_default(),
                self.email.unwrap_or_default(),
                self.is_superuser.unwrap_or(false),
            ),
        };

        Ok(LoginResponse {
            access_token,
            refresh_token,
            user_id,
            username,
            email,
            is_superuser,
        })
    }
}

/// Registration payload. Empty optional fields are not sent.
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(email(message = "Enter a valid email"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_pincode"))]
    pub pincode: Option<String>,
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.len() == 10 && phone.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("phone")
            .with_message(Cow::Borrowed("Enter a valid 10-digit phone")))
    }
}

fn validate_pincode(pincode: &str) -> Result<(), ValidationError> {
    if pincode.len() == 6 && pincode.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("pincode")
            .with_message(Cow::Borrowed("Enter a valid 6-digit pincode")))
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub user: Option<User>,
}

/// A remembered account on this device. Holds no credentials.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredAccount {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    /// ISO timestamp of the last switch to this account
    #[serde(rename = "lastUsed")]
    pub last_used: String,
}

impl StoredAccount {
    /// Directory entry for a freshly logged-in user.
    pub fn from_login(login: &LoginResponse, profile_image: Option<String>) -> Self {
        Self {
            id: login.user_id.to_string(),
            username: login.username.clone(),
            email: login.email.clone(),
            profile_image,
            last_used: crate::time_utils::now_rfc3339(),
        }
    }
}

/// Fields merged into the current account after a profile edit.
///
/// `profile_image: Some(None)` clears the image; `None` leaves it alone.
#[derive(Debug, Clone, Default)]
pub struct AccountProfilePatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub profile_image: Option<Option<String>>,
}
