// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The request wrapper every backend call goes through.
//!
//! Handles:
//! - Bearer token injection from the persisted session
//! - JSON vs multipart bodies (multipart gets no client-set Content-Type)
//! - Error message extraction from failed responses
//! - Forced logout and navigation to the login page on 401

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::services::accounts::AccountDirectory;
use crate::services::session::SessionStore;
use crate::storage::{FileStore, KeyValueStore, MemoryStore};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Seam through which the client asks the host application to route
/// somewhere (only ever the login page).
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Default navigator: there is no router, so just log the request.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, path: &str) {
        tracing::warn!(path, "Navigation requested");
    }
}

impl<F> Navigator for F
where
    F: Fn(&str) + Send + Sync,
{
    fn navigate(&self, path: &str) {
        self(path)
    }
}

/// Request body.
#[derive(Debug, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Value),
    Multipart(Form),
}

/// Options for [`ApiClient::request`].
#[derive(Debug)]
pub struct RequestOptions {
    pub method: Method,
    pub body: RequestBody,
    /// Merged last, so these override the defaults
    pub headers: HeaderMap,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(Method::GET)
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            body: RequestBody::Empty,
            headers: HeaderMap::new(),
        }
    }

    /// Serialize `body` as the JSON request body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        let value = serde_json::to_value(body).map_err(anyhow::Error::from)?;
        self.body = RequestBody::Json(value);
        Ok(self)
    }

    pub fn multipart(mut self, form: Form) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    fn is_multipart(&self) -> bool {
        matches!(self.body, RequestBody::Multipart(_))
    }
}

/// Typed client for the pet-rescue API.
///
/// Cheap to clone; clones share the connection pool and the persisted state.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
    accounts: AccountDirectory,
    navigator: Arc<dyn Navigator>,
    login_path: String,
    keep_accounts_on_logout: bool,
}

impl ApiClient {
    /// Create a client on top of an existing store.
    pub fn new(config: &ClientConfig, store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session: SessionStore::new(store.clone()),
            accounts: AccountDirectory::new(store),
            navigator: Arc::new(TracingNavigator),
            login_path: config.login_path.clone(),
            keep_accounts_on_logout: config.keep_accounts_on_logout,
        })
    }

    /// Create a client with the store the configuration asks for: a JSON
    /// file when `store_path` is set, memory otherwise.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let store: Arc<dyn KeyValueStore> = match &config.store_path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Using file-backed store");
                Arc::new(FileStore::open(path))
            }
            None => Arc::new(MemoryStore::new()),
        };
        Self::new(config, store)
    }

    pub fn with_navigator<N: Navigator + 'static>(mut self, navigator: N) -> Self {
        self.navigator = Arc::new(navigator);
        self
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn accounts(&self) -> &AccountDirectory {
        &self.accounts
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn keep_accounts_on_logout(&self) -> bool {
        self.keep_accounts_on_logout
    }

    /// Send a request to `path` (relative to the base URL) and decode the
    /// JSON response.
    ///
    /// An empty 2xx body decodes as JSON `null`. On 401 the session is
    /// cleared and the navigator sent to the login page before the error
    /// is returned; a storage failure while clearing is only logged.
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let method = options.method.clone();
        let headers = self.build_headers(&options)?;

        let mut builder = self.http.request(method.clone(), &url);
        builder = match options.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => {
                builder.body(serde_json::to_vec(&value).map_err(anyhow::Error::from)?)
            }
            RequestBody::Multipart(form) => builder.multipart(form),
        };
        let response = builder.headers(headers).send().await?;

        let status = response.status();
        tracing::debug!(%method, path, status = status.as_u16(), "API request");

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(path, "Session rejected (401), logging out");
            if let Err(e) = self.logout() {
                tracing::warn!(error = %e, "Failed to clear session after 401");
            }
            self.navigator.navigate(&self.login_path);

            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Unauthorized {
                message: extract_error_message(status, &body),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Http {
                status,
                message: extract_error_message(status, &body),
            });
        }

        let bytes = response.bytes().await?;
        decode_body(&bytes).map_err(|e| {
            tracing::debug!(%method, path, error = %e, "Response did not match expected shape");
            ApiError::MalformedResponse(format!("{} {}: {}", method, path, e))
        })
    }

    fn build_headers(&self, options: &RequestOptions) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        if !options.is_multipart() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        if let Some(token) = self.session.access_token()? {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
                ApiError::Internal(anyhow::anyhow!(
                    "stored access token is not a valid header value"
                ))
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        for name in options.headers.keys() {
            headers.remove(name);
        }
        for (name, value) in options.headers.iter() {
            headers.append(name.clone(), value.clone());
        }

        Ok(headers)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(path, RequestOptions::new(Method::GET)).await
    }

    pub(crate) async fn send_json<T, B>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(path, RequestOptions::new(method).json(body)?)
            .await
    }

    pub(crate) async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(Method::POST, path, body).await
    }

    pub(crate) async fn patch_json<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(Method::PATCH, path, body).await
    }

    /// DELETE, ignoring whatever (if anything) comes back.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.request::<serde::de::IgnoredAny>(path, RequestOptions::new(Method::DELETE))
            .await?;
        Ok(())
    }

    pub(crate) async fn send_multipart<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: Form,
    ) -> Result<T> {
        self.request(path, RequestOptions::new(method).multipart(form))
            .await
    }
}

fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> serde_json::Result<T> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return serde_json::from_value(Value::Null);
    }
    serde_json::from_slice(bytes)
}

/// Message for a failed response: the first non-empty `detail`, `message`
/// or `error` string; `HTTP <status>` if the JSON body has none of them;
/// [`ApiError::NETWORK_ERROR_MESSAGE`] if the body is not JSON at all.
///
/// `error` is what the login, registration, OTP and admin-only views send.
pub(crate) fn extract_error_message(status: StatusCode, body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return ApiError::NETWORK_ERROR_MESSAGE.to_string();
    };

    ["detail", "message", "error"]
        .iter()
        .find_map(|key| {
            value
                .get(*key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_priority() {
        let status = StatusCode::BAD_REQUEST;
        assert_eq!(
            extract_error_message(status, r#"{"message": "m", "detail": "d"}"#),
            "d"
        );
        assert_eq!(
            extract_error_message(status, r#"{"detail": "", "message": "m"}"#),
            "m"
        );
        assert_eq!(
            extract_error_message(status, r#"{"error": "Pet not found"}"#),
            "Pet not found"
        );
    }

    #[test]
    fn test_error_message_fallbacks() {
        assert_eq!(
            extract_error_message(StatusCode::BAD_REQUEST, r#"{"email": ["taken"]}"#),
            "HTTP 400"
        );
        assert_eq!(
            extract_error_message(StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>"),
            "Network error"
        );
        assert_eq!(
            extract_error_message(StatusCode::INTERNAL_SERVER_ERROR, ""),
            "Network error"
        );
    }

    #[test]
    fn test_empty_body_decodes_as_null() {
        assert!(decode_body::<()>(b"").is_ok());
        let missing: Option<u32> = decode_body(b"  \n").unwrap();
        assert_eq!(missing, None);
        assert!(decode_body::<Vec<u32>>(b"").is_err());
    }

    #[test]
    fn test_closures_are_navigators() {
        let seen = std::sync::Mutex::new(Vec::new());
        let nav = |path: &str| seen.lock().unwrap().push(path.to_string());
        nav.navigate("/login");
        assert_eq!(*seen.lock().unwrap(), vec!["/login".to_string()]);
    }

    #[test]
    fn test_caller_headers_override_defaults() {
        let client = ApiClient::new(
            &ClientConfig::default(),
            Arc::new(MemoryStore::new()),
        )
        .unwrap();
        client.session().save("acc", "ref").unwrap();

        let options = RequestOptions::new(Method::POST)
            .header(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        let headers = client.build_headers(&options).unwrap();
        assert_eq!(headers[CONTENT_TYPE], "text/plain");
        assert_eq!(headers[AUTHORIZATION], "Bearer acc");

        let multipart = RequestOptions::new(Method::POST).multipart(Form::new());
        let headers = client.build_headers(&multipart).unwrap();
        assert!(headers.get(CONTENT_TYPE).is_none());
    }
}
