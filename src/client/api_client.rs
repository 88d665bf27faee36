// ABOUTME: HTTP client for the CTLST REST API with bearer-token authentication
// ABOUTME: Maps HTTP status codes and transport failures onto structured AppError codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CTLST Labs

//! CTLST REST API client
//!
//! Thin typed wrapper over `reqwest`. Every endpoint except login needs a
//! bearer token; calling one without a token fails with
//! [`ErrorCode::AuthRequired`] before any request is sent.
//!
//! Status mapping:
//! - `401` -> [`ErrorCode::AuthInvalid`]
//! - `403` -> [`ErrorCode::PermissionDenied`]
//! - `404` -> [`ErrorCode::ResourceNotFound`]
//! - `429` -> [`ErrorCode::ExternalRateLimited`]
//! - any other failure status -> [`ErrorCode::ExternalServiceError`]
//! - connect errors and timeouts -> [`ErrorCode::ExternalServiceUnavailable`]

use crate::config::ApiConfig;
use crate::constants::{api_paths, service_names};
use crate::errors::{ApiErrorBody, AppError, AppResult, ErrorCode};
use crate::logging::AppLogger;
use crate::models::{AssessmentResult, NotificationPreferences, User};
use ctlst_intelligence::tip_catalog::RawTipCatalog;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, warn};
use url::Url;

/// Credentials posted to the login endpoint
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

/// Successful login payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests
    #[serde(alias = "access_token")]
    pub token: String,
    /// Authenticated user
    pub user: User,
}

/// CTLST REST API client
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client without credentials
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("ctlst-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                AppError::internal(format!("Failed to build HTTP client: {e}")).with_source(e)
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            token: None,
        })
    }

    /// Attach a bearer token
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Replace or drop the bearer token
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Current bearer token
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// API base URL
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Exchange credentials for a token and the user profile
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::AuthInvalid`] for rejected credentials, or a
    /// transport / decoding error
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginResponse> {
        let body = LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let request = self.request(Method::POST, api_paths::AUTH_LOGIN)?.json(&body);
        Self::execute(&Method::POST, api_paths::AUTH_LOGIN, request).await
    }

    /// Fetch the authenticated user
    ///
    /// # Errors
    ///
    /// Returns an error if no token is set or the request fails
    pub async fn current_user(&self) -> AppResult<User> {
        self.get_authenticated(api_paths::AUTH_ME).await
    }

    /// Fetch the coaching tip catalog as shipped by the API
    ///
    /// # Errors
    ///
    /// Returns an error if no token is set or the request fails
    pub async fn tip_catalog(&self) -> AppResult<RawTipCatalog> {
        self.get_authenticated(api_paths::COACHING_TIPS).await
    }

    /// Fetch the current user's most recent assessment
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::ResourceNotFound`] when the user has not taken
    /// an assessment yet
    pub async fn latest_assessment(&self) -> AppResult<AssessmentResult> {
        self.get_authenticated(api_paths::LATEST_ASSESSMENT).await
    }

    /// Fetch notification preferences
    ///
    /// # Errors
    ///
    /// Returns an error if no token is set or the request fails
    pub async fn notification_preferences(&self) -> AppResult<NotificationPreferences> {
        self.get_authenticated(api_paths::NOTIFICATION_PREFERENCES).await
    }

    /// Replace notification preferences, returning what the server stored
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::InvalidInput`] without contacting the server when
    /// `preferences` fail local validation
    pub async fn update_notification_preferences(
        &self,
        preferences: &NotificationPreferences,
    ) -> AppResult<NotificationPreferences> {
        preferences.validate()?;
        let request = self
            .authenticated(Method::PUT, api_paths::NOTIFICATION_PREFERENCES)?
            .json(preferences);
        Self::execute(&Method::PUT, api_paths::NOTIFICATION_PREFERENCES, request).await
    }

    async fn get_authenticated<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let request = self.authenticated(Method::GET, path)?;
        Self::execute(&Method::GET, path, request).await
    }

    fn endpoint(&self, path: &str) -> AppResult<Url> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        base.join(path.trim_start_matches('/')).map_err(|e| {
            AppError::config_invalid(format!("Cannot build URL for '{path}': {e}"))
        })
    }

    fn request(&self, method: Method, path: &str) -> AppResult<RequestBuilder> {
        Ok(self.http.request(method, self.endpoint(path)?))
    }

    fn authenticated(&self, method: Method, path: &str) -> AppResult<RequestBuilder> {
        let token = self.token.as_deref().ok_or_else(AppError::auth_required)?;
        Ok(self.request(method, path)?.bearer_auth(token))
    }

    async fn execute<T: DeserializeOwned>(
        method: &Method,
        path: &str,
        request: RequestBuilder,
    ) -> AppResult<T> {
        let started = Instant::now();
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        AppLogger::log_api_request(
            method.as_str(),
            path,
            status.as_u16(),
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );

        if !status.is_success() {
            return Err(status_error(path, response).await);
        }

        response.json::<T>().await.map_err(|e| {
            AppError::serialization(format!("Unexpected response body from {path}: {e}"))
                .with_source(e)
        })
    }
}

fn transport_error(error: reqwest::Error) -> AppError {
    let message = if error.is_timeout() {
        "request timed out".to_owned()
    } else if error.is_connect() {
        "connection failed".to_owned()
    } else {
        error.to_string()
    };
    warn!(error = %error, "CTLST API unreachable");
    AppError::external_unavailable(service_names::CTLST_API, message).with_source(error)
}

async fn status_error(path: &str, response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorBody>(&body).map_or_else(
        |_| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_owned()
        },
        |parsed| parsed.message,
    );
    debug!(path, status = status.as_u16(), %message, "CTLST API returned an error");

    let code = code_for_status(status);
    let error = if code == ErrorCode::ExternalServiceError {
        AppError::external_service(service_names::CTLST_API, message)
    } else {
        AppError::new(code, message)
    };
    error.with_details(serde_json::json!({ "path": path, "status": status.as_u16() }))
}

/// Error code for a non-success HTTP status
#[must_use]
pub fn code_for_status(status: StatusCode) -> ErrorCode {
    match status {
        StatusCode::UNAUTHORIZED => ErrorCode::AuthInvalid,
        StatusCode::FORBIDDEN => ErrorCode::PermissionDenied,
        StatusCode::NOT_FOUND => ErrorCode::ResourceNotFound,
        StatusCode::TOO_MANY_REQUESTS => ErrorCode::ExternalRateLimited,
        _ => ErrorCode::ExternalServiceError,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(&ApiConfig::new(base, Duration::from_secs(5)).unwrap()).unwrap()
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let c = client("https://api.example.com/v2");
        assert_eq!(
            c.endpoint(api_paths::AUTH_ME).unwrap().as_str(),
            "https://api.example.com/v2/api/auth/me"
        );
        let c = client("https://api.example.com/");
        assert_eq!(
            c.endpoint(api_paths::COACHING_TIPS).unwrap().as_str(),
            "https://api.example.com/api/coaching-tips"
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(code_for_status(StatusCode::UNAUTHORIZED), ErrorCode::AuthInvalid);
        assert_eq!(code_for_status(StatusCode::FORBIDDEN), ErrorCode::PermissionDenied);
        assert_eq!(code_for_status(StatusCode::NOT_FOUND), ErrorCode::ResourceNotFound);
        assert_eq!(
            code_for_status(StatusCode::TOO_MANY_REQUESTS),
            ErrorCode::ExternalRateLimited
        );
        assert_eq!(
            code_for_status(StatusCode::BAD_GATEWAY),
            ErrorCode::ExternalServiceError
        );
    }

    #[test]
    fn test_authenticated_request_requires_token() {
        let error = client("http://localhost:8000")
            .authenticated(Method::GET, api_paths::AUTH_ME)
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::AuthRequired);
    }
}
