// ABOUTME: Application-wide constants organized by domain
// ABOUTME: Cache lifetimes, environment variable names, and client defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CTLST Labs

//! Constants shared by the client shell and the intelligence crate

/// Cache TTLs and capacity
pub mod cache;

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Base URL of the CTLST REST API
    pub const API_BASE_URL: &str = "CTLST_API_BASE_URL";
    /// Request timeout in seconds
    pub const API_TIMEOUT_SECS: &str = "CTLST_API_TIMEOUT_SECS";
    /// Tip catalog cache TTL override in seconds
    pub const TIP_CACHE_TTL_SECS: &str = "CTLST_TIP_CACHE_TTL_SECS";
    /// Maximum in-memory cache entries
    pub const CACHE_MAX_ENTRIES: &str = "CTLST_CACHE_MAX_ENTRIES";
    /// Path of the persisted session file
    pub const SESSION_PATH: &str = "CTLST_SESSION_PATH";
    /// Unknown-pillar handling for catalog ingestion (`lenient` or `strict`)
    pub const CATALOG_POLICY: &str = "CTLST_CATALOG_POLICY";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Client defaults
pub mod defaults {
    /// Local development API
    pub const API_BASE_URL: &str = "http://localhost:8000";
    /// Request timeout (seconds)
    pub const API_TIMEOUT_SECS: u64 = 30;
    /// Directory created under the platform config dir
    pub const CONFIG_DIR_NAME: &str = "ctlst";
    /// Session file name inside [`CONFIG_DIR_NAME`]
    pub const SESSION_FILE_NAME: &str = "session.json";
}

/// Service identifiers used in structured logs and user agents
pub mod service_names {
    /// Client core service name
    pub const CTLST_CLIENT: &str = "ctlst-client";
    /// Name used when logging API failures
    pub const CTLST_API: &str = "CTLST API";
}

/// REST endpoint paths, relative to the API base URL
pub mod api_paths {
    /// Credential login
    pub const AUTH_LOGIN: &str = "/api/auth/login";
    /// Currently authenticated user
    pub const AUTH_ME: &str = "/api/auth/me";
    /// Static coaching tip catalog and thresholds
    pub const COACHING_TIPS: &str = "/api/coaching-tips";
    /// Most recent assessment result for the current user
    pub const LATEST_ASSESSMENT: &str = "/api/assessments/latest";
    /// Push notification preferences for the current user
    pub const NOTIFICATION_PREFERENCES: &str = "/api/notifications/preferences";
}
