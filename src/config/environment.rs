// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads API location, timeouts, cache lifetimes, and session storage from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CTLST Labs

//! Environment-based configuration
//!
//! Configuration is environment-only: there is no config file. Every
//! variable has a default suitable for local development.

use crate::cache::{CacheConfig, CacheTtlConfig};
use crate::constants::{cache, defaults, env_config};
use crate::errors::{AppError, AppResult};
use ctlst_intelligence::tip_catalog::IngestPolicy;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

/// Environment type for logging and safety defaults
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Deployed production
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// REST API connection settings
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL all endpoint paths are joined onto
    pub base_url: Url,
    /// Per-request timeout
    pub timeout: Duration,
}

impl ApiConfig {
    /// Build API settings from a base URL string
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute http(s) URL or the
    /// timeout is zero
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            AppError::config_invalid(format!("invalid API base URL '{base_url}': {e}"))
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(AppError::config_invalid(format!(
                "API base URL must use http or https, got '{}'",
                base_url.scheme()
            )));
        }
        if timeout.is_zero() {
            return Err(AppError::config_invalid("API timeout must be greater than zero"));
        }
        Ok(Self { base_url, timeout })
    }
}

/// Complete client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Deployment environment
    pub environment: Environment,
    /// REST API connection
    pub api: ApiConfig,
    /// Response cache sizing and lifetimes
    pub cache: CacheConfig,
    /// Where the session token is persisted
    pub session_path: PathBuf,
    /// Unknown-pillar handling when ingesting the tip catalog
    pub catalog_policy: IngestPolicy,
}

impl ClientConfig {
    /// Development configuration pointing at `api`, everything else defaulted
    #[must_use]
    pub fn new(api: ApiConfig) -> Self {
        Self {
            environment: Environment::default(),
            api,
            cache: CacheConfig::default(),
            session_path: default_session_path(),
            catalog_policy: IngestPolicy::default(),
        }
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed, or
    /// the resulting configuration fails validation
    pub fn from_env() -> AppResult<Self> {
        let environment = env::var(env_config::ENVIRONMENT)
            .map(|v| Environment::from_str_or_default(&v))
            .unwrap_or_default();

        let base_url = env::var(env_config::API_BASE_URL)
            .unwrap_or_else(|_| defaults::API_BASE_URL.to_owned());
        let timeout_secs = parse_env(env_config::API_TIMEOUT_SECS, defaults::API_TIMEOUT_SECS)?;
        let api = ApiConfig::new(&base_url, Duration::from_secs(timeout_secs))?;

        let tip_catalog_secs =
            parse_env(env_config::TIP_CACHE_TTL_SECS, cache::TTL_TIP_CATALOG_SECS)?;
        let max_entries =
            parse_env(env_config::CACHE_MAX_ENTRIES, cache::DEFAULT_CACHE_MAX_ENTRIES)?;
        let cache = CacheConfig {
            max_entries,
            ttl: CacheTtlConfig {
                tip_catalog_secs,
                ..CacheTtlConfig::default()
            },
            ..CacheConfig::default()
        };

        let session_path = env::var(env_config::SESSION_PATH)
            .map_or_else(|_| default_session_path(), PathBuf::from);

        let catalog_policy = match env::var(env_config::CATALOG_POLICY) {
            Ok(value) => value.parse::<IngestPolicy>().map_err(AppError::from)?,
            Err(_) => IngestPolicy::default(),
        };

        let config = Self {
            environment,
            api,
            cache,
            session_path,
            catalog_policy,
        };
        config.validate()?;
        config.log_summary();
        Ok(config)
    }

    /// Validate cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns an error if the tip catalog TTL is zero or above 30 days, the
    /// cache capacity is above its bound, or a production deployment talks
    /// to the API over plain http
    pub fn validate(&self) -> AppResult<()> {
        if self.cache.ttl.tip_catalog_secs == 0 {
            return Err(AppError::config_invalid(
                "tip catalog cache TTL must be greater than zero",
            ));
        }
        if self.cache.ttl.tip_catalog_secs > cache::MAX_TTL_TIP_CATALOG_SECS {
            return Err(AppError::config_invalid(format!(
                "tip catalog cache TTL must be at most {} seconds, got {}",
                cache::MAX_TTL_TIP_CATALOG_SECS,
                self.cache.ttl.tip_catalog_secs
            )));
        }
        if self.cache.max_entries > cache::MAX_CACHE_MAX_ENTRIES {
            return Err(AppError::config_invalid(format!(
                "cache capacity must be at most {} entries, got {}",
                cache::MAX_CACHE_MAX_ENTRIES,
                self.cache.max_entries
            )));
        }
        if self.environment.is_production() && self.api.base_url.scheme() != "https" {
            return Err(AppError::config_invalid(
                "production deployments must use an https API base URL",
            ));
        }
        if self.catalog_policy == IngestPolicy::Strict && !self.environment.is_production() {
            warn!("Strict tip catalog policy enabled: unknown pillars will fail ingestion");
        }
        Ok(())
    }

    fn log_summary(&self) {
        info!(
            environment = %self.environment,
            api.base_url = %self.api.base_url,
            api.timeout_secs = self.api.timeout.as_secs(),
            cache.tip_catalog_secs = self.cache.ttl.tip_catalog_secs,
            session.path = %self.session_path.display(),
            "Client configuration loaded"
        );
    }
}

/// `<platform config dir>/ctlst/session.json`, or the working directory if none
#[must_use]
pub fn default_session_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(defaults::CONFIG_DIR_NAME)
        .join(defaults::SESSION_FILE_NAME)
}

fn parse_env<T>(name: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(name) {
        Ok(value) => value.trim().parse::<T>().map_err(|e| {
            AppError::config_invalid(format!("{name} must be a non-negative integer: {e}"))
        }),
        Err(_) => Ok(default),
    }
}
