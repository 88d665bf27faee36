// ABOUTME: Cache abstraction for API responses with per-user isolation
// ABOUTME: Pluggable provider trait, structured keys, and per-resource TTL configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CTLST Labs

/// In-memory cache implementation
pub mod memory;

use crate::constants::cache::{
    CACHE_KEY_PREFIX, DEFAULT_CACHE_MAX_ENTRIES, DEFAULT_CLEANUP_INTERVAL_SECS,
    TTL_ASSESSMENT_SECS, TTL_TIP_CATALOG_SECS,
};
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

/// Cache provider trait for pluggable backend implementations
///
/// # Examples
///
/// ```rust,no_run
/// use ctlst_labs::cache::{CacheConfig, CacheKey, CacheProvider};
/// use ctlst_labs::cache::memory::InMemoryCache;
/// use std::time::Duration;
/// # async fn example() -> Result<(), ctlst_labs::errors::AppError> {
///
/// let config = CacheConfig {
///     enable_background_cleanup: false,
///     ..Default::default()
/// };
/// let cache = InMemoryCache::new(config).await?;
///
/// let key = CacheKey::tip_catalog();
/// cache.set(&key, &vec!["focus", "imagery"], Duration::from_secs(60)).await?;
/// let cached: Option<Vec<String>> = cache.get(&key).await?;
/// assert!(cached.is_some());
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait CacheProvider: Send + Sync + Clone {
    /// Create new cache instance with configuration
    ///
    /// # Errors
    ///
    /// Returns an error if cache initialization fails
    async fn new(config: CacheConfig) -> AppResult<Self>
    where
        Self: Sized;

    /// Store value in cache with TTL
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or storage fails
    async fn set<T: Serialize + Send + Sync>(
        &self,
        key: &CacheKey,
        value: &T,
        ttl: Duration,
    ) -> AppResult<()>;

    /// Retrieve value from cache, `None` when missing or expired
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails
    async fn get<T: for<'de> Deserialize<'de>>(&self, key: &CacheKey) -> AppResult<Option<T>>;

    /// Remove single cache entry
    ///
    /// # Errors
    ///
    /// Returns an error if invalidation fails
    async fn invalidate(&self, key: &CacheKey) -> AppResult<()>;

    /// Remove all entries matching a glob pattern, returning how many went
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not a valid glob
    async fn invalidate_pattern(&self, pattern: &str) -> AppResult<u64>;

    /// Check if a live entry exists for key
    ///
    /// # Errors
    ///
    /// Returns an error if existence check fails
    async fn exists(&self, key: &CacheKey) -> AppResult<bool>;

    /// Get remaining TTL for key
    ///
    /// # Errors
    ///
    /// Returns an error if TTL check fails
    async fn ttl(&self, key: &CacheKey) -> AppResult<Option<Duration>>;

    /// Clear all cache entries
    ///
    /// # Errors
    ///
    /// Returns an error if clear operation fails
    async fn clear_all(&self) -> AppResult<()>;
}

/// Cache configuration
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries before LRU eviction
    pub max_entries: usize,
    /// Cleanup interval for expired entries
    pub cleanup_interval: Duration,
    /// Run the background cleanup task (tests usually disable it)
    pub enable_background_cleanup: bool,
    /// Per-resource TTLs
    pub ttl: CacheTtlConfig,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_CACHE_MAX_ENTRIES,
            cleanup_interval: Duration::from_secs(DEFAULT_CLEANUP_INTERVAL_SECS),
            enable_background_cleanup: true,
            ttl: CacheTtlConfig::default(),
        }
    }
}

/// Cache TTL configuration for different resource types
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheTtlConfig {
    /// Tip catalog TTL in seconds (default: 24 hours)
    pub tip_catalog_secs: u64,
    /// Assessment results TTL in seconds (default: 15 minutes)
    pub assessment_secs: u64,
}

impl Default for CacheTtlConfig {
    fn default() -> Self {
        Self {
            tip_catalog_secs: TTL_TIP_CATALOG_SECS,
            assessment_secs: TTL_ASSESSMENT_SECS,
        }
    }
}

impl CacheTtlConfig {
    /// Get TTL duration for a specific cache resource type
    #[must_use]
    pub const fn ttl_for_resource(&self, resource: &CacheResource) -> Duration {
        match resource {
            CacheResource::TipCatalog => Duration::from_secs(self.tip_catalog_secs),
            CacheResource::AssessmentResults { .. } => Duration::from_secs(self.assessment_secs),
        }
    }
}

/// Structured cache key
///
/// `scope` separates shared content (`global`) from per-user content
/// (`user:<id>`), so a user's entries can be dropped with one pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// `global` or `user:<uuid>`
    pub scope: String,
    /// Specific resource being cached
    pub resource: CacheResource,
}

impl CacheKey {
    /// Key for the shared tip catalog
    #[must_use]
    pub fn tip_catalog() -> Self {
        Self {
            scope: "global".to_owned(),
            resource: CacheResource::TipCatalog,
        }
    }

    /// Key for a user's latest assessment results
    #[must_use]
    pub fn assessment_results(user_id: Uuid) -> Self {
        Self {
            scope: Self::user_scope(user_id),
            resource: CacheResource::AssessmentResults { user_id },
        }
    }

    fn user_scope(user_id: Uuid) -> String {
        format!("user:{user_id}")
    }

    /// Pattern matching every entry owned by a user
    #[must_use]
    pub fn user_pattern(user_id: Uuid) -> String {
        format!("{CACHE_KEY_PREFIX}{}:*", Self::user_scope(user_id))
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{CACHE_KEY_PREFIX}{}:{}", self.scope, self.resource)
    }
}

/// Cached resource types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheResource {
    /// Coaching tip catalog (24h TTL)
    TipCatalog,
    /// Latest assessment for a user (15min TTL)
    AssessmentResults {
        /// Owner of the assessment
        user_id: Uuid,
    },
}

impl CacheResource {
    /// Get recommended TTL for this resource type
    #[must_use]
    pub const fn recommended_ttl(&self) -> Duration {
        match self {
            Self::TipCatalog => Duration::from_secs(TTL_TIP_CATALOG_SECS),
            Self::AssessmentResults { .. } => Duration::from_secs(TTL_ASSESSMENT_SECS),
        }
    }
}

impl fmt::Display for CacheResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TipCatalog => write!(f, "tip_catalog"),
            Self::AssessmentResults { user_id } => write!(f, "assessment_results:{user_id}"),
        }
    }
}
