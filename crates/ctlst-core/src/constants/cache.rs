// ABOUTME: Cache-related constants for TTL, capacity, and cleanup intervals
// ABOUTME: Tip catalog content is slow-changing and cached for a full day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CTLST Labs

/// Default maximum cache entries for in-memory cache
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 1_000;

/// Upper bound accepted for the configured cache capacity
pub const MAX_CACHE_MAX_ENTRIES: usize = 100_000;

/// Default cleanup interval in seconds for expired entries
pub const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 300; // 5 minutes

/// Tip catalog cache TTL (24 hours) - catalog content is static
pub const TTL_TIP_CATALOG_SECS: u64 = 86_400;

/// Upper bound accepted for the tip catalog TTL (30 days)
pub const MAX_TTL_TIP_CATALOG_SECS: u64 = 2_592_000;

/// Assessment results cache TTL (15 minutes) - a new assessment may land at any time
pub const TTL_ASSESSMENT_SECS: u64 = 900;

/// Cache key prefix for namespacing
pub const CACHE_KEY_PREFIX: &str = "ctlst:cache:";
