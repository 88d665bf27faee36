// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Quiet logging, catalog and user fixtures, and API client setup against mock servers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CTLST Labs
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `ctlst_labs`

use anyhow::Result;
use ctlst_labs::cache::{memory::InMemoryCache, CacheConfig, CacheProvider};
use ctlst_labs::client::ApiClient;
use ctlst_labs::config::ApiConfig;
use ctlst_labs::intelligence::tip_catalog::IngestPolicy;
use ctlst_labs::intelligence::TipCatalog;
use ctlst_labs::models::{Pillar, User, UserRole};
use serde_json::{json, Map, Value};
use std::env;
use std::sync::Once;
use std::time::Duration;
use tracing::Level;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Catalog payload as the API serves it, one entry per listed pillar
///
/// Tip text is `<pillar>.<strength|growth>.<practice|game_day>` so tests
/// can assert which bundle was picked.
pub fn catalog_payload(pillars: &[&str], strength: f64, growth: f64) -> Value {
    let tips: Map<String, Value> = pillars
        .iter()
        .map(|pillar| {
            (
                (*pillar).to_owned(),
                json!({
                    "name": format!("{pillar} name"),
                    "strength_tips": {
                        "practice": format!("{pillar}.strength.practice"),
                        "game_day": format!("{pillar}.strength.game_day"),
                    },
                    "growth_tips": {
                        "practice": format!("{pillar}.growth.practice"),
                        "game_day": format!("{pillar}.growth.game_day"),
                    },
                }),
            )
        })
        .collect();
    json!({ "tips": tips, "thresholds": { "strength": strength, "growth": growth } })
}

/// Every pillar, default thresholds (5.5 / 3.5)
pub fn full_catalog_payload() -> Value {
    let pillars: Vec<&str> = Pillar::ALL.iter().map(|p| p.as_str()).collect();
    catalog_payload(&pillars, 5.5, 3.5)
}

/// Typed catalog with every pillar and default thresholds
pub fn full_catalog() -> Result<TipCatalog> {
    Ok(TipCatalog::from_json(
        &full_catalog_payload().to_string(),
        IngestPolicy::Strict,
    )?)
}

pub fn test_user(role: UserRole) -> User {
    User {
        id: Uuid::new_v4(),
        email: "riley@example.com".to_owned(),
        name: Some("Riley".to_owned()),
        role,
        organization_id: None,
    }
}

/// Client pointed at `base_url` with a short timeout
pub fn test_client(base_url: &str) -> Result<ApiClient> {
    init_test_logging();
    Ok(ApiClient::new(&ApiConfig::new(base_url, Duration::from_secs(5))?)?)
}

/// In-memory cache without the background task
pub async fn test_cache() -> Result<InMemoryCache> {
    let config = CacheConfig {
        enable_background_cleanup: false,
        ..CacheConfig::default()
    };
    Ok(InMemoryCache::new(config).await?)
}
