// ABOUTME: Main library entry point for the CTLST Labs client core
// ABOUTME: Configuration, caching, REST client, session lifecycle, and coaching tips service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CTLST Labs

#![deny(unsafe_code)]

//! # CTLST Labs client core
//!
//! Client-side core of the CTLST Labs mental performance platform. Athletes
//! take a pillar assessment; this crate turns the results into coaching tips.
//!
//! ## Architecture
//!
//! - **intelligence** (`ctlst-intelligence`): pure classification and tip
//!   relevance over a typed tip catalog
//! - **core** (`ctlst-core`): errors, domain models, constants
//! - **client**: typed REST client for the CTLST API
//! - **cache**: TTL and LRU cache for the catalog and assessments
//! - **session**: hydrate / login / teardown with persistent storage
//! - **coaching**: service combining the three above
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use ctlst_labs::cache::{memory::InMemoryCache, CacheProvider};
//! use ctlst_labs::client::ApiClient;
//! use ctlst_labs::coaching::CoachingTipsService;
//! use ctlst_labs::config::ClientConfig;
//! use ctlst_labs::errors::AppResult;
//! use ctlst_labs::session::{FileSessionStore, Session};
//! use ctlst_labs::intelligence::TipFilter;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ClientConfig::from_env()?;
//!     let session = Session::hydrate(FileSessionStore::new(&config.session_path)).await?;
//!     let client = session.authorize(ApiClient::new(&config.api)?)?;
//!     let cache = InMemoryCache::new(config.cache.clone()).await?;
//!
//!     let service = CoachingTipsService::from_config(&config, client, cache);
//!     if let Some(user) = session.user() {
//!         let tips = service.tips_for_user(user.id, TipFilter::All).await?;
//!         println!("{} tips for {}", tips.len(), user.display_name());
//!     }
//!     Ok(())
//! }
//! ```

/// Response caching with pluggable backends
pub mod cache;

/// REST API client
pub mod client;

/// Coaching tips service
pub mod coaching;

/// Environment-based configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Session lifecycle and persistence
pub mod session;

pub use ctlst_core::{constants, errors, models};
pub use ctlst_intelligence as intelligence;
