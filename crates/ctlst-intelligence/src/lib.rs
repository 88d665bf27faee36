// ABOUTME: Coaching tip relevance engine for the CTLST Labs platform
// ABOUTME: Classifies pillar scores and selects, filters, and orders coaching tips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CTLST Labs

#![deny(unsafe_code)]

//! # CTLST Intelligence
//!
//! Stateless, side-effect-free functions that turn a user's pillar scores
//! into coaching advice:
//!
//! - **classifier**: strength / growth / neither, by threshold or by
//!   server-computed membership
//! - **`tip_catalog`**: typed catalog keyed by [`Pillar`], built from the API
//!   payload at the ingestion boundary
//! - **relevance**: filtered and ordered tips for a full score set
//!
//! ```rust
//! use ctlst_intelligence::{relevant_tips, TipCatalog, TipFilter, TipContext};
//! use ctlst_intelligence::tip_catalog::IngestPolicy;
//! use ctlst_core::models::PillarScore;
//!
//! let payload = r#"{
//!   "thresholds": {"strength": 5.5, "growth": 3.5},
//!   "tips": {
//!     "confidence": {
//!       "name": "Confidence",
//!       "strength_tips": {"practice": "Lead a drill", "game_day": "Trust your prep"},
//!       "growth_tips": {"practice": "Log small wins", "game_day": "Power pose"}
//!     }
//!   }
//! }"#;
//! let catalog = TipCatalog::from_json(payload, IngestPolicy::Lenient)?;
//! let tips = relevant_tips(&catalog, &[PillarScore::new("confidence", 6.0)], TipFilter::All);
//! assert_eq!(tips[0].context, TipContext::Strength);
//! # Ok::<(), ctlst_intelligence::tip_catalog::CatalogError>(())
//! ```
//!
//! [`Pillar`]: ctlst_core::models::Pillar

/// Threshold and membership classification of single pillars
pub mod classifier;

/// Tip relevance aggregation over a full score set
pub mod relevance;

/// Strength / growth cutoffs
pub mod thresholds;

/// Typed tip catalog and ingestion from the API payload
pub mod tip_catalog;

pub use classifier::{classify_by_membership, classify_by_threshold, PillarMembership, TipContext};
pub use relevance::{relevant_tips, relevant_tips_by_membership, ClassificationResult, TipFilter};
pub use thresholds::Thresholds;
pub use tip_catalog::{TipBundle, TipCatalog, TipCatalogEntry};
