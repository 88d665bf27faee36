// ABOUTME: Typed coaching tip catalog keyed by the closed Pillar enumeration
// ABOUTME: Validates the API payload once at ingestion; unknown pillar keys logged or rejected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CTLST Labs

//! Tip catalog ingestion
//!
//! The API ships the catalog as `{ "tips": { "<pillar>": {...} }, "thresholds": {...} }`
//! with free-form pillar keys. [`TipCatalog::from_raw`] is the only place those
//! keys are interpreted: afterwards every lookup goes through [`Pillar`].

use crate::thresholds::Thresholds;
use ctlst_core::errors::{AppError, ErrorCode};
use ctlst_core::models::Pillar;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

/// A practice recommendation and a game-day recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipBundle {
    /// What to work on during training
    pub practice: String,
    /// What to do on competition day
    #[serde(alias = "gameDay")]
    pub game_day: String,
}

/// Catalog content for one pillar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipCatalogEntry {
    /// Display name of the pillar
    #[serde(default, alias = "display_name")]
    pub name: String,
    /// Tips for users who score as a strength
    pub strength_tips: TipBundle,
    /// Tips for users who score as a growth area
    pub growth_tips: TipBundle,
}

/// Catalog exactly as it arrives on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTipCatalog {
    /// Per-pillar content keyed by raw identifier
    pub tips: BTreeMap<String, TipCatalogEntry>,
    /// Classification cutoffs
    pub thresholds: Thresholds,
}

/// How to treat catalog keys that do not name a known pillar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngestPolicy {
    /// Log each unknown key once and drop it
    #[default]
    Lenient,
    /// Fail ingestion on the first unknown key
    Strict,
}

impl FromStr for IngestPolicy {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            other => Err(CatalogError::InvalidPolicy(other.to_owned())),
        }
    }
}

/// Catalog ingestion failures
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Thresholds not finite or not strictly ordered
    #[error("invalid thresholds: growth ({growth}) must be finite and below strength ({strength})")]
    InvalidThresholds {
        /// Strength cutoff received
        strength: f64,
        /// Growth cutoff received
        growth: f64,
    },

    /// Catalog key outside the pillar enumeration (strict policy only)
    #[error("unknown pillar '{0}' in tip catalog")]
    UnknownPillar(String),

    /// Unrecognized ingestion policy name
    #[error("unknown catalog policy '{0}' (expected 'lenient' or 'strict')")]
    InvalidPolicy(String),

    /// Payload is not valid catalog JSON
    #[error("malformed tip catalog: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<CatalogError> for AppError {
    fn from(error: CatalogError) -> Self {
        let code = match &error {
            CatalogError::InvalidThresholds { .. } => ErrorCode::ValueOutOfRange,
            CatalogError::UnknownPillar(_) => ErrorCode::InvalidFormat,
            CatalogError::InvalidPolicy(_) => ErrorCode::ConfigInvalid,
            CatalogError::Json(_) => ErrorCode::SerializationError,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

/// Validated, immutable tip catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TipCatalog {
    tips: BTreeMap<Pillar, TipCatalogEntry>,
    thresholds: Thresholds,
}

impl TipCatalog {
    /// Build a catalog from typed entries
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidThresholds`] unless both cutoffs are
    /// finite and `growth < strength`.
    pub fn new(
        tips: BTreeMap<Pillar, TipCatalogEntry>,
        thresholds: Thresholds,
    ) -> Result<Self, CatalogError> {
        if !thresholds.is_valid() {
            return Err(CatalogError::InvalidThresholds {
                strength: thresholds.strength,
                growth: thresholds.growth,
            });
        }

        let tips = tips
            .into_iter()
            .map(|(pillar, mut entry)| {
                if entry.name.trim().is_empty() {
                    pillar.default_display_name().clone_into(&mut entry.name);
                }
                (pillar, entry)
            })
            .collect();

        Ok(Self { tips, thresholds })
    }

    /// Ingest the wire payload, mapping keys onto [`Pillar`]
    ///
    /// # Errors
    ///
    /// Returns an error for invalid thresholds, or for an unknown pillar key
    /// under [`IngestPolicy::Strict`].
    pub fn from_raw(raw: RawTipCatalog, policy: IngestPolicy) -> Result<Self, CatalogError> {
        let mut tips = BTreeMap::new();

        for (key, entry) in raw.tips {
            match key.parse::<Pillar>() {
                Ok(pillar) => {
                    tips.insert(pillar, entry);
                }
                Err(_) if policy == IngestPolicy::Strict => {
                    return Err(CatalogError::UnknownPillar(key));
                }
                Err(_) => {
                    warn!(pillar = %key, "Dropping unknown pillar from tip catalog");
                }
            }
        }

        let catalog = Self::new(tips, raw.thresholds)?;
        debug!(
            pillars = catalog.len(),
            strength = catalog.thresholds.strength,
            growth = catalog.thresholds.growth,
            "Tip catalog ingested"
        );
        Ok(catalog)
    }

    /// Parse and ingest a JSON payload
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or ingestion fails
    pub fn from_json(payload: &str, policy: IngestPolicy) -> Result<Self, CatalogError> {
        let raw: RawTipCatalog = serde_json::from_str(payload)?;
        Self::from_raw(raw, policy)
    }

    /// Catalog entry for `pillar`
    #[must_use]
    pub fn entry(&self, pillar: Pillar) -> Option<&TipCatalogEntry> {
        self.tips.get(&pillar)
    }

    /// Classification cutoffs
    #[must_use]
    pub const fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Pillars with content, in assessment order
    pub fn pillars(&self) -> impl Iterator<Item = Pillar> + '_ {
        self.tips.keys().copied()
    }

    /// Number of pillars with content
    #[must_use]
    pub fn len(&self) -> usize {
        self.tips.len()
    }

    /// Whether the catalog has no content at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }
}

impl<'de> Deserialize<'de> for TipCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawTipCatalog::deserialize(deserializer)?;
        Self::from_raw(raw, IngestPolicy::Lenient).map_err(de::Error::custom)
    }
}
