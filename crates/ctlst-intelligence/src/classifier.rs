// ABOUTME: Single-pillar classifier: strength, growth area, or neither
// ABOUTME: Threshold comparison and server-computed membership entry points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CTLST Labs

//! Pillar classification
//!
//! Two entry points feed the same notion of "strength" and "growth area":
//! [`classify_by_threshold`] computes membership from a score, and
//! [`classify_by_membership`] consumes membership the server already
//! computed. Both are total functions.

use crate::thresholds::Thresholds;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the thresholds a pillar landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipContext {
    /// At or above the strength cutoff
    Strength,
    /// At or below the growth cutoff
    Growth,
}

impl TipContext {
    /// Wire name (`strength` / `growth`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Growth => "growth",
        }
    }
}

impl fmt::Display for TipContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a score against the strength and growth cutoffs
///
/// Both boundaries are inclusive and compared directly, with no tolerance.
/// Out-of-range scores are classified like any other value; `NaN` fails both
/// comparisons and yields `None`. The strength check runs first.
///
/// ```rust
/// use ctlst_intelligence::{classify_by_threshold, Thresholds, TipContext};
///
/// let t = Thresholds { strength: 5.5, growth: 3.5 };
/// assert_eq!(classify_by_threshold(5.5, &t), Some(TipContext::Strength));
/// assert_eq!(classify_by_threshold(3.5, &t), Some(TipContext::Growth));
/// assert_eq!(classify_by_threshold(4.5, &t), None);
/// ```
#[must_use]
pub fn classify_by_threshold(score: f64, thresholds: &Thresholds) -> Option<TipContext> {
    if score >= thresholds.strength {
        Some(TipContext::Strength)
    } else if score <= thresholds.growth {
        Some(TipContext::Growth)
    } else {
        None
    }
}

/// Classify a pillar by presence in precomputed strength / growth lists
///
/// Strength membership wins when a pillar appears in both lists. A `None`
/// list counts as empty. Matching is exact and case-sensitive.
#[must_use]
pub fn classify_by_membership(
    pillar: &str,
    strengths: Option<&[String]>,
    growth_areas: Option<&[String]>,
) -> Option<TipContext> {
    let contains = |list: Option<&[String]>| list.is_some_and(|l| l.iter().any(|p| p == pillar));

    if contains(strengths) {
        Some(TipContext::Strength)
    } else if contains(growth_areas) {
        Some(TipContext::Growth)
    } else {
        None
    }
}

/// Server-computed strength and growth lists for one user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarMembership {
    /// Pillars flagged as strengths
    #[serde(default)]
    pub strengths: Option<Vec<String>>,
    /// Pillars flagged as growth areas
    #[serde(default)]
    pub growth_areas: Option<Vec<String>>,
}

impl PillarMembership {
    /// Create membership from the two optional lists
    #[must_use]
    pub const fn new(strengths: Option<Vec<String>>, growth_areas: Option<Vec<String>>) -> Self {
        Self {
            strengths,
            growth_areas,
        }
    }

    /// Classify `pillar` against these lists
    #[must_use]
    pub fn classify(&self, pillar: &str) -> Option<TipContext> {
        classify_by_membership(
            pillar,
            self.strengths.as_deref(),
            self.growth_areas.as_deref(),
        )
    }
}
