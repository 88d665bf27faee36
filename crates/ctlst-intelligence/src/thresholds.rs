// ABOUTME: Strength and growth cutoffs used to classify pillar scores
// ABOUTME: Inclusive on both sides; growth must sit strictly below strength
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CTLST Labs

use serde::{Deserialize, Serialize};

/// Default strength cutoff on the 0-7 assessment scale
pub const DEFAULT_STRENGTH_THRESHOLD: f64 = 5.5;

/// Default growth cutoff on the 0-7 assessment scale
pub const DEFAULT_GROWTH_THRESHOLD: f64 = 3.5;

/// Classification cutoffs shipped with the tip catalog
///
/// `strength` is the inclusive lower bound for a strength, `growth` the
/// inclusive upper bound for a growth area. Scores strictly between the two
/// are neither.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Scores at or above this value are strengths
    pub strength: f64,
    /// Scores at or below this value are growth areas
    pub growth: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            strength: DEFAULT_STRENGTH_THRESHOLD,
            growth: DEFAULT_GROWTH_THRESHOLD,
        }
    }
}

impl Thresholds {
    /// Create thresholds, returning `None` unless both are finite and `growth < strength`
    #[must_use]
    pub fn new(strength: f64, growth: f64) -> Option<Self> {
        let thresholds = Self { strength, growth };
        thresholds.is_valid().then_some(thresholds)
    }

    /// Both cutoffs finite and strictly ordered
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.strength.is_finite() && self.growth.is_finite() && self.growth < self.strength
    }

    /// Width of the middle band that classifies as neither
    #[must_use]
    pub fn middle_band(&self) -> f64 {
        self.strength - self.growth
    }
}
