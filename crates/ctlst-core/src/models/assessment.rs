// ABOUTME: Assessment result models and radar-chart projection of pillar scores
// ABOUTME: Carries raw scores plus server-computed strength and growth membership
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CTLST Labs

use super::pillar::{Pillar, PillarScore};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Nominal maximum of an assessment pillar score
pub const NOMINAL_MAX_SCORE: f64 = 7.0;

/// A completed assessment as returned by the results endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    /// Assessment identifier
    pub id: Uuid,
    /// Athlete the assessment belongs to
    pub user_id: Uuid,
    /// Completion timestamp
    pub completed_at: DateTime<Utc>,
    /// Per-pillar scores
    pub scores: Vec<PillarScore>,
    /// Pillars the server flagged as strengths
    #[serde(default)]
    pub strengths: Option<Vec<String>>,
    /// Pillars the server flagged as growth areas
    #[serde(default)]
    pub growth_areas: Option<Vec<String>>,
}

/// One axis of the results radar chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarAxis {
    /// Pillar plotted on this axis
    pub pillar: Pillar,
    /// Axis label
    pub label: String,
    /// Score clamped to `0..=max`, or `None` when the pillar was not scored
    pub value: Option<f64>,
    /// Axis maximum
    pub max: f64,
}

impl AssessmentResult {
    /// Score for `pillar`, if present
    #[must_use]
    pub fn score_for(&self, pillar: Pillar) -> Option<f64> {
        self.scores
            .iter()
            .find(|entry| entry.pillar == pillar.as_str())
            .map(|entry| entry.score)
    }

    /// Whether the server shipped precomputed membership lists
    #[must_use]
    pub const fn has_membership(&self) -> bool {
        self.strengths.is_some() || self.growth_areas.is_some()
    }

    /// Radar chart axes in assessment order
    ///
    /// Every pillar gets an axis so the chart keeps its shape; unscored
    /// pillars carry `None`. Values are clamped for plotting only.
    #[must_use]
    pub fn radar_axes(&self) -> Vec<RadarAxis> {
        Pillar::ALL
            .into_iter()
            .map(|pillar| RadarAxis {
                pillar,
                label: pillar.default_display_name().to_owned(),
                value: self
                    .score_for(pillar)
                    .filter(|score| !score.is_nan())
                    .map(|score| score.clamp(0.0, NOMINAL_MAX_SCORE)),
                max: NOMINAL_MAX_SCORE,
            })
            .collect()
    }
}
