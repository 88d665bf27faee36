// ABOUTME: Pillar enumeration for the mental-performance assessment dimensions
// ABOUTME: Closed set of pillar identifiers with parsing, display names, and scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CTLST Labs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One named dimension of the mental-performance assessment
///
/// The set is closed: identifiers coming from the API are mapped onto this
/// enum once, at the ingestion boundary, and everything downstream works with
/// the typed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pillar {
    /// Belief in one's ability to perform
    Confidence,
    /// Sustained attention on task-relevant cues
    Focus,
    /// Present-moment, non-judgmental awareness
    Mindfulness,
    /// Regulating physiological activation before and during competition
    ArousalControl,
    /// Bouncing back from setbacks and mistakes
    Resilience,
    /// Drive to train and compete
    Motivation,
    /// Quality of internal dialogue
    SelfTalk,
    /// Mental rehearsal and visualization
    Imagery,
}

impl Pillar {
    /// Every pillar, in assessment order
    pub const ALL: [Self; 8] = [
        Self::Confidence,
        Self::Focus,
        Self::Mindfulness,
        Self::ArousalControl,
        Self::Resilience,
        Self::Motivation,
        Self::SelfTalk,
        Self::Imagery,
    ];

    /// Wire identifier used by the API (`arousal_control`, `self_talk`, ...)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Confidence => "confidence",
            Self::Focus => "focus",
            Self::Mindfulness => "mindfulness",
            Self::ArousalControl => "arousal_control",
            Self::Resilience => "resilience",
            Self::Motivation => "motivation",
            Self::SelfTalk => "self_talk",
            Self::Imagery => "imagery",
        }
    }

    /// Display name used when the catalog does not provide one
    #[must_use]
    pub const fn default_display_name(self) -> &'static str {
        match self {
            Self::Confidence => "Confidence",
            Self::Focus => "Focus",
            Self::Mindfulness => "Mindfulness",
            Self::ArousalControl => "Arousal Control",
            Self::Resilience => "Resilience",
            Self::Motivation => "Motivation",
            Self::SelfTalk => "Self-Talk",
            Self::Imagery => "Imagery",
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier did not name a known pillar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown pillar identifier '{0}'")]
pub struct UnknownPillar(pub String);

impl FromStr for Pillar {
    type Err = UnknownPillar;

    /// Exact, case-sensitive match against the wire identifier
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|pillar| pillar.as_str() == s)
            .ok_or_else(|| UnknownPillar(s.to_owned()))
    }
}

/// A pillar identifier paired with the user's score
///
/// `pillar` stays a raw identifier: scores arrive from callers and the API,
/// and identifiers outside [`Pillar`] are ignored by the aggregator rather
/// than rejected. Scores carry no assumed bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PillarScore {
    /// Pillar wire identifier
    pub pillar: String,
    /// Raw score (observed 0-7)
    pub score: f64,
}

impl PillarScore {
    /// Create a score for any identifier
    pub fn new(pillar: impl Into<String>, score: f64) -> Self {
        Self {
            pillar: pillar.into(),
            score,
        }
    }

    /// Resolve the identifier against the closed pillar set
    #[must_use]
    pub fn resolve(&self) -> Option<Pillar> {
        self.pillar.parse().ok()
    }
}

impl From<(Pillar, f64)> for PillarScore {
    fn from((pillar, score): (Pillar, f64)) -> Self {
        Self::new(pillar.as_str(), score)
    }
}
