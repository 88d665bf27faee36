// ABOUTME: Tip relevance aggregator producing ordered, filtered coaching advice
// ABOUTME: Strengths best-first, growth areas worst-first, strengths listed before growth
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CTLST Labs

//! Tip relevance aggregation
//!
//! Given a user's score set and the catalog, pick the tips worth showing.
//! Middle-band scores and pillars without catalog content contribute nothing.
//!
//! Ordering is fixed: every strength (score descending) comes before every
//! growth area (score ascending). Sorting is stable, so equal scores keep the
//! order in which the caller supplied them.

use crate::classifier::{classify_by_threshold, PillarMembership, TipContext};
use crate::tip_catalog::{TipCatalog, TipCatalogEntry};
use ctlst_core::models::{Pillar, PillarScore};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Which classifications to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipFilter {
    /// Strengths only
    Strengths,
    /// Growth areas only
    Growth,
    /// Both, strengths first
    #[default]
    All,
}

impl TipFilter {
    /// Whether a pillar classified as `context` passes this filter
    #[must_use]
    pub const fn includes(self, context: TipContext) -> bool {
        matches!(
            (self, context),
            (Self::All, _)
                | (Self::Strengths, TipContext::Strength)
                | (Self::Growth, TipContext::Growth)
        )
    }
}

impl FromStr for TipFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strengths" | "strength" => Ok(Self::Strengths),
            "growth" => Ok(Self::Growth),
            "all" => Ok(Self::All),
            other => Err(format!(
                "unknown tip filter '{other}' (expected strengths, growth, or all)"
            )),
        }
    }
}

impl fmt::Display for TipFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strengths => f.write_str("strengths"),
            Self::Growth => f.write_str("growth"),
            Self::All => f.write_str("all"),
        }
    }
}

/// One actionable tip for one classified pillar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Classified pillar
    pub pillar: Pillar,
    /// Display name from the catalog
    pub display_name: String,
    /// Score that produced the classification
    pub score: f64,
    /// Strength or growth
    pub context: TipContext,
    /// Practice recommendation
    pub practice_tip: String,
    /// Game-day recommendation
    pub game_day_tip: String,
}

impl ClassificationResult {
    fn from_entry(pillar: Pillar, entry: &TipCatalogEntry, score: f64, context: TipContext) -> Self {
        let bundle = match context {
            TipContext::Strength => &entry.strength_tips,
            TipContext::Growth => &entry.growth_tips,
        };
        Self {
            pillar,
            display_name: entry.name.clone(),
            score,
            context,
            practice_tip: bundle.practice.clone(),
            game_day_tip: bundle.game_day.clone(),
        }
    }
}

/// Tips for every score that clears a catalog threshold
///
/// Scores are classified with [`classify_by_threshold`] against the
/// catalog's own thresholds. Unknown pillars, pillars missing from the
/// catalog, and middle-band scores are skipped.
#[must_use]
pub fn relevant_tips(
    catalog: &TipCatalog,
    scores: &[PillarScore],
    filter: TipFilter,
) -> Vec<ClassificationResult> {
    let thresholds = catalog.thresholds();
    aggregate(catalog, scores, filter, |entry| {
        classify_by_threshold(entry.score, thresholds)
    })
}

/// Tips for every scored pillar the server flagged as a strength or growth area
///
/// Classification comes from `membership`; the scores only drive ordering
/// and are echoed in the result. Flagged pillars without a score entry are
/// not reported.
#[must_use]
pub fn relevant_tips_by_membership(
    catalog: &TipCatalog,
    scores: &[PillarScore],
    membership: &PillarMembership,
    filter: TipFilter,
) -> Vec<ClassificationResult> {
    aggregate(catalog, scores, filter, |entry| {
        membership.classify(&entry.pillar)
    })
}

fn aggregate<F>(
    catalog: &TipCatalog,
    scores: &[PillarScore],
    filter: TipFilter,
    classify: F,
) -> Vec<ClassificationResult>
where
    F: Fn(&PillarScore) -> Option<TipContext>,
{
    let mut strengths = Vec::new();
    let mut growth = Vec::new();

    for entry in scores {
        let Some(context) = classify(entry).filter(|context| filter.includes(*context)) else {
            continue;
        };
        let Some((pillar, catalog_entry)) = entry
            .resolve()
            .and_then(|pillar| catalog.entry(pillar).map(|e| (pillar, e)))
        else {
            trace!(pillar = %entry.pillar, "No catalog content for pillar, skipping");
            continue;
        };

        let result = ClassificationResult::from_entry(pillar, catalog_entry, entry.score, context);
        match context {
            TipContext::Strength => strengths.push(result),
            TipContext::Growth => growth.push(result),
        }
    }

    strengths.sort_by(|a, b| b.score.total_cmp(&a.score));
    growth.sort_by(|a, b| a.score.total_cmp(&b.score));

    strengths.extend(growth);
    strengths
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::thresholds::Thresholds;
    use crate::tip_catalog::TipBundle;
    use std::collections::BTreeMap;

    fn catalog() -> TipCatalog {
        let tips = Pillar::ALL
            .into_iter()
            .map(|pillar| {
                let name = pillar.as_str();
                (
                    pillar,
                    TipCatalogEntry {
                        name: pillar.default_display_name().to_owned(),
                        strength_tips: TipBundle {
                            practice: format!("{name}.strength.practice"),
                            game_day: format!("{name}.strength.game_day"),
                        },
                        growth_tips: TipBundle {
                            practice: format!("{name}.growth.practice"),
                            game_day: format!("{name}.growth.game_day"),
                        },
                    },
                )
            })
            .collect::<BTreeMap<_, _>>();
        TipCatalog::new(tips, Thresholds::default()).unwrap()
    }

    fn pillars(results: &[ClassificationResult]) -> Vec<Pillar> {
        results.iter().map(|r| r.pillar).collect()
    }

    #[test]
    fn test_filter_includes() {
        assert!(TipFilter::All.includes(TipContext::Growth));
        assert!(TipFilter::Strengths.includes(TipContext::Strength));
        assert!(!TipFilter::Strengths.includes(TipContext::Growth));
        assert!(!TipFilter::Growth.includes(TipContext::Strength));
    }

    #[test]
    fn test_all_lists_strengths_before_growth() {
        let scores = [
            PillarScore::new("focus", 2.0),
            PillarScore::new("confidence", 6.0),
            PillarScore::new("imagery", 3.0),
            PillarScore::new("resilience", 6.8),
        ];
        let results = relevant_tips(&catalog(), &scores, TipFilter::All);
        assert_eq!(
            pillars(&results),
            vec![
                Pillar::Resilience,
                Pillar::Confidence,
                Pillar::Focus,
                Pillar::Imagery
            ]
        );
    }

    #[test]
    fn test_equal_scores_keep_input_order() {
        let scores = [
            PillarScore::new("motivation", 6.0),
            PillarScore::new("confidence", 6.0),
        ];
        let results = relevant_tips(&catalog(), &scores, TipFilter::Strengths);
        assert_eq!(
            pillars(&results),
            vec![Pillar::Motivation, Pillar::Confidence]
        );
    }

    #[test]
    fn test_membership_overrides_thresholds_but_sorts_by_score() {
        let membership = PillarMembership::new(
            Some(vec!["mindfulness".to_owned(), "focus".to_owned()]),
            Some(vec!["confidence".to_owned()]),
        );
        let scores = [
            PillarScore::new("mindfulness", 4.5),
            PillarScore::new("focus", 5.0),
            PillarScore::new("confidence", 6.5),
            PillarScore::new("imagery", 1.0),
        ];
        let results = relevant_tips_by_membership(&catalog(), &scores, &membership, TipFilter::All);

        assert_eq!(
            pillars(&results),
            vec![Pillar::Focus, Pillar::Mindfulness, Pillar::Confidence]
        );
        assert_eq!(results[2].context, TipContext::Growth);
        assert_eq!(results[2].practice_tip, "confidence.growth.practice");
    }

    #[test]
    fn test_missing_catalog_entry_is_skipped() {
        let mut tips = BTreeMap::new();
        tips.insert(
            Pillar::Confidence,
            TipCatalogEntry {
                name: "Confidence".to_owned(),
                strength_tips: TipBundle {
                    practice: "p".to_owned(),
                    game_day: "g".to_owned(),
                },
                growth_tips: TipBundle {
                    practice: "p".to_owned(),
                    game_day: "g".to_owned(),
                },
            },
        );
        let sparse = TipCatalog::new(tips, Thresholds::default()).unwrap();
        let scores = [
            PillarScore::new("confidence", 6.0),
            PillarScore::new("focus", 6.0),
        ];
        let results = relevant_tips(&sparse, &scores, TipFilter::All);
        assert_eq!(pillars(&results), vec![Pillar::Confidence]);
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!("strengths".parse::<TipFilter>(), Ok(TipFilter::Strengths));
        assert_eq!("growth".parse::<TipFilter>(), Ok(TipFilter::Growth));
        assert_eq!("all".parse::<TipFilter>(), Ok(TipFilter::All));
        assert!("best".parse::<TipFilter>().is_err());
    }
}
