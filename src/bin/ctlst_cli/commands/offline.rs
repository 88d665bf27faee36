// ABOUTME: Offline ctlst-cli commands operating on local JSON files
// ABOUTME: Single-score classification and catalog-driven tip selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CTLST Labs

use crate::helpers::output::print_json;
use ctlst_labs::coaching::select_tips;
use ctlst_labs::errors::{AppError, AppResult};
use ctlst_labs::intelligence::tip_catalog::IngestPolicy;
use ctlst_labs::intelligence::{
    classify_by_threshold, PillarMembership, Thresholds, TipCatalog, TipContext, TipFilter,
};
use ctlst_labs::models::PillarScore;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::info;

#[derive(Serialize)]
struct ClassifyOutput {
    score: f64,
    thresholds: Thresholds,
    context: Option<TipContext>,
}

/// Score file: a bare list, or an assessment-shaped object
#[derive(Deserialize)]
#[serde(untagged)]
enum ScoresFile {
    List(Vec<PillarScore>),
    Assessment {
        scores: Vec<PillarScore>,
        #[serde(default)]
        strengths: Option<Vec<String>>,
        #[serde(default)]
        growth_areas: Option<Vec<String>>,
    },
}

impl ScoresFile {
    fn into_parts(self) -> (Vec<PillarScore>, Option<PillarMembership>) {
        match self {
            Self::List(scores) => (scores, None),
            Self::Assessment {
                scores,
                strengths,
                growth_areas,
            } => {
                let membership = (strengths.is_some() || growth_areas.is_some())
                    .then(|| PillarMembership::new(strengths, growth_areas));
                (scores, membership)
            }
        }
    }
}

pub fn classify(score: f64, strength: f64, growth: f64) -> AppResult<()> {
    let thresholds = Thresholds::new(strength, growth).ok_or_else(|| {
        AppError::invalid_input(format!(
            "growth ({growth}) must be finite and below strength ({strength})"
        ))
    })?;
    print_json(&ClassifyOutput {
        score,
        thresholds,
        context: classify_by_threshold(score, &thresholds),
    })
}

pub async fn tips(
    catalog_path: &Path,
    scores_path: &Path,
    filter: TipFilter,
    strict: bool,
) -> AppResult<()> {
    let policy = if strict {
        IngestPolicy::Strict
    } else {
        IngestPolicy::Lenient
    };
    let catalog = TipCatalog::from_json(&read(catalog_path).await?, policy)?;
    let scores: ScoresFile = serde_json::from_str(&read(scores_path).await?)?;
    let (scores, membership) = scores.into_parts();

    let results = select_tips(&catalog, &scores, membership.as_ref(), filter);
    info!(
        scored = scores.len(),
        selected = results.len(),
        %filter,
        "Tips selected"
    );
    print_json(&results)
}

async fn read(path: &Path) -> AppResult<String> {
    fs::read_to_string(path).await.map_err(|e| {
        AppError::invalid_input(format!("Cannot read {}: {e}", path.display())).with_source(e)
    })
}
