// ABOUTME: Coaching tips service tying the API client, cache, and relevance engine together
// ABOUTME: Fetches and caches the tip catalog and assessments, then selects tips per user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CTLST Labs

//! Coaching tips service
//!
//! The catalog is fetched once, ingested under the configured
//! [`IngestPolicy`], and cached for the catalog TTL. Assessments are cached
//! per user for the shorter assessment TTL.

use crate::cache::{CacheKey, CacheProvider, CacheResource, CacheTtlConfig};
use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{AssessmentResult, PillarScore};
use ctlst_intelligence::tip_catalog::IngestPolicy;
use ctlst_intelligence::{
    relevant_tips, relevant_tips_by_membership, ClassificationResult, PillarMembership,
    TipCatalog, TipFilter,
};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Select tips for a score set, preferring server-computed membership
///
/// When `membership` is given it decides strength / growth for each scored
/// pillar and the catalog thresholds are not consulted.
#[must_use]
pub fn select_tips(
    catalog: &TipCatalog,
    scores: &[PillarScore],
    membership: Option<&PillarMembership>,
    filter: TipFilter,
) -> Vec<ClassificationResult> {
    match membership {
        Some(membership) => relevant_tips_by_membership(catalog, scores, membership, filter),
        None => relevant_tips(catalog, scores, filter),
    }
}

/// Membership lists carried by an assessment, if the server computed any
#[must_use]
pub fn assessment_membership(assessment: &AssessmentResult) -> Option<PillarMembership> {
    assessment.has_membership().then(|| {
        PillarMembership::new(
            assessment.strengths.clone(),
            assessment.growth_areas.clone(),
        )
    })
}

/// Coaching tips for an authenticated user
#[derive(Clone)]
pub struct CoachingTipsService<C: CacheProvider> {
    client: ApiClient,
    cache: C,
    ttl: CacheTtlConfig,
    policy: IngestPolicy,
}

impl<C: CacheProvider> CoachingTipsService<C> {
    /// Create a service; `client` must already carry a token
    #[must_use]
    pub const fn new(
        client: ApiClient,
        cache: C,
        ttl: CacheTtlConfig,
        policy: IngestPolicy,
    ) -> Self {
        Self {
            client,
            cache,
            ttl,
            policy,
        }
    }

    /// Create a service with TTLs and ingestion policy from `config`
    #[must_use]
    pub fn from_config(config: &ClientConfig, client: ApiClient, cache: C) -> Self {
        Self::new(client, cache, config.cache.ttl.clone(), config.catalog_policy)
    }

    /// Cached tip catalog, fetched and ingested on a miss
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails, ingestion rejects the payload, or
    /// the cache cannot be read or written
    pub async fn catalog(&self) -> AppResult<Arc<TipCatalog>> {
        let key = CacheKey::tip_catalog();
        if let Some(catalog) = self.cache.get::<TipCatalog>(&key).await? {
            debug!("Tip catalog cache hit");
            return Ok(Arc::new(catalog));
        }
        self.fetch_catalog(&key).await
    }

    /// Drop the cached catalog and fetch a fresh one
    ///
    /// # Errors
    ///
    /// Same as [`Self::catalog`]
    pub async fn refresh_catalog(&self) -> AppResult<Arc<TipCatalog>> {
        let key = CacheKey::tip_catalog();
        self.cache.invalidate(&key).await?;
        self.fetch_catalog(&key).await
    }

    async fn fetch_catalog(&self, key: &CacheKey) -> AppResult<Arc<TipCatalog>> {
        let raw = self.client.tip_catalog().await?;
        let catalog = TipCatalog::from_raw(raw, self.policy)?;
        let ttl = self.ttl.ttl_for_resource(&CacheResource::TipCatalog);
        self.cache.set(key, &catalog, ttl).await?;
        info!(
            pillars = catalog.len(),
            ttl_secs = ttl.as_secs(),
            "Tip catalog fetched and cached"
        );
        Ok(Arc::new(catalog))
    }

    /// Latest assessment for `user_id`, cached per user
    ///
    /// The API only serves the token holder's assessment, so `user_id` must
    /// be the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::ErrorCode::PermissionDenied`] without
    /// caching when the API answers with another user's assessment, or an
    /// error if the fetch fails or the cache cannot be used
    pub async fn latest_assessment(&self, user_id: Uuid) -> AppResult<AssessmentResult> {
        let key = CacheKey::assessment_results(user_id);
        if let Some(assessment) = self.cache.get::<AssessmentResult>(&key).await? {
            return Ok(assessment);
        }
        let assessment = self.client.latest_assessment().await?;
        if assessment.user_id != user_id {
            warn!(
                requested = %user_id,
                owner = %assessment.user_id,
                "Latest assessment belongs to another user, not caching"
            );
            return Err(AppError::permission_denied(format!(
                "latest assessment is not available for user {user_id}"
            )));
        }
        self.cache
            .set(&key, &assessment, self.ttl.ttl_for_resource(&key.resource))
            .await?;
        Ok(assessment)
    }

    /// Tips for a raw score set, classified by the catalog thresholds
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be obtained
    pub async fn tips_for(
        &self,
        scores: &[PillarScore],
        filter: TipFilter,
    ) -> AppResult<Vec<ClassificationResult>> {
        let catalog = self.catalog().await?;
        Ok(relevant_tips(&catalog, scores, filter))
    }

    /// Tips for an assessment, using its membership lists when present
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be obtained
    pub async fn tips_for_assessment(
        &self,
        assessment: &AssessmentResult,
        filter: TipFilter,
    ) -> AppResult<Vec<ClassificationResult>> {
        let catalog = self.catalog().await?;
        let membership = assessment_membership(assessment);
        Ok(select_tips(
            &catalog,
            &assessment.scores,
            membership.as_ref(),
            filter,
        ))
    }

    /// Tips for the user's latest assessment
    ///
    /// # Errors
    ///
    /// Returns an error if the assessment or catalog cannot be obtained
    pub async fn tips_for_user(
        &self,
        user_id: Uuid,
        filter: TipFilter,
    ) -> AppResult<Vec<ClassificationResult>> {
        let assessment = self.latest_assessment(user_id).await?;
        self.tips_for_assessment(&assessment, filter).await
    }

    /// Drop every cached entry owned by `user_id`
    ///
    /// # Errors
    ///
    /// Returns an error if the cache rejects the invalidation
    pub async fn forget_user(&self, user_id: Uuid) -> AppResult<u64> {
        self.cache
            .invalidate_pattern(&CacheKey::user_pattern(user_id))
            .await
    }

    /// Underlying cache
    #[must_use]
    pub const fn cache(&self) -> &C {
        &self.cache
    }
}
