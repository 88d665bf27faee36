// ABOUTME: Online coaching tips command for ctlst-cli
// ABOUTME: Fetches catalog and latest assessment for the stored session user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CTLST Labs

use crate::helpers::context::CliContext;
use crate::helpers::output::print_json;
use ctlst_labs::cache::{memory::InMemoryCache, CacheProvider};
use ctlst_labs::coaching::CoachingTipsService;
use ctlst_labs::errors::{AppError, AppResult};
use ctlst_labs::intelligence::TipFilter;
use serde_json::json;
use tracing::warn;

pub async fn fetch_tips(filter: TipFilter) -> AppResult<()> {
    let mut ctx = CliContext::load().await?;
    let user_id = ctx.session.user().map(|user| user.id).ok_or_else(|| {
        AppError::auth_required().with_details(json!({ "hint": "run `ctlst-cli login` first" }))
    })?;

    let client = ctx.session.authorize(ctx.client.clone())?;
    let mut cache_config = ctx.config.cache.clone();
    cache_config.enable_background_cleanup = false;
    let cache = InMemoryCache::new(cache_config).await?;
    let service = CoachingTipsService::from_config(&ctx.config, client, cache);

    match service.tips_for_user(user_id, filter).await {
        Ok(tips) => print_json(&tips),
        Err(e) if e.code.requires_reauthentication() => {
            warn!("Stored session rejected by the API, logging out");
            ctx.session.teardown().await?;
            Err(e)
        }
        Err(e) => Err(e),
    }
}
