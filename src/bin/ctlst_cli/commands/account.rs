// ABOUTME: Session management commands for ctlst-cli
// ABOUTME: Login, whoami, and logout against the stored file session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CTLST Labs

use crate::helpers::context::CliContext;
use crate::helpers::output::print_json;
use ctlst_labs::errors::AppResult;
use ctlst_labs::models::{Dashboard, User};
use serde::Serialize;
use serde_json::json;

#[derive(Serialize)]
struct SessionOutput<'a> {
    authenticated: bool,
    user: Option<&'a User>,
    dashboard: Option<Dashboard>,
}

pub async fn login(email: &str, password: &str) -> AppResult<()> {
    let mut ctx = CliContext::load().await?;
    let user = ctx.session.login(&ctx.client, email, password).await?;
    print_json(&SessionOutput {
        authenticated: true,
        user: Some(user),
        dashboard: Some(user.role.dashboard()),
    })
}

pub async fn whoami(verify: bool) -> AppResult<()> {
    let mut ctx = CliContext::load().await?;
    if verify {
        ctx.session.validate(&ctx.client).await?;
    }
    print_json(&SessionOutput {
        authenticated: ctx.session.is_authenticated(),
        user: ctx.session.user(),
        dashboard: ctx.session.dashboard(),
    })
}

pub async fn logout() -> AppResult<()> {
    let mut ctx = CliContext::load().await?;
    let previous = ctx.session.teardown().await?;
    print_json(&json!({
        "logged_out": previous.is_some(),
        "user_id": previous.map(|user| user.id),
    }))
}
