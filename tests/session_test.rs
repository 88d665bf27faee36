// ABOUTME: Integration tests for the session lifecycle and session storage backends
// ABOUTME: File persistence, hydrate after restart, login, validation, and teardown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CTLST Labs

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use chrono::Utc;
use ctlst_labs::errors::ErrorCode;
use ctlst_labs::models::{Dashboard, UserRole};
use ctlst_labs::session::{
    FileSessionStore, MemorySessionStore, Session, SessionStore, StoredSession,
};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn stored(role: UserRole) -> StoredSession {
    StoredSession {
        token: "tok-stored".to_owned(),
        user: common::test_user(role),
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_file_store_round_trip_and_clear() -> Result<()> {
    let dir = TempDir::new()?;
    let store = FileSessionStore::new(dir.path().join("nested").join("session.json"));
    assert_eq!(store.load().await?, None);

    let session = stored(UserRole::Athlete);
    store.save(&session).await?;
    assert_eq!(store.load().await?, Some(session));

    store.clear().await?;
    assert_eq!(store.load().await?, None);
    // Clearing twice is fine
    store.clear().await?;
    Ok(())
}

#[tokio::test]
async fn test_corrupt_session_file_is_treated_as_logged_out() -> Result<()> {
    let dir = TempDir::new()?;
    let file = dir.path().join("session.json");
    tokio::fs::write(&file, b"{not json").await?;

    let session = Session::hydrate(FileSessionStore::new(&file)).await?;
    assert!(!session.is_authenticated());
    Ok(())
}

#[tokio::test]
async fn test_hydrate_survives_restart() -> Result<()> {
    let dir = TempDir::new()?;
    let file = dir.path().join("session.json");
    let original = stored(UserRole::SuperAdmin);
    FileSessionStore::new(&file).save(&original).await?;

    let session = Session::hydrate(FileSessionStore::new(&file)).await?;
    assert_eq!(session.token(), Some("tok-stored"));
    assert_eq!(session.user(), Some(&original.user));
    assert_eq!(session.dashboard(), Some(Dashboard::Admin));
    Ok(())
}

#[tokio::test]
async fn test_login_persists_session() -> Result<()> {
    let server = MockServer::start().await;
    let user = common::test_user(UserRole::Athlete);
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"token": "tok-new", "user": user})),
        )
        .mount(&server)
        .await;

    let store = MemorySessionStore::new();
    let mut session = Session::hydrate(store.clone()).await?;
    let client = common::test_client(&server.uri())?;

    let logged_in = session.login(&client, "riley@example.com", "pw").await?;
    assert_eq!(logged_in.id, user.id);
    assert_eq!(session.dashboard(), Some(Dashboard::Athlete));

    let persisted = store.load().await?.unwrap();
    assert_eq!(persisted.token, "tok-new");
    Ok(())
}

#[tokio::test]
async fn test_failed_login_keeps_existing_session() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let store = MemorySessionStore::with_session(stored(UserRole::Athlete));
    let mut session = Session::hydrate(store.clone()).await?;
    let client = common::test_client(&server.uri())?;

    let error = session.login(&client, "riley@example.com", "bad").await.unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthInvalid);
    assert_eq!(session.token(), Some("tok-stored"));
    assert!(store.load().await?.is_some());
    Ok(())
}

#[tokio::test]
async fn test_validate_tears_down_rejected_token() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .and(header("authorization", "Bearer tok-stored"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let store = MemorySessionStore::with_session(stored(UserRole::Athlete));
    let mut session = Session::hydrate(store.clone()).await?;
    let client = common::test_client(&server.uri())?;

    assert!(!session.validate(&client).await?);
    assert!(!session.is_authenticated());
    assert!(store.load().await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_validate_refreshes_user() -> Result<()> {
    let server = MockServer::start().await;
    let original = stored(UserRole::Athlete);
    let mut promoted = original.user.clone();
    promoted.role = UserRole::OrgAdmin;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&promoted))
        .mount(&server)
        .await;

    let store = MemorySessionStore::with_session(original);
    let mut session = Session::hydrate(store.clone()).await?;
    let client = common::test_client(&server.uri())?;

    assert!(session.validate(&client).await?);
    assert_eq!(session.dashboard(), Some(Dashboard::Organization));
    assert_eq!(store.load().await?.unwrap().user.role, UserRole::OrgAdmin);
    Ok(())
}

#[tokio::test]
async fn test_validate_keeps_session_when_api_is_down() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let mut session =
        Session::hydrate(MemorySessionStore::with_session(stored(UserRole::Athlete))).await?;
    let client = common::test_client(&server.uri())?;

    let error = session.validate(&client).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert!(session.is_authenticated());
    Ok(())
}

#[tokio::test]
async fn test_authorize_requires_session() -> Result<()> {
    let session = Session::hydrate(MemorySessionStore::new()).await?;
    let client = common::test_client("http://localhost:8000")?;
    let error = session.authorize(client).unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthRequired);
    Ok(())
}
