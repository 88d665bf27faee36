// ABOUTME: Explicit session lifecycle: hydrate from storage, login, validate, teardown
// ABOUTME: Pluggable session storage with file-backed and in-memory implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CTLST Labs

//! Session lifecycle
//!
//! A [`Session`] owns the bearer token and the authenticated [`User`]. It is
//! created by [`Session::hydrate`], changed only by [`Session::login`],
//! [`Session::validate`] and [`Session::teardown`], and every change is
//! written through to its [`SessionStore`].

use crate::client::{ApiClient, LoginResponse};
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::{Dashboard, User};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// What gets persisted between runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    /// Bearer token
    pub token: String,
    /// User the token belongs to
    pub user: User,
    /// When the session was established
    pub created_at: DateTime<Utc>,
}

impl From<LoginResponse> for StoredSession {
    fn from(response: LoginResponse) -> Self {
        Self {
            token: response.token,
            user: response.user,
            created_at: Utc::now(),
        }
    }
}

/// Persistent storage for a single session
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read the stored session, `None` when nothing usable is stored
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read
    async fn load(&self) -> AppResult<Option<StoredSession>>;

    /// Persist `session`, replacing anything stored
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be written
    async fn save(&self, session: &StoredSession) -> AppResult<()>;

    /// Remove the stored session; clearing empty storage is not an error
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be modified
    async fn clear(&self) -> AppResult<()>;
}

/// JSON file session storage
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store at `path`; parent directories are created on first save
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File backing this store
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> AppResult<Option<StoredSession>> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::storage(format!(
                    "Cannot read session file {}: {e}",
                    self.path.display()
                ))
                .with_source(e))
            }
        };

        // A corrupt file means the user has to log in again, not a hard failure
        match serde_json::from_str(&contents) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring unreadable session file");
                Ok(None)
            }
        }
    }

    async fn save(&self, session: &StoredSession) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let payload = serde_json::to_vec_pretty(session)?;
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, payload).await?;
        fs::rename(&staging, &self.path).await?;
        debug!(path = %self.path.display(), "Session saved");
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Process-local session storage
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    inner: Arc<Mutex<Option<StoredSession>>>,
}

impl MemorySessionStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `session`
    #[must_use]
    pub fn with_session(session: StoredSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Some(session))),
        }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> AppResult<Option<StoredSession>> {
        Ok(self.inner.lock().await.clone())
    }

    async fn save(&self, session: &StoredSession) -> AppResult<()> {
        *self.inner.lock().await = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        self.inner.lock().await.take();
        Ok(())
    }
}

/// Authenticated (or anonymous) session bound to a store
#[derive(Debug)]
pub struct Session<S: SessionStore> {
    store: S,
    current: Option<StoredSession>,
}

impl<S: SessionStore> Session<S> {
    /// Restore whatever the store holds
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub async fn hydrate(store: S) -> AppResult<Self> {
        let current = store.load().await?;
        let user_id = current.as_ref().map(|s| s.user.id.to_string());
        AppLogger::log_auth_event(user_id.as_deref(), "hydrate", current.is_some());
        Ok(Self { store, current })
    }

    /// Log in with credentials and persist the new session
    ///
    /// A failed login leaves any existing session untouched.
    ///
    /// # Errors
    ///
    /// Returns the API error for rejected credentials, or a storage error
    pub async fn login(
        &mut self,
        client: &ApiClient,
        email: &str,
        password: &str,
    ) -> AppResult<&User> {
        let response = match client.login(email, password).await {
            Ok(response) => response,
            Err(e) => {
                AppLogger::log_auth_event(None, "login", false);
                return Err(e);
            }
        };
        self.establish(response.into()).await
    }

    /// Replace the current session with `session` and persist it
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written
    pub async fn establish(&mut self, session: StoredSession) -> AppResult<&User> {
        self.store.save(&session).await?;
        AppLogger::log_auth_event(Some(&session.user.id.to_string()), "login", true);
        Ok(&self.current.insert(session).user)
    }

    /// Check the stored token against the API and refresh the cached user
    ///
    /// Returns `false` and tears the session down when the API rejects the
    /// token. Other failures leave the session in place.
    ///
    /// # Errors
    ///
    /// Returns an error for failures unrelated to the token, such as an
    /// unreachable API
    pub async fn validate(&mut self, client: &ApiClient) -> AppResult<bool> {
        let Some(token) = self.token().map(str::to_owned) else {
            return Ok(false);
        };
        let authorized = client.clone().with_token(token);

        match authorized.current_user().await {
            Ok(user) => {
                if let Some(current) = self.current.as_mut() {
                    if current.user != user {
                        current.user = user;
                        self.store.save(current).await?;
                    }
                }
                Ok(true)
            }
            Err(e) if e.code.requires_reauthentication() => {
                warn!(error = %e, "Stored token rejected, ending session");
                self.teardown().await?;
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// End the session: clear storage and in-memory state
    ///
    /// Returns the user that was logged out so callers can drop per-user
    /// caches.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be cleared; in-memory state is
    /// cleared regardless
    pub async fn teardown(&mut self) -> AppResult<Option<User>> {
        let previous = self.current.take().map(|s| s.user);
        self.store.clear().await?;
        let user_id = previous.as_ref().map(|u| u.id.to_string());
        AppLogger::log_auth_event(user_id.as_deref(), "teardown", true);
        Ok(previous)
    }

    /// Whether a token is held
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Authenticated user
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.current.as_ref().map(|s| &s.user)
    }

    /// Bearer token
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.token.as_str())
    }

    /// Dashboard the user lands on, `None` when anonymous
    #[must_use]
    pub fn dashboard(&self) -> Option<Dashboard> {
        self.user().map(|user| user.role.dashboard())
    }

    /// `client` carrying this session's token
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::ErrorCode::AuthRequired`] when anonymous
    pub fn authorize(&self, client: ApiClient) -> AppResult<ApiClient> {
        self.token()
            .map(|token| client.with_token(token))
            .ok_or_else(AppError::auth_required)
    }

    /// Underlying store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}
