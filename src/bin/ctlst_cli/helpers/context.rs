// ABOUTME: Environment-backed setup shared by the online ctlst-cli commands
// ABOUTME: Loads configuration, hydrates the file session, and builds the API client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CTLST Labs

use ctlst_labs::client::ApiClient;
use ctlst_labs::config::ClientConfig;
use ctlst_labs::errors::AppResult;
use ctlst_labs::session::{FileSessionStore, Session};

/// Everything an online command needs
pub struct CliContext {
    pub config: ClientConfig,
    pub client: ApiClient,
    pub session: Session<FileSessionStore>,
}

impl CliContext {
    /// Load configuration from the environment and hydrate the stored session
    pub async fn load() -> AppResult<Self> {
        let config = ClientConfig::from_env()?;
        let client = ApiClient::new(&config.api)?;
        let session = Session::hydrate(FileSessionStore::new(&config.session_path)).await?;
        Ok(Self {
            config,
            client,
            session,
        })
    }
}
