// ABOUTME: Configuration module for the CTLST client
// ABOUTME: Environment-variable driven settings for the API, cache, and session storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CTLST Labs

//! Client configuration
//!
//! - **Environment**: API location, timeouts, cache lifetimes, session path,
//!   and tip catalog ingestion policy, all read from environment variables

/// Environment and client configuration
pub mod environment;

pub use environment::{default_session_path, ApiConfig, ClientConfig, Environment};
