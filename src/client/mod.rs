// ABOUTME: REST API client module for the CTLST backend
// ABOUTME: Authentication, assessment, coaching tip, and notification preference endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CTLST Labs

/// Typed `reqwest` client for the CTLST REST API
pub mod api_client;

pub use api_client::{ApiClient, LoginRequest, LoginResponse};
