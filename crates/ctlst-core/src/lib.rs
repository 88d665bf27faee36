// ABOUTME: Core types and constants for the CTLST Labs coaching platform
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CTLST Labs

#![deny(unsafe_code)]

//! # CTLST Core
//!
//! Foundation crate providing shared types and constants for the CTLST Labs
//! sports-psychology platform. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Cache lifetimes, environment variable names, and defaults
//! - **models**: Pillars, assessment results, users, and notification preferences

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Pillar, `PillarScore`, User, `AssessmentResult`, etc.)
pub mod models;
