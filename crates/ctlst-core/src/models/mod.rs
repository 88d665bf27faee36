// ABOUTME: Core data models for the CTLST Labs coaching platform
// ABOUTME: Re-exports Pillar, PillarScore, User, AssessmentResult and preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CTLST Labs

//! # Data Models
//!
//! Shapes exchanged with the CTLST REST API. Pillar identifiers are the one
//! place where raw strings meet the typed domain: [`PillarScore`] keeps the
//! wire identifier and [`Pillar`] is the closed enumeration it resolves to.

mod assessment;
mod notification;
mod pillar;
mod user;

pub use assessment::{AssessmentResult, RadarAxis, NOMINAL_MAX_SCORE};
pub use notification::NotificationPreferences;
pub use pillar::{Pillar, PillarScore, UnknownPillar};
pub use user::{Dashboard, User, UserRole};
