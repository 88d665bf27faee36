// ABOUTME: Shared helpers for ctlst-cli commands
// ABOUTME: JSON output and environment-backed client setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CTLST Labs

pub mod context;
pub mod output;
