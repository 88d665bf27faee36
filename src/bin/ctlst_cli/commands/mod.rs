// ABOUTME: Command modules for ctlst-cli
// ABOUTME: Offline classification, account session management, and online coaching tips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CTLST Labs

pub mod account;
pub mod coaching;
pub mod offline;
