// ABOUTME: CTLST CLI - command-line access to classification, coaching tips, and sessions
// ABOUTME: Offline commands work on local JSON files; online commands use the stored session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CTLST Labs
//!
//! Usage:
//! ```bash
//! # Classify one score against explicit thresholds
//! ctlst-cli classify --score 5.5 --strength 5.5 --growth 3.5
//!
//! # Tips from a local catalog and score file
//! ctlst-cli tips --catalog tips.json --scores scores.json --filter growth
//!
//! # Log in, fetch tips for the latest assessment, log out
//! ctlst-cli login --email athlete@example.com --password secret
//! ctlst-cli fetch-tips --filter all
//! ctlst-cli logout
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use ctlst_labs::errors::AppResult;
use ctlst_labs::intelligence::TipFilter;
use ctlst_labs::logging::LoggingConfig;
use std::path::PathBuf;
use tracing::debug;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "ctlst-cli",
    about = "CTLST Labs coaching tips CLI",
    long_about = "Classify pillar scores and select coaching tips, locally or against the CTLST API. Output is JSON on stdout."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Classify a single score as strength, growth area, or neither
    Classify {
        /// Pillar score
        #[arg(long, allow_negative_numbers = true)]
        score: f64,

        /// Strength cutoff (inclusive)
        #[arg(long, default_value = "5.5")]
        strength: f64,

        /// Growth cutoff (inclusive)
        #[arg(long, default_value = "3.5")]
        growth: f64,
    },

    /// Select tips from a local catalog file and score file
    Tips {
        /// Tip catalog JSON as served by the API
        #[arg(long)]
        catalog: PathBuf,

        /// Scores JSON: a list of pillar scores, or an assessment object
        #[arg(long)]
        scores: PathBuf,

        /// strengths, growth, or all
        #[arg(long, default_value = "all")]
        filter: TipFilter,

        /// Fail on unknown pillars in the catalog instead of dropping them
        #[arg(long)]
        strict: bool,
    },

    /// Log in and store the session
    Login {
        /// Account email
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long)]
        password: String,
    },

    /// Show the stored session user and dashboard
    Whoami {
        /// Check the stored token against the API
        #[arg(long)]
        verify: bool,
    },

    /// Tips for the latest assessment of the logged-in user
    FetchTips {
        /// strengths, growth, or all
        #[arg(long, default_value = "all")]
        filter: TipFilter,
    },

    /// End the stored session
    Logout,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    if let Err(e) = logging.init() {
        eprintln!("Logging disabled: {e}");
    }
    debug!("CTLST CLI starting");

    match cli.command {
        Command::Classify {
            score,
            strength,
            growth,
        } => commands::offline::classify(score, strength, growth),
        Command::Tips {
            catalog,
            scores,
            filter,
            strict,
        } => commands::offline::tips(&catalog, &scores, filter, strict).await,
        Command::Login { email, password } => commands::account::login(&email, &password).await,
        Command::Whoami { verify } => commands::account::whoami(verify).await,
        Command::FetchTips { filter } => commands::coaching::fetch_tips(filter).await,
        Command::Logout => commands::account::logout().await,
    }
}
