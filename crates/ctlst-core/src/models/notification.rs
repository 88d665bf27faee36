// ABOUTME: Push notification preference model synced with the CTLST API
// ABOUTME: Validated locally before being sent back to the server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CTLST Labs

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Per-user push notification preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    /// Master switch for push notifications
    pub push_enabled: bool,
    /// Daily journaling reminder
    #[serde(default)]
    pub journal_reminders: bool,
    /// Training module reminders
    #[serde(default)]
    pub training_reminders: bool,
    /// New coaching tip announcements
    #[serde(default)]
    pub coaching_tips: bool,
    /// Local time of day for reminders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_time: Option<NaiveTime>,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            push_enabled: false,
            journal_reminders: false,
            training_reminders: false,
            coaching_tips: true,
            reminder_time: None,
        }
    }
}

impl NotificationPreferences {
    /// Whether any reminder category is switched on
    #[must_use]
    pub const fn has_reminders(&self) -> bool {
        self.journal_reminders || self.training_reminders
    }

    /// Check the preferences are consistent before saving
    ///
    /// # Errors
    ///
    /// Returns an error if reminders are enabled without a reminder time
    pub fn validate(&self) -> AppResult<()> {
        if self.push_enabled && self.has_reminders() && self.reminder_time.is_none() {
            return Err(AppError::invalid_input(
                "reminder_time is required when reminders are enabled",
            ));
        }
        Ok(())
    }
}
