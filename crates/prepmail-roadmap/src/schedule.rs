// SPDX-FileCopyrightText: 2026 Blufio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Schedule derivation: target date, day span, and granularity mode.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::dates::extract_date;

/// Roadmap granularity. Day-wise steps when there is runway, hour-wise
/// when the interview is imminent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Granularity {
    Day,
    Hour,
}

/// Scheduling context derived from one email's text, relative to a fixed
/// "today". Pure value; computed fresh per request and never persisted.
///
/// Invariants: `total_days >= 1` (clamped), and `mode` is [`Granularity::Day`]
/// exactly when `total_days >= 3`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleContext {
    pub start_date: NaiveDate,
    pub target_date: NaiveDate,
    pub total_days: i64,
    pub mode: Granularity,
}

impl ScheduleContext {
    /// Derives the schedule for an email relative to `today`.
    ///
    /// When no date is found in the text, the target falls back to
    /// tomorrow. A past or same-day target clamps the span to 1, so the
    /// locally computed schedule never reflects "already happened" -- the
    /// completed-interview branch is decided by the model's own date
    /// reasoning, not here.
    pub fn derive(text: &str, today: NaiveDate) -> Self {
        let target_date = extract_date(text).unwrap_or_else(|| today + Days::new(1));
        Self::from_target(today, target_date)
    }

    /// Builds the context from an explicit target date, clamping the day
    /// span and deriving the granularity mode from it.
    pub fn from_target(today: NaiveDate, target_date: NaiveDate) -> Self {
        let mut total_days = (target_date - today).num_days();
        if total_days <= 0 {
            total_days = 1;
        }
        let mode = if total_days >= 3 {
            Granularity::Day
        } else {
            Granularity::Hour
        };
        Self {
            start_date: today,
            target_date,
            total_days,
            mode,
        }
    }
}
