// SPDX-FileCopyrightText: 2026 Blufio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model reply parsing and normalization.
//!
//! Decodes the sanitized model output structurally by its `status` tag
//! (interview_completed vs active) and normalizes both shapes into one
//! [`RoadmapResult`], substituting an informational placeholder when the
//! model omits or empties the roadmap body.

use chrono::NaiveDate;
use prepmail_core::PrepmailError;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::schedule::{Granularity, ScheduleContext};

/// Informational note substituted when the model returns no roadmap steps.
pub const PLACEHOLDER_NOTE: &str = "No roadmap could be generated from this email.";

/// One step of an active roadmap, as the model emits it.
///
/// Every field defaults: the model under-fills far more often than it
/// over-fills. `sequence_no` is advisory and not verified monotonic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapStep {
    #[serde(default)]
    pub sequence_no: u32,
    #[serde(default)]
    pub time_slot: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tasks: Vec<String>,
}

/// The model's reply, decoded structurally by its `status` tag.
///
/// A missing or unrecognized `status` is a parse failure, not a variant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "status")]
pub enum ModelReply {
    /// The interview or drive date has already passed.
    #[serde(rename = "interview_completed")]
    Completed {
        #[serde(default)]
        company: String,
        #[serde(default)]
        job_role: String,
        #[serde(default)]
        message: String,
        #[serde(default)]
        recommended_actions: Vec<String>,
    },
    /// The interview is still ahead; the model proposes a schedule.
    #[serde(rename = "active")]
    Active {
        #[serde(default)]
        company: String,
        #[serde(default)]
        job_role: String,
        #[serde(default)]
        mode: Option<String>,
        #[serde(default)]
        target_date: Option<String>,
        #[serde(default)]
        roadmap: Vec<RoadmapStep>,
    },
}

/// The roadmap payload of a [`RoadmapResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoadmapBody {
    /// Steps to work through before the target date.
    Active { steps: Vec<RoadmapStep> },
    /// The interview already happened; follow-up actions instead of steps.
    Completed {
        message: String,
        recommended_actions: Vec<String>,
    },
    /// The model produced no usable steps.
    Placeholder { note: String },
}

/// Validated, normalized output of one roadmap request. The only value
/// returned to callers; carries no identity and is never persisted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapResult {
    pub mode: Granularity,
    pub start_date: NaiveDate,
    pub target_date: NaiveDate,
    pub total_days: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_role: Option<String>,
    pub roadmap: RoadmapBody,
}

/// Parses the sanitized payload candidate into a [`ModelReply`].
///
/// Blank input is [`PrepmailError::EmptyModelResponse`]; anything that
/// fails the structural decode is [`PrepmailError::InvalidModelJson`]
/// carrying the offending text verbatim. Neither is retried.
pub fn parse_reply(candidate: &str) -> Result<ModelReply, PrepmailError> {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return Err(PrepmailError::EmptyModelResponse);
    }

    serde_json::from_str(trimmed).map_err(|e| PrepmailError::InvalidModelJson {
        reason: e.to_string(),
        raw: candidate.to_string(),
    })
}

/// Normalizes a decoded reply into the caller-facing [`RoadmapResult`].
///
/// The locally derived [`ScheduleContext`] is advisory: the model saw the
/// full email and was instructed to pick the latest labeled interview
/// date, so its `status` decides the completed/active branch, and in the
/// active branch its `target_date`/`mode` override the local values when
/// they parse (with the day span recomputed and re-clamped). Unparseable
/// overrides are logged and fall back to the local values. `start_date`
/// is always the local one.
pub fn normalize(reply: ModelReply, ctx: &ScheduleContext) -> RoadmapResult {
    match reply {
        ModelReply::Completed {
            company,
            job_role,
            message,
            recommended_actions,
        } => RoadmapResult {
            mode: ctx.mode,
            start_date: ctx.start_date,
            target_date: ctx.target_date,
            total_days: ctx.total_days,
            company: non_empty(company),
            job_role: non_empty(job_role),
            roadmap: RoadmapBody::Completed {
                message,
                recommended_actions,
            },
        },
        ModelReply::Active {
            company,
            job_role,
            mode,
            target_date,
            roadmap,
        } => {
            let schedule = apply_model_overrides(ctx, mode.as_deref(), target_date.as_deref());
            let body = if roadmap.is_empty() {
                RoadmapBody::Placeholder {
                    note: PLACEHOLDER_NOTE.to_string(),
                }
            } else {
                RoadmapBody::Active { steps: roadmap }
            };

            RoadmapResult {
                mode: schedule.mode,
                start_date: schedule.start_date,
                target_date: schedule.target_date,
                total_days: schedule.total_days,
                company: non_empty(company),
                job_role: non_empty(job_role),
                roadmap: body,
            }
        }
    }
}

/// Applies the model's `target_date`/`mode` over the local schedule.
///
/// A parseable target date rebuilds the span and mode from scratch; a
/// parseable mode then wins over the rebuilt one. Empty strings count as
/// absent.
fn apply_model_overrides(
    ctx: &ScheduleContext,
    mode: Option<&str>,
    target_date: Option<&str>,
) -> ScheduleContext {
    let mut out = ctx.clone();

    if let Some(raw) = target_date
        && !raw.is_empty()
    {
        match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => out = ScheduleContext::from_target(ctx.start_date, date),
            Err(e) => {
                warn!(target_date = raw, error = %e, "model returned unparseable target_date, keeping local value");
            }
        }
    }

    if let Some(raw) = mode
        && !raw.is_empty()
    {
        match raw.parse::<Granularity>() {
            Ok(m) => out.mode = m,
            Err(_) => {
                warn!(mode = raw, "model returned unknown mode, keeping derived value");
            }
        }
    }

    out
}

/// Trims and lifts a model string field into `Some` only when non-empty.
fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
