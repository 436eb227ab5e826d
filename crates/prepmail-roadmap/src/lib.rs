// SPDX-FileCopyrightText: 2026 Blufio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Roadmap derivation pipeline for placement-related emails.
//!
//! Given one email's text, the pipeline extracts a target date, derives a
//! schedule and granularity mode, builds a constrained prompt, invokes a
//! [`TextGenerator`], sanitizes the raw output, and parses/normalizes the
//! model's JSON reply into a stable [`RoadmapResult`].
//!
//! Every stage except the model call is a pure function; concurrent
//! requests share no mutable state.

pub mod dates;
pub mod parse;
pub mod prompt;
pub mod sanitize;
pub mod schedule;

pub use parse::{ModelReply, RoadmapBody, RoadmapResult, RoadmapStep, PLACEHOLDER_NOTE};
pub use schedule::{Granularity, ScheduleContext};

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use prepmail_core::{EmailSource, PrepmailError, TextGenerator};
use tracing::debug;

/// Orchestrates the roadmap pipeline end to end.
///
/// Holds the injected generator behind `Arc<dyn TextGenerator>`; the
/// planner itself is `Send + Sync` and can serve any number of concurrent
/// requests without coordination.
pub struct RoadmapPlanner {
    generator: Arc<dyn TextGenerator>,
}

impl RoadmapPlanner {
    /// Creates a planner around an already-constructed generator.
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Derives a roadmap from raw email text, using the current date as
    /// "today". The sole public entry point for callers.
    pub async fn generate_roadmap(
        &self,
        email_text: &str,
    ) -> Result<RoadmapResult, PrepmailError> {
        self.generate_from(email_text, Utc::now().date_naive()).await
    }

    /// The deterministic pipeline core, with "today" fixed by the caller.
    pub async fn generate_from(
        &self,
        email_text: &str,
        today: NaiveDate,
    ) -> Result<RoadmapResult, PrepmailError> {
        let ctx = ScheduleContext::derive(email_text, today);
        debug!(
            target_date = %ctx.target_date,
            total_days = ctx.total_days,
            mode = %ctx.mode,
            "schedule derived"
        );

        let prompt = prompt::build_prompt(email_text, &ctx);
        debug!(prompt_len = prompt.len(), "prompt built");

        let raw = self.generator.generate(&prompt).await?;
        debug!(
            model = self.generator.model(),
            raw_len = raw.len(),
            "model reply received"
        );

        let candidate = sanitize::strip_code_fences(&raw);
        let reply = parse::parse_reply(&candidate)?;
        let result = parse::normalize(reply, &ctx);
        debug!(
            target_date = %result.target_date,
            total_days = result.total_days,
            "roadmap ready"
        );

        Ok(result)
    }

    /// Fetches an email by id and derives a roadmap from its combined
    /// subject and body. A lookup miss is [`PrepmailError::EmailNotFound`].
    pub async fn generate_for_email(
        &self,
        source: &dyn EmailSource,
        email_id: i64,
    ) -> Result<RoadmapResult, PrepmailError> {
        let email = source
            .fetch_email(email_id)
            .await?
            .ok_or(PrepmailError::EmailNotFound { id: email_id })?;

        self.generate_from(&email.combined_text(), Utc::now().date_naive())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use prepmail_core::EmailRecord;
    use std::sync::Mutex;

    /// Test generator returning a canned reply and capturing the prompt.
    struct CannedGenerator {
        reply: String,
        prompts: Mutex<Vec<String>>,
    }

    impl CannedGenerator {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, PrepmailError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.reply.clone())
        }

        fn model(&self) -> &str {
            "models/canned"
        }
    }

    struct SingleEmailSource {
        record: EmailRecord,
    }

    #[async_trait]
    impl EmailSource for SingleEmailSource {
        async fn fetch_email(&self, id: i64) -> Result<Option<EmailRecord>, PrepmailError> {
            if id == self.record.id {
                Ok(Some(self.record.clone()))
            } else {
                Ok(None)
            }
        }
    }

    fn planner(reply: &str) -> (RoadmapPlanner, Arc<CannedGenerator>) {
        let generator = Arc::new(CannedGenerator::new(reply));
        (RoadmapPlanner::new(generator.clone()), generator)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    #[tokio::test]
    async fn pipeline_produces_active_roadmap() {
        let (planner, generator) = planner(
            r#"```json
{"status":"active","company":"Acme","job_role":"SDE",
 "roadmap":[{"sequence_no":1,"time_slot":"Day 1","title":"DSA","description":"","tasks":[]}]}
```"#,
        );

        let result = planner
            .generate_from("Interview at Acme on 15 Mar 2025.", today())
            .await
            .unwrap();

        assert_eq!(result.target_date, NaiveDate::from_ymd_opt(2025, 3, 15).unwrap());
        assert_eq!(result.total_days, 5);
        assert_eq!(result.mode, Granularity::Day);
        assert_eq!(result.company.as_deref(), Some("Acme"));
        assert!(matches!(result.roadmap, RoadmapBody::Active { ref steps } if steps.len() == 1));

        // The prompt the generator saw carries the derived schedule.
        let prompts = generator.prompts.lock().unwrap();
        assert!(prompts[0].contains("TARGET DATE: 2025-03-15"));
        assert!(prompts[0].contains("MODE: DAY"));
        assert!(prompts[0].contains("Interview at Acme on 15 Mar 2025."));
    }

    #[tokio::test]
    async fn empty_model_roadmap_becomes_placeholder() {
        let (planner, _) = planner(r#"{"status":"active","roadmap":[]}"#);
        let result = planner.generate_from("no date here", today()).await.unwrap();

        assert_eq!(
            result.roadmap,
            RoadmapBody::Placeholder {
                note: PLACEHOLDER_NOTE.to_string()
            }
        );
        // Fallback schedule: tomorrow, one day, hour-wise.
        assert_eq!(result.total_days, 1);
        assert_eq!(result.mode, Granularity::Hour);
    }

    #[tokio::test]
    async fn completed_reply_flows_through() {
        let (planner, _) = planner(
            r#"{"status":"interview_completed","company":"Acme","job_role":"SDE",
                "message":"The interview or drive date has already passed.",
                "recommended_actions":["Review interview experience"]}"#,
        );
        let result = planner
            .generate_from("Drive was on 01/01/2020.", today())
            .await
            .unwrap();

        assert!(matches!(result.roadmap, RoadmapBody::Completed { .. }));
        assert_eq!(result.company.as_deref(), Some("Acme"));
    }

    #[tokio::test]
    async fn blank_model_reply_is_empty_response_error() {
        let (planner, _) = planner("```json\n```");
        let err = planner
            .generate_from("anything", today())
            .await
            .unwrap_err();
        assert!(matches!(err, PrepmailError::EmptyModelResponse));
    }

    #[tokio::test]
    async fn malformed_model_reply_is_invalid_json_error() {
        let (planner, _) = planner("{not valid json");
        let err = planner
            .generate_from("anything", today())
            .await
            .unwrap_err();
        assert!(matches!(err, PrepmailError::InvalidModelJson { .. }));
    }

    #[tokio::test]
    async fn generate_for_email_combines_subject_and_body() {
        let (planner, generator) = planner(r#"{"status":"active","roadmap":[]}"#);
        let source = SingleEmailSource {
            record: EmailRecord {
                id: 7,
                sender: "hr@acme.example".into(),
                subject: "Interview scheduled".into(),
                body: "Final round on 15 Mar 2025.".into(),
            },
        };

        let result = planner.generate_for_email(&source, 7).await.unwrap();
        assert_eq!(
            result.target_date,
            NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
        );

        let prompts = generator.prompts.lock().unwrap();
        assert!(prompts[0].contains("Interview scheduled Final round on 15 Mar 2025."));
    }

    #[tokio::test]
    async fn generate_for_email_surfaces_lookup_miss() {
        let (planner, _) = planner(r#"{"status":"active","roadmap":[]}"#);
        let source = SingleEmailSource {
            record: EmailRecord {
                id: 7,
                sender: String::new(),
                subject: String::new(),
                body: String::new(),
            },
        };

        let err = planner.generate_for_email(&source, 99).await.unwrap_err();
        assert!(matches!(err, PrepmailError::EmailNotFound { id: 99 }));
    }
}
