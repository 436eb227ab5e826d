// SPDX-FileCopyrightText: 2026 Blufio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the prepmail trait seams.

use serde::{Deserialize, Serialize};

/// One stored email as supplied by the email-source collaborator.
///
/// The pipeline itself never persists these; it only reads the combined
/// subject+body text out of one record per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRecord {
    /// Opaque identifier assigned by the email source.
    pub id: i64,
    /// Sender address, verbatim from the message headers.
    pub sender: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
}

impl EmailRecord {
    /// The text the roadmap pipeline consumes: subject and body joined by a
    /// single space.
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.subject, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_text_joins_subject_and_body() {
        let record = EmailRecord {
            id: 1,
            sender: "recruiting@acme.example".into(),
            subject: "Interview scheduled".into(),
            body: "Your interview is on 15 Mar 2025.".into(),
        };
        assert_eq!(
            record.combined_text(),
            "Interview scheduled Your interview is on 15 Mar 2025."
        );
    }

    #[test]
    fn email_record_serde_round_trip() {
        let record = EmailRecord {
            id: 42,
            sender: "hr@example.com".into(),
            subject: "Placement drive".into(),
            body: "Details inside.".into(),
        };
        let json = serde_json::to_string(&record).expect("should serialize");
        let parsed: EmailRecord = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(record, parsed);
    }
}
