// SPDX-FileCopyrightText: 2026 Blufio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock email source backed by an in-memory map.

use std::collections::HashMap;

use async_trait::async_trait;

use prepmail_core::{EmailRecord, EmailSource, PrepmailError};

/// An email source serving records from a fixed in-memory map.
pub struct MockEmailSource {
    emails: HashMap<i64, EmailRecord>,
}

impl MockEmailSource {
    /// Create an empty source; every lookup misses.
    pub fn new() -> Self {
        Self {
            emails: HashMap::new(),
        }
    }

    /// Create a source pre-loaded with the given records, keyed by id.
    pub fn with_emails(records: Vec<EmailRecord>) -> Self {
        Self {
            emails: records.into_iter().map(|r| (r.id, r)).collect(),
        }
    }

    /// Insert one record, replacing any existing record with the same id.
    pub fn insert(&mut self, record: EmailRecord) {
        self.emails.insert(record.id, record);
    }
}

impl Default for MockEmailSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailSource for MockEmailSource {
    async fn fetch_email(&self, id: i64) -> Result<Option<EmailRecord>, PrepmailError> {
        Ok(self.emails.get(&id).cloned())
    }
}
