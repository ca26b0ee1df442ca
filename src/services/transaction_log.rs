//! Append-only transaction log, newest entry first.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};

use crate::models::transaction::{Transaction, TransactionAction};

/// Ordered record of every successful check-out and check-in.
///
/// Entries are only ever added at the front. Identifiers are assigned here,
/// from the entry count, so they are unique for the life of the log.
#[derive(Debug, Default, Clone)]
pub struct TransactionLog {
    entries: VecDeque<Transaction>,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing history, given newest first.
    ///
    /// Existing ids must lie within `T001..=Tn` so that ids handed out by
    /// `record` stay unique.
    pub fn with_history(entries: Vec<Transaction>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    /// Record a new transaction at index 0 and return it.
    pub fn record(
        &mut self,
        key_id: &str,
        action: TransactionAction,
        user: &str,
        timestamp: DateTime<Utc>,
    ) -> &Transaction {
        let transaction = Transaction {
            id: format!("T{:03}", self.entries.len() + 1),
            key_id: key_id.to_string(),
            action,
            user: user.to_string(),
            timestamp,
        };
        self.entries.push_front(transaction);
        &self.entries[0]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.entries.iter()
    }

    /// The first `limit` entries, newest first.
    pub fn recent(&self, limit: usize) -> Vec<Transaction> {
        self.entries.iter().take(limit).cloned().collect()
    }

    /// History of a single key, newest first.
    pub fn for_key(&self, key_id: &str) -> Vec<Transaction> {
        self.entries
            .iter()
            .filter(|transaction| transaction.key_id == key_id)
            .cloned()
            .collect()
    }
}
