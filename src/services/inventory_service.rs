//! Inventory service - Core business logic for key check-out and check-in.
//!
//! This service handles:
//! - Status transitions (Available <-> InUse)
//! - Driver name validation
//! - Recording one transaction per successful transition
//!
//! # Atomicity Guarantees
//!
//! Every precondition is checked before anything is written, so a rejected
//! operation leaves both the keys and the log untouched. Callers share the
//! `Inventory` behind a single lock (see `state.rs`), which serializes
//! mutations and keeps readers from seeing a half-applied update.

use chrono::{DateTime, Utc};

use crate::{
    error::AppError,
    models::{
        car_key::{CarKey, KeyStatus},
        summary::Summary,
        transaction::{Transaction, TransactionAction},
    },
    services::transaction_log::TransactionLog,
};

/// Recorded user on check-in when the outgoing holder has a blank name.
pub const UNKNOWN_HOLDER: &str = "Unknown";

/// Key inventory plus its transaction log.
#[derive(Debug, Default, Clone)]
pub struct Inventory {
    keys: Vec<CarKey>,
    log: TransactionLog,
}

impl Inventory {
    /// Build an inventory from a fixed set of keys and an existing log.
    ///
    /// Key order is kept as given and is the order of every listing.
    pub fn new(keys: Vec<CarKey>, log: TransactionLog) -> Self {
        Self { keys, log }
    }

    pub fn keys(&self) -> &[CarKey] {
        &self.keys
    }

    pub fn log(&self) -> &TransactionLog {
        &self.log
    }

    pub fn get(&self, key_id: &str) -> Option<&CarKey> {
        self.keys.iter().find(|key| key.id == key_id)
    }

    fn get_mut(&mut self, key_id: &str) -> Result<&mut CarKey, AppError> {
        self.keys
            .iter_mut()
            .find(|key| key.id == key_id)
            .ok_or_else(|| AppError::KeyNotFound(key_id.to_string()))
    }

    /// Check a key out to a driver.
    ///
    /// # Process
    ///
    /// 1. Find the key
    /// 2. Validate the driver name (trimmed, non-empty)
    /// 3. Verify the key is available
    /// 4. Mark it in use by the driver
    /// 5. Record a check-out transaction
    ///
    /// Returns the updated key and the recorded transaction.
    ///
    /// # Errors
    ///
    /// - `KeyNotFound`: no key with this id
    /// - `EmptyDriverName`: name is empty or whitespace only
    /// - `KeyAlreadyCheckedOut`: key is already in use
    pub fn check_out(
        &mut self,
        key_id: &str,
        user_name: &str,
        now: DateTime<Utc>,
    ) -> Result<(CarKey, Transaction), AppError> {
        let key = self.get_mut(key_id)?;

        let driver = user_name.trim();
        if driver.is_empty() {
            tracing::debug!(key_id, "check-out rejected: empty driver name");
            return Err(AppError::EmptyDriverName);
        }

        if let KeyStatus::InUse { holder } = &key.status {
            tracing::debug!(key_id, holder = %holder, "check-out rejected: key in use");
            return Err(AppError::KeyAlreadyCheckedOut(key_id.to_string()));
        }

        key.status = KeyStatus::InUse {
            holder: driver.to_string(),
        };
        key.last_updated = now;
        let key = key.clone();

        let transaction = self
            .log
            .record(key_id, TransactionAction::CheckOut, driver, now)
            .clone();
        tracing::info!(key_id, driver, transaction_id = %transaction.id, "key checked out");

        Ok((key, transaction))
    }

    /// Return a key to the inventory.
    ///
    /// The transaction is attributed to the outgoing holder. Whoever calls
    /// this is not checked against that holder. Returns the updated key and
    /// the recorded transaction.
    ///
    /// # Errors
    ///
    /// - `KeyNotFound`: no key with this id
    /// - `KeyNotCheckedOut`: key is already available
    pub fn check_in(
        &mut self,
        key_id: &str,
        now: DateTime<Utc>,
    ) -> Result<(CarKey, Transaction), AppError> {
        let key = self.get_mut(key_id)?;
        let holder = match std::mem::replace(&mut key.status, KeyStatus::Available) {
            KeyStatus::InUse { holder } => holder,
            KeyStatus::Available => {
                tracing::debug!(key_id, "check-in rejected: key already available");
                return Err(AppError::KeyNotCheckedOut(key_id.to_string()));
            }
        };
        key.last_updated = now;
        let key = key.clone();

        let user = if holder.trim().is_empty() {
            UNKNOWN_HOLDER
        } else {
            holder.as_str()
        };
        let transaction = self
            .log
            .record(key_id, TransactionAction::CheckIn, user, now)
            .clone();
        tracing::info!(key_id, user, transaction_id = %transaction.id, "key checked in");

        Ok((key, transaction))
    }

    /// Keys whose id, model, plate or holder contain `search`, ignoring case.
    ///
    /// The search string is matched as given, surrounding whitespace
    /// included. An empty or whitespace-only search returns every key.
    /// Inventory order is preserved.
    pub fn search(&self, search: &str) -> Vec<&CarKey> {
        if search.trim().is_empty() {
            return self.keys.iter().collect();
        }
        let needle = search.to_lowercase();
        self.keys.iter().filter(|key| key.matches(&needle)).collect()
    }

    pub fn summary(&self) -> Summary {
        let available = self
            .keys
            .iter()
            .filter(|key| key.status.is_available())
            .count();

        Summary {
            available,
            in_use: self.keys.len() - available,
            total_keys: self.keys.len(),
            total_transactions: self.log.len(),
        }
    }

    /// The first `limit` log entries, newest first.
    pub fn recent_activity(&self, limit: usize) -> Vec<Transaction> {
        self.log.recent(limit)
    }

    /// History of one key, newest first.
    ///
    /// # Errors
    ///
    /// - `KeyNotFound`: no key with this id
    pub fn history(&self, key_id: &str) -> Result<Vec<Transaction>, AppError> {
        if self.get(key_id).is_none() {
            return Err(AppError::KeyNotFound(key_id.to_string()));
        }
        Ok(self.log.for_key(key_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::seed;
    use chrono::Duration;

    fn seeded() -> (Inventory, DateTime<Utc>) {
        let now = Utc::now();
        (seed::seed_inventory(now), now)
    }

    fn assert_holder_invariant(inventory: &Inventory) {
        for key in inventory.keys() {
            assert_eq!(
                key.status.holder().is_some(),
                !key.status.is_available(),
                "holder/status mismatch on {}",
                key.id
            );
        }
    }

    #[test]
    fn check_out_available_key() {
        let (mut inventory, now) = seeded();
        let later = now + Duration::minutes(1);

        let (returned, transaction) = inventory.check_out("CK001", "Alice", later).unwrap();

        let key = inventory.get("CK001").unwrap();
        assert_eq!(&returned, key);
        assert_eq!(key.status, KeyStatus::InUse { holder: "Alice".into() });
        assert_eq!(key.last_updated, later);
        assert_eq!(inventory.log().len(), 4);
        assert_eq!(inventory.log().iter().next().unwrap(), &transaction);
        assert_eq!(transaction.id, "T004");
        assert_eq!(transaction.key_id, "CK001");
        assert_eq!(transaction.action, TransactionAction::CheckOut);
        assert_eq!(transaction.user, "Alice");
        assert_holder_invariant(&inventory);
    }

    #[test]
    fn check_out_trims_driver_name() {
        let (mut inventory, now) = seeded();
        let (_, transaction) = inventory.check_out("CK003", "  Alice  ", now).unwrap();

        assert_eq!(transaction.user, "Alice");
        assert_eq!(inventory.get("CK003").unwrap().status.holder(), Some("Alice"));
    }

    #[test]
    fn check_out_with_blank_name_changes_nothing() {
        let (mut inventory, now) = seeded();
        let before = inventory.clone();

        assert_eq!(
            inventory.check_out("CK001", "", now),
            Err(AppError::EmptyDriverName)
        );
        assert_eq!(
            inventory.check_out("CK001", "   \t", now),
            Err(AppError::EmptyDriverName)
        );
        assert_eq!(inventory.keys(), before.keys());
        assert_eq!(inventory.log().len(), before.log().len());
    }

    #[test]
    fn check_out_key_in_use_changes_nothing() {
        let (mut inventory, now) = seeded();
        let before = inventory.clone();

        assert_eq!(
            inventory.check_out("CK002", "Alice", now),
            Err(AppError::KeyAlreadyCheckedOut("CK002".into()))
        );
        assert_eq!(inventory.keys(), before.keys());
        assert_eq!(inventory.log().len(), 3);
        assert_eq!(inventory.get("CK002").unwrap().status.holder(), Some("John Smith"));
    }

    #[test]
    fn check_out_unknown_key() {
        let (mut inventory, now) = seeded();

        assert_eq!(
            inventory.check_out("CK999", "Alice", now),
            Err(AppError::KeyNotFound("CK999".into()))
        );
        assert_eq!(inventory.log().len(), 3);
    }

    #[test]
    fn unknown_key_wins_over_blank_name() {
        let (mut inventory, now) = seeded();

        assert_eq!(
            inventory.check_out("CK999", "  ", now),
            Err(AppError::KeyNotFound("CK999".into()))
        );
        assert_eq!(inventory.log().len(), 3);
    }

    #[test]
    fn check_in_records_outgoing_holder() {
        let (mut inventory, now) = seeded();
        inventory.check_out("CK005", "Bob", now).unwrap();
        let later = now + Duration::hours(2);

        let (returned, transaction) = inventory.check_in("CK005", later).unwrap();

        let key = inventory.get("CK005").unwrap();
        assert_eq!(&returned, key);
        assert_eq!(key.status, KeyStatus::Available);
        assert_eq!(key.last_updated, later);
        assert_eq!(transaction.action, TransactionAction::CheckIn);
        assert_eq!(transaction.user, "Bob");
        assert_eq!(transaction.id, "T005");
        assert_eq!(inventory.log().len(), 5);
        assert_holder_invariant(&inventory);
    }

    #[test]
    fn check_in_available_key_changes_nothing() {
        let (mut inventory, now) = seeded();
        let before = inventory.clone();

        assert_eq!(
            inventory.check_in("CK001", now),
            Err(AppError::KeyNotCheckedOut("CK001".into()))
        );
        assert_eq!(inventory.keys(), before.keys());
        assert_eq!(inventory.log().len(), 3);
    }

    #[test]
    fn check_in_unknown_key() {
        let (mut inventory, now) = seeded();
        assert_eq!(
            inventory.check_in("nope", now),
            Err(AppError::KeyNotFound("nope".into()))
        );
    }

    #[test]
    fn check_in_blank_holder_uses_sentinel() {
        let now = Utc::now();
        let mut inventory = Inventory::new(
            vec![CarKey::in_use("K1", "Audi A4", "AUD-321", "", now)],
            TransactionLog::new(),
        );

        let (_, transaction) = inventory.check_in("K1", now).unwrap();
        assert_eq!(transaction.user, UNKNOWN_HOLDER);
    }

    #[test]
    fn search_matches_case_insensitively() {
        let (inventory, _) = seeded();

        let civic: Vec<&str> = inventory.search("civic").into_iter().map(|k| k.id.as_str()).collect();
        assert_eq!(civic, vec!["CK002"]);

        let by_holder: Vec<&str> = inventory.search("SARAH").into_iter().map(|k| k.id.as_str()).collect();
        assert_eq!(by_holder, vec!["CK004"]);

        let by_plate: Vec<&str> = inventory.search("bmw-9").into_iter().map(|k| k.id.as_str()).collect();
        assert_eq!(by_plate, vec!["CK005"]);
    }

    #[test]
    fn empty_search_returns_all_in_order() {
        let (inventory, _) = seeded();

        let ids: Vec<&str> = inventory.search("").into_iter().map(|k| k.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["CK001", "CK002", "CK003", "CK004", "CK005", "CK006", "CK007", "CK008"]
        );
        assert_eq!(inventory.search("   ").len(), 8);
    }

    #[test]
    fn search_without_match_is_empty() {
        let (inventory, _) = seeded();
        assert!(inventory.search("lamborghini").is_empty());
    }

    #[test]
    fn search_keeps_surrounding_whitespace() {
        let (inventory, _) = seeded();

        assert!(inventory.search("civic ").is_empty());
        assert!(inventory.search(" ck001").is_empty());

        let ids: Vec<&str> = inventory.search("Honda Civic").into_iter().map(|k| k.id.as_str()).collect();
        assert_eq!(ids, vec!["CK002"]);
    }

    #[test]
    fn search_holder_cleared_after_check_in() {
        let (mut inventory, now) = seeded();
        inventory.check_in("CK006", now).unwrap();
        assert!(inventory.search("wilson").is_empty());
    }

    #[test]
    fn summary_tracks_operations() {
        let (mut inventory, now) = seeded();
        assert_eq!(
            inventory.summary(),
            Summary {
                available: 5,
                in_use: 3,
                total_keys: 8,
                total_transactions: 3
            }
        );

        inventory.check_out("CK001", "Alice", now).unwrap();
        let summary = inventory.summary();
        assert_eq!((summary.available, summary.in_use), (4, 4));
        assert_eq!(summary.total_transactions, 4);

        inventory.check_in("CK002", now).unwrap();
        let summary = inventory.summary();
        assert_eq!((summary.available, summary.in_use), (5, 3));
        assert_eq!(summary.available + summary.in_use, summary.total_keys);
        assert_eq!(summary.total_transactions, 5);

        let _ = inventory.check_in("CK002", now);
        assert_eq!(inventory.summary().total_transactions, 5);
    }

    #[test]
    fn recent_activity_is_newest_first() {
        let (mut inventory, now) = seeded();
        inventory.check_out("CK001", "Alice", now).unwrap();
        inventory.check_out("CK003", "Bob", now).unwrap();
        inventory.check_in("CK001", now).unwrap();

        let recent = inventory.recent_activity(5);
        let ids: Vec<&str> = recent.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["T006", "T005", "T004", "T001", "T002"]);
    }

    #[test]
    fn history_of_a_key() {
        let (mut inventory, now) = seeded();
        inventory.check_in("CK002", now).unwrap();

        let history = inventory.history("CK002").unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].action, TransactionAction::CheckIn);
        assert_eq!(history[1].user, "John Smith");
        assert!(inventory.history("CK001").unwrap().is_empty());
        assert_eq!(
            inventory.history("CK999"),
            Err(AppError::KeyNotFound("CK999".into()))
        );
    }
}
