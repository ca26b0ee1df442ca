//! Demo fleet loaded at startup.
//!
//! Eight keys, three of them out, with the matching check-out history.
//! Timestamps are relative to `now` so the data always looks current.

use chrono::{DateTime, Duration, Utc};

use crate::{
    models::{
        car_key::CarKey,
        transaction::{Transaction, TransactionAction},
    },
    services::{inventory_service::Inventory, transaction_log::TransactionLog},
};

pub fn seed_inventory(now: DateTime<Utc>) -> Inventory {
    let one_hour_ago = now - Duration::hours(1);
    let two_hours_ago = now - Duration::hours(2);
    let three_hours_ago = now - Duration::hours(3);

    let keys = vec![
        CarKey::available("CK001", "Toyota Camry", "ABC-123", now),
        CarKey::in_use("CK002", "Honda Civic", "XYZ-789", "John Smith", one_hour_ago),
        CarKey::available("CK003", "Ford F-150", "DEF-456", now),
        CarKey::in_use("CK004", "Tesla Model 3", "TES-123", "Sarah Johnson", two_hours_ago),
        CarKey::available("CK005", "BMW X5", "BMW-987", now),
        CarKey::in_use(
            "CK006",
            "Chevrolet Silverado",
            "CHE-456",
            "Mike Wilson",
            three_hours_ago,
        ),
        CarKey::available("CK007", "Audi A4", "AUD-321", now),
        CarKey::available("CK008", "Mercedes C-Class", "MER-654", now),
    ];

    let history = vec![
        check_out_entry("T001", "CK002", "John Smith", one_hour_ago),
        check_out_entry("T002", "CK004", "Sarah Johnson", two_hours_ago),
        check_out_entry("T003", "CK006", "Mike Wilson", three_hours_ago),
    ];

    Inventory::new(keys, TransactionLog::with_history(history))
}

fn check_out_entry(id: &str, key_id: &str, user: &str, timestamp: DateTime<Utc>) -> Transaction {
    Transaction {
        id: id.to_string(),
        key_id: key_id.to_string(),
        action: TransactionAction::CheckOut,
        user: user.to_string(),
        timestamp,
    }
}
