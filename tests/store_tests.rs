// Copyright (c) 2025 Pennyplan Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::{Connection, params};
use rust_decimal::Decimal;
use uuid::Uuid;

use pennyplan::db;
use pennyplan::models::{BudgetGoals, Category, Frequency, IncomeFrequency, Transaction};
use pennyplan::store::{BudgetProfile, SqliteStore, Store, StoreError};

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

fn sample_txn() -> Transaction {
    Transaction {
        id: Uuid::new_v4(),
        name: "Kroger's Run".to_string(),
        category: Category::Need,
        subcategory: "Groceries".to_string(),
        date: NaiveDate::from_ymd_opt(2025, 8, 10).unwrap(),
        notes: "Bought a little too much".to_string(),
        amount: Decimal::new(13145, 2),
        is_recurring: false,
        recurrence_frequency: None,
    }
}

#[test]
fn transaction_round_trips_typed() {
    let conn = setup();
    let store = SqliteStore::new(&conn);
    let txn = sample_txn();
    store.save_transaction(&txn).unwrap();

    let loaded = store.load_transactions().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, txn.id);
    assert_eq!(loaded[0].category, Category::Need);
    assert_eq!(loaded[0].amount, Decimal::new(13145, 2));
    assert_eq!(loaded[0].date, txn.date);
}

#[test]
fn save_replaces_by_id() {
    let conn = setup();
    let store = SqliteStore::new(&conn);
    let mut txn = sample_txn();
    store.save_transaction(&txn).unwrap();

    txn.amount = Decimal::from(99);
    txn.name = "Corrected".to_string();
    store.save_transaction(&txn).unwrap();

    let loaded = store.load_transactions().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name, "Corrected");
    assert_eq!(loaded[0].amount, Decimal::from(99));
}

#[test]
fn recurring_frequency_round_trips() {
    let conn = setup();
    let store = SqliteStore::new(&conn);
    let mut txn = sample_txn();
    txn.is_recurring = true;
    txn.recurrence_frequency = Some(Frequency::Monthly);
    store.save_transaction(&txn).unwrap();

    let loaded = store.load_transactions().unwrap();
    assert!(loaded[0].is_recurring);
    assert_eq!(loaded[0].recurrence_frequency, Some(Frequency::Monthly));
}

#[test]
fn malformed_category_fails_loudly_not_silently() {
    let conn = setup();
    conn.execute(
        "INSERT INTO transactions(id, name, category, subcategory, date, notes, amount, is_recurring)
         VALUES (?1, 'x', 'Luxuries', 'y', '2025-08-10', '', '10', 0)",
        params![Uuid::new_v4().to_string()],
    )
    .unwrap();
    let store = SqliteStore::new(&conn);
    match store.load_transactions() {
        Err(StoreError::Decode { field, .. }) => assert_eq!(field, "category"),
        other => panic!("expected decode error, got {:?}", other.map(|v| v.len())),
    }
}

#[test]
fn recurrence_invariant_is_enforced_at_decode() {
    let conn = setup();
    // recurring flag set but no frequency stored
    conn.execute(
        "INSERT INTO transactions(id, name, category, subcategory, date, notes, amount, is_recurring)
         VALUES (?1, 'x', 'Need', 'y', '2025-08-10', '', '10', 1)",
        params![Uuid::new_v4().to_string()],
    )
    .unwrap();
    let store = SqliteStore::new(&conn);
    assert!(matches!(
        store.load_transactions(),
        Err(StoreError::Decode { field: "recurrence_frequency", .. })
    ));
}

#[test]
fn delete_of_unknown_id_signals_not_found() {
    let conn = setup();
    let store = SqliteStore::new(&conn);
    let id = Uuid::new_v4();
    assert!(matches!(
        store.delete_transaction(id),
        Err(StoreError::NotFound(got)) if got == id
    ));
}

#[test]
fn first_use_profile_gets_defaults() {
    let conn = setup();
    let store = SqliteStore::new(&conn);
    let profile = store.load_profile().unwrap();
    assert_eq!(profile.goals, BudgetGoals::default());
    assert_eq!(profile.income.amount, Decimal::ZERO);
}

#[test]
fn profile_round_trips() {
    let conn = setup();
    let store = SqliteStore::new(&conn);
    let mut profile = BudgetProfile::default();
    profile.income.amount = Decimal::from(1500);
    profile.income.frequency = IncomeFrequency::Biweekly;
    profile.goals.needs_percent = Decimal::from(40);
    store.save_profile(&profile).unwrap();

    let loaded = store.load_profile().unwrap();
    assert_eq!(loaded, profile);
}

#[test]
fn on_disk_store_persists_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pennyplan.sqlite");
    let txn = sample_txn();
    {
        let conn = Connection::open(&path).unwrap();
        db::init_schema(&conn).unwrap();
        SqliteStore::new(&conn).save_transaction(&txn).unwrap();
    }
    let conn = Connection::open(&path).unwrap();
    db::init_schema(&conn).unwrap();
    let loaded = SqliteStore::new(&conn).load_transactions().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, txn.id);
}
