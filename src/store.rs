// Copyright (c) 2025 Pennyplan Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, params};
use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{
    BudgetGoals, Category, Frequency, IncomeFrequency, IncomeProfile, Transaction,
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("transaction {0} not found")]
    NotFound(Uuid),
    #[error("malformed {field} '{value}' in stored record")]
    Decode { field: &'static str, value: String },
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

/// Income declaration and goals, persisted together as one profile.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BudgetProfile {
    pub income: IncomeProfile,
    pub goals: BudgetGoals,
}

/// Persistence collaborator. Implementations may fail on any call; the
/// core never retries and only updates in-memory state on success.
pub trait Store {
    fn load_transactions(&self) -> Result<Vec<Transaction>, StoreError>;
    /// Insert, or replace the full record when the id already exists.
    fn save_transaction(&self, txn: &Transaction) -> Result<(), StoreError>;
    fn delete_transaction(&self, id: Uuid) -> Result<(), StoreError>;
    fn load_profile(&self) -> Result<BudgetProfile, StoreError>;
    fn save_profile(&self, profile: &BudgetProfile) -> Result<(), StoreError>;
}

/// SQLite-backed store. Decoding is strict: enum and decimal fields must
/// parse, and the recurrence invariant must hold, or the load fails
/// loudly instead of defaulting. Only `recurrence_frequency` is
/// genuinely optional.
pub struct SqliteStore<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        SqliteStore { conn }
    }
}

fn decode_error(field: &'static str, value: impl Into<String>) -> StoreError {
    StoreError::Decode {
        field,
        value: value.into(),
    }
}

fn decode_transaction(
    id: String,
    name: String,
    category: String,
    subcategory: String,
    date: String,
    notes: String,
    amount: String,
    is_recurring: bool,
    frequency: Option<String>,
) -> Result<Transaction, StoreError> {
    let id = Uuid::parse_str(&id).map_err(|_| decode_error("id", &id))?;
    let category = Category::parse(&category).ok_or_else(|| decode_error("category", &category))?;
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| decode_error("date", &date))?;
    let amount = amount
        .parse::<Decimal>()
        .ok()
        .filter(|a| !a.is_sign_negative())
        .ok_or_else(|| decode_error("amount", &amount))?;
    let recurrence_frequency = match frequency {
        Some(f) => Some(Frequency::parse(&f).ok_or_else(|| decode_error("recurrence_frequency", &f))?),
        None => None,
    };
    if is_recurring != recurrence_frequency.is_some() {
        return Err(decode_error(
            "recurrence_frequency",
            if is_recurring { "(missing)" } else { "(unexpected)" },
        ));
    }
    Ok(Transaction {
        id,
        name,
        category,
        subcategory,
        date,
        notes,
        amount,
        is_recurring,
        recurrence_frequency,
    })
}

fn decode_percent(field: &'static str, value: &str) -> Result<Decimal, StoreError> {
    value
        .parse::<Decimal>()
        .ok()
        .filter(|p| *p >= Decimal::ZERO && *p <= Decimal::from(100))
        .ok_or_else(|| decode_error(field, value))
}

impl Store for SqliteStore<'_> {
    fn load_transactions(&self) -> Result<Vec<Transaction>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, category, subcategory, date, notes, amount,
                    is_recurring, recurrence_frequency
             FROM transactions ORDER BY date, rowid",
        )?;
        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(r) = rows.next()? {
            out.push(decode_transaction(
                r.get(0)?,
                r.get(1)?,
                r.get(2)?,
                r.get(3)?,
                r.get(4)?,
                r.get(5)?,
                r.get(6)?,
                r.get::<_, i64>(7)? != 0,
                r.get(8)?,
            )?);
        }
        Ok(out)
    }

    fn save_transaction(&self, txn: &Transaction) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO transactions(id, name, category, subcategory, date, notes, amount,
                                      is_recurring, recurrence_frequency)
             VALUES (?1,?2,?3,?4,?5,?6,?7,?8,?9)
             ON CONFLICT(id) DO UPDATE SET
                 name=excluded.name, category=excluded.category,
                 subcategory=excluded.subcategory, date=excluded.date,
                 notes=excluded.notes, amount=excluded.amount,
                 is_recurring=excluded.is_recurring,
                 recurrence_frequency=excluded.recurrence_frequency",
            params![
                txn.id.to_string(),
                txn.name,
                txn.category.as_str(),
                txn.subcategory,
                txn.date.to_string(),
                txn.notes,
                txn.amount.to_string(),
                txn.is_recurring as i64,
                txn.recurrence_frequency.map(|f| f.as_str()),
            ],
        )?;
        Ok(())
    }

    fn delete_transaction(&self, id: Uuid) -> Result<(), StoreError> {
        let affected = self.conn.execute(
            "DELETE FROM transactions WHERE id=?1",
            params![id.to_string()],
        )?;
        if affected == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    fn load_profile(&self) -> Result<BudgetProfile, StoreError> {
        let row: Option<(String, String, String, String, String)> = self
            .conn
            .query_row(
                "SELECT income_amount, income_frequency, needs_percent, wants_percent,
                        savings_percent
                 FROM profile WHERE id=1",
                [],
                |r| {
                    Ok((
                        r.get(0)?,
                        r.get(1)?,
                        r.get(2)?,
                        r.get(3)?,
                        r.get(4)?,
                    ))
                },
            )
            .optional()?;
        // No row means first use: defaults (zero income, 50/30/20).
        let Some((amount, frequency, needs, wants, savings)) = row else {
            return Ok(BudgetProfile::default());
        };
        let amount = amount
            .parse::<Decimal>()
            .ok()
            .filter(|a| !a.is_sign_negative())
            .ok_or_else(|| decode_error("income_amount", &amount))?;
        let frequency = IncomeFrequency::parse(&frequency)
            .ok_or_else(|| decode_error("income_frequency", &frequency))?;
        Ok(BudgetProfile {
            income: IncomeProfile { amount, frequency },
            goals: BudgetGoals {
                needs_percent: decode_percent("needs_percent", &needs)?,
                wants_percent: decode_percent("wants_percent", &wants)?,
                savings_percent: decode_percent("savings_percent", &savings)?,
            },
        })
    }

    fn save_profile(&self, profile: &BudgetProfile) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO profile(id, income_amount, income_frequency, needs_percent,
                                 wants_percent, savings_percent)
             VALUES (1,?1,?2,?3,?4,?5)
             ON CONFLICT(id) DO UPDATE SET
                 income_amount=excluded.income_amount,
                 income_frequency=excluded.income_frequency,
                 needs_percent=excluded.needs_percent,
                 wants_percent=excluded.wants_percent,
                 savings_percent=excluded.savings_percent",
            params![
                profile.income.amount.to_string(),
                profile.income.frequency.as_str(),
                profile.goals.needs_percent.to_string(),
                profile.goals.wants_percent.to_string(),
                profile.goals.savings_percent.to_string(),
            ],
        )?;
        Ok(())
    }
}
