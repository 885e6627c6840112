// Copyright (c) 2025 Pennyplan Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, Duration, NaiveDate};
use uuid::Uuid;

use crate::models::{Frequency, Transaction};

/// The next occurrence date of a recurring transaction, relative to its
/// own stored date. `None` for non-recurring transactions.
pub fn next_scheduled_date(txn: &Transaction) -> Option<NaiveDate> {
    if !txn.is_recurring {
        return None;
    }
    txn.recurrence_frequency.map(|f| advance(txn.date, f))
}

/// Calendar-aware date stepping: monthly and yearly additions clamp the
/// day to the end of shorter months (Jan 31 -> Feb 28).
pub fn advance(date: NaiveDate, frequency: Frequency) -> NaiveDate {
    match frequency {
        Frequency::Daily => date + Duration::days(1),
        Frequency::Weekly => date + Duration::days(7),
        Frequency::Monthly => shift_month(date, 1),
        Frequency::Yearly => shift_year(date, 1),
    }
}

/// One due series expansion: the stored transaction closed out, and its
/// freshly-identified successor.
#[derive(Debug, Clone)]
pub struct Expansion {
    pub closed: Transaction,
    pub created: Transaction,
}

/// Computes the expansions a sweep would apply: every recurring
/// transaction whose next occurrence falls on or before `today` is closed
/// out (`is_recurring` cleared) and rolled forward into exactly one new
/// transaction dated at the computed next occurrence.
///
/// One step per series per sweep. A series idle across several periods
/// advances a single period per run, relative to its stored date; it is
/// the caller's job to sweep again if it wants to catch up further.
pub fn due_expansions(transactions: &[Transaction], today: NaiveDate) -> Vec<Expansion> {
    let mut expansions = Vec::new();
    for txn in transactions.iter().filter(|t| t.is_recurring) {
        let Some(next) = next_scheduled_date(txn) else {
            continue;
        };
        if next > today {
            continue;
        }
        let mut closed = txn.clone();
        closed.is_recurring = false;
        closed.recurrence_frequency = None;
        let mut created = txn.clone();
        created.id = Uuid::new_v4();
        created.date = next;
        expansions.push(Expansion { closed, created });
    }
    expansions
}

fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    let day = date.day().min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap_or(date)
}

fn shift_year(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year() + years;
    let day = date.day().min(days_in_month(year, date.month()));
    NaiveDate::from_ymd_opt(year, date.month(), day).unwrap_or(date)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    (first_next - Duration::days(1)).day()
}
