// Copyright (c) 2025 Pennyplan Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use chrono::NaiveDate;
use rusqlite::Connection;
use serde::Serialize;
use uuid::Uuid;

use crate::aggregate::PeriodFilter;
use crate::clock::{Clock, SystemClock};
use crate::ledger::Ledger;
use crate::models::Transaction;
use crate::store::SqliteStore;
use crate::utils::{
    maybe_print_json, parse_amount, parse_category, parse_date, parse_frequency, parse_month,
    pretty_table,
};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("edit", sub)) => edit(conn, sub)?,
        Some(("delete", sub)) => delete(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn read_fields(sub: &clap::ArgMatches, id: Uuid, default_date: NaiveDate) -> Result<Transaction> {
    let name = sub.get_one::<String>("name").unwrap().trim().to_string();
    let subcategory = sub
        .get_one::<String>("subcategory")
        .unwrap()
        .trim()
        .to_string();
    if name.is_empty() {
        bail!("Transaction name must not be empty");
    }
    if subcategory.is_empty() {
        bail!("Subcategory must not be empty");
    }
    let category = parse_category(sub.get_one::<String>("category").unwrap())?;
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => default_date,
    };
    let notes = sub
        .get_one::<String>("notes")
        .map(|s| s.to_string())
        .unwrap_or_default();
    let recurrence_frequency = sub
        .get_one::<String>("recurring")
        .map(|f| parse_frequency(f))
        .transpose()?;
    Ok(Transaction {
        id,
        name,
        category,
        subcategory,
        date,
        notes,
        amount,
        is_recurring: recurrence_frequency.is_some(),
        recurrence_frequency,
    })
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let store = SqliteStore::new(conn);
    let mut ledger = Ledger::load(&store)?;
    let txn = read_fields(sub, Uuid::new_v4(), SystemClock.today())?;
    let summary = format!(
        "Recorded {} '{}' ({} / {}) on {}",
        crate::utils::fmt_money(&txn.amount),
        txn.name,
        txn.category.as_str(),
        txn.subcategory,
        txn.date
    );
    ledger.add_transaction(&store, txn)?;
    println!("{}", summary);
    Ok(())
}

fn edit(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let store = SqliteStore::new(conn);
    let mut ledger = Ledger::load(&store)?;
    let id = sub.get_one::<String>("id").unwrap().parse::<Uuid>()?;
    let txn = read_fields(sub, id, SystemClock.today())?;
    ledger.edit_transaction(&store, txn)?;
    println!("Updated transaction {}", id);
    Ok(())
}

fn delete(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let store = SqliteStore::new(conn);
    let mut ledger = Ledger::load(&store)?;
    let id = sub.get_one::<String>("id").unwrap().parse::<Uuid>()?;
    ledger.delete_transaction(&store, id)?;
    println!("Deleted transaction {}", id);
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub name: String,
    pub category: String,
    pub subcategory: String,
    pub amount: String,
    pub recurring: String,
    pub notes: String,
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let filter = period_filter(sub)?;

    let store = SqliteStore::new(conn);
    let ledger = Ledger::load(&store)?;
    let data: Vec<TransactionRow> = ledger
        .transactions()
        .iter()
        .filter(|t| filter.matches(t.date))
        .map(|t| TransactionRow {
            id: t.id.to_string(),
            date: t.date.to_string(),
            name: t.name.clone(),
            category: t.category.as_str().to_string(),
            subcategory: t.subcategory.clone(),
            amount: t.amount.round_dp(2).to_string(),
            recurring: t
                .recurrence_frequency
                .map(|f| f.as_str().to_string())
                .unwrap_or_default(),
            notes: t.notes.clone(),
        })
        .collect();

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.date.clone(),
                    r.name.clone(),
                    r.category.clone(),
                    r.subcategory.clone(),
                    r.amount.clone(),
                    r.recurring.clone(),
                    r.notes.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &[
                    "Id",
                    "Date",
                    "Name",
                    "Category",
                    "Subcategory",
                    "Amount",
                    "Recurring",
                    "Notes"
                ],
                rows,
            )
        );
    }
    Ok(())
}

fn period_filter(sub: &clap::ArgMatches) -> Result<PeriodFilter> {
    if let Some(day) = sub.get_one::<String>("day") {
        return Ok(PeriodFilter::Day(parse_date(day)?));
    }
    if let Some(month) = sub.get_one::<String>("month") {
        let (year, month) = parse_month(month)?;
        return Ok(PeriodFilter::Month { year, month });
    }
    if let Some(year) = sub.get_one::<String>("year") {
        return Ok(PeriodFilter::Year(year.parse()?));
    }
    Ok(PeriodFilter::All)
}
