// Copyright (c) 2025 Pennyplan Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

use crate::clock::{Clock, SystemClock};
use crate::ledger::Ledger;
use crate::recurring::next_scheduled_date;
use crate::store::SqliteStore;
use crate::utils::{fmt_money, maybe_print_json, parse_date, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(conn, sub)?,
        Some(("sweep", sub)) => sweep(conn, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
struct RecurringRow {
    id: String,
    name: String,
    category: String,
    subcategory: String,
    amount: String,
    frequency: String,
    next_scheduled: String,
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let store = SqliteStore::new(conn);
    let ledger = Ledger::load(&store)?;

    let data: Vec<RecurringRow> = ledger
        .transactions()
        .iter()
        .filter(|t| t.is_recurring)
        .map(|t| RecurringRow {
            id: t.id.to_string(),
            name: t.name.clone(),
            category: t.category.as_str().to_string(),
            subcategory: t.subcategory.clone(),
            amount: fmt_money(&t.amount),
            frequency: t
                .recurrence_frequency
                .map(|f| f.as_str().to_string())
                .unwrap_or_default(),
            next_scheduled: next_scheduled_date(t)
                .map(|d| d.to_string())
                .unwrap_or_default(),
        })
        .collect();

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.name.clone(),
                    r.category.clone(),
                    r.subcategory.clone(),
                    r.amount.clone(),
                    r.frequency.clone(),
                    r.next_scheduled.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Name", "Category", "Subcategory", "Amount", "Repeats", "Next Scheduled"],
                rows,
            )
        );
    }
    Ok(())
}

fn sweep(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let today = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => SystemClock.today(),
    };

    let store = SqliteStore::new(conn);
    let mut ledger = Ledger::load(&store)?;
    let expanded = ledger.run_sweep(&store, today);

    if expanded == 0 {
        println!("No recurring series due on {}", today);
    } else {
        println!("Expanded {} recurring series (swept as of {})", expanded, today);
    }
    Ok(())
}
