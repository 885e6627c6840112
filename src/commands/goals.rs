// Copyright (c) 2025 Pennyplan Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

use crate::goals::amount_for_goal;
use crate::ledger::Ledger;
use crate::models::Category;
use crate::store::SqliteStore;
use crate::utils::{
    fmt_money, fmt_percent, maybe_print_json, parse_category, parse_percent, pretty_table,
};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(conn, sub)?,
        Some(("show", sub)) => show(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn set(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let category = parse_category(sub.get_one::<String>("category").unwrap())?;
    let percent = parse_percent(sub.get_one::<String>("percent").unwrap())?;

    let store = SqliteStore::new(conn);
    let mut ledger = Ledger::load(&store)?;
    let updated = ledger.set_goal(&store, category, percent)?;

    let accepted = updated.percent_for(category);
    if accepted < percent {
        println!(
            "Clamped {} goal to {} (the three goals may not exceed 100%)",
            category.as_str(),
            fmt_percent(&accepted)
        );
    } else {
        println!("Set {} goal to {}", category.as_str(), fmt_percent(&accepted));
    }
    Ok(())
}

#[derive(Serialize)]
struct GoalRow {
    category: String,
    percent: String,
    amount: String,
}

fn show(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let store = SqliteStore::new(conn);
    let ledger = Ledger::load(&store)?;
    let monthly = ledger.monthly_income();

    let data: Vec<GoalRow> = Category::ALL
        .iter()
        .map(|&c| {
            let percent = ledger.goals().percent_for(c);
            GoalRow {
                category: c.as_str().to_string(),
                percent: fmt_percent(&percent),
                amount: fmt_money(&amount_for_goal(percent, monthly)),
            }
        })
        .collect();

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data
            .iter()
            .map(|r| vec![r.category.clone(), r.percent.clone(), r.amount.clone()])
            .collect();
        println!("{}", pretty_table(&["Category", "Goal", "Monthly Amount"], rows));
        println!("Monthly income: {}", fmt_money(&monthly));
    }
    Ok(())
}
