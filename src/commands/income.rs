// Copyright (c) 2025 Pennyplan Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use serde_json::json;

use crate::income;
use crate::ledger::Ledger;
use crate::store::SqliteStore;
use crate::utils::{fmt_money, maybe_print_json, parse_amount, parse_income_frequency};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(conn, sub)?,
        Some(("show", sub)) => show(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn set(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let frequency = parse_income_frequency(sub.get_one::<String>("frequency").unwrap())?;

    let store = SqliteStore::new(conn);
    let mut ledger = Ledger::load(&store)?;
    ledger.set_income(&store, amount, frequency)?;

    println!(
        "Income set to {} {}, monthly income {}",
        fmt_money(&amount),
        frequency.as_str(),
        fmt_money(&ledger.monthly_income())
    );
    if !income::is_supported(frequency) {
        eprintln!(
            "warning: '{}' has no monthly conversion; monthly income resolves to $0.00",
            frequency.as_str()
        );
    }
    Ok(())
}

fn show(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let store = SqliteStore::new(conn);
    let ledger = Ledger::load(&store)?;
    let profile = ledger.income();

    let data = json!({
        "amount": profile.amount.round_dp(2).to_string(),
        "frequency": profile.frequency.as_str(),
        "monthly_income": ledger.monthly_income().to_string(),
    });
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!(
            "Income: {} {} => monthly {}",
            fmt_money(&profile.amount),
            profile.frequency.as_str(),
            fmt_money(&ledger.monthly_income())
        );
        if !income::is_supported(profile.frequency) {
            println!("Note: '{}' is unsupported for monthly conversion", profile.frequency.as_str());
        }
    }
    Ok(())
}
