// Copyright (c) 2025 Pennyplan Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Datelike;
use rusqlite::Connection;
use serde_json::json;

use crate::aggregate::{PeriodFilter, classify, percent_of, top_subcategories};
use crate::clock::{Clock, SystemClock};
use crate::ledger::Ledger;
use crate::models::Category;
use crate::store::SqliteStore;
use crate::utils::{fmt_money, fmt_percent, maybe_print_json, parse_date, parse_month, pretty_table};

const TOP_N: usize = 5;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let today = SystemClock.today();
    match m.subcommand() {
        Some(("day", sub)) => {
            let date = match sub.get_one::<String>("date") {
                Some(d) => parse_date(d)?,
                None => today,
            };
            render(conn, sub, PeriodFilter::Day(date), &format!("Day {}", date))
        }
        Some(("month", sub)) => {
            let (year, month) = match sub.get_one::<String>("month") {
                Some(s) => parse_month(s)?,
                None => (today.year(), today.month()),
            };
            render(
                conn,
                sub,
                PeriodFilter::Month { year, month },
                &format!("Month {:04}-{:02}", year, month),
            )
        }
        Some(("year", sub)) => {
            let year = match sub.get_one::<String>("year") {
                Some(s) => s.parse()?,
                None => today.year(),
            };
            render(conn, sub, PeriodFilter::Year(year), &format!("Year {}", year))
        }
        _ => Ok(()),
    }
}

fn render(conn: &Connection, sub: &clap::ArgMatches, filter: PeriodFilter, title: &str) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let store = SqliteStore::new(conn);
    let ledger = Ledger::load(&store)?;
    let monthly = ledger.monthly_income();
    let totals = ledger.totals(filter);
    let spent = totals.spent();
    let top = top_subcategories(ledger.transactions(), filter, TOP_N);

    let mut category_rows = Vec::new();
    for &category in &Category::ALL {
        let total = totals.total_for(category);
        let goal = ledger.goals().percent_for(category);
        let of_income = percent_of(total, monthly);
        let status = classify(category, of_income, goal);
        category_rows.push((category, total, percent_of(total, spent), goal, status));
    }

    if json_flag || jsonl_flag {
        let data = json!({
            "period": title,
            "monthly_income": monthly.to_string(),
            "spent": spent.round_dp(2).to_string(),
            "remaining": totals.remaining.round_dp(2).to_string(),
            "categories": category_rows.iter().map(|(c, total, of_spent, goal, status)| json!({
                "category": c.as_str(),
                "total": total.round_dp(2).to_string(),
                "percent_of_spending": of_spent.round_dp(1).to_string(),
                "goal_percent": goal.to_string(),
                "status": status.label(),
            })).collect::<Vec<_>>(),
            "top_subcategories": top.iter().map(|(name, sum)| json!({
                "subcategory": name,
                "total": sum.round_dp(2).to_string(),
            })).collect::<Vec<_>>(),
        });
        maybe_print_json(json_flag, jsonl_flag, &data)?;
        return Ok(());
    }

    println!("{}: spent {} of {} monthly income", title, fmt_money(&spent), fmt_money(&monthly));
    let rows = category_rows
        .iter()
        .map(|(c, total, of_spent, goal, status)| {
            vec![
                c.as_str().to_string(),
                fmt_money(total),
                fmt_percent(of_spent),
                fmt_percent(goal),
                status.label().to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Category", "Spent", "% of Spending", "Goal", "Status"], rows)
    );
    println!("Remaining income: {}", fmt_money(&totals.remaining));

    if !top.is_empty() {
        let rows = top
            .iter()
            .map(|(name, sum)| {
                vec![
                    name.clone(),
                    fmt_money(sum),
                    fmt_percent(&percent_of(*sum, spent)),
                ]
            })
            .collect();
        println!("Top spending subcategories:");
        println!("{}", pretty_table(&["Subcategory", "Spent", "% of Spending"], rows));
    }
    Ok(())
}
