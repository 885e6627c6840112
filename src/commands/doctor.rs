// Copyright (c) 2025 Pennyplan Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::{Connection, OptionalExtension};
use rust_decimal::Decimal;

use crate::models::{Category, Frequency};
use crate::utils::pretty_table;

/// Integrity scan over the raw stored rows. Works below the strict
/// decode layer so it can report the very rows a load would reject.
pub fn handle(conn: &Connection) -> Result<()> {
    let mut rows = Vec::new();

    let mut stmt = conn.prepare(
        "SELECT id, category, amount, is_recurring, recurrence_frequency FROM transactions",
    )?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: String = r.get(0)?;
        let category: String = r.get(1)?;
        let amount: String = r.get(2)?;
        let is_recurring: i64 = r.get(3)?;
        let frequency: Option<String> = r.get(4)?;

        if Category::parse(&category).is_none() {
            rows.push(vec!["unknown_category".into(), format!("{} '{}'", id, category)]);
        }
        match amount.parse::<Decimal>() {
            Ok(a) if a.is_sign_negative() => {
                rows.push(vec!["negative_amount".into(), format!("{} {}", id, amount)]);
            }
            Ok(_) => {}
            Err(_) => rows.push(vec!["bad_amount".into(), format!("{} '{}'", id, amount)]),
        }
        match (&frequency, is_recurring != 0) {
            (Some(f), _) if Frequency::parse(f).is_none() => {
                rows.push(vec!["unknown_frequency".into(), format!("{} '{}'", id, f)]);
            }
            (Some(_), false) => {
                rows.push(vec!["frequency_without_recurring_flag".into(), id]);
            }
            (None, true) => {
                rows.push(vec!["recurring_without_frequency".into(), id]);
            }
            _ => {}
        }
    }

    let goal_sum: Option<(String, String, String)> = conn
        .query_row(
            "SELECT needs_percent, wants_percent, savings_percent FROM profile WHERE id=1",
            [],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
        )
        .optional()?;
    if let Some((needs, wants, savings)) = goal_sum {
        match (
            needs.parse::<Decimal>(),
            wants.parse::<Decimal>(),
            savings.parse::<Decimal>(),
        ) {
            (Ok(n), Ok(w), Ok(s)) => {
                if n + w + s > Decimal::from(100) {
                    rows.push(vec![
                        "goals_exceed_100".into(),
                        format!("{} + {} + {}", needs, wants, savings),
                    ]);
                }
            }
            _ => rows.push(vec![
                "bad_goal_percent".into(),
                format!("{} / {} / {}", needs, wants, savings),
            ]),
        }
    }

    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
