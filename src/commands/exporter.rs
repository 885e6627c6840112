// Copyright (c) 2025 Pennyplan Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use serde_json::json;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(conn, sub),
        _ => Ok(()),
    }
}

fn export_transactions(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let mut stmt = conn.prepare(
        "SELECT id, date, name, category, subcategory, amount, notes,
                is_recurring, recurrence_frequency
         FROM transactions ORDER BY date, rowid",
    )?;
    let rows = stmt.query_map([], |r| {
        Ok((
            r.get::<_, String>(0)?,
            r.get::<_, String>(1)?,
            r.get::<_, String>(2)?,
            r.get::<_, String>(3)?,
            r.get::<_, String>(4)?,
            r.get::<_, String>(5)?,
            r.get::<_, String>(6)?,
            r.get::<_, i64>(7)?,
            r.get::<_, Option<String>>(8)?,
        ))
    })?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "id",
                "date",
                "name",
                "category",
                "subcategory",
                "amount",
                "notes",
                "is_recurring",
                "recurrence_frequency",
            ])?;
            for row in rows {
                let (id, date, name, category, subcategory, amount, notes, recurring, freq) = row?;
                wtr.write_record([
                    id,
                    date,
                    name,
                    category,
                    subcategory,
                    amount,
                    notes,
                    (recurring != 0).to_string(),
                    freq.unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let mut items = Vec::new();
            for row in rows {
                let (id, date, name, category, subcategory, amount, notes, recurring, freq) = row?;
                items.push(json!({
                    "id": id, "date": date, "name": name, "category": category,
                    "subcategory": subcategory, "amount": amount, "notes": notes,
                    "is_recurring": recurring != 0, "recurrence_frequency": freq
                }));
            }
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported transactions to {}", out);
    Ok(())
}
