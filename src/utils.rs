// Copyright (c) 2025 Pennyplan Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;

use crate::models::{Category, Frequency, IncomeFrequency};

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_month(s: &str) -> Result<(i32, u32)> {
    let date = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    Ok((chrono::Datelike::year(&date), chrono::Datelike::month(&date)))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// Non-negative currency amount; negative input is a validation error at
/// the boundary, it never reaches the aggregation functions.
pub fn parse_amount(s: &str) -> Result<Decimal> {
    let amount = parse_decimal(s)?;
    if amount.is_sign_negative() {
        bail!("Amount must not be negative, got '{}'", s);
    }
    Ok(amount)
}

pub fn parse_percent(s: &str) -> Result<Decimal> {
    let percent = parse_decimal(s)?;
    if percent < Decimal::ZERO || percent > Decimal::from(100) {
        bail!("Percent must be between 0 and 100, got '{}'", s);
    }
    Ok(percent)
}

pub fn parse_category(s: &str) -> Result<Category> {
    Category::parse(s)
        .with_context(|| format!("Unknown category '{}' (use Need|Want|Savings)", s))
}

pub fn parse_frequency(s: &str) -> Result<Frequency> {
    Frequency::parse(s)
        .with_context(|| format!("Unknown frequency '{}' (use daily|weekly|monthly|yearly)", s))
}

pub fn parse_income_frequency(s: &str) -> Result<IncomeFrequency> {
    IncomeFrequency::parse(s).with_context(|| {
        format!(
            "Unknown income frequency '{}' (use weekly|biweekly|semimonthly|monthly|quarterly|annually)",
            s
        )
    })
}

pub fn fmt_money(d: &Decimal) -> String {
    format!("${}", d.round_dp(2))
}

pub fn fmt_percent(d: &Decimal) -> String {
    format!("{}%", d.round_dp(1))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
