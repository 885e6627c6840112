// Copyright (c) 2025 Pennyplan Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{AggregateTotals, Category, Transaction};

const HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Scopes aggregation to a day, month, or year in the user's local
/// calendar. `All` applies no filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodFilter {
    Day(NaiveDate),
    Month { year: i32, month: u32 },
    Year(i32),
    All,
}

impl PeriodFilter {
    pub fn matches(&self, date: NaiveDate) -> bool {
        match *self {
            PeriodFilter::Day(day) => date == day,
            PeriodFilter::Month { year, month } => date.year() == year && date.month() == month,
            PeriodFilter::Year(year) => date.year() == year,
            PeriodFilter::All => true,
        }
    }
}

/// Reduces the filtered transaction set into per-category totals plus the
/// remaining income. Single pass; absent categories contribute zero.
/// Remaining may be negative (over budget) and that is a valid result.
pub fn totals(
    transactions: &[Transaction],
    filter: PeriodFilter,
    monthly_income: Decimal,
) -> AggregateTotals {
    let mut needs_total = Decimal::ZERO;
    let mut wants_total = Decimal::ZERO;
    let mut savings_total = Decimal::ZERO;
    for txn in transactions.iter().filter(|t| filter.matches(t.date)) {
        match txn.category {
            Category::Need => needs_total += txn.amount,
            Category::Want => wants_total += txn.amount,
            Category::Savings => savings_total += txn.amount,
        }
    }
    let remaining = monthly_income - (needs_total + wants_total + savings_total);
    AggregateTotals {
        needs_total,
        wants_total,
        savings_total,
        remaining,
    }
}

/// `part / whole * 100`, or 0 when the whole is not positive. Never NaN,
/// never a division error.
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole > Decimal::ZERO {
        part / whole * HUNDRED
    } else {
        Decimal::ZERO
    }
}

/// Report status for a category against its goal. Needs and Wants are
/// spending ceilings; Savings is a floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalStatus {
    WithinBudget,
    OverBudget,
    GoalReached,
    BelowTarget,
}

impl GoalStatus {
    pub fn label(&self) -> &'static str {
        match self {
            GoalStatus::WithinBudget => "Within Budget",
            GoalStatus::OverBudget => "Over Budget",
            GoalStatus::GoalReached => "Goal Reached",
            GoalStatus::BelowTarget => "Below Target",
        }
    }
}

/// Plain threshold comparison of the current percent-of-income against
/// the goal percent. No hysteresis.
pub fn classify(category: Category, current_percent: Decimal, goal_percent: Decimal) -> GoalStatus {
    match category {
        Category::Need | Category::Want => {
            if current_percent <= goal_percent {
                GoalStatus::WithinBudget
            } else {
                GoalStatus::OverBudget
            }
        }
        Category::Savings => {
            if current_percent >= goal_percent {
                GoalStatus::GoalReached
            } else {
                GoalStatus::BelowTarget
            }
        }
    }
}

/// Groups the filtered transactions by subcategory, sums each group, and
/// returns the top `n` by descending sum. Equal sums keep their original
/// encounter order.
pub fn top_subcategories(
    transactions: &[Transaction],
    filter: PeriodFilter,
    n: usize,
) -> Vec<(String, Decimal)> {
    let mut groups: Vec<(String, Decimal)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for txn in transactions.iter().filter(|t| filter.matches(t.date)) {
        match index.get(&txn.subcategory) {
            Some(&i) => groups[i].1 += txn.amount,
            None => {
                index.insert(txn.subcategory.clone(), groups.len());
                groups.push((txn.subcategory.clone(), txn.amount));
            }
        }
    }
    // sort_by is stable, so ties preserve encounter order
    groups.sort_by(|a, b| b.1.cmp(&a.1));
    groups.truncate(n);
    groups
}
