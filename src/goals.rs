// Copyright (c) 2025 Pennyplan Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::models::{BudgetGoals, Category};

const HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Applies a new percentage to one goal, leaving the other two untouched.
///
/// If the new value would push the three goals past 100, the edited value
/// is clamped to the headroom the other two leave (an asymmetric clamp,
/// not a proportional rebalance). The returned goals always satisfy
/// `needs + wants + savings <= 100`.
pub fn set_goal(goals: &BudgetGoals, category: Category, new_value: Decimal) -> BudgetGoals {
    let new_value = new_value.clamp(Decimal::ZERO, HUNDRED);
    let others = goals.sum() - goals.percent_for(category);
    let accepted = if others + new_value > HUNDRED {
        HUNDRED - others
    } else {
        new_value
    };
    let mut updated = *goals;
    match category {
        Category::Need => updated.needs_percent = accepted,
        Category::Want => updated.wants_percent = accepted,
        Category::Savings => updated.savings_percent = accepted,
    }
    updated
}

/// Currency amount a goal percentage allocates out of the monthly income,
/// rounded to 2 decimal places for display. Zero or unset income yields 0.
pub fn amount_for_goal(goal_percent: Decimal, monthly_income: Decimal) -> Decimal {
    if monthly_income <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (monthly_income * goal_percent / HUNDRED).round_dp(2)
}
