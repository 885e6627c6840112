// Copyright (c) 2025 Pennyplan Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use pennyplan::goals::{amount_for_goal, set_goal};
use pennyplan::models::{BudgetGoals, Category};

fn dec(v: i64) -> Decimal {
    Decimal::from(v)
}

#[test]
fn defaults_are_fifty_thirty_twenty() {
    let goals = BudgetGoals::default();
    assert_eq!(goals.needs_percent, dec(50));
    assert_eq!(goals.wants_percent, dec(30));
    assert_eq!(goals.savings_percent, dec(20));
    assert_eq!(goals.sum(), dec(100));
}

#[test]
fn over_allocation_clamps_edited_goal_only() {
    // needs=90 with wants=30, savings=20 leaves headroom 100-30-20=50
    let goals = BudgetGoals::default();
    let updated = set_goal(&goals, Category::Need, dec(90));
    assert_eq!(updated.needs_percent, dec(50));
    assert_eq!(updated.wants_percent, dec(30));
    assert_eq!(updated.savings_percent, dec(20));
}

#[test]
fn value_within_headroom_is_accepted_as_is() {
    let goals = BudgetGoals::default();
    let updated = set_goal(&goals, Category::Want, dec(10));
    assert_eq!(updated.wants_percent, dec(10));
    assert_eq!(updated.sum(), dec(80));
}

#[test]
fn sum_invariant_holds_over_any_edit_sequence() {
    let mut goals = BudgetGoals::default();
    let edits = [
        (Category::Need, 90),
        (Category::Want, 100),
        (Category::Savings, 75),
        (Category::Need, 0),
        (Category::Want, 60),
        (Category::Savings, 100),
        (Category::Need, 33),
    ];
    for (category, value) in edits {
        goals = set_goal(&goals, category, dec(value));
        assert!(goals.sum() <= dec(100), "sum exceeded 100 after {:?}", category);
        assert!(goals.percent_for(category) >= Decimal::ZERO);
    }
}

#[test]
fn out_of_range_input_is_clamped_defensively() {
    let goals = BudgetGoals::default();
    let updated = set_goal(&goals, Category::Savings, dec(-10));
    assert_eq!(updated.savings_percent, Decimal::ZERO);
}

#[test]
fn amount_for_goal_rounds_to_cents() {
    assert_eq!(amount_for_goal(dec(50), dec(3000)), dec(1500));
    assert_eq!(amount_for_goal(dec(30), dec(3000)), dec(900));
    assert_eq!(amount_for_goal(dec(20), dec(3000)), dec(600));
    // 33% of 1000.01 = 330.0033, rounded to cents for display
    assert_eq!(
        amount_for_goal(dec(33), Decimal::new(100001, 2)),
        Decimal::new(33000, 2)
    );
}

#[test]
fn zero_or_unset_income_yields_zero_amount() {
    assert_eq!(amount_for_goal(dec(50), Decimal::ZERO), Decimal::ZERO);
    assert_eq!(amount_for_goal(dec(50), dec(-100)), Decimal::ZERO);
}
