// Copyright (c) 2025 Pennyplan Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use pennyplan::income::{is_supported, monthly_income};
use pennyplan::models::{IncomeFrequency, IncomeProfile};

fn dec(v: i64) -> Decimal {
    Decimal::from(v)
}

#[test]
fn weekly_uses_flat_four_weeks_per_month() {
    assert_eq!(monthly_income(dec(100), IncomeFrequency::Weekly), dec(400));
}

#[test]
fn biweekly_doubles() {
    assert_eq!(monthly_income(dec(750), IncomeFrequency::Biweekly), dec(1500));
}

#[test]
fn monthly_passes_through() {
    assert_eq!(monthly_income(dec(3000), IncomeFrequency::Monthly), dec(3000));
}

#[test]
fn quarterly_divides_by_three() {
    assert_eq!(monthly_income(dec(120), IncomeFrequency::Quarterly), dec(40));
}

#[test]
fn annually_divides_by_twelve_and_rounds() {
    assert_eq!(monthly_income(dec(1200), IncomeFrequency::Annually), dec(100));
    // 1000 / 12 = 83.333... -> 83.33
    assert_eq!(
        monthly_income(dec(1000), IncomeFrequency::Annually),
        Decimal::new(8333, 2)
    );
}

#[test]
fn semimonthly_is_unsupported_and_resolves_to_zero() {
    assert!(!is_supported(IncomeFrequency::Semimonthly));
    assert_eq!(
        monthly_income(dec(500), IncomeFrequency::Semimonthly),
        Decimal::ZERO
    );
}

#[test]
fn normalization_is_deterministic() {
    for _ in 0..3 {
        assert_eq!(monthly_income(dec(100), IncomeFrequency::Weekly), dec(400));
    }
}

#[test]
fn profile_derives_monthly_income_instead_of_storing_it() {
    let mut profile = IncomeProfile {
        amount: dec(100),
        frequency: IncomeFrequency::Weekly,
    };
    assert_eq!(profile.monthly_income(), dec(400));
    profile.frequency = IncomeFrequency::Monthly;
    assert_eq!(profile.monthly_income(), dec(100));
}

#[test]
fn frequency_strings_round_trip() {
    for freq in [
        IncomeFrequency::Weekly,
        IncomeFrequency::Biweekly,
        IncomeFrequency::Semimonthly,
        IncomeFrequency::Monthly,
        IncomeFrequency::Quarterly,
        IncomeFrequency::Annually,
    ] {
        assert_eq!(IncomeFrequency::parse(freq.as_str()), Some(freq));
    }
    assert_eq!(IncomeFrequency::parse("fortnightly"), None);
}
