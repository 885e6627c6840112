// Copyright (c) 2025 Pennyplan Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::models::IncomeFrequency;

/// Converts a per-period income figure into a canonical monthly figure,
/// rounded to 2 decimal places.
///
/// The weekly multiplier is a flat 4, not 4.33. Semimonthly income has
/// no monthly conversion and resolves to 0.00.
pub fn monthly_income(amount: Decimal, frequency: IncomeFrequency) -> Decimal {
    let monthly = match frequency {
        IncomeFrequency::Weekly => amount * Decimal::from(4),
        IncomeFrequency::Biweekly => amount * Decimal::from(2),
        IncomeFrequency::Monthly => amount,
        IncomeFrequency::Quarterly => amount / Decimal::from(3),
        IncomeFrequency::Annually => amount / Decimal::from(12),
        IncomeFrequency::Semimonthly => Decimal::ZERO,
    };
    monthly.round_dp(2)
}

/// True when the frequency carries a defined monthly conversion.
pub fn is_supported(frequency: IncomeFrequency) -> bool {
    frequency != IncomeFrequency::Semimonthly
}
