// Copyright (c) 2025 Pennyplan Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Closed classification for every transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Need,
    Want,
    Savings,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Need, Category::Want, Category::Savings];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Need => "Need",
            Category::Want => "Want",
            Category::Savings => "Savings",
        }
    }

    pub fn parse(s: &str) -> Option<Category> {
        match s {
            "Need" => Some(Category::Need),
            "Want" => Some(Category::Want),
            "Savings" => Some(Category::Savings),
            _ => None,
        }
    }

    /// Suggested subcategory names for data entry. Display hints only;
    /// a transaction's subcategory is free-form and never validated
    /// against this list.
    pub fn suggested_subcategories(&self) -> &'static [&'static str] {
        match self {
            Category::Need => &[
                "Groceries",
                "Utilities",
                "Rent",
                "Transportation",
                "Healthcare",
                "Other",
            ],
            Category::Want => &[
                "Dining Out",
                "Entertainment",
                "Shopping",
                "Travel",
                "Hobbies",
                "Other",
            ],
            Category::Savings => &["Emergency Fund", "Retirement", "Investments", "Other"],
        }
    }
}

/// How often a recurring transaction repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Yearly => "Yearly",
        }
    }

    pub fn parse(s: &str) -> Option<Frequency> {
        match s.to_lowercase().as_str() {
            "daily" => Some(Frequency::Daily),
            "weekly" => Some(Frequency::Weekly),
            "monthly" => Some(Frequency::Monthly),
            "yearly" => Some(Frequency::Yearly),
            _ => None,
        }
    }
}

/// Pay period of the declared income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomeFrequency {
    Weekly,
    Biweekly,
    Semimonthly,
    Monthly,
    Quarterly,
    Annually,
}

impl IncomeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncomeFrequency::Weekly => "weekly",
            IncomeFrequency::Biweekly => "biweekly",
            IncomeFrequency::Semimonthly => "semimonthly",
            IncomeFrequency::Monthly => "monthly",
            IncomeFrequency::Quarterly => "quarterly",
            IncomeFrequency::Annually => "annually",
        }
    }

    pub fn parse(s: &str) -> Option<IncomeFrequency> {
        match s.to_lowercase().as_str() {
            "weekly" => Some(IncomeFrequency::Weekly),
            "biweekly" => Some(IncomeFrequency::Biweekly),
            "semimonthly" => Some(IncomeFrequency::Semimonthly),
            "monthly" => Some(IncomeFrequency::Monthly),
            "quarterly" => Some(IncomeFrequency::Quarterly),
            "annually" | "yearly" => Some(IncomeFrequency::Annually),
            _ => None,
        }
    }
}

/// A single financial event.
///
/// Invariant: `recurrence_frequency` is `Some` if and only if
/// `is_recurring` is true. The store enforces this at decode time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub name: String,
    pub category: Category,
    pub subcategory: String,
    pub date: NaiveDate,
    pub notes: String,
    pub amount: Decimal,
    pub is_recurring: bool,
    pub recurrence_frequency: Option<Frequency>,
}

/// Target allocation percentages. The three goals always sum to at most
/// 100; the remainder is implicitly unallocated income.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetGoals {
    pub needs_percent: Decimal,
    pub wants_percent: Decimal,
    pub savings_percent: Decimal,
}

impl Default for BudgetGoals {
    fn default() -> Self {
        BudgetGoals {
            needs_percent: Decimal::from(50),
            wants_percent: Decimal::from(30),
            savings_percent: Decimal::from(20),
        }
    }
}

impl BudgetGoals {
    pub fn percent_for(&self, category: Category) -> Decimal {
        match category {
            Category::Need => self.needs_percent,
            Category::Want => self.wants_percent,
            Category::Savings => self.savings_percent,
        }
    }

    pub fn sum(&self) -> Decimal {
        self.needs_percent + self.wants_percent + self.savings_percent
    }
}

/// The user's income declaration. Monthly income is always derived from
/// the amount and frequency, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncomeProfile {
    pub amount: Decimal,
    pub frequency: IncomeFrequency,
}

impl Default for IncomeProfile {
    fn default() -> Self {
        IncomeProfile {
            amount: Decimal::ZERO,
            frequency: IncomeFrequency::Monthly,
        }
    }
}

impl IncomeProfile {
    pub fn monthly_income(&self) -> Decimal {
        crate::income::monthly_income(self.amount, self.frequency)
    }
}

/// Per-period sums over transactions. Derived on demand, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateTotals {
    pub needs_total: Decimal,
    pub wants_total: Decimal,
    pub savings_total: Decimal,
    /// Monthly income minus all category totals. Negative means over budget;
    /// that is a displayable state, not an error.
    pub remaining: Decimal,
}

impl AggregateTotals {
    pub fn total_for(&self, category: Category) -> Decimal {
        match category {
            Category::Need => self.needs_total,
            Category::Want => self.wants_total,
            Category::Savings => self.savings_total,
        }
    }

    pub fn spent(&self) -> Decimal {
        self.needs_total + self.wants_total + self.savings_total
    }
}
