// Copyright (c) 2025 Pennyplan Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

use crate::aggregate::{self, PeriodFilter};
use crate::goals;
use crate::models::{AggregateTotals, BudgetGoals, Category, IncomeFrequency, IncomeProfile,
    Transaction};
use crate::recurring;
use crate::store::{BudgetProfile, Store, StoreError};

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("transaction {0} not found")]
    NotFound(Uuid),
    #[error(transparent)]
    Store(#[from] StoreError),
}

type Subscriber = Box<dyn Fn(&AggregateTotals) + Send>;

/// In-memory state container for one user's budget: the transaction
/// collection, goals, and income profile, with explicit change
/// notifications to subscribers.
///
/// All mutations are write-through: the store is updated first and the
/// in-memory snapshot changes only on confirmed success, so a failed
/// persistence call leaves the container untouched. The container can be
/// rebuilt from the store at any time with [`Ledger::load`].
pub struct Ledger {
    transactions: Vec<Transaction>,
    goals: BudgetGoals,
    income: IncomeProfile,
    subscribers: Vec<Subscriber>,
}

impl Ledger {
    pub fn load(store: &dyn Store) -> Result<Self, StoreError> {
        let profile = store.load_profile()?;
        let transactions = store.load_transactions()?;
        Ok(Ledger {
            transactions,
            goals: profile.goals,
            income: profile.income,
            subscribers: Vec::new(),
        })
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn goals(&self) -> &BudgetGoals {
        &self.goals
    }

    pub fn income(&self) -> &IncomeProfile {
        &self.income
    }

    pub fn monthly_income(&self) -> Decimal {
        self.income.monthly_income()
    }

    /// Registers a callback invoked with fresh unfiltered totals after
    /// every successful mutation.
    pub fn subscribe(&mut self, subscriber: impl Fn(&AggregateTotals) + Send + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Recomputes totals for a period. Pure over the current snapshot:
    /// calling it twice without a mutation in between yields identical
    /// results.
    pub fn totals(&self, filter: PeriodFilter) -> AggregateTotals {
        aggregate::totals(&self.transactions, filter, self.monthly_income())
    }

    pub fn add_transaction(
        &mut self,
        store: &dyn Store,
        txn: Transaction,
    ) -> Result<(), LedgerError> {
        store.save_transaction(&txn)?;
        self.transactions.push(txn);
        self.notify();
        Ok(())
    }

    /// Full replace by id. Editing an id absent from the set is a no-op
    /// with an explicit not-found error.
    pub fn edit_transaction(
        &mut self,
        store: &dyn Store,
        txn: Transaction,
    ) -> Result<(), LedgerError> {
        let Some(slot) = self.transactions.iter_mut().find(|t| t.id == txn.id) else {
            return Err(LedgerError::NotFound(txn.id));
        };
        store.save_transaction(&txn)?;
        *slot = txn;
        self.notify();
        Ok(())
    }

    pub fn delete_transaction(&mut self, store: &dyn Store, id: Uuid) -> Result<(), LedgerError> {
        let Some(pos) = self.transactions.iter().position(|t| t.id == id) else {
            return Err(LedgerError::NotFound(id));
        };
        store.delete_transaction(id)?;
        self.transactions.remove(pos);
        self.notify();
        Ok(())
    }

    /// Applies the asymmetric goal clamp and persists the profile.
    /// Returns the updated goals.
    pub fn set_goal(
        &mut self,
        store: &dyn Store,
        category: Category,
        new_value: Decimal,
    ) -> Result<BudgetGoals, LedgerError> {
        let updated = goals::set_goal(&self.goals, category, new_value);
        store.save_profile(&BudgetProfile {
            income: self.income,
            goals: updated,
        })?;
        self.goals = updated;
        self.notify();
        Ok(updated)
    }

    pub fn set_income(
        &mut self,
        store: &dyn Store,
        amount: Decimal,
        frequency: IncomeFrequency,
    ) -> Result<(), LedgerError> {
        let income = IncomeProfile { amount, frequency };
        store.save_profile(&BudgetProfile {
            income,
            goals: self.goals,
        })?;
        self.income = income;
        self.notify();
        Ok(())
    }

    /// Runs one recurrence sweep: every due series is closed out and
    /// rolled forward one period. Persistence failures skip the affected
    /// series with a stderr warning and never abort the sweep. Returns
    /// the number of series expanded.
    pub fn run_sweep(&mut self, store: &dyn Store, today: NaiveDate) -> usize {
        let mut expanded = 0;
        for exp in recurring::due_expansions(&self.transactions, today) {
            if let Err(e) = store
                .save_transaction(&exp.created)
                .and_then(|_| store.save_transaction(&exp.closed))
            {
                eprintln!(
                    "warning: skipped recurring series '{}': {}",
                    exp.closed.name, e
                );
                continue;
            }
            if let Some(slot) = self.transactions.iter_mut().find(|t| t.id == exp.closed.id) {
                *slot = exp.closed;
            }
            self.transactions.push(exp.created);
            expanded += 1;
        }
        if expanded > 0 {
            self.notify();
        }
        expanded
    }

    fn notify(&self) {
        let totals = self.totals(PeriodFilter::All);
        for subscriber in &self.subscribers {
            subscriber(&totals);
        }
    }
}
