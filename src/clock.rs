// Copyright (c) 2025 Pennyplan Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Local, NaiveDate};

/// Source of "today" for period navigation and the recurrence sweep.
/// Injectable so time-dependent behavior is testable without real delays.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Real clock in the user's local calendar; "today" must match the user's
/// wall-clock day, not UTC midnight.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date, for tests and `--date` overrides.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
