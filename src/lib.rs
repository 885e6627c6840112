// Copyright (c) 2025 Pennyplan Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod aggregate;
pub mod cli;
pub mod clock;
pub mod commands;
pub mod db;
pub mod goals;
pub mod income;
pub mod ledger;
pub mod models;
pub mod recurring;
pub mod store;
pub mod utils;
