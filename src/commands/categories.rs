// Copyright (c) 2025 Pennyplan Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::models::Category;
use crate::utils::pretty_table;

pub fn handle() -> Result<()> {
    let rows = Category::ALL
        .iter()
        .map(|c| {
            vec![
                c.as_str().to_string(),
                c.suggested_subcategories().join(", "),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Category", "Suggested Subcategories"], rows)
    );
    Ok(())
}
