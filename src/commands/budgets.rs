// Copyright (c) 2025 Ledgerkit Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::NewBudget;
use crate::store;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, parse_month, parse_year, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let user = super::acting_user(conn, sub)?;
            let draft = NewBudget {
                category_id: *sub.get_one::<i64>("category-id").unwrap(),
                amount: parse_decimal(sub.get_one::<String>("amount").unwrap())?,
                month: parse_month(sub.get_one::<String>("month").unwrap())?,
                year: parse_year(sub.get_one::<String>("year").unwrap())?,
            };
            let b = store::insert_budget(conn, user.id, &draft)?;
            println!(
                "Budget set: category {} = {} for {}-{:02}",
                b.category_id,
                fmt_money(&b.amount),
                b.year,
                b.month
            );
        }
        Some(("list", sub)) => {
            let user = super::acting_user(conn, sub)?;
            let budgets = store::budgets(conn, user.id)?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &budgets)? {
                let rows = budgets
                    .into_iter()
                    .map(|b| {
                        vec![
                            b.id.to_string(),
                            format!("{}-{:02}", b.year, b.month),
                            b.category_id.to_string(),
                            fmt_money(&b.amount),
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["Id", "Month", "Category", "Amount"], rows));
            }
        }
        Some(("rm", sub)) => {
            let user = super::acting_user(conn, sub)?;
            let id = *sub.get_one::<i64>("id").unwrap();
            store::delete_budget(conn, user.id, id)?;
            println!("Removed budget {}", id);
        }
        _ => {}
    }
    Ok(())
}
