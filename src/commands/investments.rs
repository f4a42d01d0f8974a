// Copyright (c) 2025 Ledgerkit Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::NewInvestment;
use crate::store;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let user = super::acting_user(conn, sub)?;
            let inv = store::insert_investment(
                conn,
                user.id,
                &NewInvestment {
                    symbol: sub.get_one::<String>("symbol").unwrap().clone(),
                    name: sub.get_one::<String>("name").unwrap().clone(),
                    shares: parse_decimal(sub.get_one::<String>("shares").unwrap())?,
                    avg_cost_per_share: parse_decimal(sub.get_one::<String>("avg-cost").unwrap())?,
                    current_value: parse_decimal(sub.get_one::<String>("value").unwrap())?,
                },
            )?;
            println!(
                "Added {} x {} @ {} (return {})",
                inv.shares,
                inv.symbol,
                fmt_money(&inv.avg_cost_per_share),
                fmt_money(&inv.total_return)
            );
        }
        Some(("list", sub)) => {
            let user = super::acting_user(conn, sub)?;
            let invs = store::investments(conn, user.id)?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &invs)? {
                let rows = invs
                    .into_iter()
                    .map(|i| {
                        vec![
                            i.id.to_string(),
                            i.symbol,
                            i.name,
                            format!("{:.6}", i.shares),
                            fmt_money(&i.avg_cost_per_share),
                            fmt_money(&i.current_value),
                            fmt_money(&i.total_return),
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(
                        &["Id", "Symbol", "Name", "Shares", "Avg Cost", "Value", "Return"],
                        rows
                    )
                );
            }
        }
        Some(("set-value", sub)) => {
            let user = super::acting_user(conn, sub)?;
            let id = *sub.get_one::<i64>("id").unwrap();
            let value = parse_decimal(sub.get_one::<String>("value").unwrap())?;
            let inv = store::update_investment_value(conn, user.id, id, value)?;
            println!(
                "{} marked at {} (return {})",
                inv.symbol,
                fmt_money(&inv.current_value),
                fmt_money(&inv.total_return)
            );
        }
        Some(("rm", sub)) => {
            let user = super::acting_user(conn, sub)?;
            let id = *sub.get_one::<i64>("id").unwrap();
            store::delete_investment(conn, user.id, id)?;
            println!("Removed investment {}", id);
        }
        _ => {}
    }
    Ok(())
}
