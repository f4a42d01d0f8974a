// Copyright (c) 2025 Ledgerkit Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::NewCategory;
use crate::store;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let user = super::acting_user(conn, sub)?;
            let budget_amount = match sub.get_one::<String>("budget") {
                Some(raw) => Some(parse_decimal(raw)?),
                None => None,
            };
            let cat = store::insert_category(
                conn,
                user.id,
                &NewCategory {
                    name: sub.get_one::<String>("name").unwrap().clone(),
                    emoji: sub.get_one::<String>("emoji").unwrap().clone(),
                    budget_amount,
                },
            )?;
            println!("Added category {} {} (id {})", cat.emoji, cat.name, cat.id);
        }
        Some(("list", sub)) => {
            let user = super::acting_user(conn, sub)?;
            let cats = store::categories(conn, user.id)?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &cats)? {
                let rows = cats
                    .into_iter()
                    .map(|c| {
                        vec![
                            c.id.to_string(),
                            c.emoji,
                            c.name,
                            fmt_money(&c.budget_amount),
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["Id", "", "Name", "Budget"], rows));
            }
        }
        Some(("rm", sub)) => {
            let user = super::acting_user(conn, sub)?;
            let id = *sub.get_one::<i64>("id").unwrap();
            store::delete_category(conn, user.id, id)?;
            println!("Removed category {}", id);
        }
        _ => {}
    }
    Ok(())
}
