// Copyright (c) 2025 Ledgerkit Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::NewBankConnection;
use crate::store;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let user = super::acting_user(conn, sub)?;
            let account_ids = sub
                .get_one::<String>("accounts")
                .map(|s| s.split(',').map(|a| a.trim().to_string()).collect())
                .unwrap_or_default();
            let bc = store::insert_bank_connection(
                conn,
                user.id,
                &NewBankConnection {
                    external_item_id: sub.get_one::<String>("item-id").unwrap().clone(),
                    access_token: sub.get_one::<String>("token").unwrap().clone(),
                    institution_name: sub.get_one::<String>("institution").unwrap().clone(),
                    account_ids,
                },
            )?;
            println!("Linked '{}' (id {})", bc.institution_name, bc.id);
        }
        Some(("list", sub)) => {
            let user = super::acting_user(conn, sub)?;
            // Listing never includes the access token.
            let conns = store::bank_connections(conn, user.id)?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &conns)? {
                let rows = conns
                    .into_iter()
                    .map(|c| {
                        vec![
                            c.id.to_string(),
                            c.institution_name,
                            c.account_ids.len().to_string(),
                            if c.is_active { "active".into() } else { "off".into() },
                            c.last_sync.unwrap_or_default(),
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["Id", "Institution", "Accounts", "State", "Last Sync"], rows)
                );
            }
        }
        Some(("enable", sub)) => set_active(conn, sub, true)?,
        Some(("disable", sub)) => set_active(conn, sub, false)?,
        _ => {}
    }
    Ok(())
}

fn set_active(conn: &Connection, sub: &clap::ArgMatches, active: bool) -> Result<()> {
    let user = super::acting_user(conn, sub)?;
    let id = *sub.get_one::<i64>("id").unwrap();
    store::set_connection_active(conn, user.id, id, active)?;
    println!("Connection {} {}", id, if active { "enabled" } else { "disabled" });
    Ok(())
}
