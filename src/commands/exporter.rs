// Copyright (c) 2025 Ledgerkit Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store;
use anyhow::{bail, Result};
use rusqlite::Connection;
use serde_json::json;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(conn, sub),
        _ => Ok(()),
    }
}

fn export_transactions(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user = super::acting_user(conn, sub)?;
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let txns = store::transactions(conn, user.id)?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "date",
                "amount",
                "description",
                "category_id",
                "is_recurring",
                "external_id",
            ])?;
            for t in &txns {
                wtr.write_record([
                    t.date.to_string(),
                    t.amount.to_string(),
                    t.description.clone(),
                    t.category_id.map(|c| c.to_string()).unwrap_or_default(),
                    t.is_recurring.to_string(),
                    t.external_id.clone().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = txns
                .iter()
                .map(|t| {
                    json!({
                        "date": t.date.to_string(),
                        "amount": t.amount,
                        "description": t.description,
                        "category_id": t.category_id,
                        "is_recurring": t.is_recurring,
                        "external_id": t.external_id,
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => bail!("unknown format: {fmt} (use csv|json)"),
    }
    println!("Exported {} transaction(s) to {}", txns.len(), out);
    Ok(())
}
