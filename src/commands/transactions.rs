// Copyright (c) 2025 Ledgerkit Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{NewTransaction, Transaction};
use crate::store;
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::Result;
use chrono::Datelike;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => {
            let user = super::acting_user(conn, sub)?;
            let id = *sub.get_one::<i64>("id").unwrap();
            store::delete_transaction(conn, user.id, id)?;
            println!("Removed transaction {}", id);
        }
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user = super::acting_user(conn, sub)?;
    let draft = NewTransaction {
        category_id: sub.get_one::<i64>("category-id").copied(),
        amount: parse_decimal(sub.get_one::<String>("amount").unwrap())?,
        description: sub.get_one::<String>("description").unwrap().clone(),
        date: parse_date(sub.get_one::<String>("date").unwrap())?,
        is_recurring: Some(sub.get_flag("recurring")),
        ai_categorized: None,
        external_id: sub.get_one::<String>("external-id").cloned(),
    };
    let tx = store::insert_transaction(conn, user.id, &draft)?;
    println!(
        "Recorded {} on {} '{}' (id {})",
        fmt_money(&tx.amount),
        tx.date,
        tx.description,
        tx.id
    );
    Ok(())
}

/// Filtered view of the user's transactions, newest first.
pub fn query_rows(
    conn: &Connection,
    user_id: i64,
    month: Option<u32>,
    year: Option<i32>,
    limit: Option<usize>,
) -> Result<Vec<Transaction>> {
    let mut txns = store::transactions(conn, user_id)?;
    if let (Some(m), Some(y)) = (month, year) {
        txns.retain(|t| t.date.month() == m && t.date.year() == y);
    }
    txns.reverse();
    if let Some(n) = limit {
        txns.truncate(n);
    }
    Ok(txns)
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user = super::acting_user(conn, sub)?;
    let txns = query_rows(
        conn,
        user.id,
        sub.get_one::<u32>("month").copied(),
        sub.get_one::<i32>("year").copied(),
        sub.get_one::<usize>("limit").copied(),
    )?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &txns)? {
        let rows = txns
            .into_iter()
            .map(|t| {
                vec![
                    t.id.to_string(),
                    t.date.to_string(),
                    t.description,
                    fmt_money(&t.amount),
                    t.category_id.map(|c| c.to_string()).unwrap_or_default(),
                    if t.is_recurring { "yes".into() } else { String::new() },
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Description", "Amount", "Category", "Recurring"],
                rows
            )
        );
    }
    Ok(())
}
