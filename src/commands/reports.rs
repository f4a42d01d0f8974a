// Copyright (c) 2025 Ledgerkit Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Dashboard aggregates. Handlers load a snapshot through the store
//! and hand it to `aggregate`; none of the arithmetic lives here.

use crate::aggregate;
use crate::store;
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_month, parse_year, pretty_table};
use anyhow::Result;
use chrono::Utc;
use rusqlite::Connection;
use serde_json::json;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("balance", sub)) => balance(conn, sub)?,
        Some(("spend", sub)) => spend(conn, sub)?,
        Some(("budget-status", sub)) => budget_status(conn, sub)?,
        Some(("portfolio", sub)) => portfolio(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn balance(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user = super::acting_user(conn, sub)?;
    let as_of = match sub.get_one::<String>("as-of") {
        Some(raw) => parse_date(raw)?,
        None => Utc::now().date_naive(),
    };
    let txns = store::transactions(conn, user.id)?;
    let bal = aggregate::balance(&txns, as_of);
    let payload = json!({ "as_of": as_of.to_string(), "balance": bal });
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &payload)? {
        println!("Balance as of {}: {}", as_of, fmt_money(&bal));
    }
    Ok(())
}

fn spend(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user = super::acting_user(conn, sub)?;
    let month = parse_month(sub.get_one::<String>("month").unwrap())?;
    let year = parse_year(sub.get_one::<String>("year").unwrap())?;
    let txns = store::transactions(conn, user.id)?;
    let spent = aggregate::monthly_spend(&txns, month, year);
    let payload = json!({ "month": month, "year": year, "spent": spent });
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &payload)? {
        println!("Spent in {}-{:02}: {}", year, month, fmt_money(&spent));
    }
    Ok(())
}

fn budget_status(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user = super::acting_user(conn, sub)?;
    let month = parse_month(sub.get_one::<String>("month").unwrap())?;
    let year = parse_year(sub.get_one::<String>("year").unwrap())?;
    let budgets = store::budgets(conn, user.id)?;
    let categories = store::categories(conn, user.id)?;
    let txns = store::transactions(conn, user.id)?;
    let lines = aggregate::budget_status(&budgets, &categories, &txns, month, year);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &lines)? {
        let rows = lines
            .into_iter()
            .map(|l| {
                vec![
                    l.category,
                    fmt_money(&l.budgeted),
                    fmt_money(&l.spent),
                    fmt_money(&l.remaining),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", "Budgeted", "Spent", "Remaining"], rows)
        );
    }
    Ok(())
}

fn portfolio(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user = super::acting_user(conn, sub)?;
    let invs = store::investments(conn, user.id)?;
    let value = aggregate::portfolio_value(&invs);
    let ret = aggregate::portfolio_return(&invs);
    let payload = json!({ "value": value, "total_return": ret });
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &payload)? {
        println!(
            "Portfolio value {} (total return {})",
            fmt_money(&value),
            fmt_money(&ret)
        );
    }
    Ok(())
}
