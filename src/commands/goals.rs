// Copyright (c) 2025 Ledgerkit Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate;
use crate::models::NewSavingsGoal;
use crate::store;
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::Result;
use chrono::Utc;
use rusqlite::Connection;

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let user = super::acting_user(conn, sub)?;
            let target_date = match sub.get_one::<String>("target-date") {
                Some(raw) => Some(parse_date(raw)?),
                None => None,
            };
            let goal = store::insert_savings_goal(
                conn,
                user.id,
                &NewSavingsGoal {
                    name: sub.get_one::<String>("name").unwrap().clone(),
                    target_amount: parse_decimal(sub.get_one::<String>("target").unwrap())?,
                    target_date,
                },
            )?;
            println!(
                "Added goal '{}' targeting {} (id {})",
                goal.name,
                fmt_money(&goal.target_amount),
                goal.id
            );
        }
        Some(("list", sub)) => list(conn, sub)?,
        Some(("fund", sub)) => {
            let user = super::acting_user(conn, sub)?;
            let id = *sub.get_one::<i64>("id").unwrap();
            let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
            let date = parse_date(sub.get_one::<String>("date").unwrap())?;
            let goal = store::fund_goal(conn, user.id, id, amount, date)?;
            println!(
                "Funded '{}' with {}; now {} of {}{}",
                goal.name,
                fmt_money(&amount),
                fmt_money(&goal.current_amount),
                fmt_money(&goal.target_amount),
                if goal.is_completed { " - completed!" } else { "" }
            );
        }
        Some(("set-amount", sub)) => {
            let user = super::acting_user(conn, sub)?;
            let id = *sub.get_one::<i64>("id").unwrap();
            let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
            let goal = store::set_goal_amount(conn, user.id, id, amount)?;
            println!(
                "Goal '{}' now at {} of {}{}",
                goal.name,
                fmt_money(&goal.current_amount),
                fmt_money(&goal.target_amount),
                if goal.is_completed { " - completed!" } else { "" }
            );
        }
        Some(("progress", sub)) => {
            let user = super::acting_user(conn, sub)?;
            let id = *sub.get_one::<i64>("id").unwrap();
            let goal = store::savings_goal(conn, user.id, id)?;
            let p = aggregate::goal_progress(&goal, Utc::now().date_naive());
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &p)? {
                println!(
                    "{}",
                    pretty_table(
                        &["Goal", "Complete", "Remaining", "Overdue"],
                        vec![vec![
                            goal.name,
                            format!("{:.1}%", p.percent_complete * rust_decimal::Decimal::ONE_HUNDRED),
                            fmt_money(&p.remaining),
                            if p.is_overdue { "yes".into() } else { "no".into() },
                        ]],
                    )
                );
            }
        }
        _ => {}
    }
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user = super::acting_user(conn, sub)?;
    let goals = store::savings_goals(conn, user.id)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &goals)? {
        let today = Utc::now().date_naive();
        let rows = goals
            .iter()
            .map(|g| {
                let p = aggregate::goal_progress(g, today);
                vec![
                    g.id.to_string(),
                    g.name.clone(),
                    fmt_money(&g.current_amount),
                    fmt_money(&g.target_amount),
                    format!("{:.1}%", p.percent_complete * rust_decimal::Decimal::ONE_HUNDRED),
                    g.target_date.map(|d| d.to_string()).unwrap_or_default(),
                    if g.is_completed { "done".into() } else { String::new() },
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Name", "Saved", "Target", "Progress", "By", "Status"],
                rows
            )
        );
    }
    Ok(())
}
