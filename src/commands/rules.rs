// Copyright (c) 2025 Ledgerkit Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{NewSavingsRule, SavingsRuleType};
use crate::store;
use crate::utils::{maybe_print_json, parse_decimal, pretty_table};
use anyhow::{anyhow, Result};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let user = super::acting_user(conn, sub)?;
            let type_raw = sub.get_one::<String>("type").unwrap();
            let r#type = SavingsRuleType::parse(type_raw)
                .ok_or_else(|| anyhow!("Unknown rule type '{}' (use percentage|fixed|round_up)", type_raw))?;
            let rule = store::insert_savings_rule(
                conn,
                user.id,
                &NewSavingsRule {
                    name: sub.get_one::<String>("name").unwrap().clone(),
                    r#type,
                    value: parse_decimal(sub.get_one::<String>("value").unwrap())?,
                    is_active: None,
                },
            )?;
            println!("Added rule '{}' ({} {})", rule.name, rule.r#type.as_str(), rule.value);
        }
        Some(("list", sub)) => {
            let user = super::acting_user(conn, sub)?;
            let rules = store::savings_rules(conn, user.id)?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rules)? {
                let rows = rules
                    .into_iter()
                    .map(|r| {
                        vec![
                            r.id.to_string(),
                            r.name,
                            r.r#type.as_str().to_string(),
                            r.value.to_string(),
                            if r.is_active { "active".into() } else { "off".into() },
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["Id", "Name", "Type", "Value", "State"], rows));
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
    store::set_rule_active(conn, user.id, id, active)?;
    println!("Rule {} {}", id, if active { "enabled" } else { "disabled" });
    Ok(())
}
