// Copyright (c) 2025 Ledgerkit Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{InsightType, NewInsight, Priority};
use crate::store;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::{anyhow, Result};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let user = super::acting_user(conn, sub)?;
            let type_raw = sub.get_one::<String>("type").unwrap();
            let r#type = InsightType::parse(type_raw)
                .ok_or_else(|| anyhow!("Unknown insight type '{}' (use trend|alert|recommendation)", type_raw))?;
            let priority = match sub.get_one::<String>("priority") {
                Some(raw) => Some(
                    Priority::parse(raw)
                        .ok_or_else(|| anyhow!("Unknown priority '{}' (use high|medium|low)", raw))?,
                ),
                None => None,
            };
            let insight = store::insert_insight(
                conn,
                user.id,
                &NewInsight {
                    r#type,
                    title: sub.get_one::<String>("title").unwrap().clone(),
                    description: sub.get_one::<String>("description").unwrap().clone(),
                    priority,
                },
            )?;
            println!("Stored {} insight '{}' (id {})", insight.r#type.as_str(), insight.title, insight.id);
        }
        Some(("list", sub)) => {
            let user = super::acting_user(conn, sub)?;
            let items = store::insights(conn, user.id, sub.get_flag("unread"))?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &items)? {
                let rows = items
                    .into_iter()
                    .map(|i| {
                        vec![
                            i.id.to_string(),
                            i.r#type.as_str().to_string(),
                            i.priority.as_str().to_string(),
                            i.title,
                            if i.is_read { String::new() } else { "unread".into() },
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["Id", "Type", "Priority", "Title", ""], rows));
            }
        }
        Some(("read", sub)) => {
            let user = super::acting_user(conn, sub)?;
            let id = *sub.get_one::<i64>("id").unwrap();
            store::mark_insight_read(conn, user.id, id)?;
            println!("Marked insight {} read", id);
        }
        _ => {}
    }
    Ok(())
}
