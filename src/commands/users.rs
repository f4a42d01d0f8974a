// Copyright (c) 2025 Ledgerkit Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::NewUser;
use crate::store;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let draft = NewUser {
                email: sub.get_one::<String>("email").unwrap().clone(),
                name: sub.get_one::<String>("name").unwrap().clone(),
                password_hash: sub.get_one::<String>("password-hash").unwrap().clone(),
            };
            let user = store::insert_user(conn, &draft)?;
            println!("Added user '{}' <{}> (id {})", user.name, user.email, user.id);
        }
        Some(("show", sub)) => {
            let user = super::acting_user(conn, sub)?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &user)? {
                println!(
                    "{}",
                    pretty_table(
                        &["Id", "Email", "Name"],
                        vec![vec![user.id.to_string(), user.email, user.name]],
                    )
                );
            }
        }
        _ => {}
    }
    Ok(())
}
