// Copyright (c) 2025 Ledgerkit Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::{session, store};
use anyhow::Result;
use chrono::Utc;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("login", sub)) => {
            let user = super::acting_user(conn, sub)?;
            let id = session::create(conn, user.id)?;
            println!("{}", id);
        }
        Some(("resolve", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            let user_id = session::resolve(conn, id)?;
            let user = store::user_by_id(conn, user_id)?;
            println!("{} <{}>", user.name, user.email);
        }
        Some(("logout", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            session::revoke(conn, id)?;
            println!("Session revoked");
        }
        Some(("purge", _)) => {
            let n = session::purge_expired(conn, Utc::now())?;
            println!("Purged {} expired session(s)", n);
        }
        _ => {}
    }
    Ok(())
}
