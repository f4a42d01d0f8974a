// Copyright (c) 2025 Ledgerkit Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod users;
pub mod sessions;
pub mod categories;
pub mod transactions;
pub mod budgets;
pub mod goals;
pub mod rules;
pub mod investments;
pub mod insights;
pub mod connections;
pub mod reports;
pub mod exporter;
pub mod doctor;

use anyhow::Result;
use rusqlite::Connection;

use crate::models::User;
use crate::store;

/// Resolves `--user EMAIL` to the acting user. Every handler scopes
/// its queries to this user's id.
pub(crate) fn acting_user(conn: &Connection, sub: &clap::ArgMatches) -> Result<User> {
    let email = sub.get_one::<String>("user").unwrap();
    Ok(store::user_by_email(conn, email)?)
}
