// Copyright (c) 2025 Ledgerkit Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store;
use crate::validate;
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;

/// Integrity checks over one user's data. Each finding is a stored
/// state that the write paths should have made impossible.
pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let user = super::acting_user(conn, m)?;
    let mut rows = Vec::new();

    // 1) Transactions pointing at a category the user does not own
    let mut stmt = conn.prepare(
        "SELECT t.id, t.category_id FROM transactions t
         JOIN categories c ON t.category_id=c.id
         WHERE t.user_id=?1 AND c.user_id != ?1",
    )?;
    let mut cur = stmt.query([user.id])?;
    while let Some(r) = cur.next()? {
        let tid: i64 = r.get(0)?;
        let cid: i64 = r.get(1)?;
        rows.push(vec![
            "cross_tenant_category".into(),
            format!("transaction {} -> category {}", tid, cid),
        ]);
    }

    // 2) Completed goals short of their target
    for g in store::savings_goals(conn, user.id)? {
        if g.is_completed && g.current_amount < g.target_amount {
            rows.push(vec![
                "completed_goal_below_target".into(),
                format!("goal {} at {} of {}", g.id, g.current_amount, g.target_amount),
            ]);
        }
    }

    // 3) Stale investment returns
    for i in store::investments(conn, user.id)? {
        let expected = validate::investment_return(i.shares, i.avg_cost_per_share, i.current_value);
        if i.total_return != expected {
            rows.push(vec![
                "stale_total_return".into(),
                format!("investment {} stored {} expected {}", i.id, i.total_return, expected),
            ]);
        }
    }

    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
