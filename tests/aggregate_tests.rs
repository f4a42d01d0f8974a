// Copyright (c) 2025 Ledgerkit Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use ledgerkit::models::{NewTransaction, NewUser};
use ledgerkit::{aggregate, db, store};
use rusqlite::Connection;
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn setup() -> (Connection, i64) {
    let conn = db::open_in_memory().unwrap();
    let user = store::insert_user(
        &conn,
        &NewUser {
            email: "trent@example.com".into(),
            name: "Trent".into(),
            password_hash: "hash".into(),
        },
    )
    .unwrap();
    (conn, user.id)
}

fn add_txn(conn: &Connection, user_id: i64, amount: &str, on: &str) {
    store::insert_transaction(
        conn,
        user_id,
        &NewTransaction {
            category_id: None,
            amount: dec(amount),
            description: format!("{} on {}", amount, on),
            date: date(on),
            is_recurring: None,
            ai_categorized: None,
            external_id: None,
        },
    )
    .unwrap();
}

#[test]
fn january_example_balance_and_spend() {
    let (conn, user_id) = setup();
    add_txn(&conn, user_id, "-50.00", "2025-01-05");
    add_txn(&conn, user_id, "-25.50", "2025-01-12");
    add_txn(&conn, user_id, "2000.00", "2025-01-31");

    let txns = store::transactions(&conn, user_id).unwrap();
    assert_eq!(aggregate::monthly_spend(&txns, 1, 2025), dec("75.50"));
    assert_eq!(aggregate::balance(&txns, date("2025-01-31")), dec("1924.50"));
}

#[test]
fn balance_is_idempotent_without_intervening_writes() {
    let (conn, user_id) = setup();
    add_txn(&conn, user_id, "-10.00", "2025-03-01");
    add_txn(&conn, user_id, "42.00", "2025-03-02");

    let as_of = date("2025-03-31");
    let first = aggregate::balance(&store::transactions(&conn, user_id).unwrap(), as_of);
    for _ in 0..3 {
        let again = aggregate::balance(&store::transactions(&conn, user_id).unwrap(), as_of);
        assert_eq!(first, again);
    }
    assert_eq!(first, dec("32.00"));
}

#[test]
fn empty_snapshot_yields_identity_values() {
    let (conn, user_id) = setup();
    let txns = store::transactions(&conn, user_id).unwrap();
    assert_eq!(aggregate::balance(&txns, date("2025-01-01")), Decimal::ZERO);
    assert_eq!(aggregate::monthly_spend(&txns, 1, 2025), Decimal::ZERO);
    let invs = store::investments(&conn, user_id).unwrap();
    assert_eq!(aggregate::portfolio_value(&invs), Decimal::ZERO);
    assert_eq!(aggregate::portfolio_return(&invs), Decimal::ZERO);
}
