// Copyright (c) 2025 Ledgerkit Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use ledgerkit::models::{NewSavingsGoal, NewUser};
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
            email: "saver@example.com".into(),
            name: "Saver".into(),
            password_hash: "hash".into(),
        },
    )
    .unwrap();
    (conn, user.id)
}

fn add_goal(conn: &Connection, user_id: i64, target: &str) -> i64 {
    store::insert_savings_goal(
        conn,
        user_id,
        &NewSavingsGoal {
            name: "Emergency fund".into(),
            target_amount: dec(target),
            target_date: None,
        },
    )
    .unwrap()
    .id
}

#[test]
fn completion_flips_exactly_at_target() {
    let (mut conn, user_id) = setup();
    let goal_id = add_goal(&conn, user_id, "1000.00");

    let g = store::set_goal_amount(&conn, user_id, goal_id, dec("999.99")).unwrap();
    assert!(!g.is_completed);

    let g = store::fund_goal(&mut conn, user_id, goal_id, dec("0.01"), date("2025-02-01")).unwrap();
    assert!(g.is_completed);
    assert_eq!(g.current_amount, dec("1000.00"));
}

#[test]
fn completed_goal_never_stores_an_overshoot() {
    let (conn, user_id) = setup();
    let goal_id = add_goal(&conn, user_id, "500.00");

    let g = store::set_goal_amount(&conn, user_id, goal_id, dec("750.00")).unwrap();
    assert!(g.is_completed);
    assert_eq!(g.current_amount, dec("500.00"));

    let p = aggregate::goal_progress(&g, date("2025-01-01"));
    assert_eq!(p.percent_complete, Decimal::ONE);
    assert_eq!(p.remaining, Decimal::ZERO);
}

#[test]
fn funding_records_the_transfer_transaction_atomically() {
    let (mut conn, user_id) = setup();
    let goal_id = add_goal(&conn, user_id, "1000.00");

    store::fund_goal(&mut conn, user_id, goal_id, dec("250.00"), date("2025-03-01")).unwrap();

    let txns = store::transactions(&conn, user_id).unwrap();
    assert_eq!(txns.len(), 1);
    assert_eq!(txns[0].amount, dec("-250.00"));
    assert!(txns[0].description.contains("Emergency fund"));

    let goal = store::savings_goal(&conn, user_id, goal_id).unwrap();
    assert_eq!(goal.current_amount, dec("250.00"));
}

#[test]
fn failed_funding_leaves_no_partial_writes() {
    let (mut conn, user_id) = setup();
    add_goal(&conn, user_id, "1000.00");

    let err = store::fund_goal(&mut conn, user_id, 9999, dec("250.00"), date("2025-03-01"));
    assert!(err.unwrap_err().is_not_found());
    assert!(store::transactions(&conn, user_id).unwrap().is_empty());
}

#[test]
fn overdue_requires_past_date_and_incompleteness() {
    let (conn, user_id) = setup();
    let goal_id = store::insert_savings_goal(
        &conn,
        user_id,
        &NewSavingsGoal {
            name: "Trip".into(),
            target_amount: dec("800.00"),
            target_date: Some(date("2025-01-01")),
        },
    )
    .unwrap()
    .id;

    let goal = store::savings_goal(&conn, user_id, goal_id).unwrap();
    assert!(aggregate::goal_progress(&goal, date("2025-06-01")).is_overdue);
    assert!(!aggregate::goal_progress(&goal, date("2024-12-31")).is_overdue);

    let done = store::set_goal_amount(&conn, user_id, goal_id, dec("800.00")).unwrap();
    assert!(!aggregate::goal_progress(&done, date("2025-06-01")).is_overdue);
}

#[test]
fn goals_are_tenant_scoped() {
    let (conn, user_id) = setup();
    let goal_id = add_goal(&conn, user_id, "1000.00");
    let other = store::insert_user(
        &conn,
        &NewUser {
            email: "other@example.com".into(),
            name: "Other".into(),
            password_hash: "hash".into(),
        },
    )
    .unwrap();

    let err = store::savings_goal(&conn, other.id, goal_id).unwrap_err();
    assert!(err.is_not_found());
}
