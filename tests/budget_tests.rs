// Copyright (c) 2025 Ledgerkit Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use ledgerkit::error::Error;
use ledgerkit::models::{NewBudget, NewCategory, NewTransaction, NewUser};
use ledgerkit::{aggregate, db, store};
use rusqlite::Connection;
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn setup() -> (Connection, i64, i64) {
    let conn = db::open_in_memory().unwrap();
    let user = store::insert_user(
        &conn,
        &NewUser {
            email: "a@example.com".into(),
            name: "A".into(),
            password_hash: "hash".into(),
        },
    )
    .unwrap();
    let cat = store::insert_category(
        &conn,
        user.id,
        &NewCategory {
            name: "Dining".into(),
            emoji: "🍜".into(),
            budget_amount: None,
        },
    )
    .unwrap();
    (conn, user.id, cat.id)
}

#[test]
fn duplicate_budget_conflicts_and_first_row_survives() {
    let (conn, user_id, cat_id) = setup();
    let draft = NewBudget {
        category_id: cat_id,
        amount: dec("100.00"),
        month: 1,
        year: 2025,
    };
    let first = store::insert_budget(&conn, user_id, &draft).unwrap();

    let second = store::insert_budget(
        &conn,
        user_id,
        &NewBudget {
            amount: dec("999.00"),
            ..draft
        },
    );
    assert!(matches!(second.unwrap_err(), Error::Conflict(_)));

    let budgets = store::budgets(&conn, user_id).unwrap();
    assert_eq!(budgets.len(), 1);
    assert_eq!(budgets[0].id, first.id);
    assert_eq!(budgets[0].amount, dec("100.00"));
}

#[test]
fn same_category_different_month_is_allowed() {
    let (conn, user_id, cat_id) = setup();
    for month in [1u32, 2] {
        store::insert_budget(
            &conn,
            user_id,
            &NewBudget {
                category_id: cat_id,
                amount: dec("100.00"),
                month,
                year: 2025,
            },
        )
        .unwrap();
    }
    assert_eq!(store::budgets(&conn, user_id).unwrap().len(), 2);
}

#[test]
fn budget_for_another_users_category_is_rejected() {
    let (conn, user_id, _) = setup();
    let other = store::insert_user(
        &conn,
        &NewUser {
            email: "b@example.com".into(),
            name: "B".into(),
            password_hash: "hash".into(),
        },
    )
    .unwrap();
    let foreign_cat = store::insert_category(
        &conn,
        other.id,
        &NewCategory {
            name: "Theirs".into(),
            emoji: "🔒".into(),
            budget_amount: None,
        },
    )
    .unwrap();

    let err = store::insert_budget(
        &conn,
        user_id,
        &NewBudget {
            category_id: foreign_cat.id,
            amount: dec("10.00"),
            month: 1,
            year: 2025,
        },
    )
    .unwrap_err();
    assert!(err.is_not_found());
    assert!(store::budgets(&conn, user_id).unwrap().is_empty());
}

#[test]
fn budget_status_reports_spend_against_budget_only() {
    let (conn, user_id, cat_id) = setup();
    let unbudgeted = store::insert_category(
        &conn,
        user_id,
        &NewCategory {
            name: "Travel".into(),
            emoji: "✈️".into(),
            budget_amount: None,
        },
    )
    .unwrap();
    store::insert_budget(
        &conn,
        user_id,
        &NewBudget {
            category_id: cat_id,
            amount: dec("200.00"),
            month: 6,
            year: 2025,
        },
    )
    .unwrap();

    for (cat, amount, day) in [(cat_id, "-45.50", 3), (cat_id, "-14.50", 9), (unbudgeted.id, "-500.00", 10)] {
        store::insert_transaction(
            &conn,
            user_id,
            &NewTransaction {
                category_id: Some(cat),
                amount: dec(amount),
                description: "spend".into(),
                date: NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
                is_recurring: None,
                ai_categorized: None,
                external_id: None,
            },
        )
        .unwrap();
    }

    let lines = aggregate::budget_status(
        &store::budgets(&conn, user_id).unwrap(),
        &store::categories(&conn, user_id).unwrap(),
        &store::transactions(&conn, user_id).unwrap(),
        6,
        2025,
    );
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].category, "Dining");
    assert_eq!(lines[0].budgeted, dec("200.00"));
    assert_eq!(lines[0].spent, dec("60.00"));
    assert_eq!(lines[0].remaining, dec("140.00"));
}
