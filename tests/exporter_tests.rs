// Copyright (c) 2025 Ledgerkit Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use ledgerkit::models::{NewTransaction, NewUser};
use ledgerkit::{cli, commands::exporter, db, store};
use rusqlite::Connection;
use serde_json::json;
use tempfile::tempdir;

fn seeded_conn() -> Connection {
    let conn = db::open_in_memory().unwrap();
    let user = store::insert_user(
        &conn,
        &NewUser {
            email: "ex@example.com".into(),
            name: "Ex".into(),
            password_hash: "hash".into(),
        },
    )
    .unwrap();
    store::insert_transaction(
        &conn,
        user.id,
        &NewTransaction {
            category_id: None,
            amount: "-12.34".parse().unwrap(),
            description: "Corner Shop".into(),
            date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            is_recurring: None,
            ai_categorized: None,
            external_id: None,
        },
    )
    .unwrap();
    conn
}

#[test]
fn export_transactions_writes_pretty_json() {
    let conn = seeded_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();

    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "ledgerkit",
        "export",
        "transactions",
        "--user",
        "ex@example.com",
        "--format",
        "json",
        "--out",
        &out_str,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(&conn, export_m).unwrap();
    } else {
        panic!("no export subcommand");
    }

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        parsed,
        json!([
            {
                "date": "2025-01-02",
                "amount": "-12.34",
                "description": "Corner Shop",
                "category_id": null,
                "is_recurring": false,
                "external_id": null
            }
        ])
    );
}

#[test]
fn export_transactions_rejects_unknown_format() {
    let conn = seeded_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();

    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "ledgerkit",
        "export",
        "transactions",
        "--user",
        "ex@example.com",
        "--format",
        "xml",
        "--out",
        &out_str,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        assert!(exporter::handle(&conn, export_m).is_err());
    } else {
        panic!("no export subcommand");
    }
    assert!(!out_path.exists());
}
