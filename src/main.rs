// Copyright (c) 2025 Ledgerkit Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use ledgerkit::{cli, commands, config::Config, db};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    // Missing DATABASE_URL is fatal: nothing below can run without it.
    let config = Config::from_env()?;
    let mut conn = db::open_or_init(&config)?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", config.database_url);
        }
        Some(("health", _)) => {
            println!(
                "{}",
                serde_json::json!({ "status": "ok", "timestamp": chrono::Utc::now().to_rfc3339() })
            );
        }
        Some(("user", sub)) => commands::users::handle(&conn, sub)?,
        Some(("session", sub)) => commands::sessions::handle(&conn, sub)?,
        Some(("category", sub)) => commands::categories::handle(&conn, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&conn, sub)?,
        Some(("budget", sub)) => commands::budgets::handle(&conn, sub)?,
        Some(("goal", sub)) => commands::goals::handle(&mut conn, sub)?,
        Some(("rule", sub)) => commands::rules::handle(&conn, sub)?,
        Some(("invest", sub)) => commands::investments::handle(&conn, sub)?,
        Some(("insight", sub)) => commands::insights::handle(&conn, sub)?,
        Some(("connection", sub)) => commands::connections::handle(&conn, sub)?,
        Some(("report", sub)) => commands::reports::handle(&conn, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&conn, sub)?,
        Some(("doctor", sub)) => commands::doctor::handle(&conn, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
