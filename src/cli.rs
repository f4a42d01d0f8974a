// Copyright (c) 2025 Ledgerkit Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn user_arg() -> Arg {
    Arg::new("user")
        .long("user")
        .value_name("EMAIL")
        .required(true)
        .help("Email of the acting user; every query is scoped to this user")
}

fn id_arg() -> Arg {
    Arg::new("id")
        .long("id")
        .required(true)
        .value_parser(value_parser!(i64))
}

fn output_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("ledgerkit")
        .about("Personal finance dashboard core: budgets, savings goals, insights, portfolio")
        .subcommand_required(false)
        .subcommand(Command::new("init").about("Create the database schema"))
        .subcommand(Command::new("health").about("Liveness check"))
        .subcommand(
            Command::new("user")
                .about("Manage users")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("email").long("email").required(true))
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("password-hash")
                                .long("password-hash")
                                .required(true)
                                .help("Pre-hashed password; hashing is the auth collaborator's job"),
                        ),
                )
                .subcommand(output_flags(Command::new("show").arg(user_arg()))),
        )
        .subcommand(
            Command::new("session")
                .about("Server-side sessions with a 7-day sliding expiry")
                .subcommand(Command::new("login").arg(user_arg()))
                .subcommand(
                    Command::new("resolve")
                        .arg(Arg::new("id").long("id").required(true)),
                )
                .subcommand(
                    Command::new("logout")
                        .arg(Arg::new("id").long("id").required(true)),
                )
                .subcommand(Command::new("purge")),
        )
        .subcommand(
            Command::new("category")
                .about("Spending categories")
                .subcommand(
                    Command::new("add")
                        .arg(user_arg())
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("emoji").long("emoji").required(true))
                        .arg(Arg::new("budget").long("budget").value_name("AMOUNT")),
                )
                .subcommand(output_flags(Command::new("list").arg(user_arg())))
                .subcommand(Command::new("rm").arg(user_arg()).arg(id_arg())),
        )
        .subcommand(
            Command::new("tx")
                .about("Transactions (expenses negative, income positive)")
                .subcommand(
                    Command::new("add")
                        .arg(user_arg())
                        .arg(Arg::new("date").long("date").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(
                            Arg::new("category-id")
                                .long("category-id")
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(
                            Arg::new("recurring")
                                .long("recurring")
                                .action(ArgAction::SetTrue),
                        )
                        .arg(Arg::new("external-id").long("external-id")),
                )
                .subcommand(output_flags(
                    Command::new("list")
                        .arg(user_arg())
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .requires("year")
                                .value_parser(value_parser!(u32)),
                        )
                        .arg(Arg::new("year").long("year").value_parser(value_parser!(i32)))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(Command::new("rm").arg(user_arg()).arg(id_arg())),
        )
        .subcommand(
            Command::new("budget")
                .about("Monthly category budgets")
                .subcommand(
                    Command::new("set")
                        .arg(user_arg())
                        .arg(
                            Arg::new("category-id")
                                .long("category-id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("month").long("month").required(true))
                        .arg(Arg::new("year").long("year").required(true)),
                )
                .subcommand(output_flags(Command::new("list").arg(user_arg())))
                .subcommand(Command::new("rm").arg(user_arg()).arg(id_arg())),
        )
        .subcommand(
            Command::new("goal")
                .about("Savings goals")
                .subcommand(
                    Command::new("add")
                        .arg(user_arg())
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("target").long("target").required(true))
                        .arg(Arg::new("target-date").long("target-date")),
                )
                .subcommand(output_flags(Command::new("list").arg(user_arg())))
                .subcommand(
                    Command::new("fund")
                        .arg(user_arg())
                        .arg(id_arg())
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("date").long("date").required(true)),
                )
                .subcommand(
                    Command::new("set-amount")
                        .arg(user_arg())
                        .arg(id_arg())
                        .arg(Arg::new("amount").long("amount").required(true)),
                )
                .subcommand(output_flags(
                    Command::new("progress").arg(user_arg()).arg(id_arg()),
                )),
        )
        .subcommand(
            Command::new("rule")
                .about("Automatic savings rules")
                .subcommand(
                    Command::new("add")
                        .arg(user_arg())
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("percentage, fixed, or round_up"),
                        )
                        .arg(Arg::new("value").long("value").required(true)),
                )
                .subcommand(output_flags(Command::new("list").arg(user_arg())))
                .subcommand(Command::new("enable").arg(user_arg()).arg(id_arg()))
                .subcommand(Command::new("disable").arg(user_arg()).arg(id_arg())),
        )
        .subcommand(
            Command::new("invest")
                .about("Investment positions")
                .subcommand(
                    Command::new("add")
                        .arg(user_arg())
                        .arg(Arg::new("symbol").long("symbol").required(true))
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("shares").long("shares").required(true))
                        .arg(Arg::new("avg-cost").long("avg-cost").required(true))
                        .arg(Arg::new("value").long("value").required(true)),
                )
                .subcommand(output_flags(Command::new("list").arg(user_arg())))
                .subcommand(
                    Command::new("set-value")
                        .arg(user_arg())
                        .arg(id_arg())
                        .arg(Arg::new("value").long("value").required(true)),
                )
                .subcommand(Command::new("rm").arg(user_arg()).arg(id_arg())),
        )
        .subcommand(
            Command::new("insight")
                .about("Stored dashboard insights (generated elsewhere)")
                .subcommand(
                    Command::new("add")
                        .arg(user_arg())
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("trend, alert, or recommendation"),
                        )
                        .arg(Arg::new("title").long("title").required(true))
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(
                            Arg::new("priority")
                                .long("priority")
                                .help("high, medium, or low (default medium)"),
                        ),
                )
                .subcommand(output_flags(
                    Command::new("list").arg(user_arg()).arg(
                        Arg::new("unread")
                            .long("unread")
                            .action(ArgAction::SetTrue),
                    ),
                ))
                .subcommand(Command::new("read").arg(user_arg()).arg(id_arg())),
        )
        .subcommand(
            Command::new("connection")
                .about("Linked bank connections (sync itself happens elsewhere)")
                .subcommand(
                    Command::new("add")
                        .arg(user_arg())
                        .arg(Arg::new("item-id").long("item-id").required(true))
                        .arg(Arg::new("token").long("token").required(true))
                        .arg(Arg::new("institution").long("institution").required(true))
                        .arg(
                            Arg::new("accounts")
                                .long("accounts")
                                .value_name("ID,ID,...")
                                .help("Comma-separated external account ids"),
                        ),
                )
                .subcommand(output_flags(Command::new("list").arg(user_arg())))
                .subcommand(Command::new("enable").arg(user_arg()).arg(id_arg()))
                .subcommand(Command::new("disable").arg(user_arg()).arg(id_arg())),
        )
        .subcommand(
            Command::new("report")
                .about("Dashboard aggregates")
                .subcommand(output_flags(
                    Command::new("balance")
                        .arg(user_arg())
                        .arg(Arg::new("as-of").long("as-of").value_name("DATE")),
                ))
                .subcommand(output_flags(
                    Command::new("spend")
                        .arg(user_arg())
                        .arg(Arg::new("month").long("month").required(true))
                        .arg(Arg::new("year").long("year").required(true)),
                ))
                .subcommand(output_flags(
                    Command::new("budget-status")
                        .arg(user_arg())
                        .arg(Arg::new("month").long("month").required(true))
                        .arg(Arg::new("year").long("year").required(true)),
                ))
                .subcommand(output_flags(Command::new("portfolio").arg(user_arg()))),
        )
        .subcommand(
            Command::new("export")
                .about("Export data")
                .subcommand(
                    Command::new("transactions")
                        .arg(user_arg())
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv or json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(Command::new("doctor").about("Data integrity checks").arg(user_arg()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tx_list_parses_limit_and_flags() {
        let m = build_cli().get_matches_from([
            "ledgerkit",
            "tx",
            "list",
            "--user",
            "t@example.com",
            "--limit",
            "5",
            "--jsonl",
        ]);
        let Some(("tx", tx_m)) = m.subcommand() else {
            panic!("no tx subcommand")
        };
        let Some(("list", list_m)) = tx_m.subcommand() else {
            panic!("no list subcommand")
        };
        assert_eq!(list_m.get_one::<usize>("limit"), Some(&5));
        assert!(list_m.get_flag("jsonl"));
        assert!(!list_m.get_flag("json"));
    }

    #[test]
    fn tx_list_month_requires_year() {
        let res = build_cli().try_get_matches_from([
            "ledgerkit",
            "tx",
            "list",
            "--user",
            "t@example.com",
            "--month",
            "1",
        ]);
        assert!(res.is_err());
    }
}
