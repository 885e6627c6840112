// Copyright (c) 2025 Pennyplan Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
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
    Command::new("pennyplan")
        .about("50/30/20 personal budgeting with recurring transactions")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(Command::new("init").about("Initialize the database"))
        .subcommand(
            Command::new("tx")
                .about("Record and browse transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .required(true)
                                .help("Need, Want, or Savings"),
                        )
                        .arg(Arg::new("subcategory").long("subcategory").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("YYYY-MM-DD, defaults to today"),
                        )
                        .arg(Arg::new("notes").long("notes"))
                        .arg(
                            Arg::new("recurring")
                                .long("recurring")
                                .value_name("FREQUENCY")
                                .help("Repeat daily, weekly, monthly, or yearly"),
                        ),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Replace a transaction by id")
                        .arg(Arg::new("id").long("id").required(true))
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("subcategory").long("subcategory").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("date").long("date").required(true))
                        .arg(Arg::new("notes").long("notes"))
                        .arg(
                            Arg::new("recurring")
                                .long("recurring")
                                .value_name("FREQUENCY"),
                        ),
                )
                .subcommand(
                    Command::new("delete")
                        .about("Delete a transaction by id")
                        .arg(Arg::new("id").long("id").required(true)),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions")
                        .arg(Arg::new("day").long("day").help("YYYY-MM-DD"))
                        .arg(Arg::new("month").long("month").help("YYYY-MM"))
                        .arg(Arg::new("year").long("year").help("YYYY")),
                )),
        )
        .subcommand(
            Command::new("goal")
                .about("Budget allocation goals")
                .subcommand(
                    Command::new("set")
                        .about("Set one goal percentage (clamped so the three sum to at most 100)")
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("percent").long("percent").required(true)),
                )
                .subcommand(json_flags(
                    Command::new("show").about("Show goals and the amounts they allocate"),
                )),
        )
        .subcommand(
            Command::new("income")
                .about("Income declaration")
                .subcommand(
                    Command::new("set")
                        .about("Set the per-period income")
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("frequency")
                                .long("frequency")
                                .required(true)
                                .help("weekly, biweekly, semimonthly, monthly, quarterly, annually"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("show").about("Show the income profile and derived monthly income"),
                )),
        )
        .subcommand(
            Command::new("report")
                .about("Spending reports")
                .subcommand(json_flags(
                    Command::new("day")
                        .about("Totals for one calendar day")
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD, defaults to today")),
                ))
                .subcommand(json_flags(
                    Command::new("month")
                        .about("Monthly summary with goal statuses and top subcategories")
                        .arg(Arg::new("month").long("month").help("YYYY-MM, defaults to this month")),
                ))
                .subcommand(json_flags(
                    Command::new("year")
                        .about("Yearly summary with goal statuses and top subcategories")
                        .arg(Arg::new("year").long("year").help("YYYY, defaults to this year")),
                )),
        )
        .subcommand(
            Command::new("recurring")
                .about("Recurring transaction series")
                .subcommand(json_flags(
                    Command::new("list").about("List recurring series and their next dates"),
                ))
                .subcommand(
                    Command::new("sweep")
                        .about("Expand due recurring series (run once a day, e.g. from cron)")
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("Treat this date as today (YYYY-MM-DD)"),
                        ),
                ),
        )
        .subcommand(Command::new("categories").about("List categories and suggested subcategories"))
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                Command::new("transactions")
                    .about("Export all transactions")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .default_value("csv")
                            .help("csv or json"),
                    )
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
        .subcommand(Command::new("doctor").about("Scan the stored data for integrity issues"))
}
