// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    ]
}

fn period_args(default: &'static str) -> [Arg; 2] {
    [
        Arg::new("period")
            .long("period")
            .default_value(default)
            .help("today|month|year|all"),
        Arg::new("date")
            .long("date")
            .help("Reference date YYYY-MM-DD (default: today)"),
    ]
}

fn group_filter_arg() -> Arg {
    Arg::new("group")
        .long("group")
        .action(ArgAction::Append)
        .help("Spending group id, or 'personal' for ungrouped transactions (repeatable)")
}

fn group_ids_arg() -> Arg {
    Arg::new("group")
        .long("group")
        .action(ArgAction::Append)
        .value_parser(value_parser!(i64))
        .help("Spending group id to tag (repeatable)")
}

fn id_arg() -> Arg {
    Arg::new("id")
        .long("id")
        .required(true)
        .value_parser(value_parser!(i64))
}

fn type_arg() -> Arg {
    Arg::new("type")
        .long("type")
        .required(true)
        .help("EXPENSE|DEPOSIT")
}

fn transaction_fields() -> Vec<Arg> {
    vec![
        Arg::new("amount").long("amount").required(true),
        type_arg(),
        Arg::new("date")
            .long("date")
            .help("YYYY-MM-DD (default: today)"),
        Arg::new("category-id")
            .long("category-id")
            .value_parser(value_parser!(i64)),
        Arg::new("description").long("description"),
        group_ids_arg(),
    ]
}

fn recurrent_fields() -> Vec<Arg> {
    vec![
        Arg::new("amount").long("amount").required(true),
        type_arg(),
        Arg::new("category-id")
            .long("category-id")
            .value_parser(value_parser!(i64)),
        Arg::new("frequency")
            .long("frequency")
            .required(true)
            .help("WEEKLY|MONTHLY"),
        Arg::new("start-date").long("start-date").required(true),
        Arg::new("end-date").long("end-date"),
        Arg::new("description").long("description"),
        group_ids_arg(),
    ]
}

pub fn build_cli() -> Command {
    Command::new("spendwise")
        .version(clap::crate_version!())
        .about("Personal finance client: categories, spending groups, transactions, recurrent transactions")
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .global(true)
                .help("Backend base URL (overrides config and SPENDWISE_API_URL)"),
        )
        .subcommand(
            Command::new("login")
                .about("Store a bearer token issued by the session provider")
                .arg(Arg::new("token").long("token").required(true)),
        )
        .subcommand(Command::new("logout").about("Forget the stored token"))
        .subcommand(Command::new("whoami").about("Show the effective backend and session"))
        .subcommand(
            Command::new("category")
                .about("Manage categories")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(type_arg()),
                )
                .subcommand(
                    Command::new("list")
                        .arg(Arg::new("type").long("type").help("EXPENSE|DEPOSIT"))
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("edit")
                        .arg(id_arg())
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(type_arg()),
                )
                .subcommand(Command::new("rm").arg(id_arg())),
        )
        .subcommand(
            Command::new("group")
                .about("Manage spending groups")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("description").long("description")),
                )
                .subcommand(Command::new("list").args(json_args()))
                .subcommand(
                    Command::new("edit")
                        .arg(id_arg())
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("description").long("description")),
                )
                .subcommand(Command::new("rm").arg(id_arg())),
        )
        .subcommand(
            Command::new("tx")
                .about("Manage transactions")
                .subcommand(Command::new("add").args(transaction_fields()))
                .subcommand(
                    Command::new("list")
                        .args(period_args("month"))
                        .arg(group_filter_arg())
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        )
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("edit")
                        .arg(id_arg())
                        .args(transaction_fields())
                        .mut_arg("date", |a| a.required(true)),
                )
                .subcommand(Command::new("rm").arg(id_arg())),
        )
        .subcommand(
            Command::new("recurrent")
                .about("Manage recurrent transactions")
                .subcommand(Command::new("add").args(recurrent_fields()))
                .subcommand(
                    Command::new("list")
                        .args(period_args("all"))
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("edit")
                        .arg(id_arg())
                        .args(recurrent_fields()),
                )
                .subcommand(Command::new("rm").arg(id_arg()))
                .subcommand(
                    Command::new("due")
                        .about("Group recurrent transactions by next due date")
                        .args(json_args()),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Aggregated views")
                .subcommand(
                    Command::new("by-category")
                        .args(period_args("month"))
                        .arg(group_filter_arg())
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("summary")
                        .args(period_args("month"))
                        .arg(group_filter_arg())
                        .args(json_args()),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Write transactions or category totals to a file")
                .subcommand(
                    Command::new("transactions")
                        .args(period_args("month"))
                        .arg(group_filter_arg())
                        .arg(Arg::new("format").long("format").default_value("csv"))
                        .arg(Arg::new("out").long("out").required(true)),
                )
                .subcommand(
                    Command::new("by-category")
                        .args(period_args("month"))
                        .arg(group_filter_arg())
                        .arg(Arg::new("format").long("format").default_value("csv"))
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
}
