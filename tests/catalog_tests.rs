// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{FakeApi, recurrent};
use spendwise::commands::{categories, groups, recurrent as recurrent_cmd};
use spendwise::models::TransactionType::{Deposit, Expense};
use spendwise::notify::{MemoryNotifier, NoticeKind};
use spendwise::recurrent::group_by_next_date;
use spendwise::cli;

fn dispatch(api: &FakeApi, notifier: &MemoryNotifier, argv: &[&str]) {
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some(("category", sub)) => categories::handle(api, notifier, sub).unwrap(),
        Some(("group", sub)) => groups::handle(api, notifier, sub).unwrap(),
        Some(("recurrent", sub)) => recurrent_cmd::handle(api, notifier, sub).unwrap(),
        _ => panic!("unexpected command"),
    }
}

#[test]
fn category_add_then_refetch() {
    let api = FakeApi::default();
    let notifier = MemoryNotifier::new();
    dispatch(&api, &notifier, &["spendwise", "category", "add", "--name", "Food", "--type", "EXPENSE"]);
    assert_eq!(api.calls(), vec!["POST /categories", "GET /categories"]);
    assert_eq!(api.categories.lock().unwrap()[0].r#type, Expense);
}

#[test]
fn blank_category_name_is_blocked() {
    let api = FakeApi::default();
    let notifier = MemoryNotifier::new();
    dispatch(&api, &notifier, &["spendwise", "category", "add", "--name", " ", "--type", "DEPOSIT"]);
    assert!(api.calls().is_empty());
    assert_eq!(notifier.kinds(), vec![NoticeKind::Warning]);
}

#[test]
fn group_lifecycle() {
    let api = FakeApi::default();
    let notifier = MemoryNotifier::new();
    dispatch(&api, &notifier, &["spendwise", "group", "add", "--name", "Flat", "--description", "Shared"]);
    dispatch(&api, &notifier, &["spendwise", "group", "rm", "--id", "1"]);
    assert_eq!(
        api.calls(),
        vec![
            "POST /spending_groups",
            "GET /spending_groups",
            "DELETE /spending_groups/1",
            "GET /spending_groups",
        ]
    );
    assert!(api.groups.lock().unwrap().is_empty());
}

#[test]
fn recurrent_end_before_start_is_blocked() {
    let api = FakeApi::default();
    let notifier = MemoryNotifier::new();
    dispatch(
        &api,
        &notifier,
        &[
            "spendwise", "recurrent", "add", "--amount", "800", "--type", "EXPENSE",
            "--category-id", "1", "--frequency", "MONTHLY", "--start-date", "2025-05-01",
            "--end-date", "2025-04-01",
        ],
    );
    assert!(api.calls().is_empty());
    assert_eq!(notifier.kinds(), vec![NoticeKind::Warning]);
}

#[test]
fn recurrent_unparseable_amount_is_blocked() {
    let api = FakeApi::default();
    let notifier = MemoryNotifier::new();
    dispatch(
        &api,
        &notifier,
        &[
            "spendwise", "recurrent", "add", "--amount", "ten", "--type", "EXPENSE",
            "--category-id", "1", "--frequency", "MONTHLY", "--start-date", "2025-05-01",
        ],
    );
    assert!(api.calls().is_empty());
    assert_eq!(notifier.kinds(), vec![NoticeKind::Warning]);
}

#[test]
fn recurrent_add_then_refetch() {
    let api = FakeApi::default();
    let notifier = MemoryNotifier::new();
    dispatch(
        &api,
        &notifier,
        &[
            "spendwise", "recurrent", "add", "--amount", "9.99", "--type", "expense",
            "--category-id", "2", "--frequency", "weekly", "--start-date", "2025-05-01",
        ],
    );
    assert_eq!(api.calls(), vec!["POST /recurrent_transactions", "GET /recurrent_transactions"]);
    assert_eq!(notifier.kinds(), vec![NoticeKind::Success]);
}

#[test]
fn due_rows_are_chronological_with_none_last() {
    let data = vec![
        recurrent(1, Expense, "10", None),
        recurrent(2, Deposit, "100", Some("2025-06-01")),
        recurrent(3, Expense, "40", Some("2025-05-01")),
    ];
    let rows = recurrent_cmd::due_rows(group_by_next_date(&data).unwrap());
    let keys: Vec<&str> = rows.iter().map(|r| r.next.as_str()).collect();
    assert_eq!(keys, vec!["2025-05-01", "2025-06-01", "None"]);
    assert_eq!(rows[0].total, "-40.00");
    assert_eq!(rows[2].count, 1);
}
