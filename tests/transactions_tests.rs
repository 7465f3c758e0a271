// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{FakeApi, in_group, tx_on};
use spendwise::models::SpendingGroup;
use spendwise::models::TransactionType::{Deposit, Expense};
use spendwise::notify::{MemoryNotifier, NoticeKind};
use spendwise::{cli, commands::transactions};

fn setup() -> FakeApi {
    let api = FakeApi::with_transactions(vec![
        tx_on(1, "2025-01-01", "Food", Expense, "10"),
        in_group(tx_on(2, "2025-01-02", "Food", Expense, "20"), 5, "Flat"),
        tx_on(3, "2025-01-03", "Salary", Deposit, "1000"),
        tx_on(4, "2025-02-01", "Food", Expense, "5"),
    ]);
    *api.groups.lock().unwrap() = vec![SpendingGroup {
        id: 5,
        name: "Flat".into(),
        description: None,
    }];
    api
}

fn list_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["spendwise", "tx", "list"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let (_, tx_m) = matches.subcommand().unwrap();
    let (_, list_m) = tx_m.subcommand().unwrap();
    list_m.clone()
}

#[test]
fn list_limit_respected() {
    let api = setup();
    let m = list_matches(&["--date", "2025-01-15", "--limit", "2"]);
    let rows = transactions::query_rows(&api, &m).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, "2025-01-03");
}

#[test]
fn list_filters_by_month() {
    let api = setup();
    let m = list_matches(&["--period", "month", "--date", "2025-02-10"]);
    let rows = transactions::query_rows(&api, &m).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, 4);
}

#[test]
fn personal_filter_sends_include_personal_only() {
    let api = setup();
    let m = list_matches(&["--period", "all", "--group", "personal"]);
    let rows = transactions::query_rows(&api, &m).unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.groups == "Personal"));
    // no group ids were named, so the group list is not fetched
    assert_eq!(api.calls(), vec!["GET /transactions"]);
    let q = api.queries.lock().unwrap()[0].clone();
    assert!(q.groups.include_personal);
    assert!(q.groups.spending_group_ids.is_empty());
}

#[test]
fn group_filter_by_id() {
    let api = setup();
    let m = list_matches(&["--period", "all", "--group", "5"]);
    let rows = transactions::query_rows(&api, &m).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].groups, "Flat");
    assert_eq!(api.calls(), vec!["GET /spending_groups", "GET /transactions"]);
}

#[test]
fn bad_group_value_is_an_error() {
    let api = setup();
    let m = list_matches(&["--group", "everyone"]);
    assert!(transactions::query_rows(&api, &m).is_err());
    assert!(api.calls().is_empty());
}

#[test]
fn add_posts_then_refetches() {
    let api = setup();
    let notifier = MemoryNotifier::new();
    let matches = cli::build_cli().get_matches_from([
        "spendwise", "tx", "add", "--amount", "4.20", "--type", "expense", "--date",
        "2025-02-03", "--category-id", "1",
    ]);
    let (_, tx_m) = matches.subcommand().unwrap();
    transactions::handle(&api, &notifier, tx_m).unwrap();
    assert_eq!(api.calls(), vec!["POST /transactions", "GET /transactions"]);
    assert_eq!(notifier.kinds(), vec![NoticeKind::Success]);
}

#[test]
fn add_without_category_warns_and_sends_nothing() {
    let api = setup();
    let notifier = MemoryNotifier::new();
    let matches = cli::build_cli().get_matches_from([
        "spendwise", "tx", "add", "--amount", "4.20", "--type", "EXPENSE",
    ]);
    let (_, tx_m) = matches.subcommand().unwrap();
    transactions::handle(&api, &notifier, tx_m).unwrap();
    assert!(api.calls().is_empty());
    assert_eq!(
        notifier.notices(),
        vec![(NoticeKind::Warning, "Select a category".to_string())]
    );
}

#[test]
fn zero_amount_warns() {
    let api = setup();
    let notifier = MemoryNotifier::new();
    let matches = cli::build_cli().get_matches_from([
        "spendwise", "tx", "add", "--amount", "0", "--type", "DEPOSIT", "--category-id", "2",
    ]);
    let (_, tx_m) = matches.subcommand().unwrap();
    transactions::handle(&api, &notifier, tx_m).unwrap();
    assert!(api.calls().is_empty());
    assert_eq!(notifier.kinds(), vec![NoticeKind::Warning]);
}

#[test]
fn unparseable_amount_warns_and_sends_nothing() {
    let api = setup();
    let notifier = MemoryNotifier::new();
    let matches = cli::build_cli().get_matches_from([
        "spendwise", "tx", "add", "--amount", "abc", "--type", "EXPENSE", "--category-id", "2",
    ]);
    let (_, tx_m) = matches.subcommand().unwrap();
    transactions::handle(&api, &notifier, tx_m).unwrap();
    assert!(api.calls().is_empty());
    assert_eq!(
        notifier.notices(),
        vec![(NoticeKind::Warning, "Amount must be a non-zero number".to_string())]
    );
}

#[test]
fn rm_deletes_then_refetches() {
    let api = setup();
    let notifier = MemoryNotifier::new();
    let matches = cli::build_cli().get_matches_from(["spendwise", "tx", "rm", "--id", "1"]);
    let (_, tx_m) = matches.subcommand().unwrap();
    transactions::handle(&api, &notifier, tx_m).unwrap();
    assert_eq!(api.calls(), vec!["DELETE /transactions/1", "GET /transactions"]);
    assert_eq!(api.transactions.lock().unwrap().len(), 3);
}
