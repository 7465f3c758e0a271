// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::{FinanceApi, TransactionQuery};
use crate::commands::{draft_amount, transaction_query};
use crate::models::{Transaction, TransactionDraft};
use crate::notify::{NoticeKind, Notifier};
use crate::period::{self, Period};
use crate::utils::{maybe_print_json, parse_date, pretty_table, today};
use crate::validate;
use anyhow::Result;
use serde::Serialize;

pub fn handle(api: &dyn FinanceApi, notifier: &dyn Notifier, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(api, notifier, sub)?,
        Some(("list", sub)) => list(api, sub)?,
        Some(("edit", sub)) => edit(api, notifier, sub)?,
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            api.delete_transaction(id)?;
            notifier.notify(NoticeKind::Success, &format!("Removed transaction {}", id));
            refetch(api, today())?;
        }
        _ => {}
    }
    Ok(())
}

pub fn draft_from(sub: &clap::ArgMatches) -> Result<TransactionDraft> {
    let amount = draft_amount(sub.get_one::<String>("amount").unwrap());
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => today(),
    };
    Ok(TransactionDraft {
        amount,
        r#type: sub.get_one::<String>("type").unwrap().parse()?,
        date,
        description: sub.get_one::<String>("description").map(|s| s.to_string()),
        category_id: sub.get_one::<i64>("category-id").copied(),
        spending_group_ids: sub
            .get_many::<i64>("group")
            .map(|v| v.copied().collect())
            .unwrap_or_default(),
    })
}

fn add(api: &dyn FinanceApi, notifier: &dyn Notifier, sub: &clap::ArgMatches) -> Result<()> {
    let draft = draft_from(sub)?;
    if let Err(e) = validate::transaction(&draft) {
        notifier.notify(NoticeKind::Warning, &e.to_string());
        return Ok(());
    }
    let created = api.create_transaction(&draft)?;
    notifier.notify(
        NoticeKind::Success,
        &format!(
            "Recorded {} {} on {} ({})",
            created.r#type, created.amount, created.date, created.category.name
        ),
    );
    refetch(api, draft.date)
}

fn edit(api: &dyn FinanceApi, notifier: &dyn Notifier, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let draft = draft_from(sub)?;
    if let Err(e) = validate::transaction(&draft) {
        notifier.notify(NoticeKind::Warning, &e.to_string());
        return Ok(());
    }
    api.update_transaction(id, &draft)?;
    notifier.notify(NoticeKind::Success, &format!("Updated transaction {}", id));
    refetch(api, draft.date)
}

/// Reloads the month around `date` after a mutation.
fn refetch(api: &dyn FinanceApi, date: chrono::NaiveDate) -> Result<()> {
    let query = TransactionQuery {
        range: period::resolve(Period::Month, date)?,
        ..Default::default()
    };
    let data = api.list_transactions(&query)?;
    print_rows(&to_rows(&data));
    Ok(())
}

fn list(api: &dyn FinanceApi, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(api, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        print_rows(&data);
    }
    Ok(())
}

fn print_rows(data: &[TransactionRow]) {
    let rows: Vec<Vec<String>> = data
        .iter()
        .map(|r| {
            vec![
                r.id.to_string(),
                r.date.clone(),
                r.r#type.clone(),
                r.amount.clone(),
                r.category.clone(),
                r.groups.clone(),
                r.description.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Id", "Date", "Type", "Amount", "Category", "Groups", "Description"],
            rows,
        )
    );
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub r#type: String,
    pub amount: String,
    pub category: String,
    pub groups: String,
    pub description: String,
}

fn to_rows(data: &[Transaction]) -> Vec<TransactionRow> {
    data.iter()
        .map(|t| TransactionRow {
            id: t.id,
            date: t.date.to_string(),
            r#type: t.r#type.to_string(),
            amount: t.amount.clone(),
            category: t.category.name.clone(),
            groups: if t.is_personal() {
                "Personal".to_string()
            } else {
                t.spending_groups
                    .iter()
                    .map(|g| g.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            },
            description: t.description.clone().unwrap_or_default(),
        })
        .collect()
}

/// Newest first, truncated by `--limit`.
pub fn query_rows(api: &dyn FinanceApi, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let query = transaction_query(api, sub)?;
    let mut data = api.list_transactions(&query)?;
    data.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        data.truncate(*limit);
    }
    Ok(to_rows(&data))
}
