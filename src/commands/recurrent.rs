// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::{FinanceApi, RecurrentQuery};
use crate::commands::{date_range, draft_amount};
use crate::models::{RecurrentDraft, RecurrentTransaction};
use crate::notify::{NoticeKind, Notifier};
use crate::recurrent::{DueSchedule, group_by_next_date};
use crate::utils::{fmt_money, maybe_print_json, parse_date, pretty_table};
use crate::validate;
use anyhow::Result;
use serde::Serialize;

pub fn handle(api: &dyn FinanceApi, notifier: &dyn Notifier, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let draft = draft_from(sub)?;
            if let Err(e) = validate::recurrent(&draft) {
                notifier.notify(NoticeKind::Warning, &e.to_string());
                return Ok(());
            }
            let created = api.create_recurrent(&draft)?;
            notifier.notify(
                NoticeKind::Success,
                &format!(
                    "Scheduled {} {} {} ({})",
                    created.frequency, created.r#type, created.amount, created.category.name
                ),
            );
            refetch(api)?;
        }
        Some(("list", sub)) => {
            let query = RecurrentQuery {
                range: date_range(sub)?,
            };
            let data = api.list_recurrent(&query)?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
                print_recurrent(&data);
            }
        }
        Some(("edit", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            let draft = draft_from(sub)?;
            if let Err(e) = validate::recurrent(&draft) {
                notifier.notify(NoticeKind::Warning, &e.to_string());
                return Ok(());
            }
            api.update_recurrent(id, &draft)?;
            notifier.notify(NoticeKind::Success, &format!("Updated recurrent transaction {}", id));
            refetch(api)?;
        }
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            api.delete_recurrent(id)?;
            notifier.notify(NoticeKind::Success, &format!("Removed recurrent transaction {}", id));
            refetch(api)?;
        }
        Some(("due", sub)) => {
            let schedule = due_schedule(api)?;
            let rows = due_rows(schedule);
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
                let table_rows = rows
                    .iter()
                    .map(|r| vec![r.next.clone(), r.count.to_string(), r.total.clone()])
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["Next due", "Transactions", "Net amount"], table_rows)
                );
            }
        }
        _ => {}
    }
    Ok(())
}

pub fn draft_from(sub: &clap::ArgMatches) -> Result<RecurrentDraft> {
    Ok(RecurrentDraft {
        amount: draft_amount(sub.get_one::<String>("amount").unwrap()),
        r#type: sub.get_one::<String>("type").unwrap().parse()?,
        description: sub.get_one::<String>("description").map(|s| s.to_string()),
        category_id: sub.get_one::<i64>("category-id").copied(),
        spending_group_ids: sub
            .get_many::<i64>("group")
            .map(|v| v.copied().collect())
            .unwrap_or_default(),
        frequency: sub.get_one::<String>("frequency").unwrap().parse()?,
        start_date: parse_date(sub.get_one::<String>("start-date").unwrap())?,
        end_date: sub
            .get_one::<String>("end-date")
            .map(|s| parse_date(s))
            .transpose()?,
    })
}

fn refetch(api: &dyn FinanceApi) -> Result<()> {
    print_recurrent(&api.list_recurrent(&RecurrentQuery::default())?);
    Ok(())
}

pub fn due_schedule(api: &dyn FinanceApi) -> Result<DueSchedule> {
    let data = api.list_recurrent(&RecurrentQuery::default())?;
    Ok(group_by_next_date(&data)?)
}

#[derive(Debug, Serialize)]
pub struct DueRow {
    pub next: String,
    pub count: usize,
    pub total: String,
}

/// Chronological rows, the unscheduled bucket last.
pub fn due_rows(schedule: DueSchedule) -> Vec<DueRow> {
    schedule
        .chronological()
        .into_iter()
        .map(|(key, bucket)| DueRow {
            next: key.to_string(),
            count: bucket.transactions.len(),
            total: fmt_money(&bucket.total_amount),
        })
        .collect()
}

fn print_recurrent(data: &[RecurrentTransaction]) {
    let rows = data
        .iter()
        .map(|r| {
            vec![
                r.id.to_string(),
                r.frequency.to_string(),
                r.r#type.to_string(),
                r.amount.clone(),
                r.category.name.clone(),
                r.start_date.to_string(),
                r.end_date.map(|d| d.to_string()).unwrap_or_default(),
                r.next_transaction
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "None".into()),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Id", "Frequency", "Type", "Amount", "Category", "Start", "End", "Next"],
            rows,
        )
    );
}
