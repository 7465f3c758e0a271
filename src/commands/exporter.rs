// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::FinanceApi;
use crate::commands::reports::category_rows;
use crate::commands::transaction_query;
use crate::notify::{NoticeKind, Notifier};
use crate::utils::fmt_money;
use anyhow::Result;
use serde_json::json;

pub fn handle(api: &dyn FinanceApi, notifier: &dyn Notifier, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(api, notifier, sub),
        Some(("by-category", sub)) => export_by_category(api, notifier, sub),
        _ => Ok(()),
    }
}

fn export_transactions(
    api: &dyn FinanceApi,
    notifier: &dyn Notifier,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let query = transaction_query(api, sub)?;
    let mut data = api.list_transactions(&query)?;
    data.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "id",
                "date",
                "type",
                "amount",
                "category",
                "spending_groups",
                "description",
            ])?;
            for t in &data {
                let groups = t
                    .spending_groups
                    .iter()
                    .map(|g| g.name.as_str())
                    .collect::<Vec<_>>()
                    .join(";");
                wtr.write_record([
                    t.id.to_string(),
                    t.date.to_string(),
                    t.r#type.to_string(),
                    t.amount.clone(),
                    t.category.name.clone(),
                    groups,
                    t.description.clone().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&data)?)?;
        }
        _ => {
            notifier.notify(
                NoticeKind::Warning,
                &format!("Unknown format: {} (use csv|json)", fmt),
            );
            return Ok(());
        }
    }
    notifier.notify(
        NoticeKind::Success,
        &format!("Exported {} transactions to {}", data.len(), out),
    );
    Ok(())
}

fn export_by_category(
    api: &dyn FinanceApi,
    notifier: &dyn Notifier,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let query = transaction_query(api, sub)?;
    let rows = category_rows(api, &query)?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["category", "type", "transactions", "total"])?;
            for r in &rows {
                wtr.write_record([
                    r.category.clone(),
                    r.r#type.to_string(),
                    r.transactions.to_string(),
                    fmt_money(&r.total),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = rows
                .iter()
                .map(|r| {
                    json!({
                        "category": r.category, "type": r.r#type, "transactions": r.transactions, "total": fmt_money(&r.total)
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            notifier.notify(
                NoticeKind::Warning,
                &format!("Unknown format: {} (use csv|json)", fmt),
            );
            return Ok(());
        }
    }
    notifier.notify(
        NoticeKind::Success,
        &format!("Exported {} categories to {}", rows.len(), out),
    );
    Ok(())
}
