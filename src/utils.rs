// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;

use crate::api::ApiError;
use crate::groups::{GroupOption, GroupOptionId};
use crate::models::SpendingGroup;
use crate::notify::{NoticeKind, Notifier};

const UA: &str = concat!(
    "spendwise/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/spendwise)"
);

pub fn http_client() -> Result<reqwest::blocking::Client> {
    let c = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .user_agent(UA)
        .build()?;
    Ok(c)
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn fmt_money(d: &Decimal) -> String {
    format!("{:.2}", d.round_dp(2))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

/// Names selected `--group` ids from the known group list. Unknown ids keep a
/// placeholder name; the backend decides whether they exist.
pub fn selected_options(ids: &[GroupOptionId], groups: &[SpendingGroup]) -> Vec<GroupOption> {
    ids.iter()
        .map(|id| match id {
            GroupOptionId::Personal => GroupOption::personal(),
            GroupOptionId::Group(gid) => groups
                .iter()
                .find(|g| g.id == *gid)
                .map(GroupOption::from_group)
                .unwrap_or_else(|| GroupOption {
                    id: *id,
                    name: format!("#{}", gid),
                }),
        })
        .collect()
}

/// Routes an error to the notifier with the kind the user should see.
pub fn report_error(notifier: &dyn Notifier, err: &anyhow::Error) {
    let kind = match err.downcast_ref::<ApiError>() {
        Some(ApiError::Unauthorized) => NoticeKind::Unauthorized,
        _ => NoticeKind::Error,
    };
    let message = match kind {
        NoticeKind::Unauthorized => "Unauthorized: run `spendwise login --token <TOKEN>`".to_string(),
        _ => format!("{:#}", err),
    };
    notifier.notify(kind, &message);
}
