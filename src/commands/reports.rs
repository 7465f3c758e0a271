// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{self, CategoryAggregate, accumulate, parse_amount};
use crate::api::{FinanceApi, RecurrentQuery, TransactionQuery};
use crate::commands::transaction_query;
use crate::models::TransactionType;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::{Context, Result, anyhow};
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(api: &dyn FinanceApi, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("by-category", sub)) => by_category(api, sub)?,
        Some(("summary", sub)) => summary(api, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRow {
    pub category: String,
    pub r#type: TransactionType,
    pub transactions: usize,
    pub total: Decimal,
}

/// Fetch, aggregate and order: most expense-heavy category first.
pub fn category_rows(api: &dyn FinanceApi, query: &TransactionQuery) -> Result<Vec<CategoryRow>> {
    let data = api.list_transactions(query)?;
    let breakdown = aggregate::aggregate(&data)?;
    Ok(aggregate::order(breakdown)
        .into_iter()
        .map(|(category, agg): (String, CategoryAggregate)| CategoryRow {
            category,
            r#type: agg.r#type,
            transactions: agg.transactions.len(),
            total: agg.total_amount,
        })
        .collect())
}

fn by_category(api: &dyn FinanceApi, sub: &clap::ArgMatches) -> Result<()> {
    let query = transaction_query(api, sub)?;
    let data = category_rows(api, &query)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .iter()
            .map(|r| {
                vec![
                    r.category.clone(),
                    r.r#type.to_string(),
                    r.transactions.to_string(),
                    fmt_money(&r.total),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", "Type", "Transactions", "Net amount"], rows)
        );
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub deposits: Decimal,
    pub expenses: Decimal,
    pub net: Decimal,
    pub transactions: usize,
    pub recurrent_scheduled: usize,
    pub recurrent_net: Decimal,
}

/// Fetches transactions and recurrent transactions concurrently and totals
/// them. Deposits and expenses are summed by transaction type.
pub fn summarize(api: &dyn FinanceApi, query: &TransactionQuery) -> Result<Summary> {
    let rt_query = RecurrentQuery { range: query.range };
    let (txs, rts) = std::thread::scope(|s| -> Result<_> {
        let tx_handle = s.spawn(|| api.list_transactions(query));
        let rt_handle = s.spawn(|| api.list_recurrent(&rt_query));
        let txs = tx_handle
            .join()
            .map_err(|_| anyhow!("transaction fetch panicked"))??;
        let rts = rt_handle
            .join()
            .map_err(|_| anyhow!("recurrent fetch panicked"))??;
        Ok((txs, rts))
    })?;

    let mut deposits = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;
    for tx in &txs {
        let amt = parse_amount(tx.id, &tx.amount)?;
        let total = match tx.r#type {
            TransactionType::Deposit => &mut deposits,
            TransactionType::Expense => &mut expenses,
        };
        *total = accumulate(*total, amt, tx.id)?;
    }
    let net = deposits
        .checked_sub(expenses)
        .context("Net amount is out of range")?;
    let schedule = crate::recurrent::group_by_next_date(&rts)?;
    Ok(Summary {
        deposits,
        expenses,
        net,
        transactions: txs.len(),
        recurrent_scheduled: rts.len(),
        recurrent_net: schedule.net_total(),
    })
}

fn summary(api: &dyn FinanceApi, sub: &clap::ArgMatches) -> Result<()> {
    let query = transaction_query(api, sub)?;
    let s = summarize(api, &query)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s)? {
        let rows = vec![
            vec!["Deposits".to_string(), fmt_money(&s.deposits)],
            vec!["Expenses".to_string(), fmt_money(&s.expenses)],
            vec!["Net".to_string(), fmt_money(&s.net)],
            vec!["Transactions".to_string(), s.transactions.to_string()],
            vec!["Recurrent scheduled".to_string(), s.recurrent_scheduled.to_string()],
            vec!["Recurrent net".to_string(), fmt_money(&s.recurrent_net)],
        ];
        println!("{}", pretty_table(&["Metric", "Value"], rows));
    }
    Ok(())
}
