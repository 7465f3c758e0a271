// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Per-category aggregation of a fetched transaction list.
//!
//! Buckets are keyed by category name and kept in first-seen order. Each bucket
//! carries a signed total (deposits positive, expenses negative) and is classified
//! by the sign of that total once every transaction has been folded in.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::models::{Transaction, TransactionType};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregateError {
    #[error("Transaction {transaction_id} has a malformed amount '{amount}'")]
    InvalidAmount { transaction_id: i64, amount: String },
    #[error("Total overflowed while adding transaction {transaction_id}")]
    Overflow { transaction_id: i64 },
}

/// Parses a wire amount as sent, without applying any sign.
pub fn parse_amount(transaction_id: i64, amount: &str) -> Result<Decimal, AggregateError> {
    amount
        .trim()
        .parse::<Decimal>()
        .map_err(|_| AggregateError::InvalidAmount {
            transaction_id,
            amount: amount.to_string(),
        })
}

/// Parses a wire amount and applies the net-amount sign for `kind`.
pub fn signed_amount(
    transaction_id: i64,
    amount: &str,
    kind: TransactionType,
) -> Result<Decimal, AggregateError> {
    Ok(kind.signed(parse_amount(transaction_id, amount)?))
}

/// Adds `delta` to `total`, failing instead of panicking when the sum leaves
/// the `Decimal` range.
pub fn accumulate(
    total: Decimal,
    delta: Decimal,
    transaction_id: i64,
) -> Result<Decimal, AggregateError> {
    total
        .checked_add(delta)
        .ok_or(AggregateError::Overflow { transaction_id })
}

pub fn net_amount(tx: &Transaction) -> Result<Decimal, AggregateError> {
    signed_amount(tx.id, &tx.amount, tx.r#type)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAggregate {
    pub transactions: Vec<Transaction>,
    pub total_amount: Decimal,
    pub r#type: TransactionType,
}

/// Category buckets in insertion order of each category's first transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    entries: Vec<(String, CategoryAggregate)>,
    #[serde(skip)]
    net: Decimal,
}

impl CategoryBreakdown {
    pub fn get(&self, name: &str) -> Option<&CategoryAggregate> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, agg)| agg)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryAggregate)> {
        self.entries.iter().map(|(n, agg)| (n.as_str(), agg))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every bucket, accumulated in transaction order.
    pub fn net_total(&self) -> Decimal {
        self.net
    }

    pub fn into_entries(self) -> Vec<(String, CategoryAggregate)> {
        self.entries
    }
}

/// Folds `transactions` into category buckets.
///
/// A malformed amount or an overflowing total aborts the whole fold; no
/// partial breakdown is returned.
pub fn aggregate(transactions: &[Transaction]) -> Result<CategoryBreakdown, AggregateError> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<(String, CategoryAggregate)> = Vec::new();
    let mut net = Decimal::ZERO;

    for tx in transactions {
        let delta = net_amount(tx)?;
        let slot = *index.entry(tx.category.name.as_str()).or_insert_with(|| {
            entries.push((
                tx.category.name.clone(),
                CategoryAggregate {
                    transactions: Vec::new(),
                    total_amount: Decimal::ZERO,
                    r#type: TransactionType::Deposit,
                },
            ));
            entries.len() - 1
        });
        let agg = &mut entries[slot].1;
        agg.transactions.push(tx.clone());
        agg.total_amount = accumulate(agg.total_amount, delta, tx.id)?;
        net = accumulate(net, delta, tx.id)?;
    }

    for (_, agg) in entries.iter_mut() {
        agg.r#type = TransactionType::from_total(agg.total_amount);
    }
    Ok(CategoryBreakdown { entries, net })
}

/// Sorts buckets ascending by total, most expense-heavy first.
/// The sort is stable, so equal totals keep first-seen order.
pub fn order(breakdown: CategoryBreakdown) -> Vec<(String, CategoryAggregate)> {
    let mut items = breakdown.into_entries();
    items.sort_by(|a, b| a.1.total_amount.cmp(&b.1.total_amount));
    items
}
