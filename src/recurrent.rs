// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use crate::aggregate::{AggregateError, accumulate, signed_amount};
use crate::models::RecurrentTransaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DueKey {
    Date(NaiveDate),
    None, // no next occurrence scheduled; sorts after every date
}

impl fmt::Display for DueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DueKey::Date(d) => write!(f, "{}", d),
            DueKey::None => f.write_str("None"),
        }
    }
}

impl Serialize for DueKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DueBucket {
    pub transactions: Vec<RecurrentTransaction>,
    pub total_amount: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DueSchedule {
    buckets: Vec<(DueKey, DueBucket)>,
    #[serde(skip)]
    net: Decimal,
}

impl DueSchedule {
    pub fn get(&self, key: &DueKey) -> Option<&DueBucket> {
        self.buckets.iter().find(|(k, _)| k == key).map(|(_, b)| b)
    }

    /// Keys in first-appearance order.
    pub fn keys(&self) -> Vec<DueKey> {
        self.buckets.iter().map(|(k, _)| *k).collect()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn net_total(&self) -> Decimal {
        self.net
    }

    /// Buckets sorted by date, with the `None` bucket last.
    pub fn chronological(self) -> Vec<(DueKey, DueBucket)> {
        let mut buckets = self.buckets;
        buckets.sort_by_key(|(k, _)| *k);
        buckets
    }
}

pub fn group_by_next_date(
    recurrent: &[RecurrentTransaction],
) -> Result<DueSchedule, AggregateError> {
    let mut index: HashMap<DueKey, usize> = HashMap::new();
    let mut buckets: Vec<(DueKey, DueBucket)> = Vec::new();
    let mut net = Decimal::ZERO;

    for rt in recurrent {
        let delta = signed_amount(rt.id, &rt.amount, rt.r#type)?;
        let key = rt.next_transaction.map_or(DueKey::None, DueKey::Date);
        let slot = *index.entry(key).or_insert_with(|| {
            buckets.push((
                key,
                DueBucket {
                    transactions: Vec::new(),
                    total_amount: Decimal::ZERO,
                },
            ));
            buckets.len() - 1
        });
        let bucket = &mut buckets[slot].1;
        bucket.transactions.push(rt.clone());
        bucket.total_amount = accumulate(bucket.total_amount, delta, rt.id)?;
        net = accumulate(net, delta, rt.id)?;
    }
    Ok(DueSchedule { buckets, net })
}
