// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Expense,
    Deposit,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Expense => "EXPENSE",
            TransactionType::Deposit => "DEPOSIT",
        }
    }

    /// Applies the net-amount sign: deposits positive, expenses negative.
    pub fn signed(&self, amount: Decimal) -> Decimal {
        match self {
            TransactionType::Deposit => amount,
            TransactionType::Expense => -amount,
        }
    }

    pub fn from_total(total: Decimal) -> Self {
        if total >= Decimal::ZERO {
            TransactionType::Deposit
        } else {
            TransactionType::Expense
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid {what} '{value}'")]
pub struct ParseKindError {
    what: &'static str,
    value: String,
}

impl FromStr for TransactionType {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EXPENSE" => Ok(TransactionType::Expense),
            "DEPOSIT" => Ok(TransactionType::Deposit),
            _ => Err(ParseKindError {
                what: "transaction type",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Frequency {
    Weekly,
    Monthly,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::Weekly => f.write_str("WEEKLY"),
            Frequency::Monthly => f.write_str("MONTHLY"),
        }
    }
}

impl FromStr for Frequency {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "WEEKLY" => Ok(Frequency::Weekly),
            "MONTHLY" => Ok(Frequency::Monthly),
            _ => Err(ParseKindError {
                what: "frequency",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub amount: String, // decimal string, parsed at aggregation time
    pub r#type: TransactionType,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub category: CategoryRef,
    #[serde(default)]
    pub spending_groups: Vec<GroupRef>,
}

impl Transaction {
    pub fn is_personal(&self) -> bool {
        self.spending_groups.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrentTransaction {
    pub id: i64,
    pub amount: String,
    pub r#type: TransactionType,
    pub description: Option<String>,
    pub category: CategoryRef,
    #[serde(default)]
    pub spending_groups: Vec<GroupRef>,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub next_transaction: Option<NaiveDate>, // computed by the backend
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub r#type: TransactionType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendingGroup {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

// Request bodies

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionDraft {
    pub amount: Option<Decimal>,
    pub r#type: TransactionType,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub category_id: Option<i64>,
    pub spending_group_ids: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecurrentDraft {
    pub amount: Option<Decimal>,
    pub r#type: TransactionType,
    pub description: Option<String>,
    pub category_id: Option<i64>,
    pub spending_group_ids: Vec<i64>,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDraft {
    pub name: String,
    pub r#type: TransactionType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpendingGroupDraft {
    pub name: String,
    pub description: Option<String>,
}

