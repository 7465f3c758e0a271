// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Local checks run before any request is sent.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{CategoryDraft, RecurrentDraft, SpendingGroupDraft, TransactionDraft};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Category name cannot be empty")]
    EmptyCategoryName,
    #[error("Spending group name cannot be empty")]
    EmptyGroupName,
    #[error("Amount must be a non-zero number")]
    MissingAmount,
    #[error("Select a category")]
    MissingCategory,
    #[error("End date {end} is before start date {start}")]
    EndBeforeStart {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },
}

pub fn category(draft: &CategoryDraft) -> Result<(), ValidationError> {
    if draft.name.trim().is_empty() {
        return Err(ValidationError::EmptyCategoryName);
    }
    Ok(())
}

pub fn spending_group(draft: &SpendingGroupDraft) -> Result<(), ValidationError> {
    if draft.name.trim().is_empty() {
        return Err(ValidationError::EmptyGroupName);
    }
    Ok(())
}

fn amount_and_category(amount: Option<Decimal>, category_id: Option<i64>) -> Result<(), ValidationError> {
    match amount {
        Some(a) if !a.is_zero() => {}
        _ => return Err(ValidationError::MissingAmount),
    }
    if category_id.is_none() {
        return Err(ValidationError::MissingCategory);
    }
    Ok(())
}

pub fn transaction(draft: &TransactionDraft) -> Result<(), ValidationError> {
    amount_and_category(draft.amount, draft.category_id)
}

pub fn recurrent(draft: &RecurrentDraft) -> Result<(), ValidationError> {
    amount_and_category(draft.amount, draft.category_id)?;
    if let Some(end) = draft.end_date {
        if end < draft.start_date {
            return Err(ValidationError::EndBeforeStart {
                start: draft.start_date,
                end,
            });
        }
    }
    Ok(())
}
