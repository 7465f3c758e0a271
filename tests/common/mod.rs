// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use std::sync::Mutex;

use chrono::NaiveDate;
use spendwise::api::{ApiError, ApiResult, FinanceApi, RecurrentQuery, TransactionQuery};
use spendwise::models::{
    Category, CategoryDraft, CategoryRef, Frequency, GroupRef, RecurrentDraft,
    RecurrentTransaction, SpendingGroup, SpendingGroupDraft, Transaction, TransactionDraft,
    TransactionType,
};

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn tx(id: i64, category: &str, kind: TransactionType, amount: &str) -> Transaction {
    Transaction {
        id,
        amount: amount.to_string(),
        r#type: kind,
        date: date("2025-03-10"),
        description: None,
        category: CategoryRef {
            id: category.len() as i64,
            name: category.to_string(),
        },
        spending_groups: Vec::new(),
    }
}

pub fn tx_on(id: i64, on: &str, category: &str, kind: TransactionType, amount: &str) -> Transaction {
    Transaction {
        date: date(on),
        ..tx(id, category, kind, amount)
    }
}

pub fn in_group(mut t: Transaction, id: i64, name: &str) -> Transaction {
    t.spending_groups.push(GroupRef {
        id,
        name: name.to_string(),
    });
    t
}

pub fn recurrent(
    id: i64,
    kind: TransactionType,
    amount: &str,
    next: Option<&str>,
) -> RecurrentTransaction {
    RecurrentTransaction {
        id,
        amount: amount.to_string(),
        r#type: kind,
        description: None,
        category: CategoryRef {
            id: 1,
            name: "Rent".into(),
        },
        spending_groups: Vec::new(),
        frequency: Frequency::Monthly,
        start_date: date("2025-01-01"),
        end_date: None,
        next_transaction: next.map(date),
    }
}

/// In-memory backend that filters like the real one and records every call.
#[derive(Default)]
pub struct FakeApi {
    pub transactions: Mutex<Vec<Transaction>>,
    pub recurrent: Mutex<Vec<RecurrentTransaction>>,
    pub categories: Mutex<Vec<Category>>,
    pub groups: Mutex<Vec<SpendingGroup>>,
    pub calls: Mutex<Vec<String>>,
    pub queries: Mutex<Vec<TransactionQuery>>,
    pub unauthorized: bool,
}

impl FakeApi {
    pub fn with_transactions(data: Vec<Transaction>) -> Self {
        let api = FakeApi::default();
        *api.transactions.lock().unwrap() = data;
        api
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &str) -> ApiResult<()> {
        self.calls.lock().unwrap().push(call.to_string());
        if self.unauthorized {
            return Err(ApiError::Unauthorized);
        }
        Ok(())
    }
}

impl FinanceApi for FakeApi {
    fn list_transactions(&self, query: &TransactionQuery) -> ApiResult<Vec<Transaction>> {
        self.record("GET /transactions")?;
        self.queries.lock().unwrap().push(query.clone());
        let data = self.transactions.lock().unwrap();
        Ok(data
            .iter()
            .filter(|t| query.range.is_none_or(|r| r.contains(t.date)))
            .filter(|t| {
                let g = &query.groups;
                g.is_unfiltered()
                    || (g.include_personal && t.is_personal())
                    || t.spending_groups
                        .iter()
                        .any(|sg| g.spending_group_ids.contains(&sg.id))
            })
            .cloned()
            .collect())
    }

    fn create_transaction(&self, draft: &TransactionDraft) -> ApiResult<Transaction> {
        self.record("POST /transactions")?;
        let mut data = self.transactions.lock().unwrap();
        let created = Transaction {
            id: data.len() as i64 + 1,
            amount: draft.amount.unwrap_or_default().to_string(),
            r#type: draft.r#type,
            date: draft.date,
            description: draft.description.clone(),
            category: CategoryRef {
                id: draft.category_id.unwrap_or_default(),
                name: "Food".into(),
            },
            spending_groups: Vec::new(),
        };
        data.push(created.clone());
        Ok(created)
    }

    fn update_transaction(&self, id: i64, _draft: &TransactionDraft) -> ApiResult<Transaction> {
        self.record(&format!("PATCH /transactions/{}", id))?;
        let data = self.transactions.lock().unwrap();
        data.iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(ApiError::Status {
                status: 404,
                body: "not found".into(),
            })
    }

    fn delete_transaction(&self, id: i64) -> ApiResult<()> {
        self.record(&format!("DELETE /transactions/{}", id))?;
        self.transactions.lock().unwrap().retain(|t| t.id != id);
        Ok(())
    }

    fn list_recurrent(&self, _query: &RecurrentQuery) -> ApiResult<Vec<RecurrentTransaction>> {
        self.record("GET /recurrent_transactions")?;
        Ok(self.recurrent.lock().unwrap().clone())
    }

    fn create_recurrent(&self, draft: &RecurrentDraft) -> ApiResult<RecurrentTransaction> {
        self.record("POST /recurrent_transactions")?;
        let mut data = self.recurrent.lock().unwrap();
        let mut created = recurrent(
            data.len() as i64 + 1,
            draft.r#type,
            &draft.amount.unwrap_or_default().to_string(),
            None,
        );
        created.frequency = draft.frequency;
        created.start_date = draft.start_date;
        created.end_date = draft.end_date;
        data.push(created.clone());
        Ok(created)
    }

    fn update_recurrent(&self, id: i64, _draft: &RecurrentDraft) -> ApiResult<RecurrentTransaction> {
        self.record(&format!("PATCH /recurrent_transactions/{}", id))?;
        Err(ApiError::Status {
            status: 404,
            body: "not found".into(),
        })
    }

    fn delete_recurrent(&self, id: i64) -> ApiResult<()> {
        self.record(&format!("DELETE /recurrent_transactions/{}", id))?;
        self.recurrent.lock().unwrap().retain(|t| t.id != id);
        Ok(())
    }

    fn list_categories(&self, kind: Option<TransactionType>) -> ApiResult<Vec<Category>> {
        self.record("GET /categories")?;
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .filter(|c| kind.is_none_or(|k| c.r#type == k))
            .cloned()
            .collect())
    }

    fn create_category(&self, draft: &CategoryDraft) -> ApiResult<Category> {
        self.record("POST /categories")?;
        let mut data = self.categories.lock().unwrap();
        let created = Category {
            id: data.len() as i64 + 1,
            name: draft.name.clone(),
            r#type: draft.r#type,
        };
        data.push(created.clone());
        Ok(created)
    }

    fn update_category(&self, id: i64, draft: &CategoryDraft) -> ApiResult<Category> {
        self.record(&format!("PATCH /categories/{}", id))?;
        Ok(Category {
            id,
            name: draft.name.clone(),
            r#type: draft.r#type,
        })
    }

    fn delete_category(&self, id: i64) -> ApiResult<()> {
        self.record(&format!("DELETE /categories/{}", id))?;
        self.categories.lock().unwrap().retain(|c| c.id != id);
        Ok(())
    }

    fn list_spending_groups(&self) -> ApiResult<Vec<SpendingGroup>> {
        self.record("GET /spending_groups")?;
        Ok(self.groups.lock().unwrap().clone())
    }

    fn create_spending_group(&self, draft: &SpendingGroupDraft) -> ApiResult<SpendingGroup> {
        self.record("POST /spending_groups")?;
        let mut data = self.groups.lock().unwrap();
        let created = SpendingGroup {
            id: data.len() as i64 + 1,
            name: draft.name.clone(),
            description: draft.description.clone(),
        };
        data.push(created.clone());
        Ok(created)
    }

    fn update_spending_group(&self, id: i64, draft: &SpendingGroupDraft) -> ApiResult<SpendingGroup> {
        self.record(&format!("PATCH /spending_groups/{}", id))?;
        Ok(SpendingGroup {
            id,
            name: draft.name.clone(),
            description: draft.description.clone(),
        })
    }

    fn delete_spending_group(&self, id: i64) -> ApiResult<()> {
        self.record(&format!("DELETE /spending_groups/{}", id))?;
        self.groups.lock().unwrap().retain(|g| g.id != id);
        Ok(())
    }
}
