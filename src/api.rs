// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info};

use crate::groups::GroupFilter;
use crate::models::{
    Category, CategoryDraft, RecurrentDraft, RecurrentTransaction, SpendingGroup,
    SpendingGroupDraft, Transaction, TransactionDraft, TransactionType,
};
use crate::period::DateRange;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Could not reach backend: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("Unexpected response body: {0}")]
    Decode(#[source] reqwest::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

fn date_pairs(range: Option<&DateRange>, out: &mut Vec<(String, String)>) {
    if let Some(r) = range {
        out.push(("startDate".into(), r.start.format("%Y-%m-%d").to_string()));
        if let Some(end) = r.end {
            out.push(("endDate".into(), end.format("%Y-%m-%d").to_string()));
        }
    }
}

/// Parameters for `GET /transactions`. Equal values describe the same request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct TransactionQuery {
    pub range: Option<DateRange>,
    pub groups: GroupFilter,
}

impl TransactionQuery {
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        date_pairs(self.range.as_ref(), &mut out);
        for id in &self.groups.spending_group_ids {
            out.push(("spendingGroupIds[]".into(), id.to_string()));
        }
        if self.groups.include_personal {
            out.push(("includePersonal".into(), "true".into()));
        }
        out
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct RecurrentQuery {
    pub range: Option<DateRange>,
}

impl RecurrentQuery {
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        date_pairs(self.range.as_ref(), &mut out);
        out
    }
}

/// The backend contract consumed by the client.
pub trait FinanceApi: Send + Sync {
    fn list_transactions(&self, query: &TransactionQuery) -> ApiResult<Vec<Transaction>>;
    fn create_transaction(&self, draft: &TransactionDraft) -> ApiResult<Transaction>;
    fn update_transaction(&self, id: i64, draft: &TransactionDraft) -> ApiResult<Transaction>;
    fn delete_transaction(&self, id: i64) -> ApiResult<()>;

    fn list_recurrent(&self, query: &RecurrentQuery) -> ApiResult<Vec<RecurrentTransaction>>;
    fn create_recurrent(&self, draft: &RecurrentDraft) -> ApiResult<RecurrentTransaction>;
    fn update_recurrent(&self, id: i64, draft: &RecurrentDraft)
    -> ApiResult<RecurrentTransaction>;
    fn delete_recurrent(&self, id: i64) -> ApiResult<()>;

    fn list_categories(&self, kind: Option<TransactionType>) -> ApiResult<Vec<Category>>;
    fn create_category(&self, draft: &CategoryDraft) -> ApiResult<Category>;
    fn update_category(&self, id: i64, draft: &CategoryDraft) -> ApiResult<Category>;
    fn delete_category(&self, id: i64) -> ApiResult<()>;

    fn list_spending_groups(&self) -> ApiResult<Vec<SpendingGroup>>;
    fn create_spending_group(&self, draft: &SpendingGroupDraft) -> ApiResult<SpendingGroup>;
    fn update_spending_group(
        &self,
        id: i64,
        draft: &SpendingGroupDraft,
    ) -> ApiResult<SpendingGroup>;
    fn delete_spending_group(&self, id: i64) -> ApiResult<()>;
}

pub struct HttpApi {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpApi {
    pub fn new(client: Client, base_url: &str, token: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authed(&self, rb: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(t) => rb.bearer_auth(t),
            None => rb,
        }
    }

    fn send(&self, rb: RequestBuilder) -> ApiResult<Response> {
        let resp = self.authed(rb).send().map_err(ApiError::Transport)?;
        check_status(resp)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(String, String)]) -> ApiResult<T> {
        let url = self.url(path);
        debug!(%url, ?query, "GET");
        self.send(self.client.get(url).query(query))?
            .json()
            .map_err(ApiError::Decode)
    }

    fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        let url = self.url(path);
        info!(%url, "POST");
        self.send(self.client.post(url).json(body))?
            .json()
            .map_err(ApiError::Decode)
    }

    fn patch_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        let url = self.url(path);
        info!(%url, "PATCH");
        self.send(self.client.patch(url).json(body))?
            .json()
            .map_err(ApiError::Decode)
    }

    fn delete(&self, path: &str) -> ApiResult<()> {
        let url = self.url(path);
        info!(%url, "DELETE");
        self.send(self.client.delete(url))?;
        Ok(())
    }
}

fn check_status(resp: Response) -> ApiResult<Response> {
    let status = resp.status();
    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }
    if !status.is_success() {
        let body = resp.text().unwrap_or_default();
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(resp)
}

impl FinanceApi for HttpApi {
    fn list_transactions(&self, query: &TransactionQuery) -> ApiResult<Vec<Transaction>> {
        self.get_json("transactions", &query.to_pairs())
    }

    fn create_transaction(&self, draft: &TransactionDraft) -> ApiResult<Transaction> {
        self.post_json("transactions", draft)
    }

    fn update_transaction(&self, id: i64, draft: &TransactionDraft) -> ApiResult<Transaction> {
        self.patch_json(&format!("transactions/{}", id), draft)
    }

    fn delete_transaction(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("transactions/{}", id))
    }

    fn list_recurrent(&self, query: &RecurrentQuery) -> ApiResult<Vec<RecurrentTransaction>> {
        self.get_json("recurrent_transactions", &query.to_pairs())
    }

    fn create_recurrent(&self, draft: &RecurrentDraft) -> ApiResult<RecurrentTransaction> {
        self.post_json("recurrent_transactions", draft)
    }

    fn update_recurrent(
        &self,
        id: i64,
        draft: &RecurrentDraft,
    ) -> ApiResult<RecurrentTransaction> {
        self.patch_json(&format!("recurrent_transactions/{}", id), draft)
    }

    fn delete_recurrent(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("recurrent_transactions/{}", id))
    }

    fn list_categories(&self, kind: Option<TransactionType>) -> ApiResult<Vec<Category>> {
        let query: Vec<(String, String)> = kind
            .map(|k| vec![("type".to_string(), k.as_str().to_string())])
            .unwrap_or_default();
        self.get_json("categories", &query)
    }

    fn create_category(&self, draft: &CategoryDraft) -> ApiResult<Category> {
        self.post_json("categories", draft)
    }

    fn update_category(&self, id: i64, draft: &CategoryDraft) -> ApiResult<Category> {
        self.patch_json(&format!("categories/{}", id), draft)
    }

    fn delete_category(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("categories/{}", id))
    }

    fn list_spending_groups(&self) -> ApiResult<Vec<SpendingGroup>> {
        self.get_json("spending_groups", &[])
    }

    fn create_spending_group(&self, draft: &SpendingGroupDraft) -> ApiResult<SpendingGroup> {
        self.post_json("spending_groups", draft)
    }

    fn update_spending_group(
        &self,
        id: i64,
        draft: &SpendingGroupDraft,
    ) -> ApiResult<SpendingGroup> {
        self.patch_json(&format!("spending_groups/{}", id), draft)
    }

    fn delete_spending_group(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("spending_groups/{}", id))
    }
}
