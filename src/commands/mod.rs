// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod auth;
pub mod categories;
pub mod exporter;
pub mod groups;
pub mod recurrent;
pub mod reports;
pub mod transactions;

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::api::{FinanceApi, TransactionQuery};
use crate::groups::{GroupOptionId, to_query_params};
use crate::period::{self, DateRange, Period};
use crate::utils::{parse_date, parse_decimal, selected_options, today};

/// Reference date from `--date`, falling back to today.
pub fn reference_date(sub: &clap::ArgMatches) -> Result<NaiveDate> {
    match sub.get_one::<String>("date") {
        Some(d) => parse_date(d),
        None => Ok(today()),
    }
}

/// `--amount` for a draft. Unparseable input is left empty so validation
/// rejects it as a missing amount.
pub fn draft_amount(raw: &str) -> Option<Decimal> {
    match parse_decimal(raw) {
        Ok(amount) => Some(amount),
        Err(e) => {
            tracing::debug!(error = %e, "discarding amount");
            None
        }
    }
}

pub fn date_range(sub: &clap::ArgMatches) -> Result<Option<DateRange>> {
    let period: Period = sub
        .get_one::<String>("period")
        .map(|s| s.parse::<Period>())
        .transpose()?
        .unwrap_or(Period::Month);
    Ok(period::resolve(period, reference_date(sub)?)?)
}

/// Builds the transactions query from `--period`, `--date` and `--group` flags.
/// Group names are looked up only when a group filter was given.
pub fn transaction_query(api: &dyn FinanceApi, sub: &clap::ArgMatches) -> Result<TransactionQuery> {
    let ids = sub
        .get_many::<String>("group")
        .map(|vals| {
            vals.map(|v| v.parse::<GroupOptionId>())
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()?
        .unwrap_or_default();
    let groups = if ids.iter().any(|id| matches!(id, GroupOptionId::Group(_))) {
        api.list_spending_groups()?
    } else {
        Vec::new()
    };
    let selected = selected_options(&ids, &groups);
    tracing::debug!(?selected, "group selection");
    Ok(TransactionQuery {
        range: date_range(sub)?,
        groups: to_query_params(&selected),
    })
}
