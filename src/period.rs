// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Maps a period keyword and a reference date to a concrete date range.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Today,
    Month,
    Year,
    All,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PeriodError {
    #[error("Invalid period '{0}', expected today|month|year|all")]
    Unknown(String),
    #[error("Date {0} has no representable period boundary")]
    OutOfRange(NaiveDate),
}

impl FromStr for Period {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "today" => Ok(Period::Today),
            "month" => Ok(Period::Month),
            "year" => Ok(Period::Year),
            "all" => Ok(Period::All),
            _ => Err(PeriodError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Period::Today => "today",
            Period::Month => "month",
            Period::Year => "year",
            Period::All => "all",
        };
        f.write_str(s)
    }
}

/// An inclusive date range. A missing `end` is an open-ended filter starting at `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && self.end.is_none_or(|end| date <= end)
    }
}

/// `None` means no date filter at all (the `all` period).
pub fn resolve(period: Period, reference: NaiveDate) -> Result<Option<DateRange>, PeriodError> {
    let range = match period {
        Period::Today => DateRange {
            start: reference,
            end: None,
        },
        Period::Month => {
            let start = reference
                .with_day(1)
                .ok_or(PeriodError::OutOfRange(reference))?;
            let end = start
                .checked_add_months(Months::new(1))
                .and_then(|next| next.pred_opt())
                .ok_or(PeriodError::OutOfRange(reference))?;
            DateRange {
                start,
                end: Some(end),
            }
        }
        Period::Year => {
            let start = NaiveDate::from_ymd_opt(reference.year(), 1, 1)
                .ok_or(PeriodError::OutOfRange(reference))?;
            let end = NaiveDate::from_ymd_opt(reference.year(), 12, 31)
                .ok_or(PeriodError::OutOfRange(reference))?;
            DateRange {
                start,
                end: Some(end),
            }
        }
        Period::All => return Ok(None),
    };
    Ok(Some(range))
}

