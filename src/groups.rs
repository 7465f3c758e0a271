// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Spending-group selection, including the synthetic "Personal" option.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::models::SpendingGroup;

pub const PERSONAL_OPTION_ID: &str = "personal";
pub const PERSONAL_OPTION_NAME: &str = "Personal";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupOptionId {
    Personal,
    Group(i64),
}

impl fmt::Display for GroupOptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupOptionId::Personal => f.write_str(PERSONAL_OPTION_ID),
            GroupOptionId::Group(id) => write!(f, "{}", id),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid spending group '{0}', expected a numeric id or 'personal'")]
pub struct GroupOptionError(String);

impl FromStr for GroupOptionId {
    type Err = GroupOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(PERSONAL_OPTION_ID) {
            return Ok(GroupOptionId::Personal);
        }
        s.parse::<i64>()
            .map(GroupOptionId::Group)
            .map_err(|_| GroupOptionError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupOption {
    pub id: GroupOptionId,
    pub name: String,
}

impl GroupOption {
    pub fn personal() -> Self {
        GroupOption {
            id: GroupOptionId::Personal,
            name: PERSONAL_OPTION_NAME.to_string(),
        }
    }

    pub fn from_group(group: &SpendingGroup) -> Self {
        GroupOption {
            id: GroupOptionId::Group(group.id),
            name: group.name.clone(),
        }
    }
}

/// The selectable options: Personal first, then every known group.
pub fn options_for(groups: &[SpendingGroup]) -> Vec<GroupOption> {
    std::iter::once(GroupOption::personal())
        .chain(groups.iter().map(GroupOption::from_group))
        .collect()
}

/// Query-side view of a group selection.
///
/// The default value (no ids, personal off) means no group filter: every
/// transaction is returned regardless of group membership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct GroupFilter {
    pub spending_group_ids: Vec<i64>,
    pub include_personal: bool,
}

impl GroupFilter {
    pub fn is_unfiltered(&self) -> bool {
        self.spending_group_ids.is_empty() && !self.include_personal
    }
}

pub fn to_query_params(selected: &[GroupOption]) -> GroupFilter {
    let mut filter = GroupFilter::default();
    for opt in selected {
        match opt.id {
            GroupOptionId::Personal => filter.include_personal = true,
            GroupOptionId::Group(id) => {
                if !filter.spending_group_ids.contains(&id) {
                    filter.spending_group_ids.push(id);
                }
            }
        }
    }
    filter
}
