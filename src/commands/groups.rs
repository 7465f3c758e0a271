// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::FinanceApi;
use crate::groups::{GroupOptionId, options_for};
use crate::models::{SpendingGroup, SpendingGroupDraft};
use crate::notify::{NoticeKind, Notifier};
use crate::utils::{maybe_print_json, pretty_table};
use crate::validate;
use anyhow::Result;

pub fn handle(api: &dyn FinanceApi, notifier: &dyn Notifier, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let draft = draft_from(sub);
            if let Err(e) = validate::spending_group(&draft) {
                notifier.notify(NoticeKind::Warning, &e.to_string());
                return Ok(());
            }
            let created = api.create_spending_group(&draft)?;
            notifier.notify(
                NoticeKind::Success,
                &format!("Added spending group '{}'", created.name),
            );
            print_groups(&api.list_spending_groups()?);
        }
        Some(("list", sub)) => {
            let data = api.list_spending_groups()?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
                print_groups(&data);
            }
        }
        Some(("edit", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            let draft = draft_from(sub);
            if let Err(e) = validate::spending_group(&draft) {
                notifier.notify(NoticeKind::Warning, &e.to_string());
                return Ok(());
            }
            api.update_spending_group(id, &draft)?;
            notifier.notify(NoticeKind::Success, &format!("Updated spending group {}", id));
            print_groups(&api.list_spending_groups()?);
        }
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            api.delete_spending_group(id)?;
            notifier.notify(NoticeKind::Success, &format!("Removed spending group {}", id));
            print_groups(&api.list_spending_groups()?);
        }
        _ => {}
    }
    Ok(())
}

fn draft_from(sub: &clap::ArgMatches) -> SpendingGroupDraft {
    SpendingGroupDraft {
        name: sub.get_one::<String>("name").unwrap().trim().to_string(),
        description: sub.get_one::<String>("description").map(|s| s.to_string()),
    }
}

/// Lists the selectable filter options, the synthetic Personal option first.
fn print_groups(groups: &[SpendingGroup]) {
    let rows = options_for(groups)
        .into_iter()
        .map(|opt| {
            let description = match opt.id {
                GroupOptionId::Personal => "Transactions without a group".to_string(),
                GroupOptionId::Group(id) => groups
                    .iter()
                    .find(|g| g.id == id)
                    .and_then(|g| g.description.clone())
                    .unwrap_or_default(),
            };
            vec![opt.id.to_string(), opt.name, description]
        })
        .collect();
    println!("{}", pretty_table(&["Id", "Group", "Description"], rows));
}
