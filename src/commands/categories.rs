// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::FinanceApi;
use crate::models::{Category, CategoryDraft, TransactionType};
use crate::notify::{NoticeKind, Notifier};
use crate::utils::{maybe_print_json, pretty_table};
use crate::validate;
use anyhow::Result;

pub fn handle(api: &dyn FinanceApi, notifier: &dyn Notifier, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let draft = draft_from(sub)?;
            if let Err(e) = validate::category(&draft) {
                notifier.notify(NoticeKind::Warning, &e.to_string());
                return Ok(());
            }
            let created = api.create_category(&draft)?;
            notifier.notify(
                NoticeKind::Success,
                &format!("Added category '{}' ({})", created.name, created.r#type),
            );
            print_categories(&api.list_categories(None)?);
        }
        Some(("list", sub)) => {
            let kind = sub
                .get_one::<String>("type")
                .map(|s| s.parse::<TransactionType>())
                .transpose()?;
            let data = api.list_categories(kind)?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
                print_categories(&data);
            }
        }
        Some(("edit", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            let draft = draft_from(sub)?;
            if let Err(e) = validate::category(&draft) {
                notifier.notify(NoticeKind::Warning, &e.to_string());
                return Ok(());
            }
            api.update_category(id, &draft)?;
            notifier.notify(NoticeKind::Success, &format!("Updated category {}", id));
            print_categories(&api.list_categories(None)?);
        }
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            api.delete_category(id)?;
            notifier.notify(NoticeKind::Success, &format!("Removed category {}", id));
            print_categories(&api.list_categories(None)?);
        }
        _ => {}
    }
    Ok(())
}

fn draft_from(sub: &clap::ArgMatches) -> Result<CategoryDraft> {
    let name = sub.get_one::<String>("name").unwrap();
    let kind = sub.get_one::<String>("type").unwrap().parse()?;
    Ok(CategoryDraft {
        name: name.trim().to_string(),
        r#type: kind,
    })
}

fn print_categories(data: &[Category]) {
    let rows = data
        .iter()
        .map(|c| vec![c.id.to_string(), c.name.clone(), c.r#type.to_string()])
        .collect();
    println!("{}", pretty_table(&["Id", "Category", "Type"], rows));
}
