// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{self, Settings};
use crate::notify::{NoticeKind, Notifier};
use anyhow::Result;
use std::path::Path;

pub fn login(path: &Path, notifier: &dyn Notifier, sub: &clap::ArgMatches) -> Result<Settings> {
    let mut settings = config::load_from(path)?;
    settings.token = Some(sub.get_one::<String>("token").unwrap().trim().to_string());
    if let Some(url) = sub.get_one::<String>("api-url") {
        settings.api_url = url.to_string();
    }
    config::save_to(path, &settings)?;
    notifier.notify(
        NoticeKind::Success,
        &format!("Token stored for {}", settings.api_url),
    );
    Ok(settings)
}

pub fn logout(path: &Path, notifier: &dyn Notifier) -> Result<Settings> {
    let mut settings = config::load_from(path)?;
    settings.token = None;
    config::save_to(path, &settings)?;
    notifier.notify(NoticeKind::Success, "Signed out");
    Ok(settings)
}

pub fn whoami(settings: &Settings) {
    println!("API:     {}", settings.api_url);
    println!(
        "Session: {}",
        if settings.token.is_some() {
            "token present"
        } else {
            "signed out"
        }
    );
}
