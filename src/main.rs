// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use spendwise::api::HttpApi;
use spendwise::notify::{ConsoleNotifier, Notifier};
use spendwise::{cli, commands, config, logging, utils};

fn run(matches: &clap::ArgMatches, notifier: &dyn Notifier) -> Result<()> {
    match matches.subcommand() {
        Some(("login", sub)) => {
            commands::auth::login(&config::config_path()?, notifier, sub)?;
            return Ok(());
        }
        Some(("logout", _)) => {
            commands::auth::logout(&config::config_path()?, notifier)?;
            return Ok(());
        }
        _ => {}
    }

    let settings = config::load()?.with_overrides(
        |k| std::env::var(k).ok(),
        matches.get_one::<String>("api-url").map(|s| s.as_str()),
    );
    tracing::debug!(api_url = %settings.api_url, "effective settings");
    let api = HttpApi::new(utils::http_client()?, &settings.api_url, settings.token.clone());

    match matches.subcommand() {
        Some(("whoami", _)) => commands::auth::whoami(&settings),
        Some(("category", sub)) => commands::categories::handle(&api, notifier, sub)?,
        Some(("group", sub)) => commands::groups::handle(&api, notifier, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&api, notifier, sub)?,
        Some(("recurrent", sub)) => commands::recurrent::handle(&api, notifier, sub)?,
        Some(("report", sub)) => commands::reports::handle(&api, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&api, notifier, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}

fn main() {
    logging::init();
    let matches = cli::build_cli().get_matches();
    let notifier = ConsoleNotifier;
    if let Err(e) = run(&matches, &notifier) {
        utils::report_error(&notifier, &e);
        std::process::exit(1);
    }
}
