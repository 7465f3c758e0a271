// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com", "Spendwise", "spendwise"));

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const ENV_API_URL: &str = "SPENDWISE_API_URL";
pub const ENV_TOKEN: &str = "SPENDWISE_TOKEN";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub api_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
        }
    }
}

impl Settings {
    /// Applies environment overrides; `lookup` is `std::env::var` outside tests.
    pub fn with_overrides<F>(mut self, lookup: F, api_url_flag: Option<&str>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL).filter(|s| !s.trim().is_empty()) {
            self.api_url = url;
        }
        if let Some(tok) = lookup(ENV_TOKEN).filter(|s| !s.trim().is_empty()) {
            self.token = Some(tok);
        }
        if let Some(url) = api_url_flag {
            self.api_url = url.to_string();
        }
        self
    }
}

pub fn config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    let dir = proj.config_dir();
    fs::create_dir_all(dir).context("Failed to create config dir")?;
    Ok(dir.join("config.json"))
}

/// Missing file yields defaults.
pub fn load_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Reading config file: {}", path.display()))?;
    let settings = serde_json::from_str(&raw)
        .with_context(|| format!("Parsing config JSON in {}", path.display()))?;
    Ok(settings)
}

pub fn save_to(path: &Path, settings: &Settings) -> Result<()> {
    let raw = serde_json::to_string_pretty(settings)?;
    fs::write(path, raw).with_context(|| format!("Writing config file: {}", path.display()))?;
    Ok(())
}

pub fn load() -> Result<Settings> {
    load_from(&config_path()?)
}

pub fn save(settings: &Settings) -> Result<()> {
    save_to(&config_path()?, settings)
}
