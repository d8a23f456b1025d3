use std::env;

use anyhow::{Context, Result, anyhow, ensure};

use crate::view::ViewMode;

pub const DEFAULT_KNOWN_ISSUES_URL: &str = "https://status.example.org/orgview/known-issues";
pub const DEFAULT_MAP_ENABLED: bool = true;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerSettings {
    pub default_view: ViewMode,
    pub known_issues_url: String,
    pub map_enabled: bool,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            default_view: ViewMode::Tree,
            known_issues_url: DEFAULT_KNOWN_ISSUES_URL.to_owned(),
            map_enabled: DEFAULT_MAP_ENABLED,
        }
    }
}

impl ViewerSettings {
    pub fn from_env() -> Result<Self> {
        // Load .env if present, but do not fail if file does not exist.
        let _ = dotenvy::dotenv();

        let default_view = match env::var("ORGVIEW_DEFAULT_VIEW") {
            Ok(raw) => raw
                .parse::<ViewMode>()
                .context("failed to parse ORGVIEW_DEFAULT_VIEW")?,
            Err(_) => ViewMode::Tree,
        };

        let known_issues_url = env::var("ORGVIEW_KNOWN_ISSUES_URL")
            .unwrap_or_else(|_| DEFAULT_KNOWN_ISSUES_URL.to_owned());
        ensure!(
            !known_issues_url.trim().is_empty(),
            "ORGVIEW_KNOWN_ISSUES_URL cannot be empty"
        );

        let map_enabled = match env::var("ORGVIEW_MAP_ENABLED") {
            Ok(raw) => parse_bool("ORGVIEW_MAP_ENABLED", &raw)?,
            Err(_) => DEFAULT_MAP_ENABLED,
        };

        Ok(Self {
            default_view,
            known_issues_url,
            map_enabled,
        })
    }
}

fn parse_bool(name: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(anyhow!(
            "invalid {name} `{other}`; expected `true` or `false`"
        )),
    }
}
