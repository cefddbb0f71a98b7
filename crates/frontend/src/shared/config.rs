//! Front-end configuration.
//!
//! The defaults are embedded in the bundle. A full TOML document stored in
//! `localStorage` under [`STORAGE_KEY`] replaces them, which is how a deployed
//! build gets pointed at another summarizer API without a rebuild.

use leptos::prelude::*;
use serde::Deserialize;

pub const STORAGE_KEY: &str = "ytsumup.config";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub video: VideoConfig,
    pub page: PageConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Absolute base URL of the summarizer API. Empty means "same host as the
    /// page, on `port`".
    #[serde(default)]
    pub base: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct VideoConfig {
    pub oembed_endpoint: String,
    /// `{id}` is replaced with the video id.
    pub thumbnail_template: String,
    pub default_thumbnail: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PageConfig {
    pub title: String,
    pub description: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base = ""
port = 5000

[video]
oembed_endpoint = "https://www.youtube.com/oembed"
thumbnail_template = "https://img.youtube.com/vi/{id}/hqdefault.jpg"
default_thumbnail = "/default.png"

[page]
title = "YTSUMUP"
description = "Youtube video summarizer"
"#;

pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Load configuration
///
/// Search order:
/// 1. `localStorage[STORAGE_KEY]`
/// 2. Falls back to embedded default config
pub fn load_config() -> Result<AppConfig, toml::de::Error> {
    if let Some(stored) = stored_config() {
        log::info!("Loading config from localStorage key '{}'", STORAGE_KEY);
        match parse_config(&stored) {
            Ok(config) => return Ok(config),
            Err(e) => log::warn!("Ignoring stored config: {}", e),
        }
    }

    log::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn provide_app_config(config: AppConfig) {
    provide_context(config);
}

pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig context not found")
}

fn stored_config() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(STORAGE_KEY)
        .ok()?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.base, "");
        assert_eq!(config.api.port, 5000);
        assert_eq!(config.video.default_thumbnail, "/default.png");
        assert_eq!(config.page.title, "YTSUMUP");
        assert_eq!(config.page.description, "Youtube video summarizer");
    }

    #[test]
    fn test_base_is_optional() {
        let config = parse_config(&DEFAULT_CONFIG.replace("base = \"\"\n", "")).unwrap();
        assert_eq!(config.api.base, "");
    }

    #[test]
    fn test_missing_section_is_an_error() {
        assert!(parse_config("[api]\nport = 1\n").is_err());
    }
}
