use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::app::ViewMode;
use crate::infrastructure::feedback::{SourceConfig, DEFAULT_ENDPOINT};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    pub endpoint: Option<String>,
    pub team_id: Option<String>,
    pub user_id: Option<String>,
    pub default_view: Option<ViewMode>,
    pub timeout_secs: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Fetch settings with defaults filled in
    pub fn source_config(&self) -> SourceConfig {
        let defaults = SourceConfig::default();
        SourceConfig {
            endpoint: non_empty(self.endpoint.as_deref())
                .unwrap_or(DEFAULT_ENDPOINT)
                .to_string(),
            team_id: non_empty(self.team_id.as_deref()).map(str::to_string),
            user_id: non_empty(self.user_id.as_deref()).map(str::to_string),
            timeout: self
                .timeout_secs
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }
}

pub fn load() -> Config {
    match config_path() {
        Some(path) => load_from(&path),
        None => Config::default(),
    }
}

/// Load a specific file; missing or malformed files yield defaults
pub fn load_from(path: &Path) -> Config {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };
    match toml::from_str::<Config>(&content) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring malformed config {}: {err}", path.display());
            Config::default()
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("REVIEW_STATS_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("review-stats").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("review-stats").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "review-stats", "review-stats")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("review-stats"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("review-stats"));
    }
    directories::ProjectDirs::from("io", "review-stats", "review-stats")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn log_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("review-stats.log"))
}

pub fn exports_dir() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("exports"))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
