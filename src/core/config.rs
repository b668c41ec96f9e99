//! Configuration management with layered hierarchy

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::core::loader::DataSource;
use crate::core::page::DEFAULT_PAGE_SIZE;

/// File name of the per-directory config
pub const LOCAL_CONFIG_FILE: &str = ".statline.yaml";

/// Statline configuration with layered hierarchy
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Where to load records from (path, URL or "demo")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,

    /// Records per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,

    /// Default list view (table or cards)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_view: Option<String>,

    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_format: Option<String>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let local = std::env::current_dir()
            .map(|dir| dir.join(LOCAL_CONFIG_FILE))
            .ok();
        let mut config = Self::load_from(Self::global_config_path().as_deref(), local.as_deref());
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Merge the global and local files (local wins); missing files are skipped
    pub fn load_from(global: Option<&Path>, local: Option<&Path>) -> Self {
        // 1. Built-in defaults (already in Default impl)
        let mut config = Config::default();

        // 2. Global user config, 3. local directory config
        for path in [global, local].into_iter().flatten() {
            if let Some(layer) = Self::read_file(path) {
                config.merge(layer);
            }
        }

        config
    }

    fn read_file(path: &Path) -> Option<Config> {
        if !path.exists() {
            return None;
        }
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot read config file");
                return None;
            }
        };
        match serde_yml::from_str::<Config>(&contents) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring malformed config file");
                None
            }
        }
    }

    /// 4. Environment variables
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(data) = var("STATLINE_DATA") {
            self.data_source = Some(data);
        }
        if let Some(size) = var("STATLINE_PAGE_SIZE") {
            match size.trim().parse::<usize>() {
                Ok(n) => self.page_size = Some(n),
                Err(_) => warn!(value = %size, "STATLINE_PAGE_SIZE is not a number"),
            }
        }
    }

    /// Get the path to the global config file
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "statline")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.data_source.is_some() {
            self.data_source = other.data_source;
        }
        if other.page_size.is_some() {
            self.page_size = other.page_size;
        }
        if other.default_view.is_some() {
            self.default_view = other.default_view;
        }
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
    }

    /// Effective page size; zero falls back to the default
    pub fn page_size(&self) -> usize {
        match self.page_size {
            Some(0) => {
                warn!("page_size must be positive, using {}", DEFAULT_PAGE_SIZE);
                DEFAULT_PAGE_SIZE
            }
            Some(n) => n,
            None => DEFAULT_PAGE_SIZE,
        }
    }

    pub fn data_source(&self) -> Option<DataSource> {
        self.data_source
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(DataSource::parse)
    }
}
