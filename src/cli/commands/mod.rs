//! CLI command implementations

pub mod browse;
pub mod completions;
pub mod config;
pub mod facets;
pub mod list;
pub mod show;

use clap::ValueEnum;
use console::style;
use miette::Result;
use tracing::{info, warn};

use crate::cli::{GlobalOpts, OutputFormat, ViewMode};
use crate::core::config::Config;
use crate::core::loader::DataSource;
use crate::core::query::QueryEngine;
use crate::core::session::{LoadState, Session};

/// Configuration from files and environment, with command-line flags on top
pub fn effective_config(global: &GlobalOpts) -> Config {
    let mut config = Config::load();
    if let Some(data) = &global.data {
        config.data_source = Some(data.clone());
    }
    if let Some(size) = global.page_size {
        config.page_size = Some(size);
    }
    config
}

/// The configured data source, falling back to the bundled demo set
pub fn resolve_source(config: &Config) -> DataSource {
    config.data_source().unwrap_or_else(|| {
        info!("no data source configured, using the demo data set");
        DataSource::Demo
    })
}

/// Build a session and load the configured source into it
///
/// One-shot commands treat a failed load as fatal.
pub fn load_session(global: &GlobalOpts, config: &Config) -> Result<Session> {
    let mut session = Session::new(QueryEngine::new(config.page_size()));
    session.load(resolve_source(config))?;

    if let LoadState::Loaded { skipped, .. } = session.state() {
        if *skipped > 0 && !global.quiet {
            eprintln!(
                "{} {} malformed record(s) skipped",
                style("!").yellow(),
                skipped
            );
        }
    }
    Ok(session)
}

/// `--format`, or the configured default when the flag is left at auto
pub fn resolve_format(global: &GlobalOpts, config: &Config) -> OutputFormat {
    if global.format != OutputFormat::Auto {
        return global.format;
    }
    match config.default_format.as_deref() {
        Some(raw) => OutputFormat::from_str(raw, true).unwrap_or_else(|_| {
            warn!(value = raw, "unknown default_format in config, using auto");
            OutputFormat::Auto
        }),
        None => OutputFormat::Auto,
    }
}

/// `--view`, or the configured default view
pub fn resolve_view(flag: Option<ViewMode>, config: &Config) -> ViewMode {
    if let Some(view) = flag {
        return view;
    }
    match config.default_view.as_deref() {
        Some(raw) => ViewMode::from_str(raw, true).unwrap_or_else(|_| {
            warn!(value = raw, "unknown default_view in config, using table");
            ViewMode::Table
        }),
        None => ViewMode::Table,
    }
}
