//! `statline config` command - Configuration inspection
//!
//! Shows the effective configuration and where it is read from.

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::Path;

use crate::cli::commands::{effective_config, resolve_format, resolve_source};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::config::{Config, LOCAL_CONFIG_FILE};

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration values
    Show,

    /// Show paths to configuration files
    Path,
}

/// Run a config subcommand
pub fn run(cmd: ConfigCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ConfigCommands::Show => run_show(global),
        ConfigCommands::Path => run_path(),
    }
}

fn run_show(global: &GlobalOpts) -> Result<()> {
    let config = effective_config(global);

    match resolve_format(global, &config) {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&config).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&config).into_diagnostic()?);
        }
        _ => {
            println!("{}", style("Effective Configuration").bold().underlined());
            println!();

            print_config_value("data_source", config.data_source.as_deref());
            println!(
                "  {}: {}",
                style("page_size").cyan(),
                style(config.page_size()).yellow()
            );
            print_config_value("default_view", config.default_view.as_deref());
            print_config_value("default_format", config.default_format.as_deref());
            println!();
            println!(
                "  {} {}",
                style("Loading from:").dim(),
                resolve_source(&config)
            );

            println!();
            println!("{}", style("Config Sources (in priority order):").dim());
            println!("  1. Command-line flags (--data, --page-size, --format)");
            println!("  2. Environment variables (STATLINE_DATA, STATLINE_PAGE_SIZE)");
            println!("  3. Local config (./{})", LOCAL_CONFIG_FILE);
            println!("  4. Global config (~/.config/statline/config.yaml)");
        }
    }

    Ok(())
}

fn run_path() -> Result<()> {
    let global_path = Config::global_config_path()
        .ok_or_else(|| miette::miette!("Could not determine global config directory"))?;
    let local_path = std::env::current_dir()
        .into_diagnostic()?
        .join(LOCAL_CONFIG_FILE);

    println!("{}", style("Configuration file paths:").bold());
    println!();
    print_path("Global:", &global_path);
    println!();
    print_path("Local:", &local_path);

    Ok(())
}

fn print_path(label: &str, path: &Path) {
    println!("  {} {}", style(label).cyan(), path.display());
    if path.exists() {
        println!("         {}", style("(exists)").green());
    } else {
        println!("         {}", style("(not created)").dim());
    }
}

fn print_config_value(key: &str, value: Option<&str>) {
    if let Some(v) = value {
        println!("  {}: {}", style(key).cyan(), style(v).yellow());
    } else {
        println!("  {}: {}", style(key).cyan(), style("(not set)").dim());
    }
}
