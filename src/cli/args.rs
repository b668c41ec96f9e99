//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{
    browse::BrowseArgs, completions::CompletionsArgs, config::ConfigCommands, list::ListArgs,
    show::ShowArgs,
};
use crate::core::criteria::{FilterCriteria, Selector};
use crate::core::sort::{SortDirection, SortField, SortState};
use crate::entities::player_game::{GameType, Position, StatCategory};

#[derive(Parser)]
#[command(name = "statline")]
#[command(author, version, about = "Player game stats dashboard")]
#[command(
    long_about = "Search, filter, sort and page through per-game player statistics loaded from a JSON/CSV feed or an HTTP endpoint."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose (debug) logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Data source: a .json/.csv file, an http(s) URL, or "demo"
    #[arg(long, short = 'd', global = true)]
    pub data: Option<String>,

    /// Records per page
    #[arg(long, global = true)]
    pub page_size: Option<usize>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List one page of matching records (the dashboard view)
    List(ListArgs),

    /// Show every field and stat of one record by index
    Show(ShowArgs),

    /// List the distinct seasons, opponents and game types
    Facets,

    /// Interactive session: filter, sort and page with line commands
    Browse(BrowseArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Filter and sort options shared by `list` and `browse`
#[derive(clap::Args, Clone, Debug, Default)]
pub struct FilterArgs {
    /// Free-text search over player name, position, opponent and location
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Player name contains (case-insensitive)
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Position code (QB, RB, WR, ...) or ALL
    #[arg(long, short = 'p', default_value = "ALL")]
    pub position: Selector<Position>,

    /// Season label (FR, SO, JR, SR, ...) or ALL
    #[arg(long, default_value = "ALL")]
    pub season: Selector<String>,

    /// Opponent name (exact) or ALL
    #[arg(long, default_value = "ALL")]
    pub opponent: Selector<String>,

    /// Game type (regular, conference, non-conference, playoff, bowl) or ALL
    #[arg(long = "type", short = 't', default_value = "ALL")]
    pub game_type: Selector<GameType>,

    /// Stat category with positive production (passing, rushing, receiving, defense, kicking) or ALL
    #[arg(long, short = 'c', default_value = "ALL")]
    pub category: Selector<StatCategory>,

    /// Sort column (playerName, position, season, passingYards, rushingYards,
    /// receivingYards, tackles, sacks, interceptions)
    #[arg(long, default_value = "playerName")]
    pub sort: SortField,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,
}

impl FilterArgs {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            query: self.search.clone().unwrap_or_default(),
            name: self.name.clone().unwrap_or_default(),
            position: self.position.clone(),
            season: self.season.clone(),
            opponent: self.opponent.clone(),
            game_type: self.game_type.clone(),
            stat_category: self.category.clone(),
        }
    }

    pub fn sort_state(&self) -> SortState {
        let direction = if self.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        SortState::new(self.sort, direction)
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable view (table or cards)
    #[default]
    Auto,
    /// Aligned table without count line or footer (for piping)
    Tsv,
    /// JSON format (for programming)
    Json,
    /// YAML format
    Yaml,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
    /// Just record indices, one per line
    Id,
}

/// Presentation of the human-readable list
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Table,
    Cards,
}
