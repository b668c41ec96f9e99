//! Table formatting utilities for the list views
//!
//! Rows are built from typed cells so every output format (aligned text,
//! CSV, Markdown, bare indices) renders the same data consistently. The
//! formatter returns a `String`; callers decide where it goes.

use console::style;

use crate::cli::helpers::{escape_csv, truncate_str};
use crate::cli::OutputFormat;
use crate::core::sort::{SortField, SortState};
use crate::entities::player_game::{PlayerGameRecord, Position};

/// A typed cell value with semantic meaning for formatting
#[derive(Debug, Clone)]
pub enum CellValue {
    /// Plain text, truncated to the column width
    Text(String),
    /// Position code, colored by side of the ball
    Position(Position),
    /// Statistic; absent values display as 0
    Stat(Option<u32>),
}

impl CellValue {
    /// Format for aligned terminal output (with colors if terminal)
    pub fn format_tsv(&self, width: usize) -> String {
        match self {
            CellValue::Text(s) => {
                let truncated = truncate_str(s, width);
                format!("{:<width$}", truncated, width = width)
            }
            CellValue::Position(p) => {
                let code = p.code();
                let styled = match p {
                    Position::Qb | Position::Rb | Position::Wr | Position::Te | Position::Ol => {
                        style(code).cyan()
                    }
                    Position::Dl | Position::Lb | Position::Cb | Position::S => style(code).yellow(),
                    Position::K | Position::P => style(code).magenta(),
                };
                format!("{:<width$}", styled, width = width)
            }
            CellValue::Stat(v) => {
                let n = v.unwrap_or(0);
                if v.is_none() {
                    format!("{:>width$}", style(n).dim(), width = width)
                } else {
                    format!("{:>width$}", n, width = width)
                }
            }
        }
    }

    /// Format for CSV output (RFC 4180, no colors)
    pub fn format_csv(&self) -> String {
        match self {
            CellValue::Text(s) => escape_csv(s),
            other => other.raw(),
        }
    }

    /// Format for Markdown output (no colors, escaped pipes)
    pub fn format_md(&self) -> String {
        self.raw().replace('|', "\\|")
    }

    /// Get raw string value (no formatting)
    pub fn raw(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Position(p) => p.code().to_string(),
            CellValue::Stat(v) => v.unwrap_or(0).to_string(),
        }
    }

    /// Display width of this cell's content (for dynamic column sizing)
    pub fn display_width(&self) -> usize {
        self.raw().chars().count()
    }
}

/// Column definition with header label, maximum width and sort binding
#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub key: &'static str,
    pub header: &'static str,
    pub width: usize,
    /// Sort field this column displays, if any
    pub sort: Option<SortField>,
}

impl ColumnDef {
    pub const fn new(key: &'static str, header: &'static str, width: usize) -> Self {
        Self {
            key,
            header,
            width,
            sort: None,
        }
    }

    pub const fn sorted_by(mut self, field: SortField) -> Self {
        self.sort = Some(field);
        self
    }
}

/// Columns of the player table
pub const PLAYER_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("player", "Player", 28).sorted_by(SortField::PlayerName),
    ColumnDef::new("pos", "Pos", 5).sorted_by(SortField::Position),
    ColumnDef::new("season", "Season", 8).sorted_by(SortField::Season),
    ColumnDef::new("pass", "Pass Yds", 10).sorted_by(SortField::PassingYards),
    ColumnDef::new("rush", "Rush Yds", 10).sorted_by(SortField::RushingYards),
    ColumnDef::new("rec", "Rec Yds", 10).sorted_by(SortField::ReceivingYards),
    ColumnDef::new("tackles", "Tackles", 9).sorted_by(SortField::Tackles),
    ColumnDef::new("sacks", "Sacks", 7).sorted_by(SortField::Sacks),
    ColumnDef::new("ints", "INTs", 6).sorted_by(SortField::Interceptions),
];

/// A row of cell values for table output, keyed by source index
#[derive(Debug, Clone)]
pub struct TableRow {
    pub index: usize,
    pub cells: Vec<(&'static str, CellValue)>,
}

impl TableRow {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            cells: Vec::new(),
        }
    }

    pub fn cell(mut self, key: &'static str, value: CellValue) -> Self {
        self.cells.push((key, value));
        self
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.cells.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Row for the player table
    pub fn player(index: usize, record: &PlayerGameRecord) -> Self {
        TableRow::new(index)
            .cell("player", CellValue::Text(record.player_name.clone()))
            .cell("pos", CellValue::Position(record.position))
            .cell("season", CellValue::Text(record.season.clone()))
            .cell("pass", CellValue::Stat(record.passing_yards))
            .cell("rush", CellValue::Stat(record.rushing_yards))
            .cell("rec", CellValue::Stat(record.receiving_yards))
            .cell("tackles", CellValue::Stat(record.tackles))
            .cell("sacks", CellValue::Stat(record.sacks))
            .cell("ints", CellValue::Stat(record.interceptions))
    }
}

/// Table formatter that renders rows in various formats
pub struct TableFormatter<'a> {
    columns: &'a [ColumnDef],
    sort: Option<SortState>,
}

impl<'a> TableFormatter<'a> {
    pub fn new(columns: &'a [ColumnDef]) -> Self {
        Self {
            columns,
            sort: None,
        }
    }

    /// Mark the column bound to the active sort with a direction arrow
    pub fn with_sort(mut self, sort: SortState) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Render rows in the specified format
    pub fn render(&self, rows: &[TableRow], format: OutputFormat) -> String {
        match format {
            OutputFormat::Csv => self.render_csv(rows),
            OutputFormat::Md => self.render_md(rows),
            OutputFormat::Id => rows.iter().map(|r| format!("{}\n", r.index)).collect(),
            _ => self.render_tsv(rows),
        }
    }

    fn header(&self, col: &ColumnDef) -> String {
        match self.sort {
            Some(sort) if col.sort == Some(sort.field) => {
                format!("{} {}", col.header, sort.direction.arrow())
            }
            _ => col.header.to_string(),
        }
    }

    /// Calculate dynamic column widths based on actual content
    fn calculate_widths(&self, rows: &[TableRow]) -> Vec<usize> {
        let index_width = rows
            .iter()
            .map(|r| r.index.to_string().len())
            .max()
            .unwrap_or(1)
            .max(1);

        let mut widths = vec![index_width];
        for col in self.columns {
            let header_len = self.header(col).chars().count();
            let max_content = rows
                .iter()
                .filter_map(|r| r.get(col.key))
                .map(|v| v.display_width())
                .max()
                .unwrap_or(0);
            // Headers are never truncated; content is capped at the column width
            widths.push(header_len.max(max_content.min(col.width)));
        }
        widths
    }

    fn render_tsv(&self, rows: &[TableRow]) -> String {
        let widths = self.calculate_widths(rows);
        let mut out = String::new();

        let mut header_parts = vec![format!("{:<width$}", style("#").bold().dim(), width = widths[0])];
        for (col, &width) in self.columns.iter().zip(&widths[1..]) {
            header_parts.push(format!(
                "{:<width$}",
                style(self.header(col)).bold(),
                width = width
            ));
        }
        out.push_str(header_parts.join(" ").trim_end());
        out.push('\n');

        let total_width: usize = widths.iter().sum::<usize>() + widths.len() - 1;
        out.push_str(&"-".repeat(total_width));
        out.push('\n');

        for row in rows {
            let mut parts = vec![format!("{:<width$}", style(row.index).cyan(), width = widths[0])];
            for (col, &width) in self.columns.iter().zip(&widths[1..]) {
                match row.get(col.key) {
                    Some(value) => parts.push(value.format_tsv(width)),
                    None => parts.push(format!("{:<width$}", "-", width = width)),
                }
            }
            out.push_str(parts.join(" ").trim_end());
            out.push('\n');
        }

        out
    }

    fn render_csv(&self, rows: &[TableRow]) -> String {
        let mut out = String::from("index");
        for col in self.columns {
            out.push(',');
            out.push_str(col.key);
        }
        out.push('\n');

        for row in rows {
            let mut line = row.index.to_string();
            for col in self.columns {
                line.push(',');
                if let Some(value) = row.get(col.key) {
                    line.push_str(&value.format_csv());
                }
            }
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    fn render_md(&self, rows: &[TableRow]) -> String {
        let mut out = String::from("| # |");
        for col in self.columns {
            out.push_str(&format!(" {} |", self.header(col)));
        }
        out.push('\n');

        out.push_str("|---|");
        for _ in self.columns {
            out.push_str("---|");
        }
        out.push('\n');

        for row in rows {
            out.push_str(&format!("| {} |", row.index));
            for col in self.columns {
                let cell = row.get(col.key).map(|v| v.format_md()).unwrap_or_default();
                out.push_str(&format!(" {} |", cell));
            }
            out.push('\n');
        }
        out
    }
}
