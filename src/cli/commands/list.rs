//! `statline list` command - one page of the filtered, sorted result list

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::cli::commands::{effective_config, load_session, resolve_format, resolve_view};
use crate::cli::render::render_cards;
use crate::cli::table::{TableFormatter, TableRow, PLAYER_COLUMNS};
use crate::cli::{FilterArgs, GlobalOpts, OutputFormat, ViewMode};
use crate::core::criteria::FilterCriteria;
use crate::core::page::ResultSummary;
use crate::core::query::QueryEngine;
use crate::core::sort::SortState;
use crate::entities::player_game::PlayerGameRecord;

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Page number (1-based, clamped to the last page)
    #[arg(long, default_value = "1")]
    pub page: usize,

    /// Emit every matching record instead of one page
    #[arg(long)]
    pub all: bool,

    /// Presentation for the human-readable format
    #[arg(long, value_enum)]
    pub view: Option<ViewMode>,

    /// Print only the number of matching records
    #[arg(long)]
    pub count: bool,
}

/// A record paired with its ordinal index in the source list
#[derive(Debug, Serialize)]
pub struct IndexedRecord<'a> {
    pub index: usize,
    #[serde(flatten)]
    pub record: &'a PlayerGameRecord,
}

#[derive(Debug, Serialize)]
struct PageOutput<'a> {
    summary: ResultSummary,
    sort: SortState,
    filters: &'a FilterCriteria,
    records: Vec<IndexedRecord<'a>>,
}

pub fn run(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let config = effective_config(global);
    let mut session = load_session(global, &config)?;

    let engine = session.engine_mut();
    engine.set_criteria(args.filter.criteria());
    engine.set_sort(args.filter.sort_state());
    engine.set_page(args.page);

    if args.count {
        println!("{}", engine.filtered_len());
        return Ok(());
    }

    let format = resolve_format(global, &config);
    let view = resolve_view(args.view, &config);
    let rows: Vec<(usize, &PlayerGameRecord)> = if args.all {
        engine.filtered().collect()
    } else {
        engine.visible()
    };

    let output = render_page(engine, &rows, format, view, global.quiet || args.all)?;
    print!("{}", output);
    Ok(())
}

/// Render `rows` (normally the engine's visible page) in `format`
///
/// With `bare` set, the human view omits the count line and page footer.
pub fn render_page(
    engine: &QueryEngine,
    rows: &[(usize, &PlayerGameRecord)],
    format: OutputFormat,
    view: ViewMode,
    bare: bool,
) -> Result<String> {
    let formatter = TableFormatter::new(PLAYER_COLUMNS).with_sort(engine.sort());
    let table_rows = || -> Vec<TableRow> {
        rows.iter()
            .map(|&(index, record)| TableRow::player(index, record))
            .collect()
    };

    match format {
        OutputFormat::Json | OutputFormat::Yaml => {
            let page = PageOutput {
                summary: engine.summary(),
                sort: engine.sort(),
                filters: engine.criteria(),
                records: rows
                    .iter()
                    .map(|&(index, record)| IndexedRecord { index, record })
                    .collect(),
            };
            if format == OutputFormat::Json {
                let mut json = serde_json::to_string_pretty(&page).into_diagnostic()?;
                json.push('\n');
                Ok(json)
            } else {
                serde_yml::to_string(&page).into_diagnostic()
            }
        }
        OutputFormat::Tsv | OutputFormat::Csv | OutputFormat::Md | OutputFormat::Id => {
            Ok(formatter.render(&table_rows(), format))
        }
        OutputFormat::Auto => {
            let summary = engine.summary();
            let mut out = String::new();
            if !bare {
                out.push_str(&format!("{}\n\n", style(summary.count_line()).dim()));
            }

            match view {
                ViewMode::Cards => out.push_str(&render_cards(rows)),
                ViewMode::Table if rows.is_empty() => out.push_str("No players found.\n"),
                ViewMode::Table => out.push_str(&formatter.render(&table_rows(), OutputFormat::Tsv)),
            }

            if !bare && summary.total_pages > 1 {
                out.push_str(&format!(
                    "\n{}  {}\n",
                    summary.range_line(),
                    style(format!("Page {} of {}", summary.page, summary.total_pages)).cyan()
                ));
            }
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::criteria::{FilterUpdate, Selector};
    use crate::entities::player_game::{Position, StatField};

    fn engine() -> QueryEngine {
        let records: Vec<PlayerGameRecord> = (0..7)
            .map(|i| {
                PlayerGameRecord::new(format!("Player {}", i), Position::Rb, "Duke", "SO")
                    .with_stat(StatField::RushingYards, 10 * i)
            })
            .collect();
        let mut engine = QueryEngine::new(5);
        engine.set_source(records);
        engine
    }

    #[test]
    fn test_auto_table_with_footer() {
        let engine = engine();
        let out = render_page(&engine, &engine.visible(), OutputFormat::Auto, ViewMode::Table, false)
            .unwrap();
        assert!(out.contains("Showing 7 records"));
        assert!(out.contains("Player 4"));
        assert!(!out.contains("Player 5"));
        assert!(out.contains("Showing 1 to 5 of 7 players"));
        assert!(out.contains("Page 1 of 2"));
    }

    #[test]
    fn test_auto_empty_table() {
        let mut engine = engine();
        engine.set_filter(FilterUpdate::Position(Selector::Only(Position::Qb)));
        let out = render_page(&engine, &engine.visible(), OutputFormat::Auto, ViewMode::Table, false)
            .unwrap();
        assert!(out.contains("Showing 0 records at QB position"));
        assert!(out.contains("No players found."));
        assert!(!out.contains("players\n"));
    }

    #[test]
    fn test_json_page_carries_indices_and_summary() {
        let mut engine = engine();
        engine.set_page(2);
        let out = render_page(&engine, &engine.visible(), OutputFormat::Json, ViewMode::Table, false)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["summary"]["pageStart"], 6);
        assert_eq!(value["summary"]["pageEnd"], 7);
        assert_eq!(value["records"][0]["index"], 5);
        assert_eq!(value["records"][0]["playerName"], "Player 5");
        assert_eq!(value["filters"]["position"], "ALL");
    }

    #[test]
    fn test_id_format() {
        let engine = engine();
        let out =
            render_page(&engine, &engine.visible(), OutputFormat::Id, ViewMode::Table, false).unwrap();
        assert_eq!(out, "0\n1\n2\n3\n4\n");
    }
}
