//! `statline show` command - detail view of a single record

use miette::{IntoDiagnostic, Result};

use crate::cli::commands::list::IndexedRecord;
use crate::cli::commands::{effective_config, load_session, resolve_format};
use crate::cli::render::render_detail;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::query::QueryEngine;

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Record index, as printed in the `#` column of `list`
    pub index: usize,
}

pub fn run(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let config = effective_config(global);
    let session = load_session(global, &config)?;
    let format = resolve_format(global, &config);
    print!("{}", render_record(session.engine(), args.index, format)?);
    Ok(())
}

/// Render the record at `index` in the source list
pub fn render_record(engine: &QueryEngine, index: usize, format: OutputFormat) -> Result<String> {
    let record = engine.record(index).ok_or_else(|| {
        miette::miette!(
            "No record at index {} ({} record(s) loaded)",
            index,
            engine.source().len()
        )
    })?;

    match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&IndexedRecord { index, record })
                .into_diagnostic()?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Yaml => serde_yml::to_string(&IndexedRecord { index, record }).into_diagnostic(),
        OutputFormat::Id => Ok(format!("{}\n", index)),
        _ => Ok(render_detail(index, record)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::player_game::{PlayerGameRecord, Position, StatField};

    fn engine() -> QueryEngine {
        let mut engine = QueryEngine::default();
        engine.set_source(vec![
            PlayerGameRecord::new("Antonio Williams", Position::Wr, "Louisville", "SO")
                .with_stat(StatField::ReceivingYards, 96)
                .with_stat(StatField::Receptions, 7),
        ]);
        engine
    }

    #[test]
    fn test_render_record_detail() {
        let out = render_record(&engine(), 0, OutputFormat::Auto).unwrap();
        assert!(out.contains("Antonio Williams"));
        assert!(out.contains("Louisville"));
        assert!(out.contains("Receiving Yards"));
        assert!(out.contains("Receptions"));
    }

    #[test]
    fn test_render_record_json() {
        let out = render_record(&engine(), 0, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["index"], 0);
        assert_eq!(value["receivingYards"], 96);
        assert!(value.get("passingYards").is_none());
    }

    #[test]
    fn test_render_record_out_of_range() {
        let err = render_record(&engine(), 3, OutputFormat::Auto).unwrap_err();
        assert!(err.to_string().contains("No record at index 3"));
    }
}
