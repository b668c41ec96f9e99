//! `statline facets` command - distinct filter values in the loaded data

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::commands::{effective_config, load_session, resolve_format};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::facets::FacetIndex;

pub fn run(global: &GlobalOpts) -> Result<()> {
    let config = effective_config(global);
    let session = load_session(global, &config)?;
    let format = resolve_format(global, &config);
    print!("{}", render_facets(session.engine().facets(), format)?);
    Ok(())
}

pub fn render_facets(facets: &FacetIndex, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(facets).into_diagnostic()?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Yaml => serde_yml::to_string(facets).into_diagnostic(),
        _ => {
            let game_types: Vec<String> = facets.game_types().iter().map(|g| g.to_string()).collect();
            let mut out = String::new();
            for (title, values) in [
                ("Seasons", facets.seasons()),
                ("Opponents", facets.opponents()),
                ("Game Types", game_types.as_slice()),
            ] {
                out.push_str(&format!("{}\n", style(title).bold()));
                if values.is_empty() {
                    out.push_str(&format!("  {}\n", style("(none)").dim()));
                }
                for value in values {
                    out.push_str(&format!("  {}\n", value));
                }
            }
            Ok(out)
        }
    }
}
