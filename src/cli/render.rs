//! Card and detail renderers for player game records

use console::style;
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{bar, ratio_str};
use crate::entities::player_game::{PlayerGameRecord, Position};

/// Width of a stat bar in the detail view
const BAR_WIDTH: usize = 24;

/// Position-specific headline stats shown on a card, `None` when the
/// position has no headline stats
pub fn headline_stats(record: &PlayerGameRecord) -> Option<Vec<(&'static str, String)>> {
    let n = |v: Option<u32>| v.unwrap_or(0).to_string();
    let stats = match record.position {
        Position::Qb => vec![
            ("Pass Yards", n(record.passing_yards)),
            ("TD / INT", ratio_str(record.passing_tds, record.passing_int)),
        ],
        Position::Rb => vec![
            ("Rush Yards", n(record.rushing_yards)),
            ("Rush TDs", n(record.rushing_tds)),
        ],
        Position::Wr | Position::Te => vec![
            ("Rec Yards", n(record.receiving_yards)),
            ("Receptions", n(record.receptions)),
        ],
        Position::Dl | Position::Lb | Position::Cb | Position::S => vec![
            ("Tackles", n(record.tackles)),
            ("Sacks", n(record.sacks)),
        ],
        Position::K => vec![
            (
                "FG",
                ratio_str(record.field_goals_made, record.field_goals_attempted),
            ),
            (
                "XP",
                ratio_str(record.extra_points_made, record.extra_points_attempted),
            ),
        ],
        Position::Ol | Position::P => return None,
    };
    Some(stats)
}

/// One card per record; an empty slice renders the "no data" message
pub fn render_cards(records: &[(usize, &PlayerGameRecord)]) -> String {
    if records.is_empty() {
        return "No data found matching your filters.\n".to_string();
    }

    let mut out = String::new();
    for (index, record) in records {
        out.push_str(&format!(
            "{} {}  {}  {}\n",
            style(format!("[{}]", index)).dim(),
            style(&record.player_name).bold(),
            style(record.position).cyan(),
            record.season
        ));
        out.push_str(&format!("    vs {} ({})\n", record.opponent, record.date));
        match headline_stats(record) {
            Some(stats) => {
                let line: Vec<String> = stats
                    .iter()
                    .map(|(label, value)| format!("{}: {}", style(label).dim(), value))
                    .collect();
                out.push_str(&format!("    {}\n", line.join("   ")));
            }
            None => out.push_str(&format!("    {}\n", style("Stats not available").dim())),
        }
        out.push('\n');
    }
    out
}

/// Full detail view: descriptive fields plus a bar per present statistic
pub fn render_detail(index: usize, record: &PlayerGameRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n\n",
        style(&record.player_name).bold().underlined(),
        style(format!("#{}", index)).dim()
    ));

    let mut builder = Builder::default();
    builder.push_record(["Position", record.position.code()]);
    builder.push_record(["Season", record.season.as_str()]);
    builder.push_record(["Opponent", record.opponent.as_str()]);
    builder.push_record(["Date", record.date.as_str()]);
    let game_type = record.game_type.to_string();
    builder.push_record(["Game Type", game_type.as_str()]);
    let location = record.location.to_string();
    builder.push_record(["Location", location.as_str()]);
    if let Some(result) = &record.result {
        builder.push_record(["Result", result.as_str()]);
    }
    if let Some(id) = &record.external_id {
        builder.push_record(["ID", id.as_str()]);
    }
    out.push_str(&builder.build().with(Style::blank()).to_string());
    out.push_str("\n\n");

    out.push_str(&format!("{}\n", style("Game Stats").bold()));
    for (field, value) in record.present_stats() {
        out.push_str(&format!(
            "  {:<24} {:>5}  {}\n",
            field.label(),
            value,
            style(bar(field.fill_ratio(value), BAR_WIDTH)).green()
        ));
    }
    if !record.has_detailed_stats() {
        out.push_str("  No detailed stats available for this game.\n");
    }
    out
}
