//! `statline browse` command - interactive dashboard session
//!
//! Each input line is one user action. The action mutates the session's
//! query engine synchronously and the current page is re-rendered before
//! the next prompt.

use console::style;
use dialoguer::{theme::ColorfulTheme, Input};
use miette::{IntoDiagnostic, Result};
use std::str::FromStr;

use crate::cli::commands::facets::render_facets;
use crate::cli::commands::list::render_page;
use crate::cli::commands::show::render_record;
use crate::cli::commands::{effective_config, resolve_source, resolve_view};
use crate::cli::{FilterArgs, GlobalOpts, OutputFormat, ViewMode};
use crate::core::criteria::{FilterUpdate, Selector};
use crate::core::loader::DataSource;
use crate::core::query::QueryEngine;
use crate::core::session::{LoadState, Session};
use crate::core::sort::SortField;

#[derive(clap::Args, Debug)]
pub struct BrowseArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Initial presentation
    #[arg(long, value_enum)]
    pub view: Option<ViewMode>,
}

const HELP: &str = "\
Commands:
  search <text>        free-text search (empty clears)
  name <text>          player name contains
  pos <code|all>       position filter
  season <v|all>       season filter
  opp <name|all>       opponent filter
  type <v|all>         game type filter
  cat <v|all>          stat category filter
  sort <field>         sort by field (again to flip direction)
  dir                  flip sort direction
  next, prev, page <n> paginate
  size <n>             records per page
  reset                clear filters and sort
  view <table|cards>   switch presentation
  show <index>         detail view of one record
  facets               list seasons, opponents and game types
  reload               reload the data source
  help                 this text
  quit                 leave
";

/// What the loop should do after one input line
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// State changed; redraw the page
    Redraw,
    /// Print this text, leave the page as is
    Print(String),
    /// Reload the data source, then redraw
    Reload,
    Quit,
}

/// Interpret one input line against the engine
///
/// `Err` carries a user-facing message for an unknown or malformed command.
pub fn apply_line(
    engine: &mut QueryEngine,
    view: &mut ViewMode,
    line: &str,
) -> std::result::Result<Outcome, String> {
    let line = line.trim();
    let (cmd, arg) = match line.split_once(char::is_whitespace) {
        Some((cmd, arg)) => (cmd, arg.trim()),
        None => (line, ""),
    };

    match cmd.to_lowercase().as_str() {
        "" => {}
        "search" | "/" => engine.set_text_query(arg),
        "name" => engine.set_filter(FilterUpdate::Name(arg.to_string())),
        "pos" | "position" => engine.set_filter(FilterUpdate::Position(parse_selector(arg)?)),
        "season" => engine.set_filter(FilterUpdate::Season(parse_selector(arg)?)),
        "opp" | "opponent" => engine.set_filter(FilterUpdate::Opponent(parse_selector(arg)?)),
        "type" => engine.set_filter(FilterUpdate::GameType(parse_selector(arg)?)),
        "cat" | "category" => engine.set_filter(FilterUpdate::StatCategory(parse_selector(arg)?)),
        "sort" => engine.set_sort_field(SortField::from_str(arg)?),
        "dir" => engine.toggle_sort_direction(),
        "next" | "n" => engine.next_page(),
        "prev" | "p" => engine.prev_page(),
        "page" => engine.set_page(parse_number(arg)?),
        "size" => engine.set_page_size(parse_number(arg)?),
        "reset" => engine.reset_filters(),
        "view" => {
            *view = match arg.to_lowercase().as_str() {
                "table" => ViewMode::Table,
                "cards" => ViewMode::Cards,
                _ => return Err(format!("Unknown view: {}. Use table or cards", arg)),
            };
        }
        "show" => {
            let index = parse_number(arg)?;
            return render_record(engine, index, OutputFormat::Auto)
                .map(Outcome::Print)
                .map_err(|e| e.to_string());
        }
        "facets" => {
            return render_facets(engine.facets(), OutputFormat::Auto)
                .map(Outcome::Print)
                .map_err(|e| e.to_string());
        }
        "reload" => return Ok(Outcome::Reload),
        "help" | "?" => return Ok(Outcome::Print(HELP.to_string())),
        "quit" | "q" | "exit" => return Ok(Outcome::Quit),
        other => return Err(format!("Unknown command: {}. Type 'help' for commands", other)),
    }
    Ok(Outcome::Redraw)
}

fn parse_selector<T>(arg: &str) -> std::result::Result<Selector<T>, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    Selector::from_str(arg)
}

fn parse_number(arg: &str) -> std::result::Result<usize, String> {
    arg.parse::<usize>()
        .map_err(|_| format!("Expected a number, got '{}'", arg))
}

pub fn run(args: BrowseArgs, global: &GlobalOpts) -> Result<()> {
    let config = effective_config(global);
    let mut view = resolve_view(args.view, &config);

    let mut session = Session::new(QueryEngine::new(config.page_size()));
    // A failed first load leaves an empty list; the session stays usable
    if let Err(e) = session.load_with(resolve_source(&config), show_loading) {
        eprintln!("{} {}", style("✗").red(), e);
    }

    let engine = session.engine_mut();
    engine.set_criteria(args.filter.criteria());
    engine.set_sort(args.filter.sort_state());

    if !global.quiet {
        println!("{}", style("Type 'help' for commands, 'quit' to leave.").dim());
    }
    draw(&session, view)?;

    let theme = ColorfulTheme::default();
    loop {
        let line: String = Input::with_theme(&theme)
            .with_prompt("statline")
            .allow_empty(true)
            .interact_text()
            .into_diagnostic()?;

        match apply_line(session.engine_mut(), &mut view, &line) {
            Ok(Outcome::Redraw) => draw(&session, view)?,
            Ok(Outcome::Print(text)) => print!("{}", text),
            Ok(Outcome::Reload) => {
                if let Some(Err(e)) = session.reload_with(show_loading) {
                    eprintln!("{} {}", style("✗").red(), e);
                }
                draw(&session, view)?;
            }
            Ok(Outcome::Quit) => break,
            Err(message) => eprintln!("{} {}", style("!").yellow(), message),
        }
    }

    Ok(())
}

fn show_loading(_state: &LoadState, source: &DataSource) {
    eprintln!("{}", style(format!("Loading {}...", source)).dim());
}

fn draw(session: &Session, view: ViewMode) -> Result<()> {
    let state = session.state();
    if state.is_failed() {
        println!("{} {}", style("⚠").yellow(), style(state).yellow());
    }
    let engine = session.engine();
    let sort = engine.sort();
    println!(
        "{}",
        style(format!(
            "Sorted by {} {} | filters: {}",
            sort.field,
            sort.direction.arrow(),
            describe_filters(engine)
        ))
        .dim()
    );
    print!(
        "{}",
        render_page(engine, &engine.visible(), OutputFormat::Auto, view, false)?
    );
    Ok(())
}

fn describe_filters(engine: &QueryEngine) -> String {
    let criteria = engine.criteria();
    if criteria.is_unconstrained() {
        return "none".to_string();
    }

    let mut parts = Vec::new();
    if !criteria.query.trim().is_empty() {
        parts.push(format!("search \"{}\"", criteria.query));
    }
    if !criteria.name.trim().is_empty() {
        parts.push(format!("name \"{}\"", criteria.name));
    }
    let selectors = [
        ("pos", criteria.position.to_string()),
        ("season", criteria.season.to_string()),
        ("opp", criteria.opponent.to_string()),
        ("type", criteria.game_type.to_string()),
        ("cat", criteria.stat_category.to_string()),
    ];
    for (label, value) in selectors {
        if value != "ALL" {
            parts.push(format!("{}={}", label, value));
        }
    }
    parts.join(", ")
}
