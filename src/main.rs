use clap::Parser;
use miette::Result;
use statline::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) so piping to
    // `head` and friends doesn't panic on a broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;
    init_logging(global.verbose);

    match cli.command {
        Commands::List(args) => statline::cli::commands::list::run(args, &global),
        Commands::Show(args) => statline::cli::commands::show::run(args, &global),
        Commands::Facets => statline::cli::commands::facets::run(&global),
        Commands::Browse(args) => statline::cli::commands::browse::run(args, &global),
        Commands::Config(cmd) => statline::cli::commands::config::run(cmd, &global),
        Commands::Completions(args) => statline::cli::commands::completions::run(args),
    }
}

/// Logs go to stderr; `STATLINE_LOG` overrides the level picked by `-v`
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("STATLINE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,statline={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
