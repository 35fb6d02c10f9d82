use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use transit_core::TransitError;

mod commands;
mod logging;
mod terminal;

#[derive(Parser)]
#[command(name = "transit")]
#[command(about = "Transit line search - browse lines, star favorites, open the map", long_about = None)]
struct Cli {
    /// Directory holding config.toml (defaults to the platform config dir)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Directory holding lines.toml, favorites.toml and history.toml
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Also write logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog lines page by page
    Browse {
        /// Number of pages to load
        #[arg(long, default_value_t = 1)]
        pages: usize,
    },
    /// Filter the whole catalog by code or description
    Filter { query: String },
    /// Star or unstar a line
    Star { line: String },
    /// List starred lines
    Favorites,
    /// Show the most recent searches
    Recents,
    /// Open a catalog line on the map
    Find { line: String },
    /// Open a free-text search on the map
    FindText {
        #[arg(required = true)]
        text: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = transit_infrastructure::TransitPaths::new(cli.config_dir, cli.data_dir);
    let _log_guard = logging::init(&paths.logs_dir()?, cli.verbose)?;

    let session = commands::Session::open(&paths)?;
    session.activate().await;

    let outcome = match cli.command {
        Commands::Browse { pages } => commands::browse::run(&session, pages).await,
        Commands::Filter { query } => commands::browse::filter(&session, &query).await,
        Commands::Star { line } => commands::favorites::toggle(&session, &line).await,
        Commands::Favorites => commands::favorites::list(&session),
        Commands::Recents => commands::find::recents(&session),
        Commands::Find { line } => commands::find::line(&session, &line).await,
        Commands::FindText { text } => commands::find::free_text(&session, &text.join(" ")).await,
    };

    session.close();
    outcome.inspect_err(|e| {
        if let Some(hint) = e.downcast_ref::<TransitError>().and_then(hint_for) {
            eprintln!("💡 {}", hint);
        }
    })
}

/// Next step to suggest for errors the user can fix themselves.
fn hint_for(err: &TransitError) -> Option<&'static str> {
    if err.is_not_found() {
        Some("Run `transit browse` to see the available line codes.")
    } else if err.is_serialization() {
        Some("A file under the data directory could not be read; check it or pass --data-dir.")
    } else {
        None
    }
}
