mod commands;
mod config;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing::Level;

use commands::routes::Format;
use commands::Project;
use config::{Config, CONFIG_FILE};

#[derive(Parser)]
#[command(name = "voyage")]
#[command(version, about = "Voyage CLI - routes derived from the pages directory", long_about = None)]
struct Cli {
    /// Config file (default: <project>/voyage.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Project directory
    #[arg(short, long, global = true, default_value = ".")]
    project: PathBuf,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the route table
    Routes {
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },

    /// Validate pages and fail on rejected collisions
    Check,

    /// Show which page a URL resolves to
    Match {
        /// URL or path, e.g. /itineraries/42?tab=days
        url: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.unwrap_or_else(|| cli.project.join(CONFIG_FILE));
    let config = Config::load(&config_path)?;
    tracing::debug!(config = ?config_path, project = %config.project.name, "loaded configuration");

    let project = Project::new(cli.project, config);

    match cli.command {
        Commands::Routes { format } => commands::routes::execute(&project, format),
        Commands::Check => commands::check::execute(&project),
        Commands::Match { url } => commands::r#match::execute(&project, &url),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
