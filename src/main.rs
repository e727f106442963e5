mod commands;
mod form;
mod render;

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use daybook_core::clock::SystemClock;
use daybook_core::config::DaybookConfig;
use daybook_core::session::Session;
use render::Palette;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "daybook")]
#[command(about = "Browse a month of events, inspect a day, and add new events")]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Less log output
    #[arg(short, long, action = ArgAction::Count, global = true)]
    quiet: u8,

    /// Read configuration from this file instead of ~/.config/daybook/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse interactively (the default)
    Session,
    /// Show the month grid around a day, with that day's events
    Month {
        /// Day to select (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Show the events on a day
    Day {
        /// Day to show (YYYY-MM-DD), defaults to today
        date: Option<String>,
    },
    /// Show every event
    List {
        /// Print JSON instead of cards
        #[arg(long)]
        json: bool,
    },
    /// Add an event to this session's collection
    Add {
        #[arg(short, long)]
        title: Option<String>,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<String>,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<String>,

        /// Start time (HH:MM)
        #[arg(long)]
        start_time: Option<String>,

        /// End time (HH:MM)
        #[arg(long)]
        end_time: Option<String>,
    },
    /// Show the config file location and effective settings
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet)?;

    let config = load_config(cli.config.as_deref())?;
    let palette = Palette::from_config(&config);
    let mut session = Session::from_config(&config, SystemClock);

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => commands::session::run(&mut session, &palette),
        Commands::Month { date } => commands::month::run(&mut session, &palette, date.as_deref()),
        Commands::Day { date } => commands::day::run(&mut session, &palette, date.as_deref()),
        Commands::List { json } => commands::list::run(&mut session, &palette, json),
        Commands::Add {
            title,
            start_date,
            end_date,
            start_time,
            end_time,
        } => commands::add::run(
            &mut session,
            &palette,
            form::FormInput {
                title,
                start_date,
                end_date,
                start_time,
                end_time,
            },
        ),
        Commands::Config => commands::config::run(cli.config.as_deref(), &config),
    }
}

fn load_config(path: Option<&Path>) -> Result<DaybookConfig> {
    let config = match path {
        Some(path) => DaybookConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => DaybookConfig::load().context("Failed to load config")?,
    };
    debug!(?config, "loaded config");
    Ok(config)
}

fn init_tracing(verbose: u8, quiet: u8) -> Result<()> {
    let default_level = if quiet >= 2 {
        "error"
    } else if quiet == 1 || verbose == 0 {
        "warn"
    } else if verbose == 1 {
        "info"
    } else if verbose == 2 {
        "debug"
    } else {
        "trace"
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| anyhow::anyhow!("invalid RUST_LOG / log filter: {e}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))
}
