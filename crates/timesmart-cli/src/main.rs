//! TimeSmart CLI - check a weekly timetable for clashes from the terminal
//!
//! Reads a JSON timetable snapshot and reports overlapping classes.

mod cli;
mod commands;
mod config;
mod error;

use clap::{CommandFactory, Parser};

use crate::cli::{Cli, Commands};
use crate::commands::check::run_check;
use crate::commands::common::Context;
use crate::commands::completions::run_completions;
use crate::commands::config::run_config;
use crate::commands::export::run_export;
use crate::commands::list::run_list;
use crate::commands::sample::run_sample;
use crate::commands::summary::run_summary;
use crate::commands::today::run_today;
use crate::config::CliConfig;
use crate::error::CliError;

const DEFAULT_LOG_FILTER: &str = "timesmart_cli=info,timesmart_core=info";

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CliConfig::load().map_err(CliError::Config)?;
    let context = Context::resolve(&config, cli.file, cli.user);

    match cli.command {
        Some(Commands::Check { mine, json }) => run_check(mine, json, &context).await?,
        Some(Commands::Summary { json }) => run_summary(json, &context).await?,
        Some(Commands::List { day, json }) => run_list(day.as_deref(), json, &context).await?,
        Some(Commands::Today { day }) => run_today(day.as_deref(), &context).await?,
        Some(Commands::Export { format, output }) => {
            run_export(format, output.as_deref(), &context).await?;
        }
        Some(Commands::Sample { output }) => run_sample(output.as_deref()).await?,
        Some(Commands::Completions { shell, output }) => {
            run_completions(shell, output.as_deref())?;
        }
        Some(Commands::Config { command }) => run_config(command, &config)?,
        None => {
            Cli::command().print_help().map_err(CliError::Io)?;
            println!();
        }
    }

    Ok(())
}
