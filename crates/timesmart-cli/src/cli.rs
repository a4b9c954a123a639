use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "timesmart")]
#[command(about = "Check a weekly timetable for clashing classes")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Timetable snapshot (JSON array of entries)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Identity (email) treated as the current user
    #[arg(long, global = true, value_name = "EMAIL")]
    pub user: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Detect clashes in the timetable
    Check {
        /// Only show clashes involving the current user's entries
        #[arg(long)]
        mine: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show entry and clash counts
    Summary {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List entries by weekday and start time
    List {
        /// Only list entries on this day
        #[arg(short, long, value_name = "DAY")]
        day: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the schedule for today (or another day)
    Today {
        /// Day to show instead of today
        #[arg(short, long, value_name = "DAY")]
        day: Option<String>,
    },
    /// Export a clash report
    Export {
        /// Report format
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Write the demo timetable snapshot
    Sample {
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
        /// Output file or directory (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Configure CLI defaults
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Markdown,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Initialize or update the CLI config
    Init {
        /// Default timetable snapshot path
        #[arg(long, value_name = "PATH")]
        timetable: Option<PathBuf>,
        /// Default current-user identity
        #[arg(long = "default-user", value_name = "EMAIL")]
        default_user: Option<String>,
    },
    /// Print the resolved CLI config
    Show,
}
