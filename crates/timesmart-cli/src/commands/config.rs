use std::path::PathBuf;

use timesmart_core::util::normalize_text_option;

use crate::cli::ConfigCommands;
use crate::config::CliConfig;
use crate::error::CliError;

pub fn run_config(command: ConfigCommands, context_config: &CliConfig) -> Result<(), CliError> {
    match command {
        ConfigCommands::Init {
            timetable,
            default_user,
        } => run_config_init(timetable, default_user),
        ConfigCommands::Show => {
            println!("{}", serde_json::to_string_pretty(context_config)?);
            Ok(())
        }
    }
}

pub fn run_config_init(
    timetable: Option<PathBuf>,
    default_user: Option<String>,
) -> Result<(), CliError> {
    let mut config = CliConfig::load().map_err(CliError::Config)?;
    apply_config_updates(&mut config, timetable, default_user)?;

    let path = config.save().map_err(CliError::Config)?;
    tracing::info!(path = %path.display(), "Saved CLI config");
    println!("Saved config to {}", path.display());
    Ok(())
}

/// Merge explicit values into `config`, keeping existing values otherwise.
pub fn apply_config_updates(
    config: &mut CliConfig,
    timetable: Option<PathBuf>,
    default_user: Option<String>,
) -> Result<(), CliError> {
    if let Some(path) = timetable {
        if path.as_os_str().is_empty() {
            return Err(CliError::Config("Timetable path cannot be empty".to_string()));
        }
        config.timetable_path = Some(path);
    }
    if let Some(user) = normalize_text_option(default_user) {
        config.user = Some(user);
    }
    config.version = config.version.max(1);
    Ok(())
}
