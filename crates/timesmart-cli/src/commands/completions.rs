use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::aot::Generator;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::error::CliError;

pub fn run_completions(shell: Shell, output_path: Option<&Path>) -> Result<(), CliError> {
    let (bin_name, buffer) = render_completions(shell);

    match output_path {
        Some(path) => {
            let target = completion_target(shell, &bin_name, path);
            std::fs::write(&target, &buffer)?;
            tracing::info!(shell = %shell, path = %target.display(), "Wrote completion script");
            println!("{}", target.display());
        }
        None => io::stdout().write_all(&buffer)?,
    }

    Ok(())
}

/// Completion script for `shell`, keyed by the binary name clap reports
pub fn render_completions(shell: Shell) -> (String, Vec<u8>) {
    let mut command = Cli::command();
    let bin_name = command.get_name().to_string();
    let mut buffer = Vec::new();
    generate(shell, &mut command, bin_name.clone(), &mut buffer);
    (bin_name, buffer)
}

/// A directory target gets the file name the shell loads completions from
/// (`timesmart.bash`, `_timesmart`, `timesmart.fish`, ...).
pub fn completion_target(shell: Shell, bin_name: &str, path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(shell.file_name(bin_name))
    } else {
        path.to_path_buf()
    }
}
