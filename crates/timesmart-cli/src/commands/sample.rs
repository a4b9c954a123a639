use std::path::Path;

use timesmart_core::sample::sample_timetable;

use crate::error::CliError;

pub async fn run_sample(output_path: Option<&Path>) -> Result<(), CliError> {
    let rendered = sample_timetable()?.to_json_pretty()?;

    if let Some(path) = output_path {
        tokio::fs::write(path, rendered).await?;
        println!("{}", path.display());
    } else {
        println!("{rendered}");
    }

    Ok(())
}
