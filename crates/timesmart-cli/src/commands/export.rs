use std::path::Path;

use timesmart_core::report::{render_report, suggested_report_file_name, ReportFormat};
use timesmart_core::util::unix_timestamp_millis_now;

use crate::cli::ExportFormat;
use crate::commands::common::{detector_now, load_timetable, Context};
use crate::error::CliError;

pub async fn run_export(
    format: ExportFormat,
    output_path: Option<&Path>,
    context: &Context,
) -> Result<(), CliError> {
    let timetable = load_timetable(context.timetable_path()?).await?;
    let conflicts = timetable.detect_conflicts_with(&detector_now());
    let format = report_format(format);
    let rendered = render_report(&conflicts, timetable.entries(), format)?;

    if let Some(path) = output_path {
        // A directory target gets a timestamped file name inside it.
        let path = if path.is_dir() {
            path.join(suggested_report_file_name(
                format,
                unix_timestamp_millis_now(),
            ))
        } else {
            path.to_path_buf()
        };
        tokio::fs::write(&path, rendered).await?;
        println!("{}", path.display());
    } else {
        println!("{rendered}");
    }

    Ok(())
}

pub const fn report_format(format: ExportFormat) -> ReportFormat {
    match format {
        ExportFormat::Json => ReportFormat::Json,
        ExportFormat::Markdown => ReportFormat::Markdown,
    }
}
