use timesmart_core::conflict::conflicts_for_owner;

use crate::commands::common::{detector_now, format_conflict_lines, load_timetable, Context};
use crate::error::CliError;

pub async fn run_check(mine: bool, as_json: bool, context: &Context) -> Result<(), CliError> {
    let timetable = load_timetable(context.timetable_path()?).await?;
    let conflicts = timetable.detect_conflicts_with(&detector_now());

    let shown = if mine {
        conflicts_for_owner(&conflicts, timetable.entries(), context.user()?)
    } else {
        conflicts.iter().collect()
    };
    tracing::debug!(
        detected = conflicts.len(),
        shown = shown.len(),
        "Clash check complete"
    );

    if as_json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
    } else if shown.is_empty() {
        println!("No clashes detected.");
    } else {
        for line in format_conflict_lines(&shown, timetable.entries()) {
            println!("{line}");
        }
    }

    Ok(())
}
