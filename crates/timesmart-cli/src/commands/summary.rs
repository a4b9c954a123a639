use serde::Serialize;
use timesmart_core::ConflictSummary;

use crate::commands::common::{load_timetable, Context};
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct SummaryOutput {
    entries: usize,
    #[serde(flatten)]
    conflicts: ConflictSummary,
}

pub async fn run_summary(as_json: bool, context: &Context) -> Result<(), CliError> {
    let timetable = load_timetable(context.timetable_path()?).await?;
    let conflicts = timetable.detect_conflicts();
    let output = SummaryOutput {
        entries: timetable.len(),
        conflicts: ConflictSummary::from_conflicts(&conflicts),
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Entries: {}", output.entries);
        println!(
            "Clashes: {} ({})",
            output.conflicts.total,
            if output.conflicts.is_clear() {
                "all clear"
            } else {
                "resolve now"
            }
        );
        println!("Entries involved: {}", output.conflicts.involved_entries);
        println!(
            "  time: {}  room: {}  instructor: {}",
            output.conflicts.time_clashes,
            output.conflicts.room_clashes,
            output.conflicts.instructor_clashes
        );
    }

    Ok(())
}
