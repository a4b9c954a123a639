use timesmart_core::{Entry, Weekday};

use crate::commands::common::{format_entry_lines, load_timetable, parse_day, today, Context};
use crate::error::CliError;

pub async fn run_today(day: Option<&str>, context: &Context) -> Result<(), CliError> {
    let day = match day {
        Some(day) => parse_day(day)?,
        None => today(),
    };
    let timetable = load_timetable(context.timetable_path()?).await?;

    for line in format_day_schedule(day, &timetable.schedule_for(day)) {
        println!("{line}");
    }

    Ok(())
}

/// Heading plus one line per entry, or a rest-day note naming `day`
pub fn format_day_schedule(day: Weekday, schedule: &[&Entry]) -> Vec<String> {
    let mut lines = vec![format!("Schedule for {day}")];
    if schedule.is_empty() {
        lines.push(format!("No classes on {day}. Rest up!"));
    } else {
        lines.extend(format_entry_lines(schedule.iter().copied()));
    }
    lines
}
