use timesmart_core::Entry;

use crate::commands::common::{
    entry_to_list_item, format_entry_lines, load_timetable, parse_day, Context, EntryListItem,
};
use crate::error::CliError;

pub async fn run_list(day: Option<&str>, as_json: bool, context: &Context) -> Result<(), CliError> {
    let timetable = load_timetable(context.timetable_path()?).await?;
    let entries: Vec<&Entry> = match day {
        Some(day) => timetable.schedule_for(parse_day(day)?),
        None => timetable.weekly_schedule(),
    };

    if as_json {
        let json_items = entries
            .iter()
            .map(|entry| entry_to_list_item(entry))
            .collect::<Vec<EntryListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
    } else {
        for line in format_entry_lines(entries) {
            println!("{line}");
        }
    }

    Ok(())
}
