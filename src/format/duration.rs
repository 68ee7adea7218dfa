use std::time::Duration;

/// Render a duration as English prose
///
/// Leading zero units are omitted, but once a unit is shown every smaller unit
/// follows: `"5 minutes and 30 seconds"`, `"1 days, 0 hours, 0 minutes and 1
/// seconds"`. Units are always plural.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;

    let seconds_part = format!("{seconds} seconds");

    if days > 0 {
        format!("{days} days, {hours} hours, {minutes} minutes and {seconds_part}")
    } else if hours > 0 {
        format!("{hours} hours, {minutes} minutes and {seconds_part}")
    } else if minutes > 0 {
        format!("{minutes} minutes and {seconds_part}")
    } else {
        seconds_part
    }
}
