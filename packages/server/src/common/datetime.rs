use chrono::NaiveDateTime;

/// Format a show start time for display, e.g. "Mon Jun 09, 2025 8:30PM".
///
/// The one formatting function for every outbound show timestamp; view
/// models carry the formatted string, never the raw value.
pub fn format_start_time(t: NaiveDateTime) -> String {
    t.format("%a %b %d, %Y %-l:%M%p").to_string()
}
