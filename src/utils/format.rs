use chrono::NaiveDate;

/// Renders an API due date (`2025-01-15`) as `Jan 15, 2025`. Unparseable
/// input is shown as-is rather than hiding the row.
pub fn format_due_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
