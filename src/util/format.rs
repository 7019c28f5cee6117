#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a server-side creation timestamp for card display.
///
/// The server sends ISO-8601 strings; cards only show the date part.
pub fn format_created_at(raw: &str) -> String {
    raw.split(['T', ' ']).next().unwrap_or(raw).to_owned()
}
