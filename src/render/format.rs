//! Remaining time label

/// Format remaining seconds as `m:ss`.
///
/// Minutes are never padded, seconds always take two digits.
pub fn format_time_left(remaining: u64) -> String {
    let minutes = remaining / 60;
    let seconds = remaining % 60;
    format!("{}:{:02}", minutes, seconds)
}
