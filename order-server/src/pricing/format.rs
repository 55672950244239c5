//! Price formatting

/// Render cents as a decimal amount with exactly two fractional digits
///
/// Pure integer arithmetic; the separator is always `.` regardless of locale.
pub fn format_price(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}
