//! Month/day helpers mirroring the facts API's calendar.
//!
//! The API serves February 29 facts year-round, so the day table fixes
//! February at 29 days with no leap-year check. That is an intentional
//! mirror of the upstream service, not an oversight.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

/// Days per month, January through December. February is always 29.
pub const DAYS_IN_MONTH: [u8; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Number of days in `month` (1-12). Out-of-range months yield 0.
pub fn days_in_month(month: u8) -> u8 {
    usize::from(month)
        .checked_sub(1)
        .and_then(|i| DAYS_IN_MONTH.get(i))
        .copied()
        .unwrap_or(0)
}

/// Selectable day numbers for `month` (1-12), in order.
pub fn day_options(month: u8) -> Vec<u8> {
    (1..=days_in_month(month)).collect()
}

/// English name for `month` (1-12).
pub fn month_name(month: u8) -> Option<&'static str> {
    usize::from(month).checked_sub(1).and_then(|i| MONTH_NAMES.get(i)).copied()
}

/// Format an API `MM/DD` date as "Month D" (`"07/04"` -> `"July 4"`).
/// Unparsable input is returned unchanged.
pub fn format_date(raw: &str) -> String {
    let mut parts = raw.splitn(2, '/');
    let month = parts.next().and_then(|m| m.trim().parse::<u8>().ok());
    let day = parts.next().and_then(|d| d.trim().parse::<u8>().ok());
    match (month.and_then(month_name), day) {
        (Some(name), Some(day)) => format!("{name} {day}"),
        _ => raw.to_owned(),
    }
}
