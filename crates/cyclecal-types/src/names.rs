/// Column headers for a Monday-first week.
pub const WEEKDAY_LABELS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

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

/// English month name for 1..=12, empty string otherwise.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|idx| MONTH_NAMES.get(idx as usize))
        .copied()
        .unwrap_or("")
}
