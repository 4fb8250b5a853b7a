use cyclecal_engine::SelectionRange;
use cyclecal_types::CycleSettings;

/// `none`, a single date, or `start..end (N days)`.
pub fn format_selection(range: &SelectionRange, count: usize) -> String {
    match (range.start, range.end) {
        (None, _) => "none".to_string(),
        (Some(start), None) => start.to_string(),
        (Some(start), Some(end)) => format!("{}..{} ({})", start, end, format_days(count)),
    }
}

pub fn format_settings(settings: &CycleSettings) -> String {
    format!(
        "cycle {}, period {}",
        format_days(settings.cycle_length.get() as usize),
        format_days(settings.period_length.get() as usize)
    )
}

pub fn format_days(n: usize) -> String {
    if n == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", n)
    }
}
