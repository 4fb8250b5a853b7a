use cyclecal_types::*;

#[test]
fn test_month_name() {
    assert_eq!(month_name(1), "January");
    assert_eq!(month_name(12), "December");
    assert_eq!(month_name(0), "");
    assert_eq!(month_name(13), "");
}

#[test]
fn test_weekday_labels_are_monday_first() {
    assert_eq!(WEEKDAY_LABELS[0], "Mo");
    assert_eq!(WEEKDAY_LABELS[6], "Su");
}

#[test]
fn test_date_serializes_as_iso_string() {
    let date = CalendarDate::new(2024, 3, 10).unwrap();
    let json = serde_json::to_string(&date).unwrap();
    assert_eq!(json, "\"2024-03-10\"");

    let back: CalendarDate = serde_json::from_str(&json).unwrap();
    assert_eq!(back, date);
}

#[test]
fn test_cursor_serializes_year_and_month_only() {
    let cursor = MonthCursor::new(2024, 3).unwrap();
    let json = serde_json::to_string(&cursor).unwrap();
    assert_eq!(json, r#"{"year":2024,"month":3}"#);
}

#[test]
fn test_error_messages() {
    let err = CalendarDate::new(2023, 2, 29).unwrap_err();
    assert_eq!(err.to_string(), "Invalid date: 2023-02-29");

    let err = MonthCursor::new(2024, 13).unwrap_err();
    assert_eq!(err.to_string(), "Invalid month: 2024-13");
}

#[test]
fn test_cycle_settings_from_raw() {
    let settings = CycleSettings::from_raw(28, 5).unwrap();
    assert_eq!(settings.cycle_length.get(), 28);
    assert_eq!(settings.period_length.get(), 5);

    assert!(CycleSettings::from_raw(0, 5).is_none());
    assert!(CycleSettings::from_raw(28, 0).is_none());
}
