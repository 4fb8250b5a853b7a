use crate::{Error, Result};
use chrono::{Datelike, Local, NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A naive calendar date (no time, no timezone).
///
/// Ordering is chronological. Values can only be built through
/// [`CalendarDate::new`] or from an existing [`NaiveDate`], so an instance
/// always names a day that exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(Error::InvalidDate {
                year,
                month,
                day: Some(day),
            })
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Today's date in the local timezone.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Monday = 0 .. Sunday = 6
    pub fn weekday_from_monday(&self) -> u32 {
        self.0.weekday().num_days_from_monday()
    }

    /// The following day, or `None` at the end of the representable range.
    pub fn succ(&self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    /// Shifts by a signed number of days.
    pub fn add_days(&self, days: i64) -> Option<Self> {
        self.0
            .checked_add_signed(TimeDelta::try_days(days)?)
            .map(Self)
    }

    /// Signed number of days from `earlier` to `self`.
    pub fn days_since(&self, earlier: CalendarDate) -> i64 {
        (self.0 - earlier.0).num_days()
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map_err(|e| Error::Parse(format!("'{}': {}", s, e)))?;
        Ok(Self(date))
    }
}

/// Number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(Error::InvalidDate {
        year,
        month,
        day: None,
    })?;
    Ok(month_length(first))
}

/// Days from `first` up to the end of its month.
pub(crate) fn month_length(first: NaiveDate) -> u32 {
    first
        .iter_days()
        .take_while(|date| date.month() == first.month())
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(CalendarDate::new(2024, 0, 1).is_err());
        assert!(CalendarDate::new(2024, 13, 1).is_err());
        assert!(CalendarDate::new(2023, 2, 29).is_err());
        assert!(CalendarDate::new(2024, 4, 31).is_err());
        assert!(CalendarDate::new(2024, 2, 29).is_ok());
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a = CalendarDate::new(2023, 12, 31).unwrap();
        let b = CalendarDate::new(2024, 1, 1).unwrap();
        let c = CalendarDate::new(2024, 1, 2).unwrap();
        assert!(a < b);
        assert!(b < c);
        assert_eq!(b.succ(), Some(c));
        assert_eq!(a.succ(), Some(b));
        assert_eq!(c.add_days(-2), Some(a));
        assert_eq!(a.add_days(7), CalendarDate::new(2024, 1, 7).ok());
        assert_eq!(c.days_since(a), 2);
        assert_eq!(a.days_since(c), -2);
    }

    #[test]
    fn test_display_and_parse() {
        let date = CalendarDate::new(2024, 3, 5).unwrap();
        assert_eq!(date.to_string(), "2024-03-05");
        assert_eq!("2024-03-05".parse::<CalendarDate>().unwrap(), date);
        assert!(matches!(
            "2024-02-30".parse::<CalendarDate>(),
            Err(Error::Parse(_))
        ));
        assert!("yesterday".parse::<CalendarDate>().is_err());
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_month(2023, 2).unwrap(), 28);
        assert_eq!(days_in_month(1900, 2).unwrap(), 28);
        assert_eq!(days_in_month(2000, 2).unwrap(), 29);
        assert_eq!(days_in_month(2024, 9).unwrap(), 30);
        assert_eq!(days_in_month(2024, 12).unwrap(), 31);
        assert!(days_in_month(2024, 0).is_err());
        assert!(days_in_month(2024, 13).is_err());
    }

    #[test]
    fn test_weekday_from_monday() {
        // 2024-03-04 was a Monday
        assert_eq!(
            CalendarDate::new(2024, 3, 4).unwrap().weekday_from_monday(),
            0
        );
        assert_eq!(
            CalendarDate::new(2024, 3, 10).unwrap().weekday_from_monday(),
            6
        );
    }
}
