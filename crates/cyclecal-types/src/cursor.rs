use crate::date::month_length;
use crate::names::month_name;
use crate::{CalendarDate, Error, Result};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// The (year, month) currently on screen.
///
/// Navigation never mutates a cursor in place; moving one month produces a
/// new value that replaces the old one in its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MonthCursor {
    year: i32,
    month: u32,
    #[serde(skip)]
    first: CalendarDate,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(Error::InvalidDate {
            year,
            month,
            day: None,
        })?;
        Ok(Self {
            year,
            month,
            first: CalendarDate::from_naive(first),
        })
    }

    /// The month that contains `date`.
    pub fn containing(date: CalendarDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            first: date
                .as_naive()
                .with_day(1)
                .map(CalendarDate::from_naive)
                .unwrap_or(date),
        }
    }

    /// The month of today's local date.
    pub fn current() -> Self {
        Self::containing(CalendarDate::today())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> CalendarDate {
        self.first
    }

    pub fn days_in_month(&self) -> u32 {
        month_length(self.first.as_naive())
    }

    /// Whether `date` falls inside this month.
    pub fn contains(&self, date: CalendarDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Header text such as `March 2024`.
    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}
