use cyclecal_types::{CalendarDate, Error, MonthCursor, Result};
use serde::Serialize;

pub use cyclecal_types::days_in_month;

pub const DAYS_PER_WEEK: usize = 7;

/// One position in a month layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "date", rename_all = "snake_case")]
pub enum Cell {
    /// Padding before day 1 or after the last day of the month.
    Blank,
    Day(CalendarDate),
}

impl Cell {
    pub fn date(&self) -> Option<CalendarDate> {
        match self {
            Cell::Blank => None,
            Cell::Day(date) => Some(*date),
        }
    }
}

/// A Monday-first week of exactly seven cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WeekRow([Cell; DAYS_PER_WEEK]);

impl WeekRow {
    pub fn cells(&self) -> &[Cell; DAYS_PER_WEEK] {
        &self.0
    }

    pub fn get(&self, col: usize) -> Option<Cell> {
        self.0.get(col).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.0.iter()
    }
}

/// Lays out `year`/`month` as Monday-first weeks.
///
/// Leading and trailing blanks pad partial weeks, so the result always holds
/// a whole number of weeks (four to six).
pub fn month_weeks(year: i32, month: u32) -> Result<Vec<WeekRow>> {
    let cursor = MonthCursor::new(year, month)?;
    let first = cursor.first_day();
    let leading = first.weekday_from_monday() as usize;
    let day_count = cursor.days_in_month() as usize;

    let mut cells = Vec::with_capacity(6 * DAYS_PER_WEEK);
    cells.extend(std::iter::repeat_n(Cell::Blank, leading));
    cells.extend(
        std::iter::successors(Some(first), CalendarDate::succ)
            .take(day_count)
            .map(Cell::Day),
    );
    let trailing = (DAYS_PER_WEEK - cells.len() % DAYS_PER_WEEK) % DAYS_PER_WEEK;
    cells.extend(std::iter::repeat_n(Cell::Blank, trailing));

    Ok(cells
        .chunks_exact(DAYS_PER_WEEK)
        .map(|chunk| {
            let mut week = [Cell::Blank; DAYS_PER_WEEK];
            week.copy_from_slice(chunk);
            WeekRow(week)
        })
        .collect())
}

/// Direction of a single-month move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Previous,
    Next,
}

impl Step {
    pub fn delta(self) -> i32 {
        match self {
            Step::Previous => -1,
            Step::Next => 1,
        }
    }
}

impl TryFrom<i32> for Step {
    type Error = Error;

    fn try_from(delta: i32) -> Result<Self> {
        match delta {
            -1 => Ok(Step::Previous),
            1 => Ok(Step::Next),
            other => Err(Error::InvalidDelta(other)),
        }
    }
}

/// Moves one month forward (`+1`) or backward (`-1`), rolling the year over
/// at December and January. Any other delta is rejected.
pub fn shift_month(year: i32, month: u32, delta: i32) -> Result<(i32, u32)> {
    let step = Step::try_from(delta)?;
    let invalid = || Error::InvalidDate {
        year,
        month,
        day: None,
    };

    if !(1..=12).contains(&month) {
        return Err(invalid());
    }

    match (step, month) {
        (Step::Next, 12) => Ok((year.checked_add(1).ok_or_else(invalid)?, 1)),
        (Step::Next, m) => Ok((year, m + 1)),
        (Step::Previous, 1) => Ok((year.checked_sub(1).ok_or_else(invalid)?, 12)),
        (Step::Previous, m) => Ok((year, m - 1)),
    }
}
