use cyclecal_engine::SelectionRange;
use cyclecal_types::{CalendarDate, CycleSettings};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthViewModel {
    pub title: String,
    pub year: i32,
    pub month: u32,
    pub weekdays: Vec<&'static str>,
    pub weeks: Vec<Vec<DayCellViewModel>>,
    pub selection: SelectionRange,
    pub selected_count: usize,
    pub settings: CycleSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DayCellViewModel {
    Blank,
    Day {
        date: CalendarDate,
        day: u32,
        selected: bool,
    },
}

impl DayCellViewModel {
    pub fn date(&self) -> Option<CalendarDate> {
        match self {
            DayCellViewModel::Blank => None,
            DayCellViewModel::Day { date, .. } => Some(*date),
        }
    }
}
