use crate::calendar::{Cell, DAYS_PER_WEEK, Step, month_weeks, shift_month};
use crate::selection::{SelectedSet, SelectionRange, SelectionState};
use cyclecal_types::{CalendarDate, CycleSettings, MonthCursor, Result};
use serde::Serialize;

/// A day cell as the renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridCell {
    Blank,
    Day { date: CalendarDate, selected: bool },
}

impl GridCell {
    pub fn date(&self) -> Option<CalendarDate> {
        match self {
            GridCell::Blank => None,
            GridCell::Day { date, .. } => Some(*date),
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, GridCell::Day { selected: true, .. })
    }
}

/// Renderable layout of one month with selection flags applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub cursor: MonthCursor,
    pub weeks: Vec<[GridCell; DAYS_PER_WEEK]>,
}

impl MonthGrid {
    pub fn cell(&self, row: usize, col: usize) -> Option<GridCell> {
        self.weeks.get(row).and_then(|week| week.get(col)).copied()
    }

    pub fn cells(&self) -> impl Iterator<Item = &GridCell> {
        self.weeks.iter().flatten()
    }

    pub fn selected_days(&self) -> Vec<CalendarDate> {
        self.cells()
            .filter(|cell| cell.is_selected())
            .filter_map(GridCell::date)
            .collect()
    }

    pub fn day_count(&self) -> usize {
        self.cells().filter(|cell| cell.date().is_some()).count()
    }

    /// Grid position of `date`, if it is on this page.
    pub fn position_of(&self, date: CalendarDate) -> Option<(usize, usize)> {
        self.weeks.iter().enumerate().find_map(|(row, week)| {
            week.iter()
                .position(|cell| cell.date() == Some(date))
                .map(|col| (row, col))
        })
    }
}

/// Lays out `cursor`'s month and flags each day found in `selection`.
pub fn render(cursor: MonthCursor, selection: &SelectedSet) -> MonthGrid {
    // MonthCursor only holds valid months, so the layout cannot fail
    let weeks = month_weeks(cursor.year(), cursor.month())
        .unwrap_or_default()
        .iter()
        .map(|week| {
            week.cells().map(|cell| match cell {
                Cell::Blank => GridCell::Blank,
                Cell::Day(date) => GridCell::Day {
                    date,
                    selected: selection.contains(date),
                },
            })
        })
        .collect();

    MonthGrid { cursor, weeks }
}

/// Moves the cursor one month. Selection is not involved.
pub fn navigate(cursor: MonthCursor, delta: i32) -> Result<MonthCursor> {
    let (year, month) = shift_month(cursor.year(), cursor.month(), delta)?;
    MonthCursor::new(year, month)
}

/// State of the single calendar view: what month is shown, what is
/// selected, and the settings the view was opened with.
#[derive(Debug, Clone)]
pub struct DateGridController {
    cursor: MonthCursor,
    selection: SelectionState,
    settings: CycleSettings,
}

impl DateGridController {
    pub fn new(settings: CycleSettings, cursor: MonthCursor) -> Self {
        tracing::info!(
            cycle_length = settings.cycle_length.get(),
            period_length = settings.period_length.get(),
            month = %cursor.title(),
            "calendar view opened"
        );
        Self {
            cursor,
            selection: SelectionState::new(),
            settings,
        }
    }

    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn settings(&self) -> CycleSettings {
        self.settings
    }

    pub fn selected(&self) -> SelectedSet {
        self.selection.selected()
    }

    pub fn grid(&self) -> MonthGrid {
        render(self.cursor, &self.selection.selected())
    }

    pub fn navigate(&mut self, delta: i32) -> Result<MonthCursor> {
        self.cursor = navigate(self.cursor, delta)?;
        tracing::debug!(month = %self.cursor.title(), "navigated");
        Ok(self.cursor)
    }

    pub fn step(&mut self, step: Step) -> Result<MonthCursor> {
        self.navigate(step.delta())
    }

    pub fn on_day_click(&mut self, date: CalendarDate) -> (SelectionRange, MonthGrid) {
        let selected = self.selection.handle_click(date);
        (self.selection.range(), render(self.cursor, &selected))
    }

    /// Clicks the cell at `row`/`col` of the visible month. Blank or
    /// out-of-grid positions are ignored.
    pub fn on_cell_click(&mut self, row: usize, col: usize) -> Option<(SelectionRange, MonthGrid)> {
        let date = self.grid().cell(row, col)?.date()?;
        Some(self.on_day_click(date))
    }

    pub fn clear_selection(&mut self) -> MonthGrid {
        self.selection.clear();
        self.grid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> CycleSettings {
        CycleSettings::from_raw(28, 5).unwrap()
    }

    fn d(y: i32, m: u32, day: u32) -> CalendarDate {
        CalendarDate::new(y, m, day).unwrap()
    }

    #[test]
    fn test_render_marks_selected_days() {
        let mut state = SelectionState::new();
        state.handle_click(d(2024, 3, 10));
        state.handle_click(d(2024, 3, 12));

        let grid = render(MonthCursor::new(2024, 3).unwrap(), &state.selected());
        assert_eq!(
            grid.selected_days(),
            vec![d(2024, 3, 10), d(2024, 3, 11), d(2024, 3, 12)]
        );
        assert_eq!(grid.day_count(), 31);
        assert_eq!(grid.cell(0, 0), Some(GridCell::Blank));
    }

    #[test]
    fn test_navigate_keeps_selection() {
        let mut controller = DateGridController::new(settings(), MonthCursor::new(2024, 1).unwrap());
        controller.on_day_click(d(2024, 1, 30));
        controller.on_day_click(d(2024, 2, 2));

        let cursor = controller.navigate(1).unwrap();
        assert_eq!(cursor, MonthCursor::new(2024, 2).unwrap());
        assert_eq!(
            controller.grid().selected_days(),
            vec![d(2024, 2, 1), d(2024, 2, 2)]
        );

        controller.navigate(-1).unwrap();
        assert_eq!(
            controller.grid().selected_days(),
            vec![d(2024, 1, 30), d(2024, 1, 31)]
        );
        assert_eq!(controller.selected().len(), 4);
    }

    #[test]
    fn test_blank_cell_click_is_noop() {
        let mut controller = DateGridController::new(settings(), MonthCursor::new(2024, 3).unwrap());
        controller.on_day_click(d(2024, 3, 10));

        assert!(controller.on_cell_click(0, 0).is_none());
        assert!(controller.on_cell_click(9, 0).is_none());
        assert!(controller.on_cell_click(0, 7).is_none());
        assert_eq!(*controller.selection(), SelectionState::StartOnly(d(2024, 3, 10)));
    }

    #[test]
    fn test_cell_click_resolves_date() {
        let mut controller = DateGridController::new(settings(), MonthCursor::new(2024, 3).unwrap());
        // row 1, col 0 is Monday the 4th
        let (range, grid) = controller.on_cell_click(1, 0).unwrap();
        assert_eq!(range.start, Some(d(2024, 3, 4)));
        assert_eq!(range.end, None);
        assert_eq!(grid.position_of(d(2024, 3, 4)), Some((1, 0)));
    }

    #[test]
    fn test_navigate_rejects_invalid_delta() {
        let cursor = MonthCursor::new(2024, 3).unwrap();
        assert!(navigate(cursor, 0).is_err());
        assert!(navigate(cursor, 2).is_err());
    }

    #[test]
    fn test_settings_are_kept_unchanged() {
        let mut controller = DateGridController::new(settings(), MonthCursor::new(2024, 3).unwrap());
        controller.on_day_click(d(2024, 3, 1));
        controller.navigate(1).unwrap();
        assert_eq!(controller.settings(), settings());
    }
}
