// Engine module - calendar layout and selection logic
// This layer sits between the plain date types and the CLI presentation

pub mod calendar;
pub mod grid;
pub mod selection;

pub use calendar::{Cell, DAYS_PER_WEEK, Step, WeekRow, month_weeks, shift_month};
pub use grid::{DateGridController, GridCell, MonthGrid, navigate, render};
pub use selection::{SelectedSet, SelectionRange, SelectionState};

pub use cyclecal_types::{Error, Result};
