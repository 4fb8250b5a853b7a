use crate::presentation::formatters::{format_selection, format_settings};
use crate::presentation::view_models::{DayCellViewModel, MonthViewModel};
use owo_colors::OwoColorize;
use std::fmt;

const CELL_WIDTH: usize = 4;

/// Plain-text month page used by `cyclecal show`.
///
/// Selected days are bracketed so the selection survives piping; with
/// `color` on they are also painted.
pub struct MonthView<'a> {
    data: &'a MonthViewModel,
    color: bool,
}

impl<'a> MonthView<'a> {
    pub fn new(data: &'a MonthViewModel) -> Self {
        Self { data, color: false }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn cell(&self, cell: &DayCellViewModel) -> String {
        match cell {
            DayCellViewModel::Blank => " ".repeat(CELL_WIDTH),
            DayCellViewModel::Day {
                day,
                selected: true,
                ..
            } => {
                let text = format!("[{:>2}]", day);
                if self.color {
                    text.black().on_magenta().to_string()
                } else {
                    text
                }
            }
            DayCellViewModel::Day { day, .. } => format!(" {:>2} ", day),
        }
    }
}

impl fmt::Display for MonthView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = if self.color {
            self.data.title.bold().to_string()
        } else {
            self.data.title.clone()
        };
        writeln!(f, "{}", title)?;

        let header: String = self
            .data
            .weekdays
            .iter()
            .map(|label| format!(" {:<2} ", label))
            .collect();
        writeln!(f, "{}", header.trim_end())?;

        for week in &self.data.weeks {
            let line: String = week.iter().map(|cell| self.cell(cell)).collect();
            writeln!(f, "{}", line.trim_end())?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "Selected: {}",
            format_selection(&self.data.selection, self.data.selected_count)
        )?;
        write!(f, "Settings: {}", format_settings(&self.data.settings))
    }
}
