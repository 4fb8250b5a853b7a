use super::view_models::{DayCellViewModel, MonthViewModel};
use cyclecal_engine::{DateGridController, GridCell};
use cyclecal_types::WEEKDAY_LABELS;

pub fn present_month(controller: &DateGridController) -> MonthViewModel {
    let grid = controller.grid();
    let selected = controller.selected();

    let weeks = grid
        .weeks
        .iter()
        .map(|week| {
            week.iter()
                .map(|cell| match *cell {
                    GridCell::Blank => DayCellViewModel::Blank,
                    GridCell::Day { date, selected } => DayCellViewModel::Day {
                        date,
                        day: date.day(),
                        selected,
                    },
                })
                .collect()
        })
        .collect();

    MonthViewModel {
        title: grid.cursor.title(),
        year: grid.cursor.year(),
        month: grid.cursor.month(),
        weekdays: WEEKDAY_LABELS.to_vec(),
        weeks,
        selection: controller.selection().range(),
        selected_count: selected.len(),
        settings: controller.settings(),
    }
}
