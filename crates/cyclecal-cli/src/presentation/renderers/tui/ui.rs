use ratatui::Frame;

use super::app::{AppState, Screen};

pub(crate) fn draw(f: &mut Frame, state: &mut AppState) {
    let area = f.area();
    match &mut state.screen {
        Screen::Settings(form) => form.render(f, area),
        Screen::Calendar(calendar) => calendar.render(f, area),
    }
}
