use crossterm::event::{KeyEvent, MouseEvent};
use cyclecal_engine::DateGridController;
use cyclecal_types::{CycleSettings, MonthCursor};

use super::components::{CalendarAction, CalendarComponent, FormAction, SettingsFormComponent};

pub(crate) enum Screen {
    Settings(SettingsFormComponent),
    Calendar(CalendarComponent),
}

pub struct AppState {
    pub(crate) screen: Screen,
    pub(crate) should_quit: bool,
    initial_cursor: MonthCursor,
}

impl AppState {
    /// Starts on the settings form, prefilled with whatever was given.
    pub fn with_form(cycle_length: String, period_length: String, cursor: MonthCursor) -> Self {
        Self {
            screen: Screen::Settings(SettingsFormComponent::new(cycle_length, period_length)),
            should_quit: false,
            initial_cursor: cursor,
        }
    }

    /// Starts directly on the calendar.
    pub fn with_settings(settings: CycleSettings, cursor: MonthCursor) -> Self {
        Self {
            screen: Screen::Calendar(calendar_for(settings, cursor)),
            should_quit: false,
            initial_cursor: cursor,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match &mut self.screen {
            Screen::Settings(form) => match form.handle_input(key) {
                Some(FormAction::Submitted(settings)) => {
                    self.screen = Screen::Calendar(calendar_for(settings, self.initial_cursor));
                }
                Some(FormAction::Quit) => self.should_quit = true,
                None => {}
            },
            Screen::Calendar(calendar) => {
                if let Some(CalendarAction::Quit) = calendar.handle_input(key) {
                    self.should_quit = true;
                }
            }
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if let Screen::Calendar(calendar) = &mut self.screen {
            calendar.handle_mouse(mouse);
        }
    }
}

fn calendar_for(settings: CycleSettings, cursor: MonthCursor) -> CalendarComponent {
    CalendarComponent::new(DateGridController::new(settings, cursor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_form_then_calendar() {
        let cursor = MonthCursor::new(2024, 3).unwrap();
        let mut app = AppState::with_form("28".into(), String::new(), cursor);

        app.handle_key(key(KeyCode::Enter));
        assert!(matches!(app.screen, Screen::Settings(_)));

        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Char('5')));
        app.handle_key(key(KeyCode::Enter));

        let Screen::Calendar(calendar) = &app.screen else {
            panic!("expected calendar screen");
        };
        assert_eq!(calendar.controller().cursor(), cursor);
        assert_eq!(
            calendar.controller().settings(),
            CycleSettings::from_raw(28, 5).unwrap()
        );
        assert!(!app.should_quit());
    }

    #[test]
    fn test_quit_from_calendar() {
        let settings = CycleSettings::from_raw(28, 5).unwrap();
        let mut app = AppState::with_settings(settings, MonthCursor::new(2024, 3).unwrap());
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn test_q_is_typed_into_the_form() {
        let mut app = AppState::with_form(String::new(), String::new(), MonthCursor::current());
        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.should_quit());
        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit());
    }
}
