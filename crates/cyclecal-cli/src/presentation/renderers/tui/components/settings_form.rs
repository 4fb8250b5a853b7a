//! Settings Form Component
//!
//! Two numeric inputs and a submit action. Nothing reaches the calendar until
//! both values parse.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::settings::{INVALID_NUMBERS, parse_settings};
use cyclecal_types::CycleSettings;

/// Actions the form emits to the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    Submitted(CycleSettings),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    CycleLength,
    PeriodLength,
}

pub struct SettingsFormComponent {
    cycle_length: String,
    period_length: String,
    focus: Field,
    error: Option<&'static str>,
}

impl SettingsFormComponent {
    pub fn new(cycle_length: impl Into<String>, period_length: impl Into<String>) -> Self {
        Self {
            cycle_length: cycle_length.into(),
            period_length: period_length.into(),
            focus: Field::CycleLength,
            error: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<FormAction> {
        match key.code {
            KeyCode::Esc => Some(FormAction::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(FormAction::Quit)
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = match self.focus {
                    Field::CycleLength => Field::PeriodLength,
                    Field::PeriodLength => Field::CycleLength,
                };
                None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.focused_input().pop();
                None
            }
            KeyCode::Char(c) if !c.is_control() => {
                self.focused_input().push(c);
                None
            }
            _ => None,
        }
    }

    fn submit(&mut self) -> Option<FormAction> {
        match parse_settings(&self.cycle_length, &self.period_length) {
            Some(settings) => {
                self.error = None;
                tracing::info!(
                    cycle_length = settings.cycle_length.get(),
                    period_length = settings.period_length.get(),
                    "settings submitted"
                );
                Some(FormAction::Submitted(settings))
            }
            None => {
                tracing::debug!(
                    cycle_length = %self.cycle_length,
                    period_length = %self.period_length,
                    "settings rejected"
                );
                self.error = Some(INVALID_NUMBERS);
                None
            }
        }
    }

    fn focused_input(&mut self) -> &mut String {
        match self.focus {
            Field::CycleLength => &mut self.cycle_length,
            Field::PeriodLength => &mut self.period_length,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" cyclecal ")
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        self.render_input(f, chunks[0], "Cycle Length", &self.cycle_length, Field::CycleLength);
        self.render_input(f, chunks[1], "Period Days", &self.period_length, Field::PeriodLength);

        let hint = Paragraph::new(Line::from(
            "Enter: submit   Tab: next field   Esc: quit",
        ))
        .style(Style::default().fg(Color::DarkGray));
        f.render_widget(hint, chunks[2]);

        if let Some(error) = self.error {
            let error = Paragraph::new(error).style(Style::default().fg(Color::Red));
            f.render_widget(error, chunks[3]);
        }
    }

    fn render_input(&self, f: &mut Frame, area: Rect, label: &str, value: &str, field: Field) {
        let border = if self.focus == field {
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let input = Paragraph::new(value).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", label))
                .border_style(border),
        );
        f.render_widget(input, area);
    }
}
