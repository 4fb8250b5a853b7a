//! Calendar Component
//!
//! Owns the view's `DateGridController` plus the UI-only focus cell, and maps
//! keys and mouse clicks onto navigation and day clicks.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::formatters::{format_selection, format_settings};
use crate::presentation::present_month;
use crate::presentation::view_models::DayCellViewModel;
use cyclecal_engine::{DAYS_PER_WEEK, DateGridController, Step};
use cyclecal_types::{CalendarDate, MonthCursor};

const CELL_WIDTH: u16 = 4;
const GRID_WIDTH: u16 = CELL_WIDTH * DAYS_PER_WEEK as u16;
const FOOTER_HEIGHT: u16 = 4;
const SELECTED_BG: Color = Color::Rgb(244, 143, 177);

/// Actions the calendar emits to the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarAction {
    Quit,
}

pub struct CalendarComponent {
    controller: DateGridController,
    focus: CalendarDate,
    // Hit boxes from the last draw
    cell_areas: Vec<(Rect, CalendarDate)>,
    prev_area: Rect,
    next_area: Rect,
}

impl CalendarComponent {
    pub fn new(controller: DateGridController) -> Self {
        let cursor = controller.cursor();
        let today = CalendarDate::today();
        let focus = if cursor.contains(today) {
            today
        } else {
            cursor.first_day()
        };

        Self {
            controller,
            focus,
            cell_areas: Vec::new(),
            prev_area: Rect::default(),
            next_area: Rect::default(),
        }
    }

    #[cfg(test)]
    pub(crate) fn controller(&self) -> &DateGridController {
        &self.controller
    }

    #[cfg(test)]
    pub(crate) fn focus(&self) -> CalendarDate {
        self.focus
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<CalendarAction> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(CalendarAction::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(CalendarAction::Quit)
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.move_focus(-1);
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.move_focus(1);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_focus(-(DAYS_PER_WEEK as i64));
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_focus(DAYS_PER_WEEK as i64);
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.click(self.focus);
                None
            }
            KeyCode::PageUp | KeyCode::Char('[') | KeyCode::Char('p') => {
                self.step(Step::Previous);
                None
            }
            KeyCode::PageDown | KeyCode::Char(']') | KeyCode::Char('n') => {
                self.step(Step::Next);
                None
            }
            KeyCode::Char('c') => {
                self.controller.clear_selection();
                None
            }
            _ => None,
        }
    }

    /// Left clicks on a day cell select it; clicks on the arrows change month.
    /// Everything else, blank cells included, is ignored.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let pos = Position::new(mouse.column, mouse.row);

        if self.prev_area.contains(pos) {
            self.step(Step::Previous);
            return;
        }
        if self.next_area.contains(pos) {
            self.step(Step::Next);
            return;
        }

        let hit = self
            .cell_areas
            .iter()
            .find(|(area, _)| area.contains(pos))
            .map(|(_, date)| *date);
        if let Some(date) = hit {
            self.focus = date;
            self.click(date);
        }
    }

    fn click(&mut self, date: CalendarDate) {
        let (range, _) = self.controller.on_day_click(date);
        tracing::debug!(start = ?range.start, end = ?range.end, "day clicked");
    }

    fn step(&mut self, step: Step) {
        match self.controller.step(step) {
            Ok(cursor) => self.focus = same_day_in(cursor, self.focus),
            Err(e) => tracing::warn!("navigation failed: {}", e),
        }
    }

    /// Moves focus by whole days, following it into the neighbouring month.
    fn move_focus(&mut self, days: i64) {
        let Some(target) = self.focus.add_days(days) else {
            return;
        };

        let cursor = self.controller.cursor();
        if !cursor.contains(target) {
            let step = if target < cursor.first_day() {
                Step::Previous
            } else {
                Step::Next
            };
            if let Err(e) = self.controller.step(step) {
                tracing::warn!("navigation failed: {}", e);
                return;
            }
        }
        self.focus = target;
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let data = present_month(&self.controller);

        let grid_height = 2 + data.weeks.len() as u16;
        let width = (GRID_WIDTH + 2).min(area.width);
        let height = (grid_height + 2).min(area.height);
        let frame_area = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y,
            width,
            height,
        };
        let footer_area = Rect {
            y: frame_area.bottom(),
            height: FOOTER_HEIGHT,
            ..area
        }
        .intersection(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(frame_area);
        f.render_widget(block, frame_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        self.render_header(f, chunks[0], &data.title);

        let weekdays: String = data
            .weekdays
            .iter()
            .map(|label| format!(" {:<2} ", label))
            .collect();
        f.render_widget(
            Paragraph::new(weekdays).style(
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::DIM),
            ),
            chunks[1],
        );

        self.cell_areas.clear();
        for (row, week) in data.weeks.iter().enumerate() {
            for (col, cell) in week.iter().enumerate() {
                let cell_area = Rect {
                    x: chunks[2].x + col as u16 * CELL_WIDTH,
                    y: chunks[2].y + row as u16,
                    width: CELL_WIDTH,
                    height: 1,
                }
                .intersection(chunks[2]);
                if cell_area.is_empty() {
                    continue;
                }
                self.render_cell(f, cell_area, cell);
            }
        }

        let footer = vec![
            Line::from(format!(
                "Selected: {}",
                format_selection(&data.selection, data.selected_count)
            )),
            Line::from(format!("Settings: {}", format_settings(&data.settings))),
            Line::from(""),
            Line::from("←↑↓→ move  ⏎ pick  [ ] month  c clear  q quit")
                .style(Style::default().fg(Color::DarkGray)),
        ];
        f.render_widget(
            Paragraph::new(footer).alignment(Alignment::Center),
            footer_area,
        );
    }

    fn render_header(&mut self, f: &mut Frame, area: Rect, title: &str) {
        self.prev_area = Rect {
            width: 3.min(area.width),
            ..area
        };
        self.next_area = Rect {
            x: area.x + area.width.saturating_sub(3),
            width: 3.min(area.width),
            ..area
        };

        f.render_widget(
            Paragraph::new(Line::from(title).style(Style::default().add_modifier(Modifier::BOLD)))
                .alignment(Alignment::Center),
            area,
        );
        f.render_widget(Paragraph::new(" < "), self.prev_area);
        f.render_widget(Paragraph::new(" > "), self.next_area);
    }

    fn render_cell(&mut self, f: &mut Frame, area: Rect, cell: &DayCellViewModel) {
        let DayCellViewModel::Day {
            date,
            day,
            selected,
        } = *cell
        else {
            return;
        };

        let mut style = Style::default();
        if selected {
            style = style.bg(SELECTED_BG).fg(Color::Black);
        }
        if date == self.focus {
            style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
        }

        f.render_widget(
            Paragraph::new(format!(" {:>2} ", day)).style(style),
            area,
        );
        self.cell_areas.push((area, date));
    }

    #[cfg(test)]
    pub(crate) fn area_of(&self, date: CalendarDate) -> Option<Rect> {
        self.cell_areas
            .iter()
            .find(|(_, d)| *d == date)
            .map(|(area, _)| *area)
    }

    #[cfg(test)]
    pub(crate) fn nav_areas(&self) -> (Rect, Rect) {
        (self.prev_area, self.next_area)
    }
}

/// `date`'s day of month moved into `cursor`, clamped to the month length.
fn same_day_in(cursor: MonthCursor, date: CalendarDate) -> CalendarDate {
    let day = date.day().min(cursor.days_in_month());
    CalendarDate::new(cursor.year(), cursor.month(), day).unwrap_or(cursor.first_day())
}
