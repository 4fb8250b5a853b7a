mod app;
mod components;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

pub use app::AppState;

pub struct TuiRenderer;

impl TuiRenderer {
    /// Owns the terminal until the user quits. The terminal is restored on
    /// every exit path, including Ctrl-C delivered as a signal.
    pub fn run(mut app_state: AppState) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let result = Self::event_loop(&mut terminal, &mut app_state);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        app_state: &mut AppState,
    ) -> Result<()> {
        let tick_rate = Duration::from_millis(250);

        while !app_state.should_quit() {
            terminal.draw(|f| {
                ui::draw(f, app_state);
            })?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        app_state.handle_key(key);
                    }
                    Event::Mouse(mouse) => app_state.handle_mouse(mouse),
                    _ => {}
                }
            }
        }

        tracing::info!("calendar closed");
        Ok(())
    }
}
