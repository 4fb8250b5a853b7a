use crate::commands::SettingsInput;
use crate::presentation::renderers::tui::{AppState, TuiRenderer};
use crate::settings::parse_settings;
use anyhow::Result;
use cyclecal_types::MonthCursor;

pub fn handle(input: SettingsInput, cursor: MonthCursor) -> Result<()> {
    let SettingsInput {
        cycle_length,
        period_length,
    } = input;

    let app_state = match (&cycle_length, &period_length) {
        (Some(cycle), Some(period)) => match parse_settings(cycle, period) {
            Some(settings) => AppState::with_settings(settings, cursor),
            None => {
                tracing::warn!("ignoring invalid preset settings; asking instead");
                AppState::with_form(cycle.clone(), period.clone(), cursor)
            }
        },
        _ => AppState::with_form(
            cycle_length.unwrap_or_default(),
            period_length.unwrap_or_default(),
            cursor,
        ),
    };

    TuiRenderer::run(app_state)
}
