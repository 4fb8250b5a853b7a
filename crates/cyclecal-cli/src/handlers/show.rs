use crate::commands::SettingsInput;
use crate::presentation::present_month;
use crate::presentation::views::MonthView;
use crate::settings::{INVALID_NUMBERS, parse_settings};
use crate::types::OutputFormat;
use anyhow::{Result, anyhow, bail};
use cyclecal_engine::DateGridController;
use cyclecal_types::{CalendarDate, MonthCursor};
use is_terminal::IsTerminal;

pub fn handle(
    input: SettingsInput,
    cursor: MonthCursor,
    clicks: &[CalendarDate],
    format: OutputFormat,
) -> Result<()> {
    let (Some(cycle_length), Some(period_length)) = (input.cycle_length, input.period_length)
    else {
        bail!(
            "--cycle-length and --period-length are required (or set them under [settings] in the config file)"
        );
    };
    let settings =
        parse_settings(&cycle_length, &period_length).ok_or_else(|| anyhow!(INVALID_NUMBERS))?;

    let mut controller = DateGridController::new(settings, cursor);
    for date in clicks {
        controller.on_day_click(*date);
    }

    let data = present_month(&controller);
    match format {
        OutputFormat::Plain => {
            let color = std::io::stdout().is_terminal();
            println!("{}", MonthView::new(&data).with_color(color));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
    }

    Ok(())
}
