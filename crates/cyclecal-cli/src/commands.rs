use super::args::{Cli, Commands};
use super::handlers;
use crate::config::{Config, resolve_config_path};
use crate::logging::{self, LogTarget};
use crate::types::LogLevel;
use anyhow::{Context, Result, bail};
use cyclecal_types::MonthCursor;

/// Raw cycle/period values from flags or config, not yet validated.
pub(crate) struct SettingsInput {
    pub cycle_length: Option<String>,
    pub period_length: Option<String>,
}

pub fn run(cli: Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_deref())?;

    let command = cli.command.unwrap_or(Commands::Pick {
        year: None,
        month: None,
    });

    // init must work even when the existing file does not parse
    if let Commands::Init { force } = command {
        return handlers::init::handle(&config_path, force);
    }

    let config = Config::load_from(&config_path)?;
    let level = cli
        .log_level
        .or(config.logging.level)
        .unwrap_or(LogLevel::Warn);

    let input = SettingsInput {
        cycle_length: cli
            .cycle_length
            .or_else(|| config.settings.cycle_length.map(|n| n.to_string())),
        period_length: cli
            .period_length
            .or_else(|| config.settings.period_length.map(|n| n.to_string())),
    };

    match command {
        Commands::Pick { year, month } => {
            let target = config
                .logging
                .file
                .clone()
                .map_or(LogTarget::Off, LogTarget::File);
            logging::init(level, target)?;
            tracing::debug!(config = %config_path.display(), "config loaded");
            handlers::pick::handle(input, cursor_from(year, month)?)
        }

        Commands::Show {
            year,
            month,
            clicks,
            format,
        } => {
            logging::init(level, LogTarget::Stderr)?;
            tracing::debug!(config = %config_path.display(), "config loaded");
            handlers::show::handle(input, cursor_from(year, month)?, &clicks, format)
        }

        Commands::Init { .. } => unreachable!("handled above"),
    }
}

fn cursor_from(year: Option<i32>, month: Option<u32>) -> Result<MonthCursor> {
    match (year, month) {
        (Some(year), Some(month)) => {
            MonthCursor::new(year, month).context("Cannot open that month")
        }
        (None, None) => Ok(MonthCursor::current()),
        _ => bail!("--year and --month must be given together"),
    }
}
