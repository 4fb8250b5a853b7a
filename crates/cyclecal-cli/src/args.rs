use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use cyclecal_types::CalendarDate;

#[derive(Parser)]
#[command(name = "cyclecal")]
#[command(about = "Pick a date or a date range on a terminal calendar", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to config.toml")]
    pub config: Option<String>,

    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    #[arg(long, global = true, help = "Cycle length in days (skips the settings form)")]
    pub cycle_length: Option<String>,

    #[arg(long, global = true, help = "Period length in days (skips the settings form)")]
    pub period_length: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive calendar (default)
    Pick {
        #[arg(long, requires = "month")]
        year: Option<i32>,

        #[arg(long, requires = "year")]
        month: Option<u32>,
    },

    /// Print one month, optionally after a sequence of day clicks
    Show {
        #[arg(long, requires = "month")]
        year: Option<i32>,

        #[arg(long, requires = "year")]
        month: Option<u32>,

        #[arg(long = "click", value_name = "YYYY-MM-DD")]
        clicks: Vec<CalendarDate>,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },

    /// Write a default configuration file
    Init {
        #[arg(long)]
        force: bool,
    },
}
