mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod settings;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
