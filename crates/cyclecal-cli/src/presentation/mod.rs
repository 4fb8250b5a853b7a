//! # Presentation Layer
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] ==(JSON)==> [ serde_json ] --> stdout
//!                                                 ==(Text)==> [ MonthView ]  --> stdout
//!
//! [ Handler ] --> [ TuiRenderer ] --> [ AppState ] --> [ Component ] <-- key / mouse
//!                                                           |
//!                                              [ Presenter ] --> [ ViewModel ] --> widgets
//! ```
//!
//! * `view_models`: raw data only (dates, flags, counts). Must implement `Serialize`.
//! * `presenters`: turn a `DateGridController` into a `MonthViewModel`.
//! * `views`: plain-text layout and colors.
//! * `formatters`: small string helpers shared by views and the TUI.
//! * `renderers/tui`: the interactive screen. Components own their UI state
//!   (focused cell, text inputs) and emit actions upward.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use presenters::present_month;
pub use view_models::{DayCellViewModel, MonthViewModel};
