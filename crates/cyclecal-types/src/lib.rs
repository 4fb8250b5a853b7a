pub mod cursor;
pub mod date;
pub mod error;
pub mod names;
pub mod settings;

pub use cursor::MonthCursor;
pub use date::{CalendarDate, days_in_month};
pub use error::{Error, Result};
pub use names::{WEEKDAY_LABELS, month_name};
pub use settings::CycleSettings;
