mod month;

pub use month::MonthView;
