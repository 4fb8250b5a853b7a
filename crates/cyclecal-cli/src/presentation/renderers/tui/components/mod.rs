pub(crate) mod calendar;
pub(crate) mod settings_form;

pub(crate) use calendar::{CalendarAction, CalendarComponent};
pub(crate) use settings_form::{FormAction, SettingsFormComponent};
