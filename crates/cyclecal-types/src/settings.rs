use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// The two numbers collected before the calendar opens.
///
/// They are carried alongside the calendar view but nothing derives dates
/// from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleSettings {
    pub cycle_length: NonZeroU32,
    pub period_length: NonZeroU32,
}

impl CycleSettings {
    pub fn new(cycle_length: NonZeroU32, period_length: NonZeroU32) -> Self {
        Self {
            cycle_length,
            period_length,
        }
    }

    /// Returns `None` if either value is zero.
    pub fn from_raw(cycle_length: u32, period_length: u32) -> Option<Self> {
        Some(Self::new(
            NonZeroU32::new(cycle_length)?,
            NonZeroU32::new(period_length)?,
        ))
    }
}
