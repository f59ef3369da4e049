use chrono::{DateTime, Local};
use serde::Serialize;

/// Outlook for one day of the weekly forecast
#[derive(Serialize, Default, Clone, Debug, PartialEq)]
pub struct WeeklyInfo {
    pub date: DateTime<Local>,
    pub weather: String,
    pub temperature: i16,
    /// Chance of rain in percent
    pub cor: i16,
}
