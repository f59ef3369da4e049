use serde::Serialize;

/// Forecast for one three-hour slot
#[derive(Serialize, Default, Clone, Debug, PartialEq)]
pub struct Forecast {
    pub weather: String,
    pub temperature: i16,
    pub humidity: i16,
    pub precipitation: f64,
    pub direction: String,
    pub speed: i16,
}
