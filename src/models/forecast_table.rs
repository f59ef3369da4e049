use std::fmt;
use std::fmt::Formatter;
use chrono::{DateTime, Local, Timelike};
use serde::Serialize;
use crate::kana::transliterate;
use crate::models::forecast::Forecast;
use crate::models::warn_info::WarnInfo;
use crate::models::weekly_info::WeeklyInfo;
use crate::time_buckets::{resolve, TIME_BUCKETS, SLOT_COUNT};

/// Number of days in the weekly outlook
pub const WEEKLY_DAYS: usize = 6;

/// Forecast table for one location as extracted from a portal page
///
/// The forecast and weekly arrays are fully overwritten on every extraction whereas
/// warnings are appended, hence an instance should be used for one extraction only.
#[derive(Serialize, Default, Clone, Debug)]
pub struct ForecastTable {
    pub loc_name: String,
    pub fore_data: [Forecast; SLOT_COUNT],
    pub warnings: Vec<WarnInfo>,
    pub weekly: [WeeklyInfo; WEEKLY_DAYS],
}

impl ForecastTable {
    pub fn new(loc_name: &str) -> ForecastTable {
        ForecastTable { loc_name: loc_name.to_string(), ..Default::default() }
    }

    /// Returns the time bucket label and forecast for the given number of hours after now.
    /// Data is not refreshed by this call.
    ///
    /// None is returned if the requested time falls outside the 48-hour window of the table.
    ///
    /// # Arguments
    ///
    /// * 'now' - the current date and time
    /// * 'after' - number of hours after now
    pub fn hours_later(&self, now: DateTime<Local>, after: u32) -> Option<(&'static str, &Forecast)> {
        resolve(&self.fore_data, now.hour(), after)
    }

    /// Returns a copy of the table with weather and warning texts replaced by their
    /// half-width katakana readings
    pub fn to_kana(&self) -> ForecastTable {
        let mut table = self.clone();
        table.fore_data.iter_mut().for_each(|f| f.weather = transliterate(&f.weather));
        table.weekly.iter_mut().for_each(|w| w.weather = transliterate(&w.weather));
        table.warnings.iter_mut().for_each(|w| {
            w.label = transliterate(&w.label);
            w.alarm_type = transliterate(&w.alarm_type);
        });

        table
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for ForecastTable {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        writeln!(f, "{:=<80}", format!("{} ", self.loc_name))?;

        for bucket in TIME_BUCKETS.iter() {
            let fore = &self.fore_data[bucket.index];
            writeln!(f, "{:<12} {:<10} {:>3}C {:>3}% {:>5.1}mm {} {}m/s",
                     bucket.label, fore.weather, fore.temperature, fore.humidity,
                     fore.precipitation, fore.direction, fore.speed)?;
        }

        writeln!(f, "{:-<80}", "Warnings ")?;
        for w in &self.warnings {
            writeln!(f, "{}: {}", w.label, w.alarm_type)?;
        }

        writeln!(f, "{:-<80}", "Weekly ")?;
        for w in &self.weekly {
            writeln!(f, "{} {:<10} {:>3}C {:>3}%", w.date.format("%m/%d"), w.weather, w.temperature, w.cor)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn hours_later_uses_hour_of_now() {
        let mut table = ForecastTable::new("横浜");
        table.fore_data[3].weather = "晴れ".to_string();
        table.fore_data[12].weather = "雨".to_string();
        let now = Local.with_ymd_and_hms(2026, 10, 16, 10, 30, 0).unwrap();

        let (label, fore) = table.hours_later(now, 0).unwrap();
        assert_eq!(label, TIME_BUCKETS[3].label);
        assert_eq!(fore.weather, "晴れ");

        let (_, fore) = table.hours_later(now, 26).unwrap();
        assert_eq!(fore.weather, "雨");

        assert!(table.hours_later(now, 38).is_none());
    }

    #[test]
    fn to_kana_leaves_numbers_alone() {
        let mut table = ForecastTable::new("横浜");
        table.fore_data[0] = Forecast {
            weather: "晴れ".to_string(),
            temperature: 25,
            humidity: 60,
            precipitation: 1.5,
            direction: "北".to_string(),
            speed: 5,
        };
        table.warnings.push(WarnInfo::none_issued());

        let kana = table.to_kana();
        assert_eq!(kana.fore_data[0].weather, "ﾊﾚ");
        assert_eq!(kana.fore_data[0].temperature, 25);
        assert_eq!(kana.warnings[0], WarnInfo::new("ｹｲﾎｳ･ﾁｭｳｲﾎｳ", "ﾅｼ"));
        assert_eq!(table.fore_data[0].weather, "晴れ");
    }

    #[test]
    fn display_lists_all_slots() {
        let table = ForecastTable::new("横浜");
        let text = table.to_string();

        assert!(text.starts_with("横浜 "));
        for bucket in TIME_BUCKETS.iter() {
            assert!(text.contains(bucket.label));
        }
    }
}
