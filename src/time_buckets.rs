use crate::models::forecast::Forecast;

/// Length of one forecast slot in hours
pub const HOURS_PER_SLOT: u32 = 3;

/// Number of slots covering one day
pub const SLOTS_PER_DAY: usize = 8;

/// Number of slots in the forecast table, today followed by tomorrow
pub const SLOT_COUNT: usize = 2 * SLOTS_PER_DAY;

/// Slot offset for tomorrow's forecast
pub const TOMORROW_OFFSET: usize = SLOTS_PER_DAY;

/// Last hour (counted from today 00:00) covered by the forecast table
pub const LAST_HOUR: u32 = 47;

/// A named three-hour time of day window
pub struct TimeBucket {
    pub label: &'static str,
    pub index: usize,
}

/// Time buckets in slot order, slot index is hour of day / 3 with tomorrow offset by 8
pub const TIME_BUCKETS: [TimeBucket; SLOT_COUNT] = [
    TimeBucket { label: "ﾐﾒｲ", index: 0 },
    TimeBucket { label: "ｱｹｶﾞﾀ", index: 1 },
    TimeBucket { label: "ｱｻ", index: 2 },
    TimeBucket { label: "ﾋﾙﾏｴ", index: 3 },
    TimeBucket { label: "ﾋﾙｽｷﾞ", index: 4 },
    TimeBucket { label: "ﾕｳｶﾞﾀ", index: 5 },
    TimeBucket { label: "ｺﾝﾊﾞﾝ", index: 6 },
    TimeBucket { label: "ﾖﾙｵｿｸ", index: 7 },
    TimeBucket { label: "ｱｽ ﾐﾒｲ", index: 8 },
    TimeBucket { label: "ｱｽ ｱｹｶﾞﾀ", index: 9 },
    TimeBucket { label: "ｱｽ ｱｻ", index: 10 },
    TimeBucket { label: "ｱｽ ﾋﾙﾏｴ", index: 11 },
    TimeBucket { label: "ｱｽ ﾋﾙｽｷﾞ", index: 12 },
    TimeBucket { label: "ｱｽ ﾕｳｶﾞﾀ", index: 13 },
    TimeBucket { label: "ｱｽ ﾖﾙ", index: 14 },
    TimeBucket { label: "ｱｽ ﾖﾙｵｿｸ", index: 15 },
];

/// Returns the slot index for an hour counted from today 00:00, or None if the
/// hour is beyond tomorrow
///
/// # Arguments
///
/// * 'hour' - hours since today 00:00
pub fn slot_index(hour: u32) -> Option<usize> {
    if hour > LAST_HOUR {
        None
    } else {
        Some((hour / HOURS_PER_SLOT) as usize)
    }
}

/// Resolves the bucket label and forecast slot for a number of hours after the given hour of day
///
/// # Arguments
///
/// * 'fore_data' - the forecast slots to project from
/// * 'hour_of_day' - current hour of day (0-23)
/// * 'after' - number of hours ahead
pub fn resolve(fore_data: &[Forecast; SLOT_COUNT], hour_of_day: u32, after: u32) -> Option<(&'static str, &Forecast)> {
    let index = slot_index(hour_of_day.checked_add(after)?)?;

    Some((TIME_BUCKETS[index].label, &fore_data[index]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered() -> [Forecast; SLOT_COUNT] {
        let mut fore_data: [Forecast; SLOT_COUNT] = Default::default();
        for (i, f) in fore_data.iter_mut().enumerate() {
            f.temperature = i as i16;
        }
        fore_data
    }

    #[test]
    fn bucket_indexes_match_positions() {
        for (i, bucket) in TIME_BUCKETS.iter().enumerate() {
            assert_eq!(bucket.index, i);
            assert!(!bucket.label.is_empty());
        }
    }

    #[test]
    fn every_offset_in_window_resolves() {
        let fore_data = numbered();
        for after in 0..=LAST_HOUR {
            let (label, fore) = resolve(&fore_data, 0, after).unwrap();
            let index = (after / 3) as usize;
            assert_eq!(label, TIME_BUCKETS[index].label);
            assert_eq!(fore.temperature, index as i16);
        }
    }

    #[test]
    fn offsets_beyond_window_give_none() {
        let fore_data = numbered();
        assert!(resolve(&fore_data, 0, 48).is_none());
        assert!(resolve(&fore_data, 23, 25).is_none());
        assert!(resolve(&fore_data, 5, u32::MAX).is_none());
    }

    #[test]
    fn late_evening_plus_a_day_lands_tomorrow_night() {
        let fore_data = numbered();
        let (label, fore) = resolve(&fore_data, 22, 24).unwrap();
        assert_eq!(label, "ｱｽ ﾖﾙｵｿｸ");
        assert_eq!(fore.temperature, 15);
    }
}
