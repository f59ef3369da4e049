use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;
use chrono::{DateTime, Local, TimeDelta};
use log::{debug, warn};
use crate::document::Document;
use crate::errors::WeatherError;
use crate::grid::Grid;
use crate::models::forecast_table::{ForecastTable, WEEKLY_DAYS};
use crate::time_buckets::{SLOTS_PER_DAY, TOMORROW_OFFSET};
use crate::warnings::apply_warnings;

/// Grid rows holding the forecast values
const ROW_WEATHER: usize = 1;
const ROW_TEMPERATURE: usize = 2;
const ROW_HUMIDITY: usize = 3;
const ROW_PRECIPITATION: usize = 4;
const ROW_WIND: usize = 5;

/// Weekly table row holding the chance of rain
const ROW_COR: usize = 3;

/// Days between extraction time and the first day of the weekly outlook
const WEEKLY_FIRST_DAY: i64 = 2;

/// Document sections holding forecast tables
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForecastSection {
    Today,
    Tomorrow,
    Weekly,
}

pub const FORECAST_SECTIONS: [ForecastSection; 3] = [
    ForecastSection::Today,
    ForecastSection::Tomorrow,
    ForecastSection::Weekly,
];

impl ForecastSection {
    /// Selector for the section in the portal page
    pub fn selector(&self) -> &'static str {
        match self {
            ForecastSection::Today => "div#yjw_pinpoint_today",
            ForecastSection::Tomorrow => "div#yjw_pinpoint_tomorrow",
            ForecastSection::Weekly => "div#yjw_week",
        }
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for ForecastSection {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ForecastSection::Today => write!(f, "今日"),
            ForecastSection::Tomorrow => write!(f, "明日"),
            ForecastSection::Weekly => write!(f, "週間予報"),
        }
    }
}

/// Populates the forecast table from a parsed portal page
///
/// Warnings are appended to the existing list, all forecast slots and weekly days
/// are overwritten.
///
/// # Arguments
///
/// * 'table' - the table to populate
/// * 'doc' - the parsed page
/// * 'now' - extraction time, base for the weekly dates
pub fn populate(table: &mut ForecastTable, doc: &Document, now: DateTime<Local>) -> Result<(), WeatherError> {
    apply_warnings(table, doc)?;

    for section in FORECAST_SECTIONS {
        let rows = match doc.section_rows(section.selector())? {
            Some(rows) => rows,
            None => {
                warn!("section {} ({}) not found in document", section, section.selector());
                Vec::new()
            }
        };
        apply_section(table, section, &Grid::reassemble(rows), now);
    }

    Ok(())
}

/// Maps the grid of one section into the forecast table
///
/// # Arguments
///
/// * 'table' - the table to write to
/// * 'section' - the section the grid was assembled from
/// * 'grid' - the reassembled section table
/// * 'now' - extraction time, base for the weekly dates
pub fn apply_section(table: &mut ForecastTable, section: ForecastSection, grid: &Grid, now: DateTime<Local>) {
    match section {
        ForecastSection::Today => apply_hourly(table, grid, 0),
        ForecastSection::Tomorrow => apply_hourly(table, grid, TOMORROW_OFFSET),
        ForecastSection::Weekly => apply_weekly(table, grid, now),
    }
}

/// Writes one day of three-hour forecasts starting at the given slot
fn apply_hourly(table: &mut ForecastTable, grid: &Grid, offset: usize) {
    for x in 0..SLOTS_PER_DAY {
        let fore = &mut table.fore_data[offset + x];
        fore.weather = grid.get(x, ROW_WEATHER).to_string();
        fore.temperature = parse_or_zero(grid.get(x, ROW_TEMPERATURE));
        fore.humidity = parse_or_zero(grid.get(x, ROW_HUMIDITY));
        fore.precipitation = parse_or_zero(grid.get(x, ROW_PRECIPITATION));

        let (direction, speed) = split_wind(grid.get(x, ROW_WIND));
        fore.direction = direction.to_string();
        fore.speed = parse_or_zero(speed);
    }
}

/// Writes the weekly outlook. Dates are derived from the extraction time, the date
/// column of the document is informational only.
fn apply_weekly(table: &mut ForecastTable, grid: &Grid, now: DateTime<Local>) {
    for x in 0..WEEKLY_DAYS {
        let day = &mut table.weekly[x];
        day.date = now + TimeDelta::hours(24 * (WEEKLY_FIRST_DAY + x as i64));
        day.weather = grid.get(x, ROW_WEATHER).to_string();
        day.temperature = parse_or_zero(grid.get(x, ROW_TEMPERATURE));
        day.cor = parse_or_zero(grid.get(x, ROW_COR));
    }
}

/// Splits a wind cell like "北 5" into direction and speed
fn split_wind(cell: &str) -> (&str, &str) {
    cell.split_once(' ').unwrap_or((cell, ""))
}

/// Parses the whole trimmed cell, coercing anything unparseable to zero.
/// Cells holding more than a number, e.g. "22 14" or "60 %", are unparseable.
///
/// # Arguments
///
/// * 's' - the cell text
pub fn parse_or_zero<T: FromStr + Default>(s: &str) -> T {
    let cell = s.trim();
    cell.parse::<T>().unwrap_or_else(|_| {
        if !cell.is_empty() {
            debug!("coercing unparseable value '{}' to zero", cell);
        }
        T::default()
    })
}
