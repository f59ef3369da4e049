use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use crate::errors::WeatherError;

/// Checks whether a previously saved search page title already names the city,
/// i.e. if any line of the title file contains "<city>の"
///
/// A missing title file is simply not cached.
///
/// # Arguments
///
/// * 'title_file' - path to the saved title
/// * 'city' - the city searched for
pub fn is_title_cached(title_file: &Path, city: &str) -> Result<bool, WeatherError> {
    if !title_file.exists() {
        return Ok(false);
    }

    let needle = format!("{}の", city);
    let text = fs::read_to_string(title_file)?;

    Ok(text.lines().any(|l| l.contains(&needle)))
}

/// Saves the title of a downloaded search page
///
/// # Arguments
///
/// * 'title_file' - path to save to
/// * 'title' - inner markup of the page title
pub fn save_title(title_file: &Path, title: &str) -> Result<(), WeatherError> {
    fs::write(title_file, title)?;

    Ok(())
}

/// Saves resolved area labels and their forecast urls
///
/// # Arguments
///
/// * 'areas_file' - path to save to
/// * 'areas' - area label to url mapping
pub fn save_areas(areas_file: &Path, areas: &BTreeMap<String, String>) -> Result<(), WeatherError> {
    let json = serde_json::to_string_pretty(areas)?;
    fs::write(areas_file, json)?;

    Ok(())
}

/// Loads previously resolved areas, an empty mapping if none are saved
///
/// # Arguments
///
/// * 'areas_file' - path to load from
pub fn load_areas(areas_file: &Path) -> Result<BTreeMap<String, String>, WeatherError> {
    if areas_file.exists() {
        let json = fs::read_to_string(areas_file)?;
        Ok(serde_json::from_str(&json)?)
    } else {
        Ok(BTreeMap::new())
    }
}
