use std::fs;
use std::path::PathBuf;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;

#[derive(Deserialize)]
pub struct Location {
    pub city: String,
    #[serde(default)]
    pub area: Option<String>,
}

#[derive(Deserialize)]
pub struct Files {
    pub working_dir: PathBuf,
    #[serde(default = "default_output_file")]
    pub output_file: String,
    #[serde(default = "default_list_file")]
    pub list_file: String,
    #[serde(default = "default_title_file")]
    pub title_file: String,
    #[serde(default = "default_areas_file")]
    pub areas_file: String,
}

#[derive(Deserialize)]
pub struct General {
    pub log_path: String,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
    #[serde(default)]
    pub kana_output: bool,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Deserialize)]
pub struct Config {
    pub location: Location,
    pub files: Files,
    pub general: General,
}

fn default_output_file() -> String { "yjw.html".to_string() }
fn default_list_file() -> String { "list.html".to_string() }
fn default_title_file() -> String { "title.txt".to_string() }
fn default_areas_file() -> String { "areas.json".to_string() }
fn default_timeout_secs() -> u64 { 30 }

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {
    let toml = fs::read_to_string(config_path)?;
    parse_config(&toml)
}

/// Parses and validates configuration given as a toml string
///
/// # Arguments
///
/// * 'toml' - the configuration document
fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(toml)?;

    if config.location.city.trim().is_empty() {
        return Err(ConfigError::from("location.city must not be empty"));
    }
    if config.files.output_file.is_empty() {
        return Err(ConfigError::from("files.output_file must not be empty"));
    }

    Ok(config)
}
