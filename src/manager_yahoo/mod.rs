use std::collections::{BTreeMap, BTreeSet};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use chrono::{DateTime, Local};
use log::{info, warn};
use ureq::Agent;
use url::Url;
use crate::config::Files;
use crate::document::Document;
use crate::errors::WeatherError;
use crate::models::forecast_table::ForecastTable;
use crate::scratch::{is_title_cached, load_areas, save_areas, save_title};
use crate::sections::populate;

const SEARCH_URL: &str = "https://weather.yahoo.co.jp/weather/search/";

/// Selector path for the area links on a search result page
const AREA_LINKS: &str = "div > table > tbody > tr > td > a";

/// Struct for fetching and extracting forecasts from the Yahoo weather portal
///
/// The struct owns the resolved area label to url mapping, which accumulates over
/// calls and is persisted in the working directory.
pub struct Yahoo {
    agent: Agent,
    working_dir: PathBuf,
    output_file: PathBuf,
    list_file: PathBuf,
    title_file: PathBuf,
    areas_file: PathBuf,
    areas: BTreeMap<String, String>,
    stale: BTreeSet<String>,
}

impl Yahoo {
    /// Returns a Yahoo struct ready for resolving areas and fetching forecasts
    ///
    /// Any areas saved by a previous run are loaded. An unreadable or corrupt areas file
    /// is logged and ignored, the areas are then resolved from scratch.
    ///
    /// # Arguments
    ///
    /// * 'files' - working directory and scratch file names
    /// * 'timeout_secs' - global timeout for each http request
    pub fn new(files: &Files, timeout_secs: u64) -> Result<Yahoo, WeatherError> {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(timeout_secs)))
            .build();

        let agent = config.into();
        let working_dir = files.working_dir.clone();
        let areas_file = working_dir.join(&files.areas_file);
        let areas = match load_areas(&areas_file) {
            Ok(areas) => areas,
            Err(e) => {
                warn!("ignoring saved areas in {}: {}", areas_file.display(), e);
                BTreeMap::new()
            }
        };
        let stale = areas.keys().cloned().collect();

        Ok(Self {
            agent,
            output_file: working_dir.join(&files.output_file),
            list_file: working_dir.join(&files.list_file),
            title_file: working_dir.join(&files.title_file),
            areas_file,
            working_dir,
            areas,
            stale,
        })
    }

    /// Gets the areas resolved so far
    pub fn get_areas(&self) -> &BTreeMap<String, String> {
        &self.areas
    }

    /// Resolves forecast urls for all areas matching the given city name.
    ///
    /// The search page is only downloaded if the saved title of the last search page
    /// doesn't name the city. Only https links are kept. An area label resolved by this
    /// instance keeps its first url, whereas a label loaded from a previous run takes the
    /// url from the search page. The resolved areas are available through `get_areas`.
    ///
    /// # Arguments
    ///
    /// * 'city' - full or partial name of the city
    pub fn forecast_url_target_area(&mut self, city: &str) -> Result<(), WeatherError> {
        fs::create_dir_all(&self.working_dir)?;

        if is_title_cached(&self.title_file, city)? {
            info!("using cached search page for {}", city);
        } else {
            let url = search_url(city)?;
            info!("downloading search page {}", url);
            download(&self.agent, &self.list_file, url.as_str())?;
        }

        let doc = Document::from_file(&self.list_file)?;
        save_title(&self.title_file, &doc.title()?)?;

        self.add_areas(&doc)?;
        save_areas(&self.areas_file, &self.areas)?;

        Ok(())
    }

    /// Downloads the forecast page and extracts a new forecast table from it
    ///
    /// # Arguments
    ///
    /// * 'url' - url of the forecast page
    /// * 'label' - location name for the table
    pub fn get_weather_info(&self, url: &str, label: &str) -> Result<ForecastTable, WeatherError> {
        fs::create_dir_all(&self.working_dir)?;

        let now = Local::now();
        info!("downloading forecast page for {} from {}", label, url);
        download(&self.agent, &self.output_file, url)?;

        extract_page(&self.output_file, label, now)
    }

    /// Adds https area links from a search result page. First occurrence wins, except
    /// that a label still holding a url loaded from disk is refreshed once.
    ///
    /// # Arguments
    ///
    /// * 'doc' - the parsed search result page
    fn add_areas(&mut self, doc: &Document) -> Result<(), WeatherError> {
        for (label, href) in doc.links(AREA_LINKS)? {
            if !href.contains("https:") {
                continue;
            }
            if self.stale.remove(&label) {
                self.areas.insert(label, href);
            } else {
                self.areas.entry(label).or_insert(href);
            }
        }

        Ok(())
    }
}

/// Extracts a forecast table from a downloaded forecast page
///
/// # Arguments
///
/// * 'path' - path to the downloaded page
/// * 'label' - location name for the table
/// * 'now' - extraction time
pub fn extract_page(path: &Path, label: &str, now: DateTime<Local>) -> Result<ForecastTable, WeatherError> {
    let doc = Document::from_file(path)?;

    let mut table = ForecastTable::new(label);
    populate(&mut table, &doc, now)?;

    Ok(table)
}

/// Downloads the given url to a file
///
/// # Arguments
///
/// * 'agent' - http agent to use
/// * 'path' - file to write the response body to
/// * 'url' - url to fetch
pub fn download(agent: &Agent, path: &Path, url: &str) -> Result<(), WeatherError> {
    let mut response = agent.get(url).call()?;

    let mut file = File::create(path)?;
    io::copy(&mut response.body_mut().as_reader(), &mut file)?;

    Ok(())
}

/// Builds the search page url for a city name
///
/// # Arguments
///
/// * 'city' - the city name
fn search_url(city: &str) -> Result<Url, WeatherError> {
    Ok(Url::parse_with_params(SEARCH_URL, &[("p", city)])?)
}
