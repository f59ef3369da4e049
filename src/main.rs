use std::collections::BTreeMap;
use anyhow::{anyhow, Context, Result};
use chrono::Local;
use clap::Parser;
use log::{error, info};
use crate::config::load_config;
use crate::initialization::init_logging;
use crate::manager_yahoo::Yahoo;

mod config;
mod document;
mod errors;
mod grid;
mod initialization;
mod kana;
mod manager_yahoo;
mod models;
mod scratch;
mod sections;
mod text;
mod time_buckets;
mod warnings;

/// Fetches and prints the Yahoo weather forecast for a location
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Path to the configuration file
    #[arg(long, env = "WEATHERINFO_CONFIG", default_value = "config.toml")]
    config: String,

    /// Print the forecast table as json
    #[arg(long)]
    json: bool,

    /// Also print the forecast this many hours from now
    #[arg(long)]
    hours: Option<u32>,

    /// Only list the areas resolved for the city
    #[arg(long)]
    list: bool,

    /// City to search for, overrides the configured city
    city: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args.config)
        .with_context(|| format!("loading config {}", args.config))?;
    init_logging(&config.general).context("initializing logging")?;

    let city = args.city.unwrap_or(config.location.city.clone());

    let mut yahoo = Yahoo::new(&config.files, config.general.timeout_secs)?;
    yahoo.forecast_url_target_area(&city)
        .with_context(|| format!("resolving areas for {}", city))?;
    let areas = yahoo.get_areas();

    if args.list {
        for (label, url) in areas {
            println!("{}: {}", label, url);
        }
        return Ok(());
    }

    let (label, url) = select_area(areas, &city, config.location.area.as_deref())
        .ok_or_else(|| anyhow!("no area found for {}", city))?;
    info!("selected area {} ({})", label, url);

    let mut table = yahoo.get_weather_info(&url, &label)
        .with_context(|| format!("fetching forecast for {}", label))?;
    if config.general.kana_output {
        table = table.to_kana();
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else {
        print!("{}", table);
    }

    if let Some(after) = args.hours {
        match table.hours_later(Local::now(), after) {
            Some((bucket, fore)) => println!("{} hours later ({}): {} {}C {}% {:.1}mm {} {}m/s",
                                             after, bucket, fore.weather, fore.temperature, fore.humidity,
                                             fore.precipitation, fore.direction, fore.speed),
            None => println!("{} hours later is outside the forecast window", after),
        }
    }

    Ok(())
}

/// Selects the area to fetch a forecast for: the configured area if resolved, else the
/// first area whose label contains the city, else the first area
///
/// # Arguments
///
/// * 'areas' - resolved area labels and urls
/// * 'city' - the city searched for
/// * 'preferred' - configured area label, if any
fn select_area(areas: &BTreeMap<String, String>, city: &str, preferred: Option<&str>) -> Option<(String, String)> {
    preferred
        .and_then(|p| areas.get_key_value(p))
        .or_else(|| areas.iter().find(|(label, _)| label.contains(city)))
        .or_else(|| areas.iter().next())
        .map(|(label, url)| (label.clone(), url.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn areas() -> BTreeMap<String, String> {
        BTreeMap::from([
            ("川崎市".to_string(), "https://example.jp/kawasaki".to_string()),
            ("横浜市".to_string(), "https://example.jp/yokohama".to_string()),
            ("横浜市鶴見区".to_string(), "https://example.jp/tsurumi".to_string()),
        ])
    }

    #[test]
    fn preferred_area_wins() {
        let (label, _) = select_area(&areas(), "横浜", Some("横浜市鶴見区")).unwrap();
        assert_eq!(label, "横浜市鶴見区");
    }

    #[test]
    fn falls_back_to_label_containing_city() {
        let (label, url) = select_area(&areas(), "横浜", Some("藤沢市")).unwrap();
        assert_eq!(label, "横浜市");
        assert_eq!(url, "https://example.jp/yokohama");
    }

    #[test]
    fn falls_back_to_first_area() {
        let (label, _) = select_area(&areas(), "相模", None).unwrap();
        assert_eq!(label, "川崎市");
        assert!(select_area(&BTreeMap::new(), "相模", None).is_none());
    }

    #[test]
    fn args_parse() {
        let args = Args::parse_from(["weatherinfo", "--config", "x.toml", "--hours", "5", "横浜"]);
        assert_eq!(args.config, "x.toml");
        assert_eq!(args.hours, Some(5));
        assert_eq!(args.city.as_deref(), Some("横浜"));
        assert!(!args.json);
    }
}
