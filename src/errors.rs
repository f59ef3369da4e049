use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("ConfigError::Io: {0}")]
    Io(#[from] std::io::Error),
    #[error("ConfigError::Toml: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("ConfigError::Invalid: {0}")]
    Invalid(String),
}
impl From<&str> for ConfigError {
    fn from(e: &str) -> Self { ConfigError::Invalid(e.to_string()) }
}

/// Errors from fetching, storing and querying a weather portal page
#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("WeatherError::Io: {0}")]
    Io(#[from] std::io::Error),
    #[error("WeatherError::Http: {0}")]
    Http(#[from] ureq::Error),
    #[error("WeatherError::Document: {0}")]
    Document(String),
    #[error("WeatherError::Json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("WeatherError::Url: {0}")]
    Url(#[from] url::ParseError),
}

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("LoggingError::Io: {0}")]
    Io(#[from] std::io::Error),
    #[error("LoggingError::Config: {0}")]
    Config(String),
    #[error("LoggingError::SetLogger: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}
