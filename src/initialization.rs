use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::config::General;
use crate::errors::LoggingError;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} - {m}{n}";

/// Initializes the log4rs backend for the log facade
///
/// Logs always go to the configured log file, and additionally to stdout
/// if so configured.
///
/// # Arguments
///
/// * 'general' - general configuration holding log path, level and stdout flag
pub fn init_logging(general: &General) -> Result<(), LoggingError> {
    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(&general.log_path)?;

    let mut builder = LogConfig::builder()
        .appender(Appender::builder().build("file", Box::new(file)));
    let mut root = Root::builder().appender("file");

    if general.log_to_stdout {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();
        builder = builder.appender(Appender::builder().build("stdout", Box::new(stdout)));
        root = root.appender("stdout");
    }

    let config = builder
        .build(root.build(general.log_level))
        .map_err(|e| LoggingError::Config(e.to_string()))?;
    log4rs::init_config(config)?;

    log::info!("weatherinfo version: {}", env!("CARGO_PKG_VERSION"));

    Ok(())
}
