use crate::Utils::config::LogConfig;
use crate::errors::ConfigError;
use chrono::Local;
use simplelog::*;
use std::fs::File;
use std::path::PathBuf;

/// `log_<date>_<time>.txt` in the working directory
pub fn default_log_file_name() -> PathBuf {
    let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
    PathBuf::from(format!("log_{}.txt", date_and_time))
}

/// Terminal and/or file sinks at the configured level. Returns `false` when there is
/// nothing to install or a logger was already installed.
pub fn init_logger(config: &LogConfig) -> Result<bool, ConfigError> {
    let level = config.level_filter()?;

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if config.console {
        loggers.push(TermLogger::new(
            level,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if let Some(path) = &config.file {
        let file = File::create(path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        loggers.push(WriteLogger::new(level, Config::default(), file));
    }

    if loggers.is_empty() {
        return Ok(false);
    }
    Ok(CombinedLogger::init(loggers).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_name() {
        let name = default_log_file_name();
        let name = name.to_string_lossy();
        assert!(name.starts_with("log_"));
        assert!(name.ends_with(".txt"));
    }

    #[test]
    fn test_nothing_to_install() {
        let config = LogConfig {
            console: false,
            file: None,
            ..LogConfig::default()
        };
        assert!(!init_logger(&config).unwrap());
    }

    #[test]
    fn test_bad_level() {
        let config = LogConfig {
            level: "chatty".to_string(),
            ..LogConfig::default()
        };
        assert!(matches!(init_logger(&config), Err(ConfigError::LogLevel(_))));
    }
}
