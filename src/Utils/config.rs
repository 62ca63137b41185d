use crate::errors::{ConfigError, ValidationError};
use crate::plotter::domain::DomainSpec;
use crate::plotter::evaluator::NonFinitePolicy;
use crate::plotter::render::FigureOptions;
use crate::plotter::session::PlotSession;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// debug, info, warn, error or off
    pub level: String,
    pub console: bool,
    /// `None` means no file sink
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            console: true,
            file: None,
        }
    }
}

impl LogConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.level
            .trim()
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::LogLevel(self.level.clone()))
    }
}

/// ```toml
/// variable = "x"
/// non_finite = "strict"
///
/// [domain]
/// x_min = -20.0
/// x_max = 20.0
/// dx = 0.01
///
/// [figure]
/// title = "Function graphs"
/// need_legend = true
///
/// [log]
/// level = "debug"
/// file = "plot.log"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotterConfig {
    pub variable: String,
    pub non_finite: NonFinitePolicy,
    pub domain: DomainSpec,
    pub figure: FigureOptions,
    pub log: LogConfig,
}

impl Default for PlotterConfig {
    fn default() -> Self {
        Self {
            variable: "x".to_string(),
            non_finite: NonFinitePolicy::default(),
            domain: DomainSpec::default(),
            figure: FigureOptions::default(),
            log: LogConfig::default(),
        }
    }
}

impl PlotterConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: PlotterConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.domain.validate()?;
        if self.variable.trim().is_empty() {
            return Err(ValidationError::EmptyVariable.into());
        }
        self.log.level_filter()?;
        Ok(())
    }

    pub fn session(&self) -> PlotSession {
        PlotSession::new(
            self.domain,
            self.variable.trim(),
            self.non_finite,
            self.figure.clone(),
        )
    }
}
