//! Runtime configuration read from environment variables.
//!
//! | Variable                | Default  | Meaning                               |
//! |-------------------------|----------|---------------------------------------|
//! | `RAILMADAD_LOG`         | `info`   | tracing filter directive              |
//! | `RAILMADAD_LOG_FORMAT`  | `pretty` | `pretty` or `json`                    |
//! | `RAILMADAD_DEPARTMENTS` | unset    | JSON file replacing the built-in catalog |

use std::env;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::info;

use crate::brain::catalog::{self, Department};
use crate::error::{AppError, Result};

pub const LOG_FILTER_VAR: &str = "RAILMADAD_LOG";
pub const LOG_FORMAT_VAR: &str = "RAILMADAD_LOG_FORMAT";
pub const DEPARTMENTS_VAR: &str = "RAILMADAD_DEPARTMENTS";

const DEFAULT_LOG_FILTER: &str = "info";

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "{} must be 'pretty' or 'json', got '{}'",
                LOG_FORMAT_VAR, other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_filter: String,
    pub log_format: LogFormat,
    /// Custom department catalog; the built-in one is used when unset
    pub departments_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::Pretty,
            departments_path: None,
        }
    }
}

impl AppConfig {
    /// Build the configuration from the process environment.
    ///
    /// Empty variables are treated as unset.
    pub fn from_env() -> Result<Self> {
        let log_filter = non_empty_var(LOG_FILTER_VAR)
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let log_format = match non_empty_var(LOG_FORMAT_VAR) {
            Some(value) => value.parse()?,
            None => LogFormat::default(),
        };

        let departments_path = non_empty_var(DEPARTMENTS_VAR).map(PathBuf::from);

        Ok(Self {
            log_filter,
            log_format,
            departments_path,
        })
    }

    /// Department catalog to route complaints to
    pub fn load_departments(&self) -> Result<Vec<Department>> {
        let Some(path) = &self.departments_path else {
            return Ok(catalog::default_departments());
        };

        let raw = fs::read_to_string(path)?;
        let departments: Vec<Department> = serde_json::from_str(&raw)?;

        if departments.is_empty() {
            return Err(AppError::Config(format!(
                "department catalog {:?} is empty",
                path
            )));
        }

        info!(
            "Loaded {} departments from {:?}",
            departments.len(),
            path
        );
        Ok(departments)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
