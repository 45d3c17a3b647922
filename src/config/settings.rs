//! Studio settings loading from config.toml
//!
//! This module provides functionality to load studio-wide defaults from a TOML
//! configuration file: the display currency and the standard workflow phases
//! used to seed each new project. A missing config file is not an error; the
//! built-in defaults cover a fresh install. A file that exists but fails to
//! parse is reported as a configuration error.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// Display currency code for new projects (e.g., "XAF", "EUR", "USD")
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Standard workflow phases used to seed new projects, in order
    #[serde(default)]
    pub phases: Vec<PhaseTemplate>,
}

/// Configuration for a single workflow phase template
#[derive(Debug, Deserialize, Clone)]
pub struct PhaseTemplate {
    /// Name of the phase
    pub name: String,
    /// What the phase covers, if described
    pub description: Option<String>,
}

fn default_currency() -> String {
    "XAF".to_string()
}

impl Default for Settings {
    /// Built-in defaults matching the studio's standard engagement workflow.
    fn default() -> Self {
        let phase = |name: &str, description: &str| PhaseTemplate {
            name: name.to_string(),
            description: Some(description.to_string()),
        };

        Self {
            currency: default_currency(),
            phases: vec![
                phase("Brief", "Client interview and needs assessment"),
                phase("Technical visit", "On-site measurements and constraints survey"),
                phase("Concept design", "Moodboards, layouts, and concept renders"),
                phase("Execution plans", "Detailed plans, material and furniture schedules"),
            ],
        }
    }
}

/// Loads studio settings from a TOML file
///
/// # Arguments
/// * `path` - Path to the config.toml file
///
/// # Returns
/// * `Ok(Settings)` - Successfully parsed configuration
/// * `Err(Error)` - Failed to read or parse the configuration file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads studio settings from the default location (./config.toml), falling
/// back to built-in defaults when the file does not exist.
///
/// # Errors
/// Returns an error only when the file exists but cannot be read or parsed.
pub fn load_or_default() -> Result<Settings> {
    if Path::new("config.toml").exists() {
        load_settings("config.toml")
    } else {
        Ok(Settings::default())
    }
}
