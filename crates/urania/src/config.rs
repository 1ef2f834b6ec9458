//! Chart configuration loaded from TOML.
//!
//! Every section is optional; a missing file section falls back to the
//! built-in registries (standard aspect table, default regions, default
//! render settings).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::aspects::{AspectDefinition, AspectTable};
use crate::ephemeris::HouseSystem;
use crate::rendering::ChartSettings;

/// Errors raised before any ephemeris query is made.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown timezone: {name}")]
    UnknownTimezone { name: String },
    #[error("Invalid house system: {system}. Valid systems: {valid:?}")]
    InvalidHouseSystem { system: String, valid: Vec<String> },
    #[error("Coordinates out of range: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },
    #[error("Invalid aspect table: {0}")]
    InvalidAspectTable(String),
    #[error("Unknown region: {region}. Known regions: {known:?}")]
    UnknownRegion { region: String, known: Vec<String> },
    #[error("Failed to read config file {path}: {message}")]
    Io { path: String, message: String },
    #[error("Invalid config TOML: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EphemerisConfig {
    /// Swiss Ephemeris data directory
    pub path: Option<PathBuf>,
}

impl EphemerisConfig {
    /// Configured path, else `SWISS_EPHEMERIS_PATH`, else `./ephe`.
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| {
            env::var("SWISS_EPHEMERIS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./ephe"))
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartDefaults {
    pub house_system: String,
    pub timezone: String,
}

impl Default for ChartDefaults {
    fn default() -> Self {
        Self {
            house_system: "placidus".to_string(),
            timezone: "America/Sao_Paulo".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub ephemeris: EphemerisConfig,
    pub chart: ChartDefaults,
    /// Region label -> IANA timezone
    pub regions: BTreeMap<String, String>,
    /// Replacement aspect table, in classification order
    pub aspects: Option<Vec<AspectDefinition>>,
    pub render: ChartSettings,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            ephemeris: EphemerisConfig::default(),
            chart: ChartDefaults::default(),
            regions: default_regions(),
            aspects: None,
            render: ChartSettings::default(),
        }
    }
}

fn default_regions() -> BTreeMap<String, String> {
    [
        ("Brasil", "America/Sao_Paulo"),
        ("EUA", "America/New_York"),
        ("Europa", "Europe/London"),
        ("Asia", "Asia/Tokyo"),
        ("Oceania", "Australia/Sydney"),
    ]
    .into_iter()
    .map(|(region, tz)| (region.to_string(), tz.to_string()))
    .collect()
}

impl ChartConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    /// Default house system from `[chart]`.
    pub fn house_system(&self) -> Result<HouseSystem, ConfigError> {
        self.chart.house_system.parse()
    }

    pub fn timezone_for_region(&self, region: &str) -> Result<&str, ConfigError> {
        self.regions
            .get(region)
            .map(String::as_str)
            .ok_or_else(|| ConfigError::UnknownRegion {
                region: region.to_string(),
                known: self.regions.keys().cloned().collect(),
            })
    }

    /// Validated aspect table: the configured one, or the standard table.
    pub fn aspect_table(&self) -> Result<AspectTable, ConfigError> {
        match &self.aspects {
            Some(definitions) => {
                let table = AspectTable::new(definitions.clone())?;
                for (a, b) in table.overlapping_bands() {
                    let defs = table.definitions();
                    log::warn!(
                        "aspect bands overlap: {}° ±{} and {}° ±{}; first listed wins",
                        defs[a].angle,
                        defs[a].tolerance,
                        defs[b].angle,
                        defs[b].tolerance
                    );
                }
                Ok(table)
            }
            None => Ok(AspectTable::standard().clone()),
        }
    }
}
