use thiserror::Error;

use crate::config::ConfigError;
use crate::ephemeris::EphemerisError;
use crate::rendering::RenderError;

/// Errors surfaced by the chart pipeline. None are retried.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),
    #[error("Ephemeris computation failed for JD {jd_ut} at latitude {latitude}, longitude {longitude}: {source}")]
    Computation {
        jd_ut: f64,
        latitude: f64,
        longitude: f64,
        #[source]
        source: EphemerisError,
    },
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}
