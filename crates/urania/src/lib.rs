//! Natal chart computation, aspect analysis and chart page rendering.
//!
//! The pipeline runs [`ChartCalculator`] against an [`EphemerisService`],
//! classifies aspects with [`AspectCalculator`] and draws the result with
//! [`ChartRenderer`]. [`generate_chart`] chains the three.

pub mod aspects;
pub mod chart;
pub mod config;
pub mod ephemeris;
pub mod error;
pub mod layout;
pub mod location;
pub mod rendering;
pub mod time;
pub mod zodiac;

pub use aspects::{
    compute_aspects, find_aspect, AspectCalculator, AspectDefinition, AspectInstance, AspectTable,
};
pub use chart::{ChartCalculator, ChartPoint, ChartRequest, ChartResult};
pub use config::{ChartConfig, ConfigError};
pub use ephemeris::{
    Body, EphemerisError, EphemerisService, GeoLocation, HouseData, HouseSystem,
    SwissEphemerisAdapter,
};
pub use error::ChartError;
pub use location::{Hemisphere, LocationResolver, StaticLocations};
pub use rendering::{ChartArtifact, ChartRenderer, ChartSettings, RenderError};

/// Compute, analyse and render one chart.
///
/// The aspect table comes from `config` (validated, before any ephemeris
/// query); render settings from its `[render]` section. The page title is
/// `subject`, the subtitle the local date and time of the request.
pub fn generate_chart<E: EphemerisService>(
    service: E,
    request: &ChartRequest,
    subject: &str,
    config: &ChartConfig,
) -> Result<(ChartResult, Vec<AspectInstance>, ChartArtifact), ChartError> {
    let table = config.aspect_table()?;

    let calculator = ChartCalculator::new(service);
    let chart = calculator.compute_chart(request)?;

    let aspects = AspectCalculator::with_table(table).compute_aspects(&chart.points);

    let date_label = request.local_datetime.format("%d/%m/%Y %H:%M").to_string();
    let artifact = ChartRenderer::with_settings(config.render.clone()).render(
        &chart,
        &aspects,
        subject,
        &date_label,
    )?;

    Ok((chart, aspects, artifact))
}
