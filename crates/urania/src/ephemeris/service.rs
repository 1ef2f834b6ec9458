use crate::ephemeris::adapter::EphemerisError;
use crate::ephemeris::types::{Body, HouseData, HouseSystem};

/// Source of raw ecliptic positions.
///
/// Implementations must be deterministic for fixed inputs: the chart
/// calculator treats the service as a pure oracle and never retries.
/// Latitude is passed through exactly as received; southern latitudes are
/// negative.
pub trait EphemerisService {
    /// House cusps plus Ascendant/Midheaven for a moment and place.
    fn houses(
        &self,
        jd_ut: f64,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<HouseData, EphemerisError>;

    /// Ecliptic longitude of `body` in degrees.
    fn body_longitude(&self, jd_ut: f64, body: Body) -> Result<f64, EphemerisError>;
}

impl<T: EphemerisService + ?Sized> EphemerisService for &T {
    fn houses(
        &self,
        jd_ut: f64,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<HouseData, EphemerisError> {
        (**self).houses(jd_ut, latitude, longitude, system)
    }

    fn body_longitude(&self, jd_ut: f64, body: Body) -> Result<f64, EphemerisError> {
        (**self).body_longitude(jd_ut, body)
    }
}
