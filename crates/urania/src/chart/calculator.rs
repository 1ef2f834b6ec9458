use chrono::NaiveDateTime;

use crate::chart::data::{ChartResult, HOUSE_COUNT};
use crate::chart::points::{Angle, ChartPoint, DERIVED_POINTS};
use crate::config::ConfigError;
use crate::ephemeris::{Body, EphemerisError, EphemerisService, HouseSystem, TRACKED_BODIES};
use crate::error::ChartError;
use crate::time::{julian_day, localize, resolve_timezone};
use crate::zodiac::normalize_degrees;

/// Inputs for one chart: naive local time plus where and how to cast it.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRequest {
    pub local_datetime: NaiveDateTime,
    /// Degrees, negative south of the equator
    pub latitude: f64,
    /// Degrees, negative west of Greenwich
    pub longitude: f64,
    pub timezone: String,
    pub house_system: HouseSystem,
}

/// Turns a [`ChartRequest`] into a [`ChartResult`] using an ephemeris.
pub struct ChartCalculator<E> {
    ephemeris: E,
    bodies: Vec<Body>,
}

impl<E: EphemerisService> ChartCalculator<E> {
    /// Calculator tracking every body in [`TRACKED_BODIES`].
    pub fn new(ephemeris: E) -> Self {
        Self::with_bodies(ephemeris, TRACKED_BODIES.to_vec())
    }

    pub fn with_bodies(ephemeris: E, bodies: Vec<Body>) -> Self {
        Self { ephemeris, bodies }
    }

    pub fn ephemeris(&self) -> &E {
        &self.ephemeris
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Positional form of [`compute_chart`](Self::compute_chart).
    pub fn compute(
        &self,
        local_datetime: NaiveDateTime,
        latitude: f64,
        longitude: f64,
        timezone: &str,
        house_system: HouseSystem,
    ) -> Result<ChartResult, ChartError> {
        self.compute_chart(&ChartRequest {
            local_datetime,
            latitude,
            longitude,
            timezone: timezone.to_string(),
            house_system,
        })
    }

    /// Compute houses, body positions, derived points and angles.
    ///
    /// Configuration problems are reported before the ephemeris is queried.
    /// The latitude is forwarded exactly as given.
    pub fn compute_chart(&self, request: &ChartRequest) -> Result<ChartResult, ChartError> {
        let latitude = request.latitude;
        let longitude = request.longitude;
        let house_system = request.house_system;

        validate_coordinates(latitude, longitude)?;
        let tz = resolve_timezone(&request.timezone)?;

        let utc = localize(request.local_datetime, tz);
        let jd_ut = julian_day(utc);

        log::debug!("JD: {}", jd_ut);
        log::debug!("Date UTC: {}", utc);
        log::debug!("Latitude: {}, Longitude: {}", latitude, longitude);
        log::debug!("House System: {} ({})", house_system, house_system.code() as char);

        let computation = |source: EphemerisError| ChartError::Computation {
            jd_ut,
            latitude,
            longitude,
            source,
        };

        let houses = self
            .ephemeris
            .houses(jd_ut, latitude, longitude, house_system)
            .map_err(computation)?;
        if houses.cusps.len() != HOUSE_COUNT {
            return Err(computation(EphemerisError::HouseCalculationFailed {
                jd_ut,
                message: format!(
                    "expected {} house cusps, got {}",
                    HOUSE_COUNT,
                    houses.cusps.len()
                ),
            }));
        }

        let mut points = Vec::with_capacity(self.bodies.len() + DERIVED_POINTS.len() + 2);
        for &body in &self.bodies {
            let lon = self
                .ephemeris
                .body_longitude(jd_ut, body)
                .map_err(computation)?;
            points.push(ChartPoint::body(body, normalize_degrees(lon)));
        }

        for rule in DERIVED_POINTS {
            let source = points
                .iter()
                .find(|p| p.name == rule.source)
                .map(|p| p.longitude);
            match source {
                Some(lon) => points.push(ChartPoint::derived(rule.name, rule.transform.apply(lon))),
                None => log::debug!("skipping {}: {} not tracked", rule.name, rule.source),
            }
        }

        points.push(ChartPoint::angle(
            Angle::Ascendant,
            normalize_degrees(houses.ascendant),
        ));
        points.push(ChartPoint::angle(
            Angle::Midheaven,
            normalize_degrees(houses.midheaven),
        ));

        Ok(ChartResult {
            house_cusps: houses.cusps.iter().map(|c| normalize_degrees(*c)).collect(),
            points,
            julian_day: jd_ut,
        })
    }
}

fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), ConfigError> {
    let valid = latitude.is_finite()
        && longitude.is_finite()
        && (-90.0..=90.0).contains(&latitude)
        && (-180.0..=180.0).contains(&longitude);
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidCoordinates {
            latitude,
            longitude,
        })
    }
}
