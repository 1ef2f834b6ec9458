#![allow(dead_code)]

use std::cell::Cell;

use chrono::{NaiveDate, NaiveDateTime};
use urania::chart::ChartRequest;
use urania::ephemeris::{Body, EphemerisError, EphemerisService, HouseData, HouseSystem};
use urania::zodiac::normalize_degrees;

const J2000: f64 = 2_451_545.0;

/// Smooth, deterministic stand-in for Swiss Ephemeris.
///
/// Bodies advance at fixed daily rates from fixed J2000 longitudes. Houses
/// are equal houses from an Ascendant that depends on sidereal-ish time,
/// longitude and latitude, so flipping the latitude sign moves every cusp.
pub struct FixtureEphemeris;

fn body_motion(body: Body) -> (f64, f64) {
    match body {
        Body::Sun => (280.46, 0.985_647),
        Body::Moon => (218.32, 13.176_396),
        Body::Mercury => (252.25, 4.092_339),
        Body::Venus => (181.98, 1.602_131),
        Body::Mars => (355.43, 0.524_039),
        Body::Jupiter => (34.35, 0.083_056),
        Body::Saturn => (50.08, 0.033_371),
        Body::Uranus => (314.06, 0.011_698),
        Body::Neptune => (304.35, 0.005_965),
        Body::Pluto => (238.93, 0.003_964),
        Body::Chiron => (251.0, 0.019_5),
        Body::Lilith => (263.4, 0.111_404),
        Body::NorthNode => (125.04, -0.052_954),
    }
}

impl EphemerisService for FixtureEphemeris {
    fn houses(
        &self,
        jd_ut: f64,
        latitude: f64,
        longitude: f64,
        _system: HouseSystem,
    ) -> Result<HouseData, EphemerisError> {
        let sidereal = 280.46 + 360.985_647 * (jd_ut - J2000);
        let ascendant = normalize_degrees(sidereal + longitude + 90.0 + latitude * 0.8);
        let midheaven = normalize_degrees(sidereal + longitude - latitude * 0.2);
        Ok(HouseData {
            cusps: (0..12)
                .map(|i| normalize_degrees(ascendant + i as f64 * 30.0))
                .collect(),
            ascendant,
            midheaven,
        })
    }

    fn body_longitude(&self, jd_ut: f64, body: Body) -> Result<f64, EphemerisError> {
        let (base, rate) = body_motion(body);
        Ok(normalize_degrees(base + rate * (jd_ut - J2000)))
    }
}

/// Records the latitude it was asked about.
#[derive(Default)]
pub struct RecordingEphemeris {
    pub latitude: Cell<Option<f64>>,
    pub house_calls: Cell<usize>,
}

impl EphemerisService for RecordingEphemeris {
    fn houses(
        &self,
        jd_ut: f64,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<HouseData, EphemerisError> {
        self.latitude.set(Some(latitude));
        self.house_calls.set(self.house_calls.get() + 1);
        FixtureEphemeris.houses(jd_ut, latitude, longitude, system)
    }

    fn body_longitude(&self, jd_ut: f64, body: Body) -> Result<f64, EphemerisError> {
        FixtureEphemeris.body_longitude(jd_ut, body)
    }
}

/// Cusps that wrap and step backwards, as some systems give near the poles.
pub const UNORDERED_CUSPS: [f64; 12] = [
    350.0, 10.0, 5.0, 40.0, 95.0, 90.0, 170.0, 190.0, 185.0, 220.0, 275.0, 300.0,
];

pub struct UnorderedCuspsEphemeris;

impl EphemerisService for UnorderedCuspsEphemeris {
    fn houses(
        &self,
        _jd_ut: f64,
        _latitude: f64,
        _longitude: f64,
        _system: HouseSystem,
    ) -> Result<HouseData, EphemerisError> {
        Ok(HouseData {
            cusps: UNORDERED_CUSPS.to_vec(),
            ascendant: 350.0,
            midheaven: 275.0,
        })
    }

    fn body_longitude(&self, jd_ut: f64, body: Body) -> Result<f64, EphemerisError> {
        FixtureEphemeris.body_longitude(jd_ut, body)
    }
}

/// Fails every body lookup.
pub struct FailingEphemeris;

impl EphemerisService for FailingEphemeris {
    fn houses(
        &self,
        jd_ut: f64,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<HouseData, EphemerisError> {
        FixtureEphemeris.houses(jd_ut, latitude, longitude, system)
    }

    fn body_longitude(&self, jd_ut: f64, body: Body) -> Result<f64, EphemerisError> {
        Err(EphemerisError::CalculationFailed {
            body: body.name().to_string(),
            jd_ut,
            message: "date outside ephemeris range".to_string(),
        })
    }
}

pub fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, 0)
        .unwrap()
}

/// 1990-06-15 14:30 in Sao Paulo, Placidus
pub fn sao_paulo_request() -> ChartRequest {
    ChartRequest {
        local_datetime: local(1990, 6, 15, 14, 30),
        latitude: -23.5,
        longitude: -46.6,
        timezone: "America/Sao_Paulo".to_string(),
        house_system: HouseSystem::Placidus,
    }
}
