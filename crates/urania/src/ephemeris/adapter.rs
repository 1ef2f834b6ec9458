use crate::ephemeris::service::EphemerisService;
use crate::ephemeris::types::{Body, HouseData, HouseSystem};
use crate::zodiac::normalize_degrees;
use std::env;
use std::path::{Path, PathBuf};
use swisseph::swe::{calc_ut, houses_ex, set_ephe_path};
use swisseph::{AscMc, Cusp};
use thiserror::Error;

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Failed to calculate position for {body} at JD {jd_ut}: {message}")]
    CalculationFailed {
        body: String,
        jd_ut: f64,
        message: String,
    },
    #[error("House calculation failed at JD {jd_ut}: {message}")]
    HouseCalculationFailed { jd_ut: f64, message: String },
}

// Swiss Ephemeris object numbers
const PLANET_IDS: &[(Body, i32)] = &[
    (Body::Sun, 0),
    (Body::Moon, 1),
    (Body::Mercury, 2),
    (Body::Venus, 3),
    (Body::Mars, 4),
    (Body::Jupiter, 5),
    (Body::Saturn, 6),
    (Body::Uranus, 7),
    (Body::Neptune, 8),
    (Body::Pluto, 9),
    (Body::Chiron, 15),
    (Body::Lilith, 12),   // MEAN_APOG
    (Body::NorthNode, 11), // TRUE_NODE
];

// FLG_SWIEPH: read the Swiss Ephemeris data files
const FLG_SWIEPH: i32 = 2;

const DEFAULT_EPHEMERIS_PATH: &str = "./ephe";

/// Swiss Ephemeris backed [`EphemerisService`]. Tropical zodiac only.
pub struct SwissEphemerisAdapter {
    ephemeris_path: PathBuf,
    flags: i32,
}

impl SwissEphemerisAdapter {
    /// Create a new adapter with optional ephemeris path.
    ///
    /// Falls back to `SWISS_EPHEMERIS_PATH`, then `./ephe`. The path is
    /// handed to libswe, which reads every data file (`seas_*.se1` for
    /// Chiron included) from it.
    pub fn new(ephemeris_path: Option<PathBuf>) -> Result<Self, EphemerisError> {
        let path = ephemeris_path.unwrap_or_else(|| {
            env::var("SWISS_EPHEMERIS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_EPHEMERIS_PATH))
        });

        if !path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
            });
        }

        let path_str = path.to_string_lossy();
        if path_str.contains('\0') {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path contains a NUL byte.".to_string(),
            });
        }
        // libswe keeps the data path process-wide
        set_ephe_path(&path_str);
        log::info!("Swiss Ephemeris data path: {}", path.display());

        Ok(Self {
            ephemeris_path: path,
            flags: FLG_SWIEPH,
        })
    }

    pub fn ephemeris_path(&self) -> &Path {
        &self.ephemeris_path
    }
}

impl EphemerisService for SwissEphemerisAdapter {
    fn houses(
        &self,
        jd_ut: f64,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<HouseData, EphemerisError> {
        let (c, a) = houses_ex(jd_ut, self.flags, latitude, longitude, system.code() as i32);
        let cusps = Cusp::from_array(c);
        let ascmc = AscMc::from_array(a);

        let cusp_values = [
            cusps.first, cusps.second, cusps.third, cusps.fourth,
            cusps.fifth, cusps.sixth, cusps.seventh, cusps.eighth,
            cusps.ninth, cusps.tenth, cusps.eleventh, cusps.twelfth,
        ];

        let all_finite = cusp_values.iter().all(|c| c.is_finite())
            && ascmc.ascendant.is_finite()
            && ascmc.mc.is_finite();
        if !all_finite {
            return Err(EphemerisError::HouseCalculationFailed {
                jd_ut,
                message: format!(
                    "non-finite output for {} at latitude {}, longitude {}",
                    system, latitude, longitude
                ),
            });
        }

        Ok(HouseData {
            cusps: cusp_values.iter().map(|c| normalize_degrees(*c)).collect(),
            ascendant: normalize_degrees(ascmc.ascendant),
            midheaven: normalize_degrees(ascmc.mc),
        })
    }

    fn body_longitude(&self, jd_ut: f64, body: Body) -> Result<f64, EphemerisError> {
        let planet_code = PLANET_IDS
            .iter()
            .find(|(b, _)| *b == body)
            .map(|(_, code)| *code)
            .ok_or_else(|| EphemerisError::CalculationFailed {
                body: body.to_string(),
                jd_ut,
                message: format!("Unknown body: {}", body),
            })?;

        let result = calc_ut(jd_ut, planet_code as u32, self.flags as u32).map_err(|e| {
            EphemerisError::CalculationFailed {
                body: body.to_string(),
                jd_ut,
                message: format!("Swiss Ephemeris error: {}", e),
            }
        })?;

        let longitude = result.out[0];
        if !longitude.is_finite() {
            return Err(EphemerisError::CalculationFailed {
                body: body.to_string(),
                jd_ut,
                message: "non-finite longitude".to_string(),
            });
        }
        Ok(normalize_degrees(longitude))
    }
}
