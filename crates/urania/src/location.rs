//! Place lookup seam and the caller-side hemisphere correction.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::config::ConfigError;
use crate::ephemeris::GeoLocation;

/// Resolves a place name to coordinates.
pub trait LocationResolver {
    fn resolve(&self, place: &str) -> Option<GeoLocation>;
}

/// In-memory gazetteer; names match ignoring case and accents.
#[derive(Debug, Clone, Default)]
pub struct StaticLocations {
    places: HashMap<String, GeoLocation>,
}

impl StaticLocations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, place: &str, location: GeoLocation) {
        self.places.insert(normalize(place), location);
    }

    pub fn with(mut self, place: &str, lat: f64, lon: f64) -> Self {
        self.insert(place, GeoLocation { lat, lon });
        self
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

impl LocationResolver for StaticLocations {
    fn resolve(&self, place: &str) -> Option<GeoLocation> {
        self.places.get(&normalize(place)).copied()
    }
}

/// Lowercase, decompose (NFD) and drop combining marks: "São" -> "sao".
fn normalize(place: &str) -> String {
    place
        .trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Hemisphere chosen by the user alongside an unsigned latitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    /// Force the latitude's sign to match the hemisphere.
    ///
    /// Front ends apply this before building a request; chart computation
    /// takes the latitude sign as given.
    pub fn apply(self, latitude: f64) -> f64 {
        match self {
            Hemisphere::North => latitude.abs(),
            Hemisphere::South => -latitude.abs(),
        }
    }
}

impl FromStr for Hemisphere {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "n" | "north" | "norte" => Ok(Hemisphere::North),
            "s" | "south" | "sul" => Ok(Hemisphere::South),
            _ => Err(ConfigError::Parse(format!("unknown hemisphere: {}", s))),
        }
    }
}
