use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

/// Bodies requested from the ephemeris, in canonical chart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Chiron,
    Lilith,
    NorthNode,
}

/// Standard planets, then Chiron and Lilith, then the lunar node.
pub const TRACKED_BODIES: [Body; 13] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
    Body::Chiron,
    Body::Lilith,
    Body::NorthNode,
];

impl Body {
    /// Glyph used as the point name in a chart.
    pub fn symbol(self) -> &'static str {
        match self {
            Body::Sun => "☉",
            Body::Moon => "☽",
            Body::Mercury => "☿",
            Body::Venus => "♀",
            Body::Mars => "♂",
            Body::Jupiter => "♃",
            Body::Saturn => "♄",
            Body::Uranus => "♅",
            Body::Neptune => "♆",
            Body::Pluto => "♇",
            Body::Chiron => "⚷",
            Body::Lilith => "⚸",
            Body::NorthNode => "☊",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Body::Sun => "sun",
            Body::Moon => "moon",
            Body::Mercury => "mercury",
            Body::Venus => "venus",
            Body::Mars => "mars",
            Body::Jupiter => "jupiter",
            Body::Saturn => "saturn",
            Body::Uranus => "uranus",
            Body::Neptune => "neptune",
            Body::Pluto => "pluto",
            Body::Chiron => "chiron",
            Body::Lilith => "lilith",
            Body::NorthNode => "north_node",
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    Placidus,
    Koch,
    Campanus,
    Equal,
    WholeSign,
    Regiomontanus,
    Alcabitius,
    Morinus,
}

/// House system mapping: variant, display name, single-character code
const HOUSE_SYSTEMS: &[(HouseSystem, &str, u8)] = &[
    (HouseSystem::Placidus, "Placidus", b'P'),
    (HouseSystem::Koch, "Koch", b'K'),
    (HouseSystem::Campanus, "Campanus", b'C'),
    (HouseSystem::Equal, "Equal", b'E'),
    (HouseSystem::WholeSign, "Whole Sign", b'W'),
    (HouseSystem::Regiomontanus, "Regiomontanus", b'R'),
    (HouseSystem::Alcabitius, "Alcabitius", b'A'),
    (HouseSystem::Morinus, "Morinus", b'M'),
];

impl HouseSystem {
    pub fn all() -> impl Iterator<Item = HouseSystem> {
        HOUSE_SYSTEMS.iter().map(|(system, _, _)| *system)
    }

    /// Single-character code understood by the ephemeris.
    pub fn code(self) -> u8 {
        HOUSE_SYSTEMS
            .iter()
            .find(|(system, _, _)| *system == self)
            .map(|(_, _, code)| *code)
            .unwrap_or(b'P')
    }

    pub fn display_name(self) -> &'static str {
        HOUSE_SYSTEMS
            .iter()
            .find(|(system, _, _)| *system == self)
            .map(|(_, name, _)| *name)
            .unwrap_or("Placidus")
    }

    pub fn from_code(code: char) -> Result<Self, ConfigError> {
        HOUSE_SYSTEMS
            .iter()
            .find(|(_, _, c)| code.is_ascii() && *c == code.to_ascii_uppercase() as u8)
            .map(|(system, _, _)| *system)
            .ok_or_else(|| invalid_house_system(&code.to_string()))
    }
}

impl FromStr for HouseSystem {
    type Err = ConfigError;

    /// Accepts "Whole Sign", "whole_sign", "whole-sign" or a bare code like "W".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(code), None) = (chars.next(), chars.next()) {
            return Self::from_code(code);
        }

        let wanted = normalize_name(trimmed);
        HOUSE_SYSTEMS
            .iter()
            .find(|(_, name, _)| normalize_name(name) == wanted)
            .map(|(system, _, _)| *system)
            .ok_or_else(|| invalid_house_system(s))
    }
}

impl fmt::Display for HouseSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

fn invalid_house_system(system: &str) -> ConfigError {
    ConfigError::InvalidHouseSystem {
        system: system.to_string(),
        valid: HOUSE_SYSTEMS
            .iter()
            .map(|(_, name, _)| name.to_string())
            .collect(),
    }
}

/// House cusps and angles returned by the ephemeris
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseData {
    /// Cusp longitudes for houses 1..12, index 0 = first house
    pub cusps: Vec<f64>,
    pub ascendant: f64,
    pub midheaven: f64,
}
