use serde::{Deserialize, Serialize};

use crate::ephemeris::Body;
use crate::zodiac::normalize_degrees;

/// Chart angles taken from the house calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Angle {
    Ascendant,
    Midheaven,
}

impl Angle {
    pub fn symbol(self) -> &'static str {
        match self {
            Angle::Ascendant => "ASC",
            Angle::Midheaven => "MC",
        }
    }
}

/// Where a point's longitude came from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointKind {
    Body { body: Body },
    Derived,
    Angle { angle: Angle },
}

/// A named ecliptic position. Names are unique within a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    /// Ecliptic longitude in degrees, [0, 360)
    pub longitude: f64,
    pub kind: PointKind,
}

impl ChartPoint {
    pub fn body(body: Body, longitude: f64) -> Self {
        Self {
            name: body.symbol().to_string(),
            longitude,
            kind: PointKind::Body { body },
        }
    }

    pub fn angle(angle: Angle, longitude: f64) -> Self {
        Self {
            name: angle.symbol().to_string(),
            longitude,
            kind: PointKind::Angle { angle },
        }
    }

    pub fn derived(name: &str, longitude: f64) -> Self {
        Self {
            name: name.to_string(),
            longitude,
            kind: PointKind::Derived,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointTransform {
    /// The point 180° across the zodiac
    Opposite,
    Offset(f64),
}

impl PointTransform {
    pub fn apply(self, longitude: f64) -> f64 {
        match self {
            PointTransform::Opposite => (longitude + 180.0) % 360.0,
            PointTransform::Offset(degrees) => normalize_degrees(longitude + degrees),
        }
    }
}

/// A point computed from another point already in the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedPointRule {
    pub name: &'static str,
    pub source: &'static str,
    pub transform: PointTransform,
}

/// Derived points, applied in order after all bodies are placed.
pub const DERIVED_POINTS: &[DerivedPointRule] = &[DerivedPointRule {
    name: "☋",
    source: "☊",
    transform: PointTransform::Opposite,
}];
