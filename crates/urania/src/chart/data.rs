use serde::{Deserialize, Serialize};

use crate::chart::points::{Angle, ChartPoint, PointKind};

/// Number of house cusps in every chart.
pub const HOUSE_COUNT: usize = 12;

/// Computed chart: house cusps, ordered points and the Julian Day used.
///
/// Point order is part of the contract: bodies in ephemeris order, derived
/// points, then Ascendant and Midheaven. Tables and label stacking follow it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartResult {
    /// Cusp longitudes, index 0 = first house
    pub house_cusps: Vec<f64>,
    pub points: Vec<ChartPoint>,
    pub julian_day: f64,
}

impl ChartResult {
    pub fn point(&self, name: &str) -> Option<&ChartPoint> {
        self.points.iter().find(|p| p.name == name)
    }

    pub fn longitude(&self, name: &str) -> Option<f64> {
        self.point(name).map(|p| p.longitude)
    }

    pub fn point_names(&self) -> impl Iterator<Item = &str> {
        self.points.iter().map(|p| p.name.as_str())
    }

    pub fn angle(&self, angle: Angle) -> Option<f64> {
        self.points
            .iter()
            .find(|p| p.kind == PointKind::Angle { angle })
            .map(|p| p.longitude)
    }

    pub fn ascendant(&self) -> Option<f64> {
        self.angle(Angle::Ascendant)
    }

    pub fn midheaven(&self) -> Option<f64> {
        self.angle(Angle::Midheaven)
    }
}
