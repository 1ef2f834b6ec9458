use crate::rendering::primitives::{Point, Rect};

/// Drawing angle in radians for a chart degree: `radians(360 - d + 90)`.
///
/// Read on polar axes that turn clockwise from 12 o'clock, this puts 0°
/// at 3 o'clock with the zodiac running counter-clockwise.
pub fn chart_angle(degree: f64) -> f64 {
    (360.0 - degree + 90.0).to_radians()
}

/// Convert polar coordinates (clockwise from 12 o'clock) to screen space
pub fn polar_to_cartesian(theta: f64, radius: f32, center: Point) -> Point {
    let r = radius as f64;
    Point {
        x: (center.x as f64 + r * theta.sin()) as f32,
        y: (center.y as f64 - r * theta.cos()) as f32,
    }
}

/// Maps wheel units onto a region of the figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelFrame {
    pub center: Point,
    /// Pixels per wheel unit
    pub scale: f32,
}

impl WheelFrame {
    /// Largest wheel of the given unit `extent` that fits in `bounds`.
    pub fn fit(bounds: Rect, extent: f32) -> Self {
        let half = bounds.width.min(bounds.height) / 2.0;
        Self {
            center: bounds.center(),
            scale: if extent > 0.0 { half / extent } else { half },
        }
    }

    /// Screen position of a chart degree at a radius in wheel units
    pub fn at(&self, degree: f64, radius: f32) -> Point {
        polar_to_cartesian(chart_angle(degree), radius * self.scale, self.center)
    }

    pub fn pixels(&self, radius: f32) -> f32 {
        radius * self.scale
    }
}
