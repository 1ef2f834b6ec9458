use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::rendering::primitives::{Color, LineStyle};

/// One row of the aspect table: nominal angle, tolerance and how to draw it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectDefinition {
    /// Aspect type: "conjunction", "trine", etc.
    pub name: String,
    /// Nominal separation in degrees
    pub angle: f64,
    /// Allowed deviation from `angle`, inclusive
    pub tolerance: f64,
    /// Hex colour, e.g. "#FF0000"
    pub color: String,
    pub style: LineStyle,
    pub symbol: String,
}

impl AspectDefinition {
    pub fn matches(&self, separation: f64) -> bool {
        (separation - self.angle).abs() <= self.tolerance
    }

    pub fn line_color(&self) -> Color {
        Color::from_hex(&self.color).unwrap_or(Color::BLACK)
    }
}

fn definition(
    name: &str,
    angle: f64,
    tolerance: f64,
    color: &str,
    style: LineStyle,
    symbol: &str,
) -> AspectDefinition {
    AspectDefinition {
        name: name.to_string(),
        angle,
        tolerance,
        color: color.to_string(),
        style,
        symbol: symbol.to_string(),
    }
}

const RED: &str = "#FF0000";
const BLUE: &str = "#0000FF";

lazy_static::lazy_static! {
    static ref STANDARD_TABLE: AspectTable = AspectTable {
        definitions: vec![
            definition("conjunction", 0.0, 8.0, RED, LineStyle::Solid, "☌"),
            definition("semisextile", 30.0, 3.0, BLUE, LineStyle::Dotted, "≿"),
            definition("semisquare", 45.0, 3.0, RED, LineStyle::Dotted, "∕"),
            definition("sextile", 60.0, 5.0, BLUE, LineStyle::Solid, "*"),
            definition("square", 90.0, 5.0, RED, LineStyle::Solid, "□"),
            definition("trine", 120.0, 5.0, BLUE, LineStyle::Solid, "△"),
            definition("quincunx", 150.0, 3.0, RED, LineStyle::Dotted, "⨯"),
            definition("opposition", 180.0, 8.0, RED, LineStyle::Solid, "⊗"),
        ],
    };
}

/// Ordered aspect definitions. Classification is first-match-wins in this
/// order, so the order is part of the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectTable {
    definitions: Vec<AspectDefinition>,
}

impl AspectTable {
    /// 0°, 30°, 45°, 60°, 90°, 120°, 150°, 180°.
    pub fn standard() -> &'static AspectTable {
        &STANDARD_TABLE
    }

    /// Validate a custom table. Overlapping bands are allowed; see
    /// [`overlapping_bands`](Self::overlapping_bands).
    pub fn new(definitions: Vec<AspectDefinition>) -> Result<Self, ConfigError> {
        if definitions.is_empty() {
            return Err(ConfigError::InvalidAspectTable(
                "at least one aspect is required".to_string(),
            ));
        }
        for (i, def) in definitions.iter().enumerate() {
            if !def.angle.is_finite() || !(0.0..360.0).contains(&def.angle) {
                return Err(ConfigError::InvalidAspectTable(format!(
                    "{}: angle {} outside [0, 360)",
                    def.name, def.angle
                )));
            }
            if !def.tolerance.is_finite() || def.tolerance < 0.0 {
                return Err(ConfigError::InvalidAspectTable(format!(
                    "{}: tolerance {} must be a non-negative number",
                    def.name, def.tolerance
                )));
            }
            if def.symbol.is_empty() {
                return Err(ConfigError::InvalidAspectTable(format!(
                    "{}: symbol must not be empty",
                    def.name
                )));
            }
            if Color::from_hex(&def.color).is_none() {
                return Err(ConfigError::InvalidAspectTable(format!(
                    "{}: invalid colour {}",
                    def.name, def.color
                )));
            }
            if definitions[..i].iter().any(|other| other.angle == def.angle) {
                return Err(ConfigError::InvalidAspectTable(format!(
                    "duplicate aspect angle {}",
                    def.angle
                )));
            }
        }
        Ok(Self { definitions })
    }

    pub fn definitions(&self) -> &[AspectDefinition] {
        &self.definitions
    }

    /// First definition whose band contains `separation`.
    pub fn classify(&self, separation: f64) -> Option<&AspectDefinition> {
        self.definitions.iter().find(|def| def.matches(separation))
    }

    /// Index pairs of definitions whose tolerance bands intersect. Where
    /// bands overlap the earlier definition always wins.
    pub fn overlapping_bands(&self) -> Vec<(usize, usize)> {
        let mut overlaps = Vec::new();
        for i in 0..self.definitions.len() {
            for j in (i + 1)..self.definitions.len() {
                let a = &self.definitions[i];
                let b = &self.definitions[j];
                if (a.angle - b.angle).abs() <= a.tolerance + b.tolerance {
                    overlaps.push((i, j));
                }
            }
        }
        overlaps
    }
}

impl Default for AspectTable {
    fn default() -> Self {
        Self::standard().clone()
    }
}

/// A realized aspect between two chart points.
///
/// `first` precedes `second` in chart point order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectInstance {
    pub first: String,
    pub second: String,
    /// Nominal angle of the matched definition
    pub angle: f64,
    /// |lon(first) - lon(second)| mod 360
    pub separation: f64,
    pub definition: AspectDefinition,
}

impl AspectInstance {
    /// True when this aspect joins `a` and `b`, in either order.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.first == a && self.second == b) || (self.first == b && self.second == a)
    }

    /// Deviation from the nominal angle
    pub fn orb(&self) -> f64 {
        (self.separation - self.angle).abs()
    }
}
