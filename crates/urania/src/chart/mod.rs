pub mod calculator;
pub mod data;
pub mod points;

pub use calculator::{ChartCalculator, ChartRequest};
pub use data::{ChartResult, HOUSE_COUNT};
pub use points::{Angle, ChartPoint, DerivedPointRule, PointKind, PointTransform, DERIVED_POINTS};
