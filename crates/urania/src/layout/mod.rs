pub mod regions;
pub mod stacking;
pub mod wheel;

pub use regions::FigureLayout;
pub use stacking::{stack_points, PlacedPoint};
pub use wheel::{chart_angle, polar_to_cartesian, WheelFrame};
