pub mod calculator;
pub mod types;

pub use calculator::{compute_aspects, find_aspect, AspectCalculator};
pub use types::{AspectDefinition, AspectInstance, AspectTable};
