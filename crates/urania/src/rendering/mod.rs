pub mod artifact;
pub mod format;
pub mod primitives;
pub mod renderer;
pub mod settings;
pub mod svg;
pub mod tables;

pub use artifact::{ArtifactMetadata, ChartArtifact, PageStyle};
pub use format::{format_degrees, format_position};
pub use primitives::{Color, LineStyle, Point, Rect, Shape, Stroke, TextAnchor};
pub use renderer::{ChartRenderer, RenderError};
pub use settings::ChartSettings;
pub use tables::{AspectMatrix, MatrixCell, PositionRow, PositionTable};
