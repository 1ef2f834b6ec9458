use serde::{Deserialize, Serialize};

use crate::layout::FigureLayout;
use crate::rendering::primitives::{Color, Shape};
use crate::rendering::settings::ChartSettings;
use crate::rendering::tables::{AspectMatrix, PositionTable};
use crate::rendering::RenderError;

/// Colours and text sizes the page writers need outside the wheel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageStyle {
    pub text: Color,
    pub header_fill: Color,
    pub cell_fill: Color,
    pub blocked_fill: Color,
    pub grid: Color,
    pub title_size: f32,
    pub subtitle_size: f32,
    pub table_text_size: f32,
}

impl PageStyle {
    pub fn from_settings(settings: &ChartSettings) -> Self {
        Self {
            text: Color::parse_or(&settings.color_text, Color::BLACK),
            header_fill: Color::parse_or(&settings.color_header, Color::WHITE),
            cell_fill: Color::parse_or(&settings.color_cell, Color::WHITE),
            blocked_fill: Color::parse_or(&settings.color_blocked, Color::WHITE),
            grid: Color::parse_or(&settings.color_grid, Color::BLACK),
            title_size: settings.title_size,
            subtitle_size: settings.subtitle_size,
            table_text_size: settings.table_text_size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    pub julian_day: f64,
    pub point_count: usize,
    pub aspect_count: usize,
}

/// A rendered chart page: wheel, aspect matrix and position table.
///
/// Backend-agnostic; see [`to_svg`](Self::to_svg) and
/// [`to_json`](Self::to_json).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartArtifact {
    pub width: f32,
    pub height: f32,
    pub background_color: Color,
    pub title: String,
    pub subtitle: String,
    pub layout: FigureLayout,
    pub style: PageStyle,
    /// Wheel shapes in paint order
    pub wheel: Vec<Shape>,
    pub aspect_matrix: AspectMatrix,
    pub position_table: PositionTable,
    pub metadata: ArtifactMetadata,
}

impl ChartArtifact {
    pub fn to_json(&self) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
