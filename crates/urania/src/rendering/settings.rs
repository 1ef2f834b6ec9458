use serde::{Deserialize, Serialize};

/// Figure geometry, wheel radii and theme for a rendered chart.
///
/// Wheel radii are in wheel units: 1.0 is the end of the cusp lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    // Figure
    pub width: f32,
    pub height: f32,

    // Wheel radii
    pub sign_ring_radius: f32,
    pub sign_badge_radius: f32,
    pub point_ring_radius: f32,
    /// Inward step applied to each further point sharing a degree bucket
    pub point_stack_step: f32,
    pub cusp_label_radius: f32,
    pub aspect_ring_radius: f32,
    /// Outermost wheel extent, including labels
    pub wheel_extent: f32,

    // Theme colours
    pub color_background: String,
    pub color_text: String,
    pub color_cusps: String,
    pub color_sign_badge: String,
    pub color_header: String,
    pub color_cell: String,
    pub color_blocked: String,
    pub color_grid: String,

    // Stroke widths
    pub stroke_cusps: f32,
    pub stroke_aspects: f32,
    pub aspect_opacity: f32,

    // Font sizes
    pub title_size: f32,
    pub subtitle_size: f32,
    pub sign_glyph_size: f32,
    pub point_glyph_size: f32,
    pub cusp_label_size: f32,
    pub table_text_size: f32,

    // Position table headers
    pub point_header: String,
    pub position_header: String,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            width: 1400.0,
            height: 1200.0,

            sign_ring_radius: 0.84,
            sign_badge_radius: 0.045,
            point_ring_radius: 1.05,
            point_stack_step: 0.07,
            cusp_label_radius: 1.12,
            aspect_ring_radius: 1.0,
            wheel_extent: 1.25,

            color_background: "#FFFFFF".to_string(),
            color_text: "#000000".to_string(),
            color_cusps: "#000000".to_string(),
            color_sign_badge: "#FFF8CC".to_string(),
            color_header: "#F0F0F0".to_string(),
            color_cell: "#FFFFFF".to_string(),
            color_blocked: "#D3D3D3".to_string(),
            color_grid: "#000000".to_string(),

            stroke_cusps: 1.8,
            stroke_aspects: 1.0,
            aspect_opacity: 0.6,

            title_size: 22.0,
            subtitle_size: 19.0,
            sign_glyph_size: 30.0,
            point_glyph_size: 21.0,
            cusp_label_size: 11.0,
            table_text_size: 13.0,

            point_header: "Point".to_string(),
            position_header: "Position".to_string(),
        }
    }
}
