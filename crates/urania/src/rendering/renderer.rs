use thiserror::Error;

use crate::aspects::AspectInstance;
use crate::chart::{ChartPoint, ChartResult, HOUSE_COUNT};
use crate::layout::{stack_points, FigureLayout, WheelFrame};
use crate::rendering::artifact::{ArtifactMetadata, ChartArtifact, PageStyle};
use crate::rendering::format::format_degrees;
use crate::rendering::primitives::{Color, Shape, Stroke, TextAnchor};
use crate::rendering::settings::ChartSettings;
use crate::rendering::tables::{AspectMatrix, PositionTable};
use crate::zodiac::SIGNS;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Expected {expected} house cusps, found {found}", expected = HOUSE_COUNT)]
    MissingHouseCusps { found: usize },
    #[error("Aspect references unknown point: {name}")]
    UnknownPoint { name: String },
    #[error("Invalid longitude for {name}: {value}")]
    InvalidLongitude { name: String, value: f64 },
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Turns a computed chart into a [`ChartArtifact`].
pub struct ChartRenderer {
    settings: ChartSettings,
}

impl ChartRenderer {
    pub fn new() -> Self {
        Self::with_settings(ChartSettings::default())
    }

    pub fn with_settings(settings: ChartSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ChartSettings {
        &self.settings
    }

    /// Render the wheel, aspect matrix and position table.
    ///
    /// Missing or malformed cusps and aspects naming absent points are
    /// errors; nothing is substituted. An empty point list renders an
    /// empty wheel.
    pub fn render(
        &self,
        chart: &ChartResult,
        aspects: &[AspectInstance],
        subject: &str,
        date_label: &str,
    ) -> Result<ChartArtifact, RenderError> {
        validate(chart, aspects)?;

        let s = &self.settings;
        let layout = FigureLayout::for_figure(s.width, s.height);
        let frame = WheelFrame::fit(layout.wheel, s.wheel_extent);

        let mut wheel = Vec::new();
        self.draw_signs(&frame, &mut wheel);
        self.draw_cusps(&frame, &chart.house_cusps, &mut wheel);
        self.draw_aspects(&frame, &chart.points, aspects, &mut wheel);
        self.draw_points(&frame, &chart.points, &mut wheel);

        log::debug!(
            "rendered {} points, {} aspects, {} wheel shapes",
            chart.points.len(),
            aspects.len(),
            wheel.len()
        );

        Ok(ChartArtifact {
            width: s.width,
            height: s.height,
            background_color: Color::parse_or(&s.color_background, Color::WHITE),
            title: subject.to_string(),
            subtitle: date_label.to_string(),
            layout,
            style: PageStyle::from_settings(s),
            wheel,
            aspect_matrix: AspectMatrix::build(&chart.points, aspects),
            position_table: PositionTable::build(
                &chart.points,
                &s.point_header,
                &s.position_header,
            ),
            metadata: ArtifactMetadata {
                julian_day: chart.julian_day,
                point_count: chart.points.len(),
                aspect_count: aspects.len(),
            },
        })
    }

    /// Sign glyphs on badges at each sector midpoint
    fn draw_signs(&self, frame: &WheelFrame, shapes: &mut Vec<Shape>) {
        let s = &self.settings;
        let badge = Color::parse_or(&s.color_sign_badge, Color::WHITE);
        let text = Color::parse_or(&s.color_text, Color::BLACK);

        for sign in SIGNS.iter() {
            let position = frame.at(sign.start_longitude() + 15.0, s.sign_ring_radius);
            shapes.push(Shape::Circle {
                center: position,
                radius: frame.pixels(s.sign_badge_radius),
                fill: Some(badge),
                stroke: None,
            });
            shapes.push(Shape::Text {
                position,
                content: sign.glyph().to_string(),
                size: s.sign_glyph_size,
                color: text,
                anchor: TextAnchor::Middle,
                bold: true,
            });
        }
    }

    /// Radial cusp lines with degree-within-sign labels
    fn draw_cusps(&self, frame: &WheelFrame, cusps: &[f64], shapes: &mut Vec<Shape>) {
        let s = &self.settings;
        let line = Color::parse_or(&s.color_cusps, Color::BLACK);
        let text = Color::parse_or(&s.color_text, Color::BLACK);

        shapes.push(Shape::Circle {
            center: frame.center,
            radius: frame.pixels(1.0),
            fill: None,
            stroke: Some(Stroke {
                color: line,
                width: 1.0,
                dash_array: None,
            }),
        });

        for &cusp in cusps {
            shapes.push(Shape::Line {
                from: frame.center,
                to: frame.at(cusp, 1.0),
                stroke: Stroke {
                    color: line,
                    width: s.stroke_cusps,
                    dash_array: None,
                },
            });
            shapes.push(Shape::Text {
                position: frame.at(cusp, s.cusp_label_radius),
                content: format_degrees(cusp),
                size: s.cusp_label_size,
                color: text,
                anchor: TextAnchor::Middle,
                bold: false,
            });
        }
    }

    /// Chords between aspected points on the aspect ring
    fn draw_aspects(
        &self,
        frame: &WheelFrame,
        points: &[ChartPoint],
        aspects: &[AspectInstance],
        shapes: &mut Vec<Shape>,
    ) {
        let s = &self.settings;
        let longitude = |name: &str| points.iter().find(|p| p.name == name).map(|p| p.longitude);

        for aspect in aspects {
            // validated before drawing
            let (Some(a), Some(b)) = (longitude(&aspect.first), longitude(&aspect.second)) else {
                continue;
            };
            shapes.push(Shape::AspectLine {
                from: frame.at(a, s.aspect_ring_radius),
                to: frame.at(b, s.aspect_ring_radius),
                aspect_type: aspect.definition.name.clone(),
                color: aspect.definition.line_color().with_alpha(s.aspect_opacity),
                width: s.stroke_aspects,
                style: aspect.definition.style,
            });
        }
    }

    /// Point names, stacked inward where they share a degree
    fn draw_points(&self, frame: &WheelFrame, points: &[ChartPoint], shapes: &mut Vec<Shape>) {
        let s = &self.settings;
        let text = Color::parse_or(&s.color_text, Color::BLACK);

        for placed in stack_points(points, s.point_ring_radius, s.point_stack_step) {
            shapes.push(Shape::Text {
                position: frame.at(placed.longitude, placed.radius),
                content: placed.name,
                size: s.point_glyph_size,
                color: text,
                anchor: TextAnchor::Middle,
                bold: true,
            });
        }
    }
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn validate(chart: &ChartResult, aspects: &[AspectInstance]) -> Result<(), RenderError> {
    if chart.house_cusps.len() != HOUSE_COUNT {
        return Err(RenderError::MissingHouseCusps {
            found: chart.house_cusps.len(),
        });
    }
    for (i, &cusp) in chart.house_cusps.iter().enumerate() {
        if !cusp.is_finite() {
            return Err(RenderError::InvalidLongitude {
                name: format!("cusp {}", i + 1),
                value: cusp,
            });
        }
    }
    for point in &chart.points {
        if !point.longitude.is_finite() {
            return Err(RenderError::InvalidLongitude {
                name: point.name.clone(),
                value: point.longitude,
            });
        }
    }
    for aspect in aspects {
        for name in [&aspect.first, &aspect.second] {
            if chart.point(name).is_none() {
                return Err(RenderError::UnknownPoint { name: name.clone() });
            }
        }
    }
    Ok(())
}
