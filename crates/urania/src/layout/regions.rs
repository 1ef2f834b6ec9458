use serde::{Deserialize, Serialize};

use crate::rendering::primitives::{Point, Rect};

/// Where each region of the chart page sits.
///
/// Wheel on the left half, aspect matrix top right, position table bottom
/// right, title and date label top left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureLayout {
    pub title: Point,
    pub subtitle: Point,
    pub wheel: Rect,
    pub aspect_matrix: Rect,
    pub positions: Rect,
}

impl FigureLayout {
    pub fn for_figure(width: f32, height: f32) -> Self {
        let region = |x: f32, y: f32, w: f32, h: f32| Rect {
            x: x * width,
            y: y * height,
            width: w * width,
            height: h * height,
        };
        Self {
            title: Point {
                x: 0.03 * width,
                y: 0.04 * height,
            },
            subtitle: Point {
                x: 0.03 * width,
                y: 0.08 * height,
            },
            wheel: region(0.0, 0.1, 0.5, 0.85),
            aspect_matrix: region(0.53, 0.05, 0.44, 0.47),
            positions: region(0.53, 0.58, 0.44, 0.37),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_do_not_overlap() {
        let layout = FigureLayout::for_figure(1400.0, 1200.0);
        assert!(layout.wheel.x + layout.wheel.width <= layout.aspect_matrix.x);
        assert!(layout.aspect_matrix.y + layout.aspect_matrix.height <= layout.positions.y);
        assert!(layout.positions.y + layout.positions.height <= 1200.0);
    }
}
