use serde::{Deserialize, Serialize};

use crate::aspects::{find_aspect, AspectInstance};
use crate::chart::ChartPoint;
use crate::rendering::format::format_position;

/// One cell of the aspect matrix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cell", rename_all = "snake_case")]
pub enum MatrixCell {
    /// Corner and diagonal
    Blank,
    Header { label: String },
    Aspect { symbol: String, color: String },
    /// Lower triangle, no aspect for the pair
    Empty,
    /// Upper triangle
    Blocked,
}

/// Lower-triangular table of aspects between chart points.
///
/// Row and column 0 hold point names in chart order; cell (i, j) with
/// j < i describes the pair (point i, point j).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectMatrix {
    pub cells: Vec<Vec<MatrixCell>>,
}

impl AspectMatrix {
    pub fn build(points: &[ChartPoint], aspects: &[AspectInstance]) -> Self {
        let n = points.len() + 1;
        let mut cells = Vec::with_capacity(n);
        for i in 0..n {
            let mut row = Vec::with_capacity(n);
            for j in 0..n {
                let cell = if i == 0 && j == 0 {
                    MatrixCell::Blank
                } else if i == 0 {
                    MatrixCell::Header {
                        label: points[j - 1].name.clone(),
                    }
                } else if j == 0 {
                    MatrixCell::Header {
                        label: points[i - 1].name.clone(),
                    }
                } else if i == j {
                    MatrixCell::Blank
                } else if j > i {
                    MatrixCell::Blocked
                } else {
                    match find_aspect(aspects, &points[i - 1].name, &points[j - 1].name) {
                        Some(aspect) => MatrixCell::Aspect {
                            symbol: aspect.definition.symbol.clone(),
                            color: aspect.definition.color.clone(),
                        },
                        None => MatrixCell::Empty,
                    }
                };
                row.push(cell);
            }
            cells.push(row);
        }
        Self { cells }
    }

    /// Rows including the header row
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&MatrixCell> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    /// Aspect cells drawn in the lower triangle
    pub fn aspect_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| matches!(c, MatrixCell::Aspect { .. }))
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionRow {
    pub name: String,
    /// e.g. `3° 30′ ♌`
    pub position: String,
}

/// Point names and formatted positions in chart order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionTable {
    pub headers: [String; 2],
    pub rows: Vec<PositionRow>,
}

impl PositionTable {
    pub fn build(points: &[ChartPoint], point_header: &str, position_header: &str) -> Self {
        Self {
            headers: [point_header.to_string(), position_header.to_string()],
            rows: points
                .iter()
                .map(|p| PositionRow {
                    name: p.name.clone(),
                    position: format_position(p.longitude),
                })
                .collect(),
        }
    }
}
