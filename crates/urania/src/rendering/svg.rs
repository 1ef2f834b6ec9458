use crate::rendering::artifact::ChartArtifact;
use crate::rendering::primitives::{Color, Point, Rect, Shape, Stroke, TextAnchor};
use crate::rendering::tables::MatrixCell;

impl ChartArtifact {
    /// Page-sized SVG document holding all three regions.
    pub fn to_svg(&self) -> String {
        let mut svg = String::new();
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"<rect x="0" y="0" width="{}" height="{}"{}/>"#,
            self.width,
            self.height,
            fill_attrs(self.background_color)
        ));
        svg.push('\n');

        svg.push_str(&text_element(
            self.layout.title,
            &self.title,
            self.style.title_size,
            self.style.text,
            TextAnchor::Start,
            true,
        ));
        svg.push_str(&text_element(
            self.layout.subtitle,
            &self.subtitle,
            self.style.subtitle_size,
            self.style.text,
            TextAnchor::Start,
            false,
        ));

        svg.push_str("<g id=\"wheel\">\n");
        for shape in &self.wheel {
            svg.push_str(&shape_element(shape));
        }
        svg.push_str("</g>\n");

        self.write_aspect_matrix(&mut svg);
        self.write_position_table(&mut svg);

        svg.push_str("</svg>\n");
        svg
    }

    fn write_aspect_matrix(&self, svg: &mut String) {
        let n = self.aspect_matrix.size().max(1) as f32;
        let area = self.layout.aspect_matrix;
        let (cw, ch) = (area.width / n, area.height / n);
        let style = &self.style;

        svg.push_str("<g id=\"aspect-matrix\">\n");
        for (i, row) in self.aspect_matrix.cells.iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                let rect = Rect {
                    x: area.x + j as f32 * cw,
                    y: area.y + i as f32 * ch,
                    width: cw,
                    height: ch,
                };
                let (fill, label) = match cell {
                    MatrixCell::Blank => (style.cell_fill, None),
                    MatrixCell::Header { label } => (style.header_fill, Some((label.as_str(), style.text))),
                    MatrixCell::Aspect { symbol, color } => (
                        style.cell_fill,
                        Some((symbol.as_str(), Color::parse_or(color, style.text))),
                    ),
                    MatrixCell::Empty => (style.cell_fill, None),
                    MatrixCell::Blocked => (style.blocked_fill, None),
                };
                svg.push_str(&cell_element(rect, fill, style.grid));
                if let Some((content, color)) = label {
                    svg.push_str(&text_element(
                        rect.center(),
                        content,
                        style.table_text_size,
                        color,
                        TextAnchor::Middle,
                        false,
                    ));
                }
            }
        }
        svg.push_str("</g>\n");
    }

    fn write_position_table(&self, svg: &mut String) {
        let table = &self.position_table;
        let area = self.layout.positions;
        let rh = area.height / (table.rows.len() + 1) as f32;
        let cw = area.width / 2.0;
        let style = &self.style;

        let rows = std::iter::once((table.headers[0].as_str(), table.headers[1].as_str(), true)).chain(
            table
                .rows
                .iter()
                .map(|r| (r.name.as_str(), r.position.as_str(), false)),
        );

        svg.push_str("<g id=\"positions\">\n");
        for (i, (name, position, header)) in rows.enumerate() {
            let fill = if header { style.header_fill } else { style.cell_fill };
            for (col, content) in [name, position].into_iter().enumerate() {
                let rect = Rect {
                    x: area.x + col as f32 * cw,
                    y: area.y + i as f32 * rh,
                    width: cw,
                    height: rh,
                };
                svg.push_str(&cell_element(rect, fill, style.grid));
                svg.push_str(&text_element(
                    rect.center(),
                    content,
                    style.table_text_size,
                    style.text,
                    TextAnchor::Middle,
                    false,
                ));
            }
        }
        svg.push_str("</g>\n");
    }
}

fn shape_element(shape: &Shape) -> String {
    match shape {
        Shape::Circle {
            center,
            radius,
            fill,
            stroke,
        } => format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}"{}{}/>"#,
            center.x,
            center.y,
            radius,
            (*fill).map(fill_attrs).unwrap_or_else(|| r#" fill="none""#.to_string()),
            stroke.as_ref().map(stroke_attrs).unwrap_or_default()
        ) + "\n",
        Shape::Line { from, to, stroke } => format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"{}/>"#,
            from.x,
            from.y,
            to.x,
            to.y,
            stroke_attrs(stroke)
        ) + "\n",
        Shape::Text {
            position,
            content,
            size,
            color,
            anchor,
            bold,
        } => text_element(*position, content, *size, *color, *anchor, *bold),
        Shape::AspectLine {
            from,
            to,
            aspect_type,
            color,
            width,
            style,
        } => {
            let stroke = Stroke {
                color: *color,
                width: *width,
                dash_array: style.dash_array(*width),
            };
            format!(
                r#"<line class="aspect {}" x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"{}/>"#,
                escape_xml(aspect_type),
                from.x,
                from.y,
                to.x,
                to.y,
                stroke_attrs(&stroke)
            ) + "\n"
        }
    }
}

fn cell_element(rect: Rect, fill: Color, grid: Color) -> String {
    format!(
        r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}"{} stroke="{}" stroke-width="0.5"/>"#,
        rect.x,
        rect.y,
        rect.width,
        rect.height,
        fill_attrs(fill),
        grid.to_hex_rgb()
    ) + "\n"
}

fn text_element(
    position: Point,
    content: &str,
    size: f32,
    color: Color,
    anchor: TextAnchor,
    bold: bool,
) -> String {
    let anchor = match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    format!(
        r#"<text x="{:.2}" y="{:.2}" font-size="{}"{} text-anchor="{}" dominant-baseline="central"{}>{}</text>"#,
        position.x,
        position.y,
        size,
        fill_attrs(color),
        anchor,
        if bold { r#" font-weight="bold""# } else { "" },
        escape_xml(content)
    ) + "\n"
}

fn fill_attrs(color: Color) -> String {
    if color.a == 255 {
        format!(r#" fill="{}""#, color.to_hex_rgb())
    } else {
        format!(
            r#" fill="{}" fill-opacity="{:.3}""#,
            color.to_hex_rgb(),
            color.opacity()
        )
    }
}

fn stroke_attrs(stroke: &Stroke) -> String {
    let mut attrs = format!(
        r#" stroke="{}" stroke-width="{}""#,
        stroke.color.to_hex_rgb(),
        stroke.width
    );
    if stroke.color.a != 255 {
        attrs.push_str(&format!(r#" stroke-opacity="{:.3}""#, stroke.color.opacity()));
    }
    if let Some(dashes) = &stroke.dash_array {
        let pattern: Vec<String> = dashes.iter().map(|d| d.to_string()).collect();
        attrs.push_str(&format!(r#" stroke-dasharray="{}""#, pattern.join(",")));
    }
    attrs
}

pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
