mod common;

use common::{sao_paulo_request, FixtureEphemeris, UnorderedCuspsEphemeris, UNORDERED_CUSPS};
use urania::aspects::compute_aspects;
use urania::chart::{ChartCalculator, ChartPoint, ChartResult};
use urania::layout::stack_points;
use urania::rendering::{
    ChartRenderer, ChartSettings, MatrixCell, RenderError, Shape,
};

fn sample_chart(points: Vec<ChartPoint>) -> ChartResult {
    ChartResult {
        house_cusps: vec![
            12.0, 40.5, 71.25, 101.0, 130.0, 160.0, 192.0, 220.5, 251.25, 281.0, 310.0, 340.0,
        ],
        points,
        julian_day: 2_448_058.229_166_7,
    }
}

#[test]
fn test_position_table_formats_degree_and_sign() {
    let chart = sample_chart(vec![ChartPoint::derived("☉", 123.5)]);
    let artifact = ChartRenderer::new().render(&chart, &[], "Ana", "").unwrap();

    let row = &artifact.position_table.rows[0];
    assert_eq!(row.name, "☉");
    assert_eq!(row.position, "3° 30′ ♌");
    assert_eq!(artifact.position_table.headers[0], "Point");
}

#[test]
fn test_custom_table_headers() {
    let settings = ChartSettings {
        point_header: "Planeta".to_string(),
        position_header: "Posição".to_string(),
        ..ChartSettings::default()
    };
    let artifact = ChartRenderer::with_settings(settings)
        .render(&sample_chart(vec![]), &[], "", "")
        .unwrap();
    assert_eq!(artifact.position_table.headers[1], "Posição");
}

#[test]
fn test_colliding_points_stack_inward() {
    let points = vec![
        ChartPoint::derived("☉", 84.9),
        ChartPoint::derived("☿", 84.2),
        ChartPoint::derived("♀", 85.1),
    ];
    let placed = stack_points(&points, 1.05, 0.07);
    assert_eq!(placed[0].name, "☿");
    assert_eq!(placed[1].name, "☉");
    assert!(placed[1].radius < placed[0].radius);
    assert_eq!(placed[2].level, 0);

    let artifact = ChartRenderer::new()
        .render(&sample_chart(points), &[], "", "")
        .unwrap();
    let glyphs = artifact
        .wheel
        .iter()
        .filter(|s| matches!(s, Shape::Text { content, .. } if content == "☿" || content == "☉"))
        .count();
    assert_eq!(glyphs, 2);
}

#[test]
fn test_matrix_matches_aspect_list() {
    let calculator = ChartCalculator::new(FixtureEphemeris);
    let chart = calculator.compute_chart(&sao_paulo_request()).unwrap();
    let aspects = compute_aspects(&chart.points);
    let artifact = ChartRenderer::new().render(&chart, &aspects, "", "").unwrap();

    let matrix = &artifact.aspect_matrix;
    assert_eq!(matrix.size(), chart.points.len() + 1);
    assert_eq!(matrix.aspect_count(), aspects.len());
    for (i, row) in matrix.cells.iter().enumerate().skip(1) {
        for (j, cell) in row.iter().enumerate().skip(1) {
            if j > i {
                assert_eq!(cell, &MatrixCell::Blocked);
            }
        }
    }
}

#[test]
fn test_thirteen_cusps_rejected() {
    let mut chart = sample_chart(vec![]);
    chart.house_cusps.push(0.0);
    let err = ChartRenderer::new().render(&chart, &[], "", "").unwrap_err();
    assert!(matches!(err, RenderError::MissingHouseCusps { found: 13 }));
}

#[test]
fn test_svg_contains_all_regions() {
    let points = vec![
        ChartPoint::derived("☉", 10.0),
        ChartPoint::derived("☽", 100.0),
    ];
    let aspects = compute_aspects(&points);
    let artifact = ChartRenderer::new()
        .render(&sample_chart(points), &aspects, "Ana & Bia", "15/06/1990 14:30")
        .unwrap();
    let svg = artifact.to_svg();

    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains(r#"<g id="wheel">"#));
    assert!(svg.contains(r#"<g id="aspect-matrix">"#));
    assert!(svg.contains(r#"<g id="positions">"#));
    assert!(svg.contains("Ana &amp; Bia"));
    assert!(svg.contains(r#"class="aspect square""#));
    assert!(svg.contains("♈"));
    assert!(svg.contains("10° 00′ ♈"));
}

#[test]
fn test_json_round_trips() {
    let artifact = ChartRenderer::new()
        .render(&sample_chart(vec![ChartPoint::derived("A", 1.0)]), &[], "", "")
        .unwrap();
    let json = artifact.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["metadata"]["point_count"], 1);
    assert_eq!(value["position_table"]["rows"][0]["name"], "A");
}

#[test]
fn test_unordered_cusps_are_kept_and_drawn() {
    let calculator = ChartCalculator::new(UnorderedCuspsEphemeris);
    let chart = calculator.compute_chart(&sao_paulo_request()).unwrap();
    assert_eq!(chart.house_cusps, UNORDERED_CUSPS.to_vec());

    let aspects = compute_aspects(&chart.points);
    let artifact = ChartRenderer::new().render(&chart, &aspects, "", "").unwrap();
    let cusp_lines = artifact
        .wheel
        .iter()
        .filter(|s| matches!(s, Shape::Line { .. }))
        .count();
    assert_eq!(cusp_lines, 12);
}
