mod common;

use common::{sao_paulo_request, FixtureEphemeris};
use urania::config::{ChartConfig, ConfigError};
use urania::error::ChartError;
use urania::generate_chart;
use urania::location::{Hemisphere, LocationResolver, StaticLocations};
use urania::rendering::MatrixCell;

#[test]
fn test_sao_paulo_end_to_end() {
    let (chart, aspects, artifact) = generate_chart(
        FixtureEphemeris,
        &sao_paulo_request(),
        "Maria",
        &ChartConfig::default(),
    )
    .unwrap();

    assert_eq!(chart.house_cusps.len(), 12);
    for name in ["☉", "☽", "☿", "♀", "♂", "♃", "♄", "♅", "♆", "♇", "⚷", "⚸", "☊", "☋", "ASC", "MC"] {
        assert!(chart.point(name).is_some(), "missing {}", name);
    }

    // the nodes are always in opposition
    assert!(!aspects.is_empty());
    assert!(aspects.iter().any(|a| a.connects("☊", "☋") && a.angle == 180.0));

    assert_eq!(artifact.title, "Maria");
    assert_eq!(artifact.subtitle, "15/06/1990 14:30");
    assert!(!artifact.wheel.is_empty());
    assert_eq!(artifact.position_table.rows.len(), chart.points.len());
    assert!(artifact
        .aspect_matrix
        .cells
        .iter()
        .flatten()
        .any(|c| matches!(c, MatrixCell::Aspect { .. })));
}

#[test]
fn test_hemisphere_correction_before_pipeline() {
    let places = StaticLocations::new().with("Sao Paulo", 23.5, -46.6);
    let place = places.resolve("sao paulo").unwrap();

    let mut request = sao_paulo_request();
    request.latitude = Hemisphere::South.apply(place.lat);
    request.longitude = place.lon;

    let (chart, _, _) =
        generate_chart(FixtureEphemeris, &request, "", &ChartConfig::default()).unwrap();
    let (expected, _, _) =
        generate_chart(FixtureEphemeris, &sao_paulo_request(), "", &ChartConfig::default())
            .unwrap();
    assert_eq!(chart, expected);
}

#[test]
fn test_bad_aspect_config_fails_before_ephemeris() {
    let config = ChartConfig::from_toml_str(
        r##"
[[aspects]]
name = "conjunction"
angle = 0.0
tolerance = -1.0
color = "#FF0000"
style = "solid"
symbol = "☌"
"##,
    )
    .unwrap();

    let err = generate_chart(FixtureEphemeris, &sao_paulo_request(), "", &config).unwrap_err();
    assert!(matches!(
        err,
        ChartError::Configuration(ConfigError::InvalidAspectTable(_))
    ));
}

#[test]
fn test_region_lookup_feeds_timezone() {
    let config = ChartConfig::default();
    let mut request = sao_paulo_request();
    request.timezone = config.timezone_for_region("Brasil").unwrap().to_string();

    let (chart, _, _) = generate_chart(FixtureEphemeris, &request, "", &config).unwrap();
    let (expected, _, _) =
        generate_chart(FixtureEphemeris, &sao_paulo_request(), "", &config).unwrap();
    assert_eq!(chart.julian_day, expected.julian_day);
    assert!(config.timezone_for_region("Antarctica").is_err());
}

#[test]
fn test_render_settings_from_config() {
    let config = ChartConfig::from_toml_str(
        r#"
[render]
width = 800.0
height = 600.0
"#,
    )
    .unwrap();
    let (_, _, artifact) =
        generate_chart(FixtureEphemeris, &sao_paulo_request(), "", &config).unwrap();
    assert_eq!(artifact.width, 800.0);
    assert_eq!(artifact.height, 600.0);
    assert!(artifact.to_svg().contains(r#"width="800""#));
}
