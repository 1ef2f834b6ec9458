mod common;

use approx::assert_abs_diff_eq;
use common::{local, sao_paulo_request, FailingEphemeris, FixtureEphemeris, RecordingEphemeris};
use urania::chart::{ChartCalculator, ChartRequest, PointKind, HOUSE_COUNT};
use urania::ephemeris::{Body, HouseSystem, TRACKED_BODIES};
use urania::error::ChartError;
use urania::config::ConfigError;
use urania::time::{julian_day, localize, resolve_timezone};

#[test]
fn test_twelve_cusps_in_range() {
    let calculator = ChartCalculator::new(FixtureEphemeris);
    let chart = calculator.compute_chart(&sao_paulo_request()).unwrap();

    assert_eq!(chart.house_cusps.len(), HOUSE_COUNT);
    for cusp in &chart.house_cusps {
        assert!((0.0..360.0).contains(cusp), "cusp {} out of range", cusp);
    }
}

#[test]
fn test_point_order_bodies_derived_angles() {
    let calculator = ChartCalculator::new(FixtureEphemeris);
    let chart = calculator.compute_chart(&sao_paulo_request()).unwrap();

    let names: Vec<&str> = chart.point_names().collect();
    let mut expected: Vec<&str> = TRACKED_BODIES.iter().map(|b| b.symbol()).collect();
    expected.extend(["☋", "ASC", "MC"]);
    assert_eq!(names, expected);
    assert_eq!(chart.points.len(), 16);
    assert!(matches!(chart.points[13].kind, PointKind::Derived));
}

#[test]
fn test_south_node_is_exactly_opposite() {
    let calculator = ChartCalculator::new(FixtureEphemeris);
    for day in [1, 8, 15, 22] {
        let mut request = sao_paulo_request();
        request.local_datetime = local(1990, 6, day, 14, 30);
        let chart = calculator.compute_chart(&request).unwrap();

        let node = chart.longitude("☊").unwrap();
        let south = chart.longitude("☋").unwrap();
        assert_eq!(south, (node + 180.0) % 360.0);
    }
}

#[test]
fn test_latitude_sign_is_forwarded_unchanged() {
    let recorder = RecordingEphemeris::default();
    let calculator = ChartCalculator::new(&recorder);
    calculator.compute_chart(&sao_paulo_request()).unwrap();

    assert_eq!(recorder.latitude.get(), Some(-23.5));
    assert_eq!(recorder.house_calls.get(), 1);
}

#[test]
fn test_hemisphere_changes_houses() {
    let calculator = ChartCalculator::new(FixtureEphemeris);
    let south = calculator.compute_chart(&sao_paulo_request()).unwrap();

    let mut request = sao_paulo_request();
    request.latitude = 23.5;
    let north = calculator.compute_chart(&request).unwrap();

    assert_ne!(south.ascendant(), north.ascendant());
    assert_ne!(south.house_cusps, north.house_cusps);
}

#[test]
fn test_repeated_computation_is_bit_identical() {
    let calculator = ChartCalculator::new(FixtureEphemeris);
    let first = calculator.compute_chart(&sao_paulo_request()).unwrap();
    let second = calculator.compute_chart(&sao_paulo_request()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_julian_day_uses_utc_instant() {
    let calculator = ChartCalculator::new(FixtureEphemeris);
    let chart = calculator.compute_chart(&sao_paulo_request()).unwrap();

    let tz = resolve_timezone("America/Sao_Paulo").unwrap();
    let expected = julian_day(localize(local(1990, 6, 15, 14, 30), tz));
    assert_eq!(chart.julian_day, expected);
    // 17:30 UT
    assert_abs_diff_eq!(chart.julian_day, 2_448_058.229_166_7, epsilon = 1e-6);
}

#[test]
fn test_unknown_timezone_fails_before_ephemeris_query() {
    let recorder = RecordingEphemeris::default();
    let calculator = ChartCalculator::new(&recorder);
    let mut request = sao_paulo_request();
    request.timezone = "America/Atlantis".to_string();

    let err = calculator.compute_chart(&request).unwrap_err();
    assert!(matches!(
        err,
        ChartError::Configuration(ConfigError::UnknownTimezone { .. })
    ));
    assert_eq!(recorder.house_calls.get(), 0);
}

#[test]
fn test_out_of_range_latitude_is_configuration_error() {
    let calculator = ChartCalculator::new(FixtureEphemeris);
    let request = ChartRequest {
        latitude: -123.5,
        ..sao_paulo_request()
    };
    let err = calculator.compute_chart(&request).unwrap_err();
    assert!(matches!(
        err,
        ChartError::Configuration(ConfigError::InvalidCoordinates { .. })
    ));
}

#[test]
fn test_ephemeris_failure_carries_inputs() {
    let calculator = ChartCalculator::new(FailingEphemeris);
    let err = calculator.compute_chart(&sao_paulo_request()).unwrap_err();
    match err {
        ChartError::Computation {
            latitude,
            longitude,
            jd_ut,
            ..
        } => {
            assert_eq!(latitude, -23.5);
            assert_eq!(longitude, -46.6);
            assert!(jd_ut > 2_448_000.0);
        }
        other => panic!("expected computation error, got {:?}", other),
    }
}

#[test]
fn test_derived_point_skipped_without_node() {
    let calculator = ChartCalculator::with_bodies(FixtureEphemeris, vec![Body::Sun, Body::Moon]);
    let chart = calculator
        .compute("1990-06-15T14:30:00".parse().unwrap(), -23.5, -46.6, "America/Sao_Paulo", HouseSystem::Koch)
        .unwrap();
    let names: Vec<&str> = chart.point_names().collect();
    assert_eq!(names, vec!["☉", "☽", "ASC", "MC"]);
}
