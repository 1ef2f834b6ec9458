use crate::zodiac::{sign_degree, Sign};

/// Whole degrees and minutes of `longitude` within its sign, both truncated.
pub fn split_sign_degrees(longitude: f64) -> (u32, u32) {
    let total = sign_degree(longitude);
    let degrees = total.floor();
    let minutes = ((total - degrees) * 60.0).floor();
    (degrees as u32, (minutes as u32).min(59))
}

/// Degree-within-sign label, e.g. `3° 30′`.
pub fn format_degrees(longitude: f64) -> String {
    let (degrees, minutes) = split_sign_degrees(longitude);
    format!("{}° {:02}′", degrees, minutes)
}

/// Position label with the sign glyph, e.g. `3° 30′ ♌`.
pub fn format_position(longitude: f64) -> String {
    format!(
        "{} {}",
        format_degrees(longitude),
        Sign::from_longitude(longitude).glyph()
    )
}
