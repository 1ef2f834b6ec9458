//! Civil time handling: IANA zone lookup, local -> UTC, UTC -> Julian Day.

use chrono::{
    DateTime, Datelike, Duration, LocalResult, NaiveDateTime, Offset, TimeZone, Timelike, Utc,
};
use chrono_tz::Tz;
use swisseph::swe::julday;

use crate::config::ConfigError;

/// Resolve an IANA zone name such as `America/Sao_Paulo`.
pub fn resolve_timezone(name: &str) -> Result<Tz, ConfigError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| ConfigError::UnknownTimezone {
            name: name.to_string(),
        })
}

/// Attach `tz` to a naive civil timestamp and convert to UTC.
///
/// Ambiguous wall-clock times (clocks turned back) resolve to the later,
/// standard-time instant. Wall-clock times skipped by a forward transition
/// are moved forward by the size of the gap.
pub fn localize(local: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(_, standard) => standard.with_timezone(&Utc),
        LocalResult::None => shift_out_of_gap(local, tz),
    }
}

fn shift_out_of_gap(local: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    // tzdb gaps are at most a few hours; find the first valid wall time after
    for minutes in (15..=240).step_by(15) {
        let step = Duration::minutes(minutes);
        if let Some(after) = tz.from_local_datetime(&(local + step)).earliest() {
            // `after - step` is an instant just before the transition
            let before = tz.offset_from_utc_datetime(&(after.naive_utc() - step));
            let offset = Duration::seconds(before.fix().local_minus_utc() as i64);
            return Utc.from_utc_datetime(&(local - offset));
        }
    }
    Utc.from_utc_datetime(&local)
}

// GREG_CAL
const GREGORIAN: u32 = 1;

/// Julian Day (UT) for a UTC instant, Gregorian calendar.
///
/// The day fraction is built from hours + minutes/60 + seconds/3600.
pub fn julian_day(utc: DateTime<Utc>) -> f64 {
    let hour_decimal =
        utc.hour() as f64 + utc.minute() as f64 / 60.0 + utc.second() as f64 / 3600.0;
    julday(
        utc.year(),
        utc.month() as i32,
        utc.day() as i32,
        hour_decimal,
        GREGORIAN,
    )
}
