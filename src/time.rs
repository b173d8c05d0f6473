//! # Calendar instants and Julian day conversions
//!
//! Instants are [`hifitime::Epoch`] values and are always interpreted as UTC:
//! every timestamp fed to the solar formulas is reduced to UTC milliseconds
//! since the Unix epoch. Array elements carry no individual timezone, so
//! naive/local instants passed where UTC is expected silently yield wrong
//! results — callers are responsible for supplying UTC or UTC-equivalent
//! instants.
//!
//! A Julian day that is not a number (a sun altitude never reached at the
//! requested latitude produces one) converts to `None` rather than panicking,
//! on the scalar and the array path alike.

use std::str::FromStr;

use hifitime::Epoch;

use crate::broadcast::ScalarOrArray;
use crate::constants::{JulianDay, UnixMillis, DAY_IN_MS, J1970, J2000};
use crate::sunpath_errors::SunpathError;

/// A single instant or a homogeneous array of instants, always UTC.
pub type InstantSpec = ScalarOrArray<Epoch>;

impl ScalarOrArray<Epoch> {
    /// Parse a single ISO-8601 instant (bare ISO strings are UTC).
    ///
    /// Return
    /// ------
    /// * the scalar variant, or [`SunpathError::InvalidInstant`] when the text
    ///   is not a recognized timestamp.
    pub fn parse(text: &str) -> Result<Self, SunpathError> {
        Epoch::from_str(text)
            .map(ScalarOrArray::Scalar)
            .map_err(|e| SunpathError::InvalidInstant(format!("{text}: {e}")))
    }

    /// Parse a homogeneous array of ISO-8601 instants.
    ///
    /// The whole call fails on the first unparseable element; partial arrays
    /// are never produced.
    pub fn parse_all(texts: &[&str]) -> Result<Self, SunpathError> {
        texts
            .iter()
            .map(|text| {
                Epoch::from_str(text)
                    .map_err(|e| SunpathError::InvalidInstant(format!("{text}: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(ScalarOrArray::Array)
    }
}

/// UTC milliseconds since the Unix epoch for a single instant.
pub fn unix_millis_of(epoch: &Epoch) -> UnixMillis {
    epoch.to_unix_milliseconds().round() as UnixMillis
}

/// Julian Day Number (fractional) of a single instant.
pub fn julian_day_of(epoch: &Epoch) -> JulianDay {
    unix_millis_of(epoch) as f64 / DAY_IN_MS - 0.5 + J1970
}

/// Instant of a Julian Day Number; `None` when the day count is not finite.
pub fn epoch_of_julian_day(jd: JulianDay) -> Option<Epoch> {
    if !jd.is_finite() {
        return None;
    }
    Some(Epoch::from_unix_milliseconds((jd + 0.5 - J1970) * DAY_IN_MS))
}

/// Days elapsed since the J2000.0 epoch for a single instant.
pub fn days_since_j2000(epoch: &Epoch) -> f64 {
    julian_day_of(epoch) - J2000
}

/// Convert instants to UTC milliseconds since the Unix epoch.
pub fn to_milliseconds(instant: &InstantSpec) -> ScalarOrArray<UnixMillis> {
    instant.map(unix_millis_of)
}

/// Convert instants to Julian Day Numbers.
pub fn to_julian(instant: &InstantSpec) -> ScalarOrArray<JulianDay> {
    instant.map(julian_day_of)
}

/// Convert Julian Day Numbers back to instants.
///
/// Inverse of [`to_julian`] up to millisecond rounding. Non-finite day counts
/// map to `None` per element; sibling elements are unaffected.
pub fn from_julian(jd: &ScalarOrArray<JulianDay>) -> ScalarOrArray<Option<Epoch>> {
    jd.map(|&j| epoch_of_julian_day(j))
}

/// Convert instants to days elapsed since the J2000.0 epoch.
pub fn to_days_since_j2000(instant: &InstantSpec) -> ScalarOrArray<f64> {
    instant.map(days_since_j2000)
}
