//! # Solar time events
//!
//! Solves, for a configurable set of target sun altitudes, the two instants
//! (morning/evening) at which the Sun crosses each altitude on the solar day
//! containing the input instant. The morning instant is the reflection of
//! the solved evening instant around solar noon, a low-precision
//! approximation rather than an independent solve.
//!
//! In array mode every (altitude, element) pair is solved independently with
//! that element's own transit parameters; an altitude that is never reached
//! at one element's latitude resolves to `None` there without affecting its
//! siblings or the other labels.

use std::collections::HashMap;

use hifitime::Epoch;
use itertools::izip;
use serde::Serialize;

use crate::broadcast::{broadcast_len, pack, ScalarOrArray};
use crate::celestial::{
    approx_transit, declination, ecliptic_longitude, get_set_j, julian_cycle, observer_angle,
    solar_mean_anomaly, solar_transit_j,
};
use crate::constants::{Degree, Meter, Radian, RADEG};
use crate::sunpath_errors::SunpathError;
use crate::time::{days_since_j2000, epoch_of_julian_day, InstantSpec};

/// One solvable sun-altitude crossing and the labels of its two instants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeDefinition {
    /// Target altitude of the crossing, in degrees
    pub angle: Degree,
    pub morning: &'static str,
    pub evening: &'static str,
}

/// Default sun-times configuration. Callers may copy and extend it, or pass
/// their own table to [`get_times`].
pub const DEFAULT_TIMES: [TimeDefinition; 6] = [
    TimeDefinition {
        angle: -0.833,
        morning: "sunrise",
        evening: "sunset",
    },
    TimeDefinition {
        angle: -0.3,
        morning: "sunrise_end",
        evening: "sunset_start",
    },
    TimeDefinition {
        angle: -6.0,
        morning: "dawn",
        evening: "dusk",
    },
    TimeDefinition {
        angle: -12.0,
        morning: "nautical_dawn",
        evening: "nautical_dusk",
    },
    TimeDefinition {
        angle: -18.0,
        morning: "night_end",
        evening: "night",
    },
    TimeDefinition {
        angle: 6.0,
        morning: "golden_hour_end",
        evening: "golden_hour",
    },
];

/// Solar time events keyed by label; always contains `solar_noon` and
/// `nadir` plus the morning/evening label of every configured altitude.
/// `None` marks a crossing that does not occur (polar day/night).
pub type SunTimes = HashMap<&'static str, ScalarOrArray<Option<Epoch>>>;

/// Per-element transit parameters shared by every altitude of that element.
struct TransitParams {
    lw: Vec<Radian>,
    phi: Vec<Radian>,
    dec: Vec<Radian>,
    cycle: Vec<f64>,
    mean_anomaly: Vec<Radian>,
    ecliptic_lon: Vec<Radian>,
    jnoon: Vec<f64>,
}

/// Calculate sun times for an instant, location and, optionally, an observer
/// height (in meters) relative to the horizon.
///
/// Arguments
/// ---------
/// * `instant`: a UTC instant or an array of them.
/// * `latitude`: geographic latitude in degrees, scalar or array.
/// * `longitude`: geographic longitude in degrees, scalar or array.
/// * `height`: observer height above the horizon in meters (≥ 0).
/// * `time_definitions`: the altitude crossings to solve, e.g.
///   [`DEFAULT_TIMES`] or a caller-supplied table.
///
/// Return
/// ------
/// * a [`SunTimes`] mapping with one instant (scalar mode) or one array of
///   instants (array mode) per label, or
///   [`SunpathError::ShapeMismatch`] when the array lengths are incompatible.
pub fn get_times(
    instant: impl Into<InstantSpec>,
    latitude: impl Into<ScalarOrArray<Degree>>,
    longitude: impl Into<ScalarOrArray<Degree>>,
    height: Meter,
    time_definitions: &[TimeDefinition],
) -> Result<SunTimes, SunpathError> {
    let instant = instant.into();
    let latitude = latitude.into();
    let longitude = longitude.into();

    let count = broadcast_len(&[instant.len(), latitude.len(), longitude.len()])?;
    let array_input = instant.is_array() || latitude.is_array() || longitude.is_array();

    let dh = observer_angle(height);
    let params = transit_params(&instant, &latitude, &longitude, count);

    let mut result: SunTimes = HashMap::with_capacity(2 + 2 * time_definitions.len());
    result.insert(
        "solar_noon",
        pack(
            params.jnoon.iter().map(|&j| epoch_of_julian_day(j)).collect(),
            array_input,
        ),
    );
    result.insert(
        "nadir",
        pack(
            params
                .jnoon
                .iter()
                .map(|&j| epoch_of_julian_day(j - 0.5))
                .collect(),
            array_input,
        ),
    );

    for definition in time_definitions {
        let h0 = (definition.angle + dh) * RADEG;

        let mut rise = Vec::with_capacity(count);
        let mut set = Vec::with_capacity(count);
        for (&lw, &phi, &dec, &n, &m, &l, &jnoon) in izip!(
            &params.lw,
            &params.phi,
            &params.dec,
            &params.cycle,
            &params.mean_anomaly,
            &params.ecliptic_lon,
            &params.jnoon,
        ) {
            let jset = get_set_j(h0, lw, phi, dec, n, m, l);
            let jrise = jnoon - (jset - jnoon);

            rise.push(epoch_of_julian_day(jrise));
            set.push(epoch_of_julian_day(jset));
        }

        result.insert(definition.morning, pack(rise, array_input));
        result.insert(definition.evening, pack(set, array_input));
    }

    Ok(result)
}

/// Calculate sun times with the default altitude table and sea-level
/// observer height.
pub fn get_times_default(
    instant: impl Into<InstantSpec>,
    latitude: impl Into<ScalarOrArray<Degree>>,
    longitude: impl Into<ScalarOrArray<Degree>>,
) -> Result<SunTimes, SunpathError> {
    get_times(instant, latitude, longitude, 0.0, &DEFAULT_TIMES)
}

/// Evaluate the per-element transit parameters once; every configured
/// altitude of a given element reuses them.
fn transit_params(
    instant: &InstantSpec,
    latitude: &ScalarOrArray<Degree>,
    longitude: &ScalarOrArray<Degree>,
    count: usize,
) -> TransitParams {
    let mut params = TransitParams {
        lw: Vec::with_capacity(count),
        phi: Vec::with_capacity(count),
        dec: Vec::with_capacity(count),
        cycle: Vec::with_capacity(count),
        mean_anomaly: Vec::with_capacity(count),
        ecliptic_lon: Vec::with_capacity(count),
        jnoon: Vec::with_capacity(count),
    };

    for i in 0..count {
        let lw = RADEG * -longitude.broadcast_get(i);
        let phi = RADEG * latitude.broadcast_get(i);
        let d = days_since_j2000(instant.broadcast_get(i));

        let n = julian_cycle(d, lw);
        let ds = approx_transit(0.0, lw, n);
        let m = solar_mean_anomaly(ds);
        let l = ecliptic_longitude(m);

        params.lw.push(lw);
        params.phi.push(phi);
        params.dec.push(declination(l, 0.0));
        params.cycle.push(n);
        params.mean_anomaly.push(m);
        params.ecliptic_lon.push(l);
        params.jnoon.push(solar_transit_j(ds, m, l));
    }

    params
}

#[cfg(test)]
mod times_test {
    use super::*;
    use hifitime::Epoch;

    #[test]
    fn test_default_table() {
        assert_eq!(DEFAULT_TIMES.len(), 6);
        assert_eq!(DEFAULT_TIMES[0].angle, -0.833);
        assert_eq!(DEFAULT_TIMES[0].morning, "sunrise");
        assert_eq!(DEFAULT_TIMES[0].evening, "sunset");
        assert_eq!(DEFAULT_TIMES[5].morning, "golden_hour_end");
    }

    #[test]
    fn test_scalar_mode_labels() {
        let epoch = Epoch::from_gregorian_utc(2022, 12, 14, 0, 0, 0, 0);
        let times = get_times_default(epoch, 37.478897, 126.953309).unwrap();

        assert_eq!(times.len(), 14);
        for definition in &DEFAULT_TIMES {
            assert!(times[definition.morning].as_scalar().unwrap().is_some());
            assert!(times[definition.evening].as_scalar().unwrap().is_some());
        }
        assert!(times["solar_noon"].as_scalar().unwrap().is_some());
        assert!(times["nadir"].as_scalar().unwrap().is_some());
    }

    #[test]
    fn test_custom_definitions() {
        let epoch = Epoch::from_gregorian_utc(2022, 12, 14, 0, 0, 0, 0);
        let table = [TimeDefinition {
            angle: -4.0,
            morning: "blue_hour_end",
            evening: "blue_hour",
        }];
        let times = get_times(epoch, 37.478897, 126.953309, 0.0, &table).unwrap();

        assert_eq!(times.len(), 4);
        assert!(times.contains_key("blue_hour_end"));
        assert!(times.contains_key("blue_hour"));
        assert!(times.contains_key("solar_noon"));
        assert!(times.contains_key("nadir"));
    }

    #[test]
    fn test_observer_height_widens_the_day() {
        let epoch = Epoch::from_gregorian_utc(2022, 12, 14, 0, 0, 0, 0);
        let sea_level = get_times_default(epoch, 37.478897, 126.953309).unwrap();
        let elevated = get_times(epoch, 37.478897, 126.953309, 1500.0, &DEFAULT_TIMES).unwrap();

        let rise_sea = sea_level["sunrise"].as_scalar().unwrap().unwrap();
        let rise_high = elevated["sunrise"].as_scalar().unwrap().unwrap();
        let set_sea = sea_level["sunset"].as_scalar().unwrap().unwrap();
        let set_high = elevated["sunset"].as_scalar().unwrap().unwrap();

        assert!(rise_high < rise_sea);
        assert!(set_high > set_sea);
    }
}
