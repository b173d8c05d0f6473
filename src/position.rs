//! # Apparent solar position
//!
//! Composes the celestial formulas into [`get_position`], the public
//! azimuth/altitude/distance entry point. Inputs broadcast elementwise; the
//! result mirrors the input shape.

use serde::{Deserialize, Serialize};

use crate::broadcast::{broadcast_len, pack, ScalarOrArray};
use crate::celestial::{horizontal_coords, sidereal_time, sun_coords};
use crate::constants::{Degree, Meter, RADEG};
use crate::sunpath_errors::SunpathError;
use crate::time::{days_since_j2000, InstantSpec};

/// Apparent position of the Sun for one instant/location, or elementwise for
/// arrays of them.
///
/// Azimuth is degrees clockwise from north, altitude degrees above the
/// horizon (no refraction applied), distance in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunPosition {
    pub azimuth: ScalarOrArray<Degree>,
    pub altitude: ScalarOrArray<Degree>,
    pub distance: ScalarOrArray<Meter>,
}

/// Calculate the Sun's apparent position for an instant and location.
///
/// Arguments
/// ---------
/// * `instant`: a UTC instant or an array of them.
/// * `latitude`: geographic latitude in degrees, scalar or array.
/// * `longitude`: geographic longitude in degrees, scalar or array.
///
/// Return
/// ------
/// * a [`SunPosition`] whose fields carry one value per broadcast element,
///   lowered to scalars when every input was scalar, or
///   [`SunpathError::ShapeMismatch`] when the array lengths are incompatible.
pub fn get_position(
    instant: impl Into<InstantSpec>,
    latitude: impl Into<ScalarOrArray<Degree>>,
    longitude: impl Into<ScalarOrArray<Degree>>,
) -> Result<SunPosition, SunpathError> {
    let instant = instant.into();
    let latitude = latitude.into();
    let longitude = longitude.into();

    let count = broadcast_len(&[instant.len(), latitude.len(), longitude.len()])?;
    let array_input = instant.is_array() || latitude.is_array() || longitude.is_array();

    let mut azimuths = Vec::with_capacity(count);
    let mut altitudes = Vec::with_capacity(count);
    let mut distances = Vec::with_capacity(count);

    for i in 0..count {
        let lw = RADEG * -longitude.broadcast_get(i);
        let phi = RADEG * latitude.broadcast_get(i);
        let d = days_since_j2000(instant.broadcast_get(i));

        let coords = sun_coords(d);
        let h = sidereal_time(d, lw) - coords.right_ascension;
        let horizontal = horizontal_coords(h, phi, coords.declination);

        azimuths.push(horizontal.azimuth / RADEG + 180.0);
        altitudes.push(horizontal.altitude / RADEG);
        distances.push(coords.distance);
    }

    Ok(SunPosition {
        azimuth: pack(azimuths, array_input),
        altitude: pack(altitudes, array_input),
        distance: pack(distances, array_input),
    })
}
