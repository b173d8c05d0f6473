//! # Low-precision solar formulas
//!
//! Orbital position of the Sun (mean anomaly, ecliptic longitude with the
//! equation of center), the coordinate-frame transforms
//! ecliptic → equatorial → horizontal, sidereal time, and the
//! hour-angle/transit formulas used by the sunrise/sunset solver.
//!
//! Every function in this module works in radians; degree ↔ radian conversion
//! happens only at the public boundary of the crate. The day-number argument
//! `d` is days since J2000.0 as produced by [`crate::time::days_since_j2000`].

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::constants::{
    Degree, JulianDay, Meter, Radian, AU, DPI, ECCENTRICITY, J0, J2000, OBLIQUITY, PERIHELION,
    RADEG,
};

/// Position on the ecliptic plane (radians).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticCoord {
    pub longitude: Radian,
    pub latitude: Radian,
}

/// Position relative to Earth's equator (radians).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialCoord {
    pub right_ascension: Radian,
    pub declination: Radian,
}

/// Position relative to an observer's horizon (radians).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalCoord {
    pub azimuth: Radian,
    pub altitude: Radian,
}

/// Equatorial position of the Sun plus its distance from Earth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunCoordinates {
    pub right_ascension: Radian,
    pub declination: Radian,
    pub distance: Meter,
}

/// Mean anomaly of the Sun at `d` days since J2000.0.
pub fn solar_mean_anomaly(d: f64) -> Radian {
    RADEG * (357.5291 + 0.98560028 * d)
}

/// Ecliptic longitude of the Sun for a mean anomaly `m`.
pub fn ecliptic_longitude(m: Radian) -> Radian {
    // equation of center
    let c = RADEG * (1.9148 * m.sin() + 0.02 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin());

    m + c + PERIHELION + PI
}

/// Right ascension for ecliptic longitude `l` and latitude `b`.
pub fn right_ascension(l: Radian, b: Radian) -> Radian {
    (l.sin() * OBLIQUITY.cos() - b.tan() * OBLIQUITY.sin()).atan2(l.cos())
}

/// Declination for ecliptic longitude `l` and latitude `b`.
pub fn declination(l: Radian, b: Radian) -> Radian {
    (b.sin() * OBLIQUITY.cos() + b.cos() * OBLIQUITY.sin() * l.sin()).asin()
}

/// Transform an ecliptic position into the equatorial frame.
pub fn ecliptic_to_equatorial(ecliptic: &EclipticCoord) -> EquatorialCoord {
    EquatorialCoord {
        right_ascension: right_ascension(ecliptic.longitude, ecliptic.latitude),
        declination: declination(ecliptic.longitude, ecliptic.latitude),
    }
}

/// Azimuth (from south, positive westward) for hour angle `ha`, observer
/// latitude `phi` and declination `dec`.
pub fn azimuth(ha: Radian, phi: Radian, dec: Radian) -> Radian {
    ha.sin().atan2(ha.cos() * phi.sin() - dec.tan() * phi.cos())
}

/// Altitude above the horizon for hour angle `ha`, observer latitude `phi`
/// and declination `dec`.
pub fn altitude(ha: Radian, phi: Radian, dec: Radian) -> Radian {
    (phi.sin() * dec.sin() + phi.cos() * dec.cos() * ha.cos()).asin()
}

/// Horizontal position for hour angle `ha`, observer latitude `phi` and
/// declination `dec`.
pub fn horizontal_coords(ha: Radian, phi: Radian, dec: Radian) -> HorizontalCoord {
    HorizontalCoord {
        azimuth: azimuth(ha, phi, dec),
        altitude: altitude(ha, phi, dec),
    }
}

/// Local sidereal time at `d` days since J2000.0 and observer longitude
/// `lw` (radians west).
pub fn sidereal_time(d: f64, lw: Radian) -> Radian {
    RADEG * (280.16 + 360.985_623_5 * d) - lw
}

/// Atmospheric refraction correction for an apparent altitude `h`.
///
/// Formula 16.4 of "Astronomical Algorithms", 2nd edition, J. Meeus
/// (Willmann-Bell, 1998); h in degrees, result in arc minutes, both converted
/// to radians here. The formula only holds for non-negative altitudes — at
/// h = -0.08901179 its denominator vanishes — so `h` is clamped to zero first.
///
/// Provided for callers that want refraction-corrected altitudes; the
/// position and times entry points do not apply it.
pub fn astro_refraction(h: Radian) -> Radian {
    let h = h.max(0.0);
    0.0002967 / (h + 0.00312536 / (h + 0.08901179)).tan()
}

/// Equatorial coordinates and distance of the Sun at `d` days since J2000.0.
///
/// The Sun–Earth distance follows the Kepler ellipse
/// `AU·(1−e²)/(1+e·cos M)`.
pub fn sun_coords(d: f64) -> SunCoordinates {
    let m = solar_mean_anomaly(d);
    let l = ecliptic_longitude(m);

    SunCoordinates {
        right_ascension: right_ascension(l, 0.0),
        declination: declination(l, 0.0),
        distance: AU * (1.0 - ECCENTRICITY * ECCENTRICITY) / (1.0 + ECCENTRICITY * m.cos()),
    }
}

/// Number of the solar day cycle containing `d`, for observer longitude `lw`.
pub fn julian_cycle(d: f64, lw: Radian) -> f64 {
    (d - J0 - lw / DPI).round()
}

/// Approximate transit of the Sun over hour angle `ht`, as days since J2000.0.
pub fn approx_transit(ht: Radian, lw: Radian, n: f64) -> f64 {
    J0 + (ht + lw) / DPI + n
}

/// Julian date of the solar transit for an approximate transit `ds`.
pub fn solar_transit_j(ds: f64, m: Radian, l: Radian) -> JulianDay {
    J2000 + ds + 0.0053 * m.sin() - 0.0069 * (2.0 * l).sin()
}

/// Hour angle at which the Sun reaches altitude `h` for observer latitude
/// `phi` and declination `dec`.
///
/// NaN when the altitude is never reached at that latitude (polar day or
/// polar night); the NaN is deliberately not clamped and propagates into the
/// rise/set Julian dates, where it becomes a `None` instant.
pub fn hour_angle(h: Radian, phi: Radian, dec: Radian) -> Radian {
    ((h.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos())).acos()
}

/// Dip of the horizon for an observer `height` meters above it, in degrees.
pub fn observer_angle(height: Meter) -> Degree {
    -2.076 * height.sqrt() / 60.0
}

/// Julian date at which the Sun sets through altitude `h` (evening side).
pub fn get_set_j(
    h: Radian,
    lw: Radian,
    phi: Radian,
    dec: Radian,
    n: f64,
    m: Radian,
    l: Radian,
) -> JulianDay {
    let w = hour_angle(h, phi, dec);
    let a = approx_transit(w, lw, n);
    solar_transit_j(a, m, l)
}
