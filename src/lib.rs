//! Low-precision solar geometry: the Sun's apparent position and the solar
//! time events of a day (sunrise, sunset, dawn, dusk, golden hour, …) for
//! scalar or array-valued instants and locations.

pub mod broadcast;
pub mod celestial;
pub mod constants;
pub mod position;
pub mod sunpath_errors;
pub mod time;
pub mod times;

pub use broadcast::ScalarOrArray;
pub use celestial::{
    astro_refraction, ecliptic_to_equatorial, horizontal_coords, sun_coords, EclipticCoord,
    EquatorialCoord, HorizontalCoord, SunCoordinates,
};
pub use position::{get_position, SunPosition};
pub use sunpath_errors::SunpathError;
pub use time::{
    from_julian, to_days_since_j2000, to_julian, to_milliseconds, InstantSpec,
};
pub use times::{get_times, get_times_default, SunTimes, TimeDefinition, DEFAULT_TIMES};
