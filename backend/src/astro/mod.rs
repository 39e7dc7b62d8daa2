//! Astronomical geometry core.
//!
//! Pure, synchronous functions over explicit inputs:
//!
//! - [`time_frame`]: Julian Date and sidereal time
//! - [`transforms`]: equatorial, galactic and horizontal frames
//! - [`sky_geometry`]: galactic-plane distance from zenith and horizon crossings
//! - [`angles`]: shortest-arc helpers shared by the above and the scorer

pub mod angles;
pub mod sky_geometry;
pub mod time_frame;
pub mod transforms;

pub use sky_geometry::{
    find_galactic_plane_horizon_crossings_az, galactic_plane_distance_from_zenith_deg,
    GeometrySettings, SkyGeometryModel,
};
pub use time_frame::{
    days_since_j2000, greenwich_sidereal_time_deg, julian_date, local_sidereal_time_deg,
};
pub use transforms::{
    equatorial_to_galactic, equatorial_to_horizontal, equatorial_to_unit_vector,
    galactic_to_equatorial, galactic_to_horizontal,
};
