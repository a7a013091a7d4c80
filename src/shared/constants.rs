/// Name of the spherical index over `pandals.location`
pub const LOCATION_INDEX_NAME: &str = "location_2dsphere_index";

/// Search radius used when `radius` is absent or unusable (meters)
pub const DEFAULT_SEARCH_RADIUS_METERS: f64 = 5000.0;

/// Earth radius used for spherical distances (meters)
#[cfg(test)]
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;
