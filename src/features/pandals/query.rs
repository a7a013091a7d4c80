//! Translation of list query parameters into a store filter.

use crate::core::error::{AppError, Result};
use crate::features::pandals::dtos::ListPandalsQuery;
use crate::features::pandals::models::GeoPoint;
use crate::shared::constants::DEFAULT_SEARCH_RADIUS_METERS;

/// Store-side selection of pandal records
#[derive(Debug, Clone, PartialEq)]
pub enum PandalFilter {
    /// Every record, in no particular order
    All,
    /// Records within `max_distance_meters` of `center` on the sphere,
    /// nearest first
    NearSphere {
        center: GeoPoint,
        max_distance_meters: f64,
    },
}

/// Build the filter for `GET /pandals`.
///
/// `lng` and `lat` must come together and parse as finite numbers.
/// An unusable `radius` silently falls back to the default.
pub fn build_filter(query: &ListPandalsQuery) -> Result<PandalFilter> {
    let lng = present(&query.lng);
    let lat = present(&query.lat);

    let (lng, lat) = match (lng, lat) {
        (None, None) => return Ok(PandalFilter::All),
        (Some(lng), Some(lat)) => (lng, lat),
        _ => {
            return Err(AppError::BadRequest(
                "Both lng and lat query parameters are required for a geospatial search"
                    .to_string(),
            ))
        }
    };

    let (Some(lng), Some(lat)) = (parse_finite(lng), parse_finite(lat)) else {
        return Err(AppError::BadRequest(
            "Invalid lng or lat coordinates".to_string(),
        ));
    };

    // A negative or non-finite radius can never select anything useful,
    // so it gets the same leniency as an unparsable one
    let max_distance_meters = present(&query.radius)
        .and_then(parse_finite)
        .filter(|r| *r >= 0.0)
        .unwrap_or(DEFAULT_SEARCH_RADIUS_METERS);

    Ok(PandalFilter::NearSphere {
        center: GeoPoint::new(lng, lat),
        max_distance_meters,
    })
}

/// Empty query values count as absent; anything else is parsed as sent
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn parse_finite(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}
