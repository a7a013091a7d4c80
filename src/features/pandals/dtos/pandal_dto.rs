use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::pandals::models::GeoPoint;

/// Request DTO for creating a pandal
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePandalDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub area: String,

    #[serde(default)]
    pub theme: String,

    /// Coordinates are not range-checked here; the store rejects invalid points
    pub location: GeoPoint,

    /// Image URLs (default: empty)
    pub images: Option<Vec<String>>,

    #[serde(default)]
    pub rating_avg: f64,

    #[serde(default)]
    #[validate(range(min = 0, message = "ratingCount must not be negative"))]
    pub rating_count: i64,

    /// Creation instant (default: server time)
    pub created_at: Option<DateTime<Utc>>,
}

/// Query parameters for listing pandals, optionally by proximity.
///
/// Values are kept as raw strings so that parse failures can be
/// reported (coordinates) or tolerated (radius).
#[derive(Debug, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPandalsQuery {
    /// Longitude of the search center; requires `lat`
    #[param(example = "88.3639")]
    pub lng: Option<String>,

    /// Latitude of the search center; requires `lng`
    #[param(example = "22.5726")]
    pub lat: Option<String>,

    /// Search radius in meters (default: 5000)
    #[param(example = "5000")]
    pub radius: Option<String>,
}

impl ListPandalsQuery {
    /// Pick the known keys out of raw query pairs; a repeated key keeps
    /// its first value
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "lng" => &mut query.lng,
                "lat" => &mut query.lat,
                "radius" => &mut query.radius,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

/// Response DTO for pandal data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PandalResponseDto {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub area: String,
    pub theme: String,
    pub location: GeoPoint,
    pub images: Vec<String>,
    pub rating_avg: f64,
    pub rating_count: i64,
    pub created_at: DateTime<Utc>,
}
