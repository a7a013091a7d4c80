use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// GeoJSON geometry type; only points are stored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum GeoJsonType {
    #[default]
    Point,
}

/// GeoJSON point literal `{ "type": "Point", "coordinates": [lng, lat] }`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeoPoint {
    #[serde(rename = "type")]
    pub kind: GeoJsonType,
    /// `[longitude, latitude]`, in that order
    #[schema(value_type = Vec<f64>, example = json!([88.3639, 22.5726]))]
    pub coordinates: [f64; 2],
}

impl GeoPoint {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self {
            kind: GeoJsonType::Point,
            coordinates: [lng, lat],
        }
    }

    pub fn lng(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn lat(&self) -> f64 {
        self.coordinates[1]
    }

    /// Whether the point lies in `[-180, 180] x [-90, 90]`
    pub fn is_in_range(&self) -> bool {
        (-180.0..=180.0).contains(&self.lng()) && (-90.0..=90.0).contains(&self.lat())
    }
}
