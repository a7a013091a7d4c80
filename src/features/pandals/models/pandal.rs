use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::pandals::dtos::{CreatePandalDto, PandalResponseDto};
use crate::features::pandals::models::GeoPoint;

/// Catalog record for a festival installation
#[derive(Debug, Clone, PartialEq)]
pub struct Pandal {
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

/// Database row; `location` is read back as separate lng/lat columns
#[derive(Debug, Clone, FromRow)]
pub struct PandalRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub area: String,
    pub theme: String,
    pub lng: f64,
    pub lat: f64,
    pub images: Vec<String>,
    pub rating_avg: f64,
    pub rating_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Store acknowledgement for a successful insert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub inserted_id: Uuid,
}

impl Pandal {
    /// Build a storable record from a client candidate.
    ///
    /// Assigns a fresh id, defaults `images` to empty and a missing or
    /// zero-valued `created_at` to `now`. Everything else is copied as is.
    pub fn assemble(dto: CreatePandalDto, now: DateTime<Utc>) -> Self {
        let created_at = dto
            .created_at
            .filter(|ts| !is_zero_instant(ts))
            .unwrap_or(now);

        Self {
            id: Uuid::now_v7(),
            name: dto.name,
            description: dto.description,
            area: dto.area,
            theme: dto.theme,
            location: dto.location,
            images: dto.images.unwrap_or_default(),
            rating_avg: dto.rating_avg,
            rating_count: dto.rating_count,
            created_at,
        }
    }
}

/// `0001-01-01T00:00:00Z` and the Unix epoch both mean "unset"
fn is_zero_instant(ts: &DateTime<Utc>) -> bool {
    let year_one = Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0).single();
    Some(*ts) == year_one || Some(*ts) == DateTime::from_timestamp(0, 0)
}

impl From<PandalRow> for Pandal {
    fn from(row: PandalRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            area: row.area,
            theme: row.theme,
            location: GeoPoint::new(row.lng, row.lat),
            images: row.images,
            rating_avg: row.rating_avg,
            rating_count: row.rating_count,
            created_at: row.created_at,
        }
    }
}

impl From<Pandal> for PandalResponseDto {
    fn from(p: Pandal) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            area: p.area,
            theme: p.theme,
            location: p.location,
            images: p.images,
            rating_avg: p.rating_avg,
            rating_count: p.rating_count,
            created_at: p.created_at,
        }
    }
}
