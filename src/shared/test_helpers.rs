use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum_test::TestServer;
use futures::{stream, StreamExt};

use crate::core::error::{AppError, Result};
use crate::features::pandals::models::{GeoPoint, InsertAck, Pandal};
use crate::features::pandals::query::PandalFilter;
use crate::features::pandals::{routes, PandalService};
use crate::modules::store::{ensure_in_range, PandalCursor, PandalStore};
use crate::shared::constants::{EARTH_RADIUS_METERS, LOCATION_INDEX_NAME};
use crate::shared::deadline::Deadline;

/// Great-circle distance between two points in meters (haversine)
pub fn haversine_distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1_rad = a.lat().to_radians();
    let lat2_rad = b.lat().to_radians();
    let delta_lat = (b.lat() - a.lat()).to_radians();
    let delta_lon = (b.lng() - a.lng()).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();

    EARTH_RADIUS_METERS * c
}

/// In-memory store for HTTP tests.
///
/// Applies the same coordinate range check as `PgPandalStore` and filters
/// and orders by haversine distance, which agrees with PostGIS sphere
/// math to well within the radii used in tests. The SQL itself is covered
/// by the ignored tests in `modules/store/postgres.rs`.
#[derive(Default)]
pub struct MemoryPandalStore {
    records: Mutex<Vec<Pandal>>,
    indexes: Mutex<Vec<String>>,
}

impl MemoryPandalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<Pandal> {
        self.records.lock().unwrap().clone()
    }

    pub fn indexes(&self) -> Vec<String> {
        self.indexes.lock().unwrap().clone()
    }
}

#[async_trait]
impl PandalStore for MemoryPandalStore {
    async fn ensure_location_index(&self, _deadline: Deadline) -> Result<String> {
        let mut indexes = self.indexes.lock().unwrap();
        if !indexes.iter().any(|name| name == LOCATION_INDEX_NAME) {
            indexes.push(LOCATION_INDEX_NAME.to_string());
        }
        Ok(LOCATION_INDEX_NAME.to_string())
    }

    async fn insert(&self, pandal: &Pandal, _deadline: Deadline) -> Result<InsertAck> {
        ensure_in_range(&pandal.location)?;

        let mut records = self.records.lock().unwrap();
        if records.iter().any(|p| p.id == pandal.id) {
            return Err(AppError::Store("duplicate key value".to_string()));
        }
        records.push(pandal.clone());

        Ok(InsertAck {
            inserted_id: pandal.id,
        })
    }

    fn find(&self, filter: &PandalFilter, deadline: Deadline) -> PandalCursor<'_> {
        if let PandalFilter::NearSphere { center, .. } = filter {
            if let Err(e) = ensure_in_range(center) {
                return PandalCursor::new(stream::once(async move { Err(e) }).boxed(), deadline);
            }
        }

        let records = self.records();
        let matched: Vec<Pandal> = match filter {
            PandalFilter::All => records,
            PandalFilter::NearSphere {
                center,
                max_distance_meters,
            } => {
                let mut hits: Vec<(f64, Pandal)> = records
                    .into_iter()
                    .map(|p| (haversine_distance(center, &p.location), p))
                    .filter(|(distance, _)| *distance <= *max_distance_meters)
                    .collect();
                hits.sort_by(|a, b| a.0.total_cmp(&b.0));
                hits.into_iter().map(|(_, p)| p).collect()
            }
        };

        PandalCursor::new(stream::iter(matched.into_iter().map(Ok)).boxed(), deadline)
    }
}

/// Store whose every operation fails
pub struct FailingPandalStore;

#[async_trait]
impl PandalStore for FailingPandalStore {
    async fn ensure_location_index(&self, _deadline: Deadline) -> Result<String> {
        Err(AppError::Store("connection refused".to_string()))
    }

    async fn insert(&self, _pandal: &Pandal, _deadline: Deadline) -> Result<InsertAck> {
        Err(AppError::Store("connection refused".to_string()))
    }

    fn find(&self, _filter: &PandalFilter, deadline: Deadline) -> PandalCursor<'_> {
        let rows = stream::iter(vec![Err(AppError::Store("cursor lost".to_string()))]);
        PandalCursor::new(rows.boxed(), deadline)
    }
}

/// Store whose operations never complete
pub struct StalledPandalStore;

#[async_trait]
impl PandalStore for StalledPandalStore {
    async fn ensure_location_index(&self, deadline: Deadline) -> Result<String> {
        deadline.run(std::future::pending()).await
    }

    async fn insert(&self, _pandal: &Pandal, deadline: Deadline) -> Result<InsertAck> {
        deadline.run(std::future::pending()).await
    }

    fn find(&self, _filter: &PandalFilter, deadline: Deadline) -> PandalCursor<'_> {
        PandalCursor::new(stream::pending().boxed(), deadline)
    }
}

/// Test server over the pandal routes backed by `store`
pub fn pandal_server(store: Arc<dyn PandalStore>, operation_timeout: Duration) -> TestServer {
    let service = Arc::new(PandalService::new(store, operation_timeout));
    TestServer::new(routes::routes(service)).expect("failed to start test server")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_distance() {
        // Kolkata to Delhi, roughly 1300km great-circle
        let kolkata = GeoPoint::new(88.36, 22.57);
        let delhi = GeoPoint::new(77.20, 28.61);

        let distance = haversine_distance(&kolkata, &delhi);
        assert!(distance > 1_250_000.0 && distance < 1_350_000.0);
    }

    #[test]
    fn test_haversine_same_point() {
        let p = GeoPoint::new(88.36, 22.57);
        assert!(haversine_distance(&p, &p) < 1.0);
    }
}
