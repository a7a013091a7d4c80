use async_trait::async_trait;
use futures::stream::BoxStream;
use futures::StreamExt;

use crate::core::error::{AppError, Result};
use crate::features::pandals::models::{GeoPoint, InsertAck, Pandal};
use crate::features::pandals::query::PandalFilter;
use crate::shared::deadline::Deadline;

/// Access to the single collection of pandal records.
///
/// Every call is bounded by the caller's [`Deadline`]. Store errors are
/// returned unchanged.
#[async_trait]
pub trait PandalStore: Send + Sync {
    /// Idempotently create the spherical index over `location`; returns its name
    async fn ensure_location_index(&self, deadline: Deadline) -> Result<String>;

    async fn insert(&self, pandal: &Pandal, deadline: Deadline) -> Result<InsertAck>;

    /// Open a cursor over records matching `filter`
    fn find(&self, filter: &PandalFilter, deadline: Deadline) -> PandalCursor<'_>;
}

/// Reject points outside the longitude/latitude range.
///
/// PostGIS wraps such points into range when casting to `geography`, so
/// stores must check before handing them over.
pub fn ensure_in_range(point: &GeoPoint) -> Result<()> {
    if point.is_in_range() {
        return Ok(());
    }
    Err(AppError::Store(format!(
        "Coordinate values are out of range [-180 -90, 180 90]: [{} {}]",
        point.lng(),
        point.lat()
    )))
}

/// Forward-only cursor over a find result.
///
/// Dropping the cursor closes it.
pub struct PandalCursor<'a> {
    rows: BoxStream<'a, Result<Pandal>>,
    deadline: Deadline,
}

impl<'a> PandalCursor<'a> {
    pub fn new(rows: BoxStream<'a, Result<Pandal>>, deadline: Deadline) -> Self {
        Self { rows, deadline }
    }

    /// Advance the cursor; `Ok(None)` once exhausted
    pub async fn try_next(&mut self) -> Result<Option<Pandal>> {
        let rows = &mut self.rows;
        self.deadline
            .run(async move { rows.next().await.transpose() })
            .await
    }
}
