use async_trait::async_trait;
use futures::{stream, StreamExt};
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::pandals::models::{InsertAck, Pandal, PandalRow};
use crate::features::pandals::query::PandalFilter;
use crate::modules::store::{ensure_in_range, PandalCursor, PandalStore};
use crate::shared::constants::LOCATION_INDEX_NAME;
use crate::shared::deadline::Deadline;

const INSERT_SQL: &str = r#"
    INSERT INTO pandals (
        id, name, description, area, theme, location,
        images, rating_avg, rating_count, created_at
    )
    VALUES (
        $1, $2, $3, $4, $5,
        ST_SetSRID(ST_MakePoint($6, $7), 4326)::geography,
        $8, $9, $10, $11
    )
    RETURNING id
"#;

const SELECT_ALL_SQL: &str = r#"
    SELECT
        id, name, description, area, theme,
        ST_X(location::geometry) AS lng,
        ST_Y(location::geometry) AS lat,
        images, rating_avg, rating_count, created_at
    FROM pandals
"#;

// `false` selects sphere (not spheroid) math for both predicates
const SELECT_NEAR_SQL: &str = r#"
    SELECT
        id, name, description, area, theme,
        ST_X(location::geometry) AS lng,
        ST_Y(location::geometry) AS lat,
        images, rating_avg, rating_count, created_at
    FROM pandals
    WHERE ST_DWithin(
        location,
        ST_SetSRID(ST_MakePoint($1, $2), 4326)::geography,
        $3,
        false
    )
    ORDER BY ST_Distance(
        location,
        ST_SetSRID(ST_MakePoint($1, $2), 4326)::geography,
        false
    ) ASC
"#;

/// PostgreSQL + PostGIS implementation of [`PandalStore`]
pub struct PgPandalStore {
    pool: PgPool,
}

impl PgPandalStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PandalStore for PgPandalStore {
    async fn ensure_location_index(&self, deadline: Deadline) -> Result<String> {
        // `IF NOT EXISTS` keeps the bootstrap idempotent across restarts
        let sql = format!(
            "CREATE INDEX IF NOT EXISTS {} ON pandals USING GIST (location)",
            LOCATION_INDEX_NAME
        );

        deadline
            .run(async {
                sqlx::query(&sql)
                    .execute(&self.pool)
                    .await
                    .map_err(AppError::Database)
            })
            .await?;

        Ok(LOCATION_INDEX_NAME.to_string())
    }

    async fn insert(&self, pandal: &Pandal, deadline: Deadline) -> Result<InsertAck> {
        ensure_in_range(&pandal.location)?;

        let inserted_id = deadline
            .run(async {
                sqlx::query_scalar::<_, Uuid>(INSERT_SQL)
                    .bind(pandal.id)
                    .bind(&pandal.name)
                    .bind(&pandal.description)
                    .bind(&pandal.area)
                    .bind(&pandal.theme)
                    .bind(pandal.location.lng())
                    .bind(pandal.location.lat())
                    .bind(&pandal.images)
                    .bind(pandal.rating_avg)
                    .bind(pandal.rating_count)
                    .bind(pandal.created_at)
                    .fetch_one(&self.pool)
                    .await
                    .map_err(|e| {
                        tracing::error!("Failed to insert pandal: {:?}", e);
                        AppError::Database(e)
                    })
            })
            .await?;

        Ok(InsertAck { inserted_id })
    }

    fn find(&self, filter: &PandalFilter, deadline: Deadline) -> PandalCursor<'_> {
        if let PandalFilter::NearSphere { center, .. } = filter {
            if let Err(e) = ensure_in_range(center) {
                return PandalCursor::new(stream::once(async move { Err(e) }).boxed(), deadline);
            }
        }

        let rows = match filter {
            PandalFilter::All => sqlx::query_as::<_, PandalRow>(SELECT_ALL_SQL).fetch(&self.pool),
            PandalFilter::NearSphere {
                center,
                max_distance_meters,
            } => sqlx::query_as::<_, PandalRow>(SELECT_NEAR_SQL)
                .bind(center.lng())
                .bind(center.lat())
                .bind(*max_distance_meters)
                .fetch(&self.pool),
        };

        let rows = rows
            .map(|row| row.map(Pandal::from).map_err(AppError::Database))
            .boxed();

        PandalCursor::new(rows, deadline)
    }
}
