//! Store adapter for pandal records
//!
//! `PandalStore` is the seam between the feature layer and persistence.
//! `PgPandalStore` backs it with PostgreSQL + PostGIS.

mod pandal_store;
mod postgres;

pub use pandal_store::{ensure_in_range, PandalCursor, PandalStore};
pub use postgres::PgPandalStore;
