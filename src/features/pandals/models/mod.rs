mod geo_point;
mod pandal;

pub use geo_point::{GeoJsonType, GeoPoint};
pub use pandal::{InsertAck, Pandal, PandalRow};
