//! Pandal catalog feature.
//!
//! Stores festival installations and answers proximity queries over
//! their locations.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/pandals` | Create a pandal |
//! | GET | `/pandals?lng=&lat=&radius=` | List pandals, optionally within `radius` meters |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod query;
pub mod routes;
pub mod services;

pub use services::PandalService;
