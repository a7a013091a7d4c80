use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::pandals::handlers;
use crate::features::pandals::services::PandalService;

/// Create routes for the pandals feature
pub fn routes(service: Arc<PandalService>) -> Router {
    Router::new()
        .route(
            "/pandals",
            post(handlers::create_pandal).get(handlers::list_pandals),
        )
        .with_state(service)
}
