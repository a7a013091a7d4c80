use utoipa::{Modify, OpenApi};

use crate::features::pandals::{dtos as pandals_dtos, handlers as pandals_handlers, models};
use crate::shared::types::{ApiResponse, ErrorResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Pandals
        pandals_handlers::create_pandal,
        pandals_handlers::list_pandals,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            // Pandals
            models::GeoJsonType,
            models::GeoPoint,
            models::InsertAck,
            pandals_dtos::CreatePandalDto,
            pandals_dtos::PandalResponseDto,
            ApiResponse<models::InsertAck>,
            ApiResponse<Vec<pandals_dtos::PandalResponseDto>>,
        )
    ),
    tags(
        (name = "pandals", description = "Festival pandal catalog and proximity search"),
    ),
    info(
        title = "Pandal Hopping API",
        version = "0.1.0",
        description = "Catalog of festival pandals with proximity search",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_pandal_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/pandals"));
    }

    #[test]
    fn test_info_modifier() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "T".to_string(),
            version: "9".to_string(),
            description: "D".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "T");
        assert_eq!(doc.info.version, "9");
        assert_eq!(doc.info.description.as_deref(), Some("D"));
    }
}
