use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::pandals::dtos::{CreatePandalDto, ListPandalsQuery, PandalResponseDto};
use crate::features::pandals::models::InsertAck;
use crate::features::pandals::query::build_filter;
use crate::features::pandals::services::PandalService;
use crate::shared::types::{ApiResponse, ErrorResponse};

/// Create a pandal
///
/// The server assigns the id and defaults `images` and `createdAt`.
#[utoipa::path(
    post,
    path = "/pandals",
    request_body = CreatePandalDto,
    responses(
        (status = 201, description = "Pandal inserted", body = ApiResponse<InsertAck>),
        (status = 400, description = "Malformed or invalid body", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "pandals"
)]
pub async fn create_pandal(
    State(service): State<Arc<PandalService>>,
    AppJson(dto): AppJson<CreatePandalDto>,
) -> Result<(StatusCode, Json<ApiResponse<InsertAck>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let ack = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(ack, "Pandal inserted")),
    ))
}

/// List pandals
///
/// With `lng` and `lat`, only pandals within `radius` meters are returned,
/// nearest first. Without them every pandal is returned in no set order.
#[utoipa::path(
    get,
    path = "/pandals",
    params(ListPandalsQuery),
    responses(
        (status = 200, description = "List of pandals", body = ApiResponse<Vec<PandalResponseDto>>),
        (status = 400, description = "Invalid or mismatched coordinates", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "pandals"
)]
pub async fn list_pandals(
    State(service): State<Arc<PandalService>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ApiResponse<Vec<PandalResponseDto>>>> {
    let filter = build_filter(&ListPandalsQuery::from_pairs(pairs))?;
    let pandals = service.list(&filter).await?;
    Ok(Json(ApiResponse::success(pandals)))
}
