//! Property search and lookup handlers.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};

use rentwise_database::SearchParams;
use rentwise_entity::property::PropertyRow;

use crate::error::ApiError;
use crate::extractors::{parse_id, query_rejection};
use crate::state::AppState;

/// GET /api/properties
pub async fn search_properties(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<PropertyRow>>, ApiError> {
    let Query(params) = params.map_err(query_rejection)?;
    let rows = state.property_service.search(&params).await?;
    Ok(Json(rows))
}

/// GET /api/properties/{id}
pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PropertyRow>, ApiError> {
    let id = parse_id(&id)?;
    let row = state.property_service.get(id).await?;
    Ok(Json(row))
}
