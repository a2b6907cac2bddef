//! Handlers for wine record CRUD.
//!
//! The placement service reads wine summaries from these records; the
//! records themselves are managed here.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use cellar_core::error::CoreError;
use cellar_core::types::DbId;
use cellar_db::models::wine::{CreateWine, UpdateWine};
use cellar_db::repositories::WineRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct WineListQuery {
    /// Optional status filter (`in_cellar` or `consumed`).
    pub status: Option<String>,
}

/// GET /api/v1/wines?status=
///
/// List the household's wines, optionally filtered by status.
pub async fn list_wines(
    State(state): State<AppState>,
    Query(query): Query<WineListQuery>,
) -> AppResult<impl IntoResponse> {
    let wines =
        WineRepo::list_for_household(&state.pool, state.household(), query.status.as_deref())
            .await?;

    Ok(Json(DataResponse { data: wines }))
}

/// POST /api/v1/wines
///
/// Create a new wine record.
pub async fn create_wine(
    State(state): State<AppState>,
    Json(input): Json<CreateWine>,
) -> AppResult<impl IntoResponse> {
    if input.wine_name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "wine_name must not be empty".to_string(),
        )));
    }

    let wine = WineRepo::create(&state.pool, state.household(), &input).await?;

    tracing::info!(wine_id = wine.id, wine_name = %wine.wine_name, "Wine created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: wine })))
}

/// GET /api/v1/wines/{id}
///
/// Retrieve a single wine by ID.
pub async fn get_wine(
    State(state): State<AppState>,
    Path(wine_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let wine = WineRepo::find_by_id(&state.pool, wine_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Wine",
            id: wine_id,
        }))?;

    Ok(Json(DataResponse { data: wine }))
}

/// PUT /api/v1/wines/{id}
///
/// Partially update a wine record.
pub async fn update_wine(
    State(state): State<AppState>,
    Path(wine_id): Path<DbId>,
    Json(input): Json<UpdateWine>,
) -> AppResult<impl IntoResponse> {
    if let Some(name) = &input.wine_name {
        if name.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "wine_name must not be empty".to_string(),
            )));
        }
    }

    let wine = WineRepo::update(&state.pool, wine_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Wine",
            id: wine_id,
        }))?;

    tracing::info!(wine_id, "Wine updated");

    Ok(Json(DataResponse { data: wine }))
}
