//! Handlers for fridge-layout CRUD and active-layout resolution.
//!
//! A household always has at least one layout: listing auto-creates the
//! default when none exist, and deletion of the last remaining layout is
//! rejected.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use cellar_core::error::CoreError;
use cellar_core::layout::{
    select_active_layout, validate_layout_config, DEFAULT_COLUMNS, DEFAULT_LAYOUT_NAME,
    DEFAULT_SHELVES,
};
use cellar_core::types::DbId;
use cellar_db::models::layout::{CreateFridgeLayout, FridgeLayout, UpdateFridgeLayout};
use cellar_db::repositories::LayoutRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Fetch the household's layouts, creating the default if none exist.
async fn layouts_with_default(state: &AppState) -> AppResult<Vec<FridgeLayout>> {
    let layouts = LayoutRepo::list_for_household(&state.pool, state.household()).await?;
    if !layouts.is_empty() {
        return Ok(layouts);
    }

    let created = LayoutRepo::create(
        &state.pool,
        state.household(),
        &CreateFridgeLayout {
            name: DEFAULT_LAYOUT_NAME.to_string(),
            shelves: DEFAULT_SHELVES,
            columns: DEFAULT_COLUMNS,
        },
    )
    .await?;

    tracing::info!(
        layout_id = created.id,
        household = %created.household,
        "Created default fridge layout for empty household",
    );

    Ok(vec![created])
}

/// GET /api/v1/cellar/layouts
///
/// List the household's layouts. Auto-creates the default layout when the
/// household has none, so the response is never empty.
pub async fn list_layouts(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let layouts = layouts_with_default(&state).await?;

    Ok(Json(DataResponse { data: layouts }))
}

/// POST /api/v1/cellar/layouts
///
/// Create a new fridge layout.
pub async fn create_layout(
    State(state): State<AppState>,
    Json(input): Json<CreateFridgeLayout>,
) -> AppResult<impl IntoResponse> {
    validate_layout_config(&input.name, input.shelves, input.columns)?;

    let layout = LayoutRepo::create(&state.pool, state.household(), &input).await?;

    tracing::info!(
        layout_id = layout.id,
        name = %layout.name,
        shelves = layout.shelves,
        columns = layout.columns,
        "Fridge layout created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: layout })))
}

#[derive(Debug, Deserialize)]
pub struct ActiveLayoutQuery {
    /// The client's stored active-layout pointer, if it has one.
    pub stored_id: Option<DbId>,
}

/// GET /api/v1/cellar/layouts/active?stored_id=
///
/// Resolve the client's stored active-layout pointer: the stored layout if
/// it still exists, otherwise the first available one. The pointer itself
/// stays client-local; this endpoint only resolves it.
pub async fn resolve_active_layout(
    State(state): State<AppState>,
    Query(query): Query<ActiveLayoutQuery>,
) -> AppResult<impl IntoResponse> {
    let layouts = layouts_with_default(&state).await?;

    let ids: Vec<DbId> = layouts.iter().map(|l| l.id).collect();
    let active_id = select_active_layout(&ids, query.stored_id);

    let layout = layouts
        .into_iter()
        .find(|l| Some(l.id) == active_id)
        .ok_or_else(|| AppError::InternalError("No layout available for household".to_string()))?;

    Ok(Json(DataResponse { data: layout }))
}

/// GET /api/v1/cellar/layouts/{id}
///
/// Retrieve a single layout by ID.
pub async fn get_layout(
    State(state): State<AppState>,
    Path(layout_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let layout = LayoutRepo::find_by_id(&state.pool, layout_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FridgeLayout",
            id: layout_id,
        }))?;

    Ok(Json(DataResponse { data: layout }))
}

/// PUT /api/v1/cellar/layouts/{id}
///
/// Partially update a layout. The merged result of the existing record and
/// the patch is validated before anything is written.
pub async fn update_layout(
    State(state): State<AppState>,
    Path(layout_id): Path<DbId>,
    Json(input): Json<UpdateFridgeLayout>,
) -> AppResult<impl IntoResponse> {
    let existing = LayoutRepo::find_by_id(&state.pool, layout_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FridgeLayout",
            id: layout_id,
        }))?;

    let name = input.name.as_deref().unwrap_or(&existing.name);
    let shelves = input.shelves.unwrap_or(existing.shelves);
    let columns = input.columns.unwrap_or(existing.columns);
    validate_layout_config(name, shelves, columns)?;

    let layout = LayoutRepo::update(&state.pool, layout_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FridgeLayout",
            id: layout_id,
        }))?;

    tracing::info!(layout_id, "Fridge layout updated");

    Ok(Json(DataResponse { data: layout }))
}

/// DELETE /api/v1/cellar/layouts/{id}
///
/// Delete a layout. Rejected when it is the household's last remaining
/// layout, an invariant the UI depends on.
pub async fn delete_layout(
    State(state): State<AppState>,
    Path(layout_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let layout = LayoutRepo::find_by_id(&state.pool, layout_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FridgeLayout",
            id: layout_id,
        }))?;

    let count = LayoutRepo::count_for_household(&state.pool, &layout.household).await?;
    if count <= 1 {
        return Err(AppError::Core(CoreError::Conflict(
            "Cannot delete the last remaining layout".to_string(),
        )));
    }

    let deleted = LayoutRepo::delete(&state.pool, layout_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "FridgeLayout",
            id: layout_id,
        }));
    }

    tracing::info!(layout_id, "Fridge layout deleted");

    Ok(StatusCode::NO_CONTENT)
}
