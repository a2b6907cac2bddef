//! Handlers for the placement service and occupancy view.
//!
//! Placement is the only surface that mutates `cellar_slots`. Collisions
//! are pre-checked for a precise early error, but the authoritative signal
//! is the `uq_cellar_slots_position` unique constraint: a violation slipping
//! past the pre-check (two clients racing for one slot) is converted into
//! the same `SlotOccupied` error instead of a generic 500.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use cellar_core::error::CoreError;
use cellar_core::occupancy::build_grid;
use cellar_core::slot::SlotAddress;
use cellar_core::types::DbId;
use cellar_core::wine::STATUS_IN_CELLAR;
use cellar_db::models::layout::FridgeLayout;
use cellar_db::models::slot::{CreateCellarSlot, MoveCellarSlot};
use cellar_db::repositories::{LayoutRepo, SlotRepo, WineRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn find_fridge(state: &AppState, fridge_id: DbId) -> AppResult<FridgeLayout> {
    LayoutRepo::find_by_id(&state.pool, fridge_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FridgeLayout",
            id: fridge_id,
        }))
}

fn check_bounds(address: SlotAddress, layout: &FridgeLayout) -> AppResult<()> {
    if address.is_within(layout.shelves, layout.columns) {
        return Ok(());
    }
    Err(AppError::Core(CoreError::Validation(format!(
        "{address} is outside the layout bounds ({} shelves x {} columns)",
        layout.shelves, layout.columns
    ))))
}

/// Convert a unique-constraint violation from a slot insert into its domain
/// error; anything else passes through as a database error.
fn classify_placement_error(err: sqlx::Error, address: SlotAddress, wine_id: DbId) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505") {
            match db_err.constraint() {
                Some("uq_cellar_slots_position") => {
                    return AppError::Core(CoreError::SlotOccupied { address });
                }
                Some("uq_cellar_slots_wine") => {
                    return AppError::Core(CoreError::Conflict(format!(
                        "Wine {wine_id} already has a cellar assignment"
                    )));
                }
                _ => {}
            }
        }
    }
    AppError::Database(err)
}

// ---------------------------------------------------------------------------
// Occupancy (read path)
// ---------------------------------------------------------------------------

/// GET /api/v1/cellar/fridges/{id}/occupancy
///
/// The full occupancy grid for one fridge: every slot address annotated
/// with its occupant, plus total/occupied counts and the percentage.
pub async fn fridge_occupancy(
    State(state): State<AppState>,
    Path(fridge_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let layout = find_fridge(&state, fridge_id).await?;

    let rows = SlotRepo::list_for_fridge(&state.pool, fridge_id).await?;
    let assignments = rows
        .into_iter()
        .map(|row| row.into_parts())
        .collect::<Result<Vec<_>, _>>()?;

    let grid = build_grid(layout.shelves, layout.columns, assignments);

    Ok(Json(DataResponse { data: grid }))
}

/// GET /api/v1/cellar/fridges/{id}/wines
///
/// All assignments in a fridge joined with wine display attributes.
pub async fn list_fridge_wines(
    State(state): State<AppState>,
    Path(fridge_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    find_fridge(&state, fridge_id).await?;

    let slots = SlotRepo::list_for_fridge(&state.pool, fridge_id).await?;

    Ok(Json(DataResponse { data: slots }))
}

/// GET /api/v1/cellar/wines/unassigned
///
/// In-cellar wines with no current slot assignment.
pub async fn list_unassigned_wines(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let wines = SlotRepo::list_unassigned_wines(&state.pool, state.household()).await?;

    Ok(Json(DataResponse { data: wines }))
}

// ---------------------------------------------------------------------------
// Placement (write path)
// ---------------------------------------------------------------------------

/// POST /api/v1/cellar/slots
///
/// Assign a wine to a slot. Fails with 409 `SLOT_OCCUPIED` naming the exact
/// address when the target already holds a wine; no silent overwrite.
pub async fn assign_slot(
    State(state): State<AppState>,
    Json(input): Json<CreateCellarSlot>,
) -> AppResult<impl IntoResponse> {
    let wine = WineRepo::find_by_id(&state.pool, input.wine_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Wine",
            id: input.wine_id,
        }))?;
    if wine.status != STATUS_IN_CELLAR {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Wine {} has status '{}' and cannot be placed",
            wine.id, wine.status
        ))));
    }

    let layout = find_fridge(&state, input.fridge_id).await?;
    let address = input.address();
    check_bounds(address, &layout)?;

    // Early exit with a precise error; the unique constraint still backs
    // this up if another writer gets there first.
    if let Some(occupant) = SlotRepo::find_at_address(&state.pool, input.fridge_id, address, None).await? {
        tracing::debug!(
            fridge_id = input.fridge_id,
            occupant_wine = occupant.wine_id,
            slot = %address,
            "Assignment rejected, slot occupied",
        );
        return Err(AppError::Core(CoreError::SlotOccupied { address }));
    }

    let slot = SlotRepo::insert(&state.pool, state.household(), &input)
        .await
        .map_err(|err| classify_placement_error(err, address, input.wine_id))?;

    tracing::info!(
        slot_id = slot.id,
        wine_id = slot.wine_id,
        fridge_id = slot.fridge_id,
        slot = %address,
        "Wine assigned to slot",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: slot })))
}

/// DELETE /api/v1/cellar/slots/{id}
///
/// Remove an assignment. Idempotent: removing an id that no longer exists
/// is a no-op and still returns 204.
pub async fn remove_slot(
    State(state): State<AppState>,
    Path(slot_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = SlotRepo::delete(&state.pool, slot_id).await?;

    if deleted {
        tracing::info!(slot_id, "Slot assignment removed");
    } else {
        tracing::debug!(slot_id, "Slot assignment already absent");
    }

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/cellar/slots/{id}/move
///
/// Move an assignment to a new address. The move runs in a single
/// transaction, so a destination collision leaves the wine at its original
/// slot. The collision check excludes the assignment's own current slot so
/// a wine can move between depths of its own cell.
pub async fn move_slot(
    State(state): State<AppState>,
    Path(slot_id): Path<DbId>,
    Json(input): Json<MoveCellarSlot>,
) -> AppResult<impl IntoResponse> {
    let source = SlotRepo::find_by_id(&state.pool, slot_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CellarSlot",
            id: slot_id,
        }))?;

    let layout = find_fridge(&state, input.fridge_id).await?;
    let address = input.address();
    check_bounds(address, &layout)?;

    if SlotRepo::find_at_address(&state.pool, input.fridge_id, address, Some(slot_id))
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::SlotOccupied { address }));
    }

    let moved = SlotRepo::relocate(&state.pool, slot_id, &input)
        .await
        .map_err(|err| classify_placement_error(err, address, source.wine_id))?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CellarSlot",
            id: slot_id,
        }))?;

    tracing::info!(
        slot_id = moved.id,
        wine_id = moved.wine_id,
        fridge_id = moved.fridge_id,
        slot = %address,
        "Wine moved to new slot",
    );

    Ok(Json(DataResponse { data: moved }))
}
