//! Route definitions for placement and occupancy, merged into `/cellar`.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::cellar;
use crate::state::AppState;

/// Placement and occupancy routes, merged into `/cellar`.
///
/// ```text
/// GET    /fridges/{id}/occupancy    fridge_occupancy
/// GET    /fridges/{id}/wines        list_fridge_wines
/// GET    /wines/unassigned          list_unassigned_wines
/// POST   /slots                     assign_slot
/// DELETE /slots/{id}                remove_slot (idempotent)
/// POST   /slots/{id}/move           move_slot (transactional)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/fridges/{id}/occupancy", get(cellar::fridge_occupancy))
        .route("/fridges/{id}/wines", get(cellar::list_fridge_wines))
        .route("/wines/unassigned", get(cellar::list_unassigned_wines))
        .route("/slots", post(cellar::assign_slot))
        .route("/slots/{id}", delete(cellar::remove_slot))
        .route("/slots/{id}/move", post(cellar::move_slot))
}
