//! Route definitions for fridge-layout management, merged into `/cellar`.

use axum::routing::get;
use axum::Router;

use crate::handlers::layouts;
use crate::state::AppState;

/// Layout routes, merged into `/cellar`.
///
/// ```text
/// GET    /layouts              list_layouts (auto-creates the default)
/// POST   /layouts              create_layout
/// GET    /layouts/active       resolve_active_layout (?stored_id)
/// GET    /layouts/{id}         get_layout
/// PUT    /layouts/{id}         update_layout
/// DELETE /layouts/{id}         delete_layout
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/layouts",
            get(layouts::list_layouts).post(layouts::create_layout),
        )
        .route("/layouts/active", get(layouts::resolve_active_layout))
        .route(
            "/layouts/{id}",
            get(layouts::get_layout)
                .put(layouts::update_layout)
                .delete(layouts::delete_layout),
        )
}
