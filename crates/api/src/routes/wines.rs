//! Route definitions for wine record CRUD.

use axum::routing::get;
use axum::Router;

use crate::handlers::wines;
use crate::state::AppState;

/// Wine routes, nested under `/wines`.
///
/// ```text
/// GET    /          list_wines (?status)
/// POST   /          create_wine
/// GET    /{id}      get_wine
/// PUT    /{id}      update_wine
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(wines::list_wines).post(wines::create_wine))
        .route("/{id}", get(wines::get_wine).put(wines::update_wine))
}
