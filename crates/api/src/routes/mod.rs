pub mod cellar;
pub mod health;
pub mod layouts;
pub mod wines;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /cellar/layouts                        list (auto-default), create
/// /cellar/layouts/active                 resolve the client's stored pointer
/// /cellar/layouts/{id}                   get, update, delete (last-layout guard)
///
/// /cellar/fridges/{id}/occupancy         occupancy grid + aggregates
/// /cellar/fridges/{id}/wines             assignments joined with summaries
/// /cellar/wines/unassigned               in-cellar wines without a slot
/// /cellar/slots                          assign (POST)
/// /cellar/slots/{id}                     remove (DELETE, idempotent)
/// /cellar/slots/{id}/move                move (POST, transactional)
///
/// /wines                                 list (?status), create
/// /wines/{id}                            get, update
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest(
            "/cellar",
            Router::new().merge(layouts::router()).merge(cellar::router()),
        )
        .nest("/wines", wines::router())
}
