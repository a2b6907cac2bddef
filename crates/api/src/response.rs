//! Success-response envelope for the cellar API.
//!
//! Every successful JSON body wraps its payload as `{ "data": ... }`, which
//! is the shape the web client unwraps on its side. [`DataResponse`] keeps
//! that contract type-checked rather than rebuilding it with
//! `serde_json::json!` in each handler.

use serde::Serialize;

/// `{ "data": T }` envelope returned by every successful handler.
///
/// `T` is whatever the endpoint serves: a layout, a wine, an occupancy
/// grid, or a list of any of those.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
