//! Wine record models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use cellar_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `wines` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Wine {
    pub id: DbId,
    pub household: String,
    pub wine_name: String,
    pub producer: String,
    pub vintage: Option<i32>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a new wine record.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWine {
    pub wine_name: String,
    pub producer: Option<String>,
    pub vintage: Option<i32>,
    pub status: Option<String>,
}

/// DTO for partially updating a wine record.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateWine {
    pub wine_name: Option<String>,
    pub producer: Option<String>,
    pub vintage: Option<i32>,
    pub status: Option<String>,
}
