//! Fridge layout models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use cellar_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `fridge_layouts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FridgeLayout {
    pub id: DbId,
    pub household: String,
    pub name: String,
    pub shelves: i32,
    pub columns: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a new fridge layout.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFridgeLayout {
    pub name: String,
    pub shelves: i32,
    pub columns: i32,
}

/// DTO for partially updating a fridge layout.
///
/// Omitted fields keep their current values; the merged result is
/// re-validated before the update is issued.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFridgeLayout {
    pub name: Option<String>,
    pub shelves: Option<i32>,
    pub columns: Option<i32>,
}
