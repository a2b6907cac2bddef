//! Cellar slot assignment models and DTOs.
//!
//! A `cellar_slots` row binds one wine to one slot address within one
//! fridge. Depth is stored as lowercase text (`front`/`back`) and parsed
//! into [`Depth`] at the domain boundary.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use cellar_core::error::CoreError;
use cellar_core::slot::{Depth, SlotAddress};
use cellar_core::types::{DbId, Timestamp};
use cellar_core::wine::WineSummary;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `cellar_slots` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CellarSlot {
    pub id: DbId,
    pub household: String,
    pub wine_id: DbId,
    pub fridge_id: DbId,
    pub shelf: i32,
    #[sqlx(rename = "column_position")]
    pub column: i32,
    pub depth: String,
    pub created_at: Timestamp,
}

impl CellarSlot {
    /// The slot address of this assignment.
    ///
    /// Fails with [`CoreError::Internal`] if the stored depth text is not a
    /// valid depth; the CHECK constraint makes that unreachable in practice.
    pub fn address(&self) -> Result<SlotAddress, CoreError> {
        let depth: Depth = self.depth.parse().map_err(CoreError::Internal)?;
        Ok(SlotAddress::new(self.shelf, self.column, depth))
    }
}

/// A `cellar_slots` row joined with the assigned wine's display attributes.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SlotWithWine {
    pub id: DbId,
    pub wine_id: DbId,
    pub fridge_id: DbId,
    pub shelf: i32,
    #[sqlx(rename = "column_position")]
    pub column: i32,
    pub depth: String,
    pub wine_name: String,
    pub producer: String,
    pub vintage: Option<i32>,
}

impl SlotWithWine {
    /// Split the joined row into its address and wine summary.
    pub fn into_parts(self) -> Result<(SlotAddress, WineSummary), CoreError> {
        let depth: Depth = self.depth.parse().map_err(CoreError::Internal)?;
        Ok((
            SlotAddress::new(self.shelf, self.column, depth),
            WineSummary {
                id: self.wine_id,
                wine_name: self.wine_name,
                producer: self.producer,
                vintage: self.vintage,
            },
        ))
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for assigning a wine to a slot.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCellarSlot {
    pub wine_id: DbId,
    pub fridge_id: DbId,
    pub shelf: i32,
    pub column: i32,
    pub depth: Depth,
}

impl CreateCellarSlot {
    pub fn address(&self) -> SlotAddress {
        SlotAddress::new(self.shelf, self.column, self.depth)
    }
}

/// DTO for moving an existing assignment to a new slot.
#[derive(Debug, Clone, Deserialize)]
pub struct MoveCellarSlot {
    pub fridge_id: DbId,
    pub shelf: i32,
    pub column: i32,
    pub depth: Depth,
}

impl MoveCellarSlot {
    pub fn address(&self) -> SlotAddress {
        SlotAddress::new(self.shelf, self.column, self.depth)
    }
}
