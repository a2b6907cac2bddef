use crate::slot::SlotAddress;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The target slot already holds a wine. The message names the exact
    /// address (e.g. "S2·C3·Front is already occupied") so the UI can show
    /// an actionable error instead of a generic failure.
    #[error("{address} is already occupied")]
    SlotOccupied { address: SlotAddress },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
