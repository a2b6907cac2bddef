//! Fridge-layout rules: dimension bounds, config validation, and the pure
//! active-layout selector.

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Dimension bounds
// ---------------------------------------------------------------------------

/// Minimum number of shelves in a layout.
pub const MIN_SHELVES: i32 = 6;
/// Maximum number of shelves in a layout.
pub const MAX_SHELVES: i32 = 14;
/// Minimum number of columns in a layout.
pub const MIN_COLUMNS: i32 = 5;
/// Maximum number of columns in a layout.
pub const MAX_COLUMNS: i32 = 10;

/// Dimensions of the layout auto-created for a household with none.
pub const DEFAULT_SHELVES: i32 = 6;
pub const DEFAULT_COLUMNS: i32 = 8;
/// Display name of the auto-created layout.
pub const DEFAULT_LAYOUT_NAME: &str = "Wine Fridge";

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a layout configuration.
///
/// Collects *all* offending fields into a single [`CoreError::Validation`]
/// so the form can show every field error at once.
pub fn validate_layout_config(name: &str, shelves: i32, columns: i32) -> Result<(), CoreError> {
    let mut problems = Vec::new();

    if name.trim().is_empty() {
        problems.push("name must not be empty".to_string());
    }
    if !(MIN_SHELVES..=MAX_SHELVES).contains(&shelves) {
        problems.push(format!(
            "shelves must be between {MIN_SHELVES} and {MAX_SHELVES}, got {shelves}"
        ));
    }
    if !(MIN_COLUMNS..=MAX_COLUMNS).contains(&columns) {
        problems.push(format!(
            "columns must be between {MIN_COLUMNS} and {MAX_COLUMNS}, got {columns}"
        ));
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(problems.join("; ")))
    }
}

// ---------------------------------------------------------------------------
// Active-layout selection
// ---------------------------------------------------------------------------

/// Resolve the client's stored active-layout pointer against the current
/// layout list.
///
/// Returns the stored id if it is still present, otherwise the first
/// available layout, otherwise `None`. The pointer itself is a client-local
/// preference; persistence is the caller's concern.
pub fn select_active_layout(ids: &[DbId], stored: Option<DbId>) -> Option<DbId> {
    match stored {
        Some(id) if ids.contains(&id) => Some(id),
        _ => ids.first().copied(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
