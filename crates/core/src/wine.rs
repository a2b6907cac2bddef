//! Shared wine summary type and status values.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// Wine status meaning the bottle is physically present and placeable.
pub const STATUS_IN_CELLAR: &str = "in_cellar";
/// Wine status for bottles that have been drunk.
pub const STATUS_CONSUMED: &str = "consumed";

/// Display attributes of a wine, shared between the occupancy grid, the
/// in-fridge listing, and the unassigned-wines listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WineSummary {
    pub id: DbId,
    pub wine_name: String,
    pub producer: String,
    pub vintage: Option<i32>,
}
