//! Occupancy aggregation: the derived, non-persisted view of which slots
//! currently hold an assignment.
//!
//! Given a layout's dimensions and the current assignments for that fridge,
//! [`build_grid`] produces one record per possible slot address plus the
//! aggregate counts the UI renders. This is a read path only; nothing here
//! mutates state.

use std::collections::HashMap;

use serde::Serialize;

use crate::slot::{Depth, SlotAddress};
use crate::wine::WineSummary;

/// One entry in the occupancy grid: a slot address annotated with its
/// current occupant, if any.
#[derive(Debug, Clone, Serialize)]
pub struct OccupancySlot {
    pub shelf: i32,
    pub column: i32,
    pub depth: Depth,
    pub is_occupied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wine: Option<WineSummary>,
}

/// The full occupancy view for one fridge.
#[derive(Debug, Clone, Serialize)]
pub struct OccupancyGrid {
    pub slots: Vec<OccupancySlot>,
    pub total_slots: u32,
    pub occupied_slots: u32,
    pub occupancy_percentage: u32,
}

/// Percentage of occupied slots, rounded to the nearest integer.
///
/// Returns 0 when `total` is 0 rather than dividing by zero.
pub fn occupancy_percentage(occupied: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(occupied) / f64::from(total) * 100.0).round() as u32
}

/// Build the occupancy grid for a layout of `shelves` x `columns` cells.
///
/// Every one of `shelves * columns * 2` addresses appears exactly once, in
/// deterministic order: shelf ascending, then column ascending, then depth
/// (front before back). Assignments at addresses outside the layout are
/// ignored; duplicate addresses in the input keep the first occurrence.
pub fn build_grid(
    shelves: i32,
    columns: i32,
    assignments: Vec<(SlotAddress, WineSummary)>,
) -> OccupancyGrid {
    let mut by_address: HashMap<SlotAddress, WineSummary> =
        HashMap::with_capacity(assignments.len());
    for (address, wine) in assignments {
        by_address.entry(address).or_insert(wine);
    }

    let shelves = shelves.max(0);
    let columns = columns.max(0);

    let total_slots = (shelves as u32) * (columns as u32) * 2;
    let mut slots = Vec::with_capacity(total_slots as usize);
    let mut occupied_slots = 0u32;

    for shelf in 1..=shelves {
        for column in 1..=columns {
            for depth in [Depth::Front, Depth::Back] {
                let wine = by_address.remove(&SlotAddress::new(shelf, column, depth));
                if wine.is_some() {
                    occupied_slots += 1;
                }
                slots.push(OccupancySlot {
                    shelf,
                    column,
                    depth,
                    is_occupied: wine.is_some(),
                    wine,
                });
            }
        }
    }

    OccupancyGrid {
        slots,
        total_slots,
        occupied_slots,
        occupancy_percentage: occupancy_percentage(occupied_slots, total_slots),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
