//! Slot addressing: identity, display labels, and bounds checks.
//!
//! A slot is one of two depth positions (front/back) within one
//! (shelf, column) cell of a fridge layout. Addresses are 1-based and only
//! meaningful relative to the owning layout's dimensions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Depth position of a slot: the front or back bottle of a cell.
///
/// Ordering is `Front < Back`, which fixes the tie-break order used by the
/// occupancy grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Depth {
    Front,
    Back,
}

impl Depth {
    /// Stable lowercase form used for database storage and address keys.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
        }
    }

    /// Capitalized form used in user-facing slot labels.
    pub fn label(self) -> &'static str {
        match self {
            Self::Front => "Front",
            Self::Back => "Back",
        }
    }
}

impl FromStr for Depth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "front" => Ok(Self::Front),
            "back" => Ok(Self::Back),
            other => Err(format!("Invalid depth: {other}")),
        }
    }
}

/// The natural key of a cellar assignment within one fridge.
///
/// Two addresses are equal iff shelf, column, and depth are all equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotAddress {
    pub shelf: i32,
    pub column: i32,
    pub depth: Depth,
}

impl SlotAddress {
    pub fn new(shelf: i32, column: i32, depth: Depth) -> Self {
        Self {
            shelf,
            column,
            depth,
        }
    }

    /// Canonical lookup key, e.g. `3:4:front`.
    pub fn key(&self) -> String {
        format!("{}:{}:{}", self.shelf, self.column, self.depth.as_str())
    }

    /// Whether this address lies within a layout of the given dimensions.
    ///
    /// Shelf and column are 1-based inclusive; depth is always valid.
    pub fn is_within(&self, shelves: i32, columns: i32) -> bool {
        self.shelf >= 1 && self.shelf <= shelves && self.column >= 1 && self.column <= columns
    }
}

impl fmt::Display for SlotAddress {
    /// User-facing label, e.g. `S2·C3·Front`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}·C{}·{}", self.shelf, self.column, self.depth.label())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- Depth --

    #[test]
    fn depth_roundtrips_through_str() {
        assert_eq!("front".parse::<Depth>().unwrap(), Depth::Front);
        assert_eq!("back".parse::<Depth>().unwrap(), Depth::Back);
        assert_eq!(Depth::Front.as_str(), "front");
        assert_eq!(Depth::Back.as_str(), "back");
    }

    #[test]
    fn depth_rejects_unknown_values() {
        assert!("middle".parse::<Depth>().is_err());
        assert!("Front".parse::<Depth>().is_err());
    }

    #[test]
    fn depth_orders_front_before_back() {
        assert!(Depth::Front < Depth::Back);
    }

    // -- Address keys --

    #[test]
    fn key_is_identical_for_identical_components() {
        let a = SlotAddress::new(2, 3, Depth::Front);
        let b = SlotAddress::new(2, 3, Depth::Front);
        assert_eq!(a.key(), b.key());
        assert_eq!(a, b);
    }

    #[test]
    fn key_differs_when_any_component_differs() {
        let base = SlotAddress::new(2, 3, Depth::Front);
        assert_ne!(base.key(), SlotAddress::new(3, 3, Depth::Front).key());
        assert_ne!(base.key(), SlotAddress::new(2, 4, Depth::Front).key());
        assert_ne!(base.key(), SlotAddress::new(2, 3, Depth::Back).key());
    }

    #[test]
    fn display_label_format() {
        let addr = SlotAddress::new(2, 3, Depth::Front);
        assert_eq!(addr.to_string(), "S2·C3·Front");
        let addr = SlotAddress::new(10, 1, Depth::Back);
        assert_eq!(addr.to_string(), "S10·C1·Back");
    }

    // -- Bounds checks --

    #[test]
    fn bounds_accept_corners() {
        assert!(SlotAddress::new(1, 1, Depth::Front).is_within(6, 5));
        assert!(SlotAddress::new(6, 5, Depth::Back).is_within(6, 5));
    }

    #[test]
    fn bounds_reject_zero_and_overflow() {
        assert!(!SlotAddress::new(0, 1, Depth::Front).is_within(6, 5));
        assert!(!SlotAddress::new(1, 0, Depth::Front).is_within(6, 5));
        assert!(!SlotAddress::new(7, 1, Depth::Front).is_within(6, 5));
        assert!(!SlotAddress::new(1, 6, Depth::Front).is_within(6, 5));
    }
}
