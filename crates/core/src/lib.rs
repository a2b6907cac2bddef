//! Pure domain logic for the wine-cellar backend.
//!
//! Everything in this crate is I/O-free: slot addressing, occupancy
//! aggregation, layout validation, and active-layout selection are plain
//! functions over plain data, so the invariants they enforce are testable
//! without a database.

pub mod error;
pub mod layout;
pub mod occupancy;
pub mod slot;
pub mod types;
pub mod wine;
