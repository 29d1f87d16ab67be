//! Clamped Scalar Value Library
//!
//! Small `Copy` value types that keep a floating-point scalar inside an
//! inclusive range on every write. Construction, assignment, arithmetic,
//! and deserialization all re-clamp, so a value read back from a save file
//! or edited in an inspector widget can never escape its range.
//!
//! - [`ClampedUnit`]: a scalar pinned to the unit range [0, 1], with
//!   clamp-on-result arithmetic, exact comparisons, total ordering, and
//!   transfer curves for reshaping normalized values
//! - [`ClampedFloat`]: the widening companion over explicit caller-chosen
//!   bounds
//! - [`remap`]: the linear remaps between the unit range and arbitrary
//!   ranges that the transfer curves build on

// Value types
pub mod units;

// Range remapping helpers
pub mod remap;

// Re-export the public surface at the crate root
pub use remap::{clamp_canonical, map_from_unit, map_to_unit};
pub use units::{ClampedFloat, ClampedUnit};
