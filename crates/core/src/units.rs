//! Clamped scalar holders for inspector-facing values.
//!
//! Two `Copy` value types that enforce a range invariant on every write:
//! [`ClampedUnit`] pins an `f32` to the unit range [0, 1], and
//! [`ClampedFloat`] generalizes the same contract to explicit caller-chosen
//! bounds. Out-of-range input is coerced, never rejected; a host object model
//! (inspector widget, save data) only ever sees the stored scalar.
//!
//! # Design
//! - Arithmetic operators compute the raw result, then re-clamp
//! - Comparisons use exact floating-point semantics (no epsilon)
//! - Total ordering via `Ord` (stored values are canonical, see below)
//! - Serde support re-clamps on deserialization
//! - Private inner fields with clamping constructors
//!
//! # Usage
//! ```
//! use clamped_values_core::ClampedUnit;
//!
//! let v = ClampedUnit::new(0.25);
//! assert_eq!(v + 0.9, ClampedUnit::ONE);
//!
//! // Transfer curves chain builder-style
//! let eased = v.transfer_invert().transfer_exponential(1.0);
//! assert_eq!(eased, ClampedUnit::new(0.75));
//! ```

use std::cmp::Ordering;
use std::f32::consts::{PI, TAU};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Deref, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use rand::distr::{Distribution, StandardUniform};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::remap::{clamp_canonical, map_from_unit, map_to_unit};

// ============================================================================
// UNIT-RANGE SCALAR
// ============================================================================

/// A scalar clamped to the inclusive unit range [0, 1].
///
/// Every write re-clamps: construction, assignment, deserialization, and the
/// result of every arithmetic operator. IEEE edge cases are coerced instead of
/// raised: division by zero produces an infinity that clamps to the nearest
/// bound, and a NaN result is stored as 0. The stored value is therefore
/// always canonical (in range, never NaN, never negative zero), which is what
/// makes the `Eq`, `Ord`, and `Hash` implementations agree with `==`.
///
/// Serializes as the bare scalar, so a host inspector or save format stores a
/// plain number; deserialization clamps on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
#[repr(transparent)]
pub struct ClampedUnit(f32);

impl Eq for ClampedUnit {}

impl PartialOrd for ClampedUnit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ClampedUnit {
    fn cmp(&self, other: &Self) -> Ordering {
        // Canonical storage: total_cmp agrees with == here
        self.0.total_cmp(&other.0)
    }
}

impl Hash for ClampedUnit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Canonical storage: equal values share one bit pattern
        self.0.to_bits().hash(state);
    }
}

impl Deref for ClampedUnit {
    type Target = f32;
    #[inline]
    fn deref(&self) -> &f32 {
        &self.0
    }
}

impl ClampedUnit {
    /// Empty (0.0)
    pub const ZERO: ClampedUnit = ClampedUnit(0.0);

    /// Full/complete (1.0)
    pub const ONE: ClampedUnit = ClampedUnit(1.0);

    /// Create a new unit value, clamping into [0, 1]. NaN input stores 0.
    #[inline]
    #[must_use]
    pub fn new(value: f32) -> Self {
        ClampedUnit(clamp_canonical(value, 0.0, 1.0))
    }

    /// Create a new unit value. Asserts the input is already within [0, 1].
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new_strict(value: f32) -> Self {
        assert!(
            value >= 0.0 && value <= 1.0,
            "ClampedUnit::new_strict: value not in [0, 1]"
        );
        ClampedUnit(value + 0.0)
    }

    /// Create without clamping.
    /// # Safety
    /// Caller must ensure value is in [0, 1] and not NaN or negative zero.
    #[inline]
    #[must_use]
    pub const unsafe fn new_unchecked(value: f32) -> Self {
        ClampedUnit(value)
    }

    /// Get the raw f32 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Set the stored value, clamping into [0, 1].
    #[inline]
    pub fn set(&mut self, value: f32) {
        self.0 = clamp_canonical(value, 0.0, 1.0);
    }

    /// Apply an exponential transfer curve: raise the stored value to
    /// `exponent`, re-clamped.
    ///
    /// Follows IEEE `powf` and then clamps: any stored value raised to the
    /// exponent 0 reads as 1 (including 0), and 0 raised to a negative
    /// exponent overflows to infinity and lands on 1.
    #[inline]
    #[must_use]
    pub fn transfer_exponential(self, exponent: f32) -> Self {
        Self::new(self.0.powf(exponent))
    }

    /// Apply a cosine transfer curve.
    ///
    /// Remaps the stored value from [0, 1] onto [π, 2π], takes the cosine
    /// (a result in [-1, 1]) and remaps that back into [0, 1]. Eases from 0
    /// up to 1 with fixed points at both ends; monotonic non-decreasing over
    /// the whole range.
    #[inline]
    #[must_use]
    pub fn transfer_cosine(self) -> Self {
        Self::new(map_to_unit(map_from_unit(self.0, PI, TAU).cos(), -1.0, 1.0))
    }

    /// Invert the stored value: `1 - x`. Applying it twice returns the
    /// original value.
    #[inline]
    #[must_use]
    pub fn transfer_invert(self) -> Self {
        Self::new(1.0 - self.0)
    }

    /// Widen to a [`ClampedFloat`] with the bounds fixed at [0, 1].
    #[inline]
    #[must_use]
    pub fn widen(self) -> ClampedFloat {
        ClampedFloat {
            value: self.0,
            min: 0.0,
            max: 1.0,
        }
    }
}

impl fmt::Display for ClampedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

impl From<f32> for ClampedUnit {
    fn from(v: f32) -> Self {
        ClampedUnit::new(v)
    }
}

impl From<ClampedUnit> for f32 {
    fn from(u: ClampedUnit) -> f32 {
        u.0
    }
}

impl From<ClampedUnit> for ClampedFloat {
    fn from(u: ClampedUnit) -> ClampedFloat {
        u.widen()
    }
}

// Unit ⊗ unit arithmetic: raw result, then clamp. Division by zero follows
// IEEE and saturates (x/0 → 1 for x > 0, 0/0 → 0).
impl Add for ClampedUnit {
    type Output = ClampedUnit;
    fn add(self, rhs: ClampedUnit) -> ClampedUnit {
        ClampedUnit::new(self.0 + rhs.0)
    }
}

impl Sub for ClampedUnit {
    type Output = ClampedUnit;
    fn sub(self, rhs: ClampedUnit) -> ClampedUnit {
        ClampedUnit::new(self.0 - rhs.0)
    }
}

impl Mul for ClampedUnit {
    type Output = ClampedUnit;
    fn mul(self, rhs: ClampedUnit) -> ClampedUnit {
        ClampedUnit::new(self.0 * rhs.0)
    }
}

impl Div for ClampedUnit {
    type Output = ClampedUnit;
    fn div(self, rhs: ClampedUnit) -> ClampedUnit {
        ClampedUnit::new(self.0 / rhs.0)
    }
}

// Unit ⊗ raw float arithmetic, same clamp-on-result contract
impl Add<f32> for ClampedUnit {
    type Output = ClampedUnit;
    fn add(self, rhs: f32) -> ClampedUnit {
        ClampedUnit::new(self.0 + rhs)
    }
}

impl Sub<f32> for ClampedUnit {
    type Output = ClampedUnit;
    fn sub(self, rhs: f32) -> ClampedUnit {
        ClampedUnit::new(self.0 - rhs)
    }
}

impl Mul<f32> for ClampedUnit {
    type Output = ClampedUnit;
    fn mul(self, rhs: f32) -> ClampedUnit {
        ClampedUnit::new(self.0 * rhs)
    }
}

impl Div<f32> for ClampedUnit {
    type Output = ClampedUnit;
    fn div(self, rhs: f32) -> ClampedUnit {
        ClampedUnit::new(self.0 / rhs)
    }
}

// Unit ⊗ raw integer arithmetic
impl Add<i32> for ClampedUnit {
    type Output = ClampedUnit;
    fn add(self, rhs: i32) -> ClampedUnit {
        ClampedUnit::new(self.0 + rhs as f32)
    }
}

impl Sub<i32> for ClampedUnit {
    type Output = ClampedUnit;
    fn sub(self, rhs: i32) -> ClampedUnit {
        ClampedUnit::new(self.0 - rhs as f32)
    }
}

impl Mul<i32> for ClampedUnit {
    type Output = ClampedUnit;
    fn mul(self, rhs: i32) -> ClampedUnit {
        ClampedUnit::new(self.0 * rhs as f32)
    }
}

impl Div<i32> for ClampedUnit {
    type Output = ClampedUnit;
    fn div(self, rhs: i32) -> ClampedUnit {
        ClampedUnit::new(self.0 / rhs as f32)
    }
}

impl AddAssign for ClampedUnit {
    fn add_assign(&mut self, rhs: ClampedUnit) {
        *self = *self + rhs;
    }
}

impl SubAssign for ClampedUnit {
    fn sub_assign(&mut self, rhs: ClampedUnit) {
        *self = *self - rhs;
    }
}

impl MulAssign for ClampedUnit {
    fn mul_assign(&mut self, rhs: ClampedUnit) {
        *self = *self * rhs;
    }
}

impl DivAssign for ClampedUnit {
    fn div_assign(&mut self, rhs: ClampedUnit) {
        *self = *self / rhs;
    }
}

impl AddAssign<f32> for ClampedUnit {
    fn add_assign(&mut self, rhs: f32) {
        *self = *self + rhs;
    }
}

impl SubAssign<f32> for ClampedUnit {
    fn sub_assign(&mut self, rhs: f32) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for ClampedUnit {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for ClampedUnit {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl PartialEq<f32> for ClampedUnit {
    fn eq(&self, other: &f32) -> bool {
        self.0 == *other
    }
}

impl PartialOrd<f32> for ClampedUnit {
    fn partial_cmp(&self, other: &f32) -> Option<Ordering> {
        self.0.partial_cmp(other)
    }
}

impl Distribution<ClampedUnit> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ClampedUnit {
        // Standard f32 sampling already lands in [0, 1)
        ClampedUnit(rng.random())
    }
}

// ============================================================================
// EXPLICITLY BOUNDED SCALAR
// ============================================================================

/// A scalar clamped to an explicit inclusive range `[min, max]`.
///
/// The widening counterpart of [`ClampedUnit`] for inspector values that live
/// in engine-native ranges. Bounds are fixed at construction; value writes
/// clamp.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "ClampedFloatRaw")]
pub struct ClampedFloat {
    value: f32,
    min: f32,
    max: f32,
}

impl ClampedFloat {
    /// Create a new clamped scalar over `[min, max]`. Asserts `min <= max`
    /// (NaN bounds fail the assertion); the initial value is clamped, not
    /// validated.
    #[inline]
    #[must_use]
    #[track_caller]
    pub fn new(value: f32, min: f32, max: f32) -> Self {
        assert!(min <= max, "ClampedFloat::new: min must not exceed max");
        ClampedFloat {
            value: clamp_canonical(value, min, max),
            min,
            max,
        }
    }

    /// Get the stored value
    #[inline]
    #[must_use]
    pub fn value(self) -> f32 {
        self.value
    }

    /// Set the stored value, clamping into `[min, max]`.
    #[inline]
    pub fn set(&mut self, value: f32) {
        self.value = clamp_canonical(value, self.min, self.max);
    }

    /// Lower bound (inclusive)
    #[inline]
    #[must_use]
    pub fn min(self) -> f32 {
        self.min
    }

    /// Upper bound (inclusive)
    #[inline]
    #[must_use]
    pub fn max(self) -> f32 {
        self.max
    }

    /// Normalized position of the stored value inside the bounds.
    ///
    /// Inverse of [`ClampedUnit::widen`]; a degenerate range reads as 0.
    #[inline]
    #[must_use]
    pub fn to_unit(self) -> ClampedUnit {
        ClampedUnit::new(map_to_unit(self.value, self.min, self.max))
    }
}

impl Deref for ClampedFloat {
    type Target = f32;
    #[inline]
    fn deref(&self) -> &f32 {
        &self.value
    }
}

impl fmt::Display for ClampedFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.value)
    }
}

impl From<ClampedFloat> for f32 {
    fn from(c: ClampedFloat) -> f32 {
        c.value
    }
}

/// Raw serialized form of [`ClampedFloat`].
#[derive(Deserialize)]
struct ClampedFloatRaw {
    value: f32,
    min: f32,
    max: f32,
}

impl From<ClampedFloatRaw> for ClampedFloat {
    fn from(raw: ClampedFloatRaw) -> Self {
        // Serialized data is untrusted: NaN or reversed bounds collapse to a
        // usable range instead of panicking, and the value re-clamps.
        let min = if raw.min.is_nan() { 0.0 } else { raw.min };
        let max = if raw.max.is_nan() { min } else { raw.max };
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        ClampedFloat {
            value: clamp_canonical(raw.value, min, max),
            min,
            max,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
