//! Invariant checks across the whole public surface: every construction and
//! operator path must land inside the declared range, and the serialized form
//! must stay a bare scalar the host can store and re-load safely.

use approx::assert_relative_eq;
use clamped_values_core::{ClampedFloat, ClampedUnit};

/// The invariant holds and matches `min(max(x, 0), 1)` for every finite input.
#[test]
fn construction_matches_min_max_clamp() {
    for i in -500..=500 {
        let x = f64::from(i) as f32 / 100.0;
        let v = ClampedUnit::new(x);
        assert!((0.0..=1.0).contains(&v.value()), "out of range for {x}");
        assert_eq!(v.value(), x.clamp(0.0, 1.0), "wrong clamp for {x}");
    }
}

#[test]
fn operators_never_escape_the_range() {
    let samples = [-2.0f32, -0.5, 0.0, 0.1, 0.5, 0.9, 1.0, 3.0];
    for &a in &samples {
        for &b in &samples {
            let lhs = ClampedUnit::new(a);
            let results = [
                lhs + ClampedUnit::new(b),
                lhs - ClampedUnit::new(b),
                lhs * ClampedUnit::new(b),
                lhs / ClampedUnit::new(b),
                lhs + b,
                lhs - b,
                lhs * b,
                lhs / b,
            ];
            for r in results {
                assert!(
                    (0.0..=1.0).contains(&r.value()),
                    "operator escaped range for lhs {a}, rhs {b}: {r}"
                );
            }
        }
    }
}

#[test]
fn transfer_curves_preserve_the_range() {
    for i in 0..=100 {
        let v = ClampedUnit::new(f64::from(i) as f32 / 100.0);
        for exponent in [-2.0f32, 0.0, 0.5, 1.0, 2.0, 10.0] {
            let t = v.transfer_exponential(exponent);
            assert!((0.0..=1.0).contains(&t.value()));
        }
        assert!((0.0..=1.0).contains(&v.transfer_cosine().value()));
        assert!((0.0..=1.0).contains(&v.transfer_invert().value()));
    }
}

#[test]
fn cosine_curve_endpoints_and_shape() {
    assert_relative_eq!(ClampedUnit::ZERO.transfer_cosine().value(), 0.0, epsilon = 1e-6);
    assert_relative_eq!(ClampedUnit::ONE.transfer_cosine().value(), 1.0, epsilon = 1e-6);

    // Eases in: below the diagonal over the first half of the range
    let early = ClampedUnit::new(0.25).transfer_cosine();
    assert!(early.value() < 0.25, "expected ease-in below the diagonal");
}

#[test]
fn random_samples_satisfy_the_invariant() {
    for _ in 0..100 {
        let v = rand::random::<ClampedUnit>();
        assert!((0.0..=1.0).contains(&v.value()));
    }
}

#[test]
fn unit_serializes_as_bare_scalar() {
    let v = ClampedUnit::new(0.25);
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, "0.25");

    let back: ClampedUnit = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);
}

#[test]
fn unit_deserialization_clamps_untrusted_input() {
    let too_big: ClampedUnit = serde_json::from_str("1.5").unwrap();
    assert_eq!(too_big, ClampedUnit::ONE);

    let negative: ClampedUnit = serde_json::from_str("-0.3").unwrap();
    assert_eq!(negative, ClampedUnit::ZERO);
}

#[test]
fn clamped_float_round_trips_through_serde() {
    let c = ClampedFloat::new(1.5, 0.0, 2.0);
    let json = serde_json::to_string(&c).unwrap();
    let back: ClampedFloat = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
}

#[test]
fn clamped_float_deserialization_repairs_bad_data() {
    // Out-of-range value re-clamps
    let c: ClampedFloat = serde_json::from_str(r#"{"value":9.0,"min":0.0,"max":2.0}"#).unwrap();
    assert_eq!(c.value(), 2.0);

    // Reversed bounds collapse to an ordered range instead of panicking
    let c: ClampedFloat = serde_json::from_str(r#"{"value":1.0,"min":5.0,"max":0.0}"#).unwrap();
    assert_eq!(c.min(), 0.0);
    assert_eq!(c.max(), 5.0);
    assert_eq!(c.value(), 1.0);
}

#[test]
fn widening_matches_explicit_unit_bounds() {
    let unit = ClampedUnit::new(0.6);
    let wide: ClampedFloat = unit.into();
    assert_eq!(wide, ClampedFloat::new(0.6, 0.0, 1.0));
    assert_relative_eq!(wide.to_unit().value(), unit.value(), epsilon = 1e-6);
}
