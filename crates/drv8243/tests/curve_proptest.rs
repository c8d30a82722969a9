//! Property-based tests for the duty-shaping transform and its config range.
//! Verifies invariants hold for ALL valid inputs, not just fixed examples.

use drv8243::curve::shape;
use drv8243::{CurveExponent, MinLevel};

proptest::proptest! {
    /// The shaped value is always a valid duty, whatever the inputs.
    #[test]
    fn shaped_is_always_a_valid_duty(
        level in -1.0f32..=2.0,
        min in 0.0f32..=1.0,
        exp in 0.1f32..=5.0,
    ) {
        let y = shape(level, min, exp);
        assert!((0.0..=1.0).contains(&y), "shape({level}) = {y} out of [0, 1]");
    }

    /// Nonzero commands never fall below the dead-zone floor.
    #[test]
    fn nonzero_commands_stay_at_or_above_floor(
        level in 1e-3f32..=1.0,
        min in 0.0f32..=1.0,
        exp in 0.1f32..=5.0,
    ) {
        let y = shape(level, min, exp);
        assert!(y >= min - 1e-6, "shape({level}) = {y} below floor {min}");
    }

    /// Shaping preserves command ordering (up to float rounding).
    #[test]
    fn monotone_in_level(
        a in 0.0f32..=1.0,
        b in 0.0f32..=1.0,
        min in 0.0f32..=0.9,
        exp in 0.1f32..=5.0,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let y_lo = shape(lo, min, exp);
        let y_hi = shape(hi, min, exp);
        assert!(
            y_lo <= y_hi + 1e-6,
            "shape({lo}) = {y_lo} above shape({hi}) = {y_hi}"
        );
    }

    /// Full command is exactly full duty for every valid curve.
    #[test]
    fn full_command_is_exactly_full_duty(min in 0.0f32..=1.0, exp in 0.1f32..=5.0) {
        assert_eq!(shape(1.0, min, exp), 1.0);
    }

    /// Every value inside the documented ranges constructs successfully.
    #[test]
    fn valid_ranges_always_construct(min in 0.0f32..=1.0, exp in 0.1f32..=5.0) {
        assert!(MinLevel::new(min).is_ok());
        assert!(CurveExponent::new(exp).is_ok());
    }

    /// Every value outside the documented ranges is rejected.
    #[test]
    fn out_of_range_always_rejected(min in 1.001f32..=100.0, exp in 5.001f32..=100.0) {
        assert!(MinLevel::new(min).is_err());
        assert!(MinLevel::new(-min).is_err());
        assert!(CurveExponent::new(exp).is_err());
        assert!(CurveExponent::new(-exp).is_err());
    }
}
