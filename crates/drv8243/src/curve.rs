//! Duty-shaping transform.
//!
//! Maps a linear command in `[0, 1]` onto the duty range the motor actually
//! responds to:
//!
//! ```text
//! shaped = min_level + (1 - min_level) * level ^ exponent
//! ```
//!
//! The floor lifts every nonzero command above the dead zone; the exponent
//! linearizes the perceived speed response. The transform is stateless and
//! monotonic, with `shape(0) = min_level` and `shape(1) = 1` exactly.

/// Shape a normalized command into a physical duty value.
///
/// `level` is clamped to `[0, 1]` before shaping; the result is clamped to
/// the same range, so the output is always a valid duty. Callers handle the
/// zero command (full stop) before shaping — `shape(0)` is the floor, not 0.
pub fn shape(level: f32, min_level: f32, exponent: f32) -> f32 {
    let x = level.clamp(0.0, 1.0);
    // Exact top endpoint: full command means full duty, no rounding residue
    // from the floor arithmetic.
    if x >= 1.0 {
        return 1.0;
    }
    let y = min_level + (1.0 - min_level) * libm::powf(x, exponent);
    y.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn identity_when_floor_zero_and_exponent_one() {
        assert!((shape(0.3, 0.0, 1.0) - 0.3).abs() < EPS);
        assert!((shape(0.7, 0.0, 1.0) - 0.7).abs() < EPS);
    }

    #[test]
    fn default_curve_midpoint() {
        // 0.014 + 0.986 * 0.5^1.8 ≈ 0.297
        let shaped = shape(0.5, 0.014, 1.8);
        assert!((shaped - 0.297).abs() < 1e-3, "got {shaped}");
    }

    #[test]
    fn full_command_maps_to_full_duty_exactly() {
        assert_eq!(shape(1.0, 0.014, 1.8), 1.0);
        assert_eq!(shape(1.0, 0.9, 0.1), 1.0);
        assert_eq!(shape(1.0, 0.0, 5.0), 1.0);
    }

    #[test]
    fn zero_command_maps_to_floor() {
        assert!((shape(0.0, 0.014, 1.8) - 0.014).abs() < EPS);
        assert!((shape(0.0, 0.25, 1.0) - 0.25).abs() < EPS);
    }

    #[test]
    fn nonzero_commands_stay_above_floor() {
        for i in 1u8..=10 {
            let v = f32::from(i) / 10.0;
            let shaped = shape(v, 0.014, 1.8);
            assert!(shaped >= 0.014, "shape({v}) = {shaped} below floor");
            assert!(shaped <= 1.0, "shape({v}) = {shaped} above ceiling");
        }
    }

    #[test]
    fn strictly_monotonic_on_separated_points() {
        let points = [0.05, 0.1, 0.2, 0.35, 0.5, 0.65, 0.8, 0.95, 1.0];
        let mut prev = shape(0.0, 0.014, 1.8);
        for v in points {
            let shaped = shape(v, 0.014, 1.8);
            assert!(shaped > prev, "shape({v}) = {shaped} not above {prev}");
            prev = shaped;
        }
    }

    #[test]
    fn out_of_range_commands_are_clamped() {
        assert_eq!(shape(1.5, 0.014, 1.8), 1.0);
        assert!((shape(-0.5, 0.014, 1.8) - 0.014).abs() < EPS);
    }
}
