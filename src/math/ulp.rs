//! Unit-in-last-place (ULP) computation for floating-point values.
//!
//! ## Purpose
//!
//! This module computes the ULP of a floating-point value: the gap between
//! the magnitude of a value and the next representable value above it. The
//! comparator uses this as a per-value equality tolerance.
//!
//! ## Design notes
//!
//! * **Per-type trait**: ULP extraction needs the bit layout of the concrete
//!   float type, so it lives behind a trait implemented for `f32` and `f64`
//!   rather than on the generic `Float` bound.
//! * **Magnitude-based**: `ulp(x) == ulp(-x)`; the sign is discarded first.
//!
//! ## Key concepts
//!
//! * **Bit increment**: For finite magnitudes below the maximum, the next
//!   representable value is obtained by incrementing the IEEE 754 bit
//!   pattern, so the ULP is a single subtraction away.
//!
//! ## Invariants
//!
//! * `ulp(0)` is the smallest positive subnormal.
//! * `ulp(MAX)` is the spacing of the top binade (the gap below `MAX`,
//!   since the value above `MAX` is infinite).
//! * `ulp(inf) == inf` and `ulp(NaN)` is NaN.
//!
//! ## Non-goals
//!
//! * This module does not compare values; see [`crate::math::ordering`].

// External dependencies
use num_traits::Float;

// ============================================================================
// ULP Trait
// ============================================================================

/// Float types that expose their unit-in-last-place magnitude.
pub trait UlpFloat: Float {
    /// Distance from the magnitude of `self` to the next representable value.
    fn ulp(self) -> Self;
}

impl UlpFloat for f64 {
    fn ulp(self) -> f64 {
        if self.is_nan() {
            return f64::NAN;
        }

        let magnitude = self.abs();
        if magnitude == f64::INFINITY {
            return f64::INFINITY;
        }

        // The value above MAX is infinite; use the gap below MAX instead.
        if magnitude == f64::MAX {
            return f64::MAX - f64::from_bits(f64::MAX.to_bits() - 1);
        }

        f64::from_bits(magnitude.to_bits() + 1) - magnitude
    }
}

impl UlpFloat for f32 {
    fn ulp(self) -> f32 {
        if self.is_nan() {
            return f32::NAN;
        }

        let magnitude = self.abs();
        if magnitude == f32::INFINITY {
            return f32::INFINITY;
        }

        if magnitude == f32::MAX {
            return f32::MAX - f32::from_bits(f32::MAX.to_bits() - 1);
        }

        f32::from_bits(magnitude.to_bits() + 1) - magnitude
    }
}
