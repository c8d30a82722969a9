//! Generic normalized-output abstraction
//!
//! A [`FloatOutput`] is any sink that accepts a duty value in `[0.0, 1.0]`
//! — typically a PWM channel, sometimes a DAC or an external dimmer.
//! Chip drivers that shape or gate an output (such as the DRV8243 adapter)
//! wrap one of these rather than owning the PWM peripheral directly.

/// Normalized float-output sink.
///
/// Implementations map the duty value onto their hardware resolution.
/// `set_level` is synchronous: a duty update is a register write with no
/// suspension point.
pub trait FloatOutput {
    /// Error type returned by output writes.
    type Error: core::fmt::Debug;

    /// Write a new duty value.
    ///
    /// `level` is expected in `[0.0, 1.0]`; implementations clamp rather
    /// than reject out-of-range values.
    fn set_level(&mut self, level: f32) -> Result<(), Self::Error>;
}

// Allow passing `&mut O` where an owned sink is expected (wiring helpers
// hand out reborrows of externally-owned outputs).
impl<T: FloatOutput + ?Sized> FloatOutput for &mut T {
    type Error = T::Error;

    fn set_level(&mut self, level: f32) -> Result<(), Self::Error> {
        (**self).set_level(level)
    }
}
