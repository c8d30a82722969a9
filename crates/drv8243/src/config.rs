//! Validated driver configuration.
//!
//! All range checking happens here, once, before an adapter is constructed.
//! The newtypes make an out-of-range value unrepresentable past this point,
//! so the runtime write path never validates anything.

/// Error returned when a configuration value is out of its valid range.
#[derive(Debug, Clone, Copy, PartialEq, thiserror_no_std::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `min_level` must be within `[0, 1]`.
    #[error("min_level {value} out of range [0, 1]")]
    MinLevelOutOfRange {
        /// The rejected value.
        value: f32,
    },
    /// `exponent` must be within `[0.1, 5]`.
    #[error("exponent {value} out of range [0.1, 5]")]
    ExponentOutOfRange {
        /// The rejected value.
        value: f32,
    },
}

/// Dead-zone floor: the minimum normalized duty below which the motor
/// produces no torque or movement.
///
/// Wraps an `f32` with the invariant `0.0 <= value <= 1.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct MinLevel(f32);

impl MinLevel {
    /// Default floor, measured for small geared DC motors: 1.4% duty.
    pub const DEFAULT: f32 = 0.014;

    /// Create a `MinLevel`, rejecting values outside `[0, 1]` (and NaN).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MinLevelOutOfRange`] when out of range.
    pub fn new(value: f32) -> Result<Self, ConfigError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ConfigError::MinLevelOutOfRange { value })
        }
    }

    /// Return the inner duty floor.
    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for MinLevel {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Response-curve exponent compensating the non-linear torque/speed response
/// of the motor/driver combination.
///
/// Wraps an `f32` with the invariant `0.1 <= value <= 5.0`. An exponent of
/// 1.0 leaves the command linear; values above 1 concentrate resolution at
/// the low end where small motors are most sensitive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct CurveExponent(f32);

impl CurveExponent {
    /// Minimum accepted exponent.
    pub const MIN: f32 = 0.1;

    /// Maximum accepted exponent.
    pub const MAX: f32 = 5.0;

    /// Default exponent, a perceptual-linearity compromise for small motors.
    pub const DEFAULT: f32 = 1.8;

    /// Create a `CurveExponent`, rejecting values outside `[0.1, 5]` (and NaN).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ExponentOutOfRange`] when out of range.
    pub fn new(value: f32) -> Result<Self, ConfigError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ConfigError::ExponentOutOfRange { value })
        }
    }

    /// Return the inner exponent.
    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for CurveExponent {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Complete validated adapter configuration.
///
/// `direction_high` gives the meaning of the "forward" polarity level on the
/// direction pin; it is only consulted when a direction pin is wired.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Drv8243Config {
    /// Dead-zone floor applied to every nonzero command.
    pub min_level: MinLevel,
    /// Response-curve exponent.
    pub exponent: CurveExponent,
    /// Level written to the direction pin for [`Forward`](crate::Direction::Forward).
    pub direction_high: bool,
}

impl Default for Drv8243Config {
    fn default() -> Self {
        Self {
            min_level: MinLevel::default(),
            exponent: CurveExponent::default(),
            direction_high: true,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MinLevel {
    fn format(&self, fmt: defmt::Formatter<'_>) {
        defmt::write!(fmt, "{=f32}", self.0);
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for CurveExponent {
    fn format(&self, fmt: defmt::Formatter<'_>) {
        defmt::write!(fmt, "{=f32}", self.0);
    }
}
