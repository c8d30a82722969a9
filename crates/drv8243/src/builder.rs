//! Configuration-time wiring and validation.
//!
//! The builder is the only way to obtain a [`Drv8243Output`]: it collects
//! the externally-owned duty channel and pins, range-checks the curve
//! parameters, and hands back a fully-wired adapter. Every configuration
//! error surfaces here, before any runtime object exists — an out-of-range
//! `min_level` or `exponent` never reaches the write path.

use embedded_hal::digital::{InputPin, OutputPin, PinState};
use platform::{FloatOutput, NoPin};

use crate::config::{ConfigError, CurveExponent, Drv8243Config, MinLevel};
use crate::driver::{Direction, Drv8243Output};

/// Builder for [`Drv8243Output`].
///
/// Optional pins are type-state: calling [`with_direction_pin`] or
/// [`with_fault_pin`] swaps the corresponding type parameter from the
/// [`NoPin`] placeholder to the caller's pin type, so adapters without the
/// optional lines never name a pin type for them.
///
/// [`with_direction_pin`]: Drv8243Builder::with_direction_pin
/// [`with_fault_pin`]: Drv8243Builder::with_fault_pin
pub struct Drv8243Builder<O, S, D = NoPin, F = NoPin> {
    raw_output: O,
    nsleep_pin: S,
    direction_pin: Option<D>,
    nfault_pin: Option<F>,
    direction_high: bool,
    min_level: f32,
    exponent: f32,
}

impl<O, S> Drv8243Builder<O, S>
where
    O: FloatOutput,
    S: OutputPin,
{
    /// Start a builder from the two required references: the raw duty
    /// channel and the nSLEEP pin.
    pub fn new(raw_output: O, nsleep_pin: S) -> Self {
        Self {
            raw_output,
            nsleep_pin,
            direction_pin: None,
            nfault_pin: None,
            direction_high: true,
            min_level: MinLevel::DEFAULT,
            exponent: CurveExponent::DEFAULT,
        }
    }
}

impl<O, S, D, F> Drv8243Builder<O, S, D, F>
where
    O: FloatOutput,
    S: OutputPin,
    D: OutputPin,
    F: InputPin,
{
    /// Wire the H-bridge direction (PH) pin.
    pub fn with_direction_pin<D2: OutputPin>(self, pin: D2) -> Drv8243Builder<O, S, D2, F> {
        Drv8243Builder {
            raw_output: self.raw_output,
            nsleep_pin: self.nsleep_pin,
            direction_pin: Some(pin),
            nfault_pin: self.nfault_pin,
            direction_high: self.direction_high,
            min_level: self.min_level,
            exponent: self.exponent,
        }
    }

    /// Wire the nFAULT input (read-only from the adapter's perspective).
    pub fn with_fault_pin<F2: InputPin>(self, pin: F2) -> Drv8243Builder<O, S, D, F2> {
        Drv8243Builder {
            raw_output: self.raw_output,
            nsleep_pin: self.nsleep_pin,
            direction_pin: self.direction_pin,
            nfault_pin: Some(pin),
            direction_high: self.direction_high,
            min_level: self.min_level,
            exponent: self.exponent,
        }
    }

    /// Level meaning "forward" on the direction pin. Defaults to high.
    /// Only meaningful when a direction pin is wired.
    pub fn direction_high(mut self, active_high: bool) -> Self {
        self.direction_high = active_high;
        self
    }

    /// Dead-zone floor in `[0, 1]`. Defaults to 0.014. Validated in
    /// [`build`](Self::build).
    pub fn min_level(mut self, value: f32) -> Self {
        self.min_level = value;
        self
    }

    /// Response-curve exponent in `[0.1, 5]`. Defaults to 1.8. Validated in
    /// [`build`](Self::build).
    pub fn exponent(mut self, value: f32) -> Self {
        self.exponent = value;
        self
    }

    /// Validate the configuration and construct the adapter.
    ///
    /// Mirrors chip power-on state: nSLEEP is driven high (awake) and the
    /// direction pin, when wired, to its configured forward level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `min_level` or `exponent` is out of its
    /// valid range.
    pub fn build(self) -> Result<Drv8243Output<O, S, D, F>, ConfigError> {
        let config = Drv8243Config {
            min_level: MinLevel::new(self.min_level)?,
            exponent: CurveExponent::new(self.exponent)?,
            direction_high: self.direction_high,
        };

        let mut adapter = Drv8243Output {
            raw_output: self.raw_output,
            nsleep_pin: self.nsleep_pin,
            direction_pin: self.direction_pin,
            nfault_pin: self.nfault_pin,
            config,
            direction: Direction::Forward,
            handshake: None,
        };

        // Ignore pin errors during initial setup; if a pin is broken the
        // first drive command will surface it.
        let _ = adapter.nsleep_pin.set_high();
        if let Some(pin) = adapter.direction_pin.as_mut() {
            let _ = pin.set_state(PinState::from(config.direction_high));
        }

        Ok(adapter)
    }
}
