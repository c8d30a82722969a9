//! The runtime output adapter.
//!
//! Owns the control pins and the wrapped raw duty channel. Each command is a
//! synchronous, memoryless pass from (level, direction) to pin/output writes
//! — the only state retained between calls is the last commanded direction
//! and the stored handshake report.

use embedded_hal::digital::{Error as _, ErrorKind, InputPin, OutputPin, PinState};
use platform::{FloatOutput, NoPin};

use crate::config::Drv8243Config;
use crate::curve;
use crate::handshake::{self, HandshakeReport};

/// Commands at or below this level are treated as a full stop.
///
/// Matches the smallest duty step of a 12-bit PWM backend; anything below it
/// would be indistinguishable from off at the motor anyway.
pub const ZERO_LEVEL_EPSILON: f32 = 0.0005;

/// H-bridge drive polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Drive the direction pin to its configured forward level.
    Forward,
    /// Drive the direction pin to the opposite level.
    Reverse,
}

/// Runtime error from a drive command.
///
/// Pin failures are erased to [`embedded_hal::digital::ErrorKind`] so the
/// error type does not accumulate one parameter per control line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror_no_std::Error)]
pub enum DriveError<E: core::fmt::Debug> {
    /// The wrapped raw duty channel rejected a write.
    #[error("raw output write failed: {0:?}")]
    RawOutput(E),
    /// A control pin access failed.
    #[error("control pin access failed: {0}")]
    Pin(ErrorKind),
}

/// DRV8243 output adapter.
///
/// Constructed once at system initialization via
/// [`Drv8243Builder`](crate::Drv8243Builder), wired to its externally-owned
/// duty channel and pins, and kept for the process lifetime. Commands are
/// issued serially by a single owner; no locking is involved.
pub struct Drv8243Output<O, S, D = NoPin, F = NoPin> {
    pub(crate) raw_output: O,
    pub(crate) nsleep_pin: S,
    pub(crate) direction_pin: Option<D>,
    pub(crate) nfault_pin: Option<F>,
    pub(crate) config: Drv8243Config,
    pub(crate) direction: Direction,
    pub(crate) handshake: Option<HandshakeReport>,
}

impl<O, S, D, F> Drv8243Output<O, S, D, F>
where
    O: FloatOutput,
    S: OutputPin,
    D: OutputPin,
    F: InputPin,
{
    /// Command a new drive level in `[0.0, 1.0]`.
    ///
    /// Zero (or anything at/below [`ZERO_LEVEL_EPSILON`]) puts the chip to
    /// sleep and zeroes the raw duty, regardless of prior state. A nonzero
    /// command wakes the chip and writes the shaped duty. The direction pin
    /// is never touched here — direction is a separate command channel, and
    /// its level stays latched across stop commands.
    pub fn set_level(&mut self, level: f32) -> Result<(), DriveError<O::Error>> {
        if level <= ZERO_LEVEL_EPSILON {
            self.nsleep_pin
                .set_low()
                .map_err(|e| DriveError::Pin(e.kind()))?;
            return self.raw_output.set_level(0.0).map_err(DriveError::RawOutput);
        }

        #[cfg(feature = "defmt")]
        if self.handshake.is_none() {
            defmt::warn!("set_level before wake handshake; chip may ignore drive");
        }

        self.nsleep_pin
            .set_high()
            .map_err(|e| DriveError::Pin(e.kind()))?;

        let shaped = curve::shape(
            level,
            self.config.min_level.get(),
            self.config.exponent.get(),
        );

        #[cfg(feature = "defmt")]
        defmt::debug!("set_level: {=f32} -> duty {=f32}", level, shaped);

        self.raw_output
            .set_level(shaped)
            .map_err(DriveError::RawOutput)
    }

    /// Command the H-bridge polarity.
    ///
    /// Writes the configured `direction_high` level for
    /// [`Direction::Forward`] and its negation for [`Direction::Reverse`].
    /// A no-op (but still recorded) when no direction pin is wired.
    pub fn set_direction(&mut self, direction: Direction) -> Result<(), DriveError<O::Error>> {
        self.direction = direction;
        if let Some(pin) = self.direction_pin.as_mut() {
            let level = match direction {
                Direction::Forward => self.config.direction_high,
                Direction::Reverse => !self.config.direction_high,
            };
            pin.set_state(PinState::from(level))
                .map_err(|e| DriveError::Pin(e.kind()))?;
        }
        Ok(())
    }

    /// The last commanded direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Poll the nFAULT line.
    ///
    /// nFAULT is active-low: a low read means the chip reports a fault.
    /// Returns `false` when no fault pin is wired. The adapter only ever
    /// reads this pin.
    pub fn is_faulted(&mut self) -> Result<bool, DriveError<O::Error>> {
        match self.nfault_pin.as_mut() {
            Some(pin) => pin.is_low().map_err(|e| DriveError::Pin(e.kind())),
            None => Ok(false),
        }
    }

    /// Run the nSLEEP wake/ACK handshake once and store the report.
    ///
    /// Forces the raw duty to zero first so the bridge cannot glitch while
    /// nSLEEP is being cycled. The write path does not gate on the
    /// handshake; run this during system bring-up, before the first drive
    /// command.
    pub async fn wake_handshake(&mut self) -> Result<HandshakeReport, DriveError<O::Error>> {
        self.raw_output.set_level(0.0).map_err(DriveError::RawOutput)?;
        let report = handshake::run(&mut self.nsleep_pin, self.nfault_pin.as_mut())
            .await
            .map_err(DriveError::Pin)?;
        self.handshake = Some(report);
        Ok(report)
    }

    /// Report of the last wake handshake, if one has run.
    pub fn handshake_report(&self) -> Option<&HandshakeReport> {
        self.handshake.as_ref()
    }

    /// The validated configuration this adapter was built with.
    pub fn config(&self) -> &Drv8243Config {
        &self.config
    }

    /// Tear the adapter apart, returning the duty channel and pins.
    pub fn release(self) -> (O, S, Option<D>, Option<F>) {
        (
            self.raw_output,
            self.nsleep_pin,
            self.direction_pin,
            self.nfault_pin,
        )
    }
}

impl<O, S, D, F> Drv8243Output<O, S, D, F>
where
    O: FloatOutput,
    F: embedded_hal_async::digital::Wait,
{
    /// Wait for the chip to assert nFAULT (active-low).
    ///
    /// Intended for an out-of-band fault monitor task. Resolves immediately
    /// when no fault pin is wired.
    pub async fn wait_for_fault(&mut self) -> Result<(), DriveError<O::Error>> {
        match self.nfault_pin.as_mut() {
            Some(pin) => pin.wait_for_low().await.map_err(|e| DriveError::Pin(e.kind())),
            None => Ok(()),
        }
    }
}
