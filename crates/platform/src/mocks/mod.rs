//! Mock implementations for testing
//!
//! This module provides recording mocks of the platform traits and of the
//! `embedded-hal` digital pin traits for use in unit and integration tests.

#![cfg(any(test, feature = "std"))]

use core::convert::Infallible;

use crate::output::FloatOutput;

/// Mock float-output sink — records every written level for assertions.
pub struct MockFloatOutput {
    levels: heapless::Vec<f32, 64>,
}

impl MockFloatOutput {
    /// Create a new mock output with no recorded writes.
    pub fn new() -> Self {
        Self {
            levels: heapless::Vec::new(),
        }
    }

    /// The most recently written level, if any write happened.
    pub fn last_level(&self) -> Option<f32> {
        self.levels.last().copied()
    }

    /// All recorded levels, oldest first.
    pub fn levels(&self) -> &[f32] {
        &self.levels
    }
}

impl Default for MockFloatOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl FloatOutput for MockFloatOutput {
    type Error = Infallible;

    fn set_level(&mut self, level: f32) -> Result<(), Self::Error> {
        // Keep recording bounded; drop writes past capacity.
        let _ = self.levels.push(level);
        Ok(())
    }
}

/// Mock digital output pin — records every write and tracks the level.
pub struct MockOutputPin {
    state: bool,
    writes: heapless::Vec<bool, 64>,
}

impl MockOutputPin {
    /// Create a new mock pin at the given initial level.
    pub fn new(initial: bool) -> Self {
        Self {
            state: initial,
            writes: heapless::Vec::new(),
        }
    }

    /// Current pin level.
    pub fn is_set_high(&self) -> bool {
        self.state
    }

    /// All recorded writes, oldest first.
    pub fn writes(&self) -> &[bool] {
        &self.writes
    }
}

impl Default for MockOutputPin {
    fn default() -> Self {
        Self::new(false)
    }
}

impl embedded_hal::digital::ErrorType for MockOutputPin {
    type Error = Infallible;
}

impl embedded_hal::digital::OutputPin for MockOutputPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.state = false;
        let _ = self.writes.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.state = true;
        let _ = self.writes.push(true);
        Ok(())
    }
}

/// Mock digital input pin replaying a scripted sequence of levels.
///
/// Each read consumes one script entry; the final entry repeats once the
/// script is exhausted. An empty script reads high (the inactive level of a
/// pulled-up open-drain line).
pub struct MockInputPin {
    script: heapless::Vec<bool, 32>,
    cursor: usize,
}

impl MockInputPin {
    /// Create a mock pin from a level script (oldest read first).
    pub fn new(script: &[bool]) -> Self {
        let mut vec = heapless::Vec::new();
        for level in script {
            let _ = vec.push(*level);
        }
        Self { script: vec, cursor: 0 }
    }

    /// Number of script entries consumed so far.
    pub fn reads(&self) -> usize {
        self.cursor
    }

    fn current(&self) -> bool {
        self.script
            .get(self.cursor)
            .or_else(|| self.script.last())
            .copied()
            .unwrap_or(true)
    }

    #[allow(clippy::arithmetic_side_effects)] // Mock cursor; bounded by script length
    fn advance(&mut self) {
        if self.cursor < self.script.len() {
            self.cursor += 1;
        }
    }

    /// Advance the script until the wanted level is current (or the script
    /// runs out, in which case the last entry sticks).
    fn seek(&mut self, want: bool) {
        while self.current() != want && self.cursor < self.script.len() {
            self.advance();
        }
    }
}

impl embedded_hal::digital::ErrorType for MockInputPin {
    type Error = Infallible;
}

impl embedded_hal::digital::InputPin for MockInputPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        let level = self.current();
        self.advance();
        Ok(level)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|v| !v)
    }
}

impl embedded_hal_async::digital::Wait for MockInputPin {
    async fn wait_for_high(&mut self) -> Result<(), Self::Error> {
        self.seek(true);
        Ok(())
    }

    async fn wait_for_low(&mut self) -> Result<(), Self::Error> {
        self.seek(false);
        Ok(())
    }

    async fn wait_for_rising_edge(&mut self) -> Result<(), Self::Error> {
        self.seek(false);
        self.seek(true);
        Ok(())
    }

    async fn wait_for_falling_edge(&mut self) -> Result<(), Self::Error> {
        self.seek(true);
        self.seek(false);
        Ok(())
    }

    async fn wait_for_any_edge(&mut self) -> Result<(), Self::Error> {
        self.advance();
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use embedded_hal::digital::{InputPin, OutputPin};

    #[test]
    fn float_output_records_levels_in_order() {
        let mut out = MockFloatOutput::new();
        out.set_level(0.25).unwrap();
        out.set_level(0.75).unwrap();
        assert_eq!(out.levels(), &[0.25, 0.75]);
        assert_eq!(out.last_level(), Some(0.75));
    }

    #[test]
    fn float_output_starts_empty() {
        let out = MockFloatOutput::default();
        assert!(out.levels().is_empty());
        assert_eq!(out.last_level(), None);
    }

    #[test]
    fn output_pin_tracks_state_and_writes() {
        let mut pin = MockOutputPin::new(false);
        pin.set_high().unwrap();
        pin.set_low().unwrap();
        pin.set_high().unwrap();
        assert!(pin.is_set_high());
        assert_eq!(pin.writes(), &[true, false, true]);
    }

    #[test]
    fn input_pin_replays_script_and_sticks_on_last() {
        let mut pin = MockInputPin::new(&[true, false]);
        assert_eq!(pin.is_high(), Ok(true));
        assert_eq!(pin.is_high(), Ok(false));
        // Script exhausted: last level repeats.
        assert_eq!(pin.is_high(), Ok(false));
        assert_eq!(pin.is_high(), Ok(false));
    }

    #[test]
    fn input_pin_empty_script_reads_high() {
        let mut pin = MockInputPin::new(&[]);
        assert_eq!(pin.is_high(), Ok(true));
        assert_eq!(pin.is_low(), Ok(false));
    }

    #[tokio::test]
    async fn input_pin_wait_for_low_consumes_leading_highs() {
        use embedded_hal_async::digital::Wait;
        let mut pin = MockInputPin::new(&[true, true, false, true]);
        pin.wait_for_low().await.unwrap();
        assert_eq!(pin.is_high(), Ok(false));
    }
}
