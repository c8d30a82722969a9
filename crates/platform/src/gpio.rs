//! Pin helpers on top of the `embedded-hal` digital traits
//!
//! Chip drivers in this workspace take their pins as
//! `embedded_hal::digital::{OutputPin, InputPin}` (and
//! `embedded_hal_async::digital::Wait` where they block on an edge), so any
//! HAL's GPIO type plugs in directly. This module only adds what the HAL
//! traits do not provide: a placeholder type for optional pins.

use core::convert::Infallible;

pub use embedded_hal::digital::PinState;

/// Placeholder for an unconnected optional pin.
///
/// Drivers with optional control lines (direction, fault) use `NoPin` as the
/// default type parameter so callers that never wire the line do not have to
/// name a pin type. Writes are no-ops. Reads return high — the inactive
/// level of an open-drain, pulled-up line such as nFAULT.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPin;

impl embedded_hal::digital::ErrorType for NoPin {
    type Error = Infallible;
}

impl embedded_hal::digital::OutputPin for NoPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl embedded_hal::digital::InputPin for NoPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(true)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(false)
    }
}

impl embedded_hal_async::digital::Wait for NoPin {
    // An unconnected pin never changes level; resolving immediately keeps
    // callers from hanging on a line that was never wired.
    async fn wait_for_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn wait_for_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn wait_for_rising_edge(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn wait_for_falling_edge(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn wait_for_any_edge(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::{InputPin, OutputPin};

    #[test]
    fn no_pin_reads_inactive_high() {
        let mut pin = NoPin;
        assert_eq!(pin.is_high(), Ok(true));
        assert_eq!(pin.is_low(), Ok(false));
    }

    #[test]
    fn no_pin_writes_are_no_ops() {
        let mut pin = NoPin;
        assert_eq!(pin.set_high(), Ok(()));
        assert_eq!(pin.set_low(), Ok(()));
    }

    #[tokio::test]
    async fn no_pin_wait_resolves_immediately() {
        use embedded_hal_async::digital::Wait;
        let mut pin = NoPin;
        assert_eq!(pin.wait_for_low().await, Ok(()));
        assert_eq!(pin.wait_for_any_edge().await, Ok(()));
    }
}
