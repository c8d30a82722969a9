//! nSLEEP wake/ACK handshake.
//!
//! After nSLEEP rises, the DRV8243 pulls nFAULT low to report ready, then
//! expects a short low ACK pulse on nSLEEP; it confirms the ACK by releasing
//! nFAULT. Until the ACK lands the chip stays in a reset-latched state and
//! ignores drive inputs.
//!
//! ```text
//! nSLEEP  ‾‾\____2ms____/‾‾‾‾‾‾‾\_22µs_/‾‾‾‾‾‾‾‾
//! nFAULT  ‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾\__ready__/‾‾‾‾‾‾‾‾‾‾‾‾
//! ```
//!
//! Without an observable nFAULT line the sequence degrades to fixed delays
//! and reports best-effort success.

use embassy_time::{Instant, Timer};
use embedded_hal::digital::{Error as _, ErrorKind, InputPin, OutputPin};

/// How long nSLEEP is held low to force an unambiguous SLEEP entry.
pub const SLEEP_FORCE_MS: u64 = 2;
/// Budget for nFAULT to go low (ready) after wake.
pub const READY_WAIT_TIMEOUT_US: u64 = 5_000;
/// Budget for nFAULT to go high again after the ACK pulse.
pub const ACK_WAIT_TIMEOUT_US: u64 = 5_000;
/// nFAULT polling granularity.
pub const POLL_STEP_US: u64 = 10;
/// ACK pulse width; the chip accepts 20–40 µs.
pub const ACK_PULSE_US: u64 = 22;

/// Outcome of one handshake attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HandshakeReport {
    /// Overall verdict. With an nFAULT pin: ready was seen and the ACK was
    /// confirmed. Without one: always true (best effort).
    pub ok: bool,
    /// nFAULT went low (chip ready) within the wait budget.
    pub saw_ready: bool,
    /// nFAULT returned high after the ACK pulse.
    pub saw_ack_confirm: bool,
    /// Time spent waiting for ready, in microseconds.
    pub ready_wait_us: u64,
    /// Time spent waiting for the ACK confirmation, in microseconds.
    pub ack_wait_us: u64,
}

/// Run the wake/ACK sequence. Leaves nSLEEP high regardless of outcome.
pub(crate) async fn run<S, F>(
    nsleep: &mut S,
    nfault: Option<&mut F>,
) -> Result<HandshakeReport, ErrorKind>
where
    S: OutputPin,
    F: InputPin,
{
    let mut report = HandshakeReport::default();

    #[cfg(feature = "defmt")]
    defmt::info!("drv8243 handshake: start");

    // Force SLEEP long enough to be unambiguous, then wake.
    nsleep.set_low().map_err(|e| e.kind())?;
    Timer::after_millis(SLEEP_FORCE_MS).await;
    nsleep.set_high().map_err(|e| e.kind())?;

    match nfault {
        Some(pin) => {
            let (saw_ready, ready_us) =
                wait_for_level(pin, false, READY_WAIT_TIMEOUT_US).await?;
            report.saw_ready = saw_ready;
            report.ready_wait_us = ready_us;

            #[cfg(feature = "defmt")]
            if !saw_ready {
                defmt::warn!(
                    "drv8243 handshake: no ready (nFAULT low) within {=u64}us",
                    ready_us
                );
            }

            ack_pulse(nsleep).await.map_err(|e| e.kind())?;

            if saw_ready {
                let (saw_confirm, ack_us) =
                    wait_for_level(pin, true, ACK_WAIT_TIMEOUT_US).await?;
                report.saw_ack_confirm = saw_confirm;
                report.ack_wait_us = ack_us;

                #[cfg(feature = "defmt")]
                if !saw_confirm {
                    defmt::warn!(
                        "drv8243 handshake: nFAULT did not release within {=u64}us",
                        ack_us
                    );
                }
            }

            report.ok = report.saw_ready && report.saw_ack_confirm;
        }
        None => {
            // No fault line to observe: give the chip a settle delay, send
            // the ACK, and assume success.
            Timer::after_millis(SLEEP_FORCE_MS).await;
            ack_pulse(nsleep).await.map_err(|e| e.kind())?;
            report.ok = true;
        }
    }

    // Always leave the chip awake.
    nsleep.set_high().map_err(|e| e.kind())?;

    #[cfg(feature = "defmt")]
    defmt::info!("drv8243 handshake: done ok={=bool}", report.ok);

    Ok(report)
}

/// Low ACK pulse on nSLEEP, targeting the middle of the 20–40 µs window.
async fn ack_pulse<S: OutputPin>(nsleep: &mut S) -> Result<(), S::Error> {
    nsleep.set_low()?;
    Timer::after_micros(ACK_PULSE_US).await;
    nsleep.set_high()
}

/// Poll `pin` until it reads `want_high` or `timeout_us` elapses.
/// Returns whether the level was seen and how long the wait took.
async fn wait_for_level<F: InputPin>(
    pin: &mut F,
    want_high: bool,
    timeout_us: u64,
) -> Result<(bool, u64), ErrorKind> {
    let start = Instant::now();
    loop {
        if pin.is_high().map_err(|e| e.kind())? == want_high {
            return Ok((true, start.elapsed().as_micros()));
        }
        if start.elapsed().as_micros() >= timeout_us {
            return Ok((false, start.elapsed().as_micros()));
        }
        Timer::after_micros(POLL_STEP_US).await;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::builder::Drv8243Builder;
    use platform::mocks::{MockFloatOutput, MockInputPin, MockOutputPin};

    #[tokio::test]
    async fn full_sequence_with_cooperative_chip_reports_ok() {
        // nFAULT: high at wake, low (ready), then high again after the ACK.
        let mut adapter =
            Drv8243Builder::new(MockFloatOutput::new(), MockOutputPin::default())
                .with_fault_pin(MockInputPin::new(&[true, false, false, true]))
                .build()
                .unwrap();
        let report = adapter.wake_handshake().await.unwrap();
        assert!(report.ok);
        assert!(report.saw_ready);
        assert!(report.saw_ack_confirm);
        assert!(adapter.handshake_report().is_some());
    }

    #[tokio::test]
    async fn handshake_leaves_nsleep_high_and_duty_zero() {
        let mut adapter =
            Drv8243Builder::new(MockFloatOutput::new(), MockOutputPin::default())
                .with_fault_pin(MockInputPin::new(&[true, false, false, true]))
                .build()
                .unwrap();
        adapter.wake_handshake().await.unwrap();
        let (out, nsleep, _, _) = adapter.release();
        assert!(nsleep.is_set_high(), "chip must be left awake");
        // Duty forced off before nSLEEP was cycled.
        assert_eq!(out.levels().first().copied(), Some(0.0));
    }

    #[tokio::test]
    async fn silent_fault_line_times_out_and_reports_not_ok() {
        // nFAULT stuck high: ready never seen.
        let mut adapter =
            Drv8243Builder::new(MockFloatOutput::new(), MockOutputPin::default())
                .with_fault_pin(MockInputPin::new(&[true]))
                .build()
                .unwrap();
        let report = adapter.wake_handshake().await.unwrap();
        assert!(!report.ok);
        assert!(!report.saw_ready);
        assert!(!report.saw_ack_confirm);
        assert!(report.ready_wait_us >= READY_WAIT_TIMEOUT_US);
    }

    #[tokio::test]
    async fn stuck_ready_without_release_reports_not_ok() {
        // nFAULT goes low and never releases after the ACK.
        let mut adapter =
            Drv8243Builder::new(MockFloatOutput::new(), MockOutputPin::default())
                .with_fault_pin(MockInputPin::new(&[true, false]))
                .build()
                .unwrap();
        let report = adapter.wake_handshake().await.unwrap();
        assert!(!report.ok);
        assert!(report.saw_ready);
        assert!(!report.saw_ack_confirm);
    }

    #[tokio::test]
    async fn no_fault_pin_degrades_to_best_effort() {
        let mut adapter =
            Drv8243Builder::new(MockFloatOutput::new(), MockOutputPin::default())
                .build()
                .unwrap();
        let report = adapter.wake_handshake().await.unwrap();
        assert!(report.ok);
        assert!(!report.saw_ready);
        let (_, nsleep, _, _) = adapter.release();
        // Build high, force-sleep low, wake high, ACK low, ACK high, final high.
        assert_eq!(nsleep.writes(), &[true, false, true, false, true, true]);
    }
}
