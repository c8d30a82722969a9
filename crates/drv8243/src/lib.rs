//! DRV8243 H-bridge output adapter
//!
//! Sits between a generic normalized float output (PWM duty) and the control
//! pins of a TI DRV8243-style motor driver. On each commanded value the
//! adapter shapes the duty through a dead-zone floor and an exponential
//! response curve, then drives three logical lines:
//!
//! - the continuous raw duty channel ([`platform::FloatOutput`])
//! - the binary nSLEEP enable line (required)
//! - an optional direction (PH) line for H-bridge polarity
//!
//! An optional nFAULT input is exposed read-only for fault polling; the
//! adapter never writes it.
//!
//! # Shaping
//!
//! ```text
//! shaped = min_level + (1 - min_level) * level ^ exponent
//! ```
//!
//! `min_level` is the duty below which the motor produces no torque;
//! `exponent` compensates the motor's non-linear speed response. Both are
//! range-checked once, at configuration time — the runtime write path
//! performs no validation.
//!
//! # Wake handshake
//!
//! The DRV8243 reports ready on nFAULT after waking and expects a 20–40 µs
//! ACK pulse on nSLEEP before it accepts drive commands. See [`handshake`].
//!
//! # Example
//!
//! ```no_run
//! use drv8243::Drv8243Builder;
//! use platform::mocks::{MockFloatOutput, MockOutputPin};
//!
//! let mut motor = Drv8243Builder::new(MockFloatOutput::new(), MockOutputPin::default())
//!     .min_level(0.02)
//!     .exponent(1.5)
//!     .build()
//!     .unwrap();
//! motor.set_level(0.5).unwrap();
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)]
#![allow(clippy::must_use_candidate)] // hardware accessors — callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod builder;
pub mod config;
pub mod curve;
pub mod driver;
pub mod handshake;

pub use builder::Drv8243Builder;
pub use config::{ConfigError, CurveExponent, Drv8243Config, MinLevel};
pub use driver::{Direction, DriveError, Drv8243Output};
pub use handshake::HandshakeReport;
