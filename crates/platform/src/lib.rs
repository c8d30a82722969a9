//! Hardware Abstraction Layer for the motor-output firmware
//!
//! This crate provides the trait seams between the generic output layer and
//! the chip drivers, enabling development and testing without physical
//! hardware.
//!
//! # Architecture Layers
//!
//! ```text
//! Component Layer (drv8243 crate and friends)
//!         ↓
//! Platform HAL (this crate - trait abstractions)
//!         ↓
//! Hardware Layer (embedded-hal implementations)
//! ```
//!
//! # Abstractions
//!
//! - [`FloatOutput`] - normalized [0.0, 1.0] duty sink (PWM, DAC, ...)
//! - [`gpio`] - pin helpers on top of `embedded-hal` digital traits
//! - [`mocks`] - in-process recording mocks for host tests
//!
//! # Features
//!
//! - `std`: expose the mock implementations outside of `#[cfg(test)]`

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

pub mod gpio;
pub mod mocks;
pub mod output;

pub use gpio::NoPin;
pub use output::FloatOutput;
