//! Host demo: wire the adapter to recording mocks and sweep the command range.
//!
//! Run with `cargo run -p drv8243 --example mock_drive`.

// Host demo — expect/unwrap acceptable in example code.
#![allow(clippy::expect_used, clippy::unwrap_used)]

use drv8243::{Direction, Drv8243Builder};
use platform::mocks::{MockFloatOutput, MockInputPin, MockOutputPin};

fn main() {
    let mut motor = Drv8243Builder::new(MockFloatOutput::new(), MockOutputPin::default())
        .with_direction_pin(MockOutputPin::default())
        .with_fault_pin(MockInputPin::new(&[true]))
        .build()
        .expect("defaults are in range");

    motor
        .set_direction(Direction::Forward)
        .expect("mock pins are infallible");
    for step in 0..=10u8 {
        let level = f32::from(step) / 10.0;
        motor.set_level(level).expect("mock pins are infallible");
    }

    let faulted = motor.is_faulted().expect("mock pins are infallible");
    let (out, nsleep, _, _) = motor.release();

    println!(
        "nSLEEP ends {}, fault reported: {faulted}",
        if nsleep.is_set_high() { "awake" } else { "asleep" }
    );
    for (step, duty) in out.levels().iter().enumerate() {
        let command = f32::from(u8::try_from(step).unwrap_or(u8::MAX)) / 10.0;
        println!("command {command:>4.2} -> duty {duty:.4}");
    }
}
