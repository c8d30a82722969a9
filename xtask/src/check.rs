use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Command;
use std::time::Instant;

pub fn run() -> Result<()> {
    println!();
    println!("{}", "🔍 Checking builds...".cyan().bold());
    println!();

    let total_start = Instant::now();

    // Check 1: no_std target (driver + platform crates)
    println!("{}", "  Checking no_std target (thumbv7em)...".cyan());
    let nostd_start = Instant::now();

    let nostd_output = Command::new("cargo")
        .args([
            "check",
            "-p",
            "drv8243",
            "--target",
            "thumbv7em-none-eabihf",
            "--no-default-features",
        ])
        .output()
        .context("Failed to check no_std build")?;

    if !nostd_output.status.success() {
        eprintln!("{}", "  ✗ no_std check failed".red().bold());
        eprintln!();
        eprintln!("{}", String::from_utf8_lossy(&nostd_output.stderr));
        anyhow::bail!("no_std check failed");
    }

    println!(
        "{}",
        format!(
            "  ✓ no_std check passed in {:.2}s",
            nostd_start.elapsed().as_secs_f64()
        )
        .green()
    );
    println!();

    // Check 2: host target (mocks + test features)
    println!("{}", "  Checking host target...".cyan());
    let host_start = Instant::now();

    let host_output = Command::new("cargo")
        .args(["check", "--workspace", "--all-targets"])
        .output()
        .context("Failed to check host build")?;

    if !host_output.status.success() {
        eprintln!("{}", "  ✗ Host check failed".red().bold());
        eprintln!();
        eprintln!("{}", String::from_utf8_lossy(&host_output.stderr));
        anyhow::bail!("Host check failed");
    }

    println!(
        "{}",
        format!(
            "  ✓ Host check passed in {:.2}s",
            host_start.elapsed().as_secs_f64()
        )
        .green()
    );
    println!();

    // Check 3: Clippy lints
    println!("{}", "  Running clippy lints...".cyan());
    let clippy_start = Instant::now();

    let clippy_output = Command::new("cargo")
        .args(["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"])
        .output()
        .context("Failed to run clippy")?;

    if !clippy_output.status.success() {
        eprintln!("{}", "  ⚠ Clippy warnings found".yellow().bold());
        eprintln!();
        eprintln!("{}", String::from_utf8_lossy(&clippy_output.stderr));
        // Don't fail on clippy warnings, just show them
    } else {
        println!(
            "{}",
            format!(
                "  ✓ Clippy passed in {:.2}s",
                clippy_start.elapsed().as_secs_f64()
            )
            .green()
        );
    }
    println!();

    // Check 4: Format check
    println!("{}", "  Checking code formatting...".cyan());

    let fmt_output = Command::new("cargo")
        .args(["fmt", "--all", "--check"])
        .output()
        .context("Failed to run cargo fmt")?;

    if !fmt_output.status.success() {
        eprintln!("{}", "  ⚠ Formatting issues found".yellow().bold());
        eprintln!("     Run 'cargo fmt --all' to fix");
        // Don't fail on format issues
    } else {
        println!("{}", "  ✓ Formatting check passed".green());
    }
    println!();

    println!(
        "{}",
        format!(
            "✓ All checks completed in {:.2}s",
            total_start.elapsed().as_secs_f64()
        )
        .green()
        .bold()
    );
    println!();

    Ok(())
}
