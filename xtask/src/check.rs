use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Command;
use std::time::Instant;

/// Bare-metal target for the Krait cores on the MSM8960.
const TARGET: &str = "armv7a-none-eabi";

struct Step {
    label: &'static str,
    args: &'static [&'static str],
    cross: bool,
}

const STEPS: &[Step] = &[
    Step {
        label: "platform crate (no_std)",
        args: &["check", "-p", "platform", "--target", TARGET, "--no-default-features"],
        cross: true,
    },
    Step {
        label: "machine driver (no_std, defmt)",
        args: &["check", "-p", "msm8960-audio", "--target", TARGET, "--features", "defmt"],
        cross: true,
    },
    Step {
        label: "machine driver (host, tracing)",
        args: &["check", "-p", "msm8960-audio", "--features", "std,tracing"],
        cross: false,
    },
    Step {
        label: "machine driver (host, no logging)",
        args: &["check", "-p", "msm8960-audio", "--features", "std"],
        cross: false,
    },
];

pub fn run(host_only: bool) -> Result<()> {
    println!();
    println!("{}", "🔍 Checking driver builds...".cyan().bold());
    println!();

    let total_start = Instant::now();

    for step in STEPS.iter().filter(|s| !(host_only && s.cross)) {
        println!("{}", format!("  Checking {}...", step.label).cyan());
        let start = Instant::now();

        let output = Command::new("cargo")
            .args(step.args)
            .output()
            .with_context(|| format!("Failed to check {}", step.label))?;

        if !output.status.success() {
            eprintln!("{}", format!("  ✗ {} check failed", step.label).red().bold());
            eprintln!();
            eprintln!("{}", String::from_utf8_lossy(&output.stderr));
            anyhow::bail!("{} check failed", step.label);
        }

        println!(
            "{}",
            format!(
                "  ✓ {} passed in {:.2}s",
                step.label,
                start.elapsed().as_secs_f64()
            )
            .green()
        );
        println!();
    }

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

    println!("{}", "  Checking code formatting...".cyan());

    let fmt_output = Command::new("cargo")
        .args(["fmt", "--all", "--check"])
        .output()
        .context("Failed to run cargo fmt")?;

    if !fmt_output.status.success() {
        eprintln!("{}", "  ⚠ Formatting issues found".yellow().bold());
        eprintln!("     Run 'cargo fmt --all' to fix");
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
