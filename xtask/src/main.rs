//! Custom cargo commands for docsift.
//!
//! Usage:
//!   cargo xtask verify           - Run full verification suite
//!   cargo xtask test             - Run all tests
//!   cargo xtask check            - Quick check (check + test + clippy)
//!   cargo xtask bench            - Run benchmarks
//!   cargo xtask wasm-test        - Run the browser binding tests under Node
//!   cargo xtask fuzz <target>    - Run one fuzz target for 60s (needs cargo-fuzz)

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &[
    "search_queries",
    "query_parsing",
    "edit_distance",
    "category_filter",
];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("wasm-test") => wasm_test()?,
        Some("fuzz") => fuzz(args.next().as_deref())?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify          Run full verification suite (feature matrix + clippy + wasm tests)
  test            Run all Rust tests
  check           Quick check (cargo check + test + clippy)
  bench           Run benchmarks
  wasm-test       Run tests/wasm.rs under wasm-bindgen-test-runner (Node)
  fuzz <target>   Run a fuzz target for 60 seconds
                  targets: {}
"#,
        FUZZ_TARGETS.join(", ")
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("docsift Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Running tests (default features)...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ Tests passed\n");

    println!("[2/5] Running tests (no default features)...");
    run_cargo(&["test", "--quiet", "--no-default-features"])?;
    println!("✓ Tests passed without rayon or unicode folding\n");

    println!("[3/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/5] Testing WASM bindings...");
    wasm_test()?;
    println!("✓ WASM bindings hand back plain JS objects\n");

    println!("[5/5] Checking license headers...");
    check_license_headers()?;
    println!("✓ Every source file carries the license header\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

fn test() -> Result<()> {
    run_cargo(&["test"])
}

fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Needs the wasm32 target and `wasm-bindgen-cli` (for the test runner).
fn wasm_test() -> Result<()> {
    let status = Command::new("cargo")
        .args([
            "test",
            "--quiet",
            "--target",
            "wasm32-unknown-unknown",
            "--no-default-features",
            "--features",
            "wasm,unicode-normalization",
            "--test",
            "wasm",
        ])
        .env(
            "CARGO_TARGET_WASM32_UNKNOWN_UNKNOWN_RUNNER",
            "wasm-bindgen-test-runner",
        )
        .current_dir(project_root()?)
        .status()
        .context("Failed to run cargo test for wasm32 (is wasm-bindgen-cli installed?)")?;

    if !status.success() {
        bail!("WASM binding tests failed");
    }
    Ok(())
}

fn fuzz(target: Option<&str>) -> Result<()> {
    let Some(target) = target else {
        bail!("usage: cargo xtask fuzz <target>, one of: {}", FUZZ_TARGETS.join(", "));
    };
    if !FUZZ_TARGETS.contains(&target) {
        bail!("unknown fuzz target '{}', expected one of: {}", target, FUZZ_TARGETS.join(", "));
    }

    let status = Command::new("cargo")
        .args(["+nightly", "fuzz", "run", target, "--", "-max_total_time=60"])
        .current_dir(project_root()?)
        .status()
        .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;

    if !status.success() {
        bail!("fuzz target {} failed", target);
    }
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn check_license_headers() -> Result<()> {
    const HEADER: &str = "// SPDX-License-Identifier: Apache-2.0";
    let root = project_root()?;

    let mut missing = Vec::new();
    let mut pending = vec![root.join("src"), root.join("fuzz/fuzz_targets")];
    while let Some(dir) = pending.pop() {
        if !dir.exists() {
            continue;
        }
        for entry in std::fs::read_dir(&dir).with_context(|| format!("Failed to read {:?}", dir))? {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|e| e == "rs") {
                let source = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {:?}", path))?;
                if !source.lines().take(3).any(|l| l == HEADER) {
                    missing.push(path);
                }
            }
        }
    }

    if !missing.is_empty() {
        bail!("Missing license header in: {:?}", missing);
    }
    Ok(())
}
