//! Boundary reporting for the resolver.
//!
//! The resolver computation returns a plain [Resolution] value; this module
//! is the only place its results are written out. The CI output file is
//! passed in explicitly by the binary, which is what reads the environment.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::resolve::Resolution;

/// Environment variable naming the CI output file. Resolved by the binary,
/// never inside the computation.
pub const CI_OUTPUT_FILE_VAR: &str = "GITHUB_ENV";

/// Prints the resolver's output contract and, when a CI output file is
/// designated, appends the `KEY=VALUE` lines to it.
///
/// Stdout lines:
/// - `Latest release tag: <latest>`
/// - a status line for the computed next dev tag
/// - `NEXT_DEV_TAG=<next>`
/// - `LATEST_RELEASE_TAG=<latest official>`
///
/// The file is appended to, not truncated; `LATEST_RELEASE_TAG` is written
/// first.
pub fn emit_resolution(resolution: &Resolution, ci_output_file: Option<&Path>) -> Result<()> {
    println!("Latest release tag: {}", resolution.latest_tag);
    if resolution.incremented_dev {
        println!(
            "Computed next dev tag (incrementing dev number): {}",
            resolution.next_dev_tag
        );
    } else {
        println!("Computed next dev tag: {}", resolution.next_dev_tag);
    }
    println!("NEXT_DEV_TAG={}", resolution.next_dev_tag);
    println!("LATEST_RELEASE_TAG={}", resolution.latest_official_tag);

    if let Some(path) = ci_output_file {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "LATEST_RELEASE_TAG={}", resolution.latest_official_tag)?;
        writeln!(file, "NEXT_DEV_TAG={}", resolution.next_dev_tag)?;
    }

    Ok(())
}
