//! Build-time information
//!
//! Metadata captured by `vergen` in build.rs.

/// Build timestamp (when the binary was compiled)
pub const BUILD_TIMESTAMP: &str = env!("VERGEN_BUILD_TIMESTAMP");

/// Cargo optimization level (0, 1, 2, 3, s, z)
pub const CARGO_OPT_LEVEL: &str = env!("VERGEN_CARGO_OPT_LEVEL");

/// Target triple (e.g., x86_64-unknown-linux-gnu)
pub const CARGO_TARGET_TRIPLE: &str = env!("VERGEN_CARGO_TARGET_TRIPLE");

/// Rust compiler version (e.g., 1.85.0)
pub const RUSTC_SEMVER: &str = env!("VERGEN_RUSTC_SEMVER");

/// Rust channel (stable, beta, or nightly)
pub const RUSTC_CHANNEL: &str = env!("VERGEN_RUSTC_CHANNEL");

/// Crate version from Cargo.toml
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns a short version string
///
/// Format: `{version} ({target_triple}, opt{opt_level})`
pub fn version_string() -> String {
    format!(
        "{} ({}, opt{})",
        PKG_VERSION, CARGO_TARGET_TRIPLE, CARGO_OPT_LEVEL
    )
}

/// Returns one line per metadata field, in display order
pub fn fields() -> [(&'static str, &'static str); 5] {
    [
        ("Version", PKG_VERSION),
        ("Built", BUILD_TIMESTAMP),
        ("Target", CARGO_TARGET_TRIPLE),
        ("Optimization", CARGO_OPT_LEVEL),
        ("Rustc", RUSTC_SEMVER),
    ]
}
