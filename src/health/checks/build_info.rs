//! Build information health check

use crate::build_info;
use crate::health::check::{CheckResult, SystemCheck};

/// Checks that build metadata was embedded at compile time
pub struct BuildInfoCheck;

impl BuildInfoCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BuildInfoCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for BuildInfoCheck {
    fn name(&self) -> &'static str {
        "Build Info"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates build metadata (rustc, target, timestamps)")
    }

    fn check(&self) -> CheckResult {
        let mut details = Vec::new();
        let mut missing = Vec::new();

        for (label, value) in build_info::fields() {
            if value.trim().is_empty() {
                missing.push(label);
                details.push(format!("  ⚠ {}: <empty>", label));
            } else {
                details.push(format!("  {}: {}", label, value));
            }
        }
        details.push(format!("  Channel: {}", build_info::RUSTC_CHANNEL));

        if missing.is_empty() {
            CheckResult::pass(build_info::version_string()).with_details(details.join("\n"))
        } else {
            CheckResult::warn(format!("Missing build metadata: {}", missing.join(", ")))
                .with_details(details.join("\n"))
        }
    }
}
