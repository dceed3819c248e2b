//! Integration tests for the health check system

use flap_core::health::{self, CheckStatus, HealthCheckRunner, SystemCheck, checks::*};
use flap_core::sim::flappy::GameConfig;

#[test]
fn test_all_health_checks() {
    let report = health::run_all_checks();

    if !report.is_healthy() {
        eprintln!("\n{}", health::format_report(&report));
    }

    assert!(
        report.is_healthy(),
        "Health checks failed: {} failures, {} warnings",
        report.failed,
        report.warned
    );
}

#[test]
fn test_config_check() {
    let result = ConfigCheck::new().check();
    assert!(
        result.status.is_ok(),
        "Config check failed: {}",
        result.message
    );
}

#[test]
fn test_world_check() {
    let result = WorldCheck::new().check();
    assert_eq!(
        result.status,
        CheckStatus::Pass,
        "World check failed: {} {:?}",
        result.message,
        result.details
    );
}

#[test]
fn test_world_check_rejects_invalid_config() {
    let check = WorldCheck::with_config(GameConfig {
        scroll_duration: -1.0,
        ..Default::default()
    });
    assert!(check.check().status.is_fail());
}

#[test]
fn test_build_info_check() {
    let result = BuildInfoCheck::new().check();
    assert!(
        result.status.is_ok(),
        "Build info check failed: {}",
        result.message
    );
}

#[test]
fn test_runner_collects_all_checks() {
    let report = HealthCheckRunner::new()
        .add_check(ConfigCheck::new())
        .add_check(WorldCheck::new())
        .run();

    assert_eq!(report.total, 2, "Expected 2 checks in report");
    assert_eq!(report.passed + report.warned + report.failed, report.total);
}

#[test]
fn test_report_lists_every_system() {
    let report = health::run_all_checks();
    let text = health::format_report(&report);
    for (name, _) in &report.results {
        assert!(text.contains(name.as_str()), "{name} missing from report");
    }
}
