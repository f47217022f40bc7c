//! Golden snapshot tests for report output
//!
//! These tests render the driver's reports and compare them against stored
//! snapshots, so output format changes are reviewed and intentional.
//!
//! Run with: `cargo test --test report_snapshot_tests`
//! Review changes: `cargo insta review`

use primegen::{OutputFormat, Report, RunConfig};

#[test]
fn test_demo_text_report() {
    let config = RunConfig::demo();
    let text = Report::primes(&config)
        .render(config.format, &config.separator)
        .expect("render failed");
    insta::assert_snapshot!("demo_text", text);
}

#[test]
fn test_count_json_report() {
    let config = RunConfig::new()
        .with_bounds(["10", "100", "3.5"])
        .with_format(OutputFormat::Json);
    let json = Report::counts(&config)
        .render(config.format, &config.separator)
        .expect("render failed");
    insta::assert_snapshot!("count_json", json);
}

#[test]
fn test_check_text_report() {
    let config = RunConfig::new().with_bounds(["1", "2", "1000"]);
    let text = Report::parity(&config)
        .render(config.format, &config.separator)
        .expect("render failed");
    insta::assert_snapshot!("check_text", text);
}
