//! CLI smoke tests
//!
//! Runs the binary end to end and checks the printed zone report.

use std::process::Command;

fn run_zones(args: &[&str]) -> std::process::Output {
    Command::new("cargo")
        .args(["run", "--quiet", "--"])
        .args(args)
        .output()
        .expect("Failed to execute road_zones binary")
}

#[test]
fn test_zone_report_lists_lengths_and_overlaps() {
    let output = run_zones(&[
        "--zone",
        "lane_1:20:100,lane_2:0:100,lane_3:0:20",
        "--zone",
        "lane_2:50:75",
    ]);

    assert!(
        output.status.success(),
        "Binary failed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Zone 1: 3 range(s), length 200.000"),
        "Missing zone 1 summary. stdout: {}",
        stdout
    );
    assert!(
        stdout.contains("Zone 2: 1 range(s), length 25.000"),
        "Missing zone 2 summary. stdout: {}",
        stdout
    );
    assert!(
        stdout.contains("Zone 1 and zone 2: shared extent 25.000"),
        "Missing overlap row. stdout: {}",
        stdout
    );
}

#[test]
fn test_disjoint_zones_report_no_overlap() {
    let output = run_zones(&["--zone", "lane_1:0:10", "--zone", "lane_9:0:10"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("No overlapping zones"),
        "Expected no-overlap message. stdout: {}",
        stdout
    );
}

#[test]
fn test_malformed_zone_spec_fails() {
    let output = run_zones(&["--zone", "lane_1:zero:10"]);

    assert!(
        !output.status.success(),
        "Malformed spec should be rejected"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid zone definition"),
        "Missing error context. stderr: {}",
        stderr
    );
}
