//! CLI binary smoke tests using assert_cmd.
//!
//! These tests run the compiled `stp` binary to check argument parsing,
//! text and JSON output, the session loop and error exits end-to-end.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("stp").unwrap()
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("reconcile"))
        .stdout(predicate::str::contains("product"))
        .stdout(predicate::str::contains("add-vectors"))
        .stdout(predicate::str::contains("session"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("stp"));
}

// ---------------------------------------------------------------------------
// reconcile
// ---------------------------------------------------------------------------

#[test]
fn reconcile_prints_plan() {
    cmd()
        .args(["reconcile", "4", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("L = lcm(4, 6) = 12"))
        .stdout(predicate::str::contains("alpha = L / 4 = 3"))
        .stdout(predicate::str::contains("beta = L / 6 = 2"));
}

#[test]
fn reconcile_zero_fails() {
    cmd()
        .args(["reconcile", "0", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid dimension"));
}

#[test]
fn reconcile_negative_is_rejected_by_parser() {
    cmd().args(["reconcile", "--", "-2", "3"]).assert().failure();
}

// ---------------------------------------------------------------------------
// product / add-matrices
// ---------------------------------------------------------------------------

#[test]
fn product_with_literals() {
    cmd()
        .args(["product", "--a", "1,2;3,4", "--b", "1,0;0,1;1,1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dimension conflict (n = 2 != p = 3)"))
        .stdout(predicate::str::contains("L = 6, alpha = 3, beta = 2"))
        .stdout(predicate::str::contains("Result = A' · B' (6x4):"))
        .stdout(predicate::str::contains("[1, 0, 0, 2]"));
}

#[test]
fn product_json_output() {
    let output = cmd()
        .args(["--json", "product", "--a", "1,2;3,4", "--b", "1,0;0,1;1,1"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["operation"], "product");
    assert_eq!(value["steps"]["lcm"], 6);
    assert_eq!(value["steps"]["a_expanded"]["cols"], 6);
    assert_eq!(value["status"]["status"], "mismatched");
}

#[test]
fn product_random_operands_are_seeded() {
    let run = || {
        cmd()
            .args(["product", "--seed", "11"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn product_out_of_bounds_dimension_fails() {
    cmd()
        .args(["product", "-n", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the allowed range"));
}

#[test]
fn product_mixed_literal_and_random() {
    cmd()
        .args(["product", "--a", "1,2,3", "-p", "2", "-q", "1", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("L = 6, alpha = 2, beta = 3"));
}

#[test]
fn product_bad_literal_fails() {
    cmd()
        .args(["product", "--a", "1,2;3", "--b", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unequal length"));
}

#[test]
fn product_overflow_is_a_clean_error() {
    cmd()
        .args(["product", "--a", "9223372036854775807", "--b", "2"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Arithmetic overflow in STP product"));
}

#[test]
fn add_matrices_default_dims() {
    cmd()
        .args(["add-matrices", "--seed", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Target rows (LCM): 6, target columns (LCM): 2",
        ))
        .stdout(predicate::str::contains("Result = A' + B' (6x2):"));
}

// ---------------------------------------------------------------------------
// add-vectors
// ---------------------------------------------------------------------------

#[test]
fn add_vectors_with_literals() {
    cmd()
        .args(["add-vectors", "--v1", "10,20", "--v2", "1,2,3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("L = lcm(2, 3) = 6, alpha = 3, beta = 2"))
        .stdout(predicate::str::contains("Fused    : [11, 11, 12, 22, 23, 23]"));
}

#[test]
fn add_vectors_accepts_negative_literals() {
    cmd()
        .args(["add-vectors", "--v1", "-1,2", "--v2", "1,2,3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fused    : [0, 0, 1, 4, 5, 5]"));
}

#[test]
fn add_vectors_default_dims() {
    cmd()
        .args(["add-vectors", "--seed", "3", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"operation\": \"vector_addition\""))
        .stdout(predicate::str::contains("\"lcm\": 12"));
}

#[test]
fn add_vectors_below_minimum_fails() {
    cmd()
        .args(["add-vectors", "--dim1", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("dim1"));
}

// ---------------------------------------------------------------------------
// session
// ---------------------------------------------------------------------------

#[test]
fn session_reuses_operands_for_same_dims() {
    let output = cmd()
        .args(["session", "--seed", "2"])
        .write_stdin("product 2 2 3 2\nproduct 2 2 3 2\nquit\n")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let sections: Vec<&str> = stdout.split("== STP product").skip(1).collect();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0], sections[1]);
}

#[test]
fn session_reports_errors_and_continues() {
    cmd()
        .arg("session")
        .write_stdin("bogus\nrefresh\nadd-vectors 4 3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("error: Unknown command: bogus"))
        .stdout(predicate::str::contains("error: Nothing to refresh yet"))
        .stdout(predicate::str::contains("== STP vector fusion =="));
}

#[test]
fn session_stops_at_quit() {
    cmd()
        .arg("session")
        .write_stdin("quit\nadd-vectors 4 3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("vector fusion").not());
}

// ---------------------------------------------------------------------------
// config
// ---------------------------------------------------------------------------

#[test]
fn config_prints_defaults() {
    cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"product_values\""))
        .stdout(predicate::str::contains("\"vector_dims\""));
}

#[test]
fn config_file_and_seed_override() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("demo.json");
    std::fs::write(&path, r#"{"seed": 4, "matrix_dims": {"min": 1, "max": 8}}"#).unwrap();

    cmd()
        .args(["--config", path.to_str().unwrap(), "--seed", "9", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"seed\": 9"))
        .stdout(predicate::str::contains("\"max\": 8"));
}

#[test]
fn malformed_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("demo.json");
    std::fs::write(&path, "{ not json").unwrap();

    cmd()
        .args(["--config", path.to_str().unwrap(), "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}
