//! End-to-end tests driving the master binary, which in turn spawns the
//! worker half of the same executable.

use assert_cmd::Command;
use predicates::prelude::*;

fn rangesum() -> Command {
    Command::cargo_bin("rangesum").unwrap()
}

#[test]
fn sums_the_example_range() {
    rangesum()
        .args(["5", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("worker spawned with pid"))
        .stdout(predicate::str::contains("range sent [5, 10]"))
        .stdout(predicate::str::contains("sum received = 40"));
}

#[test]
fn single_element_range() {
    rangesum()
        .args(["1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sum received = 1"));
}

#[test]
fn reversed_range_sums_to_zero() {
    rangesum()
        .args(["10", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("range sent [10, 5]"))
        .stdout(predicate::str::contains("sum received = 0"));
}

#[test]
fn negative_bounds_cancel_out() {
    rangesum()
        .args(["-3", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sum received = 0"));
}

#[test]
fn non_numeric_bound_parses_as_zero() {
    rangesum()
        .args(["junk", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("range sent [0, 3]"))
        .stdout(predicate::str::contains("sum received = 6"));
}

#[test]
fn no_arguments_is_a_usage_error() {
    rangesum()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn one_argument_is_a_usage_error() {
    rangesum()
        .arg("5")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn extra_arguments_are_a_usage_error() {
    rangesum()
        .args(["1", "2", "3"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn usage_errors_do_not_spawn_or_print_notices() {
    rangesum()
        .arg("5")
        .assert()
        .failure()
        .stdout(predicate::str::contains("worker spawned").not());
}
