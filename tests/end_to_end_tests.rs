//! End-to-end tests through the binary over temporary log folders

use predicates::prelude::*;
use std::fs;

/// The worked example: three marked requests, 20-digit id collapsed,
/// tab-separated, count descending. The method is part of the key, so
/// the POST line yields its own endpoint (one count each, first-seen
/// order among the ties).
#[test]
fn test_worked_example_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("papertrail.log"),
        concat!(
            "\"GET /customers/98765432109876543210 HTTP/1.1\" service_cocs\n",
            "\"GET /customers/98765432109876543210/orders HTTP/1.1\" service_cocs\n",
            "\"POST /customers/98765432109876543210 HTTP/1.1\" service_cocs\n",
        ),
    )
    .unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("logtally");
    cmd.arg(dir.path())
        .arg("-m")
        .arg("service_cocs")
        .assert()
        .success()
        .stdout(predicate::eq(concat!(
            "1 \t GET /customers/[id]\n",
            "1 \t GET /customers/[id]/orders\n",
            "1 \t POST /customers/[id]\n",
        )));
}

/// Repeated requests to the same endpoint shape actually merge and the
/// highest count sorts first.
#[test]
fn test_repeated_endpoint_counts_merge() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("papertrail.log"),
        concat!(
            "\"GET /customers/11 HTTP/1.1\" service_cocs\n",
            "\"GET /customers/22/orders HTTP/1.1\" service_cocs\n",
            "\"GET /customers/33 HTTP/1.1\" service_cocs\n",
        ),
    )
    .unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("logtally");
    cmd.arg(dir.path())
        .arg("-m")
        .arg("service_cocs")
        .assert()
        .success()
        .stdout(predicate::eq(concat!(
            "2 \t GET /customers/[id]\n",
            "1 \t GET /customers/[id]/orders\n",
        )));
}

#[test]
fn test_missing_folder_fails() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("logtally");
    cmd.arg("/definitely/not/a/folder")
        .arg("-m")
        .arg("service_cocs")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read log folder"));
}

#[test]
fn test_empty_folder_produces_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("logtally");
    cmd.arg(dir.path())
        .arg("-m")
        .arg("service_cocs")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_marker_filters_other_services() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("mixed.log"),
        concat!(
            "\"GET /orders/1 HTTP/1.1\" service_cocs\n",
            "\"GET /orders/2 HTTP/1.1\" service_billing\n",
            "\"GET /orders/3 HTTP/1.1\" service_billing\n",
        ),
    )
    .unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("logtally");
    cmd.arg(dir.path())
        .arg("-m")
        .arg("service_billing")
        .assert()
        .success()
        .stdout(predicate::eq("2 \t GET /orders/[id]\n"));
}

#[test]
fn test_query_strings_excluded_from_endpoint() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("q.log"),
        "\"GET /customers/12345?active=true HTTP/1.1\" service_cocs\n",
    )
    .unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("logtally");
    cmd.arg(dir.path())
        .arg("-m")
        .arg("service_cocs")
        .assert()
        .success()
        .stdout(predicate::eq("1 \t GET /customers/[id]\n"));
}

#[test]
fn test_percent_encoded_paths_decoded_before_normalizing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("enc.log"),
        "\"GET /customers/%31%32%33 HTTP/1.1\" service_cocs\n",
    )
    .unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("logtally");
    cmd.arg(dir.path())
        .arg("-m")
        .arg("service_cocs")
        .assert()
        .success()
        .stdout(predicate::eq("1 \t GET /customers/[id]\n"));
}

#[test]
fn test_restricted_method_set() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("m.log"),
        concat!(
            "\"GET /orders HTTP/1.1\" service_cocs\n",
            "\"DELETE /orders HTTP/1.1\" service_cocs\n",
        ),
    )
    .unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("logtally");
    cmd.arg(dir.path())
        .arg("-m")
        .arg("service_cocs")
        .arg("--methods")
        .arg("get")
        .assert()
        .success()
        .stdout(predicate::eq("1 \t GET /orders\n"));
}

#[test]
fn test_counts_aggregate_across_multiple_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("a.log"),
        "\"GET /customers/1 HTTP/1.1\" service_cocs\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("b.tsv"),
        "\"GET /customers/2 HTTP/1.1\" service_cocs\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("ignored.txt"),
        "\"GET /customers/3 HTTP/1.1\" service_cocs\n",
    )
    .unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("logtally");
    cmd.arg(dir.path())
        .arg("-m")
        .arg("service_cocs")
        .assert()
        .success()
        .stdout(predicate::eq("2 \t GET /customers/[id]\n"));
}

#[test]
fn test_repeated_runs_identical() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("a.log"),
        concat!(
            "\"GET /a/1 HTTP/1.1\" service_cocs\n",
            "\"GET /b/2 HTTP/1.1\" service_cocs\n",
            "\"POST /c HTTP/1.1\" service_cocs\n",
        ),
    )
    .unwrap();

    let run = || {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("logtally");
        let output = cmd
            .arg(dir.path())
            .arg("-m")
            .arg("service_cocs")
            .output()
            .unwrap();
        assert!(output.status.success());
        output.stdout
    };

    let first = run();
    let second = run();
    assert_eq!(first, second);
}
