use std::{fs, path::PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::{TempDir, tempdir};

/// Writes `contents` to a file in a fresh temporary directory
fn graph_file(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("graph.txt");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

const NETWORK_DELAY: &str = "c LC 743\np sp 4 3\n2 1 1\n2 3 1\n3 4 1\n";
const FLIGHTS: &str = "p sp 3 3\n1 2 100\n2 3 100\n1 3 500\n";

#[test]
fn test_binary_help() {
    cargo_bin_cmd!("dsakit").arg("--help").assert().success();
    cargo_bin_cmd!("dsakit").arg("--version").assert().success();
}

#[test]
fn test_shortest_path_all_nodes() {
    let (_dir, path) = graph_file(NETWORK_DELAY);
    cargo_bin_cmd!("dsakit")
        .args(["shortest-path", "--source", "2"])
        .arg(&path)
        .assert()
        .success()
        .stdout("1 1\n2 0\n3 1\n4 2\n");

    cargo_bin_cmd!("dsakit")
        .args(["shortest-path", "--source", "1"])
        .arg(&path)
        .assert()
        .success()
        .stdout("1 0\n2 unreachable\n3 unreachable\n4 unreachable\n");
}

#[test]
fn test_shortest_path_to_target() {
    let (_dir, path) = graph_file(NETWORK_DELAY);
    cargo_bin_cmd!("dsakit")
        .args(["shortest-path", "--source", "2", "--target", "4"])
        .arg(&path)
        .assert()
        .success()
        .stdout("2\n2 3 4\n");

    cargo_bin_cmd!("dsakit")
        .args(["shortest-path", "--source", "4", "--target", "1"])
        .arg(&path)
        .assert()
        .success()
        .stdout("unreachable\n");
}

#[test]
fn test_shortest_path_bounded_edges() {
    let (_dir, path) = graph_file(FLIGHTS);
    cargo_bin_cmd!("dsakit")
        .args(["shortest-path", "-s", "1", "-t", "3", "--max-edges", "1"])
        .arg(&path)
        .assert()
        .success()
        .stdout("500\n");

    cargo_bin_cmd!("dsakit")
        .args(["shortest-path", "-s", "1", "-t", "3", "--max-edges", "2"])
        .arg(&path)
        .assert()
        .success()
        .stdout("200\n");

    cargo_bin_cmd!("dsakit")
        .args(["shortest-path", "-s", "1", "-t", "3"])
        .arg(&path)
        .assert()
        .success()
        .stdout("200\n1 2 3\n");
}

#[test]
fn test_shortest_path_rejects_negative_weights() {
    let (_dir, path) = graph_file("p sp 2 1\n1 2 -3\n");
    cargo_bin_cmd!("dsakit")
        .args(["shortest-path", "--source", "1"])
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("negative weight"));

    // bounded Bellman-Ford accepts them
    cargo_bin_cmd!("dsakit")
        .args(["shortest-path", "--source", "1", "--max-edges", "1"])
        .arg(&path)
        .assert()
        .success()
        .stdout("1 0\n2 -3\n");
}

#[test]
fn test_source_out_of_range() {
    let (_dir, path) = graph_file(NETWORK_DELAY);
    cargo_bin_cmd!("dsakit")
        .args(["shortest-path", "--source", "5"])
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_toposort() {
    let (_dir, path) = graph_file("p edge 4 3\n4 2\n2 1\n3 1\n");
    cargo_bin_cmd!("dsakit")
        .args(["--format", "edgelist", "toposort"])
        .arg(&path)
        .assert()
        .success()
        .stdout("3 4 2 1\n");
}

#[test]
fn test_toposort_cycle() {
    let (_dir, path) = graph_file("p edge 3 3\n1 2\n2 3\n3 1\n");
    cargo_bin_cmd!("dsakit")
        .arg("toposort")
        .arg(&path)
        .env("DSAKIT_FORMAT", "edgelist")
        .env_remove("RUST_LOG")
        .env_remove("DSAKIT_LOG")
        .assert()
        .code(1)
        .stdout("")
        .stderr("error: graph contains a cycle\n");
}

#[test]
fn test_components() {
    let (_dir, path) = graph_file("p sp 5 2\n2 1 7\n4 3 1\n");
    cargo_bin_cmd!("dsakit")
        .arg("components")
        .arg(&path)
        .assert()
        .success()
        .stdout("1 2\n3 4\n5\n");
}

#[test]
fn test_search_stdin_and_file() {
    cargo_bin_cmd!("dsakit")
        .args(["search", "--pattern", "ab"])
        .write_stdin("abcabab")
        .assert()
        .success()
        .stdout("0\n3\n5\n");

    let (_dir, path) = graph_file("aaaa");
    cargo_bin_cmd!("dsakit")
        .args(["search", "-p", "aa"])
        .arg(&path)
        .assert()
        .success()
        .stdout("0\n1\n2\n");

    cargo_bin_cmd!("dsakit")
        .args(["search", "-p", "xyz"])
        .write_stdin("abc")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_generate_is_reproducible() {
    let run = || {
        cargo_bin_cmd!("dsakit")
            .args(["generate", "--nodes", "30", "--avg-deg", "3", "--seed", "42", "--max-weight", "5"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };

    let first = run();
    assert_eq!(first, run());

    let text = String::from_utf8(first).unwrap();
    let mut lines = text.lines();
    let header: Vec<&str> = lines.next().unwrap().split(' ').collect();
    assert_eq!(&header[..3], &["p", "sp", "30"]);

    let mut edges = 0;
    for line in lines {
        let parts: Vec<i64> = line.split(' ').map(|x| x.parse().unwrap()).collect();
        assert_eq!(parts.len(), 3);
        assert!((1..=30).contains(&parts[0]) && (1..=30).contains(&parts[1]));
        assert_ne!(parts[0], parts[1]);
        assert!((1..=5).contains(&parts[2]));
        edges += 1;
    }
    assert_eq!(header[3].parse::<usize>().unwrap(), edges);
}

#[test]
fn test_generate_feeds_shortest_path() {
    let output = cargo_bin_cmd!("dsakit")
        .args(["generate", "-n", "20", "-a", "4", "--seed", "7"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let (_dir, path) = graph_file(std::str::from_utf8(&output).unwrap());

    cargo_bin_cmd!("dsakit")
        .args(["shortest-path", "--source", "1"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1 0\n"));
}

#[test]
fn test_generate_edgelist_format() {
    cargo_bin_cmd!("dsakit")
        .args(["--format", "edgelist", "generate", "-n", "4", "-a", "4", "--seed", "1"])
        .assert()
        .success()
        .stdout("p edge 4 12\n1 2\n1 3\n1 4\n2 1\n2 3\n2 4\n3 1\n3 2\n3 4\n4 1\n4 2\n4 3\n");
}

#[test]
fn test_usage_errors() {
    cargo_bin_cmd!("dsakit")
        .args(["generate", "--nodes", "3", "--avg-deg", "5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--avg-deg"));

    cargo_bin_cmd!("dsakit")
        .args(["generate", "--nodes", "3", "--avg-deg", "1", "--max-weight", "0"])
        .assert()
        .code(2);

    cargo_bin_cmd!("dsakit")
        .args(["--format", "metis", "components", "graph.txt"])
        .assert()
        .code(2);

    cargo_bin_cmd!("dsakit").arg("toposort").assert().code(2);
}

#[test]
fn test_input_errors() {
    let (_dir, path) = graph_file("p sp 3 2\n1 2 1\n2 4 1\n");
    cargo_bin_cmd!("dsakit")
        .arg("components")
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("line 3"));

    let (_dir, path) = graph_file("p edge 2 1\n1 2\n");
    cargo_bin_cmd!("dsakit")
        .arg("components")
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Weight"));

    cargo_bin_cmd!("dsakit")
        .args(["components", "does-not-exist.txt"])
        .assert()
        .code(3);
}

#[test]
fn test_verbose_logs_to_stderr() {
    let (_dir, path) = graph_file(NETWORK_DELAY);
    cargo_bin_cmd!("dsakit")
        .args(["--verbose", "components"])
        .arg(&path)
        .env_remove("RUST_LOG")
        .env_remove("DSAKIT_LOG")
        .assert()
        .success()
        .stdout("1 2 3 4\n")
        .stderr(predicate::str::contains("graph loaded"));
}
