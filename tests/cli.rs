use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_subcommands() {
    Command::cargo_bin("bankrank")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("rank"))
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("schema"));
}

#[test]
fn test_schema_prints_config_schema() {
    Command::cargo_bin("bankrank")
        .unwrap()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("plausible_min_billions"))
        .stdout(predicate::str::contains("window_half_width"));
}

/// End-to-end degradation: both providers unreachable, the command still
/// exits 0 and prints a JSON window with the inserted protocol.
#[test]
fn test_rank_degrades_to_fallback_window() {
    let config_path = std::env::temp_dir().join("bankrank-cli-test.yaml");
    std::fs::write(
        &config_path,
        "\
metric:
  api_url: http://127.0.0.1:1/metrics
  page_url: http://127.0.0.1:1/page
report:
  url: http://127.0.0.1:1/report
retry:
  max_attempts: 1
  backoff_base_ms: 1
",
    )
    .unwrap();

    Command::cargo_bin("bankrank")
        .unwrap()
        .arg("rank")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"isInserted\": true"))
        .stdout(predicate::str::contains("AAVE"));

    std::fs::remove_file(&config_path).ok();
}
