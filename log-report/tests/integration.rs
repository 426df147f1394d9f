use std::{fs, path::Path, process::Command};

const SAMPLE_LOG: &str = r#"192.168.1.1 - - [25/Jul/2025:10:00:00 +0000] "GET / HTTP/1.1" 200 512 "-" "Mozilla/5.0"
192.168.1.1 - - [25/Jul/2025:10:00:01 +0000] "GET /x HTTP/1.1" 404 0 "-" "curl/7.0"
10.0.0.5 - - [25/Jul/2025:10:00:02 +0000] "GET / HTTP/1.1" 200 256 "-" "Mozilla/5.0"
"#;

fn write_config(dir: &Path, log_file: &Path, on_malformed: &str) -> std::path::PathBuf {
    let path = dir.join("report.json");
    let config = serde_json::json!({
        "log_file": log_file,
        "top_ip_count": 2,
        "user_agent_filter": "Mozilla",
        "on_malformed": on_malformed,
    });
    fs::write(&path, config.to_string()).unwrap();
    path
}

fn run(config_path: &Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_log-report"))
        .arg(config_path)
        .output()
        .expect("failed to run log-report")
}

#[test]
fn reports_expected_aggregates() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("access.log");
    fs::write(&log_path, SAMPLE_LOG).unwrap();
    let config_path = write_config(dir.path(), &log_path, "skip");

    let output = run(&config_path);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["top_ips"][0]["ip"], "192.168.1.1");
    assert_eq!(report["top_ips"][0]["requests"], 2);
    assert_eq!(report["top_ips"][1]["ip"], "10.0.0.5");
    assert_eq!(report["top_ips"][1]["requests"], 1);
    assert_eq!(report["status_codes"]["200"], 2);
    assert_eq!(report["status_codes"]["404"], 1);
    assert_eq!(report["user_agent"]["filter"], "Mozilla");
    assert_eq!(report["user_agent"]["matches"], 2);
    assert_eq!(report["lines"]["total"], 3);
    assert_eq!(report["lines"]["parsed"], 3);
    assert_eq!(report["lines"]["skipped"], 0);
}

#[test]
fn skip_policy_counts_malformed_lines() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("access.log");
    fs::write(&log_path, format!("{SAMPLE_LOG}not a log line\n")).unwrap();
    let config_path = write_config(dir.path(), &log_path, "skip");

    let output = run(&config_path);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["lines"]["total"], 4);
    assert_eq!(report["lines"]["parsed"], 3);
    assert_eq!(report["lines"]["skipped"], 1);
    // Aggregates still cover the lines that did parse.
    assert_eq!(report["user_agent"]["matches"], 2);
}

#[test]
fn fail_policy_aborts_on_first_malformed_line() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("access.log");
    fs::write(&log_path, format!("{SAMPLE_LOG}not a log line\n")).unwrap();
    let config_path = write_config(dir.path(), &log_path, "fail");

    let output = run(&config_path);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("An error occurred during analysis"), "stderr: {stderr}");
    assert!(stderr.contains("line 4"), "stderr: {stderr}");
}

#[test]
fn missing_config_argument_prints_usage() {
    let output = Command::new(env!("CARGO_BIN_EXE_log-report"))
        .output()
        .expect("failed to run log-report");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr: {stderr}");
}

#[test]
fn unreadable_log_file_is_a_setup_error() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_config(dir.path(), &dir.path().join("missing.log"), "skip");

    let output = run(&config_path);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error reading file or configuration"),
        "stderr: {stderr}"
    );
}
