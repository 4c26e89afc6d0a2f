use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "penguin-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_scenarios_writes_output() {
    let exe = env!("CARGO_BIN_EXE_penguin-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-scenarios", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available scenarios"));
    assert!(content.contains("starvation"));
}

#[test]
fn cli_runs_smoke_with_json_report() {
    let exe = env!("CARGO_BIN_EXE_penguin-tester");
    let output_path = temp_path("run");
    let output = Command::new(exe)
        .args([
            "--scenarios",
            "smoke,starvation",
            "--iterations",
            "1",
            "--seeds",
            "1",
            "--duration-secs",
            "30",
            "--report",
            "json",
            "--output",
        ])
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Penguin Journey Tester"));
    let content = std::fs::read_to_string(output_path).expect("read output");
    let value: serde_json::Value = serde_json::from_str(&content).expect("json report");
    let results = value.as_array().expect("array of results");
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r["passed"] == true));
}

#[test]
fn cli_exits_nonzero_when_a_scenario_fails() {
    let exe = env!("CARGO_BIN_EXE_penguin-tester");
    let output = Command::new(exe)
        .args([
            "--scenarios",
            "shopping-spree",
            "--iterations",
            "1",
            "--duration-secs",
            "1",
            "--report",
            "markdown",
        ])
        .output()
        .expect("run cli");
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("❌ Shopping Spree"));
}
