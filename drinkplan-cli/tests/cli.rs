use std::io::Write;
use std::process::{Command, Stdio};

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "drinkplan-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

const COUPLE_INPUT: &str = r#"{
    "days": 7,
    "sea_days": 3,
    "adults": 2,
    "drinks": {"beer": 2, "wine": 1}
}"#;

#[test]
fn cli_json_report_written_to_file() {
    let exe = env!("CARGO_BIN_EXE_drinkplan");
    let input_path = temp_path("input");
    std::fs::write(&input_path, COUPLE_INPUT).expect("write input");
    let output_path = temp_path("json");
    let status = Command::new(exe)
        .args(["--report", "json", "--input"])
        .arg(&input_path)
        .arg("--output")
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    let value: serde_json::Value = serde_json::from_str(&content).expect("json report");
    let alcoholic = value["pay_as_you_go_subtotals"]["alcoholic"]
        .as_f64()
        .expect("subtotal");
    assert!((alcoholic - 462.56).abs() < 0.005);
}

#[test]
fn cli_reads_stdin_and_prints_console_report() {
    let exe = env!("CARGO_BIN_EXE_drinkplan");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn cli");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(COUPLE_INPUT.as_bytes())
        .expect("write stdin");
    let output = child.wait_with_output().expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Drinkplan Package Comparison"));
    assert!(stdout.contains("Best value"));
}

#[test]
fn cli_rejects_malformed_input() {
    let exe = env!("CARGO_BIN_EXE_drinkplan");
    let input_path = temp_path("malformed");
    std::fs::write(&input_path, "{ \"days\": ").expect("write input");
    let output = Command::new(exe)
        .arg("--input")
        .arg(&input_path)
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not valid JSON"));
}

#[test]
fn cli_falls_back_when_catalog_unusable() {
    let exe = env!("CARGO_BIN_EXE_drinkplan");
    let input_path = temp_path("fallback-input");
    std::fs::write(&input_path, r#"{"days": 7, "adults": 1, "drinks": {"soda": 8}}"#)
        .expect("write input");
    let catalog_path = temp_path("broken-catalog");
    std::fs::write(&catalog_path, "{\"gratuity_rate\": 7}").expect("write catalog");
    let output = Command::new(exe)
        .args(["--report", "json", "--input"])
        .arg(&input_path)
        .arg("--catalog")
        .arg(&catalog_path)
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("using bundled prices"));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json report");
    assert_eq!(value["costs"]["basic"]["daily_rate"], 14.0);
    assert_eq!(value["winner"], "basic");
    assert_eq!(value["costs"]["basic"]["uncovered_total"], 0.0);
}

#[test]
fn cli_verbose_logs_to_stderr() {
    let exe = env!("CARGO_BIN_EXE_drinkplan");
    let input_path = temp_path("verbose-input");
    std::fs::write(&input_path, COUPLE_INPUT).expect("write input");
    let output = Command::new(exe)
        .args(["--report", "json", "-v", "--input"])
        .arg(&input_path)
        .env_remove("RUST_LOG")
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("reading plan input from"));
    assert!(stderr.contains("wins by"));
}

#[test]
fn cli_uses_custom_catalog() {
    let exe = env!("CARGO_BIN_EXE_drinkplan");
    let input_path = temp_path("custom-input");
    std::fs::write(&input_path, COUPLE_INPUT).expect("write input");
    let catalog = std::fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../drinkplan-engine/data/catalog.json"
    ))
    .expect("read bundled catalog")
    .replace("\"basic\": 14.00", "\"basic\": 40.00");
    let catalog_path = temp_path("custom-catalog");
    std::fs::write(&catalog_path, catalog).expect("write catalog");
    let output = Command::new(exe)
        .args(["--report", "json", "--input"])
        .arg(&input_path)
        .arg("--catalog")
        .arg(&catalog_path)
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json report");
    assert_eq!(value["costs"]["basic"]["daily_rate"], 40.0);
}
