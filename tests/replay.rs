//! Runs `fibscm` over recorded sessions.
//!
//! Each test writes a capture and a config into a temporary directory and
//! checks what the binary prints.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

const SESSION: &str = "login: \r\n\
1 marv 1041253132 host.example.com\r\n\
3\r\n\
+------------------------------+\r\n\
4\r\n\
7 jfk jfk logs in.\r\n\
You roll 3 and 5.\r\n\
** You gag marv.\r\n\
12 jfk hello\r\n\
12 jfk again\r\n\
marv waves goodbye.\r\n";

const GOODBYE: &str = "                             Goodbye.\r\n";

fn fibscm(config: Option<&Path>, stdin: Option<&str>) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_fibscm"));
    if let Some(config) = config {
        command.arg(config);
    }
    command
        .env("RUST_LOG", "warn")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = command.spawn().expect("fibscm binary runs");
    {
        let mut pipe = child.stdin.take().expect("stdin is piped");
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).expect("stdin accepts input");
        }
    }
    child.wait_with_output().expect("fibscm exits")
}

fn write_config(dir: &Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("fibscm.toml");
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_stdin_echo_and_text_summary() {
    let input = format!("{}{}after\r\n", SESSION, GOODBYE);
    let output = fibscm(None, Some(&input));
    assert!(output.status.success(), "{:?}", output);

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    // One echo line per input line, the separator, then the tally.
    assert_eq!(lines[0], " 22: login: ");
    assert_eq!(lines[1], "  1: 1 marv 1041253132 host.example.com");
    assert_eq!(lines[2], "  3: 3");
    assert_eq!(lines[4], "  4: 4");
    assert_eq!(lines[5], "  7: 7 jfk jfk logs in.");
    assert_eq!(lines[8], " 12: 12 jfk hello");
    assert_eq!(lines[11], " 26:                              Goodbye.");
    assert_eq!(lines[12], " 28: after");
    assert_eq!(lines[13], "--------------");
    assert!(lines.contains(&" 12    2"));
    assert!(lines.contains(&" 28    1"));
}

#[test]
fn test_file_source_with_json_summary() {
    let dir = tempfile::tempdir().unwrap();
    let capture = dir.path().join("session.log");
    std::fs::write(&capture, format!("{}{}", SESSION, GOODBYE)).unwrap();
    let config = write_config(
        dir.path(),
        &format!(
            "[input]\nsource = \"file\"\npath = {:?}\n\n[output]\necho = false\nformat = \"json\"\n",
            capture.display().to_string()
        ),
    );

    let output = fibscm(Some(&config), None);
    assert!(output.status.success(), "{:?}", output);

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["lines"], 12);
    let says = summary["cookies"]
        .as_array()
        .unwrap()
        .iter()
        .find(|entry| entry["name"] == "Says")
        .expect("Says is tallied");
    assert_eq!(says["code"], 12);
    assert_eq!(says["count"], 2);
}

#[test]
fn test_summary_can_be_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "[output]\nsummary = false\n");

    let output = fibscm(Some(&config), Some("login:\r\n"));
    assert!(output.status.success(), "{:?}", output);
    assert_eq!(String::from_utf8(output.stdout).unwrap(), " 22: login:\n");
}

#[test]
fn test_missing_capture_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.log");
    let config = write_config(
        dir.path(),
        &format!(
            "[input]\nsource = \"file\"\npath = {:?}\n",
            missing.display().to_string()
        ),
    );

    let output = fibscm(Some(&config), None);
    assert!(!output.status.success());
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "[input]\nmax_line_len = 0\n");

    let output = fibscm(Some(&config), None);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
