#![cfg(feature = "cli")]

use std::process::{Command, Output};

fn knxprims(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_knxprims"))
        .arg("--log-level")
        .arg("error")
        .args(args)
        .output()
        .expect("knxprims should run")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(stdout.trim()).expect("stdout should be json")
}

#[test]
fn decode_conn_state_res_reports_knx_error() {
    let output = knxprims(&["--format", "json", "decode", "conn-state-res", "0127"]);

    assert!(output.status.success());
    let report = stdout_json(&output);
    assert_eq!(report["service"], "CONN_STATE_RES");
    assert_eq!(report["length"], 2);
    assert_eq!(report["fields"][0]["value"], "0x01");
    assert_eq!(
        report["fields"][1]["detail"],
        "Gateway encountered a KNX error"
    );
}

#[test]
fn decode_truncated_frame_exits_60() {
    let output = knxprims(&["--format", "json", "decode", "conn-res", "01000801c0a8"]);

    assert_eq!(output.status.code(), Some(60));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("truncated frame"));
}

#[test]
fn decode_strict_rejects_trailing_bytes() {
    let lenient = knxprims(&["--format", "json", "decode", "disc-res", "0500ff"]);
    assert!(lenient.status.success());
    assert_eq!(stdout_json(&lenient)["trailing"], 1);

    let strict = knxprims(&["--format", "json", "decode", "disc-res", "0500ff", "--strict"]);
    assert_eq!(strict.status.code(), Some(60));
}

#[test]
fn decode_rejects_bad_connection_request_length() {
    let hex = "0801c0a80114c3b40801c0a80114c3b405040200";
    let output = knxprims(&["--format", "json", "decode", "conn-req", hex]);

    assert_eq!(output.status.code(), Some(60));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("structure length 5"));
}

#[test]
fn encode_conn_req_raw_hex() {
    let output = knxprims(&[
        "--format",
        "raw",
        "encode",
        "conn-req",
        "--control",
        "192.168.1.20:50100",
        "--layer",
        "0x02",
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "0801c0a80114c3b40801c0a80114c3b404040200");
}

#[test]
fn encode_then_decode_disc_req() {
    let encoded = knxprims(&[
        "--format",
        "raw",
        "encode",
        "disc-req",
        "--channel",
        "7",
        "--control",
        "10.0.0.1:3671",
    ]);
    assert!(encoded.status.success());
    let hex = String::from_utf8_lossy(&encoded.stdout).trim().to_string();

    let decoded = knxprims(&["--format", "json", "decode", "disc-req", &hex]);
    assert!(decoded.status.success());
    let report = stdout_json(&decoded);
    assert_eq!(report["fields"][0]["value"], "0x07");
    assert_eq!(report["fields"][2]["value"], "udp://10.0.0.1:3671");
}

#[test]
fn describe_unknown_status_code() {
    let output = knxprims(&["--format", "raw", "describe", "conn-status", "0x99"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "Unknown status code 0x99");
}

#[test]
fn version_reports_package_version() {
    let output = knxprims(&["version"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        format!("knxprims {}", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn decode_empty_input_exits_64() {
    let output = knxprims(&["--format", "json", "decode", "disc-res", ""]);

    assert_eq!(output.status.code(), Some(64));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must not be empty"));
}

#[test]
fn encode_tunnel_outside_conn_req_exits_64() {
    let output = knxprims(&[
        "--format",
        "raw",
        "encode",
        "conn-state-req",
        "--tunnel",
        "10.0.0.1:3671",
    ]);

    assert_eq!(output.status.code(), Some(64));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not CONN_STATE_REQ"));
}
