use std::f64::consts::PI;
use std::io::{ErrorKind, Write};
use std::process::{Command, Output, Stdio};

use serde_json::{Value, json};

fn run_bridge(args: &[&str], stdin: &str) -> (Output, Value) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_foil-bridge"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn foil-bridge");

    // The bridge may exit before reading stdin when argument parsing fails.
    let written = child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes());
    if let Err(err) = written {
        assert_eq!(err.kind(), ErrorKind::BrokenPipe, "failed to write request");
    }

    let output = child.wait_with_output().expect("failed to wait on foil-bridge");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value = serde_json::from_str(&stdout)
        .unwrap_or_else(|err| panic!("stdout is not JSON ({err}): {stdout}"));
    (output, value)
}

/// NACA 00xx section with cosine spacing, TE -> upper -> LE -> lower -> TE.
fn naca00(thickness: f64, n: usize) -> (Vec<f64>, Vec<f64>) {
    let half = |x: f64| {
        5.0 * thickness
            * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x.powi(2) + 0.2843 * x.powi(3)
                - 0.1036 * x.powi(4))
    };
    let stations: Vec<f64> = (0..=n)
        .map(|i| 0.5 * (1.0 - (PI * i as f64 / n as f64).cos()))
        .collect();

    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for &x in stations.iter().rev() {
        xs.push(x);
        ys.push(half(x));
    }
    for &x in stations.iter().skip(1) {
        xs.push(x);
        ys.push(-half(x));
    }
    (xs, ys)
}

fn naca0012_request(extra: Value) -> String {
    let (x, y) = naca00(0.12, 60);
    let mut request = json!({ "x_coords": x, "y_coords": y });
    if let (Some(request), Some(extra)) = (request.as_object_mut(), extra.as_object()) {
        request.extend(extra.clone());
    }
    request.to_string()
}

fn floats(value: &Value) -> Vec<f64> {
    value
        .as_array()
        .expect("expected an array")
        .iter()
        .map(|v| v.as_f64().expect("expected a number"))
        .collect()
}

#[test]
fn malformed_json_yields_failure_envelope() {
    let (output, response) = run_bridge(&[], "{ this is not json");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(response["success"], false);
    assert!(!response["error"].as_str().unwrap_or_default().is_empty());
    assert_eq!(response["alpha"], json!([]));
    assert_eq!(response["converged"], json!([]));
}

#[test]
fn lift_targets_are_solved() {
    let (output, response) = run_bridge(
        &[],
        &naca0012_request(json!({
            "cl_values": [0.0, 0.5],
            "re_values": [1.0e6, 1.0e6],
        })),
    );

    assert!(output.status.success(), "{response}");
    assert_eq!(response["success"], true);
    assert!(response.get("error").is_none());
    assert_eq!(response["converged"], json!([true, true]));

    let alpha = floats(&response["alpha"]);
    let cl = floats(&response["cl"]);
    assert_eq!(alpha.len(), 2);
    assert!(alpha[0].abs() < 0.01, "alpha = {alpha:?}");
    assert!((2.0..=6.0).contains(&alpha[1]), "alpha = {alpha:?}");
    assert!((cl[1] - 0.5).abs() < 1e-3);

    for key in ["cd", "cm", "xtr_top", "xtr_bot"] {
        assert_eq!(floats(&response[key]).len(), 2, "{key}");
    }
}

#[test]
fn alpha_mode_preserves_station_order() {
    let (output, response) = run_bridge(
        &["--pretty"],
        &naca0012_request(json!({
            "mode": "alpha",
            "alpha_values": [4.0, -4.0, 0.0],
            "re_values": [5.0e5, 1.0e6, 2.0e6],
            "model_size": "medium",
        })),
    );

    assert!(output.status.success(), "{response}");
    let alpha = floats(&response["alpha"]);
    let cl = floats(&response["cl"]);
    assert_eq!(alpha.len(), 3);
    assert!((alpha[0] - 4.0).abs() < 1e-9);
    assert!((alpha[1] + 4.0).abs() < 1e-9);
    assert!(cl[0] > 0.0 && cl[1] < 0.0);
    assert!(cl[2].abs() < 1e-6);
}

#[test]
fn missing_targets_fail() {
    let (output, response) = run_bridge(&[], &naca0012_request(json!({ "re_values": [1.0e6] })));

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(response["success"], false);
    assert!(
        response["error"]
            .as_str()
            .is_some_and(|message| message.contains("cl_values"))
    );
}

#[test]
fn iteration_cap_is_configurable() {
    let (output, response) = run_bridge(
        &["--max-iters", "1", "--strategy", "fixed-gain"],
        &naca0012_request(json!({
            "cl_values": [0.8],
            "re_values": [1.0e6],
        })),
    );

    assert!(output.status.success());
    assert_eq!(response["success"], true);
    assert_eq!(response["converged"], json!([false]));
}

#[test]
fn invalid_flags_still_write_an_envelope() {
    let (output, response) = run_bridge(&["--strategy", "newton"], "{}");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(response["success"], false);
    assert!(response["error"].is_string());
}

#[test]
fn logs_stay_off_stdout() {
    let (output, response) = run_bridge(
        &["--log-level", "debug"],
        &naca0012_request(json!({
            "cl_values": [0.3],
            "re_values": [1.0e6],
        })),
    );

    assert!(output.status.success());
    assert_eq!(response["success"], true);
    assert!(!output.stderr.is_empty());
}

#[test]
fn unbracketed_bisection_target_fails_the_batch() {
    let (output, response) = run_bridge(
        &["--strategy", "bisection"],
        &naca0012_request(json!({
            "cl_values": [0.3, 5.0],
            "re_values": [1.0e6, 1.0e6],
        })),
    );

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(response["success"], false);
    assert_eq!(response["cl"], json!([]));
    let message = response["error"].as_str().unwrap_or_default();
    assert!(message.starts_with("analysis failed: station 1"), "{message}");
}

#[test]
fn unreadable_input_file_yields_failure_envelope() {
    let (output, response) = run_bridge(&["--input", "/nonexistent/foil-request.json"], "");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(response["success"], false);
    let message = response["error"].as_str().unwrap_or_default();
    assert!(
        message.starts_with("failed to read request from /nonexistent/foil-request.json: "),
        "{message}"
    );
}

#[test]
fn malformed_json_message_names_the_parse_failure() {
    let (_, response) = run_bridge(&[], "[1, 2");

    let message = response["error"].as_str().unwrap_or_default();
    assert!(message.starts_with("invalid request: "), "{message}");
}
