//! CLI tests against a mock users API.
//!
//! Each test starts a wiremock server and runs the built binary with
//! `--origin` pointed at it. The binary runs on a blocking thread so the mock
//! server keeps serving while the test waits.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Run the CLI against `server` with optional stdin.
async fn run_cli(server: &MockServer, args: &[&str], stdin: Option<&str>) -> Output {
    let origin = server.uri();
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    let stdin = stdin.map(str::to_string);

    tokio::task::spawn_blocking(move || {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_usersync"));
        cmd.args(&args)
            .arg("--origin")
            .arg(&origin)
            .env_remove("USERS_API_PATH")
            .env_remove("USERS_API_ORIGIN")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = cmd.spawn().expect("Failed to execute CLI");
        {
            let mut pipe = child.stdin.take().expect("stdin piped");
            if let Some(input) = stdin {
                pipe.write_all(input.as_bytes()).expect("Failed to write stdin");
            }
        }
        child.wait_with_output().expect("Failed to wait for CLI")
    })
    .await
    .expect("CLI thread panicked")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

async fn mount_list(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Al", "email": "al@x.com"},
            {"id": 3, "name": "Cy", "email": "cy@x.com"}
        ])))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_list_prints_one_record_per_line() {
    let server = MockServer::start().await;
    mount_list(&server).await;

    let output = run_cli(&server, &["list"], None).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let lines: Vec<serde_json::Value> = stdout(&output)
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], json!({"id": 1, "name": "Al", "email": "al@x.com"}));
    assert_eq!(lines[1]["id"], 3);
}

#[tokio::test]
async fn test_list_failure_exits_nonzero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let output = run_cli(&server, &["list"], None).await;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to fetch users"));
}

#[tokio::test]
async fn test_api_path_override() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/members"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli(&server, &["list", "--api-path", "/v2/members"], None).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("No users found."));
}

#[tokio::test]
async fn test_create_with_missing_email_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let output = run_cli(&server, &["create", "--name", "Ann"], None).await;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("please enter a value for email"));
}

#[tokio::test]
async fn test_create_prints_new_record() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users"))
        .and(body_json(json!({"name": "Ann", "email": "ann@x.com"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 7,
            "name": "Ann",
            "email": "ann@x.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli(
        &server,
        &["create", "--name", "Ann", "--email", "ann@x.com"],
        None,
    )
    .await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    let first: serde_json::Value = serde_json::from_str(out.lines().next().unwrap()).unwrap();
    assert_eq!(first["id"], 7);
    assert!(out.contains("Created user 7"));
}

#[tokio::test]
async fn test_shell_create_with_existing_id_replaces_row() {
    let server = MockServer::start().await;
    mount_list(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 1,
            "name": "Ann",
            "email": "ann@x.com"
        })))
        .mount(&server)
        .await;

    let script = "name Ann\nemail ann@x.com\nadd\nquit\n";
    let output = run_cli(&server, &["shell"], Some(script)).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    let last_render: Vec<&str> = out
        .lines()
        .rev()
        .take_while(|l| !l.starts_with("new "))
        .collect();
    assert_eq!(last_render, ["3 Cy <cy@x.com>", "1 Ann <ann@x.com>"]);
}

#[tokio::test]
async fn test_delete_keeps_typed_id() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/users/007"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli(&server, &["delete", "007"], None).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Deleted user 007"));
}

#[tokio::test]
async fn test_update_keeps_omitted_fields() {
    let server = MockServer::start().await;
    mount_list(&server).await;
    Mock::given(method("PUT"))
        .and(path("/api/users/3"))
        .and(body_json(json!({"name": "Cy", "email": "cy@y.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3,
            "name": "Cy",
            "email": "cy@y.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli(&server, &["update", "3", "--email", "cy@y.com"], None).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Updated user 3"));
}

#[tokio::test]
async fn test_update_unknown_id() {
    let server = MockServer::start().await;
    mount_list(&server).await;

    let output = run_cli(&server, &["update", "42", "--name", "X"], None).await;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("No user with id 42"));
}

#[tokio::test]
async fn test_delete_failure_reports_message() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/users/5"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let output = run_cli(&server, &["delete", "5"], None).await;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to delete user"));
}

#[tokio::test]
async fn test_shell_session() {
    let server = MockServer::start().await;
    mount_list(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 7,
            "name": "Ann",
            "email": "ann@x.com"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let script = "name Ann\nadd\nok\nemail ann@x.com\nadd\nrm 1\nquit\n";
    let output = run_cli(&server, &["shell"], Some(script)).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("please enter a value for email"));
    let out = stdout(&output);
    let last_render: Vec<&str> = out
        .lines()
        .rev()
        .take_while(|l| !l.starts_with("new "))
        .collect();
    assert_eq!(last_render, ["7 Ann <ann@x.com>", "3 Cy <cy@x.com>"]);
}

#[tokio::test]
async fn test_shell_failure_hides_list() {
    let server = MockServer::start().await;
    mount_list(&server).await;
    Mock::given(method("DELETE"))
        .and(path("/api/users/3"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let script = "rm 3\nls\nquit\n";
    let output = run_cli(&server, &["shell"], Some(script)).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    let last = out.lines().last().unwrap();
    assert_eq!(last, "Failed to load: Failed to delete user");
}
