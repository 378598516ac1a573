mod common;

use common::{API_KEY_ENV, SUBJECT, TestContext};
use predicates::prelude::*;

const PATH: &str = "/api/v1/chat/completions";

fn endpoint(server: &mockito::Server) -> String {
    format!("{}{}", server.url(), PATH)
}

#[test]
fn generate_prints_model_response() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", PATH)
        .match_header("authorization", "Bearer sk-test")
        .match_body(mockito::Matcher::PartialJsonString(
            r#"{"model":"openai/gpt-4o-mini","temperature":0.7,"max_tokens":2048}"#.to_string(),
        ))
        .with_status(200)
        .with_body(r#"{"choices":[{"message":{"content":"Hello"}}]}"#)
        .expect(1)
        .create();
    let ctx = TestContext::new();
    ctx.write_config(&endpoint(&server));

    ctx.cli_with_key()
        .arg("generate")
        .args(SUBJECT)
        .args(["--model", "openai/gpt-4o-mini"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello"));

    mock.assert();
}

#[test]
fn generate_reports_remote_error_message() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", PATH)
        .with_status(404)
        .with_body(r#"{"error":{"message":"bad model"}}"#)
        .expect(1)
        .create();
    let ctx = TestContext::new();
    ctx.write_config(&endpoint(&server));

    ctx.cli_with_key()
        .arg("generate")
        .args(SUBJECT)
        .assert()
        .failure()
        .stderr(predicate::str::contains("API Error: bad model"));

    mock.assert();
}

#[test]
fn env_file_supplies_api_key() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", PATH)
        .match_header("authorization", "Bearer from-file")
        .with_status(200)
        .with_body(r#"{"choices":[{"message":{"content":"via env file"}}]}"#)
        .create();
    let ctx = TestContext::new();
    let config = ctx.write_config(&endpoint(&server));
    let env_file = ctx.write_file("keys.env", &format!("{}=from-file\n", API_KEY_ENV));

    ctx.cli()
        .arg("--config")
        .arg(&config)
        .arg("--env-file")
        .arg(&env_file)
        .arg("generate")
        .args(SUBJECT)
        .assert()
        .success()
        .stdout(predicate::str::contains("via env file"));

    mock.assert();
}

#[test]
fn validation_failure_never_reaches_server() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", PATH).expect(0).create();
    let ctx = TestContext::new();
    ctx.write_config(&endpoint(&server));

    ctx.cli_with_key()
        .args(["generate", "--first-name", "John"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please fill in all required fields"));

    mock.assert();
}
