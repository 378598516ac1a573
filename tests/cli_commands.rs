mod common;

use common::{SUBJECT, TestContext};
use predicates::prelude::*;

#[test]
fn templates_list_shows_all_categories() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["templates", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("profile - Profile (default)"))
        .stdout(predicate::str::contains("consumer_behavior - Consumer Behavior"))
        .stdout(predicate::str::contains("news - News"));
}

#[test]
fn templates_show_prints_stock_text() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["t", "show", "Political Interests"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"{full_name}\""))
        .stdout(predicate::str::contains("\"{city}, {state}\""));
}

#[test]
fn templates_show_rejects_unknown_category() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["templates", "show", "weather"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category 'weather' not found"));
}

#[test]
fn models_marks_configured_default() {
    let ctx = TestContext::new();
    ctx.write_file("promptlab.toml", "[session]\ndefault_model = \"openai/gpt-5\"\n");

    ctx.cli()
        .arg("models")
        .assert()
        .success()
        .stdout(predicate::str::contains("openai/gpt-5 (default)"))
        .stdout(predicate::str::contains("google/gemini-2.5-flash\n"));
}

#[test]
fn prompt_preview_needs_no_api_key() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("generate")
        .args(SUBJECT)
        .args(["--category", "news", "--prompt-preview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"John Smith\""))
        .stdout(predicate::str::contains("{full_name}").not());
}

#[test]
fn generate_without_api_key_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("generate")
        .args(SUBJECT)
        .assert()
        .failure()
        .stderr(predicate::str::contains("API key not found in environment variables"));
}

#[test]
fn generate_with_blank_field_fails() {
    let ctx = TestContext::new();

    ctx.cli_with_key()
        .args(["g", "--first-name", "John", "--last-name", "Smith", "--state", "AZ"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please fill in all required fields"))
        .stderr(predicate::str::contains("missing: City"));
}

#[test]
fn template_file_with_unknown_placeholder_fails() {
    let ctx = TestContext::new();
    let template = ctx.write_file("custom.txt", "Hello {nickname}");

    ctx.cli_with_key()
        .arg("generate")
        .args(SUBJECT)
        .arg("--template-file")
        .arg(&template)
        .arg("--prompt-preview")
        .assert()
        .failure()
        .stderr(predicate::str::contains("nickname"));
}

#[test]
fn invalid_config_is_reported() {
    let ctx = TestContext::new();
    ctx.write_file("promptlab.toml", "[api]\nretries = 3\n");

    ctx.cli().arg("models").assert().failure().stderr(predicate::str::contains("Error:"));
}

#[test]
fn explicit_missing_config_is_reported() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--config", "absent.toml", "models"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}
