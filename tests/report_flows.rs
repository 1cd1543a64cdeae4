use predicates::str::contains;

mod common;
use common::TestEnv;

#[test]
fn aligned_report_with_header_core_and_plugin() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--name", "--version", "--no-url", "git"])
        .assert()
        .success()
        .stdout("NAME    VERSION\njenkins 2.400\ngit     4.11\n");
}

#[test]
fn delimited_report_without_header() {
    let env = TestEnv::new();
    env.cmd()
        .args(["-d", ",", "--name", "--version", "--no-header", "--no-url"])
        .assert()
        .success()
        .stdout("jenkins,2.400\n");
}

#[test]
fn single_column_drops_the_header_even_when_not_suppressed() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--version", "--no-url"])
        .assert()
        .success()
        .stdout("2.400\n");
}

#[test]
fn missing_fields_render_as_placeholder() {
    let env = TestEnv::new();
    env.cmd()
        .args(["-d", "\t", "--name", "--no-header", "git"])
        .assert()
        .success()
        .stdout("jenkins\thttp://x/jenkins.war\ngit\tn/a\n");
}

#[test]
fn wildcard_reports_every_plugin() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--name", "--no-url", "*"])
        .assert()
        .success()
        .stdout("jenkins\nant\ngit\n");
}

#[test]
fn missing_plugin_fails_fast_with_no_report() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--version", "missing", "git"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(contains("ERROR: plugin not found: missing"));
}

#[test]
fn zero_selected_columns_is_a_usage_error() {
    let env = TestEnv::new();
    env.cmd()
        .arg("--no-url")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("ERROR:"))
        .stderr(contains("at least one column"));
}

#[test]
fn document_without_core_is_fatal() {
    let env = TestEnv::with_document(serde_json::json!({
        "plugins": {"git": {"name": "git"}}
    }));
    env.cmd()
        .arg("--name")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("ERROR:"))
        .stderr(contains("no `core` entry"));
}

#[test]
fn undecodable_document_is_fatal() {
    let env = TestEnv::with_raw_document("{not json");
    env.cmd()
        .assert()
        .failure()
        .code(1)
        .stderr(contains("ERROR: invalid update center document"));
}

#[test]
fn unreadable_source_is_fatal() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--source", "/nonexistent/update-center.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("ERROR:"));
}
