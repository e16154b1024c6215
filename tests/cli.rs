use assert_cmd::Command;
use httpmock::MockServer;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

/// edgecfg pointed at `server`, isolated from the user's config and any fastly.toml.
fn edgecfg(server: &MockServer, home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("edgecfg").unwrap();
    cmd.current_dir(home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path())
        .env("FASTLY_API_ENDPOINT", server.base_url())
        .env("FASTLY_API_TOKEN", "123")
        .env_remove("FASTLY_OUTPUT_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn dictionary_create_reports_success() {
    let server = MockServer::start();
    let home = TempDir::new().unwrap();
    let mock = server.mock(|when, then| {
        when.method("POST")
            .path("/service/123/version/1/dictionary")
            .header("fastly-key", "123")
            .json_body(json!({"name": "foo"}));
        let body = json!({"service_id": "123", "version": 1, "id": "1", "name": "foo"});
        then.status(200)
            .header("content-type", "application/json")
            .json_body(body);
    });

    edgecfg(&server, &home)
        .args([
            "dictionary",
            "create",
            "--name",
            "foo",
            "--service-id",
            "123",
            "--version",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created dictionary foo (service 123 version 1)"));

    mock.assert();
}

#[test]
fn describe_failure_exits_non_zero_with_api_message() {
    let server = MockServer::start();
    let home = TempDir::new().unwrap();
    server.mock(|when, then| {
        when.method("GET")
            .path("/service/123/version/1/logging/bigquery/logs");
        let body = json!({"msg": "Record not found", "detail": "Couldn't find BigQuery 'logs'"});
        then.status(404)
            .header("content-type", "application/json")
            .json_body(body);
    });

    edgecfg(&server, &home)
        .args([
            "logging",
            "bigquery",
            "describe",
            "-s",
            "123",
            "--version",
            "1",
            "-n",
            "logs",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "404 Not Found: Record not found: Couldn't find BigQuery 'logs'",
        ));
}

#[test]
fn missing_service_id_is_reported() {
    let server = MockServer::start();
    let home = TempDir::new().unwrap();

    edgecfg(&server, &home)
        .args(["dictionary", "list", "--version", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no service ID found"));
}

#[test]
fn manifest_service_id_is_used() {
    let server = MockServer::start();
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("fastly.toml"),
        "manifest_version = 1\nname = \"edge\"\nservice_id = \"abc\"\n",
    )
    .unwrap();
    let mock = server.mock(|when, then| {
        when.method("GET").path("/service/abc/version/3/dictionary");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([]));
    });

    edgecfg(&server, &home)
        .args(["dictionary", "list", "--version", "3"])
        .assert()
        .success()
        .stdout("SERVICE  VERSION  ID  NAME  WRITE ONLY\n");

    mock.assert();
}

#[test]
fn missing_required_flag_is_a_usage_error() {
    let server = MockServer::start();
    let home = TempDir::new().unwrap();

    edgecfg(&server, &home)
        .args([
            "dictionary-item",
            "create",
            "-s",
            "123",
            "--dictionary-id",
            "456",
            "--key",
            "foo",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--value"));
}

#[test]
fn verbose_prints_token_source_and_endpoint() {
    let server = MockServer::start();
    let home = TempDir::new().unwrap();
    server.mock(|when, then| {
        when.method("GET").path("/service/123/dictionary/456/items");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([]));
    });

    edgecfg(&server, &home)
        .args([
            "dictionary-item",
            "list",
            "-s",
            "123",
            "--dictionary-id",
            "456",
            "--verbose",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "Fastly API token provided via FASTLY_API_TOKEN\nFastly API endpoint: {}\n",
            server.base_url()
        )));
}

#[test]
fn token_from_config_file() {
    let server = MockServer::start();
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("fastly");
    fs::create_dir_all(&config_dir).unwrap();
    let config = "[user]\ntoken = \"from-file\"\n";
    fs::write(config_dir.join("config.toml"), config).unwrap();

    let mock = server.mock(|when, then| {
        when.method("DELETE")
            .path("/service/123/version/1/logging/loggly/logs")
            .header("fastly-key", "from-file");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"status": "ok"}));
    });

    edgecfg(&server, &home)
        .env_remove("FASTLY_API_TOKEN")
        .args([
            "logging",
            "loggly",
            "delete",
            "-s",
            "123",
            "--version",
            "1",
            "-n",
            "logs",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Deleted Loggly logging endpoint logs (service 123 version 1)",
        ));

    mock.assert();
}

#[test]
fn json_output_prints_api_objects() {
    let server = MockServer::start();
    let home = TempDir::new().unwrap();
    server.mock(|when, then| {
        when.method("GET")
            .path("/service/123/version/1/dictionary/geo");
        let body = json!({
            "service_id": "123", "version": 1, "id": "1", "name": "geo", "write_only": false
        });
        then.status(200)
            .header("content-type", "application/json")
            .json_body(body);
    });

    let output = edgecfg(&server, &home)
        .env("FASTLY_OUTPUT_FORMAT", "json")
        .args([
            "dictionary",
            "describe",
            "-s",
            "123",
            "--version",
            "1",
            "-n",
            "geo",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let printed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(printed["name"], "geo");
    assert_eq!(printed["id"], "1");
}
