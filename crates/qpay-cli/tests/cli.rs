//! CLI tests against a mock QPay server.
//!
//! The built `qpay` binary is run with `QPAY_*` variables pointing at a
//! wiremock server.

use std::process::{Command, Output};

use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENV_VARS: [&str; 5] = [
    "QPAY_BASE_URL",
    "QPAY_USERNAME",
    "QPAY_PASSWORD",
    "QPAY_INVOICE_CODE",
    "QPAY_CALLBACK_URL",
];

/// Run the CLI binary with the given base URL (or none) and arguments.
async fn run_cli(base_url: Option<String>, args: &[&str]) -> Output {
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();

    tokio::task::spawn_blocking(move || {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_qpay"));
        cmd.args(&args);
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("RUST_LOG");
        for name in ENV_VARS {
            cmd.env_remove(name);
        }
        if let Some(base_url) = base_url {
            cmd.env("QPAY_BASE_URL", base_url)
                .env("QPAY_USERNAME", "testuser")
                .env("QPAY_PASSWORD", "testpass")
                .env("QPAY_INVOICE_CODE", "TEST_INVOICE")
                .env("QPAY_CALLBACK_URL", "https://example.com/callback");
        }
        cmd.output().expect("Failed to execute CLI")
    })
    .await
    .expect("CLI task panicked")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

async fn mock_server() -> MockServer {
    let server = MockServer::start().await;
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64;

    Mock::given(method("POST"))
        .and(path("/v2/auth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_type": "bearer",
            "access_token": "access-1",
            "expires_in": now + 3600,
            "refresh_token": "refresh-1",
            "refresh_expires_in": now + 7200,
            "scope": "profile"
        })))
        .mount(&server)
        .await;

    server
}

#[tokio::test]
async fn test_missing_configuration_fails() {
    let output = run_cli(None, &["token"]).await;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("QPAY_BASE_URL"));
}

#[tokio::test]
async fn test_token() {
    let server = mock_server().await;

    let output = run_cli(Some(server.uri()), &["token"]).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let stdout = stdout(&output);
    assert!(stdout.contains("Token obtained"));
    assert!(stdout.contains("bearer"));
    assert!(!stdout.contains("access-1"));
}

#[tokio::test]
async fn test_payment_get() {
    let server = mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v2/payment/PAY-1"))
        .and(header("authorization", "Bearer access-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "payment_id": "PAY-1",
            "payment_status": "PAID"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli(Some(server.uri()), &["payment", "get", "PAY-1"]).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let payment: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(payment["payment_status"], "PAID");
}

#[tokio::test]
async fn test_invoice_cancel_reports_error_code() {
    let server = mock_server().await;

    Mock::given(method("DELETE"))
        .and(path("/v2/invoice/INV-404"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "INVOICE_NOTFOUND",
            "message": "Invoice not found"
        })))
        .mount(&server)
        .await;

    let output = run_cli(Some(server.uri()), &["invoice", "cancel", "INV-404"]).await;

    assert!(!output.status.success());
    let stderr = stderr(&output);
    assert!(stderr.contains("Failed to cancel invoice"));
    assert!(stderr.contains("INVOICE_NOTFOUND"));
}
