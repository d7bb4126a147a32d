//! Smoke tests for the HTTP source
//!
//! These tests run a real listener, send raw HTTP/1.1 requests over TCP and
//! verify the rows land in the session CSV files.

use std::path::Path;
use std::time::Duration;

use cointrail_sinks::session_csv::{SessionCsvConfig, SessionCsvSink};
use cointrail_sources::{HttpSource, HttpSourceConfig, HttpSourceError};
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

/// Test ports (high ports unlikely to conflict)
const TEST_HTTP_PORT: u16 = 51741;
const TEST_BIND_CONFLICT_PORT: u16 = 51742;

fn local_config(port: u16) -> HttpSourceConfig {
    HttpSourceConfig {
        address: "127.0.0.1".into(),
        ..HttpSourceConfig::with_port(port)
    }
}

/// Connect, retrying until the listener is up
async fn connect(port: u16) -> TcpStream {
    for _ in 0..50 {
        if let Ok(stream) = TcpStream::connect(("127.0.0.1", port)).await {
            return stream;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("HTTP source did not start listening on port {port}");
}

/// Send one POST and return the raw response
async fn post(port: u16, path: &str, body: &str) -> String {
    let mut stream = connect(port).await;
    let request = format!(
        "POST {path} HTTP/1.1\r\n\
         Host: 127.0.0.1\r\n\
         Content-Type: application/json\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\
         \r\n\
         {body}",
        body.len()
    );
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = String::new();
    timeout(Duration::from_secs(5), stream.read_to_string(&mut response))
        .await
        .expect("timed out waiting for response")
        .unwrap();
    response
}

fn data_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .split_terminator("\r\n")
        .map(String::from)
        .collect()
}

#[tokio::test]
async fn test_http_source_appends_rows() {
    let dir = TempDir::new().unwrap();
    let sink = SessionCsvSink::new(SessionCsvConfig::default().with_path(dir.path()));
    let cancel = CancellationToken::new();

    let source = HttpSource::new(local_config(TEST_HTTP_PORT), sink);
    let handle = tokio::spawn(source.run(cancel.clone()));

    let response = post(
        TEST_HTTP_PORT,
        "/api/coin_pickup",
        r#"{"sessionId":"smoke","round":1,"coinId":"c1","coin_value":5}"#,
    )
    .await;
    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    assert!(response.ends_with(r#"{"status":"ok"}"#), "{response}");

    let response = post(
        TEST_HTTP_PORT,
        "/api/round_event",
        r#"{"sessionId":"smoke","type":"session_end","final_score":42}"#,
    )
    .await;
    assert!(response.starts_with("HTTP/1.1 200"), "{response}");

    let response = post(TEST_HTTP_PORT, "/api/coin_pickup", r#"{"coinId":"c2"}"#).await;
    assert!(response.starts_with("HTTP/1.1 400"), "{response}");
    assert!(response.ends_with(r#"{"error":"Missing sessionId"}"#), "{response}");

    let clicks = data_lines(&dir.path().join("smoke_clicks.csv"));
    assert_eq!(clicks.len(), 2);
    assert!(clicks[0].starts_with("sessionId,round,coinId,"));
    assert!(clicks[1].starts_with("smoke,1,c1,,5,,,,,,,"));

    let events = data_lines(&dir.path().join("smoke_events.csv"));
    assert_eq!(events.len(), 2);
    assert!(events[1].starts_with("smoke,session_end,,,"));
    assert!(events[1].ends_with(",42"));

    cancel.cancel();
    let result = timeout(Duration::from_secs(5), handle)
        .await
        .expect("HTTP source did not shut down")
        .unwrap();
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_http_source_bind_conflict() {
    let _taken = tokio::net::TcpListener::bind(("127.0.0.1", TEST_BIND_CONFLICT_PORT))
        .await
        .unwrap();

    let dir = TempDir::new().unwrap();
    let sink = SessionCsvSink::new(SessionCsvConfig::default().with_path(dir.path()));
    let source = HttpSource::new(local_config(TEST_BIND_CONFLICT_PORT), sink);

    let result = source.run(CancellationToken::new()).await;
    assert!(matches!(result, Err(HttpSourceError::Bind { .. })));
}
