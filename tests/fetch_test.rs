//! Fetching through the `FeedbackSource` seam
//!
//! Covers:
//! 1. Worker events for successful and failed fetches
//! 2. The HTTP source against a one-shot local server
//! 3. The sync bridge round trip used by the TUI thread

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use async_trait::async_trait;
use review_stats::domain::feedback::{Category, CategoryStats, FeedbackEntry};
use review_stats::infrastructure::feedback::{
    FeedbackSource, FetchError, HttpFeedbackSource, SourceConfig,
};
use review_stats::infrastructure::runtime::{
    fetch_feedback, RuntimeBridge, RuntimeCommand, RuntimeEvent,
};

/// In-memory source returning a fixed list, or a decode failure
struct StaticSource {
    entries: Option<Vec<FeedbackEntry>>,
}

#[async_trait]
impl FeedbackSource for StaticSource {
    async fn fetch_all(&self) -> Result<Vec<FeedbackEntry>, FetchError> {
        match &self.entries {
            Some(entries) => Ok(entries.clone()),
            None => Err(FetchError::Decode(
                serde_json::from_str::<serde_json::Value>("<html>").unwrap_err(),
            )),
        }
    }

    fn endpoint_name(&self) -> String {
        "memory".to_string()
    }
}

/// Serve exactly one HTTP response on a random local port
fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let mut request = Vec::new();
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{addr}/api/feedback/all")
}

fn http_source(endpoint: String) -> HttpFeedbackSource {
    HttpFeedbackSource::new(&SourceConfig {
        endpoint,
        timeout: Duration::from_secs(5),
        ..SourceConfig::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_fetch_feedback_success_event() {
    let source = StaticSource {
        entries: Some(vec![
            FeedbackEntry::with_suggestion("missing semicolon"),
            FeedbackEntry::with_suggestion("slow"),
        ]),
    };

    match fetch_feedback(&source, 4).await {
        RuntimeEvent::FeedbackLoaded {
            request_id,
            entries,
            ..
        } => {
            assert_eq!(request_id, 4);
            assert_eq!(entries.len(), 2);
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_feedback_failure_event() {
    let source = StaticSource { entries: None };

    match fetch_feedback(&source, 9).await {
        RuntimeEvent::FetchFailed {
            request_id,
            message,
        } => {
            assert_eq!(request_id, 9);
            assert!(message.contains("not a feedback list"));
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test]
async fn test_http_source_decodes_entries() {
    let endpoint = serve_once(
        "200 OK",
        r#"[{"id":1,"suggestion":"possible SQL injection risk","language":"python"},{"id":2,"suggestion":null}]"#,
    );
    let entries = http_source(endpoint).fetch_all().await.unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].language.as_deref(), Some("python"));
    assert_eq!(entries[1].suggestion, None);

    let stats = CategoryStats::from_entries(entries);
    assert_eq!(stats.count(Category::SecurityIssue), 1);
    assert_eq!(stats.count(Category::Other), 1);
}

#[tokio::test]
async fn test_http_source_non_success_status() {
    let endpoint = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#);
    let err = http_source(endpoint).fetch_all().await.unwrap_err();

    assert!(matches!(err, FetchError::Status { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_http_source_non_list_body() {
    let endpoint = serve_once("200 OK", r#"{"message":"not a list"}"#);
    let err = http_source(endpoint).fetch_all().await.unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_http_source_unreachable() {
    // Grab a free port, then close it so nothing is listening
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let source = http_source(format!("http://127.0.0.1:{port}/api/feedback/all"));

    let event = fetch_feedback(&source, 1).await;
    assert!(matches!(event, RuntimeEvent::FetchFailed { request_id: 1, .. }));
}

#[test]
fn test_invalid_endpoint_rejected() {
    let result = HttpFeedbackSource::new(&SourceConfig {
        endpoint: "ftp://example.com/feedback".to_string(),
        ..SourceConfig::default()
    });
    assert!(matches!(result, Err(FetchError::InvalidEndpoint { .. })));
}

#[test]
fn test_bridge_round_trip() {
    let source = Arc::new(StaticSource {
        entries: Some(vec![FeedbackEntry::with_suggestion("unused import")]),
    });
    let bridge = RuntimeBridge::new(source).unwrap();

    bridge.send(RuntimeCommand::Fetch { request_id: 1 }).unwrap();
    match bridge.recv_timeout(Duration::from_secs(5)) {
        Some(RuntimeEvent::FeedbackLoaded {
            request_id,
            entries,
            ..
        }) => {
            assert_eq!(request_id, 1);
            assert_eq!(entries[0].suggestion.as_deref(), Some("unused import"));
        }
        other => panic!("unexpected event {other:?}"),
    }

    bridge.send(RuntimeCommand::Shutdown).unwrap();
}
