use fetch_wrapper::{Fetcher, HttpTransport, SuccessCriterion};
use httpmock::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;

async fn fetch_with_callback(fetcher: &Fetcher, path: &str) -> Option<String> {
    let (tx, rx) = oneshot::channel();
    fetcher.fetch(path, move |outcome| {
        let _ = tx.send(outcome);
    });
    rx.await.expect("callback dropped without being called")
}

#[tokio::test]
async fn test_fetch_json_document() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/data.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .body("{}");
    });

    let transport = HttpTransport::with_base_url(&server.base_url()).unwrap();
    let fetcher = Fetcher::new(transport);

    let result = fetch_with_callback(&fetcher, "/data.json").await;

    api_mock.assert();
    assert_eq!(result, Some("{}".to_string()));
}

#[tokio::test]
async fn test_fetch_absolute_url_without_base() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/hello.txt");
        then.status(200).body("hello");
    });

    let fetcher = Fetcher::new(HttpTransport::new());

    let result = fetch_with_callback(&fetcher, &server.url("/hello.txt")).await;

    api_mock.assert();
    assert_eq!(result, Some("hello".to_string()));
}

#[tokio::test]
async fn test_error_statuses_collapse_to_none() {
    let server = MockServer::start();
    let not_found = server.mock(|when, then| {
        when.method(GET).path("/missing");
        then.status(404).body("Not Found");
    });
    let server_error = server.mock(|when, then| {
        when.method(GET).path("/broken");
        then.status(500).body("Internal Server Error");
    });

    let transport = HttpTransport::with_base_url(&server.base_url()).unwrap();
    let fetcher = Fetcher::new(transport);

    assert_eq!(fetch_with_callback(&fetcher, "/missing").await, None);
    assert_eq!(fetch_with_callback(&fetcher, "/broken").await, None);

    not_found.assert();
    server_error.assert();
}

#[tokio::test]
async fn test_created_status_depends_on_criterion() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/created");
        then.status(201).body("made");
    });

    let transport = HttpTransport::with_base_url(&server.base_url()).unwrap();
    let strict = Fetcher::new(transport.clone());
    let lenient = Fetcher::new(transport).with_success_criterion(SuccessCriterion::AnySuccess);

    assert_eq!(fetch_with_callback(&strict, "/created").await, None);
    assert_eq!(
        fetch_with_callback(&lenient, "/created").await,
        Some("made".to_string())
    );

    api_mock.assert_hits(2);
}

#[tokio::test]
async fn test_connection_refused_collapses_to_none() {
    // Grab a free port, then close it so nothing is listening.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let base = format!("http://127.0.0.1:{}/", port);
    let fetcher = Fetcher::new(HttpTransport::with_base_url(&base).unwrap());

    assert_eq!(fetch_with_callback(&fetcher, "/data.json").await, None);
}

#[tokio::test]
async fn test_each_fetch_calls_back_once() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/item");
        then.status(200).body("item");
    });

    let transport = HttpTransport::with_base_url(&server.base_url()).unwrap();
    let fetcher = Fetcher::new(transport);
    let calls = Arc::new(AtomicUsize::new(0));
    let mut receivers = Vec::new();

    for _ in 0..3 {
        let (tx, rx) = oneshot::channel();
        let counter = calls.clone();
        fetcher.fetch("/item", move |outcome| {
            counter.fetch_add(1, Ordering::SeqCst);
            let _ = tx.send(outcome);
        });
        receivers.push(rx);
    }

    for rx in receivers {
        assert_eq!(rx.await.unwrap(), Some("item".to_string()));
    }
    tokio::time::sleep(Duration::from_millis(20)).await;

    api_mock.assert_hits(3);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}
