//! Native HTTP client against a local listener

#![cfg(not(target_arch = "wasm32"))]

use price_chart_data::{DataLoader, HttpClient, MarketDataSource, MarketEndpoint};
use price_chart_shared::{ChartError, TimeRange};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

const MARKET_CHART: &str = r#"{
    "prices": [[1709596800000, 61234.5], [1709600400000, 61500.25]],
    "market_caps": [[1709596800000, 1.2e12]],
    "total_volumes": [[1709596800000, 3.4e10], [1709600400000, 3.1e10]]
}"#;

/// Answer one request with `status` and `body`; the handle yields the request head.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}/api/v3", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\n\
             Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        let _ = stream.shutdown().await;
        String::from_utf8_lossy(&request).into_owned()
    });

    (base, handle)
}

#[tokio::test]
async fn test_loader_decodes_market_chart_over_http() {
    let (base, server) = serve_once("200 OK", MARKET_CHART).await;
    let endpoint = MarketEndpoint::new(&base, "bitcoin", "usd").unwrap();
    let loader = DataLoader::new(endpoint, HttpClient::new().unwrap());

    let chart = loader.load(TimeRange::OneWeek).await.unwrap();

    assert_eq!(chart.prices.len(), 2);
    assert_eq!(chart.prices[1].timestamp_ms, 1_709_600_400_000);
    assert_eq!(chart.prices[1].value, 61_500.25);
    assert_eq!(chart.total_volumes.len(), 2);

    let request = server.await.unwrap();
    assert!(request
        .starts_with("GET /api/v3/coins/bitcoin/market_chart?vs_currency=usd&days=3 HTTP/1.1"));
    assert!(request.to_ascii_lowercase().contains("accept: application/json"));
}

#[tokio::test]
async fn test_error_status_maps_to_http_error() {
    let (base, server) = serve_once("429 Too Many Requests", r#"{"error":"rate limited"}"#).await;
    let url = format!("{base}/coins/bitcoin/market_chart?vs_currency=usd&days=1");

    let result = HttpClient::new().unwrap().fetch_market_chart(&url).await;

    match result {
        Err(ChartError::Http { status, url: failed }) => {
            assert_eq!(status, 429);
            assert_eq!(failed, url);
        }
        other => panic!("expected an HTTP error, got {other:?}"),
    }
    server.await.unwrap();
}

#[tokio::test]
async fn test_malformed_body_is_a_parse_error() {
    let (base, server) = serve_once("200 OK", r#"{"prices": "soon"}"#).await;
    let url = format!("{base}/coins/bitcoin/market_chart?vs_currency=usd&days=1");

    let result = HttpClient::new().unwrap().fetch_market_chart(&url).await;

    assert!(matches!(result, Err(ChartError::Parse { .. })));
    server.await.unwrap();
}
