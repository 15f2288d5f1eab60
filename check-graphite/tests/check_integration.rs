//! Full plugin runs against a mock Graphite server.

use check_graphite::cli::Args;
use check_graphite::run_check;
use check_graphite::status::{CheckOutcome, Status};
use clap::Parser;
use graphite_guard::client::GraphiteClient;
use mockito::Matcher;

const LOAD: &str = r#"[
    {"target": "web1.load", "datapoints": [[1.1, 1700000000], [2.2, 1700000060]]},
    {"target": "web2.load", "datapoints": [[3.3, 1700000000], [null, 1700000060]]}
]"#;

async fn run(server: &mockito::ServerGuard, extra: &[&str]) -> CheckOutcome {
    let host = server.url();
    let mut argv = vec!["check-graphite", "-g", host.as_str(), "-m", "servers.*.load"];
    argv.extend_from_slice(extra);

    let args = Args::try_parse_from(argv).expect("arguments should parse");
    let thresholds = args.validate().expect("arguments should validate");
    let client = GraphiteClient::new(args.client_config()).expect("Failed to create client");
    run_check(&client, &args, &thresholds).await
}

async fn serve(server: &mut mockito::ServerGuard, body: &str) -> mockito::Mock {
    server
        .mock("GET", "/render")
        .match_query(Matcher::Any)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

#[tokio::test]
async fn test_sum_within_thresholds_is_ok() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/render")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("target".into(), "servers.*.load".into()),
            Matcher::UrlEncoded("from".into(), "-1minute".into()),
            Matcher::UrlEncoded("format".into(), "json".into()),
        ]))
        .with_body(LOAD)
        .create_async()
        .await;

    let outcome = run(&server, &["-a", "sum", "-w", "10", "-c", "100"]).await;

    mock.assert_async().await;
    assert_eq!(outcome.status, Status::Ok);
    assert_eq!(
        outcome.to_string(),
        "OK: metric (sum is 6.6) | sum=6.6;10;100;;"
    );
}

#[tokio::test]
async fn test_max_over_warning_is_warning() {
    let mut server = mockito::Server::new_async().await;
    serve(&mut server, LOAD).await;

    let outcome = run(&server, &["-n", "load", "-a", "max", "-w", "3", "-c", "5"]).await;
    assert_eq!(outcome.exit_code(), 1);
    assert_eq!(outcome.to_string(), "WARNING: load (max is 3.3) | max=3.3;3;5;;");
}

#[tokio::test]
async fn test_inverted_critical_range() {
    let mut server = mockito::Server::new_async().await;
    serve(&mut server, LOAD).await;

    let outcome = run(&server, &["-a", "nullcnt", "-c", "@1:1"]).await;
    assert_eq!(outcome.status, Status::Critical);
    assert_eq!(outcome.message, "metric (nullcnt is 1)");
}

#[tokio::test]
async fn test_wrapped_query_is_sent() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/render")
        .match_query(Matcher::UrlEncoded(
            "target".into(),
            "group(servers.*.load, constantLine(0))".into(),
        ))
        .with_body(LOAD)
        .create_async()
        .await;

    let outcome = run(&server, &["-p", "-w", "10"]).await;
    mock.assert_async().await;
    assert_eq!(outcome.status, Status::Ok);
}

#[tokio::test]
async fn test_empty_response_is_unknown() {
    let mut server = mockito::Server::new_async().await;
    serve(&mut server, "[]").await;

    let outcome = run(&server, &["-w", "10"]).await;
    assert_eq!(outcome.exit_code(), 3);
    assert_eq!(
        outcome.to_string(),
        "UNKNOWN: no metrics received from graphite"
    );
}

#[tokio::test]
async fn test_only_nulls_is_unknown() {
    let mut server = mockito::Server::new_async().await;
    serve(
        &mut server,
        r#"[{"target": "a", "datapoints": [[null, 1700000000]]}]"#,
    )
    .await;

    let outcome = run(&server, &["-a", "p95", "-w", "10"]).await;
    assert_eq!(outcome.to_string(), "UNKNOWN: only null values returned");
}

#[tokio::test]
async fn test_garbage_response_is_unknown_fetch_failure() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/render")
        .match_query(Matcher::Any)
        .with_status(502)
        .with_body("Bad Gateway")
        .create_async()
        .await;

    let outcome = run(&server, &["-w", "10"]).await;
    assert_eq!(outcome.status, Status::Unknown);
    assert!(
        outcome.message.starts_with("failed to fetch metrics: "),
        "unexpected message: {}",
        outcome.message
    );
    assert!(outcome.perfdata.is_empty());
}
