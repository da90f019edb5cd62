//! End-to-end tests over TCP, driven through the SDK client.

use risk_sdk::{AssessRequest, RiskClient};

mod common;

#[tokio::test]
async fn test_assess_then_report() {
    let (addr, shutdown) = common::start_server(common::test_config()).await;
    let client = RiskClient::with_client(common::http_client(), &common::base_url(addr));

    let assessed = client
        .assess_risk(&AssessRequest {
            location: "Himalayas, Nepal".into(),
            lat: Some(27.98),
            lng: Some(86.92),
        })
        .await
        .expect("assessment should succeed");
    assert!(assessed.success);
    assert_eq!(assessed.data.risk_level, 65);
    assert_eq!(assessed.data.factors.activity, "Moderate");

    let report = client
        .generate_report("Himalayas, Nepal", &assessed.data)
        .await
        .expect("report should succeed");
    assert!(report.success);
    assert!(report.download_url.ends_with("_Himalayas,_Nepal.pdf"));

    shutdown.trigger();
}

#[tokio::test]
async fn test_suggestions_over_tcp() {
    let (addr, shutdown) = common::start_server(common::test_config()).await;
    let client = RiskClient::with_client(common::http_client(), &common::base_url(addr));

    let res = client.location_suggestions("japan").await.unwrap();
    assert!(res.success);
    assert_eq!(res.suggestions, vec!["Mount Fuji, Japan".to_string()]);

    let res = client.location_suggestions("kilimanjaro, t").await.unwrap();
    assert_eq!(res.suggestions, vec!["Kilimanjaro, Tanzania".to_string()]);

    shutdown.trigger();
}

#[tokio::test]
async fn test_failure_envelope_over_tcp() {
    let (addr, shutdown) = common::start_server(common::test_config()).await;

    let res = common::http_client()
        .post(format!("{}/api/assess-risk", common::base_url(addr)))
        .header("content-type", "application/json")
        .body(r#"{"location": 42}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 500);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Failed to assess risk");

    shutdown.trigger();
}

#[tokio::test]
async fn test_graceful_shutdown_stops_listener() {
    let (addr, shutdown) = common::start_server(common::test_config()).await;
    let url = format!("{}/health", common::base_url(addr));

    let client = reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap();
    assert!(client.get(&url).send().await.unwrap().status().is_success());

    shutdown.trigger();
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;

    assert!(client.get(&url).send().await.is_err());
}
