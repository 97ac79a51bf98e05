use crate::e2e::helpers;

use helpers::{FakeProviders, TestContext};
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_greet_on_root(ctx: &TestContext) {
    let response = ctx.client.get("/").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.field("message"), Some("AI services ready"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_ok_for_health_check(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);

    // Health endpoint returns plain text
    let body = String::from_utf8(response.body_bytes.clone()).unwrap();
    assert_eq!(body, "OK");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_configured_providers_when_ready(ctx: &TestContext) {
    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["translation"], serde_json::json!(["google_translate"]));
    assert_eq!(body["tts"], serde_json::json!(["google_tts"]));
    assert_eq!(body["stt"], serde_json::json!(["whisper"]));
    assert_eq!(body["captioning"]["model_loaded"], false);
}

#[tokio::test]
async fn it_should_report_optional_providers_when_configured() {
    let providers = FakeProviders {
        libre_translate: Some(helpers::fakes::FakeTranslator::new(&[])),
        azure_tts: Some(helpers::fakes::FakeSynthesizer::new(&[])),
        whisper: None,
        ..FakeProviders::default()
    };
    let ctx = TestContext::with_providers(providers).await;

    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(
        body["translation"],
        serde_json::json!(["google_translate", "libre_translate"])
    );
    assert_eq!(body["tts"], serde_json::json!(["azure_neural_tts", "google_tts"]));
    assert_eq!(body["stt"], serde_json::json!([]));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_include_request_id_in_responses(ctx: &TestContext) {
    let first = ctx.client.get("/health").await.unwrap();
    first.assert_header_exists("x-request-id");

    let second = ctx.client.get("/health/ready").await.unwrap();
    second.assert_header_exists("x-request-id");

    assert_ne!(first.header("x-request-id"), second.header("x-request-id"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_handle_concurrent_health_checks(ctx: &TestContext) {
    let mut futures = Vec::new();
    for _ in 0..10 {
        let client = ctx.client.clone();
        futures.push(async move { client.get("/health").await });
    }

    let results = futures::future::join_all(futures).await;

    for result in results {
        let response = result.unwrap();
        response.assert_status(StatusCode::OK);
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_use_different_endpoints_for_liveness_and_readiness(ctx: &TestContext) {
    let liveness_response = ctx.client.get("/health").await.unwrap();
    liveness_response.assert_status(StatusCode::OK);

    let readiness_response = ctx.client.get("/health/ready").await.unwrap();
    readiness_response.assert_status(StatusCode::OK);

    assert!(liveness_response.body.is_none()); // Plain text
    assert!(readiness_response.body.is_some()); // JSON
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_publish_the_language_catalogue(ctx: &TestContext) {
    let response = ctx.client.get("/languages").await.unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();

    let santali = body["translation"]["Santali"].as_array().unwrap();
    assert_eq!(santali[0]["provider"], "google_translate");
    assert_eq!(santali[0]["tier"], "direct");
    assert_eq!(santali[0]["code"], "sat");
    assert_eq!(santali[1]["tier"], "script_fallback");
    assert_eq!(santali[1]["code"], "bn");

    assert_eq!(body["tts"]["Bodo"][0]["code"], "hi");
    assert_eq!(body["stt"]["Dogri"][0]["code"], "hi");
    assert!(body["translation"].get("Wancho").is_none());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_not_found_for_unknown_routes(ctx: &TestContext) {
    let response = ctx.client.get("/speech/clone").await.unwrap();

    response
        .assert_status(StatusCode::NOT_FOUND)
        .assert_error_message("/speech/clone");
}
