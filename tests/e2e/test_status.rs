use crate::e2e::helpers;

use helpers::{basic_auth, TestContext, TEST_KEYS};
use hyper::StatusCode;
use serde_json::{json, Value};
use std::time::Duration;
use test_context::test_context;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

async fn mock_talk(ctx: &TestContext, id: &str, payload: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/talks/{}", id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload))
        .mount(&ctx.provider)
        .await;
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_expose_result_url_under_every_alias(ctx: &TestContext) {
    let result_url = "https://d-id-talks-prod.s3.us-west-2.amazonaws.com/tlk_done/result.mp4";
    let payload = json!({
        "id": "tlk_done",
        "status": "done",
        "result_url": result_url,
        "thumbnail_url": "https://d-id-talks-prod.s3.us-west-2.amazonaws.com/tlk_done/thumb.jpg",
        "duration": 3.5,
        "created_at": "2026-10-17T10:00:00.000Z"
    });
    mock_talk(ctx, "tlk_done", payload.clone()).await;

    let response = ctx.client.get("/status/tlk_done").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.field("status"), "success");
    assert_eq!(response.field("video_id"), "tlk_done");
    assert_eq!(response.field("video_status"), "ready");
    assert_eq!(response.field("provider_status"), "done");
    assert_eq!(response.field("result_url"), result_url);
    assert_eq!(response.field("download_url"), result_url);
    assert_eq!(response.field("stream_url"), result_url);
    assert_eq!(
        response.field("thumbnail_url"),
        "https://d-id-talks-prod.s3.us-west-2.amazonaws.com/tlk_done/thumb.jpg"
    );
    assert_eq!(response.field("data"), &payload);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_translate_in_progress_states(ctx: &TestContext) {
    mock_talk(ctx, "tlk_new", json!({"id": "tlk_new", "status": "created"})).await;
    mock_talk(ctx, "tlk_run", json!({"id": "tlk_run", "status": "started"})).await;
    mock_talk(ctx, "tlk_bad", json!({"id": "tlk_bad", "status": "error"})).await;

    let cases = [
        ("tlk_new", "queued"),
        ("tlk_run", "processing"),
        ("tlk_bad", "failed"),
    ];

    for (id, expected) in cases {
        let response = ctx.client.get(&format!("/status/{}", id)).await.unwrap();
        response.assert_status(StatusCode::OK);
        assert_eq!(response.field("video_status"), expected, "status of {}", id);
        assert!(response.field("result_url").is_null());
        assert!(response.field("download_url").is_null());
        assert!(response.field("stream_url").is_null());
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_unknown_and_keep_raw_status(ctx: &TestContext) {
    mock_talk(ctx, "tlk_odd", json!({"id": "tlk_odd", "status": "rejected"})).await;

    let response = ctx.client.get("/status/tlk_odd").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.field("video_status"), "unknown");
    assert_eq!(response.field("provider_status"), "rejected");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fail_status_fetch_on_provider_error(ctx: &TestContext) {
    Mock::given(method("GET"))
        .and(path("/talks/tlk_missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "kind": "NotFoundError",
            "description": "talk not found"
        })))
        .expect(1)
        .mount(&ctx.provider)
        .await;

    let response = ctx.client.get("/status/tlk_missing").await.unwrap();

    response
        .assert_status(StatusCode::BAD_GATEWAY)
        .assert_error_kind("StatusFetchFailed")
        .assert_error_message("talk not found");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fail_status_fetch_on_timeout(ctx: &TestContext) {
    Mock::given(method("GET"))
        .and(path("/talks/tlk_slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "tlk_slow", "status": "done"}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&ctx.provider)
        .await;

    let response = ctx.client.get("/status/tlk_slow").await.unwrap();

    response
        .assert_status(StatusCode::BAD_GATEWAY)
        .assert_error_kind("StatusFetchFailed");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_share_rotation_between_generate_and_status(ctx: &TestContext) {
    Mock::given(method("POST"))
        .and(path("/talks"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"id": "tlk_shared", "status": "created"})),
        )
        .mount(&ctx.provider)
        .await;
    mock_talk(ctx, "tlk_shared", json!({"id": "tlk_shared", "status": "started"})).await;

    ctx.client
        .post("/generate", &json!({"text": "Hello world"}))
        .await
        .unwrap()
        .assert_status(StatusCode::OK);
    ctx.client
        .get("/status/tlk_shared")
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    assert_eq!(
        ctx.provider_auth_headers().await,
        vec![basic_auth(TEST_KEYS[0]), basic_auth(TEST_KEYS[1])]
    );
}

#[tokio::test]
async fn it_should_fail_status_without_keys() {
    let ctx = TestContext::with_keys(&[]).await.unwrap();

    let response = ctx.client.get("/status/tlk_any").await.unwrap();

    response
        .assert_status(StatusCode::SERVICE_UNAVAILABLE)
        .assert_error_kind("NoCredentialsConfigured");
}
