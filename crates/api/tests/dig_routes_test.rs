use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use ferrous_dig_api::{create_api_routes, AppState};
use ferrous_dig_application::ports::{
    RawAddressRecord, RawMxRecord, RawTxtRecord, RecordResolver, ResolverError, ENOTFOUND,
};
use ferrous_dig_application::services::SlackBlockFormatter;
use ferrous_dig_application::use_cases::{DigCommandUseCase, LookupRecordsUseCase};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use tower::ServiceExt;

// ============================================================================
// Fixture resolver: example.com has one A and one MX record, everything
// else does not exist.
// ============================================================================

struct FixtureResolver;

fn not_found(hostname: &str) -> ResolverError {
    ResolverError::with_code(ENOTFOUND, format!("no record found for {}", hostname))
}

#[async_trait]
impl RecordResolver for FixtureResolver {
    async fn resolve_a(&self, hostname: &str) -> Result<Vec<RawAddressRecord>, ResolverError> {
        if hostname != "example.com" {
            return Err(not_found(hostname));
        }
        Ok(vec![RawAddressRecord {
            address: IpAddr::V4(Ipv4Addr::new(93, 184, 216, 34)),
            ttl: 3600,
        }])
    }

    async fn resolve_aaaa(&self, hostname: &str) -> Result<Vec<RawAddressRecord>, ResolverError> {
        Err(not_found(hostname))
    }

    async fn resolve_mx(&self, hostname: &str) -> Result<Vec<RawMxRecord>, ResolverError> {
        if hostname != "example.com" {
            return Err(not_found(hostname));
        }
        Ok(vec![RawMxRecord {
            exchange: "mail.example.com".to_string(),
            priority: 10,
        }])
    }

    async fn resolve_txt(&self, hostname: &str) -> Result<Vec<RawTxtRecord>, ResolverError> {
        Err(not_found(hostname))
    }

    async fn resolve_ns(&self, hostname: &str) -> Result<Vec<String>, ResolverError> {
        Err(not_found(hostname))
    }
}

fn app() -> axum::Router {
    let lookup = Arc::new(LookupRecordsUseCase::new(Arc::new(FixtureResolver)));
    let state = AppState {
        dig: Arc::new(DigCommandUseCase::new(lookup, SlackBlockFormatter::new())),
    };
    create_api_routes(state)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/dig")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_health() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_dig_default_type_returns_block_kit() {
    let response = app()
        .oneshot(json_request(json!({"hostname": "example.com"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "response_type": "in_channel",
            "blocks": [{
                "type": "context",
                "elements": [
                    {"type": "mrkdwn", "text": "example.com"},
                    {"type": "mrkdwn", "text": "Type: *A*"},
                    {"type": "mrkdwn", "text": "TTL: 3600"},
                    {"type": "mrkdwn", "text": "IP: `93.184.216.34`"}
                ]
            }]
        })
    );
}

#[tokio::test]
async fn test_dig_lowercase_mx() {
    let response = app()
        .oneshot(json_request(json!({"hostname": "example.com", "type": "mx"})))
        .await
        .unwrap();

    let body = body_json(response).await;
    let elements = body["blocks"][0]["elements"].as_array().unwrap();
    assert_eq!(elements.len(), 3);
    assert_eq!(elements[1]["text"], "`mail.example.com`");
    assert_eq!(elements[2]["text"], "Priority: `10`");
}

#[tokio::test]
async fn test_dig_unknown_domain_is_still_ok() {
    let response = app()
        .oneshot(json_request(json!({"hostname": "bogus.invalid"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body["blocks"],
        json!([{
            "type": "context",
            "elements": [{"type": "mrkdwn", "text": "Domain bogus.invalid not found."}]
        }])
    );
}

#[tokio::test]
async fn test_slash_command_form() {
    let request = Request::builder()
        .method("POST")
        .uri("/slack/dig")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("command=%2Fdig&text=example.com+MX"))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["response_type"], "in_channel");
    assert_eq!(body["blocks"][0]["elements"][1]["text"], "`mail.example.com`");
}
