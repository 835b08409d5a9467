use std::time::Duration;

use audit_stream_service::audit_streaming::{
    domain::model::{
        entities::streaming_header::StreamingHeader,
        enums::audit_event_delivery_error::AuditEventDeliveryError,
    },
    infrastructure::delivery::{
        audit_event_delivery_gateway::AuditEventDeliveryGateway,
        http::reqwest_audit_event_delivery_gateway_impl::{
            ReqwestAuditEventDeliveryGatewayImpl, sign_payload,
        },
    },
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

use crate::support::{VERIFICATION_TOKEN, instance_destination};

const BODY: &[u8] = br#"{"id":1,"event_type":"user_created"}"#;

fn gateway() -> ReqwestAuditEventDeliveryGatewayImpl {
    ReqwestAuditEventDeliveryGatewayImpl::new(Duration::from_secs(5)).expect("http client")
}

#[tokio::test]
async fn posts_the_body_with_token_and_signature_headers() {
    let server = MockServer::start().await;
    let signature = sign_payload(VERIFICATION_TOKEN, BODY).expect("signature");
    Mock::given(method("POST"))
        .and(path("/audit"))
        .and(header("content-type", "application/json"))
        .and(header("x-gitlab-audit-event-type", "user_created"))
        .and(header("x-gitlab-event-streaming-token", VERIFICATION_TOKEN))
        .and(header("x-gitlab-event-streaming-signature", signature.as_str()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let destination = instance_destination(&format!("{}/audit", server.uri()));

    gateway()
        .deliver(&destination, "user_created", BODY)
        .await
        .expect("delivered");

    let requests = server.received_requests().await.expect("recorded requests");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].body, BODY.to_vec());
}

#[tokio::test]
async fn active_custom_headers_are_sent_and_inactive_ones_are_not() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/audit"))
        .and(header("x-tenant", "acme"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut destination = instance_destination(&format!("{}/audit", server.uri()));
    destination
        .add_header(
            StreamingHeader::new("X-Tenant".to_string(), "acme".to_string(), true)
                .expect("valid header"),
        )
        .expect("header added");
    destination
        .add_header(
            StreamingHeader::new("X-Disabled".to_string(), "off".to_string(), false)
                .expect("valid header"),
        )
        .expect("header added");

    gateway()
        .deliver(&destination, "user_created", BODY)
        .await
        .expect("delivered");

    let requests = server.received_requests().await.expect("recorded requests");
    assert!(!requests[0].headers.contains_key("x-disabled"));
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let destination = instance_destination(&format!("{}/audit", server.uri()));

    let result = gateway().deliver(&destination, "user_created", BODY).await;

    assert_eq!(result, Err(AuditEventDeliveryError::Status(500)));
}

#[test]
fn signature_is_hex_hmac_sha256_of_the_body() {
    let signature = sign_payload("key", b"The quick brown fox jumps over the lazy dog")
        .expect("signature");

    assert_eq!(
        signature,
        "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
    );
}
