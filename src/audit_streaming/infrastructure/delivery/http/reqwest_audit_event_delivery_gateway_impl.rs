use std::time::Duration;

use async_trait::async_trait;
use hmac::{Hmac, Mac};
use reqwest::{
    Client, Url,
    header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};
use sha2::Sha256;

use crate::audit_streaming::{
    domain::model::{
        entities::external_destination::ExternalDestination,
        enums::audit_event_delivery_error::AuditEventDeliveryError,
    },
    infrastructure::delivery::audit_event_delivery_gateway::{
        AuditEventDeliveryGateway, EVENT_TYPE_HEADER, STREAMING_SIGNATURE_HEADER,
        STREAMING_TOKEN_HEADER,
    },
};

pub struct ReqwestAuditEventDeliveryGatewayImpl {
    client: Client,
}

impl ReqwestAuditEventDeliveryGatewayImpl {
    pub fn new(timeout: Duration) -> Result<Self, String> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| e.to_string())?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn build_headers(
        destination: &ExternalDestination,
        event_type: &str,
        body: &[u8],
    ) -> Result<HeaderMap, AuditEventDeliveryError> {
        let mut headers = HeaderMap::new();

        for header in destination.active_headers() {
            let name = HeaderName::from_bytes(header.key().as_bytes())
                .map_err(|e| AuditEventDeliveryError::InvalidHeader(e.to_string()))?;
            let value = HeaderValue::from_str(header.value())
                .map_err(|e| AuditEventDeliveryError::InvalidHeader(e.to_string()))?;
            headers.insert(name, value);
        }

        let token = destination.verification_token().value();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(EVENT_TYPE_HEADER, header_value(event_type)?);
        headers.insert(STREAMING_TOKEN_HEADER, header_value(token)?);
        headers.insert(
            STREAMING_SIGNATURE_HEADER,
            header_value(&sign_payload(token, body)?)?,
        );

        Ok(headers)
    }
}

#[async_trait]
impl AuditEventDeliveryGateway for ReqwestAuditEventDeliveryGatewayImpl {
    async fn deliver(
        &self,
        destination: &ExternalDestination,
        event_type: &str,
        body: &[u8],
    ) -> Result<(), AuditEventDeliveryError> {
        let url = Url::parse(destination.destination_url().value())
            .map_err(|e| AuditEventDeliveryError::InvalidUri(e.to_string()))?;
        if url.host_str().is_none() || !matches!(url.scheme(), "http" | "https") {
            return Err(AuditEventDeliveryError::InvalidUri(url.to_string()));
        }

        let headers = Self::build_headers(destination, event_type, body)?;

        let response = self
            .client
            .post(url)
            .headers(headers)
            .body(body.to_vec())
            .send()
            .await
            .map_err(|e| {
                if e.is_builder() {
                    AuditEventDeliveryError::InvalidUri(e.to_string())
                } else {
                    AuditEventDeliveryError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuditEventDeliveryError::Status(status.as_u16()));
        }

        Ok(())
    }
}

/// Hex HMAC-SHA256 of the request body keyed by the destination's verification token.
pub fn sign_payload(token: &str, body: &[u8]) -> Result<String, AuditEventDeliveryError> {
    let mut mac = Hmac::<Sha256>::new_from_slice(token.as_bytes())
        .map_err(|e| AuditEventDeliveryError::InvalidHeader(e.to_string()))?;
    mac.update(body);
    Ok(hex::encode(mac.finalize().into_bytes()))
}

fn header_value(value: &str) -> Result<HeaderValue, AuditEventDeliveryError> {
    HeaderValue::from_str(value).map_err(|e| AuditEventDeliveryError::InvalidHeader(e.to_string()))
}
