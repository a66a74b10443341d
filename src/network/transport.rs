//! HTTP transport used by every panel
//!
//! The [`Transport`] trait is the seam between panel state and the network,
//! so tests can drive panels with `MockTransport` instead of live endpoints.

use super::error::FetchError;
use super::request::PanelRequest;
use crate::consts::cli_consts::http;
use reqwest::{Client, ClientBuilder, Response};
use serde_json::Value;

#[cfg(test)]
use mockall::automock;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("xrpl-pulse/", env!("CARGO_PKG_VERSION"));

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Issue the request and return the decoded JSON body.
    async fn send(&self, request: &PanelRequest) -> Result<Value, FetchError>;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(http::connect_timeout())
                .timeout(http::request_timeout())
                .user_agent(USER_AGENT)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    async fn handle_response_status(response: Response) -> Result<Response, FetchError> {
        if !response.status().is_success() {
            return Err(FetchError::from_response(response).await);
        }
        Ok(response)
    }

    async fn decode(response: Response) -> Result<Value, FetchError> {
        let response = Self::handle_response_status(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &PanelRequest) -> Result<Value, FetchError> {
        match request {
            PanelRequest::Get { url } => {
                let response = self
                    .client
                    .get(url)
                    .header("Accept", "application/json")
                    .send()
                    .await?;
                Self::decode(response).await
            }
            PanelRequest::JsonRpc { url, .. } => {
                let body = request.rpc_body().unwrap_or_default();
                let response = self.client.post(url).json(&body).send().await?;
                Self::decode(response).await
            }
            PanelRequest::Unavailable => Err(FetchError::NoIntegration),
        }
    }
}

/// Transport that never touches the network; every panel shows its fallback.
#[derive(Debug, Clone, Default)]
pub struct OfflineTransport;

#[async_trait::async_trait]
impl Transport for OfflineTransport {
    async fn send(&self, request: &PanelRequest) -> Result<Value, FetchError> {
        match request {
            PanelRequest::Unavailable => Err(FetchError::NoIntegration),
            _ => Err(FetchError::Offline),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::FallbackReason;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn get_from(server: &MockServer, route: &str) -> Result<Value, FetchError> {
        HttpTransport::new()
            .send(&PanelRequest::get(format!("{}{}", server.uri(), route)))
            .await
    }

    #[tokio::test]
    async fn test_rate_limit_carries_retry_after() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/simple/price"))
            .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "30"))
            .expect(1)
            .mount(&server)
            .await;

        let error = get_from(&server, "/simple/price").await.unwrap_err();
        assert!(matches!(
            error,
            FetchError::RateLimited {
                retry_after_secs: Some(30)
            }
        ));
        assert_eq!(error.fallback_reason(), FallbackReason::RateLimited);
        assert_eq!(error.retry_after_secs(), Some(30));
    }

    #[tokio::test]
    async fn test_rate_limit_without_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let error = get_from(&server, "/global").await.unwrap_err();
        assert!(matches!(
            error,
            FetchError::RateLimited {
                retry_after_secs: None
            }
        ));
    }

    #[tokio::test]
    async fn test_server_error_is_http_not_rate_limit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/global"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let error = get_from(&server, "/global").await.unwrap_err();
        match &error {
            FetchError::Http { status, message } => {
                assert_eq!(*status, 503);
                assert_eq!(message, "maintenance");
            }
            other => panic!("expected Http error, got {:?}", other),
        }
        assert_eq!(error.fallback_reason(), FallbackReason::Http(503));
        assert_eq!(error.retry_after_secs(), None);
    }

    #[tokio::test]
    async fn test_non_json_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/global"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let error = get_from(&server, "/global").await.unwrap_err();
        assert!(matches!(error, FetchError::Decode(_)));
        assert_eq!(error.fallback_reason(), FallbackReason::Parse);
    }

    #[tokio::test]
    async fn test_get_returns_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/global"))
            .and(header("Accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
            .expect(1)
            .mount(&server)
            .await;

        let body = get_from(&server, "/global").await.unwrap();
        assert_eq!(body, json!({"data": {}}));
    }

    #[tokio::test]
    async fn test_json_rpc_posts_method_and_params() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_json(json!({"method": "fee", "params": [{}]})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"result": {"status": "success"}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let body = HttpTransport::new()
            .send(&PanelRequest::json_rpc(server.uri(), "fee"))
            .await
            .unwrap();
        assert_eq!(body["result"]["status"], "success");
    }

    #[tokio::test]
    async fn test_offline_transport_never_succeeds() {
        let transport = OfflineTransport;
        let result = transport
            .send(&PanelRequest::get("https://api.coingecko.com/api/v3/global"))
            .await;
        assert!(matches!(result, Err(FetchError::Offline)));

        let result = transport.send(&PanelRequest::Unavailable).await;
        assert!(matches!(result, Err(FetchError::NoIntegration)));
    }

    #[tokio::test]
    async fn test_unavailable_request_skips_network() {
        let transport = HttpTransport::new();
        let result = transport.send(&PanelRequest::Unavailable).await;
        assert!(matches!(result, Err(FetchError::NoIntegration)));
    }

    #[tokio::test]
    /// Connection refused on a closed local port should surface as a reqwest error.
    async fn test_unreachable_host_is_network_error() {
        let transport = HttpTransport::new();
        let result = transport
            .send(&PanelRequest::get("http://127.0.0.1:9/unreachable"))
            .await;
        assert!(matches!(result, Err(FetchError::Reqwest(_))));
    }
}
