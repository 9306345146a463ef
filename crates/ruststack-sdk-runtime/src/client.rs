//! The send pipeline shared by all service clients.
//!
//! [`ServiceClient`] owns the configuration, the resolved endpoint and the
//! transport. Endpoint resolution happens once, at construction, so an
//! unsupported region fails before any request is built.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use chrono::Utc;
use http::HeaderValue;
use http::header::USER_AGENT;
use ruststack_sdk_auth::{SigningParams, SigningSettings, presign_url, sign_request};
use ruststack_sdk_core::{ClientConfig, Endpoint, SdkError, ServiceId, resolve_endpoint};
use tracing::debug;

use crate::transport::{HttpTransport, ReqwestTransport};

const SDK_USER_AGENT: &str = concat!("ruststack-sdk/", env!("CARGO_PKG_VERSION"));

/// Signs and sends requests for one service.
///
/// Cloning is cheap; clones share the transport's connection pool.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    service: ServiceId,
    config: ClientConfig,
    endpoint: Endpoint,
    signing: SigningSettings,
    transport: Arc<dyn HttpTransport>,
}

impl ServiceClient {
    /// Create a client using the default `reqwest` transport.
    pub fn new(
        service: ServiceId,
        config: ClientConfig,
        signing: SigningSettings,
    ) -> Result<Self, SdkError> {
        let transport = ReqwestTransport::new(config.request_timeout())?;
        Self::with_transport(service, config, signing, Arc::new(transport))
    }

    /// Create a client on top of an explicit transport.
    pub fn with_transport(
        service: ServiceId,
        config: ClientConfig,
        signing: SigningSettings,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, SdkError> {
        let endpoint = resolve_endpoint(service, &config)?;
        debug!(
            service = %service,
            endpoint = %endpoint.base_url(),
            signing_region = %endpoint.signing_region,
            "resolved endpoint"
        );
        Ok(Self {
            inner: Arc::new(Inner {
                service,
                config,
                endpoint,
                signing,
                transport,
            }),
        })
    }

    /// Service this client talks to.
    #[must_use]
    pub fn service(&self) -> ServiceId {
        self.inner.service
    }

    /// Client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Resolved endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &Endpoint {
        &self.inner.endpoint
    }

    /// Sign (when credentials are configured) and send `request`.
    ///
    /// Any HTTP status is returned as a response; interpreting error statuses
    /// is up to the service codec.
    pub async fn send(
        &self,
        operation: &'static str,
        mut request: http::Request<Bytes>,
    ) -> Result<http::Response<Bytes>, SdkError> {
        request
            .headers_mut()
            .insert(USER_AGENT, HeaderValue::from_static(SDK_USER_AGENT));

        if let Some(credentials) = &self.inner.config.credentials {
            let params = SigningParams {
                credentials,
                region: &self.inner.endpoint.signing_region,
                service: self.inner.endpoint.signing_name,
                time: Utc::now(),
                settings: self.inner.signing,
            };
            sign_request(&mut request, &params)?;
        }

        debug!(
            service = %self.inner.service,
            operation,
            method = %request.method(),
            uri = %request.uri(),
            body_len = request.body().len(),
            "sending request"
        );

        let response = self.inner.transport.send(request).await?;

        debug!(
            service = %self.inner.service,
            operation,
            status = response.status().as_u16(),
            body_len = response.body().len(),
            "received response"
        );
        Ok(response)
    }

    /// Presign `uri` for `method`.
    ///
    /// Requires credentials; anonymous clients cannot presign.
    pub fn presign(
        &self,
        method: &http::Method,
        uri: &http::Uri,
        expires_in: Duration,
    ) -> Result<String, SdkError> {
        let credentials = self.inner.config.credentials.as_ref().ok_or_else(|| {
            SdkError::Signing("presigning requires credentials".to_owned())
        })?;
        let params = SigningParams {
            credentials,
            region: &self.inner.endpoint.signing_region,
            service: self.inner.endpoint.signing_name,
            time: Utc::now(),
            settings: self.inner.signing,
        };
        Ok(presign_url(method, uri, &params, expires_in)?)
    }
}

#[cfg(test)]
mod tests {
    use ruststack_sdk_core::Credentials;

    use super::*;
    use crate::replay::StaticReplayTransport;

    fn config(credentials: Option<Credentials>) -> ClientConfig {
        let mut config = ClientConfig::builder().region("us-west-2").build();
        config.credentials = credentials;
        config
    }

    #[test]
    fn test_should_fail_construction_for_unsupported_region() {
        let config = ClientConfig::builder().region("xx-nowhere-1").build();
        let err = ServiceClient::with_transport(
            ServiceId::S3,
            config,
            SigningSettings::s3(),
            Arc::new(StaticReplayTransport::new()),
        )
        .unwrap_err();
        assert!(matches!(err, SdkError::UnsupportedRegion { .. }));
    }

    #[tokio::test]
    async fn test_should_sign_requests_when_credentials_are_configured() {
        let transport = Arc::new(StaticReplayTransport::new());
        transport.push_response(200, &[], "");
        let client = ServiceClient::with_transport(
            ServiceId::S3,
            config(Some(Credentials::new("AKID", "secret"))),
            SigningSettings::s3(),
            transport.clone(),
        )
        .unwrap();

        let request = http::Request::builder()
            .uri("https://s3.us-west-2.amazonaws.com/bucket")
            .body(Bytes::new())
            .unwrap();
        client.send("HeadBucket", request).await.unwrap();

        let recorded = transport.last_request().unwrap();
        let authorization = recorded.header("authorization").unwrap();
        assert!(authorization.starts_with("AWS4-HMAC-SHA256 Credential=AKID/"));
        assert!(authorization.contains("/us-west-2/s3/aws4_request"));
        assert_eq!(recorded.header("user-agent"), Some(SDK_USER_AGENT));
    }

    #[tokio::test]
    async fn test_should_send_anonymous_requests_without_credentials() {
        let transport = Arc::new(StaticReplayTransport::new());
        transport.push_response(404, &[], "");
        let client = ServiceClient::with_transport(
            ServiceId::S3,
            config(None),
            SigningSettings::s3(),
            transport.clone(),
        )
        .unwrap();

        let request = http::Request::builder()
            .uri("https://s3.us-west-2.amazonaws.com/bucket")
            .body(Bytes::new())
            .unwrap();
        let response = client.send("HeadBucket", request).await.unwrap();

        assert_eq!(response.status(), 404);
        assert!(transport.last_request().unwrap().header("authorization").is_none());
    }

    #[test]
    fn test_should_refuse_to_presign_without_credentials() {
        let client = ServiceClient::with_transport(
            ServiceId::S3,
            config(None),
            SigningSettings::s3(),
            Arc::new(StaticReplayTransport::new()),
        )
        .unwrap();
        let uri: http::Uri = "https://s3.us-west-2.amazonaws.com/b/k".parse().unwrap();
        assert!(matches!(
            client.presign(&http::Method::GET, &uri, Duration::from_secs(60)),
            Err(SdkError::Signing(_))
        ));
    }
}
