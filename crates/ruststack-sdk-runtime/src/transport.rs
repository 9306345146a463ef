//! HTTP transport seam.
//!
//! Service clients never talk to the network directly: they hand a fully
//! signed `http::Request<Bytes>` to an [`HttpTransport`]. The default
//! implementation uses `reqwest`; tests substitute a scripted transport.

use std::fmt;
use std::time::Duration;

use bytes::Bytes;
use ruststack_sdk_core::TransportError;

/// Sends one HTTP request and buffers the whole response.
///
/// The trait is object-safe (via `async_trait`) so clients can hold an
/// `Arc<dyn HttpTransport>`.
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync + fmt::Debug {
    /// Send `request` and return the response with its body fully read.
    async fn send(
        &self,
        request: http::Request<Bytes>,
    ) -> Result<http::Response<Bytes>, TransportError>;
}

/// [`HttpTransport`] backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(map_reqwest_error)?;
        Ok(Self { client })
    }

    /// Wrap an existing `reqwest::Client`.
    #[must_use]
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(
        &self,
        request: http::Request<Bytes>,
    ) -> Result<http::Response<Bytes>, TransportError> {
        let (parts, body) = request.into_parts();
        let url = request_url(&parts.uri)?;
        let response = self
            .client
            .request(parts.method, url)
            .headers(parts.headers)
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(map_reqwest_error)?;

        let mut http_response = http::Response::new(body);
        *http_response.status_mut() = status;
        *http_response.headers_mut() = headers;
        Ok(http_response)
    }
}

/// Convert to a `reqwest::Url`, refusing URIs whose path the URL parser
/// would rewrite. WHATWG parsing resolves `.`/`..` segments, including their
/// `%2E` forms, so such a request would reach a different resource than the
/// one it was signed for.
fn request_url(uri: &http::Uri) -> Result<reqwest::Url, TransportError> {
    let url = reqwest::Url::parse(&uri.to_string())
        .map_err(|e| TransportError::Other(format!("invalid request url {uri}: {e}")))?;
    if url.path() != uri.path() {
        return Err(TransportError::Other(format!(
            "request path {} cannot be sent unchanged (would become {})",
            uri.path(),
            url.path()
        )));
    }
    Ok(url)
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout(err.to_string())
    } else if err.is_connect() {
        TransportError::Connect(err.to_string())
    } else {
        TransportError::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_keep_encoded_request_path() {
        let uri: http::Uri = "https://b.s3.us-west-2.amazonaws.com/a%20b/c%2Bd.txt?versionId=1"
            .parse()
            .unwrap();
        let url = request_url(&uri).unwrap();
        assert_eq!(url.path(), "/a%20b/c%2Bd.txt");
        assert_eq!(url.query(), Some("versionId=1"));
    }

    #[test]
    fn test_should_refuse_path_rewritten_by_dot_segments() {
        for path in ["/bucket/photos/%2E%2E/secret.txt", "/bucket/%2E/k", "/bucket/a/../k"] {
            let uri: http::Uri = format!("http://localhost:4566{path}").parse().unwrap();
            let err = request_url(&uri).unwrap_err();
            assert!(matches!(err, TransportError::Other(_)), "{path}");
        }
    }

    #[tokio::test]
    async fn test_should_not_send_request_with_rewritten_path() {
        let transport = ReqwestTransport::new(Duration::from_secs(1)).unwrap();
        let request = http::Request::builder()
            .method(http::Method::PUT)
            .uri("http://127.0.0.1:9/bucket/photos/%2E%2E/secret.txt")
            .body(Bytes::from_static(b"x"))
            .unwrap();

        let err = transport.send(request).await.unwrap_err();
        assert!(err.to_string().contains("cannot be sent unchanged"));
    }
}
