//! Client configuration.
//!
//! Provides [`ClientConfig`], shared by every service client. Values can be
//! set with the typed builder or loaded from the standard AWS environment
//! variables via [`ClientConfig::from_env`].

use std::time::Duration;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::credentials::Credentials;
use crate::types::AwsRegion;

/// Configuration for a service client.
///
/// # Examples
///
/// ```
/// use ruststack_sdk_core::{ClientConfig, Credentials};
///
/// let config = ClientConfig::builder()
///     .region("eu-west-1")
///     .endpoint_url("http://localhost:4566")
///     .credentials(Credentials::new("test", "test"))
///     .force_path_style(true)
///     .build();
/// assert_eq!(config.region.as_str(), "eu-west-1");
/// assert!(config.force_path_style);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Region used for endpoint resolution and signing.
    #[builder(default, setter(into))]
    pub region: AwsRegion,

    /// Custom endpoint (e.g. `http://localhost:4566`). Bypasses the region table.
    #[builder(default, setter(strip_option, into))]
    pub endpoint_url: Option<String>,

    /// Credentials. Requests are sent unsigned when absent.
    #[serde(skip)]
    #[builder(default, setter(strip_option))]
    pub credentials: Option<Credentials>,

    /// Always use path-style S3 addressing (`host/bucket/key`).
    #[builder(default = false)]
    pub force_path_style: bool,

    /// Transport timeout for a single request, in seconds.
    #[builder(default = 30)]
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: AwsRegion::default(),
            endpoint_url: None,
            credentials: None,
            force_path_style: false,
            request_timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `AWS_REGION` / `AWS_DEFAULT_REGION` | `us-east-1` |
    /// | `AWS_ENDPOINT_URL` | unset |
    /// | `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY` / `AWS_SESSION_TOKEN` | unset |
    /// | `AWS_S3_FORCE_PATH_STYLE` | `false` |
    /// | `AWS_REQUEST_TIMEOUT_SECS` | `30` |
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(v) = env_non_empty("AWS_REGION").or_else(|| env_non_empty("AWS_DEFAULT_REGION"))
        {
            config.region = AwsRegion::new(v);
        }
        if let Some(v) = env_non_empty("AWS_ENDPOINT_URL") {
            config.endpoint_url = Some(v);
        }
        config.credentials = Credentials::from_env();
        if let Some(v) = env_non_empty("AWS_S3_FORCE_PATH_STYLE") {
            config.force_path_style = parse_bool(&v);
        }
        if let Some(v) = env_non_empty("AWS_REQUEST_TIMEOUT_SECS") {
            match v.parse() {
                Ok(secs) => config.request_timeout_secs = secs,
                Err(_) => tracing::warn!(value = %v, "ignoring invalid AWS_REQUEST_TIMEOUT_SECS"),
            }
        }

        config
    }

    /// Transport timeout as a [`Duration`].
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Parse a boolean from an environment variable value.
///
/// Accepts `"1"` and `"true"` (case-insensitive) as `true`; everything else is `false`.
fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}
