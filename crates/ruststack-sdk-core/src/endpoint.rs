//! Static endpoint table.
//!
//! Each service lists the regions it is offered in. Resolution is a pure
//! table lookup: a region that is not listed fails immediately with
//! [`SdkError::UnsupportedRegion`]. A custom `endpoint_url` in the
//! configuration replaces the table entirely.

use std::fmt;

use crate::config::ClientConfig;
use crate::error::SdkError;

/// Services known to the endpoint table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceId {
    /// Amazon Simple Storage Service.
    S3,
    /// Amazon Rekognition.
    Rekognition,
}

impl ServiceId {
    /// Endpoint prefix and SigV4 signing name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S3 => "s3",
            Self::Rekognition => "rekognition",
        }
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// `http` or `https`.
    pub scheme: String,
    /// Host with optional port.
    pub authority: String,
    /// Region used in the SigV4 credential scope.
    pub signing_region: String,
    /// Service name used in the SigV4 credential scope.
    pub signing_name: &'static str,
    /// Whether the endpoint came from configuration rather than the table.
    pub is_custom: bool,
}

impl Endpoint {
    /// `scheme://authority` without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.scheme, self.authority)
    }
}

const S3_REGIONS: &[&str] = &[
    "af-south-1",
    "ap-east-1",
    "ap-northeast-1",
    "ap-northeast-2",
    "ap-northeast-3",
    "ap-south-1",
    "ap-south-2",
    "ap-southeast-1",
    "ap-southeast-2",
    "ap-southeast-3",
    "ap-southeast-4",
    "ca-central-1",
    "ca-west-1",
    "cn-north-1",
    "cn-northwest-1",
    "eu-central-1",
    "eu-central-2",
    "eu-north-1",
    "eu-south-1",
    "eu-south-2",
    "eu-west-1",
    "eu-west-2",
    "eu-west-3",
    "il-central-1",
    "me-central-1",
    "me-south-1",
    "sa-east-1",
    "us-east-1",
    "us-east-2",
    "us-gov-east-1",
    "us-gov-west-1",
    "us-west-1",
    "us-west-2",
];

const REKOGNITION_REGIONS: &[&str] = &[
    "ap-northeast-1",
    "ap-northeast-2",
    "ap-south-1",
    "ap-southeast-1",
    "ap-southeast-2",
    "ca-central-1",
    "eu-central-1",
    "eu-west-1",
    "eu-west-2",
    "us-east-1",
    "us-east-2",
    "us-gov-west-1",
    "us-west-1",
    "us-west-2",
];

/// Pseudo regions: (region, host, signing region).
const S3_SPECIAL: &[(&str, &str, &str)] = &[
    ("aws-global", "s3.amazonaws.com", "us-east-1"),
    ("s3-external-1", "s3-external-1.amazonaws.com", "us-east-1"),
];

const REKOGNITION_SPECIAL: &[(&str, &str, &str)] = &[
    (
        "rekognition-fips.ca-central-1",
        "rekognition-fips.ca-central-1.amazonaws.com",
        "ca-central-1",
    ),
    (
        "rekognition-fips.us-east-1",
        "rekognition-fips.us-east-1.amazonaws.com",
        "us-east-1",
    ),
    (
        "rekognition-fips.us-east-2",
        "rekognition-fips.us-east-2.amazonaws.com",
        "us-east-2",
    ),
    (
        "rekognition-fips.us-west-1",
        "rekognition-fips.us-west-1.amazonaws.com",
        "us-west-1",
    ),
    (
        "rekognition-fips.us-west-2",
        "rekognition-fips.us-west-2.amazonaws.com",
        "us-west-2",
    ),
];

fn table(service: ServiceId) -> (&'static [&'static str], &'static [(&'static str, &'static str, &'static str)]) {
    match service {
        ServiceId::S3 => (S3_REGIONS, S3_SPECIAL),
        ServiceId::Rekognition => (REKOGNITION_REGIONS, REKOGNITION_SPECIAL),
    }
}

fn regional_host(service: ServiceId, region: &str) -> String {
    let suffix = if region.starts_with("cn-") {
        "amazonaws.com.cn"
    } else {
        "amazonaws.com"
    };
    match (service, region) {
        (ServiceId::S3, "us-east-1") => "s3.amazonaws.com".to_owned(),
        _ => format!("{}.{region}.{suffix}", service.as_str()),
    }
}

/// Whether the static table lists `region` for `service`.
#[must_use]
pub fn is_region_supported(service: ServiceId, region: &str) -> bool {
    let (regions, special) = table(service);
    regions.contains(&region) || special.iter().any(|(r, _, _)| *r == region)
}

/// Resolve the endpoint for `service` using the configured region or custom URL.
///
/// # Examples
///
/// ```
/// use ruststack_sdk_core::{ClientConfig, ServiceId, resolve_endpoint};
///
/// let config = ClientConfig::builder().region("eu-west-1").build();
/// let endpoint = resolve_endpoint(ServiceId::S3, &config).unwrap();
/// assert_eq!(endpoint.authority, "s3.eu-west-1.amazonaws.com");
/// ```
pub fn resolve_endpoint(service: ServiceId, config: &ClientConfig) -> Result<Endpoint, SdkError> {
    let region = config.region.as_str();

    if let Some(url) = &config.endpoint_url {
        let (scheme, authority) = parse_custom_endpoint(url)?;
        return Ok(Endpoint {
            scheme,
            authority,
            signing_region: region.to_owned(),
            signing_name: service.as_str(),
            is_custom: true,
        });
    }

    let (regions, special) = table(service);
    if let Some((_, host, signing_region)) = special.iter().find(|(r, _, _)| *r == region) {
        return Ok(Endpoint {
            scheme: "https".to_owned(),
            authority: (*host).to_owned(),
            signing_region: (*signing_region).to_owned(),
            signing_name: service.as_str(),
            is_custom: false,
        });
    }
    if !regions.contains(&region) {
        return Err(SdkError::UnsupportedRegion {
            service: service.as_str(),
            region: region.to_owned(),
        });
    }

    Ok(Endpoint {
        scheme: "https".to_owned(),
        authority: regional_host(service, region),
        signing_region: region.to_owned(),
        signing_name: service.as_str(),
        is_custom: false,
    })
}

fn parse_custom_endpoint(url: &str) -> Result<(String, String), SdkError> {
    let uri: http::Uri = url
        .trim_end_matches('/')
        .parse()
        .map_err(|e| SdkError::InvalidEndpoint(format!("{url}: {e}")))?;
    let scheme = uri
        .scheme_str()
        .filter(|s| *s == "http" || *s == "https")
        .ok_or_else(|| SdkError::InvalidEndpoint(format!("{url}: scheme must be http or https")))?;
    let authority = uri
        .authority()
        .ok_or_else(|| SdkError::InvalidEndpoint(format!("{url}: missing host")))?;
    Ok((scheme.to_owned(), authority.as_str().to_owned()))
}
