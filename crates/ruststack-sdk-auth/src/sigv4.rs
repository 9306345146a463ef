//! AWS Signature Version 4 header signing.
//!
//! 1. Stamp the request with `x-amz-date` (and `x-amz-content-sha256`,
//!    `x-amz-security-token` where applicable).
//! 2. Build the canonical request from the request parts.
//! 3. Build the string to sign from the timestamp, credential scope, and canonical request hash.
//! 4. Derive the signing key with the HMAC-SHA256 chain.
//! 5. Add the `Authorization` header.
//!
//! The main entry point is [`sign_request`].

use bytes::Bytes;
use chrono::{DateTime, Utc};
use hmac::{Hmac, KeyInit, Mac};
use http::HeaderValue;
use http::header::{AUTHORIZATION, HOST};
use ruststack_sdk_core::Credentials;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::canonical::{CanonicalRequest, signable_header_names};
use crate::error::AuthError;

/// The only algorithm AWS accepts for SigV4.
pub const SIGNING_ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Payload hash marker for requests whose body is not hashed.
pub const UNSIGNED_PAYLOAD: &str = "UNSIGNED-PAYLOAD";

type HmacSha256 = Hmac<Sha256>;

/// Service-specific signing behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SigningSettings {
    /// Add the `x-amz-content-sha256` header (required by S3).
    pub content_sha256_header: bool,
    /// Sign with `UNSIGNED-PAYLOAD` instead of hashing the body.
    pub unsigned_payload: bool,
}

impl SigningSettings {
    /// Settings used by S3.
    #[must_use]
    pub fn s3() -> Self {
        Self {
            content_sha256_header: true,
            unsigned_payload: false,
        }
    }
}

/// Inputs to a signature.
#[derive(Debug, Clone, Copy)]
pub struct SigningParams<'a> {
    /// Credentials to sign with.
    pub credentials: &'a Credentials,
    /// Region of the credential scope.
    pub region: &'a str,
    /// Service name of the credential scope.
    pub service: &'a str,
    /// Signing time.
    pub time: DateTime<Utc>,
    /// Service-specific behaviour.
    pub settings: SigningSettings,
}

impl SigningParams<'_> {
    /// `YYYYMMDDTHHMMSSZ`.
    #[must_use]
    pub fn amz_date(&self) -> String {
        self.time.format("%Y%m%dT%H%M%SZ").to_string()
    }

    /// `YYYYMMDD/region/service/aws4_request`.
    #[must_use]
    pub fn credential_scope(&self) -> String {
        format!(
            "{}/{}/{}/aws4_request",
            self.time.format("%Y%m%d"),
            self.region,
            self.service
        )
    }

    pub(crate) fn signing_key(&self) -> Vec<u8> {
        derive_signing_key(
            &self.credentials.secret_access_key,
            &self.time.format("%Y%m%d").to_string(),
            self.region,
            self.service,
        )
    }
}

/// Result of signing a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningOutput {
    /// Hex-encoded signature.
    pub signature: String,
    /// `;`-separated signed header names.
    pub signed_headers: String,
}

/// Sign `request` in place.
///
/// A `host` header is added from the URI authority when missing so the
/// signed host matches what the transport sends.
pub fn sign_request(
    request: &mut http::Request<Bytes>,
    params: &SigningParams<'_>,
) -> Result<SigningOutput, AuthError> {
    if !request.headers().contains_key(HOST) {
        let authority = request
            .uri()
            .authority()
            .ok_or(AuthError::MissingHost)?
            .as_str()
            .to_owned();
        request.headers_mut().insert(HOST, header_value(&authority, "host")?);
    }

    let payload_hash = if params.settings.unsigned_payload {
        UNSIGNED_PAYLOAD.to_owned()
    } else {
        hash_payload(request.body())
    };
    let amz_date = params.amz_date();

    let headers = request.headers_mut();
    headers.remove(AUTHORIZATION);
    headers.insert("x-amz-date", header_value(&amz_date, "x-amz-date")?);
    if params.settings.content_sha256_header {
        headers.insert(
            "x-amz-content-sha256",
            header_value(&payload_hash, "x-amz-content-sha256")?,
        );
    }
    if let Some(token) = &params.credentials.session_token {
        headers.insert(
            "x-amz-security-token",
            header_value(token, "x-amz-security-token")?,
        );
    }

    let mut header_pairs: Vec<(&str, &str)> = Vec::with_capacity(request.headers().len());
    for (name, value) in request.headers() {
        let value = value
            .to_str()
            .map_err(|_| AuthError::InvalidHeaderValue(name.as_str().to_owned()))?;
        header_pairs.push((name.as_str(), value));
    }
    let signed_names = signable_header_names(&header_pairs);
    let signed_refs: Vec<&str> = signed_names.iter().map(String::as_str).collect();

    let canonical = CanonicalRequest::new(
        request.method().as_str(),
        request.uri().path(),
        request.uri().query().unwrap_or(""),
        &header_pairs,
        &signed_refs,
        &payload_hash,
    );
    debug!(canonical_request = %canonical, "built canonical request");

    let scope = params.credential_scope();
    let string_to_sign = build_string_to_sign(&amz_date, &scope, &canonical.hash());
    debug!(string_to_sign = %string_to_sign, "built string to sign");

    let signature = compute_signature(&params.signing_key(), &string_to_sign);
    let signed_headers = canonical.signed_headers().to_owned();
    let authorization = format!(
        "{SIGNING_ALGORITHM} Credential={}/{scope}, SignedHeaders={signed_headers}, Signature={signature}",
        params.credentials.access_key_id
    );
    request
        .headers_mut()
        .insert(AUTHORIZATION, header_value(&authorization, "authorization")?);

    Ok(SigningOutput {
        signature,
        signed_headers,
    })
}

/// Build the string to sign.
///
/// ```text
/// AWS4-HMAC-SHA256\n
/// <timestamp>\n
/// <credential_scope>\n
/// <hex(SHA256(canonical_request))>
/// ```
#[must_use]
pub fn build_string_to_sign(
    timestamp: &str,
    credential_scope: &str,
    canonical_request_hash: &str,
) -> String {
    format!("{SIGNING_ALGORITHM}\n{timestamp}\n{credential_scope}\n{canonical_request_hash}")
}

/// Derive the SigV4 signing key using HMAC-SHA256 chain.
///
/// ```text
/// DateKey              = HMAC-SHA256("AWS4" + secret_key, date)
/// DateRegionKey        = HMAC-SHA256(DateKey, region)
/// DateRegionServiceKey = HMAC-SHA256(DateRegionKey, service)
/// SigningKey           = HMAC-SHA256(DateRegionServiceKey, "aws4_request")
/// ```
#[must_use]
pub fn derive_signing_key(secret_key: &str, date: &str, region: &str, service: &str) -> Vec<u8> {
    let date_key = hmac_sha256(format!("AWS4{secret_key}").as_bytes(), date.as_bytes());
    let date_region_key = hmac_sha256(&date_key, region.as_bytes());
    let date_region_service_key = hmac_sha256(&date_region_key, service.as_bytes());
    hmac_sha256(&date_region_service_key, b"aws4_request")
}

/// Hex-encoded HMAC-SHA256 of `data`.
#[must_use]
pub fn compute_signature(signing_key: &[u8], data: &str) -> String {
    hex::encode(hmac_sha256(signing_key, data.as_bytes()))
}

/// Hex SHA-256 of a payload, the `x-amz-content-sha256` value.
///
/// # Examples
///
/// ```
/// use ruststack_sdk_auth::hash_payload;
///
/// assert_eq!(
///     hash_payload(b""),
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
/// );
/// ```
#[must_use]
pub fn hash_payload(payload: &[u8]) -> String {
    hex::encode(Sha256::digest(payload))
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can accept keys of any length");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

fn header_value(value: &str, name: &'static str) -> Result<HeaderValue, AuthError> {
    HeaderValue::from_str(value).map_err(|_| AuthError::HeaderEncoding(name))
}
