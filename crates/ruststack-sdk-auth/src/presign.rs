//! Presigned URLs (query-string authentication).
//!
//! The signature travels in the query string together with:
//!
//! - `X-Amz-Algorithm` - always `AWS4-HMAC-SHA256`
//! - `X-Amz-Credential` - `AKID/date/region/service/aws4_request`
//! - `X-Amz-Date` - `YYYYMMDDTHHMMSSZ`
//! - `X-Amz-Expires` - validity in seconds
//! - `X-Amz-SignedHeaders` - `host`
//! - `X-Amz-Security-Token` - only for temporary credentials
//!
//! The payload hash is always `UNSIGNED-PAYLOAD`.

use std::time::Duration;

use tracing::debug;

use crate::canonical::{CanonicalRequest, uri_encode};
use crate::error::AuthError;
use crate::sigv4::{
    SIGNING_ALGORITHM, SigningParams, UNSIGNED_PAYLOAD, build_string_to_sign, compute_signature,
};

/// Longest validity AWS accepts for a SigV4 presigned URL.
pub const MAX_PRESIGN_EXPIRY: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Produce a presigned URL for `method` on `uri`.
///
/// Existing query parameters of `uri` (e.g. `versionId`) are kept and signed.
pub fn presign_url(
    method: &http::Method,
    uri: &http::Uri,
    params: &SigningParams<'_>,
    expires_in: Duration,
) -> Result<String, AuthError> {
    let expires = expires_in.as_secs();
    if expires == 0 || expires_in > MAX_PRESIGN_EXPIRY {
        return Err(AuthError::InvalidExpiry(expires));
    }
    let authority = uri.authority().ok_or(AuthError::MissingHost)?.as_str();
    let scheme = uri.scheme_str().unwrap_or("https");

    let amz_date = params.amz_date();
    let scope = params.credential_scope();
    let credential = format!("{}/{scope}", params.credentials.access_key_id);

    let mut query = uri.query().unwrap_or("").to_owned();
    let mut push = |name: &str, value: &str| {
        if !query.is_empty() {
            query.push('&');
        }
        query.push_str(name);
        query.push('=');
        query.push_str(&uri_encode(value));
    };
    push("X-Amz-Algorithm", SIGNING_ALGORITHM);
    push("X-Amz-Credential", &credential);
    push("X-Amz-Date", &amz_date);
    push("X-Amz-Expires", &expires.to_string());
    if let Some(token) = &params.credentials.session_token {
        push("X-Amz-Security-Token", token);
    }
    push("X-Amz-SignedHeaders", "host");

    let canonical = CanonicalRequest::new(
        method.as_str(),
        uri.path(),
        &query,
        &[("host", authority)],
        &["host"],
        UNSIGNED_PAYLOAD,
    );
    debug!(canonical_request = %canonical, "built presign canonical request");

    let string_to_sign = build_string_to_sign(&amz_date, &scope, &canonical.hash());
    let signature = compute_signature(&params.signing_key(), &string_to_sign);

    Ok(format!(
        "{scheme}://{authority}{}?{query}&X-Amz-Signature={signature}",
        uri.path()
    ))
}
