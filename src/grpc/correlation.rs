//! Correlation identifiers for request tracing.
//!
//! A caller-supplied `x-correlation-id` is reused; otherwise a UUID v4 is
//! generated. The identifier is attached to the call's tracing span and
//! echoed in the response metadata.

use tonic::metadata::MetadataValue;
use tonic::{Request, Response};
use uuid::Uuid;

/// Metadata key carrying the correlation identifier.
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// Returns the request's correlation identifier, generating one if absent.
#[must_use]
pub fn correlation_id<T>(request: &Request<T>) -> String {
    request
        .metadata()
        .get(CORRELATION_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map_or_else(|| Uuid::new_v4().to_string(), str::to_owned)
}

/// Adds the correlation identifier to the response metadata.
#[must_use]
pub fn with_correlation_id<T>(mut response: Response<T>, correlation_id: &str) -> Response<T> {
    if let Ok(value) = MetadataValue::try_from(correlation_id) {
        response
            .metadata_mut()
            .insert(CORRELATION_ID_HEADER, value);
    }
    response
}
