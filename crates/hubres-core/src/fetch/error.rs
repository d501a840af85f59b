//! Fetch error type, one variant per failure point of a catalog lookup.

use thiserror::Error;

/// A single catalog fetch failed. Never retried here; the host decides.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl could not complete the request (DNS, connect, TLS, invalid URL).
    #[error("error requesting resource from hub")]
    Network(#[source] curl::Error),
    /// Response headers arrived but the body was truncated or unreadable.
    #[error("error reading response body")]
    BodyRead(#[source] curl::Error),
    /// Body is not the `{"data":{"yaml":...}}` envelope.
    #[error("error unmarshalling json response")]
    Decode(#[source] serde_json::Error),
    /// Catalog answered with a non-2xx status.
    #[error("hub returned HTTP {code} for {url}")]
    HttpStatus { code: u32, url: String },
    #[error("resolution cancelled by caller")]
    Cancelled,
    #[error("resolution deadline exceeded")]
    DeadlineExceeded,
}
