//! Catalog fetch: one blocking GET against the Hub, decoded into a resource.
//!
//! Uses the curl crate (libcurl). No custom headers, no retries; the only
//! limits are the caller's deadline and abort token from `RequestContext`.
//! Runs in the current thread; call from `spawn_blocking` if used from async code.

mod envelope;
mod error;

pub use error::FetchError;

use std::sync::atomic::Ordering;
use std::time::Duration;

use crate::context::RequestContext;
use crate::params::HubParams;
use crate::resource::ResolvedResource;
use crate::url_pattern::UrlPattern;

/// Fetches manifests from the catalog. Holds only the immutable URL pattern.
#[derive(Debug, Clone)]
pub struct CatalogFetcher {
    pattern: UrlPattern,
}

impl CatalogFetcher {
    pub fn new(pattern: UrlPattern) -> Self {
        Self { pattern }
    }

    pub fn pattern(&self) -> &UrlPattern {
        &self.pattern
    }

    /// GETs the lookup URL for `params` and wraps `data.yaml` in a resource.
    pub fn fetch(
        &self,
        ctx: &RequestContext,
        params: &HubParams,
    ) -> Result<ResolvedResource, FetchError> {
        let url = self.pattern.lookup_url(params);
        tracing::debug!("requesting {} {} from hub: GET {}", params.kind, params.name, url);

        let response = get(ctx, &url)?;
        tracing::debug!(
            "hub responded HTTP {} ({} bytes) for {}",
            response.code,
            response.body.len(),
            url
        );
        if !(200..300).contains(&response.code) {
            return Err(FetchError::HttpStatus {
                code: response.code,
                url,
            });
        }

        let yaml = envelope::extract_yaml(&response.body).map_err(FetchError::Decode)?;
        Ok(ResolvedResource::new(yaml.into_bytes(), url))
    }
}

struct Response {
    code: u32,
    body: Vec<u8>,
}

fn get(ctx: &RequestContext, url: &str) -> Result<Response, FetchError> {
    if ctx.is_cancelled() {
        return Err(FetchError::Cancelled);
    }

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(FetchError::Network)?;
    easy.follow_location(true).map_err(FetchError::Network)?;
    if let Some(remaining) = ctx.remaining() {
        if remaining.is_zero() {
            return Err(FetchError::DeadlineExceeded);
        }
        // libcurl treats a zero timeout as "none".
        easy.timeout(remaining.max(Duration::from_millis(1)))
            .map_err(FetchError::Network)?;
    }
    let abort = ctx.abort_token();
    if abort.is_some() {
        easy.progress(true).map_err(FetchError::Network)?;
    }

    // Only the final response's body reaches the write callback: curl drops
    // followed redirect bodies and proxy CONNECT replies never have one.
    let mut body = Vec::new();

    let performed = {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(FetchError::Network)?;
        if let Some(token) = abort {
            transfer
                .progress_function(move |_, _, _, _| !token.load(Ordering::Relaxed))
                .map_err(FetchError::Network)?;
        }
        transfer.perform()
    };

    if let Err(e) = performed {
        return Err(classify(ctx, e, !body.is_empty()));
    }

    let code = easy.response_code().map_err(FetchError::Network)?;
    Ok(Response { code, body })
}

/// Maps a failed transfer to the failure point it happened at.
fn classify(ctx: &RequestContext, e: curl::Error, body_started: bool) -> FetchError {
    if e.is_aborted_by_callback() {
        return FetchError::Cancelled;
    }
    if e.is_operation_timedout() && ctx.remaining().is_some() {
        return FetchError::DeadlineExceeded;
    }
    if body_started || e.is_partial_file() {
        return FetchError::BodyRead(e);
    }
    FetchError::Network(e)
}
