//! Resolver interface consumed by the host.
//!
//! The host only holds `Arc<dyn Resolver>` and routes requests by selector
//! labels; it does not know about the Hub or any other concrete resolver.

use std::collections::{BTreeMap, HashMap};

use thiserror::Error;

use crate::context::RequestContext;
use crate::fetch::FetchError;
use crate::params::ValidationError;
use crate::resource::ResolvedResource;

/// Label key the host uses to pick a resolver for a request.
pub const LABEL_KEY_RESOLVER_TYPE: &str = "resolution.tekton.dev/type";

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Capabilities a resolver plug-in exposes to the host.
pub trait Resolver: Send + Sync {
    /// Called once at registration.
    fn initialize(&self) -> anyhow::Result<()>;

    /// Name for logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Labels a request must carry to be routed here.
    fn selector(&self) -> BTreeMap<String, String>;

    fn validate_params(&self, params: &HashMap<String, String>) -> Result<(), ResolveError>;

    fn resolve(
        &self,
        ctx: &RequestContext,
        params: &HashMap<String, String>,
    ) -> Result<ResolvedResource, ResolveError>;

    /// True if every selector label is present in `labels` with the same value.
    fn matches(&self, labels: &BTreeMap<String, String>) -> bool {
        self.selector()
            .iter()
            .all(|(k, v)| labels.get(k) == Some(v))
    }
}
