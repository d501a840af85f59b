//! The Hub resolver: validates `kind`/`name`/`version` and fetches the
//! manifest from the catalog.

use std::collections::{BTreeMap, HashMap};

use crate::config::{ConfigError, HubConfig};
use crate::context::RequestContext;
use crate::fetch::CatalogFetcher;
use crate::params;
use crate::resolver::{ResolveError, Resolver, LABEL_KEY_RESOLVER_TYPE};
use crate::resource::ResolvedResource;
use crate::url_pattern::UrlPattern;

pub const RESOLVER_NAME: &str = "Hub";
pub const RESOLVER_TYPE: &str = "hub";

/// Stateless apart from the URL pattern it was built with.
#[derive(Debug, Clone)]
pub struct HubResolver {
    fetcher: CatalogFetcher,
}

impl HubResolver {
    pub fn new(pattern: UrlPattern) -> Self {
        Self {
            fetcher: CatalogFetcher::new(pattern),
        }
    }

    /// Builds the resolver from config and logs the effective pattern once.
    pub fn from_config(cfg: &HubConfig) -> Result<Self, ConfigError> {
        let pattern = cfg.url_pattern()?;
        tracing::info!("running with hub URL pattern: {}", pattern);
        Ok(Self::new(pattern))
    }

    pub fn pattern(&self) -> &UrlPattern {
        self.fetcher.pattern()
    }
}

impl Resolver for HubResolver {
    fn initialize(&self) -> anyhow::Result<()> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        RESOLVER_NAME
    }

    fn selector(&self) -> BTreeMap<String, String> {
        BTreeMap::from([(
            LABEL_KEY_RESOLVER_TYPE.to_string(),
            RESOLVER_TYPE.to_string(),
        )])
    }

    fn validate_params(&self, params: &HashMap<String, String>) -> Result<(), ResolveError> {
        params::validate(params)?;
        Ok(())
    }

    fn resolve(
        &self,
        ctx: &RequestContext,
        params: &HashMap<String, String>,
    ) -> Result<ResolvedResource, ResolveError> {
        let params = params::validate(params)?;
        Ok(self.fetcher.fetch(ctx, &params)?)
    }
}
