//! Hub catalog resolver.
//!
//! Validates `kind`/`name`/`version` resolution parameters and fetches the
//! matching Task or Pipeline manifest from a Tekton Hub compatible catalog.

pub mod config;
pub mod context;
pub mod fetch;
pub mod hub;
pub mod logging;
pub mod params;
pub mod resolver;
pub mod resource;
pub mod url_pattern;

pub use context::RequestContext;
pub use hub::HubResolver;
pub use resolver::{ResolveError, Resolver};
pub use resource::ResolvedResource;
