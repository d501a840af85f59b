//! Catalog lookup URL pattern.
//!
//! A pattern is a base URL plus the fixed YAML endpoint template with three
//! positional slots filled in the order kind, name, version.

use std::fmt;

use crate::params::HubParams;

/// Base used when no override is configured.
pub const DEFAULT_HUB_BASE: &str = "https://api.hub.tekton.dev/";

/// Relative endpoint appended to the base. `{}` slots are kind, name, version.
pub const YAML_ENDPOINT: &str = "v1/resource/Tekton/{}/{}/{}/yaml";

const SLOT: &str = "{}";

/// Immutable lookup pattern built once at startup.
///
/// The base is kept apart from the endpoint template; only the template's
/// slots are ever substituted, so a base containing `{}` stays literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlPattern {
    base: String,
    template: String,
}

impl UrlPattern {
    /// Pattern for `base`, normalized to end with exactly one `/`.
    pub fn with_base(base: &str) -> Self {
        let base = format!("{}/", base.trim_end_matches('/'));
        let template = format!("{}{}", base, YAML_ENDPOINT);
        Self { base, template }
    }

    /// Normalized base, always ending with `/`.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The pattern against the public Hub.
    pub fn default_hub() -> Self {
        Self::with_base(DEFAULT_HUB_BASE)
    }

    /// Raw template with `{}` slots, as logged at startup.
    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Lookup address for validated params.
    pub fn lookup_url(&self, params: &HubParams) -> String {
        let mut out = self.base.clone();
        expand_into(
            &mut out,
            YAML_ENDPOINT,
            &[params.kind.as_str(), &params.name, &params.version],
        );
        out
    }
}

/// Fills `template` slots left to right. Values are inserted verbatim and
/// never re-scanned, so a `{}` inside a name stays literal.
fn expand_into(out: &mut String, template: &str, values: &[&str]) {
    let mut rest = template;
    for value in values {
        match rest.split_once(SLOT) {
            Some((head, tail)) => {
                out.push_str(head);
                out.push_str(value);
                rest = tail;
            }
            None => break,
        }
    }
    out.push_str(rest);
}

impl Default for UrlPattern {
    fn default() -> Self {
        Self::default_hub()
    }
}

impl fmt::Display for UrlPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}
