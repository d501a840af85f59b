//! Resolution request parameters and their validation.
//!
//! Runs before any network activity. The catalog only serves Tasks and
//! Pipelines, so `kind` is checked against that set; `name` and `version` are
//! opaque and only need to be present.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub const PARAM_KIND: &str = "kind";
pub const PARAM_NAME: &str = "name";
pub const PARAM_VERSION: &str = "version";

/// Catalog resource categories this resolver can fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Task,
    Pipeline,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Task => "task",
            ResourceKind::Pipeline => "pipeline",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "task" => Ok(ResourceKind::Task),
            "pipeline" => Ok(ResourceKind::Pipeline),
            other => Err(ValidationError::InvalidParameterValue {
                param: PARAM_KIND,
                value: other.to_string(),
            }),
        }
    }
}

/// A request's parameters were missing or malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("must include {0} param")]
    MissingParameter(&'static str),
    #[error("invalid value {value:?} for {param} param: must be task or pipeline")]
    InvalidParameterValue { param: &'static str, value: String },
}

/// Parameters that passed validation; the fetcher only accepts this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubParams {
    pub kind: ResourceKind,
    pub name: String,
    pub version: String,
}

/// Checks `kind`, `name` and `version` in that order; the first problem wins.
/// Unknown keys are ignored.
pub fn validate(params: &HashMap<String, String>) -> Result<HubParams, ValidationError> {
    let kind = params
        .get(PARAM_KIND)
        .ok_or(ValidationError::MissingParameter(PARAM_KIND))?
        .parse::<ResourceKind>()?;
    let name = params
        .get(PARAM_NAME)
        .ok_or(ValidationError::MissingParameter(PARAM_NAME))?;
    let version = params
        .get(PARAM_VERSION)
        .ok_or(ValidationError::MissingParameter(PARAM_VERSION))?;

    Ok(HubParams {
        kind,
        name: name.clone(),
        version: version.clone(),
    })
}
