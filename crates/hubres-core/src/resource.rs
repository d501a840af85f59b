//! Resolved manifest handed back to the host.

use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Where resolved content came from: the lookup URI and content digests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefSource {
    pub uri: String,
    /// Algorithm name -> lowercase hex digest. Always carries `sha256`.
    pub digest: BTreeMap<String, String>,
}

/// Raw manifest bytes plus annotations (none for the Hub resolver).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedResource {
    data: Vec<u8>,
    annotations: BTreeMap<String, String>,
    source: RefSource,
}

impl ResolvedResource {
    pub fn new(data: Vec<u8>, uri: impl Into<String>) -> Self {
        let mut digest = BTreeMap::new();
        digest.insert("sha256".to_string(), sha256_hex(&data));
        Self {
            data,
            annotations: BTreeMap::new(),
            source: RefSource {
                uri: uri.into(),
                digest,
            },
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn annotations(&self) -> &BTreeMap<String, String> {
        &self.annotations
    }

    pub fn source(&self) -> &RefSource {
        &self.source
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

/// SHA-256 of `data` as lowercase hex.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}
