//! Bundled script registry for environments without filesystem access.
//!
//! The registry is built at compile time with `include_str!` of the same
//! files the filesystem source reads, so the two strategies cannot drift
//! apart without a rebuild. Keys are the catalog bundle keys.

use tracing::debug;

use crate::catalog::ScriptId;
use crate::error::{LoadError, Result};
use crate::source::ScriptSource;

const REGISTRY: &[(&str, &str)] = &[
    (
        "Scripts/always-succeeds.plutus",
        include_str!("../../../fixtures/scripts/always-succeeds.plutus"),
    ),
    (
        "Scripts/always-succeeds-v2.plutus",
        include_str!("../../../fixtures/scripts/always-succeeds-v2.plutus"),
    ),
    (
        "Scripts/one-shot-minting-v2.plutus",
        include_str!("../../../fixtures/scripts/one-shot-minting-v2.plutus"),
    ),
];

/// Serves script text from the compile-time registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

impl BundledSource {
    pub fn new() -> Self {
        Self
    }

    /// Raw registry lookup by bundle key.
    pub fn get(key: &str) -> Option<&'static str> {
        REGISTRY
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, text)| *text)
    }
}

impl ScriptSource for BundledSource {
    fn fetch(&self, id: &ScriptId) -> Result<String> {
        debug!("resolving {} from bundle key {}", id.name, id.bundle_key);
        // include_str! already guaranteed UTF-8, so only NotFound can occur.
        Self::get(id.bundle_key)
            .map(str::to_owned)
            .ok_or_else(|| LoadError::NotFound {
                name: id.name,
                detail: format!("no bundle entry for key: {}", id.bundle_key),
            })
    }

    fn label(&self) -> &'static str {
        "bundled"
    }
}
