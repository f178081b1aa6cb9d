//! The script catalog: every fixture this crate knows how to load.
//!
//! Identifiers are compile-time constants. Each carries the logical name
//! callers ask for, the key the bundled registry is built under, and the
//! path of the fixture relative to the fixtures directory.

use std::fmt;

/// Identifies one script fixture across both load strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScriptId {
    /// Logical name, e.g. `"AlwaysSucceeds"`
    pub name: &'static str,
    /// Key the bundled registry maps to this script's text
    pub bundle_key: &'static str,
    /// Path relative to the fixtures directory
    pub rel_path: &'static str,
}

impl fmt::Display for ScriptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

pub const ALWAYS_SUCCEEDS: ScriptId = ScriptId {
    name: "AlwaysSucceeds",
    bundle_key: "Scripts/always-succeeds.plutus",
    rel_path: "scripts/always-succeeds.plutus",
};

pub const ALWAYS_SUCCEEDS_V2: ScriptId = ScriptId {
    name: "AlwaysSucceedsV2",
    bundle_key: "Scripts/always-succeeds-v2.plutus",
    rel_path: "scripts/always-succeeds-v2.plutus",
};

pub const ONE_SHOT_MINTING_V2: ScriptId = ScriptId {
    name: "OneShotMintingV2",
    bundle_key: "Scripts/one-shot-minting-v2.plutus",
    rel_path: "scripts/one-shot-minting-v2.plutus",
};

/// Every script fixture, in catalog order.
pub const CATALOG: &[ScriptId] = &[ALWAYS_SUCCEEDS, ALWAYS_SUCCEEDS_V2, ONE_SHOT_MINTING_V2];

/// Look up a catalog entry by its logical name.
pub fn find(name: &str) -> Option<&'static ScriptId> {
    CATALOG.iter().find(|id| id.name == name)
}
