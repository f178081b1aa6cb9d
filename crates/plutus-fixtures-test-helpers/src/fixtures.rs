//! On-disk fixture trees and canned script contents for testing
//!
//! Canned contents are `include_str!` of the repository fixtures, so trees
//! built here always agree with the bundled registry.

use std::fs;
use std::path::Path;

use plutus_fixtures_core::catalog::ScriptId;
use tempfile::TempDir;

pub fn always_succeeds_text() -> &'static str {
    include_str!("../../../fixtures/scripts/always-succeeds.plutus")
}

pub fn always_succeeds_v2_text() -> &'static str {
    include_str!("../../../fixtures/scripts/always-succeeds-v2.plutus")
}

pub fn one_shot_minting_v2_text() -> &'static str {
    include_str!("../../../fixtures/scripts/one-shot-minting-v2.plutus")
}

/// Canned content for any catalog entry.
pub fn text_for(id: &ScriptId) -> &'static str {
    match id.name {
        "AlwaysSucceeds" => always_succeeds_text(),
        "AlwaysSucceedsV2" => always_succeeds_v2_text(),
        "OneShotMintingV2" => one_shot_minting_v2_text(),
        other => panic!("no canned content for script {other}"),
    }
}

/// Write one script under `base` at its catalog-relative path.
pub fn write_script(base: &Path, id: &ScriptId, content: &str) {
    let path = base.join(id.rel_path);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A temporary fixtures directory holding the full catalog with canned
/// contents. The returned guard deletes the tree on drop.
pub fn script_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    for id in plutus_fixtures_core::CATALOG {
        write_script(dir.path(), id, text_for(id));
    }
    dir
}
