//! Loading: one fetch per script, bound verbatim, all-or-nothing for sets.

use tracing::{debug, info};

use crate::catalog::{ScriptId, ALWAYS_SUCCEEDS, ALWAYS_SUCCEEDS_V2, ONE_SHOT_MINTING_V2};
use crate::error::Result;
use crate::source::ScriptSource;

/// A script's text, tied to the identifier it was loaded under.
///
/// The text is exactly what the source returned: no trimming, no parsing,
/// no validation. It is immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedScript {
    id: ScriptId,
    text: String,
}

impl LoadedScript {
    pub fn id(&self) -> &ScriptId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// Fetch `id` from `source` exactly once.
pub fn load_script(source: &dyn ScriptSource, id: &ScriptId) -> Result<LoadedScript> {
    let text = source.fetch(id)?;
    debug!(
        "loaded {} from {} source ({} bytes)",
        id.name,
        source.label(),
        text.len()
    );
    Ok(LoadedScript { id: *id, text })
}

/// The whole catalog, loaded eagerly.
///
/// `load` is the setup-time entry point: it fetches every script before
/// returning, and the first failure aborts the whole set. Callers never
/// see a partially loaded value.
#[derive(Debug, Clone)]
pub struct ScriptSet {
    pub always_succeeds: LoadedScript,
    pub always_succeeds_v2: LoadedScript,
    pub one_shot_minting_v2: LoadedScript,
}

impl ScriptSet {
    pub fn load(source: &dyn ScriptSource) -> Result<Self> {
        let set = Self {
            always_succeeds: load_script(source, &ALWAYS_SUCCEEDS)?,
            always_succeeds_v2: load_script(source, &ALWAYS_SUCCEEDS_V2)?,
            one_shot_minting_v2: load_script(source, &ONE_SHOT_MINTING_V2)?,
        };
        info!(
            "loaded {} scripts from {} source",
            crate::catalog::CATALOG.len(),
            source.label()
        );
        Ok(set)
    }

    /// Look up a loaded script by its logical name.
    pub fn get(&self, name: &str) -> Option<&LoadedScript> {
        self.iter().find(|s| s.id().name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LoadedScript> {
        [
            &self.always_succeeds,
            &self.always_succeeds_v2,
            &self.one_shot_minting_v2,
        ]
        .into_iter()
    }
}
