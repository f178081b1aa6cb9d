//! Mock script sources for testing

use std::sync::Mutex;

use plutus_fixtures_core::catalog::ScriptId;
use plutus_fixtures_core::error::{LoadError, Result};
use plutus_fixtures_core::source::ScriptSource;

/// A mock source that serves canned text and records every fetch.
///
/// Lets tests assert that exactly one source is exercised and that each
/// script is fetched exactly once.
#[derive(Debug, Default)]
pub struct RecordingSource {
    replies: Vec<(&'static str, String)>,
    fetched: Mutex<Vec<&'static str>>,
}

impl RecordingSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `text` for the script named `name`.
    pub fn with_reply(mut self, name: &'static str, text: impl Into<String>) -> Self {
        self.replies.push((name, text.into()));
        self
    }

    /// Serve the canned fixture text for the whole catalog.
    pub fn with_catalog(mut self) -> Self {
        for id in plutus_fixtures_core::CATALOG {
            self.replies
                .push((id.name, crate::fixtures::text_for(id).to_string()));
        }
        self
    }

    /// Names fetched so far, in order.
    pub fn fetched(&self) -> Vec<&'static str> {
        self.fetched.lock().unwrap().clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.fetched.lock().unwrap().len()
    }
}

impl ScriptSource for RecordingSource {
    fn fetch(&self, id: &ScriptId) -> Result<String> {
        self.fetched.lock().unwrap().push(id.name);
        self.replies
            .iter()
            .find(|(name, _)| *name == id.name)
            .map(|(_, text)| text.clone())
            .ok_or_else(|| LoadError::NotFound {
                name: id.name,
                detail: "no reply configured".to_string(),
            })
    }

    fn label(&self) -> &'static str {
        "recording"
    }
}

/// A source that fails every fetch, recording that it was invoked at all.
#[derive(Debug, Default)]
pub struct FailingSource {
    fetched: Mutex<Vec<&'static str>>,
}

impl FailingSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fetch_count(&self) -> usize {
        self.fetched.lock().unwrap().len()
    }
}

impl ScriptSource for FailingSource {
    fn fetch(&self, id: &ScriptId) -> Result<String> {
        self.fetched.lock().unwrap().push(id.name);
        Err(LoadError::NotFound {
            name: id.name,
            detail: "failing source".to_string(),
        })
    }

    fn label(&self) -> &'static str {
        "failing"
    }
}
