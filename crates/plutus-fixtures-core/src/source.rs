//! The source abstraction behind both load strategies.
//!
//! A [`ScriptSource`] resolves a catalog entry to its full text. The two
//! shipped implementations are [`FilesystemSource`] (reads the fixtures
//! directory) and [`crate::BundledSource`] (compile-time registry). Which
//! one a process uses is decided once, by whoever constructs it; sources
//! never fall back to each other.

use std::io;
use std::path::PathBuf;

use tracing::debug;

use crate::catalog::ScriptId;
use crate::error::{LoadError, Result};

/// Retrieves the text of a script fixture.
///
/// Implementations must be pure lookups: same id, same text, every call.
/// This is the seam tests mock to prove only one strategy runs.
pub trait ScriptSource: Send + Sync {
    /// Fetch the full text for `id`, verbatim.
    fn fetch(&self, id: &ScriptId) -> Result<String>;

    /// Short label for log and error messages, e.g. `"filesystem"`.
    fn label(&self) -> &'static str;
}

/// Reads fixtures from a directory on disk.
///
/// Resolution is `{base}/{rel_path}`; the read is synchronous and the
/// content must be UTF-8.
#[derive(Debug, Clone)]
pub struct FilesystemSource {
    base: PathBuf,
}

impl FilesystemSource {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &std::path::Path {
        &self.base
    }
}

impl ScriptSource for FilesystemSource {
    fn fetch(&self, id: &ScriptId) -> Result<String> {
        let path = self.base.join(id.rel_path);
        debug!("reading {} from {}", id.name, path.display());
        let bytes = std::fs::read(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound {
                name: id.name,
                detail: format!("no such file: {}", path.display()),
            },
            _ => LoadError::Unreadable {
                name: id.name,
                detail: format!("{}: {}", path.display(), e),
            },
        })?;
        String::from_utf8(bytes).map_err(|e| LoadError::Unreadable {
            name: id.name,
            detail: format!("{}: {}", path.display(), e),
        })
    }

    fn label(&self) -> &'static str {
        "filesystem"
    }
}
