//! Environment-adaptive loader for Plutus script fixtures.
//!
//! Ships a small catalog of serialized Plutus programs and loads their text
//! from one of two sources chosen once at startup: a compile-time bundled
//! registry (for environments without filesystem access) or a fixtures
//! directory on disk. Content is bound verbatim; nothing here parses,
//! compiles, or validates scripts.

pub mod bundle;
pub mod catalog;
pub mod config;
pub mod error;
pub mod loader;
pub mod source;

pub use bundle::BundledSource;
pub use catalog::{ScriptId, ALWAYS_SUCCEEDS, ALWAYS_SUCCEEDS_V2, CATALOG, ONE_SHOT_MINTING_V2};
pub use config::{FixturesConfig, SourceKind};
pub use error::{ConfigError, LoadError};
pub use loader::{load_script, LoadedScript, ScriptSet};
pub use source::{FilesystemSource, ScriptSource};
