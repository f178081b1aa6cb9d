use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::bundle::BundledSource;
use crate::error::ConfigError;
use crate::source::{FilesystemSource, ScriptSource};

/// Which load strategy a process uses. Chosen once, before any load runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceKind {
    #[serde(rename = "bundled")]
    Bundled,
    #[serde(rename = "filesystem")]
    Filesystem,
}

impl Default for SourceKind {
    fn default() -> Self {
        SourceKind::Filesystem
    }
}

/// Loader configuration, typically read from `fixtures.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixturesConfig {
    /// Load strategy (default: filesystem)
    #[serde(default)]
    pub source: SourceKind,

    /// Base directory for the filesystem strategy (default: `fixtures`)
    #[serde(default = "default_fixtures_dir")]
    pub fixtures_dir: PathBuf,
}

fn default_fixtures_dir() -> PathBuf {
    PathBuf::from("fixtures")
}

impl Default for FixturesConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::default(),
            fixtures_dir: default_fixtures_dir(),
        }
    }
}

impl FixturesConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: FixturesConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Construct the configured source. This is the single point where the
    /// strategy choice happens.
    pub fn into_source(self) -> Box<dyn ScriptSource> {
        match self.source {
            SourceKind::Bundled => Box::new(BundledSource::new()),
            SourceKind::Filesystem => Box::new(FilesystemSource::new(self.fixtures_dir)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FixturesConfig::default();
        assert_eq!(config.source, SourceKind::Filesystem);
        assert_eq!(config.fixtures_dir, PathBuf::from("fixtures"));
    }

    #[test]
    fn test_serialize_config() {
        let config = FixturesConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("source: filesystem"));
        assert!(yaml.contains("fixturesDir"));
    }

    #[test]
    fn test_into_source_label() {
        let bundled = FixturesConfig {
            source: SourceKind::Bundled,
            ..Default::default()
        };
        assert_eq!(bundled.into_source().label(), "bundled");

        let fs = FixturesConfig::default();
        assert_eq!(fs.into_source().label(), "filesystem");
    }
}
