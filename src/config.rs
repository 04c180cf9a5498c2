//! Resolver configuration describing which CMS project and dataset to target.

use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "cms.config.json";

/// Environment variable naming the CMS project identifier.
pub const PROJECT_ID_ENV: &str = "SANITY_PROJECT_ID";
/// Environment variable naming the CMS dataset.
pub const DATASET_ENV: &str = "SANITY_DATASET";

const DEFAULT_PROJECT_ID: &str = "your-project-id";
const DEFAULT_DATASET: &str = "production";

/// Project and dataset identifiers used when building CDN image URLs.
///
/// The values are fixed at process start and passed into the resolver, so
/// tests can supply arbitrary identifiers instead of mutating global
/// environment state.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ResolverConfig {
    /// CMS project identifier embedded in CDN URLs.
    pub project_id: String,
    /// Dataset name embedded in CDN URLs.
    pub dataset: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            project_id: DEFAULT_PROJECT_ID.into(),
            dataset: DEFAULT_DATASET.into(),
        }
    }
}

impl ResolverConfig {
    /// Build configuration from the process environment.
    ///
    /// Reads `SANITY_PROJECT_ID` and `SANITY_DATASET`, falling back to the
    /// documented defaults (`your-project-id` and `production`) when a
    /// variable is unset or blank.
    pub fn from_env() -> Self {
        Self {
            project_id: env_or_default(PROJECT_ID_ENV, DEFAULT_PROJECT_ID),
            dataset: env_or_default(DATASET_ENV, DEFAULT_DATASET),
        }
    }

    /// Attempt to load configuration from the provided directory.
    ///
    /// When the configuration file does not exist or fails to parse we fall
    /// back to default values so downstream callers can continue operating
    /// with sensible assumptions.
    pub fn discover(dir: &Path) -> Self {
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        Self::from_path(&candidate).unwrap_or_default()
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }
}

fn env_or_default(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_documented_values() {
        let config = ResolverConfig::default();
        assert_eq!(config.project_id, "your-project-id");
        assert_eq!(config.dataset, "production");
    }

    #[test]
    fn discover_falls_back_to_defaults_for_missing_file() {
        let temp = tempdir().expect("failed to create temp dir");
        assert_eq!(ResolverConfig::discover(temp.path()), ResolverConfig::default());
    }

    #[test]
    fn discover_reads_configuration_file() {
        let temp = tempdir().expect("failed to create temp dir");
        std::fs::write(
            temp.path().join("cms.config.json"),
            r#"{"project_id": "abc123", "dataset": "staging"}"#,
        )
        .expect("failed to write config file");

        let config = ResolverConfig::discover(temp.path());
        assert_eq!(config.project_id, "abc123");
        assert_eq!(config.dataset, "staging");
    }

    #[test]
    fn partial_files_keep_default_values() {
        let temp = tempdir().expect("failed to create temp dir");
        let path = temp.path().join("cms.config.json");
        std::fs::write(&path, r#"{"dataset": "staging"}"#).expect("failed to write config file");

        let config = ResolverConfig::from_path(&path).expect("configuration should parse");
        assert_eq!(config.project_id, "your-project-id");
        assert_eq!(config.dataset, "staging");
    }
}
