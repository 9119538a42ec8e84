//! Tool-server configuration with sensible defaults.
//!
//! [`ServerConfig`] captures the tool boundary's knobs and converts them into
//! a ready [`ToolSet`] via [`build_tool_set`](ServerConfig::build_tool_set).
//! It can be loaded from a JSON file; missing fields keep their defaults.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PromptError, Result};
use crate::optimizer::PromptOptimizer;
use crate::tools::{
    DEFAULT_CACHE_CAPACITY, PromptToolsConfig, PromptToolsExt, ToolSet,
};

/// Settings for the tool boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Tool results longer than this many bytes become errors. Default: no limit.
    pub max_result_bytes: Option<usize>,
    /// Validate arguments against each tool's JSON Schema. Default: `true`.
    pub validate_args: bool,
    /// Memoized results kept; `0` disables the cache. Default: `256`.
    pub cache_capacity: usize,
    /// Pretty-print JSON tool results. Default: `true`.
    pub pretty_json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            max_result_bytes: None,
            validate_args: true,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            pretty_json: true,
        }
    }
}

impl ServerConfig {
    /// Load from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| PromptError::Config(format!("cannot read {}: {e}", path.display())))?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| PromptError::Config(format!("invalid {}: {e}", path.display())))?;
        debug!("Loaded configuration from {}: {config:?}", path.display());
        Ok(config)
    }

    pub fn with_max_result_bytes(mut self, max: Option<usize>) -> Self {
        self.max_result_bytes = max;
        self
    }

    pub fn with_arg_validation(mut self, enabled: bool) -> Self {
        self.validate_args = enabled;
        self
    }

    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    pub fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.pretty_json = pretty;
        self
    }

    /// Build a [`ToolSet`] with the nine prompt tools over `optimizer`.
    pub fn build_tool_set(&self, optimizer: Arc<PromptOptimizer>) -> ToolSet {
        ToolSet::new()
            .with_max_result_bytes(self.max_result_bytes)
            .with_arg_validation(self.validate_args)
            .with_cache_capacity(self.cache_capacity)
            .with_prompt_tools_configured(
                optimizer,
                PromptToolsConfig::default().pretty_json(self.pretty_json),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.max_result_bytes, None);
        assert!(config.validate_args);
        assert_eq!(config.cache_capacity, 256);
        assert!(config.pretty_json);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"cache_capacity": 0, "pretty_json": false}}"#).unwrap();

        let config = ServerConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.cache_capacity, 0);
        assert!(!config.pretty_json);
        assert_eq!(config.max_result_bytes, None);
        assert!(config.validate_args);
    }

    #[test]
    fn unknown_field_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"max_results": 10}}"#).unwrap();

        let err = ServerConfig::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, PromptError::Config(_)));
        assert!(err.to_string().contains("max_results"));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ServerConfig::from_json_file(dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().starts_with("configuration error: cannot read"));
    }

    #[test]
    fn build_tool_set_applies_settings() {
        let config = ServerConfig::default()
            .with_max_result_bytes(Some(1_000))
            .with_arg_validation(false)
            .with_cache_capacity(0);
        let tools = config.build_tool_set(Arc::new(PromptOptimizer::new()));
        assert_eq!(tools.len(), 9);
        assert_eq!(tools.max_result_bytes(), Some(1_000));
        assert!(!tools.validates_args());
        assert!(!tools.is_cacheable("analyze_prompt"));
    }
}
