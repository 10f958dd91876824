//! Engine configuration types.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Longest accepted normalized path, in characters.
pub const DEFAULT_MAX_PATH_LEN: usize = 255;

/// How long an "ignore all errors" decision stays in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IgnoreAllScope {
    /// Until the engine is dropped or explicitly reset.
    #[default]
    Engine,
    /// Only for the batch call in which it was chosen.
    Batch,
}

/// Configuration for the batch operation engine.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
#[serde(default)]
pub struct EngineConfig {
    /// Paths whose normalized form exceeds this many characters are rejected.
    #[builder(default = "DEFAULT_MAX_PATH_LEN")]
    pub max_path_len: usize,

    /// Lifetime of the ignore-all flag.
    #[builder(default)]
    pub ignore_all_scope: IgnoreAllScope,
}

impl EngineConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.max_path_len == Some(0) {
            return Err("max_path_len must be greater than zero".to_string());
        }
        Ok(())
    }
}

impl EngineConfig {
    /// Create a new engine config builder.
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_path_len: DEFAULT_MAX_PATH_LEN,
            ignore_all_scope: IgnoreAllScope::default(),
        }
    }
}
