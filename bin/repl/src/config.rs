//! Shell configuration.
//!
//! Loaded via the `config` crate from `MENAGE_`-prefixed environment
//! variables, with `__` separating nested keys:
//!
//! ```text
//! MENAGE_SHOW_CONTEXT=false
//! MENAGE_RETRIEVAL__FALLBACK_WINDOW=5
//! MENAGE_RETRIEVAL__MATCH_STRATEGY=whole_word
//! ```

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment};
use menage_conversation::RetrievalConfig;
use serde::Deserialize;

/// Shell configuration composed from library configs.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplConfig {
    /// Context retrieval tuning.
    #[serde(default)]
    pub retrieval: RetrievalConfig,

    /// Whether to print recalled turns before each response.
    #[serde(default = "default_show_context")]
    pub show_context: bool,
}

fn default_show_context() -> bool {
    true
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            retrieval: RetrievalConfig::default(),
            show_context: default_show_context(),
        }
    }
}

impl ReplConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(
            config::Config::builder().add_source(
                Environment::with_prefix("MENAGE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            ),
        )
    }

    fn load(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }
}
