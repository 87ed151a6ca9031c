//! Layered CLI configuration: defaults → `outcome.toml` → `OUTCOME_*` env →
//! command-line flags.
//!
//! ```toml
//! default_locale = "fr"
//! message_levels = "code, languageCode"
//! catalog = "messages.toml"
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use outcome_core::config::OutcomeConfig;
use outcome_core::verbosity::MessageVerbosity;
use serde::{Deserialize, Serialize};

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "outcome.toml";

/// Prefix of the environment layer.
pub const ENV_PREFIX: &str = "OUTCOME_";

/// Settings shared by every subcommand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Process default locale.
    pub default_locale: Option<String>,
    /// Comma-separated verbosity list used when a command names none.
    pub message_levels: Option<String>,
    /// Extra TOML resource catalog merged over the built-in one.
    pub catalog: Option<PathBuf>,
}

impl CliConfig {
    /// Loads the file and environment layers. A missing file is skipped.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        Self::figment(path)
            .extract()
            .with_context(|| format!("invalid configuration (file: {})", path.display()))
    }

    fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).only(&["default_locale", "message_levels", "catalog"]))
    }

    /// Core defaults derived from these settings.
    pub fn outcome_config(&self) -> OutcomeConfig {
        OutcomeConfig {
            default_locale: self.default_locale.clone(),
            message_levels: self
                .message_levels
                .as_deref()
                .map(MessageVerbosity::parse)
                .unwrap_or_default(),
        }
    }
}
