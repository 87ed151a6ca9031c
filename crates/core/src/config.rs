//! Startup configuration for process-wide defaults.
//!
//! ```toml
//! default_locale = "fr-CA"
//!
//! [message_levels]
//! code = true
//! template = true
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::locale::{set_default_locale, Locale};
use crate::verbosity::MessageVerbosity;

/// Environment variable naming the default locale.
pub const ENV_DEFAULT_LOCALE: &str = "OUTCOME_DEFAULT_LOCALE";
/// Environment variable holding the default verbosity list.
pub const ENV_MESSAGE_LEVELS: &str = "OUTCOME_MESSAGE_LEVELS";

/// Process-wide defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutcomeConfig {
    /// Locale used when no operation scope sets one.
    pub default_locale: Option<String>,
    /// Verbosity used when a request names none.
    pub message_levels: MessageVerbosity,
}

impl OutcomeConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(document: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(document)?)
    }

    /// Reads [`ENV_DEFAULT_LOCALE`] and [`ENV_MESSAGE_LEVELS`].
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            default_locale: lookup(ENV_DEFAULT_LOCALE).filter(|tag| !tag.trim().is_empty()),
            message_levels: lookup(ENV_MESSAGE_LEVELS)
                .map(|list| MessageVerbosity::parse(&list))
                .unwrap_or_default(),
        }
    }

    /// Publishes the defaults.
    ///
    /// Nothing is changed when the locale is invalid.
    pub fn install(&self) -> Result<(), ConfigError> {
        let locale = self
            .default_locale
            .as_deref()
            .map(Locale::parse)
            .transpose()?;

        if let Some(locale) = locale {
            set_default_locale(locale);
        }
        self.message_levels.set_default();
        tracing::debug!(
            default_locale = ?self.default_locale,
            message_levels = ?self.message_levels,
            "outcome defaults installed"
        );
        Ok(())
    }
}
