//! Error types for outcome-core.
//!
//! Domain failures (missing resources, unresolved tokens, failed rules) never
//! surface here; they are carried as [`Message`](crate::Message) values. The
//! enums below cover malformed input handed to the crate by its host.

/// A locale tag could not be turned into a [`Locale`](crate::Locale).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    /// The tag was empty or whitespace.
    #[error("locale tag is blank")]
    Blank,

    /// The tag is not a well-formed language identifier.
    #[error("invalid locale tag '{tag}': {reason}")]
    Invalid {
        /// The rejected tag, as supplied.
        tag: String,
        /// Parser diagnostic.
        reason: String,
    },
}

/// A resource catalog could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog document is not valid TOML or has the wrong shape.
    #[error("failed to parse resource catalog '{name}': {source}")]
    Parse {
        /// Catalog name.
        name: String,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// A `[locales.<tag>]` table names an invalid locale.
    #[error("resource catalog '{name}' has an invalid locale table: {source}")]
    Locale {
        /// Catalog name.
        name: String,
        /// Underlying locale error.
        #[source]
        source: LocaleError,
    },
}

/// Configuration could not be read.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration document is not valid TOML or has the wrong shape.
    #[error("failed to parse outcome configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configured default locale is not a valid tag.
    #[error(transparent)]
    Locale(#[from] LocaleError),
}

/// An [`Outcome`](crate::Outcome) was assembled from inconsistent parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OutcomeError {
    /// A payload was supplied while `has_content` was false.
    #[error("you cannot set a value on the outcome when has_content is false")]
    ValueWithoutContent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_error_display() {
        let err = LocaleError::Invalid {
            tag: "!!".into(),
            reason: "bad subtag".into(),
        };
        assert_eq!(err.to_string(), "invalid locale tag '!!': bad subtag");
        assert_eq!(LocaleError::Blank.to_string(), "locale tag is blank");
    }

    #[test]
    fn outcome_error_display() {
        assert_eq!(
            OutcomeError::ValueWithoutContent.to_string(),
            "you cannot set a value on the outcome when has_content is false"
        );
    }

    #[test]
    fn config_error_wraps_locale_error() {
        let err: ConfigError = LocaleError::Blank.into();
        assert!(matches!(err, ConfigError::Locale(LocaleError::Blank)));
        assert_eq!(err.to_string(), "locale tag is blank");
    }
}
