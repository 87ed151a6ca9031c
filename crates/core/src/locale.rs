//! Locale tags and the scoped locale switch.
//!
//! The active locale of an operation is read from the
//! [`OperationContext`](crate::context::OperationContext); when no operation
//! has set one, the process default applies (`en-US` unless configured).
//!
//! ```rust
//! use outcome_core::locale::{current_locale, with_locale};
//!
//! {
//!     let _scope = with_locale(Some("fr-CA"));
//!     assert_eq!(current_locale().to_string(), "fr-CA");
//! }
//! assert_eq!(current_locale().to_string(), "en-US");
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use unic_langid::LanguageIdentifier;

use crate::context;
use crate::error::LocaleError;

/// Tag of the reference (invariant) locale.
pub const REFERENCE_LOCALE_TAG: &str = "en-US";

static REFERENCE: LazyLock<Locale> = LazyLock::new(|| {
    Locale::parse(REFERENCE_LOCALE_TAG).unwrap_or_else(|_| Locale(LanguageIdentifier::default()))
});

static DEFAULT_LOCALE: LazyLock<ArcSwap<Locale>> =
    LazyLock::new(|| ArcSwap::from_pointee(Locale::reference()));

// ============================================================================
// LOCALE
// ============================================================================

/// A parsed BCP-47 language identifier such as `en-US` or `fr`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale(LanguageIdentifier);

impl Locale {
    /// Parses a locale tag. Surrounding whitespace is ignored.
    pub fn parse(tag: &str) -> Result<Self, LocaleError> {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return Err(LocaleError::Blank);
        }
        trimmed
            .parse::<LanguageIdentifier>()
            .map(Self)
            .map_err(|err| LocaleError::Invalid {
                tag: tag.to_owned(),
                reason: err.to_string(),
            })
    }

    /// The reference locale used for invariant message content.
    pub fn reference() -> Self {
        REFERENCE.clone()
    }

    /// Primary language subtag, e.g. `fr` for `fr-CA`.
    pub fn language(&self) -> &str {
        self.0.language.as_str()
    }

    /// Returns `true` for the reference locale.
    pub fn is_reference(&self) -> bool {
        *self == *REFERENCE
    }

    /// Normalized catalog keys to try for this locale, most specific first.
    ///
    /// `fr-CA` yields `["fr-ca", "fr"]`; the neutral entry is not included.
    pub fn fallback_tags(&self) -> Vec<String> {
        let full = normalize_tag(&self.0.to_string());
        let language = self.language().to_ascii_lowercase();
        if full == language {
            vec![full]
        } else {
            vec![full, language]
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Lower-cases a tag and unifies separators so catalog lookups are
/// insensitive to `fr_CA` vs `fr-ca`.
pub(crate) fn normalize_tag(tag: &str) -> String {
    tag.trim().replace('_', "-").to_ascii_lowercase()
}

// ============================================================================
// PROCESS DEFAULT
// ============================================================================

/// The locale used when no operation scope sets one.
pub fn default_locale() -> Locale {
    DEFAULT_LOCALE.load().as_ref().clone()
}

/// Replaces the process default locale.
pub fn set_default_locale(locale: Locale) {
    tracing::debug!(locale = %locale, "default locale changed");
    DEFAULT_LOCALE.store(Arc::new(locale));
}

/// The locale in effect for the current operation.
pub fn current_locale() -> Locale {
    context::locale_override().unwrap_or_else(default_locale)
}

// ============================================================================
// SCOPE GUARD
// ============================================================================

/// Temporarily switches the current operation's locale.
///
/// Entering with a blank or absent tag does nothing. An unparseable tag is
/// logged and ignored, leaving the current locale in place. In every other
/// case the locale seen on entry is restored when the guard drops, whether
/// or not the switch itself succeeded.
///
/// The guard is `!Send`; it restores the thread it was created on.
#[must_use = "the previous locale is restored when the scope is dropped"]
#[derive(Debug)]
pub struct LocaleScope {
    previous: Option<Option<Locale>>,
    _not_send: PhantomData<*const ()>,
}

impl LocaleScope {
    /// Enters a scope for `tag`.
    pub fn enter(tag: Option<&str>) -> Self {
        let Some(tag) = tag.filter(|tag| !tag.trim().is_empty()) else {
            return Self::inert();
        };

        let previous = context::locale_override();
        match Locale::parse(tag) {
            Ok(locale) => {
                context::set_locale_override(Some(locale));
            }
            Err(err) => {
                tracing::debug!(tag, error = %err, "locale switch rejected, keeping current locale");
            }
        }

        Self {
            previous: Some(previous),
            _not_send: PhantomData,
        }
    }

    /// Enters a scope for an already parsed locale.
    pub fn enter_locale(locale: Locale) -> Self {
        let previous = context::set_locale_override(Some(locale));
        Self {
            previous: Some(previous),
            _not_send: PhantomData,
        }
    }

    fn inert() -> Self {
        Self {
            previous: None,
            _not_send: PhantomData,
        }
    }
}

impl Drop for LocaleScope {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            context::set_locale_override(previous);
        }
    }
}

/// Shorthand for [`LocaleScope::enter`].
pub fn with_locale(tag: Option<&str>) -> LocaleScope {
    LocaleScope::enter(tag)
}
