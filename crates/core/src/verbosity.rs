//! Which optional message fields appear in serialized output.
//!
//! Clients choose the level of detail per request with a comma-separated
//! list (normally carried in the [`MESSAGE_LEVELS_HEADER`] header); when a
//! request names nothing, the process default configured at startup applies.
//! The message kind and localized content are always emitted.

use std::marker::PhantomData;
use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};

use crate::context;

/// Request header carrying the verbosity list.
pub const MESSAGE_LEVELS_HEADER: &str = "Result-Message-Levels";

static DEFAULT_VERBOSITY: LazyLock<ArcSwap<MessageVerbosity>> =
    LazyLock::new(|| ArcSwap::from_pointee(MessageVerbosity::NONE));

/// Optional message fields to include when serializing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageVerbosity {
    /// Emit the kebab-case message code.
    pub code: bool,
    /// Emit the lower-camel-case template.
    pub template: bool,
    /// Emit the token bag.
    pub tokens: bool,
    /// Emit the language code the content was rendered in.
    pub language_code: bool,
}

impl MessageVerbosity {
    /// Only kind and content.
    pub const NONE: Self = Self {
        code: false,
        template: false,
        tokens: false,
        language_code: false,
    };

    /// Every optional field.
    pub const ALL: Self = Self {
        code: true,
        template: true,
        tokens: true,
        language_code: true,
    };

    /// Parses a comma-separated list such as `"code, Template,tokens"`.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Unknown entries are skipped.
    pub fn parse(list: &str) -> Self {
        let mut verbosity = Self::NONE;
        for entry in list.split(',') {
            match entry.trim().to_ascii_lowercase().as_str() {
                "code" => verbosity.code = true,
                "template" => verbosity.template = true,
                "tokens" => verbosity.tokens = true,
                "languagecode" | "language-code" | "language_code" => {
                    verbosity.language_code = true;
                }
                "" => {}
                other => tracing::trace!(entry = other, "ignoring unknown message level"),
            }
        }
        verbosity
    }

    /// Options for a request: its own list when present and non-blank,
    /// otherwise the process default.
    pub fn resolve(requested: Option<&str>) -> Self {
        match requested {
            Some(list) if !list.trim().is_empty() => Self::parse(list),
            _ => Self::default_options(),
        }
    }

    /// Options in effect for the current operation.
    pub fn current() -> Self {
        context::verbosity_override().unwrap_or_else(Self::default_options)
    }

    /// The process-wide fallback.
    pub fn default_options() -> Self {
        **DEFAULT_VERBOSITY.load()
    }

    /// Replaces the process-wide fallback.
    pub fn set_default(self) {
        DEFAULT_VERBOSITY.store(Arc::new(self));
    }

    /// Overrides the options for the current operation until the guard drops.
    pub fn scope(self) -> VerbosityScope {
        VerbosityScope {
            previous: context::set_verbosity_override(Some(self)),
            _not_send: PhantomData,
        }
    }

    /// `true` when no optional field is enabled.
    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

/// Guard returned by [`MessageVerbosity::scope`].
#[must_use = "the previous options are restored when the scope is dropped"]
#[derive(Debug)]
pub struct VerbosityScope {
    previous: Option<MessageVerbosity>,
    _not_send: PhantomData<*const ()>,
}

impl Drop for VerbosityScope {
    fn drop(&mut self) {
        context::set_verbosity_override(self.previous);
    }
}
