//! # outcome-core
//!
//! Localized messages and success/failure outcomes for service operations.
//!
//! ## Key Components
//!
//! - **Locale scope**: [`locale::with_locale`] switches the active locale for
//!   the current operation and restores it on drop
//! - **Operation context**: [`context::OperationContext`] carries locale and
//!   verbosity per operation, for sync code and across `.await` points
//! - **Token formatter**: [`format::format`] substitutes named, case-insensitive
//!   tokens with optional format specifiers
//! - **Resources**: [`resource::ResourceSource`] and the in-memory
//!   [`resource::ResourceCatalog`] with locale fallback
//! - **Messages**: [`Message`] captures code, template, tokens, localized and
//!   invariant content at creation
//! - **Outcomes**: [`Outcome`] and its builders, with per-kind projections and
//!   verbosity-aware serialization
//!
//! ## Usage
//!
//! ```rust
//! use outcome_core::prelude::*;
//!
//! let outcome = {
//!     let _scope = with_locale(Some("fr"));
//!     Outcome::<()>::failure().not_found_named("User", 42).build()
//! };
//!
//! assert!(outcome.is_not_found());
//! assert_eq!(
//!     outcome.messages()[0].content(),
//!     r#"Le type "User" avec l'identificateur "42" n'existe pas."#
//! );
//! assert_eq!(
//!     outcome.messages()[0].invariant_content(),
//!     r#"The type "User" with identifier "42" does not exist."#
//! );
//! ```

pub mod builder;
pub mod case;
pub mod config;
pub mod context;
pub mod error;
pub mod format;
pub mod locale;
mod macros;
pub mod message;
pub mod outcome;
pub mod resource;
pub mod verbosity;

pub use builder::{ErrorMode, FailureBuilder, OutcomeBuilder, SuccessBuilder, ValidationReport};
pub use error::{CatalogError, ConfigError, LocaleError, OutcomeError};
pub use format::{TokenBag, TokenValue};
pub use locale::Locale;
pub use message::{Message, MessageKind};
pub use outcome::Outcome;
pub use resource::{ResourceCatalog, ResourceSource};
pub use verbosity::MessageVerbosity;

/// Common imports for building outcomes.
pub mod prelude {
    pub use crate::builder::{
        ErrorMode, FailureBuilder, OutcomeBuilder, SuccessBuilder, ValidationReport,
    };
    pub use crate::context::OperationContext;
    pub use crate::format::{TokenBag, TokenValue};
    pub use crate::locale::{current_locale, with_locale, Locale, LocaleScope};
    pub use crate::message::{Message, MessageKind};
    pub use crate::outcome::Outcome;
    pub use crate::resource::{ResourceCatalog, ResourceSource};
    pub use crate::tokens;
    pub use crate::verbosity::MessageVerbosity;
}
