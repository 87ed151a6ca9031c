//! Fluent assembly of [`Outcome`] values.
//!
//! Each builder owns the outcome under construction; [`OutcomeBuilder::build`]
//! is the single point where it is handed over.
//!
//! ```rust
//! use outcome_core::prelude::*;
//!
//! let outcome = Outcome::success_with(42)
//!     .with_log_message("cache miss")
//!     .build();
//! assert_eq!(outcome.value(), Some(&42));
//! ```

use std::fmt;

use crate::format::TokenBag;
use crate::message::Message;
use crate::outcome::Outcome;
use crate::resource::ResourceSource;

// ============================================================================
// VALIDATION SEAM
// ============================================================================

/// Anything that accumulates validation errors.
pub trait ValidationReport {
    /// Errors in the order they were recorded.
    fn validation_errors(&self) -> &[Message];
}

impl ValidationReport for [Message] {
    fn validation_errors(&self) -> &[Message] {
        self
    }
}

impl ValidationReport for Vec<Message> {
    fn validation_errors(&self) -> &[Message] {
        self
    }
}

/// How many validation errors [`FailureBuilder::with_validator`] copies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ErrorMode {
    /// Only the first recorded error.
    FirstError,
    /// Every recorded error.
    #[default]
    AllErrors,
}

// ============================================================================
// SHARED OPERATIONS
// ============================================================================

/// Operations available on both success and failure builders.
pub trait OutcomeBuilder<T>: Sized {
    /// The outcome under construction.
    fn outcome_mut(&mut self) -> &mut Outcome<T>;

    /// Hands over the finished outcome.
    fn build(self) -> Outcome<T>;

    /// Appends a prepared message.
    #[must_use = "builder methods must be chained or built"]
    fn with_message(mut self, message: Message) -> Self {
        self.outcome_mut().messages.push(message);
        self
    }

    /// Appends an informational message.
    #[must_use = "builder methods must be chained or built"]
    fn with_info(self, source: &dyn ResourceSource, key: &str, tokens: Option<TokenBag>) -> Self {
        self.with_message(Message::info(source, key, tokens))
    }

    /// Appends a warning.
    #[must_use = "builder methods must be chained or built"]
    fn with_warning(self, source: &dyn ResourceSource, key: &str, tokens: Option<TokenBag>) -> Self {
        self.with_message(Message::warning(source, key, tokens))
    }

    /// Appends a validation error.
    #[must_use = "builder methods must be chained or built"]
    fn with_validation_error(
        self,
        source: &dyn ResourceSource,
        key: &str,
        tokens: Option<TokenBag>,
    ) -> Self {
        self.with_message(Message::validation_error(source, key, tokens))
    }

    /// Appends prepared messages in order.
    #[must_use = "builder methods must be chained or built"]
    fn with_messages(mut self, messages: impl IntoIterator<Item = Message>) -> Self {
        self.outcome_mut().messages.extend(messages);
        self
    }

    /// Appends a raw diagnostic string.
    #[must_use = "builder methods must be chained or built"]
    fn with_log_message(mut self, message: impl Into<String>) -> Self {
        self.outcome_mut().log_messages.push(message.into());
        self
    }

    /// Appends raw diagnostic strings in order.
    #[must_use = "builder methods must be chained or built"]
    fn with_log_messages<S: Into<String>>(mut self, messages: impl IntoIterator<Item = S>) -> Self {
        self.outcome_mut()
            .log_messages
            .extend(messages.into_iter().map(Into::into));
        self
    }
}

fn commit<T>(outcome: Outcome<T>) -> Outcome<T> {
    tracing::trace!(
        success = outcome.is_success,
        has_content = outcome.has_content,
        messages = outcome.messages.len(),
        "outcome built"
    );
    outcome
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

impl<T> Outcome<T> {
    /// Starts a successful outcome without a payload.
    pub fn success() -> SuccessBuilder<T> {
        SuccessBuilder {
            outcome: Outcome::empty(true),
        }
    }

    /// Starts a successful outcome carrying `value`.
    pub fn success_with(value: T) -> SuccessBuilder<T> {
        SuccessBuilder {
            outcome: Outcome {
                has_content: true,
                value: Some(value),
                ..Outcome::empty(true)
            },
        }
    }

    /// Starts a failed outcome.
    pub fn failure() -> FailureBuilder<T> {
        FailureBuilder {
            outcome: Outcome::empty(false),
        }
    }
}

// ============================================================================
// SUCCESS
// ============================================================================

/// Builder for successful outcomes.
#[derive(Debug, Clone)]
#[must_use = "builders do nothing until `build` is called"]
pub struct SuccessBuilder<T> {
    outcome: Outcome<T>,
}

impl<T> OutcomeBuilder<T> for SuccessBuilder<T> {
    fn outcome_mut(&mut self) -> &mut Outcome<T> {
        &mut self.outcome
    }

    fn build(self) -> Outcome<T> {
        commit(self.outcome)
    }
}

// ============================================================================
// FAILURE
// ============================================================================

/// Builder for failed outcomes.
#[derive(Debug, Clone)]
#[must_use = "builders do nothing until `build` is called"]
pub struct FailureBuilder<T> {
    outcome: Outcome<T>,
}

impl<T> OutcomeBuilder<T> for FailureBuilder<T> {
    fn outcome_mut(&mut self) -> &mut Outcome<T> {
        &mut self.outcome
    }

    fn build(self) -> Outcome<T> {
        commit(self.outcome)
    }
}

impl<T> FailureBuilder<T> {
    /// Appends an error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_error(self, source: &dyn ResourceSource, key: &str, tokens: Option<TokenBag>) -> Self {
        self.with_message(Message::error(source, key, tokens))
    }

    /// Appends a not-found message naming the payload type.
    #[must_use = "builder methods must be chained or built"]
    pub fn not_found(self, identity: impl fmt::Display) -> Self {
        self.with_message(Message::not_found::<T>(identity))
    }

    /// Appends a not-found message naming `E`.
    #[must_use = "builder methods must be chained or built"]
    pub fn not_found_of<E: ?Sized>(self, identity: impl fmt::Display) -> Self {
        self.with_message(Message::not_found::<E>(identity))
    }

    /// Appends a not-found message with an explicit entity name.
    #[must_use = "builder methods must be chained or built"]
    pub fn not_found_named(self, entity: &str, identity: impl fmt::Display) -> Self {
        self.with_message(Message::not_found_named(entity, identity))
    }

    /// Appends the built-in unauthorized message.
    #[must_use = "builder methods must be chained or built"]
    pub fn unauthorized(self) -> Self {
        self.with_message(Message::unauthorized())
    }

    /// Appends an unauthorized message from a caller resource.
    #[must_use = "builder methods must be chained or built"]
    pub fn unauthorized_with(
        self,
        source: &dyn ResourceSource,
        key: &str,
        tokens: Option<TokenBag>,
    ) -> Self {
        self.with_message(Message::unauthorized_with(source, key, tokens))
    }

    /// Appends the built-in forbidden message.
    #[must_use = "builder methods must be chained or built"]
    pub fn forbidden(self) -> Self {
        self.with_message(Message::forbidden())
    }

    /// Appends a forbidden message from a caller resource.
    #[must_use = "builder methods must be chained or built"]
    pub fn forbidden_with(
        self,
        source: &dyn ResourceSource,
        key: &str,
        tokens: Option<TokenBag>,
    ) -> Self {
        self.with_message(Message::forbidden_with(source, key, tokens))
    }

    /// Copies validation errors from `report`. Nothing is added when the
    /// report is empty.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_validator<R>(self, report: &R, mode: ErrorMode) -> Self
    where
        R: ValidationReport + ?Sized,
    {
        let errors = report.validation_errors();
        let taken = match mode {
            ErrorMode::FirstError => &errors[..errors.len().min(1)],
            ErrorMode::AllErrors => errors,
        };
        self.with_messages(taken.iter().cloned())
    }

    /// Marks the failure as transient.
    #[must_use = "builder methods must be chained or built"]
    pub fn attempt_retry(mut self) -> Self {
        self.outcome.attempt_retry = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageKind;
    use crate::resource::ResourceCatalog;
    use crate::tokens;
    use pretty_assertions::assert_eq;

    fn catalog() -> ResourceCatalog {
        ResourceCatalog::new("builder-tests").with_neutral([
            ("Saved", "Saved {count} items."),
            ("Slow", "That took a while."),
            ("Bad", "Field {field} is bad."),
        ])
    }

    fn report() -> Vec<Message> {
        let catalog = catalog();
        vec![
            Message::validation_error(&catalog, "Bad", Some(tokens! { field = "a" })),
            Message::validation_error(&catalog, "Bad", Some(tokens! { field = "b" })),
        ]
    }

    #[test]
    fn success_without_payload() {
        let outcome = Outcome::<()>::success().build();
        assert!(outcome.is_success());
        assert!(!outcome.has_content());
        assert!(outcome.messages().is_empty());
    }

    #[test]
    fn success_keeps_messages_in_order() {
        let catalog = catalog();
        let outcome = Outcome::success_with("done")
            .with_info(&catalog, "Saved", Some(tokens! { count = 3 }))
            .with_warning(&catalog, "Slow", None)
            .with_log_messages(["a", "b"])
            .build();
        let kinds: Vec<_> = outcome.messages().iter().map(Message::kind).collect();
        assert_eq!(kinds, vec![MessageKind::Information, MessageKind::Warning]);
        assert_eq!(outcome.messages()[0].content(), "Saved 3 items.");
        assert_eq!(outcome.log_messages(), ["a", "b"]);
        assert_eq!(outcome.into_value(), Some("done"));
    }

    #[test]
    fn success_with_none_payload_still_has_content() {
        let outcome = Outcome::success_with(None::<i32>).build();
        assert!(outcome.has_content());
        assert_eq!(outcome.value(), Some(&None));
    }

    #[test]
    fn with_validator_all_errors() {
        let outcome = Outcome::<()>::failure()
            .with_validator(&report(), ErrorMode::AllErrors)
            .build();
        assert_eq!(outcome.validation_errors().len(), 2);
        assert!(outcome.has_validation_errors());
    }

    #[test]
    fn with_validator_first_error() {
        let outcome = Outcome::<()>::failure()
            .with_validator(&report(), ErrorMode::FirstError)
            .build();
        assert_eq!(outcome.messages().len(), 1);
        assert_eq!(outcome.messages()[0].content(), "Field a is bad.");
    }

    #[test]
    fn with_validator_empty_adds_nothing() {
        let empty: Vec<Message> = Vec::new();
        let outcome = Outcome::<()>::failure()
            .with_validator(&empty, ErrorMode::FirstError)
            .build();
        assert!(outcome.messages().is_empty());
        assert_eq!(ErrorMode::default(), ErrorMode::AllErrors);
    }

    #[test]
    fn failure_flags() {
        struct Account;
        let outcome = Outcome::<Account>::failure()
            .not_found("acc-1")
            .attempt_retry()
            .build();
        assert!(!outcome.is_success());
        assert!(outcome.attempt_retry());
        assert!(outcome.value().is_none());
        assert_eq!(
            outcome.messages()[0].invariant_content(),
            r#"The type "Account" with identifier "acc-1" does not exist."#
        );
    }

    #[test]
    fn not_found_of_names_other_type() {
        let outcome = Outcome::<()>::failure().not_found_of::<String>(9).build();
        assert_eq!(
            outcome.messages()[0].invariant_content(),
            r#"The type "String" with identifier "9" does not exist."#
        );
    }
}
