//! The outcome of an operation: success flag, optional payload and messages.

use std::collections::HashSet;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::error::OutcomeError;
use crate::message::{Message, MessageKind};

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Result of an operation.
///
/// Outcomes are assembled with the builders returned by
/// [`Outcome::success`], [`Outcome::success_with`] and [`Outcome::failure`]
/// and are read-only once built. A payload is present only when
/// [`has_content`](Self::has_content) is true.
///
/// ```rust
/// use outcome_core::prelude::*;
///
/// let outcome = Outcome::<u32>::failure().not_found(7).build();
/// assert!(!outcome.is_success());
/// assert!(outcome.is_not_found());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T = ()> {
    pub(crate) is_success: bool,
    pub(crate) has_content: bool,
    pub(crate) value: Option<T>,
    pub(crate) attempt_retry: bool,
    pub(crate) messages: Vec<Message>,
    pub(crate) log_messages: Vec<String>,
}

impl<T> Outcome<T> {
    pub(crate) fn empty(is_success: bool) -> Self {
        Self {
            is_success,
            has_content: false,
            value: None,
            attempt_retry: false,
            messages: Vec::new(),
            log_messages: Vec::new(),
        }
    }

    /// Assembles an outcome from raw parts.
    ///
    /// A value without content is rejected; a missing value with content is
    /// allowed.
    pub fn try_from_parts(
        is_success: bool,
        has_content: bool,
        value: Option<T>,
    ) -> Result<Self, OutcomeError> {
        if !has_content && value.is_some() {
            return Err(OutcomeError::ValueWithoutContent);
        }
        Ok(Self {
            has_content,
            value,
            ..Self::empty(is_success)
        })
    }

    /// Whether the operation succeeded.
    pub fn is_success(&self) -> bool {
        self.is_success
    }

    /// Whether the outcome carries a payload slot.
    pub fn has_content(&self) -> bool {
        self.has_content
    }

    /// The payload, if any.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Consumes the outcome, returning the payload.
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Whether the caller may retry the operation.
    pub fn attempt_retry(&self) -> bool {
        self.attempt_retry
    }

    /// All messages, in insertion order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Raw diagnostic strings. Never serialized.
    pub fn log_messages(&self) -> &[String] {
        &self.log_messages
    }

    /// Messages of one kind, in insertion order.
    pub fn messages_of_kind(&self, kind: MessageKind) -> Vec<&Message> {
        self.messages.iter().filter(|m| m.kind() == kind).collect()
    }

    fn has_kind(&self, kind: MessageKind) -> bool {
        self.messages.iter().any(|m| m.kind() == kind)
    }

    /// At least one unauthorized message.
    pub fn is_unauthorized(&self) -> bool {
        self.has_kind(MessageKind::Unauthorized)
    }

    /// At least one forbidden message.
    pub fn is_forbidden(&self) -> bool {
        self.has_kind(MessageKind::Forbidden)
    }

    /// At least one not-found message.
    pub fn is_not_found(&self) -> bool {
        self.has_kind(MessageKind::NotFound)
    }

    /// At least one informational message.
    pub fn has_information_messages(&self) -> bool {
        self.has_kind(MessageKind::Information)
    }

    /// At least one warning.
    pub fn has_warnings(&self) -> bool {
        self.has_kind(MessageKind::Warning)
    }

    /// At least one error.
    pub fn has_errors(&self) -> bool {
        self.has_kind(MessageKind::Error)
    }

    /// At least one validation error.
    pub fn has_validation_errors(&self) -> bool {
        self.has_kind(MessageKind::ValidationError)
    }

    /// Informational messages.
    pub fn information_messages(&self) -> Vec<&Message> {
        self.messages_of_kind(MessageKind::Information)
    }

    /// Warnings.
    pub fn warning_messages(&self) -> Vec<&Message> {
        self.messages_of_kind(MessageKind::Warning)
    }

    /// Errors.
    pub fn error_messages(&self) -> Vec<&Message> {
        self.messages_of_kind(MessageKind::Error)
    }

    /// Validation errors.
    pub fn validation_errors(&self) -> Vec<&Message> {
        self.messages_of_kind(MessageKind::ValidationError)
    }

    /// One line per message, `"{kind}({code}): {invariant content}"`,
    /// followed by every log message, joined by `delimiter` (the platform
    /// line ending when `None`). Repeated lines appear once.
    pub fn invariant_messages(&self, delimiter: Option<&str>) -> String {
        let delimiter = delimiter.unwrap_or(LINE_ENDING);
        let mut seen = HashSet::new();
        self.messages
            .iter()
            .map(|m| format!("{}({}): {}", m.kind(), m.code(), m.invariant_content()))
            .chain(self.log_messages.iter().cloned())
            .filter(|line| seen.insert(line.clone()))
            .collect::<Vec<_>>()
            .join(delimiter)
    }
}

impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.has_content { 2 } else { 1 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("messages", &self.messages)?;
        if self.has_content {
            map.serialize_entry("data", &self.value)?;
        }
        map.end()
    }
}
