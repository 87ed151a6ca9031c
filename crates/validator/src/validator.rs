//! The error accumulator behind every rule.

use outcome_core::{tokens, Message, ResourceSource, TokenBag, ValidationReport};

use crate::object::ObjectValidator;
use crate::resources::{catalog, keys};
use crate::rules::collection::Countable;

/// Collects validation errors for one validation pass.
///
/// Errors only accumulate; a failing rule appends exactly one
/// [`MessageKind::ValidationError`](outcome_core::MessageKind::ValidationError)
/// message and a passing rule appends nothing.
///
/// ```rust
/// use outcome_validator::prelude::*;
///
/// struct Order { quantity: i32, note: String }
///
/// let order = Order { quantity: 0, note: String::new() };
/// let mut validator = Validator::new();
/// {
///     let mut object = validator.for_source(&order);
///     object.property("Quantity", |o| o.quantity).is_required();
///     object.property("Note", |o| o.note.as_str()).has_max_length(10);
/// }
/// assert!(validator.has_errors());
/// assert_eq!(validator.errors().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Validator {
    errors: Vec<Message>,
}

impl Validator {
    /// Empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded errors, oldest first.
    pub fn errors(&self) -> &[Message] {
        &self.errors
    }

    /// Whether any rule failed.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Consumes the accumulator.
    pub fn into_errors(self) -> Vec<Message> {
        self.errors
    }

    /// Starts rule selection over the properties of `source`.
    pub fn for_source<'a, S: ?Sized>(&'a mut self, source: &'a S) -> ObjectValidator<'a, S> {
        ObjectValidator::new(self, source)
    }

    // ========================================================================
    // ACCUMULATOR OPERATIONS
    // ========================================================================

    /// Records `key` from `source` unless `is_valid`.
    pub fn validate(
        &mut self,
        source: &dyn ResourceSource,
        key: &str,
        tokens: Option<TokenBag>,
        is_valid: bool,
    ) -> &mut Self {
        if !is_valid {
            tracing::debug!(key, source = source.name(), "validation rule failed");
            self.errors
                .push(Message::validation_error(source, key, tokens));
        }
        self
    }

    /// Like [`validate`](Self::validate), evaluating `check` lazily.
    pub fn validate_with(
        &mut self,
        source: &dyn ResourceSource,
        key: &str,
        tokens: Option<TokenBag>,
        check: impl FnOnce() -> bool,
    ) -> &mut Self {
        self.validate(source, key, tokens, check())
    }

    /// Records a built-in message unless `is_valid`.
    pub(crate) fn check(&mut self, is_valid: bool, key: &str, tokens: TokenBag) -> &mut Self {
        self.validate(catalog(), key, Some(tokens), is_valid)
    }

    /// Fails when `value` is absent, empty or only whitespace.
    pub fn validate_property_is_required(
        &mut self,
        property_name: &str,
        value: Option<&str>,
    ) -> &mut Self {
        let blank = value.is_none_or(|text| text.trim().is_empty());
        self.check(
            !blank,
            keys::PROPERTY_REQUIRED,
            tokens! { propertyName = property_name },
        )
    }

    /// Fails when `value` has fewer than `min_length` characters. An absent
    /// value passes.
    ///
    /// # Panics
    ///
    /// When `min_length` is zero.
    pub fn validate_string_min_length(
        &mut self,
        property_name: &str,
        value: Option<&str>,
        min_length: usize,
    ) -> &mut Self {
        assert!(min_length > 0, "min_length must be greater than zero");

        let too_short = value.is_some_and(|text| text.chars().count() < min_length);
        self.check(
            !too_short,
            keys::MIN_STRING_LENGTH_VIOLATION,
            tokens! { propertyName = property_name, minLength = min_length },
        )
    }

    /// Checks the character length of `value`. An absent value passes.
    ///
    /// With `min_length == 0` only the maximum is enforced and the failure
    /// names the maximum alone; otherwise a failure names both bounds.
    ///
    /// # Panics
    ///
    /// When `min_length > max_length`.
    pub fn validate_string_length(
        &mut self,
        property_name: &str,
        value: Option<&str>,
        max_length: usize,
        min_length: usize,
    ) -> &mut Self {
        assert!(
            min_length <= max_length,
            "min_length ({min_length}) cannot be greater than max_length ({max_length})"
        );

        let Some(length) = value.map(|text| text.chars().count()) else {
            return self;
        };

        if min_length == 0 {
            self.check(
                length <= max_length,
                keys::MAX_STRING_LENGTH_EXCEEDED,
                tokens! { propertyName = property_name, maxLength = max_length },
            )
        } else {
            self.check(
                (min_length..=max_length).contains(&length),
                keys::STRING_LENGTH_RANGE_VIOLATION,
                tokens! {
                    propertyName = property_name,
                    minLength = min_length,
                    maxLength = max_length,
                },
            )
        }
    }

    /// Fails when `collection` is absent or empty.
    pub fn validate_collection_has_values<C: Countable + ?Sized>(
        &mut self,
        collection_name: &str,
        collection: &C,
    ) -> &mut Self {
        let has_values = collection.count().is_some_and(|count| count > 0);
        self.check(
            has_values,
            keys::COLLECTION_EMPTY,
            tokens! { collectionName = collection_name },
        )
    }

    /// Drops every recorded error, starting a new pass.
    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

impl ValidationReport for Validator {
    fn validation_errors(&self) -> &[Message] {
        &self.errors
    }
}
