//! Rule families.
//!
//! | Family | Selected by | Adds |
//! |--------|-------------|------|
//! | [`BasicRule`](basic::BasicRule) | `basic`, `with_basic` | generic gates only |
//! | [`ComparableRule`](comparable::ComparableRule) | numbers and dates | comparisons, ranges |
//! | [`StringRule`](string::StringRule) | strings | blank and length checks |
//! | [`CollectionRule`](collection::CollectionRule) | `collection`, `with_collection` | count checks |

pub mod basic;
pub mod collection;
pub mod comparable;
pub mod string;

use outcome_core::{tokens, ResourceSource, TokenBag};

use crate::resources::keys;
use crate::validator::Validator;

/// Gates shared by every rule family.
///
/// Each method evaluates immediately, appends at most one message and hands
/// the rule back for chaining.
pub trait FluentRule: Sized {
    /// Name of the selected property.
    fn property_name(&self) -> &str;

    /// The accumulator the rule writes to.
    fn validator(&mut self) -> &mut Validator;

    /// Whether the value is the type's empty sentinel: absent, zero, empty
    /// string or default date.
    fn is_default_value(&self) -> bool;

    /// Fails on the empty sentinel.
    fn is_required(mut self) -> Self {
        let tokens = tokens! { propertyName = self.property_name() };
        let is_valid = !self.is_default_value();
        self.validator()
            .check(is_valid, keys::PROPERTY_REQUIRED, tokens);
        self
    }

    /// Fails unless `is_valid`, with the generic invalid-value message.
    fn is_valid(mut self, is_valid: bool) -> Self {
        let tokens = tokens! { propertyName = self.property_name() };
        self.validator().check(is_valid, keys::VALUE_INVALID, tokens);
        self
    }

    /// Lazy form of [`is_valid`](Self::is_valid).
    fn is_valid_with(self, check: impl FnOnce() -> bool) -> Self {
        self.is_valid(check())
    }

    /// Fails unless `is_valid`, with a caller resource.
    fn is_valid_or(
        mut self,
        source: &dyn ResourceSource,
        key: &str,
        tokens: Option<TokenBag>,
        is_valid: bool,
    ) -> Self {
        self.validator().validate(source, key, tokens, is_valid);
        self
    }

    /// Lazy form of [`is_valid_or`](Self::is_valid_or).
    fn is_valid_or_with(
        self,
        source: &dyn ResourceSource,
        key: &str,
        tokens: Option<TokenBag>,
        check: impl FnOnce() -> bool,
    ) -> Self {
        self.is_valid_or(source, key, tokens, check())
    }
}

/// Implements [`FluentRule`] for a rule struct with a `context` field.
macro_rules! fluent_rule {
    ($rule:ident<$($generic:ident),*> => |$this:ident| $is_default:expr) => {
        impl<'r, S: ?Sized $(, $generic: $crate::rules::comparable::Comparable)*>
            $crate::rules::FluentRule for $rule<'r, S $(, $generic)*>
        {
            fn property_name(&self) -> &str {
                &self.context.name
            }

            fn validator(&mut self) -> &mut $crate::validator::Validator {
                self.context.validator
            }

            fn is_default_value(&self) -> bool {
                let $this = self;
                $is_default
            }
        }
    };
}

pub(crate) use fluent_rule;
