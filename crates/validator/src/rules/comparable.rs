//! Comparisons and ranges for ordered values.
//!
//! One rule serves every numeric and date family. Each concrete type is
//! registered with `comparable!`, which also wires its `Option` form as the
//! nullable variant.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use outcome_core::{tokens, TokenBag, TokenValue};
use rust_decimal::Decimal;

use crate::object::{IntoRule, RuleContext};
use crate::resources::keys;

// ============================================================================
// COMPARABLE VALUES
// ============================================================================

/// A value type the comparison rules accept.
///
/// `Default` is the sentinel that fails `is_required` on non-nullable
/// properties: zero for numbers, the Unix epoch for dates.
pub trait Comparable: PartialOrd + Copy + Default + Into<TokenValue> {}

macro_rules! comparable {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Comparable for $ty {}

            impl<'r, S: ?Sized + 'r> IntoRule<'r, S> for $ty {
                type Rule = ComparableRule<'r, S, $ty>;

                fn into_rule(self, context: RuleContext<'r, S>) -> Self::Rule {
                    ComparableRule::new(context, Some(self), false)
                }
            }

            impl<'r, S: ?Sized + 'r> IntoRule<'r, S> for Option<$ty> {
                type Rule = ComparableRule<'r, S, $ty>;

                fn into_rule(self, context: RuleContext<'r, S>) -> Self::Rule {
                    ComparableRule::new(context, self, true)
                }
            }
        )+
    };
}

comparable!(
    i32,
    i64,
    u32,
    u64,
    f32,
    f64,
    Decimal,
    NaiveDate,
    NaiveDateTime,
    DateTime<Utc>,
);

/// Which range ends are included by
/// [`has_value_in_range`](ComparableRule::has_value_in_range).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RangeBoundaries {
    /// `min <= value <= max`.
    #[default]
    AllInclusive,
    /// `min <= value < max`.
    MinInclusive,
    /// `min < value <= max`.
    MaxInclusive,
    /// `min < value < max`.
    Exclusive,
}

impl RangeBoundaries {
    fn contains<T: PartialOrd>(self, value: &T, min: &T, max: &T) -> bool {
        match self {
            Self::AllInclusive => value >= min && value <= max,
            Self::MinInclusive => value >= min && value < max,
            Self::MaxInclusive => value > min && value <= max,
            Self::Exclusive => value > min && value < max,
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::AllInclusive => keys::NOT_WITHIN_INCLUSIVE_RANGE,
            Self::MinInclusive => keys::NOT_WITHIN_MIN_INCLUSIVE_RANGE,
            Self::MaxInclusive => keys::NOT_WITHIN_MAX_INCLUSIVE_RANGE,
            Self::Exclusive => keys::NOT_WITHIN_EXCLUSIVE_RANGE,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Comparison {
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
}

impl Comparison {
    /// Absent operands never satisfy a comparison.
    fn holds<T: PartialOrd>(self, left: Option<T>, right: Option<T>) -> bool {
        let (Some(left), Some(right)) = (left, right) else {
            return false;
        };
        match self {
            Self::Greater => left > right,
            Self::GreaterOrEqual => left >= right,
            Self::Less => left < right,
            Self::LessOrEqual => left <= right,
        }
    }

    fn property_key(self) -> &'static str {
        match self {
            Self::Greater => keys::NOT_GREATER_THAN,
            Self::GreaterOrEqual => keys::NOT_GREATER_THAN_OR_EQUAL,
            Self::Less => keys::NOT_LESS_THAN,
            Self::LessOrEqual => keys::NOT_LESS_THAN_OR_EQUAL,
        }
    }

    fn value_key(self) -> &'static str {
        match self {
            Self::Greater => keys::NOT_GREATER_THAN_VALUE,
            Self::GreaterOrEqual => keys::NOT_GREATER_THAN_OR_EQUAL_TO_VALUE,
            Self::Less => keys::NOT_LESS_THAN_VALUE,
            Self::LessOrEqual => keys::NOT_LESS_THAN_OR_EQUAL_TO_VALUE,
        }
    }
}

// ============================================================================
// RULE
// ============================================================================

/// Rule for numbers and dates.
#[derive(Debug)]
pub struct ComparableRule<'r, S: ?Sized, T> {
    context: RuleContext<'r, S>,
    value: Option<T>,
    nullable: bool,
}

super::fluent_rule!(ComparableRule<T> => |rule| if rule.nullable {
    rule.value.is_none()
} else {
    rule.value.is_none_or(|value| value == T::default())
});

impl<'r, S: ?Sized, T: Comparable> ComparableRule<'r, S, T> {
    pub(crate) fn new(context: RuleContext<'r, S>, value: Option<T>, nullable: bool) -> Self {
        Self {
            context,
            value,
            nullable,
        }
    }

    /// The selected value.
    pub fn value(&self) -> Option<T> {
        self.value
    }

    fn check(self, is_valid: bool, key: &str, tokens: TokenBag) -> Self {
        self.context.validator.check(is_valid, key, tokens);
        self
    }

    fn against_property(self, comparison: Comparison, other_name: &str, other: Option<T>) -> Self {
        let tokens = tokens! {
            propertyNameOne = self.context.name.as_str(),
            propertyNameTwo = other_name,
        };
        let is_valid = comparison.holds(self.value, other);
        self.check(is_valid, comparison.property_key(), tokens)
    }

    fn against_value(self, comparison: Comparison, value: Option<T>) -> Self {
        let tokens = tokens! {
            propertyName = self.context.name.as_str(),
            value = value,
        };
        let is_valid = comparison.holds(self.value, value);
        self.check(is_valid, comparison.value_key(), tokens)
    }

    fn other_property<O, F>(&self, accessor: F) -> Option<T>
    where
        F: FnOnce(&'r S) -> O,
        O: Into<Option<T>>,
    {
        accessor(self.context.source).into()
    }

    // ------------------------------------------------------------------------
    // against another property of the source
    // ------------------------------------------------------------------------

    /// Fails unless the value is greater than the `other_name` property.
    pub fn is_greater_than<O, F>(self, other_name: &str, accessor: F) -> Self
    where
        F: FnOnce(&'r S) -> O,
        O: Into<Option<T>>,
    {
        let other = self.other_property(accessor);
        self.against_property(Comparison::Greater, other_name, other)
    }

    /// Fails unless the value is greater than or equal to the `other_name`
    /// property.
    pub fn is_greater_than_or_equal_to<O, F>(self, other_name: &str, accessor: F) -> Self
    where
        F: FnOnce(&'r S) -> O,
        O: Into<Option<T>>,
    {
        let other = self.other_property(accessor);
        self.against_property(Comparison::GreaterOrEqual, other_name, other)
    }

    /// Fails unless the value is less than the `other_name` property.
    pub fn is_less_than<O, F>(self, other_name: &str, accessor: F) -> Self
    where
        F: FnOnce(&'r S) -> O,
        O: Into<Option<T>>,
    {
        let other = self.other_property(accessor);
        self.against_property(Comparison::Less, other_name, other)
    }

    /// Fails unless the value is less than or equal to the `other_name`
    /// property.
    pub fn is_less_than_or_equal_to<O, F>(self, other_name: &str, accessor: F) -> Self
    where
        F: FnOnce(&'r S) -> O,
        O: Into<Option<T>>,
    {
        let other = self.other_property(accessor);
        self.against_property(Comparison::LessOrEqual, other_name, other)
    }

    // ------------------------------------------------------------------------
    // against a named property whose value comes next
    // ------------------------------------------------------------------------

    /// Two-step form of [`is_greater_than`](Self::is_greater_than).
    pub fn is_greater_than_named(self, other_name: &str) -> PropertyComparison<'r, S, T> {
        PropertyComparison::new(self, Comparison::Greater, other_name)
    }

    /// Two-step form of
    /// [`is_greater_than_or_equal_to`](Self::is_greater_than_or_equal_to).
    pub fn is_greater_than_or_equal_to_named(self, other_name: &str) -> PropertyComparison<'r, S, T> {
        PropertyComparison::new(self, Comparison::GreaterOrEqual, other_name)
    }

    /// Two-step form of [`is_less_than`](Self::is_less_than).
    pub fn is_less_than_named(self, other_name: &str) -> PropertyComparison<'r, S, T> {
        PropertyComparison::new(self, Comparison::Less, other_name)
    }

    /// Two-step form of
    /// [`is_less_than_or_equal_to`](Self::is_less_than_or_equal_to).
    pub fn is_less_than_or_equal_to_named(self, other_name: &str) -> PropertyComparison<'r, S, T> {
        PropertyComparison::new(self, Comparison::LessOrEqual, other_name)
    }

    // ------------------------------------------------------------------------
    // against a literal
    // ------------------------------------------------------------------------

    /// Fails unless the value is greater than `value`.
    pub fn is_greater_than_value(self, value: impl Into<Option<T>>) -> Self {
        self.against_value(Comparison::Greater, value.into())
    }

    /// Fails unless the value is greater than or equal to `value`.
    pub fn is_greater_than_or_equal_to_value(self, value: impl Into<Option<T>>) -> Self {
        self.against_value(Comparison::GreaterOrEqual, value.into())
    }

    /// Fails unless the value is less than `value`.
    pub fn is_less_than_value(self, value: impl Into<Option<T>>) -> Self {
        self.against_value(Comparison::Less, value.into())
    }

    /// Fails unless the value is less than or equal to `value`.
    pub fn is_less_than_or_equal_to_value(self, value: impl Into<Option<T>>) -> Self {
        self.against_value(Comparison::LessOrEqual, value.into())
    }

    // ------------------------------------------------------------------------
    // range
    // ------------------------------------------------------------------------

    /// Fails unless the value lies between `min` and `max` with the given
    /// ends included. An absent value fails.
    ///
    /// # Panics
    ///
    /// When `min > max` or the bounds are unordered.
    pub fn has_value_in_range(self, min: T, max: T, boundaries: RangeBoundaries) -> Self {
        assert!(
            min <= max,
            "range minimum must not be greater than its maximum"
        );

        let tokens = tokens! {
            propertyName = self.context.name.as_str(),
            min = min,
            max = max,
        };
        let is_valid = self
            .value
            .is_some_and(|value| boundaries.contains(&value, &min, &max));
        self.check(is_valid, boundaries.key(), tokens)
    }
}

// ============================================================================
// TWO-STEP COMPARISON
// ============================================================================

/// A comparison against a named property, completed by
/// [`with_value`](Self::with_value).
#[derive(Debug)]
#[must_use = "the comparison runs when `with_value` is called"]
pub struct PropertyComparison<'r, S: ?Sized, T> {
    rule: ComparableRule<'r, S, T>,
    comparison: Comparison,
    other_name: String,
}

impl<'r, S: ?Sized, T: Comparable> PropertyComparison<'r, S, T> {
    fn new(rule: ComparableRule<'r, S, T>, comparison: Comparison, other_name: &str) -> Self {
        Self {
            rule,
            comparison,
            other_name: other_name.to_owned(),
        }
    }

    /// Supplies the other property's value and runs the comparison.
    pub fn with_value(self, value: impl Into<Option<T>>) -> ComparableRule<'r, S, T> {
        self.rule
            .against_property(self.comparison, &self.other_name, value.into())
    }
}
