//! Property selection over a source object.
//!
//! A property is described by an explicit name and an accessor closure; the
//! value type picks the rule family through [`IntoRule`].

use crate::rules::basic::BasicRule;
use crate::rules::collection::{CollectionRule, Countable};
use crate::validator::Validator;

/// What every rule carries: the accumulator, the source object for
/// cross-property comparisons and the selected property name.
#[derive(Debug)]
pub struct RuleContext<'r, S: ?Sized> {
    pub(crate) validator: &'r mut Validator,
    pub(crate) source: &'r S,
    pub(crate) name: String,
}

impl<'r, S: ?Sized> RuleContext<'r, S> {
    pub(crate) fn new(validator: &'r mut Validator, source: &'r S, name: &str) -> Self {
        Self {
            validator,
            source,
            name: name.to_owned(),
        }
    }
}

/// Converts a selected property value into its typed rule.
pub trait IntoRule<'r, S: ?Sized + 'r> {
    /// The rule family for this value type.
    type Rule;

    /// Wraps the value with its context.
    fn into_rule(self, context: RuleContext<'r, S>) -> Self::Rule;
}

/// Rule selection for one source object, returned by
/// [`Validator::for_source`].
#[derive(Debug)]
pub struct ObjectValidator<'a, S: ?Sized> {
    validator: &'a mut Validator,
    source: &'a S,
}

impl<'a, S: ?Sized> ObjectValidator<'a, S> {
    pub(crate) fn new(validator: &'a mut Validator, source: &'a S) -> Self {
        Self { validator, source }
    }

    /// The underlying accumulator.
    pub fn validator(&mut self) -> &mut Validator {
        self.validator
    }

    fn context(&mut self, name: &str) -> RuleContext<'_, S> {
        RuleContext::new(self.validator, self.source, name)
    }

    /// Selects a property by name and accessor; the value type decides the
    /// rule family (numbers and dates compare, strings check length).
    pub fn property<'r, V, F>(&'r mut self, name: &str, accessor: F) -> V::Rule
    where
        F: FnOnce(&'a S) -> V,
        V: IntoRule<'r, S>,
    {
        let value = accessor(self.source);
        value.into_rule(self.context(name))
    }

    /// Selects a property with only the generic gates (`is_required`,
    /// `is_valid`).
    pub fn basic<'r, V, F>(&'r mut self, name: &str, accessor: F) -> BasicRule<'r, S>
    where
        F: FnOnce(&'a S) -> V,
        V: PartialEq + Default,
    {
        let value = accessor(self.source);
        BasicRule::new(self.context(name), value == V::default())
    }

    /// Selects a collection property.
    pub fn collection<'r, C, F>(&'r mut self, name: &str, accessor: F) -> CollectionRule<'r, S>
    where
        F: FnOnce(&'a S) -> C,
        C: Countable,
    {
        let count = accessor(self.source).count();
        CollectionRule::new(self.context(name), count)
    }

    /// Names a property whose value is supplied in a second step.
    pub fn named<'r>(&'r mut self, name: &str) -> NamedProperty<'r, S> {
        NamedProperty {
            context: self.context(name),
        }
    }
}

/// A property name waiting for its value.
#[derive(Debug)]
#[must_use = "a named property does nothing until a value is supplied"]
pub struct NamedProperty<'r, S: ?Sized> {
    context: RuleContext<'r, S>,
}

impl<'r, S: ?Sized> NamedProperty<'r, S> {
    /// Supplies the value; its type decides the rule family.
    pub fn with_value<V: IntoRule<'r, S>>(self, value: V) -> V::Rule {
        value.into_rule(self.context)
    }

    /// Supplies a value checked only by the generic gates.
    pub fn with_basic<V: PartialEq + Default>(self, value: V) -> BasicRule<'r, S> {
        BasicRule::new(self.context, value == V::default())
    }

    /// Supplies a collection.
    pub fn with_collection<C: Countable>(self, collection: C) -> CollectionRule<'r, S> {
        CollectionRule::new(self.context, collection.count())
    }
}
