//! Count checks for collections.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use outcome_core::tokens;

use crate::object::RuleContext;
use crate::resources::keys;

/// Anything with an element count. `None` means the collection is absent.
pub trait Countable {
    /// Number of elements, or `None` when absent.
    fn count(&self) -> Option<usize>;
}

impl<T> Countable for [T] {
    fn count(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T, const N: usize> Countable for [T; N] {
    fn count(&self) -> Option<usize> {
        Some(N)
    }
}

macro_rules! countable {
    ($($collection:ident<$($param:ident),+>),+ $(,)?) => {
        $(
            impl<$($param),+> Countable for $collection<$($param),+> {
                fn count(&self) -> Option<usize> {
                    Some(self.len())
                }
            }
        )+
    };
}

countable!(
    Vec<T>,
    VecDeque<T>,
    HashSet<T, H>,
    HashMap<K, V, H>,
    BTreeSet<T>,
    BTreeMap<K, V>,
);

impl<C: Countable + ?Sized> Countable for &C {
    fn count(&self) -> Option<usize> {
        (**self).count()
    }
}

impl<C: Countable> Countable for Option<C> {
    fn count(&self) -> Option<usize> {
        self.as_ref().and_then(Countable::count)
    }
}

/// Rule for collection properties. An absent collection counts as empty for
/// the count checks and fails `is_required`.
#[derive(Debug)]
pub struct CollectionRule<'r, S: ?Sized> {
    context: RuleContext<'r, S>,
    count: Option<usize>,
}

super::fluent_rule!(CollectionRule<> => |rule| rule.count.is_none());

impl<'r, S: ?Sized> CollectionRule<'r, S> {
    pub(crate) fn new(context: RuleContext<'r, S>, count: Option<usize>) -> Self {
        Self { context, count }
    }

    /// Element count, `None` when absent.
    pub fn count(&self) -> Option<usize> {
        self.count
    }

    /// Fails when absent or empty.
    pub fn has_values(self) -> Self {
        let tokens = tokens! { collectionName = self.context.name.as_str() };
        let is_valid = self.count.is_some_and(|count| count > 0);
        self.context
            .validator
            .check(is_valid, keys::COLLECTION_EMPTY, tokens);
        self
    }

    /// Fails with fewer than `min_count` elements.
    pub fn has_min_values(self, min_count: usize) -> Self {
        let tokens = tokens! {
            collectionName = self.context.name.as_str(),
            count = min_count,
        };
        let is_valid = self.count.unwrap_or(0) >= min_count;
        self.context
            .validator
            .check(is_valid, keys::COLLECTION_NOT_ENOUGH_VALUES, tokens);
        self
    }

    /// Fails with more than `max_count` elements.
    pub fn has_max_values(self, max_count: usize) -> Self {
        let tokens = tokens! {
            collectionName = self.context.name.as_str(),
            count = max_count,
        };
        let is_valid = self.count.unwrap_or(0) <= max_count;
        self.context
            .validator
            .check(is_valid, keys::COLLECTION_TOO_MANY_VALUES, tokens);
        self
    }
}
