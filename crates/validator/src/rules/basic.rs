//! Generic gates for values of any type.

use crate::object::RuleContext;

/// Rule offering only the [`FluentRule`](super::FluentRule) gates.
#[derive(Debug)]
pub struct BasicRule<'r, S: ?Sized> {
    context: RuleContext<'r, S>,
    is_default: bool,
}

impl<'r, S: ?Sized> BasicRule<'r, S> {
    pub(crate) fn new(context: RuleContext<'r, S>, is_default: bool) -> Self {
        Self {
            context,
            is_default,
        }
    }
}

super::fluent_rule!(BasicRule<> => |rule| rule.is_default);
