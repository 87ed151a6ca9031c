//! `use outcome_validator::prelude::*;` brings in the accumulator, the rule
//! trait and the boundary modes.

pub use crate::rules::FluentRule;
pub use crate::rules::collection::Countable;
pub use crate::rules::comparable::RangeBoundaries;
pub use crate::validator::Validator;
