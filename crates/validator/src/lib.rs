//! # outcome-validator
//!
//! A fluent rule engine over the properties of any source object. Failing
//! rules append localized validation-error [`Message`](outcome_core::Message)s
//! to a [`Validator`], which a failure outcome can absorb with
//! [`FailureBuilder::with_validator`](outcome_core::FailureBuilder::with_validator).
//!
//! ## Quick Start
//!
//! ```rust
//! use outcome_core::prelude::*;
//! use outcome_validator::prelude::*;
//!
//! struct Booking { guests: i32, max_guests: i32, name: String }
//!
//! let booking = Booking { guests: 6, max_guests: 4, name: "Lee".into() };
//! let mut validator = Validator::new();
//! {
//!     let mut object = validator.for_source(&booking);
//!     object
//!         .property("Guests", |b| b.guests)
//!         .is_required()
//!         .is_less_than_or_equal_to("MaxGuests", |b| b.max_guests);
//!     object.property("Name", |b| b.name.as_str()).has_length_in_range(2, 40);
//! }
//!
//! let outcome = Outcome::<()>::failure()
//!     .with_validator(&validator, ErrorMode::AllErrors)
//!     .build();
//! assert_eq!(
//!     outcome.messages()[0].invariant_content(),
//!     r#"The "Guests" field must be less than or equal to the "MaxGuests" field."#
//! );
//! ```
//!
//! ## Rule Families
//!
//! - **Comparable**: `i32 i64 u32 u64 f32 f64`, `Decimal`, `NaiveDate`,
//!   `NaiveDateTime`, `DateTime<Utc>` and their `Option` forms
//! - **String**: `&str`, `String`, `Cow<str>` and their `Option` forms
//! - **Collection**: anything [`Countable`](rules::collection::Countable)
//! - **Basic**: any `PartialEq + Default` value

mod object;
pub mod prelude;
pub mod resources;
pub mod rules;
mod validator;

pub use object::{IntoRule, NamedProperty, ObjectValidator, RuleContext};
pub use rules::FluentRule;
pub use rules::basic::BasicRule;
pub use rules::collection::{CollectionRule, Countable};
pub use rules::comparable::{Comparable, ComparableRule, PropertyComparison, RangeBoundaries};
pub use rules::string::StringRule;
pub use validator::Validator;
