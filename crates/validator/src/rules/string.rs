//! Blank and length checks for text.

use std::borrow::Cow;

use crate::object::{IntoRule, RuleContext};

/// Rule for string properties. Lengths count characters, and an absent
/// string passes every length check.
#[derive(Debug)]
pub struct StringRule<'r, S: ?Sized> {
    context: RuleContext<'r, S>,
    value: Option<Cow<'r, str>>,
}

super::fluent_rule!(StringRule<> => |rule| rule.value.as_deref().is_none_or(str::is_empty));

impl<'r, S: ?Sized> StringRule<'r, S> {
    fn new(context: RuleContext<'r, S>, value: Option<Cow<'r, str>>) -> Self {
        Self { context, value }
    }

    /// The selected value.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Fails when the value is absent, empty or only whitespace.
    pub fn is_not_null_or_white_space(self) -> Self {
        self.context
            .validator
            .validate_property_is_required(&self.context.name, self.value.as_deref());
        self
    }

    /// Fails when shorter than `min_length`.
    ///
    /// # Panics
    ///
    /// When `min_length` is zero.
    pub fn has_min_length(self, min_length: usize) -> Self {
        self.context.validator.validate_string_min_length(
            &self.context.name,
            self.value.as_deref(),
            min_length,
        );
        self
    }

    /// Fails when longer than `max_length`.
    pub fn has_max_length(self, max_length: usize) -> Self {
        self.context.validator.validate_string_length(
            &self.context.name,
            self.value.as_deref(),
            max_length,
            0,
        );
        self
    }

    /// Fails when the length is outside `min_length..=max_length`.
    ///
    /// # Panics
    ///
    /// When `min_length > max_length`.
    pub fn has_length_in_range(self, min_length: usize, max_length: usize) -> Self {
        self.context.validator.validate_string_length(
            &self.context.name,
            self.value.as_deref(),
            max_length,
            min_length,
        );
        self
    }
}

macro_rules! string_rule {
    ($lt:lifetime: $($value:ty => |$v:ident| $convert:expr),+ $(,)?) => {
        $(
            impl<$lt, S: ?Sized + $lt> IntoRule<$lt, S> for $value {
                type Rule = StringRule<$lt, S>;

                fn into_rule(self, context: RuleContext<$lt, S>) -> Self::Rule {
                    let $v = self;
                    StringRule::new(context, $convert)
                }
            }
        )+
    };
}

string_rule! { 'r:
    &'r str => |v| Some(Cow::Borrowed(v)),
    &'r String => |v| Some(Cow::Borrowed(v.as_str())),
    String => |v| Some(Cow::Owned(v)),
    Cow<'r, str> => |v| Some(v),
    Option<&'r str> => |v| v.map(Cow::Borrowed),
    Option<&'r String> => |v| v.map(|s| Cow::Borrowed(s.as_str())),
    Option<String> => |v| v.map(Cow::Owned),
    Option<Cow<'r, str>> => |v| v,
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    struct Profile {
        name: String,
        nickname: Option<String>,
    }

    fn profile(name: &str, nickname: Option<&str>) -> Profile {
        Profile {
            name: name.to_owned(),
            nickname: nickname.map(str::to_owned),
        }
    }

    #[rstest]
    #[case("", true)]
    #[case(" ", false)]
    #[case("Ann", false)]
    fn required_rejects_empty_only(#[case] name: &str, #[case] fails: bool) {
        let profile = profile(name, None);
        let mut validator = Validator::new();
        validator
            .for_source(&profile)
            .property("Name", |p| p.name.as_str())
            .is_required();
        assert_eq!(validator.has_errors(), fails);
    }

    #[test]
    fn not_blank_rejects_whitespace() {
        let profile = profile("  ", None);
        let mut validator = Validator::new();
        validator
            .for_source(&profile)
            .property("Name", |p| &p.name)
            .is_not_null_or_white_space();
        assert_eq!(
            validator.errors()[0].invariant_content(),
            r#"The "Name" field is required."#
        );
    }

    #[test]
    fn absent_string_skips_length_checks() {
        let profile = profile("Ann", None);
        let mut validator = Validator::new();
        validator
            .for_source(&profile)
            .property("Nickname", |p| p.nickname.as_deref())
            .has_min_length(2)
            .has_max_length(5)
            .has_length_in_range(2, 5);
        assert!(!validator.has_errors());
    }

    #[test]
    fn absent_string_fails_required() {
        let profile = profile("Ann", None);
        let mut validator = Validator::new();
        validator
            .for_source(&profile)
            .property("Nickname", |p| p.nickname.clone())
            .is_required();
        assert!(validator.has_errors());
    }

    #[test]
    fn length_checks_each_emit_one_message() {
        let profile = profile("Bartholomew", Some("B"));
        let mut validator = Validator::new();
        {
            let mut object = validator.for_source(&profile);
            object
                .property("Name", |p| p.name.as_str())
                .has_max_length(5)
                .has_length_in_range(2, 8);
            object
                .property("Nickname", |p| p.nickname.as_deref())
                .has_min_length(2);
        }
        let errors: Vec<_> = validator
            .errors()
            .iter()
            .map(|m| m.invariant_content())
            .collect();
        assert_eq!(
            errors,
            [
                r#"The field "Name" must be a string with a maximum length of 5."#,
                r#"The field "Name" must be a string with a minimum length of 2 and a maximum length of 8."#,
                r#"The field "Nickname" must be a string with a minimum length of 2."#,
            ]
        );
    }
}
