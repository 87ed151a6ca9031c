//! Property tests for the token formatter and key case conversion.

use outcome_core::case::{to_kebab_case, to_snake_case};
use outcome_core::format::{format, lower_camel_case_tokens};
use outcome_core::TokenBag;
use proptest::prelude::*;

proptest! {
    #[test]
    fn no_bag_returns_template_unchanged(template in ".*") {
        prop_assert_eq!(format(&template, None), template);
    }

    #[test]
    fn brace_free_templates_are_unchanged(template in "[^{}]*", value in ".*") {
        let bag = TokenBag::new().with("name", value);
        prop_assert_eq!(format(&template, Some(&bag)), template);
    }

    #[test]
    fn text_token_substitutes_regardless_of_case(
        name in "[a-z][a-z0-9_]{0,8}",
        value in "[^{}]*",
    ) {
        let bag = TokenBag::new().with(name.to_uppercase(), value.clone());
        let template = format!("<{{ {name} }}>");
        prop_assert_eq!(format(&template, Some(&bag)), format!("<{value}>"));
    }

    #[test]
    fn unresolved_token_returns_template(name in "[a-z]{1,8}") {
        let bag = TokenBag::new().with(format!("{name}_other"), 1);
        let template = format!("value: {{{name}}}");
        prop_assert_eq!(format(&template, Some(&bag)), template);
    }

    #[test]
    fn lower_camel_case_is_idempotent(template in "[A-Za-z {}:0-9]*") {
        let once = lower_camel_case_tokens(&template);
        prop_assert_eq!(lower_camel_case_tokens(&once), once.clone());
        prop_assert_eq!(once.len(), template.len());
    }

    #[test]
    fn kebab_case_is_lower_and_collapsed(key in "[A-Za-z_]{1,24}") {
        let code = to_kebab_case(&key);
        prop_assert!(!code.chars().any(|c| c.is_ascii_uppercase()));
        prop_assert!(!code.contains("--"));
        prop_assert!(!code.contains('_'));
    }

    #[test]
    fn snake_case_mirrors_kebab_case(key in "[A-Za-z_]{1,24}") {
        prop_assert_eq!(to_snake_case(&key).replace('_', "-"), to_kebab_case(&key));
    }
}
