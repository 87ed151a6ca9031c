//! Built-in validation message templates.
//!
//! English is the neutral table; French is bundled. Hosts can layer their own
//! translations by merging catalogs and passing them to the `*_or` rules.

use std::sync::LazyLock;

use outcome_core::ResourceCatalog;

/// Resource keys of the built-in catalog.
pub mod keys {
    pub const PROPERTY_REQUIRED: &str = "Message_Property_Required";
    pub const VALUE_INVALID: &str = "Message_Value_Invalid";

    pub const NOT_GREATER_THAN: &str = "Message_Value_NotGreaterThan";
    pub const NOT_GREATER_THAN_OR_EQUAL: &str = "Message_Value_NotGreaterThanOrEqual";
    pub const NOT_LESS_THAN: &str = "Message_Value_NotLessThan";
    pub const NOT_LESS_THAN_OR_EQUAL: &str = "Message_Value_NotLessThanOrEqual";

    pub const NOT_GREATER_THAN_VALUE: &str = "Message_Value_NotGreaterThanValue";
    pub const NOT_GREATER_THAN_OR_EQUAL_TO_VALUE: &str =
        "Message_Value_NotGreaterThanOrEqualToValue";
    pub const NOT_LESS_THAN_VALUE: &str = "Message_Value_NotLessThanValue";
    pub const NOT_LESS_THAN_OR_EQUAL_TO_VALUE: &str = "Message_Value_NotLessThanOrEqualToValue";

    pub const NOT_WITHIN_INCLUSIVE_RANGE: &str = "Message_Value_NotWithinInclusiveRange";
    pub const NOT_WITHIN_MIN_INCLUSIVE_RANGE: &str = "Message_Value_NotWithinMinInclusiveRange";
    pub const NOT_WITHIN_MAX_INCLUSIVE_RANGE: &str = "Message_Value_NotWithinMaxInclusiveRange";
    pub const NOT_WITHIN_EXCLUSIVE_RANGE: &str = "Message_Value_NotWithinExclusiveRange";

    pub const MIN_STRING_LENGTH_VIOLATION: &str = "Message_MinStringLength_Violation";
    pub const MAX_STRING_LENGTH_EXCEEDED: &str = "Message_MaxStringLength_Exceeded";
    pub const STRING_LENGTH_RANGE_VIOLATION: &str = "Message_StringLengthRange_Violation";

    pub const COLLECTION_EMPTY: &str = "Message_Collection_Empty";
    pub const COLLECTION_NOT_ENOUGH_VALUES: &str = "Message_Collection_NotEnoughValues";
    pub const COLLECTION_TOO_MANY_VALUES: &str = "Message_Collection_TooManyValues";
}

const NEUTRAL: &[(&str, &str)] = &[
    (keys::PROPERTY_REQUIRED, r#"The "{propertyName}" field is required."#),
    (keys::VALUE_INVALID, r#"The "{propertyName}" field is not valid."#),
    (
        keys::NOT_GREATER_THAN,
        r#"The "{propertyNameOne}" field must be greater than the "{propertyNameTwo}" field."#,
    ),
    (
        keys::NOT_GREATER_THAN_OR_EQUAL,
        r#"The "{propertyNameOne}" field must be greater than or equal to the "{propertyNameTwo}" field."#,
    ),
    (
        keys::NOT_LESS_THAN,
        r#"The "{propertyNameOne}" field must be less than the "{propertyNameTwo}" field."#,
    ),
    (
        keys::NOT_LESS_THAN_OR_EQUAL,
        r#"The "{propertyNameOne}" field must be less than or equal to the "{propertyNameTwo}" field."#,
    ),
    (
        keys::NOT_GREATER_THAN_VALUE,
        r#"The "{propertyName}" field must be greater than {value}."#,
    ),
    (
        keys::NOT_GREATER_THAN_OR_EQUAL_TO_VALUE,
        r#"The "{propertyName}" field must be greater than or equal to {value}."#,
    ),
    (
        keys::NOT_LESS_THAN_VALUE,
        r#"The "{propertyName}" field must be less than {value}."#,
    ),
    (
        keys::NOT_LESS_THAN_OR_EQUAL_TO_VALUE,
        r#"The "{propertyName}" field must be less than or equal to {value}."#,
    ),
    (
        keys::NOT_WITHIN_INCLUSIVE_RANGE,
        r#"The "{propertyName}" field must be greater than or equal to "{min}" and less than or equal to "{max}"."#,
    ),
    (
        keys::NOT_WITHIN_MIN_INCLUSIVE_RANGE,
        r#"The "{propertyName}" field must be greater than or equal to "{min}" and less than "{max}"."#,
    ),
    (
        keys::NOT_WITHIN_MAX_INCLUSIVE_RANGE,
        r#"The "{propertyName}" field must be greater than "{min}" and less than or equal to "{max}"."#,
    ),
    (
        keys::NOT_WITHIN_EXCLUSIVE_RANGE,
        r#"The "{propertyName}" field must be greater than "{min}" and less than "{max}"."#,
    ),
    (
        keys::MIN_STRING_LENGTH_VIOLATION,
        r#"The field "{propertyName}" must be a string with a minimum length of {minLength}."#,
    ),
    (
        keys::MAX_STRING_LENGTH_EXCEEDED,
        r#"The field "{propertyName}" must be a string with a maximum length of {maxLength}."#,
    ),
    (
        keys::STRING_LENGTH_RANGE_VIOLATION,
        r#"The field "{propertyName}" must be a string with a minimum length of {minLength} and a maximum length of {maxLength}."#,
    ),
    (
        keys::COLLECTION_EMPTY,
        r#"The "{collectionName}" collection must contain at least one value."#,
    ),
    (
        keys::COLLECTION_NOT_ENOUGH_VALUES,
        r#"The "{collectionName}" collection must contain at least {count} value(s)."#,
    ),
    (
        keys::COLLECTION_TOO_MANY_VALUES,
        r#"The "{collectionName}" collection cannot contain more than {count} value(s)."#,
    ),
];

const FRENCH: &[(&str, &str)] = &[
    (keys::PROPERTY_REQUIRED, r#"Le champ « {propertyName} » est obligatoire."#),
    (keys::VALUE_INVALID, r#"Le champ « {propertyName} » n'est pas valide."#),
    (
        keys::NOT_GREATER_THAN,
        r#"Le champ « {propertyNameOne} » doit être supérieur au champ « {propertyNameTwo} »."#,
    ),
    (
        keys::NOT_GREATER_THAN_OR_EQUAL,
        r#"Le champ « {propertyNameOne} » doit être supérieur ou égal au champ « {propertyNameTwo} »."#,
    ),
    (
        keys::NOT_LESS_THAN,
        r#"Le champ « {propertyNameOne} » doit être inférieur au champ « {propertyNameTwo} »."#,
    ),
    (
        keys::NOT_LESS_THAN_OR_EQUAL,
        r#"Le champ « {propertyNameOne} » doit être inférieur ou égal au champ « {propertyNameTwo} »."#,
    ),
    (
        keys::NOT_GREATER_THAN_VALUE,
        r#"Le champ « {propertyName} » doit être supérieur à {value}."#,
    ),
    (
        keys::NOT_GREATER_THAN_OR_EQUAL_TO_VALUE,
        r#"Le champ « {propertyName} » doit être supérieur ou égal à {value}."#,
    ),
    (
        keys::NOT_LESS_THAN_VALUE,
        r#"Le champ « {propertyName} » doit être inférieur à {value}."#,
    ),
    (
        keys::NOT_LESS_THAN_OR_EQUAL_TO_VALUE,
        r#"Le champ « {propertyName} » doit être inférieur ou égal à {value}."#,
    ),
    (
        keys::NOT_WITHIN_INCLUSIVE_RANGE,
        r#"Le champ « {propertyName} » doit être supérieur ou égal à « {min} » et inférieur ou égal à « {max} »."#,
    ),
    (
        keys::NOT_WITHIN_MIN_INCLUSIVE_RANGE,
        r#"Le champ « {propertyName} » doit être supérieur ou égal à « {min} » et inférieur à « {max} »."#,
    ),
    (
        keys::NOT_WITHIN_MAX_INCLUSIVE_RANGE,
        r#"Le champ « {propertyName} » doit être supérieur à « {min} » et inférieur ou égal à « {max} »."#,
    ),
    (
        keys::NOT_WITHIN_EXCLUSIVE_RANGE,
        r#"Le champ « {propertyName} » doit être supérieur à « {min} » et inférieur à « {max} »."#,
    ),
    (
        keys::MIN_STRING_LENGTH_VIOLATION,
        r#"Le champ « {propertyName} » doit être une chaîne d'une longueur minimale de {minLength}."#,
    ),
    (
        keys::MAX_STRING_LENGTH_EXCEEDED,
        r#"Le champ « {propertyName} » doit être une chaîne d'une longueur maximale de {maxLength}."#,
    ),
    (
        keys::STRING_LENGTH_RANGE_VIOLATION,
        r#"Le champ « {propertyName} » doit être une chaîne d'une longueur comprise entre {minLength} et {maxLength}."#,
    ),
    (
        keys::COLLECTION_EMPTY,
        r#"La collection « {collectionName} » doit contenir au moins une valeur."#,
    ),
    (
        keys::COLLECTION_NOT_ENOUGH_VALUES,
        r#"La collection « {collectionName} » doit contenir au moins {count} valeur(s)."#,
    ),
    (
        keys::COLLECTION_TOO_MANY_VALUES,
        r#"La collection « {collectionName} » ne peut pas contenir plus de {count} valeur(s)."#,
    ),
];

static CATALOG: LazyLock<ResourceCatalog> = LazyLock::new(|| {
    ResourceCatalog::new("outcome-validator")
        .with_neutral(NEUTRAL.iter().copied())
        .with_locale("fr", FRENCH.iter().copied())
});

/// The built-in validation catalog.
pub fn catalog() -> &'static ResourceCatalog {
    &CATALOG
}
