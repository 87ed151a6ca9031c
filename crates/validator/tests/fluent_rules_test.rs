//! End-to-end rule evaluation across value families and locales.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use outcome_core::prelude::*;
use outcome_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use rust_decimal::Decimal;

#[derive(Debug, Default)]
struct Source {
    int_property: i32,
    other_int_property: i32,
    nullable_int: Option<i32>,
    big: i64,
    unsigned: u64,
    ratio: f32,
    price: Decimal,
    birthday: NaiveDate,
    created: NaiveDateTime,
    updated: Option<DateTime<Utc>>,
    tags: Vec<String>,
}

fn invariant(validator: &Validator) -> Vec<&str> {
    validator
        .errors()
        .iter()
        .map(Message::invariant_content)
        .collect()
}

// ============================================================================
// CROSS-PROPERTY COMPARISON
// ============================================================================

#[rstest]
#[case(5, 4, 0)]
#[case(4, 4, 1)]
#[case(3, 4, 1)]
fn greater_than_named_with_value(
    #[case] int_property: i32,
    #[case] other_value: i32,
    #[case] expected: usize,
) {
    let source = Source {
        int_property,
        ..Source::default()
    };
    let mut validator = Validator::new();
    validator
        .for_source(&source)
        .property("IntProperty", |s| s.int_property)
        .is_greater_than_named("OtherIntProperty")
        .with_value(other_value);

    assert_eq!(validator.errors().len(), expected);
    if expected == 1 {
        let message = &validator.errors()[0];
        assert_eq!(message.kind(), MessageKind::ValidationError);
        assert_eq!(message.code(), "value-not-greater-than");
        assert_eq!(
            message.invariant_content(),
            r#"The "IntProperty" field must be greater than the "OtherIntProperty" field."#
        );
    }
}

#[test]
fn accessor_comparison_accepts_nullable_other() {
    let source = Source {
        int_property: 2,
        other_int_property: 2,
        nullable_int: Some(1),
        ..Source::default()
    };
    let mut validator = Validator::new();
    validator
        .for_source(&source)
        .property("IntProperty", |s| s.int_property)
        .is_greater_than_or_equal_to("OtherIntProperty", |s| s.other_int_property)
        .is_greater_than("NullableInt", |s| s.nullable_int);
    assert!(!validator.has_errors());
}

// ============================================================================
// VALUE FAMILIES
// ============================================================================

#[test]
fn every_family_reports_its_failures() {
    let source = Source {
        big: i64::MAX,
        unsigned: 3,
        ratio: 0.5,
        price: Decimal::new(1999, 2),
        birthday: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap_or_default(),
        created: NaiveDateTime::default(),
        updated: None,
        ..Source::default()
    };
    let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap_or_default();

    let mut validator = Validator::new();
    {
        let mut object = validator.for_source(&source);
        object.property("Big", |s| s.big).is_less_than_value(i64::MAX);
        object
            .property("Unsigned", |s| s.unsigned)
            .has_value_in_range(1, 3, RangeBoundaries::MaxInclusive);
        object
            .property("Ratio", |s| s.ratio)
            .has_value_in_range(0.0, 1.0, RangeBoundaries::Exclusive);
        object
            .property("Price", |s| s.price)
            .is_less_than_or_equal_to_value(Decimal::new(1500, 2));
        object
            .property("Birthday", |s| s.birthday)
            .is_less_than_value(today);
        object.property("Created", |s| s.created).is_required();
        object
            .property("Updated", |s| s.updated)
            .is_greater_than_value(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).single());
    }

    assert_eq!(
        invariant(&validator),
        [
            r#"The "Big" field must be less than 9223372036854775807."#,
            r#"The "Price" field must be less than or equal to 15.00."#,
            r#"The "Birthday" field must be less than 10/16/2026."#,
            r#"The "Created" field is required."#,
            r#"The "Updated" field must be greater than 01/01/2020 00:00:00."#,
        ]
    );
}

#[test]
fn collection_and_basic_selection_by_name() {
    let source = Source::default();
    let mut validator = Validator::new();
    {
        let mut object = validator.for_source(&source);
        object.collection("Tags", |s| &s.tags).has_values();
        object.named("Code").with_value("").is_required();
        object.named("Flags").with_collection([1, 2, 3]).has_max_values(2);
        object.named("Enabled").with_basic(false).is_required();
    }
    assert_eq!(
        invariant(&validator),
        [
            r#"The "Tags" collection must contain at least one value."#,
            r#"The "Code" field is required."#,
            r#"The "Flags" collection cannot contain more than 2 value(s)."#,
            r#"The "Enabled" field is required."#,
        ]
    );
}

// ============================================================================
// LOCALIZATION AND OUTCOME INTEGRATION
// ============================================================================

#[test]
fn messages_follow_the_active_locale() {
    let source = Source::default();
    let mut validator = Validator::new();
    {
        let _scope = with_locale(Some("fr-CA"));
        validator
            .for_source(&source)
            .property("IntProperty", |s| s.int_property)
            .is_required();
    }
    let message = &validator.errors()[0];
    assert_eq!(message.language_code(), "fr-CA");
    assert_eq!(
        message.content(),
        "Le champ « IntProperty » est obligatoire."
    );
    assert_eq!(
        message.invariant_content(),
        r#"The "IntProperty" field is required."#
    );
    assert_eq!(message.template(), Some("Le champ « {propertyName} » est obligatoire."));
}

#[test]
fn custom_resources_through_is_valid_or() {
    let catalog = ResourceCatalog::new("bookings")
        .with_neutral([("Message_Booking_Overlap", "{Room} is already booked.")])
        .with_locale("es", [("Message_Booking_Overlap", "{Room} ya está reservada.")]);
    let source = Source::default();
    let mut validator = Validator::new();
    {
        let _scope = with_locale(Some("es"));
        validator
            .for_source(&source)
            .basic("Room", |s| s.int_property)
            .is_valid_or(
                &catalog,
                "Message_Booking_Overlap",
                Some(tokens! { room = "Sala 2" }),
                false,
            )
            .is_valid_or_with(&catalog, "Message_Booking_Overlap", None, || true);
    }
    let message = &validator.errors()[0];
    assert_eq!(validator.errors().len(), 1);
    assert_eq!(message.content(), "Sala 2 ya está reservada.");
    assert_eq!(message.template(), Some("{room} ya está reservada."));
    assert_eq!(message.code(), "booking-overlap");
}

#[rstest]
#[case(ErrorMode::FirstError, 1)]
#[case(ErrorMode::AllErrors, 3)]
fn failure_outcome_absorbs_validator(#[case] mode: ErrorMode, #[case] expected: usize) {
    let source = Source::default();
    let mut validator = Validator::new();
    {
        let mut object = validator.for_source(&source);
        object.property("IntProperty", |s| s.int_property).is_required();
        object.property("NullableInt", |s| s.nullable_int).is_required();
        object.collection("Tags", |s| &s.tags).has_min_values(1);
    }

    let outcome = Outcome::<()>::failure()
        .with_validator(&validator, mode)
        .build();

    assert!(!outcome.is_success());
    assert!(outcome.has_validation_errors());
    assert_eq!(outcome.validation_errors().len(), expected);
    assert_eq!(
        outcome.messages()[0].invariant_content(),
        r#"The "IntProperty" field is required."#
    );
}
