use outcome_core::prelude::*;
use outcome_core::verbosity::MessageVerbosity;
use pretty_assertions::assert_eq;

fn resources() -> ResourceCatalog {
    ResourceCatalog::from_toml_str(
        "TestResources",
        r#"
            [neutral]
            Message_Test = "This is a test message with a number: {number:F5}."
            Message_Greeting = "Hello {FirstName}, you are {Age} years old."

            [locales.fr]
            Message_Test = "La testa message with numero: {number:F5} oh oh oh!"
        "#,
    )
    .unwrap()
}

#[test]
fn message_in_default_locale() {
    let message = Message::info(&resources(), "Message_Test", Some(tokens! { number = 9.123_456_78 }));

    assert_eq!(message.kind(), MessageKind::Information);
    assert_eq!(message.code(), "test");
    assert_eq!(message.language_code(), "en-US");
    assert_eq!(
        message.template(),
        Some("This is a test message with a number: {number:F5}.")
    );
    assert_eq!(message.content(), "This is a test message with a number: 9.12346.");
    assert_eq!(message.content(), message.invariant_content());
}

#[test]
fn message_in_scoped_locale() {
    let _scope = with_locale(Some("fr-FR"));
    let message = Message::warning(&resources(), "Message_Test", Some(tokens! { number = 9.123_456_78 }));

    assert_eq!(message.language_code(), "fr-FR");
    assert_eq!(message.content(), "La testa message with numero: 9.12346 oh oh oh!");
    assert_eq!(
        message.invariant_content(),
        "This is a test message with a number: 9.12346."
    );
}

#[test]
fn missing_translation_falls_back_to_neutral() {
    let message = Message::create(
        MessageKind::Information,
        &resources(),
        "Message_Greeting",
        Some("fr"),
        Some(tokens! { firstName = "Ben", age = 40 }),
    );
    assert_eq!(message.content(), "Hello Ben, you are 40 years old.");
    assert_eq!(
        message.template(),
        Some("Hello {firstName}, you are {age} years old.")
    );
}

#[test]
fn invalid_locale_keeps_current_locale() {
    let message = Message::create(
        MessageKind::Information,
        &resources(),
        "Message_Test",
        Some("!!not-a-locale"),
        Some(tokens! { number = 1 }),
    );
    assert_eq!(message.language_code(), "en-US");
    assert_eq!(message.content(), "This is a test message with a number: 1.00000.");
    assert_eq!(current_locale().to_string(), "en-US");
}

#[test]
fn missing_tokens_leave_template_text() {
    let message = Message::info(&resources(), "Message_Greeting", Some(tokens! { firstName = "Ben" }));
    assert_eq!(message.content(), "Hello {FirstName}, you are {Age} years old.");
}

#[test]
fn missing_resource_is_a_message_not_an_error() {
    let message = Message::error(&resources(), "Message_DoesNotExist", None);
    assert_eq!(
        message.content(),
        r#"Missing resource "Message_DoesNotExist" from resource file: "TestResources""#
    );
    assert_eq!(message.code(), "does-not-exist");
}

#[test]
fn not_found_in_spanish() {
    let message = Message::create(
        MessageKind::NotFound,
        outcome_core::resource::core_catalog(),
        "NotFound",
        Some("es-MX"),
        Some(tokens! { type = "Pedido", id = 12 }),
    );
    assert_eq!(
        message.content(),
        r#"El tipo "Pedido" con el identificador "12" no existe."#
    );
}

#[test]
fn serialized_message_follows_scoped_verbosity() {
    let message = Message::info(&resources(), "Message_Test", Some(tokens! { number = 2.5 }));

    let _levels = MessageVerbosity::parse("code,template,tokens,languageCode").scope();
    let json = serde_json::to_value(&message).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "type": "information",
            "code": "test",
            "template": "This is a test message with a number: {number:F5}.",
            "tokens": { "number": 2.5 },
            "languageCode": "en-US",
            "content": "This is a test message with a number: 2.50000."
        })
    );
}
