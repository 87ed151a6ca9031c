//! Installing configuration changes process-wide defaults, so these tests
//! live in their own binary.

use outcome_core::config::OutcomeConfig;
use outcome_core::locale::{current_locale, default_locale, with_locale};
use outcome_core::{Message, MessageVerbosity};

#[test]
fn install_publishes_defaults() {
    let config = OutcomeConfig::from_toml_str(
        r#"
            default_locale = "fr"

            [message_levels]
            code = true
        "#,
    )
    .unwrap();
    config.install().unwrap();

    assert_eq!(default_locale().to_string(), "fr");
    assert_eq!(current_locale().to_string(), "fr");
    assert!(MessageVerbosity::default_options().code);
    assert!(MessageVerbosity::resolve(None).code);
    assert!(!MessageVerbosity::resolve(Some("template")).code);

    let message = Message::unauthorized();
    assert_eq!(message.content(), "L'opération nécessite une autorisation.");
    assert_eq!(message.invariant_content(), "The operation requires authorization.");

    {
        let _scope = with_locale(Some("es"));
        assert_eq!(current_locale().to_string(), "es");
    }
    assert_eq!(current_locale().to_string(), "fr");
}
