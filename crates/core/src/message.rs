//! Localized, immutable messages.
//!
//! A [`Message`] is created once from a resource key and optional tokens. On
//! creation it captures the template in the active locale, the rendered
//! content in that locale, and the rendered content in the reference locale
//! for logs and diagnostics.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::case::to_kebab_case;
use crate::format::{format, lower_camel_case_tokens, TokenBag};
use crate::locale::{current_locale, Locale, LocaleScope};
use crate::resource::{core_catalog, keys, ResourceSource};
use crate::tokens;
use crate::verbosity::MessageVerbosity;

// ============================================================================
// KIND
// ============================================================================

/// Category of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageKind {
    /// Informational note.
    Information,
    /// Non-fatal concern.
    Warning,
    /// General failure.
    Error,
    /// A validation rule did not hold.
    ValidationError,
    /// The caller is not authenticated.
    Unauthorized,
    /// The caller may not perform the operation.
    Forbidden,
    /// The requested entity does not exist.
    NotFound,
}

impl MessageKind {
    /// Kebab-case name, as serialized.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Information => "information",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::ValidationError => "validation-error",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not-found",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// MESSAGE
// ============================================================================

/// A localized message.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    kind: MessageKind,
    code: String,
    template: Option<String>,
    tokens: Option<TokenBag>,
    language_code: String,
    content: String,
    invariant_content: String,
}

impl Message {
    /// Creates a message in the current locale.
    pub fn new(
        kind: MessageKind,
        source: &dyn ResourceSource,
        key: &str,
        tokens: Option<TokenBag>,
    ) -> Self {
        Self::create(kind, source, key, None, tokens)
    }

    /// Creates a message, rendering it in `locale` when given.
    ///
    /// A blank or unparseable `locale` leaves the current locale in effect.
    /// A key with no template in `source` still yields a message whose
    /// content names the missing key; this is logged, never an error.
    pub fn create(
        kind: MessageKind,
        source: &dyn ResourceSource,
        key: &str,
        locale: Option<&str>,
        tokens: Option<TokenBag>,
    ) -> Self {
        let _scope = LocaleScope::enter(locale);
        let active = current_locale();
        let code = to_kebab_case(key);
        let language_code = active.to_string();

        let Some(localized) = source.resolve(key, &active) else {
            tracing::warn!(key, source = source.name(), locale = %active, "missing localization resource");
            let diagnostic = format!(
                "Missing resource \"{key}\" from resource file: \"{}\"",
                source.name()
            );
            return Self {
                kind,
                code,
                template: None,
                tokens,
                language_code,
                content: diagnostic.clone(),
                invariant_content: diagnostic,
            };
        };

        let content = format(&localized, tokens.as_ref());
        let invariant_content = if active.is_reference() {
            content.clone()
        } else {
            match source.resolve(key, &Locale::reference()) {
                Some(reference) => format(&reference, tokens.as_ref()),
                None => content.clone(),
            }
        };

        Self {
            kind,
            code,
            template: Some(lower_camel_case_tokens(&localized)),
            tokens,
            language_code,
            content,
            invariant_content,
        }
    }

    /// Informational message.
    pub fn info(source: &dyn ResourceSource, key: &str, tokens: Option<TokenBag>) -> Self {
        Self::new(MessageKind::Information, source, key, tokens)
    }

    /// Warning message.
    pub fn warning(source: &dyn ResourceSource, key: &str, tokens: Option<TokenBag>) -> Self {
        Self::new(MessageKind::Warning, source, key, tokens)
    }

    /// Error message.
    pub fn error(source: &dyn ResourceSource, key: &str, tokens: Option<TokenBag>) -> Self {
        Self::new(MessageKind::Error, source, key, tokens)
    }

    /// Validation error message.
    pub fn validation_error(
        source: &dyn ResourceSource,
        key: &str,
        tokens: Option<TokenBag>,
    ) -> Self {
        Self::new(MessageKind::ValidationError, source, key, tokens)
    }

    /// The built-in unauthorized message.
    pub fn unauthorized() -> Self {
        Self::unauthorized_with(core_catalog(), keys::UNAUTHORIZED, None)
    }

    /// Unauthorized message from a caller-supplied resource.
    pub fn unauthorized_with(
        source: &dyn ResourceSource,
        key: &str,
        tokens: Option<TokenBag>,
    ) -> Self {
        Self::new(MessageKind::Unauthorized, source, key, tokens)
    }

    /// The built-in forbidden message.
    pub fn forbidden() -> Self {
        Self::forbidden_with(core_catalog(), keys::FORBIDDEN, None)
    }

    /// Forbidden message from a caller-supplied resource.
    pub fn forbidden_with(source: &dyn ResourceSource, key: &str, tokens: Option<TokenBag>) -> Self {
        Self::new(MessageKind::Forbidden, source, key, tokens)
    }

    /// Not-found message naming the entity type `T`.
    ///
    /// An `Outcome<E>` type argument is unwrapped to `E`.
    pub fn not_found<T: ?Sized>(identity: impl fmt::Display) -> Self {
        Self::not_found_named(&entity_name::<T>(), identity)
    }

    /// Not-found message with an explicit entity name.
    pub fn not_found_named(entity: &str, identity: impl fmt::Display) -> Self {
        let tokens = tokens! { type = entity.to_owned(), id = identity.to_string() };
        Self::new(MessageKind::NotFound, core_catalog(), keys::NOT_FOUND, Some(tokens))
    }

    /// Message category.
    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    /// Kebab-case code derived from the resource key.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Template in the creation locale with lower-camel-case placeholders;
    /// `None` when the resource was missing.
    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    /// Tokens supplied at creation.
    pub fn tokens(&self) -> Option<&TokenBag> {
        self.tokens.as_ref()
    }

    /// Locale the content was rendered in.
    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    /// Content in the creation locale.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Content in the reference locale. Never serialized.
    pub fn invariant_content(&self) -> &str {
        &self.invariant_content
    }

    /// Serializable projection honoring `verbosity`.
    pub fn view(&self, verbosity: MessageVerbosity) -> MessageView<'_> {
        MessageView {
            kind: self.kind,
            code: verbosity.code.then_some(self.code.as_str()),
            template: if verbosity.template { self.template.as_deref() } else { None },
            tokens: if verbosity.tokens { self.tokens.as_ref() } else { None },
            language_code: verbosity
                .language_code
                .then_some(self.language_code.as_str()),
            content: &self.content,
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.invariant_content)
    }
}

impl Serialize for Message {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.view(MessageVerbosity::current()).serialize(serializer)
    }
}

/// Wire form of a [`Message`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageView<'a> {
    #[serde(rename = "type")]
    kind: MessageKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    template: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tokens: Option<&'a TokenBag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language_code: Option<&'a str>,
    content: &'a str,
}

// ============================================================================
// TYPE NAMES
// ============================================================================

/// Short name of `T` for not-found messages: module paths are dropped and an
/// `Outcome<E>` wrapper is unwrapped to `E`.
pub fn entity_name<T: ?Sized>() -> String {
    let short = short_type_name(std::any::type_name::<T>());
    let wrapper = short_type_name(std::any::type_name::<crate::Outcome<()>>());
    let wrapper = wrapper.split('<').next().unwrap_or_default();

    short
        .strip_prefix(wrapper)
        .and_then(|rest| rest.strip_prefix('<'))
        .and_then(|rest| rest.strip_suffix('>'))
        .map_or_else(|| short.clone(), str::to_owned)
}

fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();
    for ch in full.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == ':' {
            segment.push(ch);
        } else {
            out.push_str(segment.rsplit("::").next().unwrap_or_default());
            segment.clear();
            out.push(ch);
        }
    }
    out.push_str(segment.rsplit("::").next().unwrap_or_default());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::with_locale;
    use crate::resource::ResourceCatalog;
    use pretty_assertions::assert_eq;

    fn catalog() -> ResourceCatalog {
        ResourceCatalog::new("Resources")
            .with_neutral([(
                "Message_Test",
                "This is a test message with a number: {Number:F5}.",
            )])
            .with_locale(
                "fr",
                [("Message_Test", "La testa message with numero: {Number:F5} oh oh oh!")],
            )
    }

    #[test]
    fn creates_in_requested_locale_with_invariant_copy() {
        let message = Message::create(
            MessageKind::Information,
            &catalog(),
            "Message_Test",
            Some("fr"),
            Some(tokens! { number = 9.123_456_78 }),
        );
        assert_eq!(message.code(), "test");
        assert_eq!(message.language_code(), "fr");
        assert_eq!(
            message.template(),
            Some("La testa message with numero: {number:F5} oh oh oh!")
        );
        assert_eq!(message.content(), "La testa message with numero: 9.12346 oh oh oh!");
        assert_eq!(
            message.invariant_content(),
            "This is a test message with a number: 9.12346."
        );
        assert_eq!(message.to_string(), message.invariant_content());
    }

    #[test]
    fn missing_resource_yields_diagnostic() {
        let message = Message::error(&catalog(), "Nope", None);
        let expected = r#"Missing resource "Nope" from resource file: "Resources""#;
        assert_eq!(message.content(), expected);
        assert_eq!(message.invariant_content(), expected);
        assert_eq!(message.template(), None);
        assert_eq!(message.code(), "nope");
    }

    #[test]
    fn not_found_uses_short_type_name() {
        let message = Message::not_found::<String>(5);
        assert_eq!(message.kind(), MessageKind::NotFound);
        assert_eq!(
            message.invariant_content(),
            r#"The type "String" with identifier "5" does not exist."#
        );
    }

    #[test]
    fn not_found_renders_in_scope_locale() {
        let _scope = with_locale(Some("fr"));
        let message = Message::not_found::<i32>("abc");
        assert_eq!(
            message.content(),
            r#"Le type "i32" avec l'identificateur "abc" n'existe pas."#
        );
        assert_eq!(
            message.template(),
            Some(r#"Le type "{type}" avec l'identificateur "{id}" n'existe pas."#)
        );
    }

    #[test]
    fn entity_name_unwraps_outcome() {
        struct Widget;
        assert_eq!(entity_name::<crate::Outcome<Widget>>(), "Widget");
        assert_eq!(entity_name::<Vec<String>>(), "Vec<String>");
        assert_eq!(entity_name::<Widget>(), "Widget");
    }

    #[test]
    fn view_honors_verbosity() {
        let message = Message::create(
            MessageKind::Warning,
            &catalog(),
            "Message_Test",
            Some("en-US"),
            Some(tokens! { number = 1 }),
        );

        let minimal = serde_json::to_value(message.view(MessageVerbosity::NONE)).unwrap();
        assert_eq!(
            minimal,
            serde_json::json!({
                "type": "warning",
                "content": "This is a test message with a number: 1.00000."
            })
        );

        let full = serde_json::to_value(message.view(MessageVerbosity::ALL)).unwrap();
        assert_eq!(
            full,
            serde_json::json!({
                "type": "warning",
                "code": "test",
                "template": "This is a test message with a number: {number:F5}.",
                "tokens": { "number": 1 },
                "languageCode": "en-US",
                "content": "This is a test message with a number: 1.00000."
            })
        );
    }

    #[test]
    fn serialize_uses_current_verbosity() {
        let message = Message::unauthorized();
        let _scope = MessageVerbosity::parse("code").scope();
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["code"], "unauthorized");
        assert!(json.get("template").is_none());
    }
}
