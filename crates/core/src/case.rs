//! Resource-key case conversion.
//!
//! Resource keys are PascalCase words optionally joined by underscores and
//! prefixed with `Message_`. Message codes are the kebab-case form with the
//! prefix removed: `Message_Property_Required` becomes `property-required`.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static UPPER_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]+").expect("upper-case run pattern is valid"));

static UNDERSCORES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_+").expect("underscore pattern is valid"));

static HYPHENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-+").expect("hyphen pattern is valid"));

const MESSAGE_PREFIX: &str = "message";

/// `NotFound` → `not-found`, `Message_Value_Invalid` → `value-invalid`.
pub fn to_kebab_case(key: &str) -> String {
    convert(key, '-', &UNDERSCORES, &HYPHENS)
}

/// `NotFound` → `not_found`, `Message_Value_Invalid` → `value_invalid`.
pub fn to_snake_case(key: &str) -> String {
    convert(key, '_', &HYPHENS, &UNDERSCORES)
}

fn convert(key: &str, separator: char, foreign: &Regex, native: &Regex) -> String {
    let split = UPPER_RUN.replace_all(key, |caps: &Captures<'_>| {
        let run = &caps[0];
        if caps.get(0).is_some_and(|m| m.start() == 0) {
            run.to_ascii_lowercase()
        } else {
            format!("{separator}{}", run.to_ascii_lowercase())
        }
    });
    let unified = foreign.replace_all(&split, separator.to_string());
    let collapsed = native.replace_all(&unified, separator.to_string()).into_owned();
    strip_message_prefix(collapsed, separator)
}

fn strip_message_prefix(code: String, separator: char) -> String {
    let prefix_len = MESSAGE_PREFIX.len();
    let has_prefix = code.len() > prefix_len
        && code.is_char_boundary(prefix_len)
        && code[..prefix_len].eq_ignore_ascii_case(MESSAGE_PREFIX)
        && code[prefix_len..].starts_with(separator);
    if has_prefix {
        code[prefix_len + separator.len_utf8()..].to_owned()
    } else {
        code
    }
}
