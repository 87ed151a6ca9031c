//! Subcommand implementations. Each writes its result to `out` and returns
//! the process exit code.

mod format;
mod message;
mod validate;

pub use format::{FormatArgs, format};
pub use message::{MessageArgs, message};
pub use validate::{ValidateArgs, validate};

use chrono::{NaiveDate, NaiveDateTime};
use outcome_core::{TokenBag, TokenValue};

/// Parses `name=value`, guessing the value type: integer, float, boolean,
/// ISO date-time, ISO date, then text.
pub(crate) fn parse_token(raw: &str) -> Result<(String, TokenValue), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got `{raw}`"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("token name is empty in `{raw}`"));
    }
    Ok((name.to_owned(), infer_value(value)))
}

fn infer_value(raw: &str) -> TokenValue {
    if let Ok(value) = raw.parse::<i64>() {
        return value.into();
    }
    if let Ok(value) = raw.parse::<f64>()
        && value.is_finite()
    {
        return value.into();
    }
    if let Ok(value) = raw.parse::<bool>() {
        return value.into();
    }
    if let Ok(value) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return value.into();
    }
    if let Ok(value) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return value.into();
    }
    raw.into()
}

/// `None` when no token was given, so templates pass through untouched.
pub(crate) fn token_bag(tokens: &[(String, TokenValue)]) -> Option<TokenBag> {
    if tokens.is_empty() {
        None
    } else {
        Some(tokens.iter().cloned().collect())
    }
}
