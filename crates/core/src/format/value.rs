//! Token values and the ordered token bag.

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use smallvec::SmallVec;

use super::spec;

// ============================================================================
// TOKEN VALUE
// ============================================================================

/// A value substituted into a message template.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// Absent value; renders as an empty string.
    Null,
    /// Boolean.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    UInt(u64),
    /// Binary floating point.
    Float(f64),
    /// Exact decimal.
    Decimal(Decimal),
    /// Text.
    Text(String),
    /// Calendar date.
    Date(NaiveDate),
    /// Date and time without offset.
    DateTime(NaiveDateTime),
}

impl TokenValue {
    /// Renders the value with an optional format specifier such as `F2`,
    /// `N0`, `yyyy-MM-dd` or `s`.
    ///
    /// Unknown specifiers fall back to the plain rendering.
    pub fn render(&self, specifier: Option<&str>) -> String {
        spec::render(self, specifier)
    }

    /// Returns `true` for [`TokenValue::Null`].
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}

impl Serialize for TokenValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(v) => serializer.serialize_bool(*v),
            Self::Int(v) => serializer.serialize_i64(*v),
            Self::UInt(v) => serializer.serialize_u64(*v),
            Self::Float(v) => serializer.serialize_f64(*v),
            Self::Decimal(v) => Serialize::serialize(v, serializer),
            Self::Text(v) => serializer.serialize_str(v),
            Self::Date(v) => serializer.collect_str(&v.format("%Y-%m-%d")),
            Self::DateTime(v) => serializer.collect_str(&v.format("%Y-%m-%dT%H:%M:%S%.f")),
        }
    }
}

macro_rules! token_from {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for TokenValue {
                fn from(value: $source) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

token_from!(Int as i64: i8, i16, i32, i64);
token_from!(UInt as u64: u8, u16, u32, u64);
token_from!(Float as f64: f64);
token_from!(Bool as bool: bool);
token_from!(Decimal as Decimal: Decimal);
token_from!(Date as NaiveDate: NaiveDate);
token_from!(DateTime as NaiveDateTime: NaiveDateTime);
token_from!(Text as String: String, &str, &String, char);

impl From<isize> for TokenValue {
    fn from(value: isize) -> Self {
        Self::Int(value as i64)
    }
}

impl From<usize> for TokenValue {
    fn from(value: usize) -> Self {
        Self::UInt(value as u64)
    }
}

impl From<f32> for TokenValue {
    fn from(value: f32) -> Self {
        // Widen through the shortest decimal form so 0.1f32 stays 0.1.
        Self::Float(value.to_string().parse().unwrap_or(f64::from(value)))
    }
}

impl From<Cow<'_, str>> for TokenValue {
    fn from(value: Cow<'_, str>) -> Self {
        Self::Text(value.into_owned())
    }
}

impl From<DateTime<Utc>> for TokenValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value.naive_utc())
    }
}

impl<T: Into<TokenValue>> From<Option<T>> for TokenValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

// ============================================================================
// TOKEN BAG
// ============================================================================

/// A named token.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    name: Cow<'static, str>,
    value: TokenValue,
}

impl Token {
    /// Token name as supplied.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Token value.
    pub fn value(&self) -> &TokenValue {
        &self.value
    }
}

/// Ordered name/value pairs for template substitution.
///
/// Insertion order is preserved for serialization. Lookup by name is
/// case-insensitive and the first matching entry wins.
///
/// ```rust
/// use outcome_core::tokens;
///
/// let bag = tokens! { propertyName = "Age", value = 18 };
/// assert_eq!(bag.get("PROPERTYNAME").map(ToString::to_string).as_deref(), Some("Age"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenBag {
    tokens: SmallVec<[Token; 4]>,
}

impl TokenBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a token.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<TokenValue>) -> Self {
        self.push(name, value);
        self
    }

    /// Appends a token in place.
    pub fn push(&mut self, name: impl Into<Cow<'static, str>>, value: impl Into<TokenValue>) {
        self.tokens.push(Token {
            name: name.into(),
            value: value.into(),
        });
    }

    /// Looks a token up by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&TokenValue> {
        self.tokens
            .iter()
            .find(|token| same_name(&token.name, name))
            .map(|token| &token.value)
    }

    /// Tokens in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` when the bag has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for TokenBag
where
    K: Into<Cow<'static, str>>,
    V: Into<TokenValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = Self::new();
        bag.extend(iter);
        bag
    }
}

fn same_name(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

impl<K, V> Extend<(K, V)> for TokenBag
where
    K: Into<Cow<'static, str>>,
    V: Into<TokenValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.push(name, value);
        }
    }
}

impl Serialize for TokenBag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.tokens.len()))?;
        for token in &self.tokens {
            map.serialize_entry(token.name(), token.value())?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lookup_ignores_case_and_first_match_wins() {
        let bag = TokenBag::new().with("Name", "first").with("NAME", "second");
        assert_eq!(bag.get("name"), Some(&TokenValue::Text("first".into())));
        assert_eq!(bag.get("missing"), None);
    }

    #[test]
    fn lookup_folds_non_ascii_case() {
        let bag = TokenBag::new().with("ärger", "x").with("Straße", "y");
        assert_eq!(bag.get("ÄRGER"), Some(&TokenValue::Text("x".into())));
        assert_eq!(bag.get("straße"), Some(&TokenValue::Text("y".into())));
    }

    #[test]
    fn conversions_pick_the_right_variant() {
        assert_eq!(TokenValue::from(5_i32), TokenValue::Int(5));
        assert_eq!(TokenValue::from(5_usize), TokenValue::UInt(5));
        assert_eq!(TokenValue::from(0.1_f32), TokenValue::Float(0.1));
        assert_eq!(TokenValue::from(None::<i32>), TokenValue::Null);
        assert_eq!(TokenValue::from(Some("x")), TokenValue::Text("x".into()));
    }

    #[test]
    fn serializes_in_insertion_order() {
        let bag = TokenBag::new()
            .with("zeta", 1)
            .with("alpha", "a")
            .with("none", None::<i32>);
        let json = serde_json::to_string(&bag).unwrap();
        assert_eq!(json, r#"{"zeta":1,"alpha":"a","none":null}"#);
    }

    #[test]
    fn serializes_decimal_tokens() {
        let bag = TokenBag::new()
            .with("amount", Decimal::new(1_500, 2))
            .with("count", 3);
        let json = serde_json::to_string(&bag).unwrap();
        assert_eq!(json, r#"{"amount":"15.00","count":3}"#);
    }

    #[test]
    fn collects_from_pairs() {
        let bag: TokenBag = vec![("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(bag.len(), 2);
        assert_eq!(bag.iter().map(Token::name).collect::<Vec<_>>(), ["a", "b"]);
    }
}
