//! Localized template lookup.
//!
//! A [`ResourceSource`] maps `(key, locale)` to a template. Lookups walk a
//! fallback chain from the most specific tag to the language and finally the
//! neutral table, so a `fr-CA` request finds `fr` entries and anything
//! missing in French falls back to the neutral (English) text.
//!
//! [`ResourceCatalog`] is the in-memory implementation. It is built from
//! static tables or loaded from TOML:
//!
//! ```toml
//! [neutral]
//! Message_Test = "This is a test message with a number: {number:F5}."
//!
//! [locales.fr]
//! Message_Test = "Un message de test avec un nombre : {number:F5}."
//! ```

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use serde::Deserialize;

use crate::error::CatalogError;
use crate::locale::{normalize_tag, Locale};

// ============================================================================
// SOURCE TRAIT
// ============================================================================

/// A named set of localized templates.
pub trait ResourceSource: Send + Sync {
    /// Name used in diagnostics.
    fn name(&self) -> &str;

    /// Exact lookup. `locale` is a normalized tag (`fr-ca`, `fr`); `None`
    /// selects the neutral table.
    fn get(&self, key: &str, locale: Option<&str>) -> Option<Cow<'_, str>>;

    /// Lookup along the fallback chain of `locale`. Blank entries count as
    /// missing.
    fn resolve(&self, key: &str, locale: &Locale) -> Option<Cow<'_, str>> {
        locale
            .fallback_tags()
            .iter()
            .find_map(|tag| self.get(key, Some(tag.as_str())).filter(|text| !text.trim().is_empty()))
            .or_else(|| self.get(key, None).filter(|text| !text.trim().is_empty()))
    }
}

impl<T: ResourceSource + ?Sized> ResourceSource for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn get(&self, key: &str, locale: Option<&str>) -> Option<Cow<'_, str>> {
        (**self).get(key, locale)
    }
}

// ============================================================================
// CATALOG
// ============================================================================

/// In-memory [`ResourceSource`].
#[derive(Debug, Clone, Default)]
pub struct ResourceCatalog {
    name: String,
    neutral: HashMap<String, String>,
    locales: HashMap<String, HashMap<String, String>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDocument {
    #[serde(default)]
    neutral: HashMap<String, String>,
    #[serde(default)]
    locales: HashMap<String, HashMap<String, String>>,
}

impl ResourceCatalog {
    /// Creates an empty catalog.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds neutral entries.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_neutral<K, V>(mut self, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.neutral
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Adds entries for one locale tag.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_locale<K, V>(mut self, tag: &str, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.locales
            .entry(normalize_tag(tag))
            .or_default()
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Inserts or replaces one entry. `None` targets the neutral table.
    pub fn insert(&mut self, locale: Option<&str>, key: impl Into<String>, text: impl Into<String>) {
        let table = match locale {
            Some(tag) => self.locales.entry(normalize_tag(tag)).or_default(),
            None => &mut self.neutral,
        };
        table.insert(key.into(), text.into());
    }

    /// Parses a TOML catalog document.
    pub fn from_toml_str(name: impl Into<String>, document: &str) -> Result<Self, CatalogError> {
        let name = name.into();
        let parsed: CatalogDocument =
            toml::from_str(document).map_err(|source| CatalogError::Parse {
                name: name.clone(),
                source,
            })?;

        let mut catalog = Self::new(name);
        catalog.neutral = parsed.neutral;
        for (tag, entries) in parsed.locales {
            Locale::parse(&tag).map_err(|source| CatalogError::Locale {
                name: catalog.name.clone(),
                source,
            })?;
            catalog = catalog.with_locale(&tag, entries);
        }

        tracing::debug!(
            catalog = %catalog.name,
            neutral = catalog.neutral.len(),
            locales = catalog.locales.len(),
            "resource catalog loaded"
        );
        Ok(catalog)
    }

    /// Merges another catalog into this one; entries of `other` win.
    #[must_use = "builder methods must be chained or built"]
    pub fn merged(mut self, other: Self) -> Self {
        self.neutral.extend(other.neutral);
        for (tag, entries) in other.locales {
            self.locales.entry(tag).or_default().extend(entries);
        }
        self
    }

    /// Normalized tags with at least one entry.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    /// Keys of the neutral table.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.neutral.keys().map(String::as_str)
    }
}

impl ResourceSource for ResourceCatalog {
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self, key: &str, locale: Option<&str>) -> Option<Cow<'_, str>> {
        let table = match locale {
            Some(tag) => self.locales.get(tag)?,
            None => &self.neutral,
        };
        table.get(key).map(|text| Cow::Borrowed(text.as_str()))
    }
}

// ============================================================================
// BUILT-IN CATALOG
// ============================================================================

/// Keys of the built-in core catalog.
pub mod keys {
    /// `The type "{type}" with identifier "{id}" does not exist.`
    pub const NOT_FOUND: &str = "NotFound";
    /// `The operation requires authorization.`
    pub const UNAUTHORIZED: &str = "Unauthorized";
    /// `The operation is forbidden.`
    pub const FORBIDDEN: &str = "Forbidden";
}

const CORE_NEUTRAL: [(&str, &str); 3] = [
    (
        keys::NOT_FOUND,
        r#"The type "{type}" with identifier "{id}" does not exist."#,
    ),
    (keys::UNAUTHORIZED, "The operation requires authorization."),
    (keys::FORBIDDEN, "The operation is forbidden."),
];

const CORE_FR: [(&str, &str); 3] = [
    (
        keys::NOT_FOUND,
        r#"Le type "{type}" avec l'identificateur "{id}" n'existe pas."#,
    ),
    (keys::UNAUTHORIZED, "L'opération nécessite une autorisation."),
    (keys::FORBIDDEN, "L'opération est interdite."),
];

const CORE_ES: [(&str, &str); 3] = [
    (
        keys::NOT_FOUND,
        r#"El tipo "{type}" con el identificador "{id}" no existe."#,
    ),
    (keys::UNAUTHORIZED, "La operación requiere autorización."),
    (keys::FORBIDDEN, "La operación está prohibida."),
];

static CORE_CATALOG: LazyLock<ResourceCatalog> = LazyLock::new(|| {
    ResourceCatalog::new("outcome-core")
        .with_neutral(CORE_NEUTRAL)
        .with_locale("fr", CORE_FR)
        .with_locale("es", CORE_ES)
});

/// Built-in messages for not-found, unauthorized and forbidden outcomes.
pub fn core_catalog() -> &'static ResourceCatalog {
    &CORE_CATALOG
}
