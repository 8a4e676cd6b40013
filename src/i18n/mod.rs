//! Internationalization
//!
//! Keyed lookup from a dotted string key plus locale to a localized string,
//! with `{{placeholder}}` interpolation. Keys missing in a locale fall back to
//! English; keys missing everywhere resolve to the key itself.

pub mod catalog;

use std::collections::HashMap;

use lazy_static::lazy_static;
use tracing::warn;

use crate::models::Locale;

type Table = HashMap<&'static str, &'static str>;

lazy_static! {
    static ref CATALOG: HashMap<Locale, Table> = {
        let mut tables = HashMap::new();
        tables.insert(Locale::En, catalog::EN.iter().copied().collect());
        tables.insert(Locale::Hi, catalog::HI.iter().copied().collect());
        tables.insert(Locale::Mr, catalog::MR.iter().copied().collect());
        tables.insert(Locale::Es, catalog::ES.iter().copied().collect());
        tables.insert(Locale::De, catalog::DE.iter().copied().collect());
        tables
    };
}

/// Raw template for `key`, or `None` when no locale defines it
pub fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    CATALOG
        .get(&locale)
        .and_then(|table| table.get(key))
        .or_else(|| CATALOG.get(&Locale::En).and_then(|table| table.get(key)))
        .copied()
}

/// Replace every `{{name}}` with its value. Unknown placeholders stay verbatim.
pub fn interpolate(template: &str, args: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let name = after[..end].trim();
        match args.iter().find(|(k, _)| *k == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

/// Locale-bound translator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn t(&self, key: &str) -> String {
        self.t_with(key, &[])
    }

    pub fn t_with(&self, key: &str, args: &[(&str, String)]) -> String {
        match lookup(self.locale, key) {
            Some(template) => interpolate(template, args),
            None => {
                warn!(key, locale = %self.locale, "Missing translation key");
                key.to_string()
            }
        }
    }

    /// Whether the active locale has its own entry (no English fallback)
    pub fn has_own(&self, key: &str) -> bool {
        CATALOG
            .get(&self.locale)
            .is_some_and(|table| table.contains_key(key))
    }
}
