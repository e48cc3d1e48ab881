//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;
use serde::{Deserialize, Serialize};

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// Spanish
    #[default]
    #[serde(rename = "es")]
    Es,
    /// English
    #[serde(rename = "en")]
    En,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::Es => "Español",
            Locale::En => "English",
        }
    }

    /// Match a language tag like `es-MX` or `en_US`; unsupported languages give `None`
    pub fn from_tag(tag: &str) -> Option<Self> {
        let lang = tag
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "es" => Some(Locale::Es),
            "en" => Some(Locale::En),
            _ => None,
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (es, en))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("Bordados", "Embroidery"));
    map.insert("logo-alt", ("Logo de la empresa", "Company logo"));

    // Header
    map.insert("header-search-placeholder", ("Buscar un bordado...", "Search an embroidery..."));
    map.insert("header-filter-by", ("Filtrar por: ", "Filter by: "));
    map.insert("header-sort-placeholder", ("Orden de búsqueda", "Sort order"));
    map.insert("header-upload", ("Subir bordado", "Upload embroidery"));

    // Select
    map.insert("select-placeholder", ("Selecciona una opción...", "Select an option..."));
    map.insert("select-search-placeholder", ("Buscar...", "Search..."));
    map.insert("select-no-options", ("Sin opciones", "No options"));

    // Layout
    map.insert("aside-placeholder", ("Hola mundo", "Hello world"));
    map.insert("main-filter", ("Filtros", "Filters"));
    map.insert("main-catalog", ("Catálogo", "Catalog"));

    map
}

/// Get translation for a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    let translations = TRANSLATIONS.get_or_init(init_translations);

    if let Some((es, en)) = translations.get(key) {
        match locale {
            Locale::Es => SharedString::from(*es),
            Locale::En => SharedString::from(*en),
        }
    } else {
        SharedString::from(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanish_is_the_default() {
        assert_eq!(t(Locale::default(), "header-upload").to_string(), "Subir bordado");
    }

    #[test]
    fn english_lookup() {
        assert_eq!(t(Locale::En, "select-placeholder").to_string(), "Select an option...");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(t(Locale::Es, "no-such-key").to_string(), "no-such-key");
    }

    #[test]
    fn locale_from_tag() {
        assert_eq!(Locale::from_tag("es-MX"), Some(Locale::Es));
        assert_eq!(Locale::from_tag("en_US.UTF-8"), Some(Locale::En));
        assert_eq!(Locale::from_tag("zh-CN"), None);
        assert_eq!(Locale::from_tag(""), None);
    }
}
