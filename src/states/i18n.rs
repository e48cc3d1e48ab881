//! Internationalization Helpers
//!
//! Provides convenient functions for translating strings based on current locale.

use super::AppConfig;
use crate::i18n::{Locale, t};
use gpui::{App, SharedString};

/// Locale of the running application, Spanish until a config is installed
pub fn current_locale(cx: &App) -> Locale {
    cx.try_global::<AppConfig>()
        .map(AppConfig::locale)
        .unwrap_or_default()
}

/// Get translated string for the current locale
pub fn i18n(cx: &App, key: &str) -> SharedString {
    t(current_locale(cx), key)
}
