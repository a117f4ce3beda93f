//! The locale registry.
//!
//! An ordered list of the locales the site is published in, with display
//! labels and one designated default. Registry order is the order locales
//! appear in language switchers and in the sitemap.

use serde::Serialize;

/// A supported locale: language/region code plus human-readable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Locale {
    pub code: &'static str,
    pub label: &'static str,
}

/// The locale every untranslated dataset falls back to.
pub const DEFAULT_LOCALE: &str = "en";

/// Supported locales, in display order.
pub const LOCALES: &[Locale] = &[
    Locale { code: "en", label: "English" },
    Locale { code: "es", label: "Español" },
    Locale { code: "fr", label: "Français" },
    Locale { code: "de", label: "Deutsch" },
    Locale { code: "pt-br", label: "Português (Brasil)" },
    Locale { code: "ja", label: "日本語" },
    Locale { code: "ko", label: "한국어" },
    Locale { code: "zh-cn", label: "简体中文" },
];

/// Look up a locale by its code.
pub fn find(code: &str) -> Option<&'static Locale> {
    LOCALES.iter().find(|locale| locale.code == code)
}

/// Whether a code names a supported locale.
pub fn is_supported(code: &str) -> bool {
    find(code).is_some()
}

/// Supported locale codes, in registry order.
pub fn codes() -> impl Iterator<Item = &'static str> {
    LOCALES.iter().map(|locale| locale.code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locale_is_registered() {
        assert!(is_supported(DEFAULT_LOCALE));
    }

    #[test]
    fn find_returns_label() {
        assert_eq!(find("pt-br").map(|l| l.label), Some("Português (Brasil)"));
        assert!(find("tlh").is_none());
    }

    #[test]
    fn codes_preserve_registry_order() {
        let codes: Vec<&str> = codes().collect();
        assert_eq!(codes.first(), Some(&"en"));
        assert_eq!(codes.len(), LOCALES.len());
    }
}
