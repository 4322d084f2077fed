//! I18nState - Internationalization State

use gpui::SharedString;

use crate::i18n::{Locale, t};

/// State for internationalization
#[derive(Debug, Clone, Default)]
pub struct I18nState {
    /// Current locale
    locale: Locale,
}

impl I18nState {
    /// Create a store starting at the given locale
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Current locale
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Translate a key for the current locale, echoing unknown keys
    pub fn text(&self, key: &str) -> SharedString {
        t(self.locale, key)
    }

    /// Advance to the next locale (English <-> Malay)
    pub fn toggle_locale(&mut self) {
        self.locale = self.locale.next();
        tracing::info!(locale = self.locale.code(), "Language toggled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_malay() {
        let state = I18nState::default();
        assert_eq!(state.locale(), Locale::Bm);
        assert_eq!(state.text("nav.home").to_string(), "Utama");
    }

    #[test]
    fn test_toggle_scenario() {
        let mut state = I18nState::default();
        state.toggle_locale();
        assert_eq!(state.locale(), Locale::En);
        assert_eq!(state.text("nav.home").to_string(), "Home");
        state.toggle_locale();
        assert_eq!(state.locale(), Locale::Bm);
        assert_eq!(state.text("nav.home").to_string(), "Utama");
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        for locale in Locale::ALL {
            let mut state = I18nState::new(locale);
            state.toggle_locale();
            state.toggle_locale();
            assert_eq!(state.locale(), locale);
        }
    }

    #[test]
    fn test_text_follows_active_locale() {
        for locale in Locale::ALL {
            let state = I18nState::new(locale);
            for key in crate::i18n::keys() {
                let expected = crate::i18n::lookup(locale, key).unwrap_or_default();
                assert_eq!(state.text(key).to_string(), expected);
            }
        }
    }

    #[test]
    fn test_unknown_key_is_echoed() {
        let mut state = I18nState::default();
        assert_eq!(state.text("hero.typo").to_string(), "hero.typo");
        state.toggle_locale();
        assert_eq!(state.text("hero.typo").to_string(), "hero.typo");
    }
}
