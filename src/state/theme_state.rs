//! ThemeState - Light/Dark Theme State

use gpui_component::ThemeMode;

use crate::theme::colors::Palette;

/// State for the site theme
#[derive(Debug, Clone)]
pub struct ThemeState {
    /// Whether the dark variant is active
    dark: bool,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self { dark: true }
    }
}

impl ThemeState {
    /// Create a store starting at the given flag
    pub fn new(dark: bool) -> Self {
        Self { dark }
    }

    /// Whether the dark variant is active
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Flip between dark and light
    pub fn toggle_theme(&mut self) {
        self.dark = !self.dark;
        tracing::info!(dark = self.dark, "Theme toggled");
    }

    /// Colors for the active variant
    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.dark)
    }

    /// Matching mode for built-in gpui-component widgets
    pub fn mode(&self) -> ThemeMode {
        if self.dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert!(ThemeState::default().is_dark());
    }

    #[test]
    fn test_toggle_scenario() {
        let mut state = ThemeState::default();
        state.toggle_theme();
        assert!(!state.is_dark());
        state.toggle_theme();
        assert!(state.is_dark());
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        for dark in [true, false] {
            let mut state = ThemeState::new(dark);
            state.toggle_theme();
            state.toggle_theme();
            assert_eq!(state.is_dark(), dark);
        }
    }

    #[test]
    fn test_palette_follows_flag() {
        let mut state = ThemeState::default();
        assert_eq!(state.palette(), Palette::dark());
        assert_eq!(state.mode(), ThemeMode::Dark);
        state.toggle_theme();
        assert_eq!(state.palette(), Palette::light());
        assert_eq!(state.mode(), ThemeMode::Light);
    }
}
