//! AppEntities - Global Entity Handles
//!
//! The two stores plus the page navigator, created once at startup and passed
//! to every view constructor. Views read the stores during render and
//! mutate them only through the toggles below.

use gpui::{App, AppContext, Entity, Global, SharedString};
use gpui_component::Theme;

use crate::app::navigation::Navigator;
use crate::state::{i18n_state::I18nState, theme_state::ThemeState};
use crate::theme::colors::Palette;

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Language store
    pub i18n: Entity<I18nState>,
    /// Theme store
    pub theme: Entity<ThemeState>,
    /// Page scroll control
    pub navigator: Navigator,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities with default values
    pub fn init(cx: &mut App) -> Self {
        Self::with_state(I18nState::default(), ThemeState::default(), cx)
    }

    /// Initialize with explicit starting values
    pub fn with_state(i18n: I18nState, theme: ThemeState, cx: &mut App) -> Self {
        Self {
            i18n: cx.new(|_| i18n),
            theme: cx.new(|_| theme),
            navigator: Navigator::new(),
        }
    }

    /// Translate a key with the active locale
    pub fn text(&self, cx: &App, key: &str) -> SharedString {
        self.i18n.read(cx).text(key)
    }

    /// Colors for the active theme
    pub fn palette(&self, cx: &App) -> Palette {
        self.theme.read(cx).palette()
    }

    /// Whether the dark theme is active
    pub fn is_dark(&self, cx: &App) -> bool {
        self.theme.read(cx).is_dark()
    }

    /// Flip the language store
    pub fn toggle_language(&self, cx: &mut App) {
        self.i18n.update(cx, |i18n, cx| {
            i18n.toggle_locale();
            cx.notify();
        });
    }

    /// Flip the theme store and keep built-in widgets in step
    pub fn toggle_theme(&self, cx: &mut App) {
        let mode = self.theme.update(cx, |theme, cx| {
            theme.toggle_theme();
            cx.notify();
            theme.mode()
        });
        Theme::change(mode, None, cx);
        cx.refresh_windows();
    }
}
