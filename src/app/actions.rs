//! Keyboard Actions and Shortcuts
//!
//! Defines global keyboard shortcuts and action dispatching.

use crate::app::navigation::Section;
use gpui::{Action, KeyBinding};
use schemars::JsonSchema;
use serde::Deserialize;

/// Menu actions (application-level)
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum MenuAction {
    /// Quit the application
    Quit,
}

/// Scroll to a section of the page
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum NavAction {
    Home,
    About,
    Portfolio,
    Services,
    Contact,
}

/// Store toggles and view-local toggles
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum ToggleAction {
    /// Flip dark/light
    Theme,
    /// Flip English/Malay
    Language,
    /// Close the compact navigation menu
    CloseMenu,
}

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    vec![
        // Application
        KeyBinding::new("secondary-q", MenuAction::Quit, None),
        // Navigation
        KeyBinding::new("secondary-1", NavAction::Home, None),
        KeyBinding::new("secondary-2", NavAction::About, None),
        KeyBinding::new("secondary-3", NavAction::Portfolio, None),
        KeyBinding::new("secondary-4", NavAction::Services, None),
        KeyBinding::new("secondary-5", NavAction::Contact, None),
        // Toggles
        KeyBinding::new("secondary-t", ToggleAction::Theme, None),
        KeyBinding::new("secondary-l", ToggleAction::Language, None),
        KeyBinding::new("escape", ToggleAction::CloseMenu, None),
    ]
}

impl NavAction {
    /// Section this action scrolls to
    pub fn section(self) -> Section {
        match self {
            NavAction::Home => Section::Home,
            NavAction::About => Section::About,
            NavAction::Portfolio => Section::Portfolio,
            NavAction::Services => Section::Services,
            NavAction::Contact => Section::Contact,
        }
    }
}
