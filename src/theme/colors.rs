//! Colors - Folio Theme Colors
//!
//! Every view asks [`ThemeState::palette`] for the active variant at render
//! time instead of hard-coding colors.
//!
//! [`ThemeState::palette`]: crate::state::theme_state::ThemeState::palette

use gpui::{Rgba, rgb, rgba};

/// Amber accent shared by both variants
fn amber() -> Rgba {
    rgb(0xf59e0b)
}

/// Colors for one theme variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Page background
    pub background: Rgba,
    /// Alternate section background
    pub background_alt: Rgba,
    /// Cards and panels
    pub surface: Rgba,
    /// Hovered cards and inputs
    pub surface_hover: Rgba,
    /// Hairline borders
    pub border: Rgba,
    /// Headings and body copy
    pub text_primary: Rgba,
    /// Secondary copy
    pub text_secondary: Rgba,
    /// Captions and hints
    pub text_muted: Rgba,
    /// Brand accent
    pub accent: Rgba,
    /// Darker accent for hover
    pub accent_strong: Rgba,
    /// Translucent accent wash
    pub accent_soft: Rgba,
    /// Text drawn on top of the accent
    pub on_accent: Rgba,
    /// Solid navbar once the page scrolled
    pub navbar_solid: Rgba,
    /// Full-screen menu overlay
    pub overlay: Rgba,
    /// Caption backdrop over photos
    pub scrim: Rgba,
    /// Availability dot
    pub success: Rgba,
    /// Form notices
    pub danger: Rgba,
}

impl Palette {
    /// Dark variant (default)
    pub fn dark() -> Self {
        Self {
            background: rgb(0x0a0a0a),
            background_alt: rgb(0x171717),
            surface: rgb(0x171717),
            surface_hover: rgb(0x262626),
            border: rgb(0x262626),
            text_primary: rgb(0xffffff),
            text_secondary: rgb(0xd4d4d4),
            text_muted: rgb(0x737373),
            accent: amber(),
            accent_strong: rgb(0xd97706),
            accent_soft: rgba(0xf59e0b1a),
            on_accent: rgb(0x171717),
            navbar_solid: rgba(0x0a0a0ae6),
            overlay: rgba(0x0a0a0afa),
            scrim: rgba(0x000000b3),
            success: rgb(0x22c55e),
            danger: rgb(0xf87171),
        }
    }

    /// Light variant
    pub fn light() -> Self {
        Self {
            background: rgb(0xfafafa),
            background_alt: rgb(0xffffff),
            surface: rgb(0xffffff),
            surface_hover: rgb(0xf5f5f5),
            border: rgb(0xe5e5e5),
            text_primary: rgb(0x171717),
            text_secondary: rgb(0x525252),
            text_muted: rgb(0x737373),
            accent: amber(),
            accent_strong: rgb(0xd97706),
            accent_soft: rgba(0xf59e0b26),
            on_accent: rgb(0x171717),
            navbar_solid: rgba(0xffffffe6),
            overlay: rgba(0xfffffffa),
            scrim: rgba(0x00000099),
            success: rgb(0x16a34a),
            danger: rgb(0xdc2626),
        }
    }

    /// Pick the variant for a dark flag
    pub fn for_theme(dark: bool) -> Self {
        if dark { Self::dark() } else { Self::light() }
    }
}

/// Fully transparent color
pub fn transparent() -> Rgba {
    rgba(0x00000000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_differ_but_share_accent() {
        let dark = Palette::dark();
        let light = Palette::light();
        assert_ne!(dark.background, light.background);
        assert_ne!(dark.text_primary, light.text_primary);
        assert_eq!(dark.accent, light.accent);
    }

    #[test]
    fn test_for_theme() {
        assert_eq!(Palette::for_theme(true), Palette::dark());
        assert_eq!(Palette::for_theme(false), Palette::light());
    }
}
