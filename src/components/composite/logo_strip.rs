//! Logo Strip Component
//!
//! A row of client logos loaded from remote URLs. The two strips on the page
//! behave differently when a logo fails to load, and both behaviors are kept
//! as named variants.

use gpui::{
    App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, StyledImage,
    Window, div, img, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::constants::COMPACT_LOGO_COUNT;
use crate::domain::client::ClientLogo;

/// What a logo turns into when its image cannot be loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoFallback {
    /// Hide the broken image and show the brand name instead
    Label,
    /// Leave the slot empty
    None,
}

/// How many logos to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoLayout {
    /// Every logo
    Full,
    /// Only the first few
    Compact,
}

impl LogoLayout {
    /// The visible subset of `logos`
    pub fn visible(self, logos: &[ClientLogo]) -> &[ClientLogo] {
        match self {
            LogoLayout::Full => logos,
            LogoLayout::Compact => &logos[..logos.len().min(COMPACT_LOGO_COUNT)],
        }
    }
}

/// Row of client logos
#[derive(IntoElement)]
pub struct LogoStrip {
    logos: &'static [ClientLogo],
    fallback: LogoFallback,
    layout: LogoLayout,
    label: Option<SharedString>,
}

impl LogoStrip {
    /// Create a strip over `logos`
    pub fn new(logos: &'static [ClientLogo], fallback: LogoFallback) -> Self {
        Self {
            logos,
            fallback,
            layout: LogoLayout::Full,
            label: None,
        }
    }

    /// Set the layout
    pub fn layout(mut self, layout: LogoLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Caption shown above the logos
    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl RenderOnce for LogoStrip {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let entities = cx.global::<AppEntities>();
        let palette = entities.palette(cx);
        let dark = entities.is_dark(cx);
        let logo_opacity = if dark { 0.6 } else { 0.5 };
        let fallback = self.fallback;

        let logos = self.layout.visible(self.logos).iter().map(move |logo| {
            let name = logo.name;
            let label_color = palette.text_muted;
            let image = img(logo.url).h(px(24.0)).max_w(px(112.0)).opacity(logo_opacity);
            let image = match fallback {
                LogoFallback::Label => image.with_fallback(move || {
                    div()
                        .text_sm()
                        .font_weight(gpui::FontWeight::BOLD)
                        .text_color(label_color)
                        .child(name)
                        .into_any_element()
                }),
                LogoFallback::None => image,
            };
            div().h(px(32.0)).flex().items_center().child(image)
        });

        div()
            .flex()
            .flex_col()
            .gap_4()
            .when_some(self.label, |el, label| {
                el.child(div().text_sm().text_color(palette.text_muted).child(label))
            })
            .child(div().flex().flex_wrap().items_center().gap_8().children(logos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::client::{ABOUT_CLIENTS, HERO_CLIENTS};

    #[test]
    fn test_compact_shows_first_four() {
        let visible = LogoLayout::Compact.visible(HERO_CLIENTS);
        assert_eq!(visible.len(), COMPACT_LOGO_COUNT);
        assert_eq!(visible[0].name, HERO_CLIENTS[0].name);
    }

    #[test]
    fn test_full_shows_all() {
        assert_eq!(LogoLayout::Full.visible(ABOUT_CLIENTS).len(), ABOUT_CLIENTS.len());
    }

    #[test]
    fn test_compact_on_short_list() {
        assert_eq!(LogoLayout::Compact.visible(&HERO_CLIENTS[..2]).len(), 2);
    }
}
