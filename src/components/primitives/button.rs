//! Button Component

use gpui::{
    App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::theme::colors::transparent;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled amber call-to-action
    #[default]
    Primary,
    /// Bordered, transparent fill
    Outline,
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button
    Small,
    /// Medium button (default)
    #[default]
    Medium,
    /// Large button
    Large,
}

/// A pill-shaped button that follows the active theme
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    loading_label: Option<SharedString>,
    variant: ButtonVariant,
    size: ButtonSize,
    full_width: bool,
    loading: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            loading_label: None,
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            full_width: false,
            loading: false,
            on_click: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Stretch to the parent's width
    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    /// Show `label` and ignore clicks while `loading` is true
    pub fn loading(mut self, loading: bool, label: impl Into<SharedString>) -> Self {
        self.loading = loading;
        self.loading_label = Some(label.into());
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Create a primary button
    pub fn primary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Primary)
    }

    /// Create an outline button
    pub fn outline(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Outline)
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let palette = cx.global::<AppEntities>().palette(cx);

        let (bg_color, text_color, border_color, hover_bg) = match self.variant {
            ButtonVariant::Primary => (
                palette.accent,
                palette.on_accent,
                palette.accent,
                palette.accent_strong,
            ),
            ButtonVariant::Outline => (
                transparent(),
                palette.text_primary,
                palette.border,
                palette.surface_hover,
            ),
        };

        let (padding_x, padding_y, font_size) = match self.size {
            ButtonSize::Small => (px(14.0), px(6.0), px(12.0)),
            ButtonSize::Medium => (px(22.0), px(10.0), px(14.0)),
            ButtonSize::Large => (px(30.0), px(14.0), px(16.0)),
        };

        let inert = self.loading;
        let opacity = if inert { 0.7 } else { 1.0 };

        let label = match (self.loading, self.loading_label) {
            (true, Some(loading_label)) => loading_label,
            _ => self.label,
        };

        let mut element = div()
            .id(self.id)
            .flex()
            .items_center()
            .justify_center()
            .px(padding_x)
            .py(padding_y)
            .bg(bg_color)
            .border_1()
            .border_color(border_color)
            .text_color(text_color)
            .text_size(font_size)
            .font_weight(gpui::FontWeight::SEMIBOLD)
            .rounded_full()
            .opacity(opacity)
            .when(self.full_width, |el| el.w_full())
            .child(label);

        if !inert {
            element = element.cursor_pointer().hover(|s| s.bg(hover_bg));

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}
