//! Section Header Component
//!
//! The label pill, split title and lead paragraph every section opens with.

use gpui::{
    App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div, prelude::*,
    px,
};

use crate::app::entities::AppEntities;
use crate::theme::typography::Typography;

/// Section heading with an accented second half
#[derive(IntoElement)]
pub struct SectionHeader {
    label: SharedString,
    title: SharedString,
    highlight: SharedString,
    suffix: Option<SharedString>,
    description: Option<SharedString>,
    centered: bool,
}

impl SectionHeader {
    /// `title` renders plain, `highlight` in the accent color
    pub fn new(
        label: impl Into<SharedString>,
        title: impl Into<SharedString>,
        highlight: impl Into<SharedString>,
    ) -> Self {
        Self {
            label: label.into(),
            title: title.into(),
            highlight: highlight.into(),
            suffix: None,
            description: None,
            centered: true,
        }
    }

    /// Plain text after the highlight
    pub fn suffix(mut self, suffix: impl Into<SharedString>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Lead paragraph under the title
    pub fn description(mut self, description: impl Into<SharedString>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Align to the start instead of centering
    pub fn start_aligned(mut self) -> Self {
        self.centered = false;
        self
    }
}

impl RenderOnce for SectionHeader {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let palette = cx.global::<AppEntities>().palette(cx);

        div()
            .flex()
            .flex_col()
            .gap_4()
            .when(self.centered, |el| el.items_center())
            .child(
                div()
                    .px_4()
                    .py_1()
                    .rounded_full()
                    .bg(palette.accent_soft)
                    .text_color(palette.accent)
                    .text_size(px(Typography::TEXT_XS))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child(self.label),
            )
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .gap_3()
                    .when(self.centered, |el| el.justify_center())
                    .text_size(px(Typography::TEXT_4XL))
                    .font_weight(gpui::FontWeight::BOLD)
                    .child(div().text_color(palette.text_primary).child(self.title))
                    .child(div().text_color(palette.accent).child(self.highlight))
                    .when_some(self.suffix, |el, suffix| {
                        el.child(div().text_color(palette.text_primary).child(suffix))
                    }),
            )
            .when_some(self.description, |el, description| {
                el.child(
                    div()
                        .max_w(px(640.0))
                        .text_size(px(Typography::TEXT_LG))
                        .text_color(palette.text_secondary)
                        .when(self.centered, |el| el.text_center())
                        .child(description),
                )
            })
    }
}
