//! About Section

use gpui::{
    ClickEvent, Context, IntoElement, ObjectFit, ParentElement, Render, Styled, StyledImage,
    Window, div, img, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::Section;
use crate::components::composite::logo_strip::{LogoFallback, LogoStrip};
use crate::components::composite::section_header::SectionHeader;
use crate::components::layout::navbar::is_compact;
use crate::components::layout::section;
use crate::components::primitives::button::Button;
use crate::domain::about::{ACHIEVEMENTS, Achievement, CoreValue, PORTRAIT_URL, REASONS, VALUES};
use crate::domain::client::ABOUT_CLIENTS;
use crate::theme::colors::Palette;
use crate::theme::typography::Typography;

/// About section view
pub struct AboutSection {
    entities: AppEntities,
}

impl AboutSection {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.theme, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_value(&self, value: &CoreValue, palette: Palette, cx: &Context<Self>) -> impl IntoElement {
        div()
            .flex_1()
            .min_w(px(220.0))
            .flex()
            .flex_col()
            .gap_2()
            .p_5()
            .rounded_xl()
            .bg(palette.surface)
            .border_1()
            .border_color(palette.border)
            .child(div().text_xl().text_color(palette.accent).child(value.icon))
            .child(
                div()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(palette.text_primary)
                    .child(self.entities.text(cx, value.title_key)),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(palette.text_secondary)
                    .child(self.entities.text(cx, value.desc_key)),
            )
    }

    fn render_achievement(
        &self,
        achievement: &Achievement,
        palette: Palette,
        cx: &Context<Self>,
    ) -> impl IntoElement {
        div()
            .flex_1()
            .flex()
            .flex_col()
            .items_center()
            .gap_1()
            .p_4()
            .rounded_xl()
            .bg(palette.accent_soft)
            .child(div().text_lg().child(achievement.icon))
            .child(
                div()
                    .text_size(px(Typography::TEXT_2XL))
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(palette.accent)
                    .child(achievement.number),
            )
            .child(
                div()
                    .text_xs()
                    .text_color(palette.text_secondary)
                    .child(self.entities.text(cx, achievement.label_key)),
            )
    }
}

impl Render for AboutSection {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let palette = self.entities.palette(cx);
        let compact = is_compact(window);

        let header = SectionHeader::new(
            self.entities.text(cx, "about.label"),
            self.entities.text(cx, "about.title.1"),
            self.entities.text(cx, "about.title.2"),
        )
        .suffix(self.entities.text(cx, "about.title.3"))
        .start_aligned()
        .description(self.entities.text(cx, "about.description"));

        let portrait = div()
            .flex_none()
            .flex()
            .flex_col()
            .gap_6()
            .child(
                img(PORTRAIT_URL)
                    .w(px(380.0))
                    .h(px(475.0))
                    .rounded_3xl()
                    .object_fit(ObjectFit::Cover),
            )
            .child(
                div()
                    .max_w(px(380.0))
                    .pl_4()
                    .border_l_4()
                    .border_color(palette.accent)
                    .italic()
                    .text_color(palette.text_secondary)
                    .child(self.entities.text(cx, "about.quote")),
            );

        let reasons = div()
            .flex()
            .flex_col()
            .gap_3()
            .child(
                div()
                    .text_lg()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(palette.text_primary)
                    .child(self.entities.text(cx, "about.why.title")),
            )
            .children(REASONS.iter().map(|key| {
                div()
                    .flex()
                    .gap_3()
                    .text_color(palette.text_secondary)
                    .child(div().text_color(palette.accent).child("✓"))
                    .child(self.entities.text(cx, key))
            }));

        let project_nav = self.entities.navigator.clone();
        let ctas = div()
            .flex()
            .flex_wrap()
            .gap_4()
            .child(
                Button::primary("about-cta-project", self.entities.text(cx, "about.cta.project"))
                    .on_click(move |_event: &ClickEvent, window, _cx| {
                        project_nav.scroll_to(Section::Contact);
                        window.refresh();
                    }),
            )
            // No CV file ships with the app; the button is presentational.
            .child(Button::outline("about-cta-cv", self.entities.text(cx, "about.cta.cv")));

        let details = div()
            .flex_1()
            .flex()
            .flex_col()
            .gap_8()
            .child(
                div()
                    .text_lg()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(palette.text_primary)
                    .child(self.entities.text(cx, "about.values.title")),
            )
            .child(
                div().flex().flex_wrap().gap_4().children(
                    VALUES
                        .iter()
                        .map(|value| self.render_value(value, palette, cx)),
                ),
            )
            .child(
                div().flex().gap_4().children(
                    ACHIEVEMENTS
                        .iter()
                        .map(|achievement| self.render_achievement(achievement, palette, cx)),
                ),
            )
            .child(reasons)
            .child(ctas);

        section::band(palette.background_alt, compact).child(
            section::column()
                .child(header)
                .child(
                    div()
                        .flex()
                        .gap_16()
                        .when(compact, |el| el.flex_col().items_center())
                        .child(portrait)
                        .child(details),
                )
                .child(
                    div()
                        .flex()
                        .justify_center()
                        .child(
                            LogoStrip::new(ABOUT_CLIENTS, LogoFallback::None)
                                .label(self.entities.text(cx, "about.clients")),
                        ),
                ),
        )
    }
}
