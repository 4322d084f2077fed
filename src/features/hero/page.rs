//! Hero Section
//!
//! Greeting, headline, calls to action, stats and the trusted-by strip.

use gpui::{
    ClickEvent, Context, IntoElement, ObjectFit, ParentElement, Render, Styled, StyledImage,
    Window, div, img, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::Section;
use crate::components::composite::logo_strip::{LogoFallback, LogoLayout, LogoStrip};
use crate::components::layout::navbar::is_compact;
use crate::components::layout::section;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::domain::client::HERO_CLIENTS;
use crate::domain::hero::{BADGES, PROFILE_PHOTO_URL, STATS, Stat};
use crate::theme::colors::Palette;
use crate::theme::typography::Typography;

/// Hero section view
pub struct HeroSection {
    entities: AppEntities,
}

impl HeroSection {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.theme, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_availability(&self, palette: Palette, cx: &Context<Self>) -> impl IntoElement {
        div()
            .flex()
            .items_center()
            .gap_2()
            .px_4()
            .py_2()
            .rounded_full()
            .border_1()
            .border_color(palette.border)
            .bg(palette.surface)
            .text_sm()
            .text_color(palette.text_secondary)
            .child(div().size(px(8.0)).rounded_full().bg(palette.success))
            .child(self.entities.text(cx, "hero.available"))
    }

    fn render_stat(&self, stat: &Stat, palette: Palette, cx: &Context<Self>) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_1()
            .min_w(px(120.0))
            .child(
                div()
                    .text_size(px(Typography::TEXT_3XL))
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(palette.accent)
                    .child(stat.number),
            )
            .child(
                div()
                    .flex()
                    .gap_1()
                    .text_sm()
                    .text_color(palette.text_muted)
                    .child(stat.icon)
                    .child(self.entities.text(cx, stat.label_key)),
            )
    }

    fn render_badge(&self, badge: &Stat, palette: Palette, cx: &Context<Self>) -> impl IntoElement {
        div()
            .flex()
            .items_center()
            .gap_3()
            .px_4()
            .py_3()
            .rounded_xl()
            .bg(palette.surface)
            .border_1()
            .border_color(palette.border)
            .shadow_lg()
            .child(div().text_xl().child(badge.icon))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(palette.text_primary)
                            .child(badge.number),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(palette.text_muted)
                            .child(self.entities.text(cx, badge.label_key)),
                    ),
            )
    }

    fn render_portrait(&self, palette: Palette, cx: &Context<Self>) -> impl IntoElement {
        div()
            .relative()
            .flex_none()
            .child(
                img(PROFILE_PHOTO_URL)
                    .w(px(360.0))
                    .h(px(480.0))
                    .rounded_3xl()
                    .border_1()
                    .border_color(palette.border)
                    .object_fit(ObjectFit::Cover),
            )
            .child(
                div()
                    .absolute()
                    .left(px(-32.0))
                    .bottom(px(48.0))
                    .child(self.render_badge(&BADGES[0], palette, cx)),
            )
            .child(
                div()
                    .absolute()
                    .right(px(-24.0))
                    .top(px(40.0))
                    .child(self.render_badge(&BADGES[1], palette, cx)),
            )
    }
}

impl Render for HeroSection {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let palette = self.entities.palette(cx);
        let compact = is_compact(window);

        let work_nav = self.entities.navigator.clone();
        let contact_nav = self.entities.navigator.clone();

        let ctas = div()
            .flex()
            .flex_wrap()
            .gap_4()
            .child(
                Button::primary("hero-cta-work", self.entities.text(cx, "hero.cta.work"))
                    .size(ButtonSize::Large)
                    .on_click(move |_event: &ClickEvent, window, _cx| {
                        work_nav.scroll_to(Section::Portfolio);
                        window.refresh();
                    }),
            )
            .child(
                Button::outline("hero-cta-contact", self.entities.text(cx, "hero.cta.contact"))
                    .size(ButtonSize::Large)
                    .on_click(move |_event: &ClickEvent, window, _cx| {
                        contact_nav.scroll_to(Section::Contact);
                        window.refresh();
                    }),
            );

        let intro = div()
            .flex_1()
            .flex()
            .flex_col()
            .gap_6()
            .child(self.render_availability(palette, cx))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(
                        div()
                            .text_lg()
                            .text_color(palette.text_secondary)
                            .child(self.entities.text(cx, "hero.greeting")),
                    )
                    .child(
                        div()
                            .text_size(px(if compact {
                                Typography::TEXT_4XL
                            } else {
                                Typography::TEXT_HERO
                            }))
                            .font_weight(gpui::FontWeight::EXTRA_BOLD)
                            .text_color(palette.text_primary)
                            .child(self.entities.text(cx, "hero.name")),
                    )
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_2XL))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(palette.accent)
                            .child(self.entities.text(cx, "hero.title")),
                    ),
            )
            .child(
                div()
                    .max_w(px(560.0))
                    .text_size(px(Typography::TEXT_LG))
                    .line_height(px(28.0))
                    .text_color(palette.text_secondary)
                    .child(self.entities.text(cx, "hero.description")),
            )
            .child(ctas)
            .child(
                div().flex().flex_wrap().gap_8().pt_4().children(
                    STATS
                        .iter()
                        .map(|stat| self.render_stat(stat, palette, cx)),
                ),
            );

        let top = div()
            .flex()
            .gap_16()
            .items_center()
            .when(compact, |el| el.flex_col())
            .child(intro)
            .child(self.render_portrait(palette, cx));

        section::band(palette.background, compact).child(
            section::column()
                .child(top)
                .child(
                    LogoStrip::new(HERO_CLIENTS, LogoFallback::Label)
                        .layout(LogoLayout::Compact)
                        .label(self.entities.text(cx, "hero.trusted")),
                )
                .child(
                    div()
                        .flex()
                        .justify_center()
                        .text_xs()
                        .text_color(palette.text_muted)
                        .child(self.entities.text(cx, "hero.scroll")),
                ),
        )
    }
}
