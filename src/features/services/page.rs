//! Services Section

use gpui::{Context, IntoElement, ParentElement, Render, Styled, Window, div, prelude::*, px};

use crate::app::entities::AppEntities;
use crate::components::composite::section_header::SectionHeader;
use crate::components::layout::navbar::is_compact;
use crate::components::layout::section;
use crate::domain::service::{PROCESS_STEPS, SERVICES, Service};
use crate::theme::colors::Palette;
use crate::theme::typography::Typography;

/// Services section view
pub struct ServicesSection {
    entities: AppEntities,
}

impl ServicesSection {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.theme, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_service(&self, service: &Service, palette: Palette, cx: &Context<Self>) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_3()
            .p_8()
            .rounded_2xl()
            .bg(palette.surface)
            .border_1()
            .border_color(palette.border)
            .hover(|s| s.border_color(palette.accent).bg(palette.surface_hover))
            .child(
                div()
                    .size(px(56.0))
                    .flex()
                    .items_center()
                    .justify_center()
                    .rounded_xl()
                    .bg(palette.accent_soft)
                    .text_size(px(Typography::TEXT_2XL))
                    .child(service.icon),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_XL))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(palette.text_primary)
                    .child(self.entities.text(cx, service.title_key)),
            )
            .child(
                div()
                    .text_sm()
                    .line_height(px(22.0))
                    .text_color(palette.text_secondary)
                    .child(self.entities.text(cx, service.desc_key)),
            )
    }

    fn render_process(&self, palette: Palette, cx: &Context<Self>) -> impl IntoElement {
        let steps = PROCESS_STEPS.iter().enumerate().map(|(ix, key)| {
            div()
                .flex_1()
                .min_w(px(140.0))
                .flex()
                .flex_col()
                .items_center()
                .gap_3()
                .child(
                    div()
                        .size(px(48.0))
                        .flex()
                        .items_center()
                        .justify_center()
                        .rounded_full()
                        .bg(palette.accent)
                        .text_color(palette.on_accent)
                        .font_weight(gpui::FontWeight::BOLD)
                        .child(format!("{:02}", ix + 1)),
                )
                .child(
                    div()
                        .font_weight(gpui::FontWeight::MEDIUM)
                        .text_color(palette.text_primary)
                        .child(self.entities.text(cx, key)),
                )
        });

        div()
            .flex()
            .flex_col()
            .items_center()
            .gap_8()
            .pt_8()
            .child(
                div()
                    .text_size(px(Typography::TEXT_2XL))
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(palette.text_primary)
                    .child(self.entities.text(cx, "services.process.title")),
            )
            .child(div().w_full().flex().flex_wrap().gap_6().children(steps))
    }
}

impl Render for ServicesSection {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let palette = self.entities.palette(cx);
        let compact = is_compact(window);

        let header = SectionHeader::new(
            self.entities.text(cx, "services.label"),
            self.entities.text(cx, "services.title.1"),
            self.entities.text(cx, "services.title.2"),
        )
        .description(self.entities.text(cx, "services.description"));

        let cards = SERVICES
            .iter()
            .map(|service| self.render_service(service, palette, cx));

        section::band(palette.background_alt, compact).child(
            section::column()
                .child(header)
                .child(
                    div()
                        .grid()
                        .grid_cols(if compact { 1 } else { 3 })
                        .gap_6()
                        .children(cards),
                )
                .child(self.render_process(palette, cx)),
        )
    }
}
