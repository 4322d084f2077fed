//! Testimonials Section
//!
//! One testimonial at a time with previous/next controls and dot indicators.

use gpui::{
    ClickEvent, Context, InteractiveElement, IntoElement, ObjectFit, ParentElement, Render,
    SharedString, StatefulInteractiveElement, Styled, StyledImage, Window, div, img, prelude::*,
    px,
};
use gpui_component::{Icon, IconName};

use crate::app::entities::AppEntities;
use crate::components::composite::section_header::SectionHeader;
use crate::components::layout::navbar::is_compact;
use crate::components::layout::section;
use crate::domain::testimonial::{TESTIMONIALS, Testimonial};
use crate::helpers::Carousel;
use crate::theme::colors::Palette;
use crate::theme::typography::Typography;

/// Testimonials section view
pub struct TestimonialsSection {
    entities: AppEntities,
    carousel: Carousel,
}

impl TestimonialsSection {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.theme, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            carousel: Carousel::new(TESTIMONIALS.len()),
        }
    }

    /// The testimonial under the cursor
    fn current(&self) -> Option<&'static Testimonial> {
        TESTIMONIALS.get(self.carousel.index())
    }

    fn render_card(&self, testimonial: &Testimonial, palette: Palette, cx: &Context<Self>) -> impl IntoElement {
        div()
            .w_full()
            .max_w(px(800.0))
            .flex()
            .flex_col()
            .items_center()
            .gap_6()
            .p_10()
            .rounded_3xl()
            .bg(palette.surface)
            .border_1()
            .border_color(palette.border)
            .child(
                div()
                    .text_size(px(Typography::TEXT_4XL))
                    .text_color(palette.accent)
                    .child("\u{201C}"),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_LG))
                    .line_height(px(30.0))
                    .italic()
                    .text_center()
                    .text_color(palette.text_secondary)
                    .child(self.entities.text(cx, testimonial.content_key)),
            )
            .child(div().text_color(palette.accent).child(testimonial.stars()))
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_4()
                    .child(
                        img(testimonial.avatar_url)
                            .size(px(56.0))
                            .rounded_full()
                            .object_fit(ObjectFit::Cover),
                    )
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .child(
                                div()
                                    .font_weight(gpui::FontWeight::SEMIBOLD)
                                    .text_color(palette.text_primary)
                                    .child(testimonial.name),
                            )
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(palette.text_muted)
                                    .child(self.entities.text(cx, testimonial.position_key)),
                            ),
                    ),
            )
    }

    fn render_arrow(
        &self,
        id: &'static str,
        icon: IconName,
        palette: Palette,
        step: fn(&mut Carousel),
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        div()
            .id(id)
            .size(px(44.0))
            .flex()
            .items_center()
            .justify_center()
            .rounded_full()
            .border_1()
            .border_color(palette.border)
            .text_color(palette.text_primary)
            .cursor_pointer()
            .hover(|s| s.bg(palette.accent).text_color(palette.on_accent))
            .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                step(&mut this.carousel);
                cx.notify();
            }))
            .child(Icon::new(icon))
    }

    fn render_dots(&self, palette: Palette, cx: &mut Context<Self>) -> impl IntoElement {
        let dots = (0..self.carousel.len()).map(|ix| {
            let active = self.carousel.is_active(ix);
            div()
                .id(SharedString::from(format!("testimonial-dot-{ix}")))
                .h(px(10.0))
                .w(px(if active { 28.0 } else { 10.0 }))
                .rounded_full()
                .bg(if active { palette.accent } else { palette.border })
                .cursor_pointer()
                .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                    this.carousel.jump(ix);
                    cx.notify();
                }))
        });
        let dots: Vec<_> = dots.collect();

        div().flex().items_center().gap_2().children(dots)
    }
}

impl Render for TestimonialsSection {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let palette = self.entities.palette(cx);
        let compact = is_compact(window);

        let header = SectionHeader::new(
            self.entities.text(cx, "testimonials.label"),
            self.entities.text(cx, "testimonials.title.1"),
            self.entities.text(cx, "testimonials.title.2"),
        )
        .description(self.entities.text(cx, "testimonials.description"));

        let controls = div()
            .flex()
            .items_center()
            .gap_6()
            .child(self.render_arrow(
                "testimonial-prev",
                IconName::ChevronLeft,
                palette,
                Carousel::retreat,
                cx,
            ))
            .child(self.render_dots(palette, cx))
            .child(self.render_arrow(
                "testimonial-next",
                IconName::ChevronRight,
                palette,
                Carousel::advance,
                cx,
            ));

        section::band(palette.background, compact).child(
            section::column()
                .items_center()
                .child(header)
                .when_some(self.current(), |el, testimonial| {
                    el.child(self.render_card(testimonial, palette, cx))
                })
                .child(controls),
        )
    }
}
