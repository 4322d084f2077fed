//! Footer Component

use chrono::Datelike;
use gpui::{
    ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::Section;
use crate::constants::CONTENT_MAX_WIDTH;
use crate::domain::contact::{FOOTER_SOCIALS, Social};
use crate::domain::service::{FOOTER_SERVICE_COUNT, SERVICES};
use crate::theme::colors::Palette;
use crate::theme::typography::Typography;

/// Copyright line for `year`
pub fn copyright_line(year: i32, suffix: &str) -> String {
    format!("© {year} Ahmad Faizal. {suffix}")
}

/// Footer component
pub struct Footer {
    entities: AppEntities,
}

impl Footer {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.theme, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_column(&self, title: SharedString, palette: Palette) -> gpui::Div {
        div().flex().flex_col().gap_3().child(
            div()
                .text_size(px(Typography::TEXT_SM))
                .font_weight(gpui::FontWeight::SEMIBOLD)
                .text_color(palette.text_primary)
                .child(title),
        )
    }

    fn render_social(social: &'static Social, palette: Palette) -> impl IntoElement {
        div()
            .id(SharedString::from(format!("footer-social-{}", social.name)))
            .text_sm()
            .text_color(palette.text_secondary)
            .when(!social.is_placeholder(), |el| {
                el.cursor_pointer()
                    .hover(|s| s.text_color(palette.accent))
                    .on_click(move |_event: &ClickEvent, _window, cx| {
                        cx.open_url(social.href);
                    })
            })
            .child(social.name)
    }
}

impl Render for Footer {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let palette = self.entities.palette(cx);
        let year = chrono::Local::now().year();

        let nav_links: Vec<_> = Section::nav_links()
            .map(|(section, key)| {
                let navigator = self.entities.navigator.clone();
                div()
                    .id(SharedString::from(format!("footer-nav-{}", section.anchor())))
                    .text_sm()
                    .text_color(palette.text_secondary)
                    .cursor_pointer()
                    .hover(|s| s.text_color(palette.accent))
                    .on_click(move |_event: &ClickEvent, window, _cx| {
                        navigator.scroll_to(section);
                        window.refresh();
                    })
                    .child(self.entities.text(cx, key))
            })
            .collect();

        let services: Vec<_> = SERVICES
            .iter()
            .take(FOOTER_SERVICE_COUNT)
            .map(|service| {
                div()
                    .text_sm()
                    .text_color(palette.text_secondary)
                    .child(self.entities.text(cx, service.title_key))
            })
            .collect();

        let brand = div()
            .flex()
            .flex_col()
            .gap_3()
            .max_w(px(320.0))
            .child(
                div()
                    .flex()
                    .text_size(px(Typography::TEXT_2XL))
                    .font_weight(gpui::FontWeight::BOLD)
                    .child(div().text_color(palette.text_primary).child("Ahmad"))
                    .child(div().text_color(palette.accent).child("Faizal")),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(palette.text_muted)
                    .child(self.entities.text(cx, "footer.tagline")),
            );

        let columns = div()
            .flex()
            .flex_wrap()
            .justify_between()
            .gap_12()
            .child(brand)
            .child(
                self.render_column(self.entities.text(cx, "footer.navigation"), palette)
                    .children(nav_links),
            )
            .child(
                self.render_column(self.entities.text(cx, "footer.services"), palette)
                    .children(services),
            )
            .child(
                self.render_column(self.entities.text(cx, "footer.connect"), palette).children(
                    FOOTER_SOCIALS
                        .iter()
                        .map(|social| Self::render_social(social, palette)),
                ),
            );

        let bottom = div()
            .flex()
            .flex_wrap()
            .justify_between()
            .gap_4()
            .pt_6()
            .border_t_1()
            .border_color(palette.border)
            .text_xs()
            .text_color(palette.text_muted)
            .child(copyright_line(
                year,
                &self.entities.text(cx, "footer.copyright"),
            ))
            .child(self.entities.text(cx, "footer.made"));

        div()
            .w_full()
            .flex()
            .justify_center()
            .bg(palette.background_alt)
            .border_t_1()
            .border_color(palette.border)
            .px_8()
            .py_12()
            .child(
                div()
                    .w_full()
                    .max_w(px(CONTENT_MAX_WIDTH))
                    .flex()
                    .flex_col()
                    .gap_10()
                    .child(columns)
                    .child(bottom),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright_line(2026, "All rights reserved."),
            "© 2026 Ahmad Faizal. All rights reserved."
        );
    }
}
