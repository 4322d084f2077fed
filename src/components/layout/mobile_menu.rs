//! Mobile Menu Overlay
//!
//! Full-width link list shown under the navbar in the compact layout while
//! the navbar's menu is open.

use gpui::{
    App, ClickEvent, Entity, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::Section;
use crate::components::layout::navbar::Navbar;
use crate::components::primitives::button::Button;
use crate::constants::NAVBAR_HEIGHT;

/// Overlay listing the navigation links
#[derive(IntoElement)]
pub struct MobileMenu {
    navbar: Entity<Navbar>,
}

impl MobileMenu {
    pub fn new(navbar: Entity<Navbar>) -> Self {
        Self { navbar }
    }
}

impl RenderOnce for MobileMenu {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let entities = cx.global::<AppEntities>().clone();
        let palette = entities.palette(cx);

        let links = Section::nav_links().map(|(section, key)| {
            let navbar = self.navbar.clone();
            div()
                .id(SharedString::from(format!("mobile-nav-{}", section.anchor())))
                .w_full()
                .px_6()
                .py_4()
                .text_lg()
                .text_color(palette.text_primary)
                .border_b_1()
                .border_color(palette.border)
                .cursor_pointer()
                .hover(|s| s.text_color(palette.accent))
                .on_click(move |_event: &ClickEvent, window, cx| {
                    navbar.update(cx, |navbar, cx| navbar.navigate(section, window, cx));
                })
                .child(entities.text(cx, key))
        });
        let links: Vec<_> = links.collect();

        let navbar = self.navbar.clone();
        let cta = Button::primary("mobile-nav-cta", entities.text(cx, "hero.cta.contact"))
            .full_width()
            .on_click(move |_event: &ClickEvent, window, cx| {
                navbar.update(cx, |navbar, cx| navbar.navigate(Section::Contact, window, cx));
            });

        div()
            .id("mobile-menu")
            .absolute()
            .top(px(NAVBAR_HEIGHT))
            .left_0()
            .right_0()
            .bottom_0()
            .flex()
            .flex_col()
            .bg(palette.overlay)
            .occlude()
            .children(links)
            .child(div().p_6().child(cta))
    }
}
