//! Workspace - Page Shell
//!
//! Holds the navbar above one vertically scrolling container with every
//! section and the footer. Also owns keyboard focus for the shortcuts and
//! the page scroll lock while the compact menu is open.

use gpui::{
    Context, Entity, FocusHandle, InteractiveElement, IntoElement, ParentElement, Render,
    ScrollWheelEvent, StatefulInteractiveElement, Styled, Subscription, Window, div, prelude::*,
};

use crate::app::actions::{NavAction, ToggleAction};
use crate::app::entities::AppEntities;
use crate::components::layout::footer::Footer;
use crate::components::layout::mobile_menu::MobileMenu;
use crate::components::layout::navbar::{Navbar, NavbarEvent, is_compact};
use crate::features::about::page::AboutSection;
use crate::features::contact::page::ContactSection;
use crate::features::hero::page::HeroSection;
use crate::features::portfolio::page::PortfolioSection;
use crate::features::services::page::ServicesSection;
use crate::features::testimonials::page::TestimonialsSection;

/// Page scrolling is suspended only while the compact menu covers it
fn page_locked(compact: bool, menu_open: bool) -> bool {
    compact && menu_open
}

/// Main workspace containing the page
pub struct Workspace {
    entities: AppEntities,
    focus_handle: FocusHandle,
    navbar: Entity<Navbar>,
    hero: Entity<HeroSection>,
    about: Entity<AboutSection>,
    portfolio: Entity<PortfolioSection>,
    services: Entity<ServicesSection>,
    testimonials: Entity<TestimonialsSection>,
    contact: Entity<ContactSection>,
    footer: Entity<Footer>,
    /// Menu is open; page scrolling is suspended in the compact layout
    scroll_locked: bool,
    /// Last scrolled state pushed to the navbar
    scrolled: bool,
    _subscriptions: Vec<Subscription>,
}

impl Workspace {
    pub fn new(entities: AppEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let navbar = cx.new(|cx| Navbar::new(entities.clone(), cx));
        let hero = cx.new(|cx| HeroSection::new(entities.clone(), cx));
        let about = cx.new(|cx| AboutSection::new(entities.clone(), cx));
        let portfolio = cx.new(|cx| PortfolioSection::new(entities.clone(), cx));
        let services = cx.new(|cx| ServicesSection::new(entities.clone(), cx));
        let testimonials = cx.new(|cx| TestimonialsSection::new(entities.clone(), cx));
        let contact = cx.new(|cx| ContactSection::new(entities.clone(), window, cx));
        let footer = cx.new(|cx| Footer::new(entities.clone(), cx));

        let subscriptions = vec![
            cx.subscribe(&navbar, |this, _navbar, event: &NavbarEvent, cx| match event {
                NavbarEvent::MenuToggled { open } => {
                    this.scroll_locked = *open;
                    cx.notify();
                }
            }),
            cx.observe(&entities.theme, |_this, _, cx| cx.notify()),
        ];

        let focus_handle = cx.focus_handle();
        focus_handle.focus(window);

        Self {
            entities,
            focus_handle,
            navbar,
            hero,
            about,
            portfolio,
            services,
            testimonials,
            contact,
            footer,
            scroll_locked: false,
            scrolled: false,
            _subscriptions: subscriptions,
        }
    }

    /// Check the scrolled state once the container has applied the wheel delta
    fn on_page_scroll(&mut self, _: &ScrollWheelEvent, window: &mut Window, cx: &mut Context<Self>) {
        cx.defer_in(window, |this, _window, cx| this.sync_scrolled(cx));
    }

    /// Restyle the navbar when the page crosses the scrolled threshold
    fn sync_scrolled(&mut self, cx: &mut Context<Self>) {
        let scrolled = self.entities.navigator.is_scrolled();
        if scrolled != self.scrolled {
            self.scrolled = scrolled;
            self.navbar.update(cx, |_, cx| cx.notify());
        }
    }

    fn on_nav_action(&mut self, action: &NavAction, window: &mut Window, cx: &mut Context<Self>) {
        let section = action.section();
        self.navbar
            .update(cx, |navbar, cx| navbar.navigate(section, window, cx));
    }

    fn on_toggle_action(&mut self, action: &ToggleAction, _window: &mut Window, cx: &mut Context<Self>) {
        match action {
            ToggleAction::Theme => self.entities.toggle_theme(cx),
            ToggleAction::Language => self.entities.toggle_language(cx),
            ToggleAction::CloseMenu => self.navbar.update(cx, |navbar, cx| navbar.close_menu(cx)),
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let palette = self.entities.palette(cx);
        let compact = is_compact(window);
        let menu_open = compact && self.navbar.read(cx).is_menu_open();
        let locked = page_locked(compact, self.scroll_locked);

        let page = div()
            .id("page")
            .flex_1()
            .w_full()
            .flex()
            .flex_col()
            .track_scroll(self.entities.navigator.scroll_handle())
            .map(|el| {
                if locked {
                    el.overflow_hidden()
                } else {
                    el.overflow_y_scroll()
                }
            })
            .on_scroll_wheel(cx.listener(Self::on_page_scroll))
            .child(self.hero.clone())
            .child(self.about.clone())
            .child(self.portfolio.clone())
            .child(self.services.clone())
            .child(self.testimonials.clone())
            .child(self.contact.clone())
            .child(self.footer.clone());

        div()
            .id("workspace")
            .key_context("Workspace")
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_nav_action))
            .on_action(cx.listener(Self::on_toggle_action))
            .size_full()
            .relative()
            .flex()
            .flex_col()
            .bg(palette.background)
            .text_color(palette.text_primary)
            .child(self.navbar.clone())
            .child(page)
            .when(menu_open, |el| el.child(MobileMenu::new(self.navbar.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_lock_needs_compact_layout_and_open_menu() {
        assert!(page_locked(true, true));
        assert!(!page_locked(true, false));
        assert!(!page_locked(false, true));
        assert!(!page_locked(false, false));
    }
}
