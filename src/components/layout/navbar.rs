//! Navbar Component
//!
//! Brand, section links, theme toggle, language switch and the compact
//! menu button. The menu-open flag is local to the navbar; the workspace
//! listens for [`NavbarEvent`] to lock page scrolling while it is open.

use gpui::{
    ClickEvent, Context, EventEmitter, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use gpui_component::{Icon, IconName};

use crate::app::entities::AppEntities;
use crate::app::navigation::Section;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::constants::{COMPACT_BREAKPOINT, NAVBAR_HEIGHT};
use crate::i18n::Locale;
use crate::theme::colors::{Palette, transparent};

/// Open/closed flag for the compact navigation menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Whether the menu is showing
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the flag, returning the new value
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu; returns `true` if it was open
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

/// Events the navbar emits to the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarEvent {
    /// The compact menu opened or closed
    MenuToggled { open: bool },
}

/// Whether the window is narrow enough for the collapsed navbar
pub fn is_compact(window: &Window) -> bool {
    window.viewport_size().width < px(COMPACT_BREAKPOINT)
}

/// Navbar component
pub struct Navbar {
    entities: AppEntities,
    menu: MenuState,
}

impl EventEmitter<NavbarEvent> for Navbar {}

impl Navbar {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe store changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.theme, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            menu: MenuState::default(),
        }
    }

    /// Whether the compact menu is open
    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    /// Open or close the compact menu
    pub fn toggle_menu(&mut self, cx: &mut Context<Self>) {
        let open = self.menu.toggle();
        tracing::debug!(open, "Menu toggled");
        cx.emit(NavbarEvent::MenuToggled { open });
        cx.notify();
    }

    /// Close the compact menu if it is open
    pub fn close_menu(&mut self, cx: &mut Context<Self>) {
        if self.menu.close() {
            cx.emit(NavbarEvent::MenuToggled { open: false });
            cx.notify();
        }
    }

    /// Close the menu and scroll the page to `section`
    pub fn navigate(&mut self, section: Section, window: &mut Window, cx: &mut Context<Self>) {
        self.close_menu(cx);
        self.entities.navigator.scroll_to(section);
        window.refresh();
    }

    fn render_brand(&self, palette: Palette, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("brand")
            .flex()
            .text_size(px(22.0))
            .font_weight(gpui::FontWeight::BOLD)
            .cursor_pointer()
            .on_click(cx.listener(|this, _event: &ClickEvent, window, cx| {
                this.navigate(Section::Home, window, cx);
            }))
            .child(div().text_color(palette.text_primary).child("Ahmad"))
            .child(div().text_color(palette.accent).child("Faizal"))
    }

    fn render_link(
        &self,
        section: Section,
        label: SharedString,
        palette: Palette,
        cx: &mut Context<Self>,
    ) -> impl IntoElement + use<> {
        div()
            .id(SharedString::from(format!("nav-{}", section.anchor())))
            .px_4()
            .py_2()
            .text_sm()
            .text_color(palette.text_secondary)
            .cursor_pointer()
            .hover(|s| s.text_color(palette.text_primary))
            .on_click(cx.listener(move |this, _event: &ClickEvent, window, cx| {
                this.navigate(section, window, cx);
            }))
            .child(label)
    }

    fn render_theme_toggle(&self, palette: Palette, dark: bool) -> impl IntoElement {
        let entities = self.entities.clone();
        let icon = if dark { IconName::Sun } else { IconName::Moon };

        div()
            .id("theme-toggle")
            .size(px(40.0))
            .flex()
            .items_center()
            .justify_center()
            .rounded_full()
            .bg(palette.surface)
            .text_color(palette.accent)
            .cursor_pointer()
            .hover(|s| s.bg(palette.surface_hover))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                entities.toggle_theme(cx);
            })
            .child(Icon::new(icon))
    }

    fn render_language_switch(&self, palette: Palette, locale: Locale) -> impl IntoElement {
        let entities = self.entities.clone();

        let segment = move |option: Locale| {
            let active = option == locale;
            div()
                .px_3()
                .py_1()
                .rounded_full()
                .text_xs()
                .font_weight(gpui::FontWeight::SEMIBOLD)
                .bg(if active { palette.accent } else { transparent() })
                .text_color(if active { palette.on_accent } else { palette.text_muted })
                .child(option.short_label())
        };

        div()
            .id("lang-switcher")
            .flex()
            .items_center()
            .p_1()
            .rounded_full()
            .border_1()
            .border_color(palette.border)
            .bg(palette.surface)
            .cursor_pointer()
            .hover(|s| s.border_color(palette.accent))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                entities.toggle_language(cx);
            })
            .children(Locale::ALL.into_iter().map(segment))
    }

    fn render_menu_button(&self, palette: Palette, cx: &mut Context<Self>) -> impl IntoElement {
        let icon = if self.menu.is_open() {
            IconName::Close
        } else {
            IconName::Menu
        };

        div()
            .id("menu-button")
            .size(px(40.0))
            .flex()
            .items_center()
            .justify_center()
            .text_color(palette.accent)
            .cursor_pointer()
            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                this.toggle_menu(cx);
            }))
            .child(Icon::new(icon))
    }
}

impl Render for Navbar {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let palette = self.entities.palette(cx);
        let dark = self.entities.is_dark(cx);
        let locale = self.entities.i18n.read(cx).locale();
        let compact = is_compact(window);
        let scrolled = self.entities.navigator.is_scrolled();

        let links: Vec<_> = Section::nav_links()
            .map(|(section, key)| (section, self.entities.text(cx, key)))
            .collect();
        let cta_label = self.entities.text(cx, "hero.cta.contact");

        div()
            .h(px(NAVBAR_HEIGHT))
            .w_full()
            .flex()
            .items_center()
            .justify_between()
            .px_8()
            .bg(if scrolled { palette.navbar_solid } else { palette.background })
            .border_b_1()
            .border_color(if scrolled { palette.border } else { transparent() })
            .child(self.render_brand(palette, cx))
            .when(!compact, |el| {
                el.child(
                    div().flex().items_center().gap_1().children(
                        links
                            .into_iter()
                            .map(|(section, label)| self.render_link(section, label, palette, cx)),
                    ),
                )
            })
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(self.render_theme_toggle(palette, dark))
                    .child(self.render_language_switch(palette, locale))
                    .when(!compact, |el| {
                        el.child(
                            Button::primary("nav-cta", cta_label)
                                .size(ButtonSize::Small)
                                .on_click(cx.listener(|this, _event: &ClickEvent, window, cx| {
                                    this.navigate(Section::Contact, window, cx);
                                })),
                        )
                    })
                    .when(compact, |el| el.child(self.render_menu_button(palette, cx))),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_starts_closed() {
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn test_menu_toggle() {
        let mut menu = MenuState::default();
        assert!(menu.toggle());
        assert!(menu.is_open());
        assert!(!menu.toggle());
        assert!(!menu.is_open());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.close());
        assert!(!menu.close());
        assert!(!menu.is_open());
    }
}
