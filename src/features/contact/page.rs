//! Contact Section
//!
//! Contact details, socials and the message form.

use gpui::{
    ClickEvent, Context, Entity, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, StatefulInteractiveElement, Styled, Subscription, Window, div, prelude::*, px,
};
use gpui_component::Icon;
use gpui_component::input::{Input, InputState};

use crate::app::entities::AppEntities;
use crate::assets::CustomIconName;
use crate::components::composite::section_header::SectionHeader;
use crate::components::layout::navbar::is_compact;
use crate::components::layout::section;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::domain::contact::{CONTACT_INFO, CONTACT_SOCIALS, ContactInfo, ContactKind, WHATSAPP_URL};
use crate::features::contact::controller::ContactController;
use crate::features::contact::form::{Field, FormError, FormFields, SubmitState};
use crate::theme::colors::Palette;
use crate::theme::typography::Typography;

/// Input entities for the four form fields
struct FormInputs {
    name: Entity<InputState>,
    email: Entity<InputState>,
    subject: Entity<InputState>,
    message: Entity<InputState>,
}

impl FormInputs {
    fn new(window: &mut Window, cx: &mut Context<ContactSection>) -> Self {
        let mut input = |field: Field| {
            cx.new(|cx| {
                let state = InputState::new(window, cx).placeholder(field.placeholder());
                match field {
                    Field::Message => state.multi_line(true).rows(5),
                    _ => state,
                }
            })
        };

        Self {
            name: input(Field::Name),
            email: input(Field::Email),
            subject: input(Field::Subject),
            message: input(Field::Message),
        }
    }

    fn state(&self, field: Field) -> &Entity<InputState> {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn snapshot(&self, cx: &gpui::App) -> FormFields {
        let value = |field: Field| self.state(field).read(cx).value().to_string();
        FormFields {
            name: value(Field::Name),
            email: value(Field::Email),
            subject: value(Field::Subject),
            message: value(Field::Message),
        }
    }
}

/// Contact section view
pub struct ContactSection {
    entities: AppEntities,
    controller: ContactController,
    inputs: FormInputs,
    submit: SubmitState,
    notice: Option<FormError>,
    _subscriptions: Vec<Subscription>,
}

impl ContactSection {
    pub fn new(entities: AppEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let subscriptions = vec![
            cx.observe(&entities.i18n, |_this, _, cx| cx.notify()),
            cx.observe(&entities.theme, |_this, _, cx| cx.notify()),
        ];

        Self {
            inputs: FormInputs::new(window, cx),
            entities,
            controller: ContactController::new(),
            submit: SubmitState::default(),
            notice: None,
            _subscriptions: subscriptions,
        }
    }

    /// Check the fields and enter the sending state
    fn submit(&mut self, cx: &mut Context<Self>) {
        if let Err(err) = self.inputs.snapshot(cx).validate() {
            tracing::debug!(%err, "Contact form refused");
            self.notice = Some(err);
            cx.notify();
            return;
        }
        self.notice = None;

        if !self.submit.begin() {
            return;
        }
        tracing::info!("Contact form submitted");
        self.controller.schedule_reset(cx);
        cx.notify();
    }

    /// Leave the sending state
    pub fn finish_submit(&mut self, cx: &mut Context<Self>) {
        self.submit.complete();
        cx.notify();
    }

    fn render_info(&self, info: &ContactInfo, palette: Palette, cx: &Context<Self>) -> impl IntoElement {
        let icon = match info.kind {
            ContactKind::Email => CustomIconName::Mail,
            ContactKind::Phone => CustomIconName::Phone,
            ContactKind::Location => CustomIconName::MapPin,
        };
        let href = info.href;
        let linked = href != "#";

        div()
            .id(SharedString::from(format!("contact-info-{}", info.label_key)))
            .flex()
            .items_center()
            .gap_4()
            .p_4()
            .rounded_xl()
            .bg(palette.surface)
            .border_1()
            .border_color(palette.border)
            .when(linked, |el| {
                el.cursor_pointer()
                    .hover(|s| s.border_color(palette.accent))
                    .on_click(move |_event: &ClickEvent, _window, cx| cx.open_url(href))
            })
            .child(
                div()
                    .size(px(44.0))
                    .flex()
                    .items_center()
                    .justify_center()
                    .rounded_lg()
                    .bg(palette.accent_soft)
                    .text_color(palette.accent)
                    .child(Icon::from(icon)),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .text_xs()
                            .text_color(palette.text_muted)
                            .child(self.entities.text(cx, info.label_key)),
                    )
                    .child(
                        div()
                            .font_weight(gpui::FontWeight::MEDIUM)
                            .text_color(palette.text_primary)
                            .child(info.value),
                    ),
            )
    }

    fn render_socials(&self, palette: Palette, cx: &Context<Self>) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_3()
            .child(
                div()
                    .text_sm()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(palette.text_primary)
                    .child(self.entities.text(cx, "contact.social")),
            )
            .child(
                div().flex().flex_wrap().gap_2().children(CONTACT_SOCIALS.iter().map(|social| {
                    div()
                        .id(SharedString::from(format!("contact-social-{}", social.name)))
                        .px_4()
                        .py_2()
                        .rounded_full()
                        .border_1()
                        .border_color(palette.border)
                        .text_sm()
                        .text_color(palette.text_secondary)
                        .when(!social.is_placeholder(), |el| {
                            el.cursor_pointer()
                                .hover(|s| s.border_color(palette.accent))
                                .on_click(move |_event: &ClickEvent, _window, cx| {
                                    cx.open_url(social.href)
                                })
                        })
                        .child(social.name)
                })),
            )
    }

    fn render_field(&self, field: Field, palette: Palette, cx: &Context<Self>) -> impl IntoElement {
        div()
            .flex_1()
            .flex()
            .flex_col()
            .gap_2()
            .child(
                div()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(palette.text_secondary)
                    .child(self.entities.text(cx, field.label_key())),
            )
            .child(Input::new(self.inputs.state(field)))
    }

    fn render_form(&self, compact: bool, palette: Palette, cx: &mut Context<Self>) -> impl IntoElement {
        let submit = Button::primary("contact-submit", self.entities.text(cx, "contact.form.send"))
            .size(ButtonSize::Large)
            .full_width()
            .loading(
                self.submit.is_submitting(),
                self.entities.text(cx, "contact.form.sending"),
            )
            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| this.submit(cx)));

        div()
            .flex_1()
            .flex()
            .flex_col()
            .gap_5()
            .p_8()
            .rounded_3xl()
            .bg(palette.surface)
            .border_1()
            .border_color(palette.border)
            .child(
                div()
                    .flex()
                    .gap_4()
                    .when(compact, |el| el.flex_col())
                    .child(self.render_field(Field::Name, palette, cx))
                    .child(self.render_field(Field::Email, palette, cx)),
            )
            .child(self.render_field(Field::Subject, palette, cx))
            .child(self.render_field(Field::Message, palette, cx))
            .when_some(self.notice, |el, notice| {
                el.child(
                    div()
                        .text_sm()
                        .text_color(palette.danger)
                        .child(self.entities.text(cx, notice.message_key())),
                )
            })
            .child(submit)
    }
}

impl Render for ContactSection {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let palette = self.entities.palette(cx);
        let compact = is_compact(window);

        let header = SectionHeader::new(
            self.entities.text(cx, "contact.label"),
            self.entities.text(cx, "contact.title.1"),
            self.entities.text(cx, "contact.title.2"),
        )
        .description(self.entities.text(cx, "contact.description"));

        let info = div()
            .flex_1()
            .flex()
            .flex_col()
            .gap_4()
            .child(
                div()
                    .text_size(px(Typography::TEXT_XL))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(palette.text_primary)
                    .child(self.entities.text(cx, "contact.info.title")),
            )
            .children(
                CONTACT_INFO
                    .iter()
                    .map(|info| self.render_info(info, palette, cx)),
            )
            .child(
                Button::outline("contact-whatsapp", self.entities.text(cx, "contact.whatsapp"))
                    .on_click(|_event: &ClickEvent, _window, cx| cx.open_url(WHATSAPP_URL)),
            )
            .child(self.render_socials(palette, cx));

        section::band(palette.background_alt, compact).child(
            section::column().child(header).child(
                div()
                    .flex()
                    .gap_12()
                    .when(compact, |el| el.flex_col())
                    .child(info)
                    .child(self.render_form(compact, palette, cx)),
            ),
        )
    }
}
