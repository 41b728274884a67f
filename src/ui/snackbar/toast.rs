// SPDX-License-Identifier: MPL-2.0
//! Card rendering for the live notification.

use super::lifecycle::{Message, Phase, Timing};
use super::notification::{Notification, NotificationIcon};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::svg::Svg;
use iced::widget::{button, container, tooltip, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Padding};
use std::time::Duration;

/// Card visibility `elapsed` after the live notification entered `phase`.
///
/// Fades in over the enter delay, holds while `Visible` and fades out over
/// the exit delay.
#[must_use]
pub fn presence(phase: Phase, elapsed: Duration, timing: &Timing) -> f32 {
    match phase {
        Phase::Entering => progress(elapsed, timing.enter_delay),
        Phase::Visible => opacity::OPAQUE,
        Phase::Closing => opacity::OPAQUE - progress(elapsed, timing.exit_delay),
    }
}

fn progress(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

/// Vertical offset of the card; it slides in from below and back out.
#[must_use]
pub fn slide_offset(presence: f32) -> f32 {
    sizing::SNACKBAR_SLIDE * (1.0 - presence.clamp(0.0, 1.0))
}

/// Renders a single notification card.
///
/// The buttons stop reacting once the notification is closing.
pub fn view<'a>(
    notification: &'a Notification,
    phase: Phase,
    presence: f32,
    i18n: &I18n,
) -> Element<'a, Message> {
    let id = notification.id();
    let variant = notification.variant_kind();
    let interactive = phase != Phase::Closing;

    let icon = icon_for(notification.icon_kind(), variant.foreground());

    let mut text_block = Column::new().spacing(spacing::XXS).push(
        Text::new(notification.title())
            .size(typography::BODY_LG)
            .width(Length::Fill),
    );
    if let Some(body) = notification.body_text() {
        text_block = text_block.push(
            Text::new(body)
                .size(typography::BODY)
                .style(styles::snackbar::body_text(variant, presence)),
        );
    }

    let mut content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icon)
        .push(Container::new(text_block).width(Length::Fill));

    if let Some(label) = notification.action_label() {
        content = content.push(
            button(Text::new(label).size(typography::BODY))
                .on_press_maybe(interactive.then_some(Message::ActionPressed(id)))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::snackbar::action_button(variant, presence)),
        );
    }

    let dismiss = button(icons::tinted(
        icons::cross(),
        sizing::ICON_SM,
        variant.foreground(),
    ))
    .on_press_maybe(interactive.then_some(Message::Dismiss(id)))
    .padding(spacing::XXS)
    .style(styles::snackbar::dismiss_button(variant, presence));
    content = content.push(tooltip(
        dismiss,
        Text::new(i18n.tr("snackbar-dismiss")).size(typography::CAPTION),
        tooltip::Position::Top,
    ));

    Container::new(content)
        .max_width(sizing::SNACKBAR_MAX_WIDTH)
        .padding(spacing::MD)
        .style(styles::snackbar::card(variant, presence))
        .into()
}

/// Positions the card at the bottom right of the available space.
pub fn view_overlay<'a>(
    notification: &'a Notification,
    phase: Phase,
    presence: f32,
    i18n: &I18n,
) -> Element<'a, Message> {
    let offset = slide_offset(presence);

    container(view(notification, phase, presence, i18n))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(Padding {
            bottom: spacing::MD - offset.min(spacing::MD),
            ..Padding::new(spacing::MD)
        })
        .into()
}

fn icon_for<'a>(kind: NotificationIcon, color: iced::Color) -> Svg<'a> {
    match kind {
        NotificationIcon::Logo => icons::sized(icons::logo(), sizing::ICON_XL),
        NotificationIcon::Info => icons::tinted(icons::info(), sizing::ICON_MD, color),
        NotificationIcon::Warning => icons::tinted(icons::warning(), sizing::ICON_MD, color),
        NotificationIcon::Alert => icons::tinted(icons::alert_circle(), sizing::ICON_MD, color),
        NotificationIcon::Success => icons::tinted(icons::check_circle(), sizing::ICON_MD, color),
    }
}
