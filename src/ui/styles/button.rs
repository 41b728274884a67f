// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Translucent wash of `color` for hovered and pressed states.
fn wash(color: Color, status: button::Status) -> Option<Background> {
    let strength = match status {
        button::Status::Hovered => opacity::OVERLAY_SUBTLE,
        button::Status::Pressed => opacity::OVERLAY_MEDIUM,
        button::Status::Active | button::Status::Disabled => return None,
    };

    Some(Background::Color(Color {
        a: color.a * strength,
        ..color
    }))
}

/// Transparent button with a `color` outline and label.
pub fn outlined(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| button::Style {
        background: wash(color, status),
        text_color: color,
        border: Border {
            color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless icon button drawn in `color`.
pub fn ghost(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| button::Style {
        background: wash(color, status),
        text_color: color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
