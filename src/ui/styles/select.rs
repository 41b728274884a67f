// SPDX-License-Identifier: MPL-2.0
//! Select field, option list and search input styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, text, text_input};
use iced::{Background, Border, Color, Theme};

fn dimmed(color: Color) -> Color {
    Color {
        a: color.a * opacity::DISABLED,
        ..color
    }
}

/// Style for the closed/open trigger of the select.
///
/// The error state wins over every other border color.
pub fn trigger(has_error: bool, open: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);

        let border_color = if has_error {
            colors.error
        } else if open {
            colors.focus_ring
        } else if status == button::Status::Hovered {
            colors.border_hover
        } else {
            colors.border
        };
        let border_width = if open {
            border::WIDTH_MD
        } else {
            border::WIDTH_SM
        };

        let style = button::Style {
            background: Some(Background::Color(colors.surface_primary)),
            text_color: colors.text_primary,
            border: Border {
                color: border_color,
                width: border_width,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        };

        match status {
            button::Status::Disabled => button::Style {
                background: Some(Background::Color(dimmed(colors.surface_primary))),
                text_color: dimmed(colors.text_primary),
                border: Border {
                    color: dimmed(border_color),
                    ..style.border
                },
                ..style
            },
            _ => style,
        }
    }
}

/// Style for one option row.
pub fn option(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);

        let (background, text_color) = match status {
            button::Status::Disabled => (None, dimmed(colors.text_primary)),
            _ if selected => (
                Some(Background::Color(colors.surface_selected)),
                colors.text_selected,
            ),
            button::Status::Hovered | button::Status::Pressed => (
                Some(Background::Color(colors.surface_hover)),
                colors.text_primary,
            ),
            button::Status::Active => (None, colors.text_primary),
        };

        button::Style {
            background,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Surface of the open option list.
pub fn menu(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::LG,
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Chip rendered for an option's tag.
pub fn tag(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_hover)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        text_color: Some(colors.text_muted),
        ..Default::default()
    }
}

/// Round avatar for options carrying a photo.
pub fn avatar(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_selected)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        text_color: Some(colors.text_selected),
        ..Default::default()
    }
}

/// Search field inside the open list.
pub fn search_input(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let colors = ColorScheme::for_theme(theme);

    let border_color = match status {
        text_input::Status::Focused { .. } => colors.focus_ring,
        text_input::Status::Hovered => colors.border_hover,
        _ => colors.border,
    };

    text_input::Style {
        background: Background::Color(colors.surface_primary),
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        icon: colors.text_muted,
        placeholder: colors.text_muted,
        value: colors.text_primary,
        selection: colors.surface_selected,
    }
}

/// Placeholder text and "empty"/"no match" messages.
pub fn muted_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_muted),
    }
}

/// Error message below the field and the required marker.
pub fn danger_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).error),
    }
}
