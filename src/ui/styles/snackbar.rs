// SPDX-License-Identifier: MPL-2.0
//! Snackbar card and button styles.
//!
//! `presence` is the card's visibility in `0.0..=1.0`, applied as alpha to
//! every color so entering and closing cards fade.

use crate::ui::design_tokens::{opacity, radius, shadow};
use crate::ui::snackbar::Variant;
use iced::widget::{button, container, text};
use iced::{Background, Border, Color, Shadow, Theme};

fn faded(color: Color, presence: f32) -> Color {
    Color {
        a: color.a * presence.clamp(0.0, 1.0),
        ..color
    }
}

/// Card surface for a variant.
pub fn card(variant: Variant, presence: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(faded(variant.background(), presence))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: faded(shadow::LG.color, presence),
            ..shadow::LG
        },
        text_color: Some(faded(variant.foreground(), presence)),
        ..Default::default()
    }
}

/// Body line under the title, slightly lighter than the title.
pub fn body_text(variant: Variant, presence: f32) -> impl Fn(&Theme) -> text::Style {
    move |_theme: &Theme| text::Style {
        color: Some(faded(
            variant.foreground(),
            presence * opacity::SECONDARY_TEXT,
        )),
    }
}

/// Outlined action button drawn in the variant's foreground color.
pub fn action_button(
    variant: Variant,
    presence: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    super::button::outlined(faded(variant.foreground(), presence))
}

/// Borderless dismiss (cross) button.
pub fn dismiss_button(
    variant: Variant,
    presence: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    super::button::ghost(faded(variant.foreground(), presence))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn card_uses_variant_colors() {
        let style = card(Variant::Danger, 1.0)(&Theme::Light);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::DANGER_ACCENT))
        );
        assert_eq!(style.text_color, Some(palette::DANGER_MAIN));
    }

    #[test]
    fn hidden_card_is_transparent() {
        let style = card(Variant::Primary, 0.0)(&Theme::Dark);
        let Some(Background::Color(background)) = style.background else {
            panic!("card background should be a color");
        };
        assert_eq!(background.a, 0.0);
    }

    #[test]
    fn presence_is_clamped() {
        let style = card(Variant::Light, 3.0)(&Theme::Light);
        assert_eq!(style.text_color.map(|c| c.a), Some(1.0));
    }

    #[test]
    fn idle_buttons_have_no_background() {
        let action = action_button(Variant::Success, 1.0)(&Theme::Light, button::Status::Active);
        let dismiss = dismiss_button(Variant::Success, 1.0)(&Theme::Light, button::Status::Active);
        assert!(action.background.is_none());
        assert!(dismiss.background.is_none());
        assert_eq!(action.border.color, palette::SUCCESS_MAIN);
    }

    #[test]
    fn hovered_dismiss_is_tinted() {
        let style = dismiss_button(Variant::Warning, 1.0)(&Theme::Light, button::Status::Hovered);
        assert!(style.background.is_some());
    }
}
