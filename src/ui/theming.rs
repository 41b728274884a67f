// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme selection for the widgets.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_hover: Color,
    pub surface_selected: Color,

    // Text colors
    pub text_primary: Color,
    pub text_muted: Color,
    pub text_selected: Color,

    // Borders
    pub border: Color,
    pub border_hover: Color,
    pub focus_ring: Color,

    // Semantic colors
    pub error: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_hover: palette::NEUTRAL_30,
            surface_selected: palette::PRIMARY_20,

            text_primary: palette::NEUTRAL_100,
            text_muted: palette::NEUTRAL_60,
            text_selected: palette::PRIMARY_80,

            border: palette::NEUTRAL_40,
            border_hover: palette::NEUTRAL_60,
            focus_ring: palette::PRIMARY_50,

            error: palette::DANGER_MAIN,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::NEUTRAL_100,
            surface_hover: palette::NEUTRAL_90,
            surface_selected: palette::PRIMARY_90,

            text_primary: palette::NEUTRAL_30,
            text_muted: palette::NEUTRAL_50,
            text_selected: palette::PRIMARY_30,

            border: palette::NEUTRAL_80,
            border_hover: palette::NEUTRAL_60,
            focus_ring: palette::PRIMARY_50,

            error: palette::DANGER_MAIN,
        }
    }

    /// Picks the scheme matching an iced theme's background brightness.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to light on detection error
                matches!(dark_light::detect(), Ok(dark_light::Mode::Dark))
            }
        }
    }

    /// The iced built-in theme the widgets are drawn against.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
