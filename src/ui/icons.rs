// SPDX-License-Identifier: MPL-2.0
//! Centralized module for the SVG icons used by the widgets.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock`, so repeated `view` calls reuse the parsed data.
//! Stroke icons are monochrome and meant to be tinted with [`tinted`];
//! the brand logo keeps its own colors.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `dismiss_notification`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Defines an icon function returning an `Svg` with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] =
                include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(chevron_down, "chevron-down.svg", "Downward chevron (select trigger).");
define_icon!(check, "check.svg", "Check mark (selected option).");
define_icon!(search, "search.svg", "Magnifier (select search field).");
define_icon!(cross, "cross.svg", "Cross (dismiss).");
define_icon!(info, "info.svg", "Circled i.");
define_icon!(warning, "warning.svg", "Triangle with exclamation mark.");
define_icon!(alert_circle, "alert-circle.svg", "Circle with exclamation mark.");
define_icon!(check_circle, "check-circle.svg", "Circle with check mark.");
define_icon!(logo, "logo.svg", "Brand logo, drawn with its own colors.");

/// Sizes an icon to a square of `size` logical pixels.
pub fn sized<'a>(icon: Svg<'a>, size: f32) -> Svg<'a> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Sizes and tints a monochrome icon.
pub fn tinted<'a>(icon: Svg<'a>, size: f32, color: Color) -> Svg<'a> {
    sized(icon, size).style(move |_theme: &Theme, _status: svg::Status| svg::Style {
        color: Some(color),
    })
}
