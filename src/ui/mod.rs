// SPDX-License-Identifier: MPL-2.0
//! User interface components and their shared infrastructure.
//!
//! # Components
//!
//! - [`select`] - Dropdown selector with search filtering
//! - [`snackbar`] - Transient notification with timed enter/exit phases
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (outside-press detection)
//! - [`styles`] - Centralized styling (buttons, select, snackbar)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering

pub mod design_tokens;
pub mod icons;
pub mod select;
pub mod snackbar;
pub mod styles;
pub mod theming;
pub mod widgets;
