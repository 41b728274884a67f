// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for widget texts.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Locale resolution from an explicit request, the config, or system settings
//! - `.ftl` translation files embedded at compile time
//! - Runtime language switching
//! - Fallback to the default locale when a locale is unavailable

pub mod fluent;
