// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Notifications**: Snackbar slide-in, close animation and display timing
//! - **Select**: Dropdown selector behavior

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Delay between showing a notification and starting its slide-in (ms).
pub const DEFAULT_ENTER_DELAY_MS: u64 = 100;

/// Upper bound for the slide-in delay (ms).
pub const MAX_ENTER_DELAY_MS: u64 = 1_000;

/// Duration of the close animation before the notification is removed (ms).
pub const DEFAULT_EXIT_DELAY_MS: u64 = 300;

/// Upper bound for the close animation (ms).
pub const MAX_EXIT_DELAY_MS: u64 = 2_000;

/// Display time of a notification that does not set its own duration (ms).
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 3_000;

/// Shortest non-zero display time accepted from the settings file (ms).
/// Zero stays allowed and means "until dismissed".
pub const MIN_NOTIFICATION_DURATION_MS: u64 = 500;

/// Longest display time accepted from the settings file (ms).
pub const MAX_NOTIFICATION_DURATION_MS: u64 = 60_000;

// ==========================================================================
// Select Defaults
// ==========================================================================

/// Whether new selects show a search field when opened.
pub const DEFAULT_SELECT_SEARCHABLE: bool = false;

/// Maximum height of the open option list (logical pixels).
pub const OPTION_LIST_MAX_HEIGHT: f32 = 240.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_ENTER_DELAY_MS <= MAX_ENTER_DELAY_MS);
    assert!(DEFAULT_EXIT_DELAY_MS <= MAX_EXIT_DELAY_MS);
    assert!(DEFAULT_NOTIFICATION_DURATION_MS >= MIN_NOTIFICATION_DURATION_MS);
    assert!(DEFAULT_NOTIFICATION_DURATION_MS <= MAX_NOTIFICATION_DURATION_MS);
};
