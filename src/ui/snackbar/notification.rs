// SPDX-License-Identifier: MPL-2.0
//! Notification request data.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::Duration;

/// Unique identifier for a shown notification.
///
/// Every `Notification` gets a fresh id, so showing the same content twice
/// yields two distinct instances with independent timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Color treatment of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Primary,
    Tertiary,
    Success,
    Warning,
    Danger,
    Gray,
    Dark,
    Light,
}

impl Variant {
    pub const ALL: [Variant; 8] = [
        Variant::Primary,
        Variant::Tertiary,
        Variant::Success,
        Variant::Warning,
        Variant::Danger,
        Variant::Gray,
        Variant::Dark,
        Variant::Light,
    ];

    /// Card background.
    #[must_use]
    pub fn background(self) -> Color {
        match self {
            Variant::Primary => palette::PRIMARY_20,
            Variant::Tertiary => palette::TERTIARY_30,
            Variant::Success => palette::SUCCESS_ACCENT,
            Variant::Warning => palette::WARNING_ACCENT,
            Variant::Danger => palette::DANGER_ACCENT,
            Variant::Gray => palette::NEUTRAL_40,
            Variant::Dark => palette::NEUTRAL_70,
            Variant::Light => palette::NEUTRAL_10,
        }
    }

    /// Title, body and icon color.
    #[must_use]
    pub fn foreground(self) -> Color {
        match self {
            Variant::Primary => palette::PRIMARY_80,
            Variant::Tertiary => palette::TERTIARY_70,
            Variant::Success => palette::SUCCESS_MAIN,
            Variant::Warning => palette::WARNING_MAIN,
            Variant::Danger => palette::DANGER_MAIN,
            Variant::Gray => palette::NEUTRAL_80,
            Variant::Dark => palette::NEUTRAL_30,
            Variant::Light => palette::NEUTRAL_70,
        }
    }
}

/// Leading icon of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationIcon {
    #[default]
    Logo,
    Info,
    Warning,
    Alert,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifetime {
    /// Use the manager's configured default.
    Default,
    Fixed(Duration),
    Persistent,
}

/// A notification to be shown in the snackbar.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    title: String,
    body: Option<String>,
    variant: Variant,
    action: Option<String>,
    icon: NotificationIcon,
    lifetime: Lifetime,
}

impl Notification {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            title: title.into(),
            body: None,
            variant: Variant::default(),
            action: None,
            icon: NotificationIcon::default(),
            lifetime: Lifetime::Default,
        }
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Adds an action button with this label.
    #[must_use]
    pub fn action(mut self, label: impl Into<String>) -> Self {
        self.action = Some(label.into());
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: NotificationIcon) -> Self {
        self.icon = icon;
        self
    }

    /// Time on screen before closing on its own. `Duration::ZERO` keeps the
    /// notification until it is dismissed.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.lifetime = if duration.is_zero() {
            Lifetime::Persistent
        } else {
            Lifetime::Fixed(duration)
        };
        self
    }

    /// Keeps the notification until it is dismissed or hidden.
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.lifetime = Lifetime::Persistent;
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        self.body.as_deref()
    }

    #[must_use]
    pub fn variant_kind(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub fn action_label(&self) -> Option<&str> {
        self.action.as_deref()
    }

    #[must_use]
    pub fn icon_kind(&self) -> NotificationIcon {
        self.icon
    }

    /// Auto-close delay, falling back to `default` when none was set.
    ///
    /// `None` means the notification never closes on its own.
    #[must_use]
    pub fn duration_or(&self, default: Option<Duration>) -> Option<Duration> {
        match self.lifetime {
            Lifetime::Default => default.filter(|d| !d.is_zero()),
            Lifetime::Fixed(duration) => Some(duration),
            Lifetime::Persistent => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::snackbar::Timing;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::new("Saved");
        let n2 = Notification::new("Saved");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn default_duration_is_three_seconds() {
        let notification = Notification::new("Saved");
        assert_eq!(
            notification.duration_or(Timing::default().default_duration),
            Some(Duration::from_millis(3_000))
        );
    }

    #[test]
    fn zero_duration_is_persistent() {
        let notification = Notification::new("Saved").duration(Duration::ZERO);
        assert_eq!(notification.duration_or(Timing::default().default_duration), None);
        assert_eq!(
            notification.duration_or(Some(Duration::from_secs(1))),
            None
        );
    }

    #[test]
    fn explicit_duration_ignores_default() {
        let notification = Notification::new("Saved").duration(Duration::from_millis(1_500));
        assert_eq!(
            notification.duration_or(Some(Duration::from_secs(10))),
            Some(Duration::from_millis(1_500))
        );
    }

    #[test]
    fn unset_duration_follows_configured_default() {
        let notification = Notification::new("Saved");
        assert_eq!(notification.duration_or(None), None);
        assert_eq!(
            notification.duration_or(Some(Duration::from_secs(5))),
            Some(Duration::from_secs(5))
        );
    }

    #[test]
    fn builder_keeps_display_fields() {
        let notification = Notification::new("Saved")
            .body("All changes stored")
            .variant(Variant::Success)
            .action("Undo")
            .icon(NotificationIcon::Success);

        assert_eq!(notification.title(), "Saved");
        assert_eq!(notification.body_text(), Some("All changes stored"));
        assert_eq!(notification.variant_kind(), Variant::Success);
        assert_eq!(notification.action_label(), Some("Undo"));
        assert_eq!(notification.icon_kind(), NotificationIcon::Success);
    }

    #[test]
    fn defaults_to_primary_with_logo() {
        let notification = Notification::new("Hello");
        assert_eq!(notification.variant_kind(), Variant::Primary);
        assert_eq!(notification.icon_kind(), NotificationIcon::Logo);
        assert!(notification.body_text().is_none());
        assert!(notification.action_label().is_none());
    }

    #[test]
    fn variants_have_readable_contrast_pairs() {
        for variant in Variant::ALL {
            assert_ne!(variant.background(), variant.foreground(), "{variant:?}");
        }
    }
}
