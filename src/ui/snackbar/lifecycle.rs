// SPDX-License-Identifier: MPL-2.0
//! Snackbar lifecycle, free of any runtime.
//!
//! [`Controller`] never sleeps. It returns [`Timer`]s describing when a
//! [`Message::Elapsed`] must be fed back, and ignores any message whose id is
//! not the live notification's. A timer outliving its notification is
//! therefore harmless even if nobody cancels it.

use super::notification::{Notification, NotificationId};
use crate::config::defaults::{
    DEFAULT_ENTER_DELAY_MS, DEFAULT_EXIT_DELAY_MS, DEFAULT_NOTIFICATION_DURATION_MS,
};
use std::time::Duration;

/// Lifecycle delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// From `show` to fully visible.
    pub enter_delay: Duration,
    /// From close request to removal.
    pub exit_delay: Duration,
    /// Auto-close delay for notifications that set none. `None` keeps them.
    pub default_duration: Option<Duration>,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            enter_delay: Duration::from_millis(DEFAULT_ENTER_DELAY_MS),
            exit_delay: Duration::from_millis(DEFAULT_EXIT_DELAY_MS),
            default_duration: Some(Duration::from_millis(DEFAULT_NOTIFICATION_DURATION_MS)),
        }
    }
}

/// Presence of the live notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Shown, animating in.
    Entering,
    Visible,
    /// Close requested, animating out.
    Closing,
}

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// `Entering` to `Visible`.
    Enter,
    /// Auto-close at the end of the duration.
    Expire,
    /// End of the exit animation.
    Remove,
}

/// A delayed message requested by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    pub id: NotificationId,
    pub transition: Transition,
    /// Measured from the moment the timer is returned.
    pub delay: Duration,
}

impl Timer {
    /// The message to deliver once `delay` has elapsed.
    #[must_use]
    pub fn message(&self) -> Message {
        Message::Elapsed(self.id, self.transition)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Elapsed(NotificationId, Transition),
    /// Close request from the dismiss button or the caller.
    Dismiss(NotificationId),
    ActionPressed(NotificationId),
    /// Redraw request while the card animates. Carries no lifecycle change.
    Frame,
}

/// Outcome the caller has to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The notification finished closing. Emitted once per instance.
    Closed(NotificationId),
    /// The action button was pressed. The notification stays open.
    /// Not reported once the notification is closing.
    Action(NotificationId),
}

#[derive(Debug, Clone)]
struct Live {
    notification: Notification,
    phase: Phase,
}

/// Holds at most one live notification and drives its phases.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    timing: Timing,
    live: Option<Live>,
}

impl Controller {
    #[must_use]
    pub fn new(timing: Timing) -> Self {
        Self { timing, live: None }
    }

    #[must_use]
    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Applies new delays to notifications shown from now on.
    pub fn set_timing(&mut self, timing: Timing) {
        self.timing = timing;
    }

    #[must_use]
    pub fn live(&self) -> Option<&Notification> {
        self.live.as_ref().map(|live| &live.notification)
    }

    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        self.live.as_ref().map(|live| live.phase)
    }

    fn live_id(&self) -> Option<NotificationId> {
        self.live.as_ref().map(|live| live.notification.id())
    }

    /// Makes `notification` the live one, replacing any previous instance
    /// without reporting it as closed.
    pub fn show(&mut self, notification: Notification) -> Vec<Timer> {
        if let Some(previous) = self.live_id() {
            tracing::debug!(?previous, "replacing live notification");
        }

        let id = notification.id();
        let mut timers = vec![Timer {
            id,
            transition: Transition::Enter,
            delay: self.timing.enter_delay,
        }];
        if let Some(duration) = notification.duration_or(self.timing.default_duration) {
            timers.push(Timer {
                id,
                transition: Transition::Expire,
                delay: duration,
            });
        }

        tracing::debug!(?id, phase = ?Phase::Entering, "notification shown");
        self.live = Some(Live {
            notification,
            phase: Phase::Entering,
        });

        timers
    }

    /// Removes the live notification at once, skipping the exit phase.
    ///
    /// No `Closed` effect follows. Returns the removed id.
    pub fn hide(&mut self) -> Option<NotificationId> {
        let id = self.live.take().map(|live| live.notification.id());
        if let Some(id) = id {
            tracing::debug!(?id, "notification hidden");
        }
        id
    }

    pub fn update(&mut self, message: Message) -> (Effect, Vec<Timer>) {
        let id = match &message {
            Message::Elapsed(id, _) | Message::Dismiss(id) | Message::ActionPressed(id) => *id,
            Message::Frame => return (Effect::None, Vec::new()),
        };
        if self.live_id() != Some(id) {
            tracing::trace!(?id, ?message, "ignoring message for stale notification");
            return (Effect::None, Vec::new());
        }

        match message {
            Message::Elapsed(_, Transition::Enter) => {
                self.advance(Phase::Entering, Phase::Visible);
                (Effect::None, Vec::new())
            }
            Message::Elapsed(_, Transition::Expire) | Message::Dismiss(_) => {
                (Effect::None, self.begin_close(id))
            }
            Message::Elapsed(_, Transition::Remove) => {
                if self.phase() == Some(Phase::Closing) {
                    self.live = None;
                    tracing::debug!(?id, "notification closed");
                    (Effect::Closed(id), Vec::new())
                } else {
                    (Effect::None, Vec::new())
                }
            }
            Message::ActionPressed(_) if self.phase() == Some(Phase::Closing) => {
                tracing::trace!(?id, "ignoring action on closing notification");
                (Effect::None, Vec::new())
            }
            Message::ActionPressed(_) => (Effect::Action(id), Vec::new()),
            Message::Frame => (Effect::None, Vec::new()),
        }
    }

    fn advance(&mut self, from: Phase, to: Phase) {
        if let Some(live) = self.live.as_mut().filter(|live| live.phase == from) {
            live.phase = to;
            tracing::debug!(id = ?live.notification.id(), phase = ?to, "notification phase changed");
        }
    }

    fn begin_close(&mut self, id: NotificationId) -> Vec<Timer> {
        match self.live.as_mut() {
            Some(live) if live.phase != Phase::Closing => {
                live.phase = Phase::Closing;
                tracing::debug!(?id, phase = ?Phase::Closing, "notification phase changed");
                vec![Timer {
                    id,
                    transition: Transition::Remove,
                    delay: self.timing.exit_delay,
                }]
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elapsed(timer: &Timer) -> Message {
        timer.message()
    }

    fn find(timers: &[Timer], transition: Transition) -> Timer {
        *timers
            .iter()
            .find(|t| t.transition == transition)
            .expect("timer scheduled")
    }

    #[test]
    fn show_schedules_enter_and_expire() {
        let mut controller = Controller::default();
        let notification = Notification::new("Saved");
        let id = notification.id();

        let timers = controller.show(notification);

        assert_eq!(controller.phase(), Some(Phase::Entering));
        assert_eq!(
            timers,
            vec![
                Timer {
                    id,
                    transition: Transition::Enter,
                    delay: Duration::from_millis(100),
                },
                Timer {
                    id,
                    transition: Transition::Expire,
                    delay: Duration::from_millis(3_000),
                },
            ]
        );
    }

    #[test]
    fn persistent_notification_has_no_expire_timer() {
        let mut controller = Controller::default();
        let timers = controller.show(Notification::new("Saved").duration(Duration::ZERO));
        assert_eq!(timers.len(), 1);
        assert_eq!(timers[0].transition, Transition::Enter);
    }

    #[test]
    fn full_lifecycle_emits_closed_once() {
        let mut controller = Controller::default();
        let notification = Notification::new("Saved");
        let id = notification.id();
        let timers = controller.show(notification);

        controller.update(elapsed(&find(&timers, Transition::Enter)));
        assert_eq!(controller.phase(), Some(Phase::Visible));

        let (effect, remove) = controller.update(elapsed(&find(&timers, Transition::Expire)));
        assert_eq!(effect, Effect::None);
        assert_eq!(controller.phase(), Some(Phase::Closing));
        assert_eq!(remove[0].delay, Duration::from_millis(300));

        let (effect, _) = controller.update(remove[0].message());
        assert_eq!(effect, Effect::Closed(id));
        assert!(controller.live().is_none());

        let (effect, _) = controller.update(remove[0].message());
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn dismiss_closes_through_exit_phase() {
        let mut controller = Controller::default();
        let notification = Notification::new("Saved").persistent();
        let id = notification.id();
        controller.show(notification);

        let (_, timers) = controller.update(Message::Dismiss(id));
        assert_eq!(controller.phase(), Some(Phase::Closing));
        assert_eq!(timers.len(), 1);

        let (_, again) = controller.update(Message::Dismiss(id));
        assert!(again.is_empty());

        let (effect, _) = controller.update(timers[0].message());
        assert_eq!(effect, Effect::Closed(id));
    }

    #[test]
    fn expire_after_dismiss_does_not_schedule_twice() {
        let mut controller = Controller::default();
        let notification = Notification::new("Saved");
        let id = notification.id();
        let timers = controller.show(notification);

        controller.update(Message::Dismiss(id));
        let (effect, more) = controller.update(elapsed(&find(&timers, Transition::Expire)));

        assert_eq!(effect, Effect::None);
        assert!(more.is_empty());
    }

    #[test]
    fn enter_during_closing_keeps_closing() {
        let mut controller = Controller::default();
        let notification = Notification::new("Saved");
        let id = notification.id();
        let timers = controller.show(notification);

        controller.update(Message::Dismiss(id));
        controller.update(elapsed(&find(&timers, Transition::Enter)));

        assert_eq!(controller.phase(), Some(Phase::Closing));
    }

    #[test]
    fn replaced_notification_timers_are_ignored() {
        let mut controller = Controller::default();
        let first = Notification::new("First");
        let first_timers = controller.show(first);
        let second = Notification::new("Second");
        let second_id = second.id();
        controller.show(second);

        for timer in &first_timers {
            let (effect, timers) = controller.update(timer.message());
            assert_eq!(effect, Effect::None);
            assert!(timers.is_empty());
        }

        assert_eq!(controller.live().map(Notification::id), Some(second_id));
        assert_eq!(controller.phase(), Some(Phase::Entering));
    }

    #[test]
    fn hide_removes_without_closed_effect() {
        let mut controller = Controller::default();
        let notification = Notification::new("Saved");
        let id = notification.id();
        let timers = controller.show(notification);

        assert_eq!(controller.hide(), Some(id));
        assert!(controller.live().is_none());
        assert_eq!(controller.hide(), None);

        for timer in &timers {
            assert_eq!(controller.update(timer.message()).0, Effect::None);
        }
    }

    #[test]
    fn action_reports_without_closing() {
        let mut controller = Controller::default();
        let notification = Notification::new("Deleted").action("Undo");
        let id = notification.id();
        controller.show(notification);

        let (effect, timers) = controller.update(Message::ActionPressed(id));

        assert_eq!(effect, Effect::Action(id));
        assert!(timers.is_empty());
        assert!(controller.live().is_some());
    }

    #[test]
    fn action_is_ignored_once_closing() {
        let mut controller = Controller::default();
        let notification = Notification::new("Deleted").action("Undo").persistent();
        let id = notification.id();
        controller.show(notification);
        let (_, remove) = controller.update(Message::Dismiss(id));

        let (effect, timers) = controller.update(Message::ActionPressed(id));

        assert_eq!(effect, Effect::None);
        assert!(timers.is_empty());
        assert_eq!(controller.phase(), Some(Phase::Closing));
        assert_eq!(controller.update(remove[0].message()).0, Effect::Closed(id));
    }

    #[test]
    fn frame_changes_nothing() {
        let mut controller = Controller::default();
        let notification = Notification::new("Saved");
        controller.show(notification);

        let (effect, timers) = controller.update(Message::Frame);

        assert_eq!(effect, Effect::None);
        assert!(timers.is_empty());
        assert_eq!(controller.phase(), Some(Phase::Entering));
    }

    #[test]
    fn configured_timing_is_used() {
        let mut controller = Controller::new(Timing {
            enter_delay: Duration::from_millis(50),
            exit_delay: Duration::from_millis(500),
            default_duration: None,
        });
        let notification = Notification::new("Saved");
        let id = notification.id();

        let timers = controller.show(notification);
        assert_eq!(timers.len(), 1);
        assert_eq!(timers[0].delay, Duration::from_millis(50));

        let (_, remove) = controller.update(Message::Dismiss(id));
        assert_eq!(remove[0].delay, Duration::from_millis(500));
    }
}
