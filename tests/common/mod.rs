// SPDX-License-Identifier: MPL-2.0
//! Deterministic time for snackbar tests.
//!
//! [`ManualClock`] stands in for the iced runtime: it queues the [`Timer`]s a
//! [`Controller`] returns and feeds them back in due order as virtual time
//! advances, without sleeping.
//!
//! Shared by the integration test binaries; each uses a subset.
#![allow(dead_code)]

use iced_primer::ui::snackbar::{Controller, Effect, Message, Notification, Timer};
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    due: Duration,
    seq: u64,
    timer: Timer,
}

/// Virtual clock replaying controller timers.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Duration,
    next_seq: u64,
    queue: Vec<Scheduled>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Timers not yet delivered, stale ones included.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Queues timers relative to the current virtual time.
    pub fn schedule(&mut self, timers: Vec<Timer>) {
        let now = self.now;
        self.schedule_at(now, timers);
    }

    /// Shows a notification at the current virtual time.
    pub fn show(&mut self, controller: &mut Controller, notification: Notification) {
        let timers = controller.show(notification);
        self.schedule(timers);
    }

    /// Delivers a message immediately, as a button press would.
    pub fn send(&mut self, controller: &mut Controller, message: Message) -> Effect {
        let (effect, timers) = controller.update(message);
        self.schedule(timers);
        effect
    }

    /// Moves virtual time forward by `delta`.
    pub fn advance(&mut self, controller: &mut Controller, delta: Duration) -> Vec<(Duration, Effect)> {
        let target = self.now + delta;
        self.advance_to(controller, target)
    }

    /// Delivers every timer due at or before `target`, in due order, and
    /// returns the effects produced with the virtual time they occurred at.
    pub fn advance_to(
        &mut self,
        controller: &mut Controller,
        target: Duration,
    ) -> Vec<(Duration, Effect)> {
        let mut effects = Vec::new();

        while let Some(index) = self.next_due(target) {
            let scheduled = self.queue.swap_remove(index);
            self.now = scheduled.due;

            let (effect, timers) = controller.update(scheduled.timer.message());
            if effect != Effect::None {
                effects.push((self.now, effect));
            }
            self.schedule_at(scheduled.due, timers);
        }

        self.now = self.now.max(target);
        effects
    }

    fn next_due(&self, target: Duration) -> Option<usize> {
        self.queue
            .iter()
            .enumerate()
            .filter(|(_, scheduled)| scheduled.due <= target)
            .min_by_key(|(_, scheduled)| (scheduled.due, scheduled.seq))
            .map(|(index, _)| index)
    }

    fn schedule_at(&mut self, from: Duration, timers: Vec<Timer>) {
        for timer in timers {
            self.queue.push(Scheduled {
                due: from + timer.delay,
                seq: self.next_seq,
                timer,
            });
            self.next_seq += 1;
        }
    }
}
