// SPDX-License-Identifier: MPL-2.0
//! Runs the snackbar lifecycle on the iced runtime.
//!
//! Each [`Timer`] becomes an abortable `tokio::time::sleep` task. Handles are
//! kept only for the live notification and abort their task when dropped, so
//! replacing or removing a notification cancels its pending timers.
//!
//! While the card fades in or out, [`Manager::subscription`] requests a
//! [`Message::Frame`] per window frame so the presence is redrawn.

use super::lifecycle::{Controller, Effect, Message, Phase, Timer, Timing};
use super::notification::Notification;
use super::toast;
use crate::i18n::fluent::I18n;
use iced::widget::Space;
use iced::{task, window};
use iced::{Element, Subscription, Task};
use std::time::Instant;

pub struct Manager {
    controller: Controller,
    pending: Vec<task::Handle>,
    /// When the live notification entered its current phase.
    phase_since: Instant,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(Timing::default())
    }
}

impl Manager {
    #[must_use]
    pub fn new(timing: Timing) -> Self {
        Self {
            controller: Controller::new(timing),
            pending: Vec::new(),
            phase_since: Instant::now(),
        }
    }

    #[must_use]
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    #[must_use]
    pub fn live(&self) -> Option<&Notification> {
        self.controller.live()
    }

    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        self.controller.phase()
    }

    /// Number of timer tasks still owned by the manager.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.pending.len()
    }

    /// Whether the card is fading in or out.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase(), Some(Phase::Entering | Phase::Closing))
    }

    /// Card visibility at `now`, from 0 (hidden) to 1.
    #[must_use]
    pub fn presence_at(&self, now: Instant) -> f32 {
        self.phase().map_or(0.0, |phase| {
            toast::presence(
                phase,
                now.saturating_duration_since(self.phase_since),
                &self.controller.timing(),
            )
        })
    }

    /// Replaces the live notification, cancelling the previous one's timers.
    pub fn show(&mut self, notification: Notification) -> Task<Message> {
        self.pending.clear();
        let timers = self.controller.show(notification);
        self.phase_since = Instant::now();
        self.schedule(timers)
    }

    /// Removes the live notification immediately.
    pub fn hide(&mut self) {
        self.pending.clear();
        self.controller.hide();
    }

    pub fn update(&mut self, message: Message) -> (Effect, Task<Message>) {
        let before = self.controller.phase();
        let (effect, timers) = self.controller.update(message);
        if self.controller.phase() != before {
            self.phase_since = Instant::now();
        }
        if self.controller.live().is_none() {
            self.pending.clear();
        }
        (effect, self.schedule(timers))
    }

    /// The live card, or an empty element when nothing is shown.
    pub fn view<'a>(&'a self, i18n: &I18n) -> Element<'a, Message> {
        match (self.controller.live(), self.controller.phase()) {
            (Some(notification), Some(phase)) => {
                toast::view_overlay(notification, phase, self.presence_at(Instant::now()), i18n)
            }
            _ => Space::new().into(),
        }
    }

    /// Frame ticks while the card animates, nothing otherwise.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.is_animating() {
            window::frames().map(|_| Message::Frame)
        } else {
            Subscription::none()
        }
    }

    fn schedule(&mut self, timers: Vec<Timer>) -> Task<Message> {
        if timers.is_empty() {
            return Task::none();
        }

        let tasks: Vec<Task<Message>> = timers
            .into_iter()
            .map(|timer| {
                let message = timer.message();
                let delay = timer.delay;
                let (task, handle) = Task::perform(
                    async move { tokio::time::sleep(delay).await },
                    move |()| message,
                )
                .abortable();
                self.pending.push(handle.abort_on_drop());
                task
            })
            .collect();

        Task::batch(tasks)
    }
}
