// SPDX-License-Identifier: MPL-2.0
//! Single-slot transient notification ("snackbar").
//!
//! At most one notification is live. Showing another replaces it, and the
//! replaced one never reports [`Effect::Closed`]. A live notification goes
//! through [`Phase::Entering`], [`Phase::Visible`] and [`Phase::Closing`]
//! before it is removed.
//!
//! [`Controller`] holds the lifecycle logic and is runtime agnostic;
//! [`Manager`] drives it with iced tasks and renders the card.

pub mod lifecycle;
pub mod manager;
pub mod notification;
pub mod toast;

pub use lifecycle::{Controller, Effect, Message, Phase, Timer, Timing, Transition};
pub use manager::Manager;
pub use notification::{Notification, NotificationIcon, NotificationId, Variant};
