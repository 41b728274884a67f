// SPDX-License-Identifier: MPL-2.0
//! `iced_primer` provides design-system primitives for the Iced GUI framework.
//!
//! It ships two components following the Elm-style "state down, messages up"
//! pattern: a dropdown [`ui::select`] with optional search filtering, and a
//! single-slot transient notification, [`ui::snackbar`]. Both are localized
//! with Fluent and styled from shared design tokens.

#![doc(html_root_url = "https://docs.rs/iced_primer/0.1.0")]

pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
