// SPDX-License-Identifier: MPL-2.0
pub mod outside_press;

pub use outside_press::{outside_press, OutsidePress};
