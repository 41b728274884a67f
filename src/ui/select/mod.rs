// SPDX-License-Identifier: MPL-2.0
//! Dropdown selector with optional search filtering.
//!
//! The caller owns the option list and the selected value; [`State`] only
//! tracks whether the list is open, the search term and keyboard focus.
//!
//! ```ignore
//! let ctx = select::ViewContext::new(&i18n, &self.member, &self.members)
//!     .value(self.selected.as_deref())
//!     .searchable(true);
//! select::view(ctx).map(Message::Member)
//! ```

pub mod option;
pub mod state;
pub mod view;

pub use option::{filter, SelectOption};
pub use state::{Effect, Message, OpenState, State, UpdateContext};
pub use view::{view, DisplayValue, ListContent, ViewContext};
