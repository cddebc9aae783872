// SPDX-License-Identifier: MPL-2.0
//! Gallery domain: the image sequence, the navigation state machine and the
//! styling derived from it.

pub mod controller;
pub mod input;
pub mod presentation;
pub mod sequence;
pub mod timing;

pub use controller::{NavigationController, NavigationView, Outcome, Rejection};
pub use input::{route, InputDebounce, NavRequest};
pub use presentation::{Indicator, Slot, SlotStyle};
pub use sequence::{GalleryItem, GallerySequence};
pub use timing::TransitionWindow;
