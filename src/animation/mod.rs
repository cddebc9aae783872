// SPDX-License-Identifier: MPL-2.0
//! Time-based interpolation used by the carousel, header and viewer.

pub mod easing;
pub mod timeline;

pub use easing::Easing;
pub use timeline::Timeline;
