//! Anchor alignment.
//!
//! Moves one rect along a single axis so that one of its anchor lines
//! (leading edge, center, trailing edge) lands on an anchor line of a
//! reference rect. Size and the position on the other axis are kept.

mod anchor;
mod engine;

pub use anchor::{Anchor, Axis, HorizontalAnchor, VerticalAnchor};
pub use engine::align;
