//! Coordinate and geometry value types.
//!
//! Canonical space:
//! - Logical pixels (points), `f32`
//! - Rect origin is the minimum corner on both axes
//! - +X right; +Y down unless a [`CoordinateSpace::YUp`] is in effect
//!
//! Multiply by the device scale to get physical pixels.

mod point;
mod rect;
mod size;
mod space;
mod vertex;

pub use point::Point;
pub use rect::Rect;
pub use size::Size;
pub use space::CoordinateSpace;
pub use vertex::Vertex;

/// Linear mix of two scalars: `a` at `t = 0`, `b` at `t = 1`.
#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}
