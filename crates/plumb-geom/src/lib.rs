//! Plumb geometry crate.
//!
//! Value-type points, sizes and rects plus the two engines layout code
//! leans on: anchor alignment and device-pixel snapping. Everything here is
//! a pure function over `Copy` values; the only ambient input, the device
//! scale, is passed in through [`ScaleProvider`].

pub mod coords;
pub mod align;
pub mod snap;
pub mod scale;

pub use align::{align, Anchor, Axis, HorizontalAnchor, VerticalAnchor};
pub use coords::{mix, CoordinateSpace, Point, Rect, Size, Vertex};
pub use scale::{ScaleFn, ScaleProvider};
pub use snap::{snap, snap_in, PixelGrid, PixelSnap, RectSnap, Rounding};
