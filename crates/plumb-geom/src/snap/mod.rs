//! Device-pixel snapping.
//!
//! Maps continuous logical coordinates onto the physical pixel grid of the
//! current device: multiply by the scale, round, divide back. Without a
//! scale every component is truncated toward zero instead.

mod grid;
mod policy;

pub use grid::{PixelGrid, PixelSnap};
pub use policy::{RectSnap, Rounding};

use crate::coords::CoordinateSpace;
use crate::scale::ScaleProvider;

/// Snaps `value` in a Y-down space, asking `provider` for the scale now.
#[inline]
pub fn snap<T, P>(value: T, provider: &P, policy: T::Policy) -> T
where
    T: PixelSnap,
    P: ScaleProvider + ?Sized,
{
    snap_in(value, provider, CoordinateSpace::YDown, policy)
}

/// Like [`snap`] with an explicit coordinate space.
#[inline]
pub fn snap_in<T, P>(value: T, provider: &P, space: CoordinateSpace, policy: T::Policy) -> T
where
    T: PixelSnap,
    P: ScaleProvider + ?Sized,
{
    PixelGrid::from_provider(provider, space).snap(value, policy)
}
