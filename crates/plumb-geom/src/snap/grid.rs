use super::{RectSnap, Rounding};
use crate::coords::{CoordinateSpace, Point, Rect, Size};
use crate::scale::{usable_scale, ScaleProvider};

/// A resolved device pixel grid: one scale reading plus the Y direction.
///
/// Cheap to build; construct one per layout pass (or per call through
/// [`super::snap`]) rather than holding on to it across display changes.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PixelGrid {
    scale: Option<f32>,
    space: CoordinateSpace,
}

impl PixelGrid {
    /// Non-positive or non-finite scales are treated as absent.
    pub fn new(scale: Option<f32>, space: CoordinateSpace) -> Self {
        Self { scale: usable_scale(scale), space }
    }

    pub fn from_provider<P: ScaleProvider + ?Sized>(provider: &P, space: CoordinateSpace) -> Self {
        Self::new(provider.scale(), space)
    }

    #[inline]
    pub fn scale(self) -> Option<f32> {
        self.scale
    }

    #[inline]
    pub fn space(self) -> CoordinateSpace {
        self.space
    }

    /// Snaps one scalar; truncates toward zero when there is no scale.
    #[inline]
    pub fn round(self, v: f32, rounding: Rounding) -> f32 {
        match self.scale {
            Some(s) => rounding.apply(v * s) / s,
            None => {
                log::trace!("no device scale; truncating {v}");
                v.trunc()
            }
        }
    }

    #[inline]
    pub fn snap<T: PixelSnap>(self, value: T, policy: T::Policy) -> T {
        value.snap_to(self, policy)
    }

    /// Snaps the span `[lo, hi]` whose `lo` edge faces −∞ when
    /// `lo_outward_is_negative`, moving both edges outward or inward.
    fn span(self, lo: f32, hi: f32, outward: bool, lo_outward_is_negative: bool) -> (f32, f32) {
        let lo2 = self.round(lo, Rounding::for_edge(outward, lo_outward_is_negative));
        let hi2 = self.round(hi, Rounding::for_edge(outward, !lo_outward_is_negative));
        (lo2, hi2)
    }

    fn snap_rect(self, rect: Rect, policy: RectSnap) -> Rect {
        let outward = match policy {
            RectSnap::Extend => true,
            RectSnap::Shrink => false,
            RectSnap::Round => {
                return Rect::from_origin_size(
                    self.snap(rect.origin, Rounding::Round),
                    self.snap(rect.size, Rounding::Round),
                );
            }
        };

        // Left always faces −∞. Top faces −∞ only when it is the min-Y edge.
        let (x0, x1) = self.span(rect.min_x(), rect.max_x(), outward, true);

        let (top, bottom) = self.space.top_bottom_from_min_max(rect.min_y(), rect.max_y());
        let (top, bottom) = self.span(top, bottom, outward, self.space.top_is_min());
        let (y0, y1) = self.space.min_max_from_top_bottom(top, bottom);

        let (x0, x1) = collapse_inverted(rect.min_x(), rect.max_x(), x0, x1);
        let (y0, y1) = collapse_inverted(rect.min_y(), rect.max_y(), y0, y1);

        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }
}

/// A shrunk span thinner than one device pixel has no grid-aligned interior;
/// it collapses to zero length at the original midpoint.
#[inline]
fn collapse_inverted(min: f32, max: f32, lo: f32, hi: f32) -> (f32, f32) {
    if hi < lo {
        let mid = (min + max) * 0.5;
        (mid, mid)
    } else {
        (lo, hi)
    }
}

/// Values that can be placed on a [`PixelGrid`].
pub trait PixelSnap: Sized {
    type Policy: Copy;

    fn snap_to(self, grid: PixelGrid, policy: Self::Policy) -> Self;
}

impl PixelSnap for f32 {
    type Policy = Rounding;

    #[inline]
    fn snap_to(self, grid: PixelGrid, policy: Rounding) -> f32 {
        grid.round(self, policy)
    }
}

impl PixelSnap for Point {
    type Policy = Rounding;

    #[inline]
    fn snap_to(self, grid: PixelGrid, policy: Rounding) -> Point {
        Point::new(grid.round(self.x, policy), grid.round(self.y, policy))
    }
}

impl PixelSnap for Size {
    type Policy = Rounding;

    #[inline]
    fn snap_to(self, grid: PixelGrid, policy: Rounding) -> Size {
        Size::new(grid.round(self.width, policy), grid.round(self.height, policy))
    }
}

impl PixelSnap for Rect {
    type Policy = RectSnap;

    fn snap_to(self, grid: PixelGrid, policy: RectSnap) -> Rect {
        if grid.scale.is_none() {
            // Degraded path: truncate origin and size independently.
            return Rect::from_origin_size(
                grid.snap(self.origin, Rounding::Round),
                grid.snap(self.size, Rounding::Round),
            );
        }
        grid.snap_rect(self, policy)
    }
}
