/// Direction of the Y axis on the target surface.
///
/// Rect origins are always the numeric minimum corner. What changes between
/// spaces is which *visual* edge that corner sits on: the top edge under
/// `YDown` (window-style surfaces), the bottom edge under `YUp`
/// (desktop compositors that keep the math convention).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum CoordinateSpace {
    #[default]
    YDown,
    YUp,
}

impl CoordinateSpace {
    /// `true` when the visual top edge is the min-Y edge.
    #[inline]
    pub const fn top_is_min(self) -> bool {
        matches!(self, CoordinateSpace::YDown)
    }

    /// Orders `(top, bottom)` as `(min_y, max_y)`.
    #[inline]
    pub fn min_max_from_top_bottom(self, top: f32, bottom: f32) -> (f32, f32) {
        if self.top_is_min() { (top, bottom) } else { (bottom, top) }
    }

    /// Orders `(min_y, max_y)` as `(top, bottom)`.
    #[inline]
    pub fn top_bottom_from_min_max(self, min_y: f32, max_y: f32) -> (f32, f32) {
        // The mapping is its own inverse.
        self.min_max_from_top_bottom(min_y, max_y)
    }
}
