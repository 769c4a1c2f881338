use crate::coords::{CoordinateSpace, Rect};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Reference line of a rect along one axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Anchor {
    Min,
    Mid,
    Max,
}

impl Anchor {
    pub const ALL: [Anchor; 3] = [Anchor::Min, Anchor::Mid, Anchor::Max];

    /// Where this anchor line of `rect` sits on `axis`.
    #[inline]
    pub fn coordinate(self, rect: Rect, axis: Axis) -> f32 {
        match (axis, self) {
            (Axis::Horizontal, Anchor::Min) => rect.min_x(),
            (Axis::Horizontal, Anchor::Mid) => rect.mid_x(),
            (Axis::Horizontal, Anchor::Max) => rect.max_x(),
            (Axis::Vertical, Anchor::Min) => rect.min_y(),
            (Axis::Vertical, Anchor::Mid) => rect.mid_y(),
            (Axis::Vertical, Anchor::Max) => rect.max_y(),
        }
    }

    /// Distance from a span's min edge to this anchor for a span of `extent`.
    #[inline]
    pub fn offset_in(self, extent: f32) -> f32 {
        match self {
            Anchor::Min => 0.0,
            Anchor::Mid => extent * 0.5,
            Anchor::Max => extent,
        }
    }
}

/// Named horizontal anchors. Left is always the min-X edge.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum HorizontalAnchor {
    Left,
    Mid,
    Right,
}

impl HorizontalAnchor {
    #[inline]
    pub const fn to_anchor(self) -> Anchor {
        match self {
            HorizontalAnchor::Left => Anchor::Min,
            HorizontalAnchor::Mid => Anchor::Mid,
            HorizontalAnchor::Right => Anchor::Max,
        }
    }
}

/// Named vertical anchors; which of top/bottom is the min-Y edge depends on
/// the coordinate space.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum VerticalAnchor {
    Top,
    Mid,
    Bottom,
}

impl VerticalAnchor {
    #[inline]
    pub const fn to_anchor(self, space: CoordinateSpace) -> Anchor {
        match (self, space.top_is_min()) {
            (VerticalAnchor::Mid, _) => Anchor::Mid,
            (VerticalAnchor::Top, true) | (VerticalAnchor::Bottom, false) => Anchor::Min,
            (VerticalAnchor::Top, false) | (VerticalAnchor::Bottom, true) => Anchor::Max,
        }
    }
}
