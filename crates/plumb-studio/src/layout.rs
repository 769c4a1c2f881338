//! Demo layout: a centered panel, a header sitting on the panel's top
//! edge, and a badge hanging off its right edge.

use plumb_geom::{
    Anchor, Axis, CoordinateSpace, HorizontalAnchor, PixelGrid, Rect, RectSnap, Size, VerticalAnchor,
};

pub const HEADER_HEIGHT: f32 = 32.5;
pub const BADGE_SIDE: f32 = 18.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub panel: Rect,
    pub header: Rect,
    pub badge: Rect,
    pub bounds: Rect,
}

impl Layout {
    /// Lays everything out in logical pixels for a viewport of `viewport`.
    pub fn build(viewport: Size, space: CoordinateSpace) -> Self {
        let window = Rect::from_size(viewport);

        let panel = Rect::from_size(Size::new(viewport.width * 0.6, viewport.height * 0.5))
            .align(Anchor::Mid, Axis::Horizontal, Anchor::Mid, window)
            .align(Anchor::Mid, Axis::Vertical, Anchor::Mid, window);

        let header = Rect::from_size(Size::new(panel.width(), HEADER_HEIGHT))
            .align_horizontal(HorizontalAnchor::Left, HorizontalAnchor::Left, panel)
            .align_vertical(VerticalAnchor::Bottom, VerticalAnchor::Top, panel, space);

        let badge = Rect::from_size(Size::new(BADGE_SIDE, BADGE_SIDE))
            .align(Anchor::Min, Axis::Horizontal, Anchor::Max, panel)
            .align_vertical(VerticalAnchor::Mid, VerticalAnchor::Top, panel, space);

        let bounds = Rect::bounding_rects([panel, header, badge]);

        Self { panel, header, badge, bounds }
    }

    /// Every rect snapped onto `grid` with `policy`.
    pub fn snapped(self, grid: PixelGrid, policy: RectSnap) -> Self {
        Self {
            panel: grid.snap(self.panel, policy),
            header: grid.snap(self.header, policy),
            badge: grid.snap(self.badge, policy),
            bounds: grid.snap(self.bounds, policy),
        }
    }

    pub fn named(&self) -> [(&'static str, Rect); 4] {
        [
            ("panel", self.panel),
            ("header", self.header),
            ("badge", self.badge),
            ("bounds", self.bounds),
        ]
    }
}
