use super::{Anchor, Axis, HorizontalAnchor, VerticalAnchor};
use crate::coords::{CoordinateSpace, Rect};

/// Repositions `subject` on `axis` so its `anchor` line coincides with the
/// `reference_anchor` line of `reference`.
///
/// Total over all nine anchor pairings. The subject's size and its
/// position on the other axis are unchanged, so aligning twice with the
/// same arguments gives the same rect as aligning once.
///
/// Horizontal, for `subject` width `w`:
///
/// | anchor | reference | new `min_x`            |
/// |--------|-----------|------------------------|
/// | Min    | Min/Mid/Max | `ref.{min,mid,max}_x` |
/// | Mid    | Min/Mid/Max | `ref.{min,mid,max}_x - w/2` |
/// | Max    | Min/Mid/Max | `ref.{min,mid,max}_x - w` |
pub fn align(subject: Rect, anchor: Anchor, axis: Axis, reference_anchor: Anchor, reference: Rect) -> Rect {
    let target = reference_anchor.coordinate(reference, axis);
    match axis {
        Axis::Horizontal => subject.with_x(target - anchor.offset_in(subject.size.width)),
        Axis::Vertical => subject.with_y(target - anchor.offset_in(subject.size.height)),
    }
}

impl Rect {
    /// Method form of [`align`].
    #[inline]
    #[must_use]
    pub fn align(self, anchor: Anchor, axis: Axis, reference_anchor: Anchor, reference: Rect) -> Rect {
        align(self, anchor, axis, reference_anchor, reference)
    }

    #[inline]
    #[must_use]
    pub fn align_horizontal(self, anchor: HorizontalAnchor, reference_anchor: HorizontalAnchor, reference: Rect) -> Rect {
        align(self, anchor.to_anchor(), Axis::Horizontal, reference_anchor.to_anchor(), reference)
    }

    /// Vertical alignment by visual edge; `space` decides which of top and
    /// bottom is the min-Y edge.
    #[inline]
    #[must_use]
    pub fn align_vertical(
        self,
        anchor: VerticalAnchor,
        reference_anchor: VerticalAnchor,
        reference: Rect,
        space: CoordinateSpace,
    ) -> Rect {
        align(self, anchor.to_anchor(space), Axis::Vertical, reference_anchor.to_anchor(space), reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Point;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    const AXES: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    fn sample_rects() -> Vec<Rect> {
        vec![
            r(0.0, 0.0, 10.0, 10.0),
            r(50.0, 0.0, 20.0, 20.0),
            r(-7.5, 3.25, 13.0, 0.5),
            r(100.0, -40.0, 0.0, 8.0),
        ]
    }

    // ── table rows (horizontal) ───────────────────────────────────────────

    #[test]
    fn horizontal_table() {
        let subject = r(0.0, 5.0, 10.0, 4.0);
        let reference = r(50.0, 0.0, 20.0, 20.0);
        // reference min/mid/max x: 50 / 60 / 70
        let cases = [
            (Anchor::Min, Anchor::Min, 50.0),
            (Anchor::Min, Anchor::Mid, 60.0),
            (Anchor::Min, Anchor::Max, 70.0),
            (Anchor::Max, Anchor::Max, 60.0),
            (Anchor::Max, Anchor::Mid, 50.0),
            (Anchor::Max, Anchor::Min, 40.0),
            (Anchor::Mid, Anchor::Min, 45.0),
            (Anchor::Mid, Anchor::Mid, 55.0),
            (Anchor::Mid, Anchor::Max, 65.0),
        ];
        for (anchor, reference_anchor, x) in cases {
            let out = align(subject, anchor, Axis::Horizontal, reference_anchor, reference);
            assert_eq!(out, r(x, 5.0, 10.0, 4.0), "{anchor:?} -> {reference_anchor:?}");
        }
    }

    #[test]
    fn vertical_table() {
        let subject = r(3.0, 0.0, 4.0, 10.0);
        let reference = r(0.0, 50.0, 20.0, 20.0);
        let cases = [
            (Anchor::Min, Anchor::Min, 50.0),
            (Anchor::Min, Anchor::Mid, 60.0),
            (Anchor::Min, Anchor::Max, 70.0),
            (Anchor::Max, Anchor::Max, 60.0),
            (Anchor::Max, Anchor::Mid, 50.0),
            (Anchor::Max, Anchor::Min, 40.0),
            (Anchor::Mid, Anchor::Min, 45.0),
            (Anchor::Mid, Anchor::Mid, 55.0),
            (Anchor::Mid, Anchor::Max, 65.0),
        ];
        for (anchor, reference_anchor, y) in cases {
            let out = align(subject, anchor, Axis::Vertical, reference_anchor, reference);
            assert_eq!(out, r(3.0, y, 4.0, 10.0), "{anchor:?} -> {reference_anchor:?}");
        }
    }

    #[test]
    fn max_to_min_hangs_subject_off_the_leading_edge() {
        let subject = r(0.0, 0.0, 10.0, 10.0);
        let reference = r(50.0, 0.0, 20.0, 20.0);
        let out = subject.align(Anchor::Max, Axis::Horizontal, Anchor::Min, reference);
        assert_eq!(out.origin.x, 40.0);
        assert_eq!(out.max_x(), reference.min_x());
    }

    // ── properties ────────────────────────────────────────────────────────

    #[test]
    fn anchors_coincide_and_size_is_kept() {
        for subject in sample_rects() {
            for reference in sample_rects() {
                for axis in AXES {
                    for anchor in Anchor::ALL {
                        for reference_anchor in Anchor::ALL {
                            let out = align(subject, anchor, axis, reference_anchor, reference);
                            assert_eq!(out.size, subject.size);
                            assert_eq!(
                                anchor.coordinate(out, axis),
                                reference_anchor.coordinate(reference, axis),
                            );
                            // Cross axis untouched.
                            match axis {
                                Axis::Horizontal => assert_eq!(out.origin.y, subject.origin.y),
                                Axis::Vertical => assert_eq!(out.origin.x, subject.origin.x),
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn aligning_twice_equals_aligning_once() {
        for subject in sample_rects() {
            for reference in sample_rects() {
                for axis in AXES {
                    for anchor in Anchor::ALL {
                        for reference_anchor in Anchor::ALL {
                            let once = align(subject, anchor, axis, reference_anchor, reference);
                            let twice = align(once, anchor, axis, reference_anchor, reference);
                            assert_eq!(once, twice);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn mid_to_own_mid_is_identity() {
        for rect in sample_rects() {
            for axis in AXES {
                assert_eq!(align(rect, Anchor::Mid, axis, Anchor::Mid, rect), rect);
            }
        }
    }

    #[test]
    fn min_then_max_pins_the_min_edge_first() {
        let subject = r(3.0, 4.0, 6.0, 2.0);
        let reference = r(20.0, 30.0, 10.0, 10.0);
        for axis in AXES {
            let first = align(subject, Anchor::Min, axis, Anchor::Min, reference);
            assert_eq!(Anchor::Min.coordinate(first, axis), Anchor::Min.coordinate(reference, axis));
            let second = align(first, Anchor::Max, axis, Anchor::Max, reference);
            assert_eq!(second.size, subject.size);
            assert_eq!(Anchor::Max.coordinate(second, axis), Anchor::Max.coordinate(reference, axis));
        }
    }

    // ── named anchors ─────────────────────────────────────────────────────

    #[test]
    fn top_to_bottom_stacks_below_in_y_down() {
        let header = r(0.0, 0.0, 10.0, 5.0);
        let panel = r(0.0, 20.0, 10.0, 30.0);
        let out = header.align_vertical(VerticalAnchor::Top, VerticalAnchor::Bottom, panel, CoordinateSpace::YDown);
        assert_eq!(out.origin, Point::new(0.0, 50.0));
    }

    #[test]
    fn top_to_bottom_stacks_below_in_y_up() {
        // Y-up: panel's visual bottom is its min_y (20); header's top is its max_y.
        let header = r(0.0, 0.0, 10.0, 5.0);
        let panel = r(0.0, 20.0, 10.0, 30.0);
        let out = header.align_vertical(VerticalAnchor::Top, VerticalAnchor::Bottom, panel, CoordinateSpace::YUp);
        assert_eq!(out.max_y(), 20.0);
        assert_eq!(out.origin.y, 15.0);
    }

    #[test]
    fn right_to_right() {
        let badge = r(0.0, 0.0, 4.0, 4.0);
        let panel = r(10.0, 10.0, 40.0, 40.0);
        let out = badge.align_horizontal(HorizontalAnchor::Right, HorizontalAnchor::Right, panel);
        assert_eq!(out.max_x(), panel.max_x());
    }
}
