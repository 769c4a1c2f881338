use super::{CoordinateSpace, Point, Size, Vertex};

/// Axis-aligned rectangle in logical pixels; `origin` is the min corner.
///
/// Well-formed rects have a non-negative size, so `max_x >= min_x` and
/// `max_y >= min_y`. Negative sizes are not rejected; they produce
/// nonsensical but non-panicking results downstream.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Rect of `size` at the zero origin.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self { origin: Point::ZERO, size }
    }

    #[inline]
    pub fn from_center_size(center: Point, size: Size) -> Self {
        let origin = Point::new(center.x - size.width * 0.5, center.y - size.height * 0.5);
        Self { origin, size }
    }

    /// Builds a rect from its four visual edges.
    ///
    /// `top`/`bottom` are read through `space`, so the origin always lands
    /// on the min corner.
    pub fn from_edges(top: f32, right: f32, bottom: f32, left: f32, space: CoordinateSpace) -> Self {
        let (min_y, max_y) = space.min_max_from_top_bottom(top, bottom);
        Rect::new(left, min_y, right - left, max_y - min_y)
    }

    // ── bounding boxes ────────────────────────────────────────────────────

    /// Smallest rect covering every point.
    ///
    /// The input must not be empty: with no points the accumulators keep
    /// their `±f32::MAX` seeds and the result is meaningless. Use
    /// [`Rect::try_bounding_points`] when emptiness is possible.
    pub fn bounding_points<I>(points: I) -> Rect
    where
        I: IntoIterator<Item = Point>,
    {
        let mut min_x = f32::MAX;
        let mut min_y = f32::MAX;
        let mut max_x = -f32::MAX;
        let mut max_y = -f32::MAX;

        for p in points {
            if p.x < min_x {
                min_x = p.x;
            }
            if p.y < min_y {
                min_y = p.y;
            }
            if p.x > max_x {
                max_x = p.x;
            }
            if p.y > max_y {
                max_y = p.y;
            }
        }

        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Smallest rect covering every rect, visiting each rect's vertices in
    /// [`Vertex::ALL`] order. Same non-empty precondition as
    /// [`Rect::bounding_points`].
    pub fn bounding_rects<I>(rects: I) -> Rect
    where
        I: IntoIterator<Item = Rect>,
    {
        Rect::bounding_points(rects.into_iter().flat_map(Rect::vertex_iter))
    }

    /// Checked variant of [`Rect::bounding_points`]; `None` for empty input.
    pub fn try_bounding_points<I>(points: I) -> Option<Rect>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut points = points.into_iter().peekable();
        points.peek()?;
        Some(Rect::bounding_points(points))
    }

    // ── edges ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn min_x(self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn mid_x(self) -> f32 {
        self.origin.x + self.size.width * 0.5
    }

    #[inline]
    pub fn max_x(self) -> f32 {
        self.origin.x + self.size.width
    }

    #[inline]
    pub fn min_y(self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn mid_y(self) -> f32 {
        self.origin.y + self.size.height * 0.5
    }

    #[inline]
    pub fn max_y(self) -> f32 {
        self.origin.y + self.size.height
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.width
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.height
    }

    #[inline]
    pub fn min(self) -> Point {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Point {
        Point::new(self.max_x(), self.max_y())
    }

    #[inline]
    pub fn center(self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    // ── vertices ──────────────────────────────────────────────────────────

    pub fn vertex(self, vertex: Vertex) -> Point {
        match vertex {
            Vertex::TopRight => Point::new(self.max_x(), self.min_y()),
            Vertex::BottomRight => Point::new(self.max_x(), self.max_y()),
            Vertex::BottomLeft => Point::new(self.min_x(), self.max_y()),
            Vertex::TopLeft => Point::new(self.min_x(), self.min_y()),
        }
    }

    /// All four corners, indexed by [`Vertex::index`].
    pub fn vertices(self) -> [Point; 4] {
        Vertex::ALL.map(|v| self.vertex(v))
    }

    pub fn vertex_iter(self) -> impl Iterator<Item = Point> {
        Vertex::ALL.into_iter().map(move |v| self.vertex(v))
    }

    // ── derived rects ─────────────────────────────────────────────────────

    /// Same size, moved so its center is `center`.
    #[inline]
    #[must_use]
    pub fn with_center(self, center: Point) -> Self {
        Rect::from_center_size(center, self.size)
    }

    #[inline]
    #[must_use]
    pub fn with_origin(self, origin: Point) -> Self {
        Self { origin, ..self }
    }

    #[inline]
    #[must_use]
    pub fn with_size(self, size: Size) -> Self {
        Self { size, ..self }
    }

    #[inline]
    #[must_use]
    pub fn with_x(self, x: f32) -> Self {
        self.with_origin(self.origin.with_x(x))
    }

    #[inline]
    #[must_use]
    pub fn with_y(self, y: f32) -> Self {
        self.with_origin(self.origin.with_y(y))
    }

    #[inline]
    #[must_use]
    pub fn with_width(self, width: f32) -> Self {
        self.with_size(Size::new(width, self.size.height))
    }

    #[inline]
    #[must_use]
    pub fn with_height(self, height: f32) -> Self {
        self.with_size(Size::new(self.size.width, height))
    }

    /// Width and height exchanged; origin kept.
    #[inline]
    #[must_use]
    pub fn swapped(self) -> Self {
        self.with_size(self.size.swapped())
    }

    #[inline]
    #[must_use]
    pub fn offset_by(self, offset: Point) -> Self {
        self.with_origin(self.origin + offset)
    }

    /// Componentwise linear mix of origin and size.
    #[inline]
    #[must_use]
    pub fn mix(self, other: Rect, t: f32) -> Self {
        Rect::from_origin_size(self.origin.mix(other.origin, t), self.size.mix(other.size, t))
    }

    // ── predicates ────────────────────────────────────────────────────────

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.width <= 0.0 || self.size.height <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    #[must_use]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.width;
        let mut h = self.size.height;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        let r = self.normalized();
        p.x >= r.min_x() && p.y >= r.min_y() && p.x < r.max_x() && p.y < r.max_y()
    }

    /// `other` lies entirely within `self`, edges included.
    #[inline]
    pub fn contains_rect(self, other: Rect) -> bool {
        other.min_x() >= self.min_x()
            && other.min_y() >= self.min_y()
            && other.max_x() <= self.max_x()
            && other.max_y() <= self.max_y()
    }

    /// Closed-interval overlap: rects sharing only an edge or a corner touch.
    #[inline]
    pub fn touches(self, other: Rect) -> bool {
        !(self.max_x() < other.min_x()
            || self.min_x() > other.max_x()
            || self.max_y() < other.min_y()
            || self.min_y() > other.max_y())
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let a = self.normalized();
        let b = other.normalized();

        let x0 = a.min_x().max(b.min_x());
        let y0 = a.min_y().max(b.min_y());
        let x1 = a.max_x().min(b.max_x());
        let y1 = a.max_y().min(b.max_y());

        let w = x1 - x0;
        let h = y1 - y0;

        if w <= 0.0 || h <= 0.0 {
            None
        } else {
            Some(Rect::new(x0, y0, w, h))
        }
    }
}
