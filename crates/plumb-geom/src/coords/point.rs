use core::ops::{Add, Div, Mul, Neg, Sub};

use super::{mix, Rect};

/// Location in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point::new(0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    #[must_use]
    pub fn with_x(self, x: f32) -> Self {
        Self { x, ..self }
    }

    #[inline]
    #[must_use]
    pub fn with_y(self, y: f32) -> Self {
        Self { y, ..self }
    }

    #[inline]
    #[must_use]
    pub fn offset(self, by: Point) -> Self {
        self + by
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, rhs: Point) -> f32 {
        self.x * rhs.x + self.y * rhs.y
    }

    #[inline]
    pub fn distance_to(self, other: Point) -> f32 {
        let d = other - self;
        d.dot(d).sqrt()
    }

    #[inline]
    #[must_use]
    pub fn mid_point_to(self, other: Point) -> Self {
        Point::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }

    /// Linear mix towards `other`; `t = 0` is `self`, `t = 1` is `other`.
    #[inline]
    #[must_use]
    pub fn mix(self, other: Point, t: f32) -> Self {
        Point::new(mix(self.x, other.x, t), mix(self.y, other.y, t))
    }

    /// Point dividing the segment `origin → destination` in the ratio
    /// `proportion : 1`, i.e. `(origin + proportion * destination) / (1 + proportion)`.
    #[inline]
    pub fn from_proportion(origin: Point, destination: Point, proportion: f32) -> Self {
        (origin + destination * proportion) / (1.0 + proportion)
    }

    /// Inverse of [`Point::from_proportion`].
    ///
    /// Solved on Y; falls back to X when the Y expression is `0 / 0`
    /// (horizontal segments).
    pub fn proportion_for_point(point: Point, origin: Point, destination: Point) -> f32 {
        let on_y = (origin.y - point.y) / (point.y - destination.y);
        if on_y.is_nan() {
            (origin.x - point.x) / (point.x - destination.x)
        } else {
            on_y
        }
    }

    // ── rect relations ───────────────────────────────────────────────────

    /// Strictly inside: boundary points are excluded.
    pub fn inside_rect(self, rect: Rect) -> bool {
        self.x > rect.min_x() && self.x < rect.max_x() && self.y > rect.min_y() && self.y < rect.max_y()
    }

    /// Inside or on the boundary.
    pub fn contained_by_rect(self, rect: Rect) -> bool {
        self.x >= rect.min_x() && self.x <= rect.max_x() && self.y >= rect.min_y() && self.y <= rect.max_y()
    }

    /// Exactly on the boundary. Exact float comparison: derived points
    /// rarely land here unless they were built from the rect's own edges.
    pub fn on_rect(self, rect: Rect) -> bool {
        self.contained_by_rect(rect) && !self.inside_rect(rect)
    }

    // ── inscribed circle relations ───────────────────────────────────────
    //
    // The circle is the largest one inside `rect`: centered on it, radius
    // half the shorter side.

    fn circle_terms(self, rect: Rect) -> (f32, f32) {
        let radius = rect.size.min_side() * 0.5;
        let dx = self.x - rect.mid_x();
        let dy = self.y - rect.mid_y();
        (dx * dx + dy * dy, radius * radius)
    }

    pub fn inside_circle_of_rect(self, rect: Rect) -> bool {
        let (d2, r2) = self.circle_terms(rect);
        d2 < r2
    }

    /// Exactly on the circumference (exact float comparison).
    pub fn on_circle_of_rect(self, rect: Rect) -> bool {
        let (d2, r2) = self.circle_terms(rect);
        d2 == r2
    }

    pub fn contained_by_circle_of_rect(self, rect: Rect) -> bool {
        let (d2, r2) = self.circle_terms(rect);
        d2 <= r2
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Point> for f32 {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: Point) -> Point {
        rhs * self
    }
}

impl Div<f32> for Point {
    type Output = Point;
    #[inline]
    fn div(self, rhs: f32) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}
