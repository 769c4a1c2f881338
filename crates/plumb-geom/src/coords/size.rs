use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use super::mix;

/// Width and height in logical pixels.
///
/// Non-negative in well-formed use; negative sides are not rejected.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size::new(0.0, 0.0);
    pub const MAX: Size = Size::new(f32::MAX, f32::MAX);

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }

    #[inline]
    pub fn min_side(self) -> f32 {
        self.width.min(self.height)
    }

    #[inline]
    pub fn max_side(self) -> f32 {
        self.width.max(self.height)
    }

    /// Each side rounded up to a whole point.
    #[inline]
    #[must_use]
    pub fn integral(self) -> Self {
        Size::new(self.width.ceil(), self.height.ceil())
    }

    /// Width and height exchanged.
    #[inline]
    #[must_use]
    pub fn swapped(self) -> Self {
        Size::new(self.height, self.width)
    }

    #[inline]
    #[must_use]
    pub fn mix(self, other: Size, t: f32) -> Self {
        Size::new(mix(self.width, other.width, t), mix(self.height, other.height, t))
    }
}

impl Add for Size {
    type Output = Size;
    #[inline]
    fn add(self, rhs: Size) -> Size {
        Size::new(self.width + rhs.width, self.height + rhs.height)
    }
}

impl AddAssign for Size {
    #[inline]
    fn add_assign(&mut self, rhs: Size) {
        *self = *self + rhs;
    }
}

impl Sub for Size {
    type Output = Size;
    #[inline]
    fn sub(self, rhs: Size) -> Size {
        Size::new(self.width - rhs.width, self.height - rhs.height)
    }
}

impl SubAssign for Size {
    #[inline]
    fn sub_assign(&mut self, rhs: Size) {
        *self = *self - rhs;
    }
}

impl Mul<f32> for Size {
    type Output = Size;
    #[inline]
    fn mul(self, rhs: f32) -> Size {
        Size::new(self.width * rhs, self.height * rhs)
    }
}

impl Mul<Size> for f32 {
    type Output = Size;
    #[inline]
    fn mul(self, rhs: Size) -> Size {
        rhs * self
    }
}

impl MulAssign<f32> for Size {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl Div<f32> for Size {
    type Output = Size;
    #[inline]
    fn div(self, rhs: f32) -> Size {
        Size::new(self.width / rhs, self.height / rhs)
    }
}

impl DivAssign<f32> for Size {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}
