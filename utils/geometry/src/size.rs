use core::hash::{BuildHasher, Hash, Hasher};
use core::ops::{Add, AddAssign, Mul, MulAssign, Sub};

use crate::Point;
use crate::hash::{BuildStableHasher, float_bits};

/// Two-dimensional size expressed in points.
///
/// # Equality
///
/// Comparison is exact: there is no epsilon. Two sizes produced by different
/// sequences of floating-point operations can differ in the last bit, so round
/// or quantize before comparing accumulated results.
///
/// # Hashing
///
/// `Size` hashes width then height, so the combination is order-sensitive.
/// Equal sizes always hash equally (signed zeros are normalized). A size with
/// a NaN component is never equal to itself and must not be used as a key.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// The width in points.
    pub width: f32,
    /// The height in points.
    pub height: f32,
}

impl Size {
    /// Constructs a [`Size`] with the given `width` and `height`.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Creates a [`Size`] with zero width and height.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// Returns true if both dimensions are zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Returns true if both dimensions are finite.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }

    /// Hash of this size under [`StableHasher`](crate::StableHasher).
    ///
    /// Unlike hashing through `std`'s default hasher, the value is fixed by
    /// this crate and safe to persist.
    #[must_use]
    pub fn stable_hash(&self) -> u64 {
        BuildStableHasher::default().hash_one(self)
    }
}

impl Eq for Size {}

impl Hash for Size {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(float_bits(self.width));
        state.write_u32(float_bits(self.height));
    }
}

/// Translation-compose: grows the size by `point.x` horizontally and
/// `point.y` vertically. Used to accumulate padding, border and margin.
impl AddAssign<Point> for Size {
    fn add_assign(&mut self, point: Point) {
        self.width += point.x;
        self.height += point.y;
    }
}

impl Add<Point> for Size {
    type Output = Self;

    fn add(mut self, point: Point) -> Self {
        self += point;
        self
    }
}

/// Scale-compose: multiplies width by `point.x` and height by `point.y`.
///
/// This is component-wise, NOT area scaling. Each axis takes its own factor
/// (per-axis pixel ratio, zoom, grow factors); `x` never touches `height`.
/// A uniform scale is `Point::splat(factor)`.
impl MulAssign<Point> for Size {
    fn mul_assign(&mut self, point: Point) {
        self.width *= point.x;
        self.height *= point.y;
    }
}

impl Mul<Point> for Size {
    type Output = Self;

    fn mul(mut self, point: Point) -> Self {
        self *= point;
        self
    }
}

impl Sub for Size {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.width - rhs.width, self.height - rhs.height)
    }
}

impl From<(f32, f32)> for Size {
    fn from((width, height): (f32, f32)) -> Self {
        Self::new(width, height)
    }
}
