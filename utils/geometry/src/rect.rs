use crate::{Point, Size};

/// A frame: an origin plus the size extending right and down from it.
///
/// Equality and hashing are exact over all four components, like [`Size`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    origin: Point,
    size: Size,
}

impl Rect {
    /// Frame at `origin` spanning `size`.
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Frame of `size` anchored at the origin.
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self::new(Point::zero(), size)
    }

    /// Top-left corner.
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Extent from the origin.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Bottom-right corner.
    #[must_use]
    pub fn far_corner(&self) -> Point {
        self.origin + Point::new(self.size.width, self.size.height)
    }

    /// Bounding box of `self` and `other`.
    ///
    /// Children of a scroll view may sit at negative offsets, so the result's
    /// origin is not clamped to zero.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let near = Point::new(
            self.origin.x.min(other.origin.x),
            self.origin.y.min(other.origin.y),
        );
        let (a, b) = (self.far_corner(), other.far_corner());
        let far = Point::new(a.x.max(b.x), a.y.max(b.y));
        let extent = far - near;
        Self::new(near, Size::new(extent.x, extent.y))
    }
}
