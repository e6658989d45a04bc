//! Declared configuration of a scroll view.

use arbor_geometry::Point;
use serde::{Deserialize, Serialize};

/// Distances inset from each edge of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeInsets {
    /// Inset from the top edge.
    pub top: f32,
    /// Inset from the left edge.
    pub left: f32,
    /// Inset from the bottom edge.
    pub bottom: f32,
    /// Inset from the right edge.
    pub right: f32,
}

impl EdgeInsets {
    /// Creates insets with explicit edges.
    #[must_use]
    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Horizontal and vertical totals, as a per-axis translation.
    #[must_use]
    pub fn total(&self) -> Point {
        Point::new(self.left + self.right, self.top + self.bottom)
    }
}

/// Props of a `ScrollView`, in the outer layer's camelCase naming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct ScrollViewProps {
    /// Scroll horizontally instead of vertically.
    pub horizontal: bool,
    /// Whether the user can scroll at all.
    pub scroll_enabled: bool,
    /// Requested initial scroll position.
    pub content_offset: Point,
    /// Extra space around the content.
    pub content_inset: EdgeInsets,
    /// Current zoom factor.
    pub zoom_scale: f32,
    /// Smallest allowed zoom factor.
    pub minimum_zoom_scale: f32,
    /// Largest allowed zoom factor.
    pub maximum_zoom_scale: f32,
    /// Show the horizontal scroll indicator.
    pub shows_horizontal_scroll_indicator: bool,
    /// Show the vertical scroll indicator.
    pub shows_vertical_scroll_indicator: bool,
    /// Bounce when scrolling past the content edge.
    pub bounces: bool,
    /// Stop on multiples of the view's size.
    pub paging_enabled: bool,
}

impl Default for ScrollViewProps {
    fn default() -> Self {
        Self {
            horizontal: false,
            scroll_enabled: true,
            content_offset: Point::zero(),
            content_inset: EdgeInsets::default(),
            zoom_scale: 1.0,
            minimum_zoom_scale: 1.0,
            maximum_zoom_scale: 1.0,
            shows_horizontal_scroll_indicator: true,
            shows_vertical_scroll_indicator: true,
            bounces: true,
            paging_enabled: false,
        }
    }
}

impl ScrollViewProps {
    /// The zoom factor limited to `[minimum_zoom_scale, maximum_zoom_scale]`.
    ///
    /// Does not panic on inverted limits or NaN; the maximum wins.
    #[must_use]
    pub fn clamped_zoom_scale(&self) -> f32 {
        self.zoom_scale
            .max(self.minimum_zoom_scale)
            .min(self.maximum_zoom_scale)
    }
}
