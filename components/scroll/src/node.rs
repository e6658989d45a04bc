//! The scroll view's shadow node and state.

use arbor_core::{ConcreteShadowNode, ShadowNodeData, ShadowNodeFamily};
use arbor_geometry::{Point, Rect, Size};

use crate::props::ScrollViewProps;

/// What a scroll view carries between revisions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollViewState {
    /// Current scroll position.
    pub content_offset: Point,
    /// Bounding box of all laid-out children, in content coordinates.
    pub content_bounding_rect: Rect,
}

impl ScrollViewState {
    /// Size of the scrollable content.
    #[must_use]
    pub const fn content_size(&self) -> Size {
        self.content_bounding_rect.size()
    }
}

/// Shadow node of a `ScrollView`.
#[derive(Debug)]
pub struct ScrollViewShadowNode {
    data: ShadowNodeData<ScrollViewProps, ScrollViewState>,
}

impl ConcreteShadowNode for ScrollViewShadowNode {
    const NAME: &'static str = "ScrollView";
    type Props = ScrollViewProps;
    type State = ScrollViewState;

    fn from_data(data: ShadowNodeData<ScrollViewProps, ScrollViewState>) -> Self {
        Self { data }
    }

    fn data(&self) -> &ShadowNodeData<ScrollViewProps, ScrollViewState> {
        &self.data
    }

    fn initial_state(props: &ScrollViewProps, _family: &ShadowNodeFamily) -> Option<ScrollViewState> {
        Some(ScrollViewState {
            content_offset: props.content_offset,
            content_bounding_rect: Rect::default(),
        })
    }
}

impl ScrollViewShadowNode {
    /// Typed props.
    #[must_use]
    pub fn scroll_props(&self) -> &ScrollViewProps {
        self.data.props()
    }

    /// Typed state.
    #[must_use]
    pub fn scroll_state(&self) -> Option<&ScrollViewState> {
        self.data.state().map(|state| &**state)
    }

    /// Current scroll position: the state's if any, otherwise the requested one.
    #[must_use]
    pub fn content_offset(&self) -> Point {
        self.scroll_state()
            .map_or(self.scroll_props().content_offset, |state| state.content_offset)
    }

    /// Offset applied to children so the visible region starts at the origin.
    #[must_use]
    pub fn content_origin_offset(&self) -> Point {
        -self.content_offset()
    }

    /// Size the user can scroll through, given the laid-out content size.
    ///
    /// Insets are added per axis with `+=`. Zoom is then applied with `*=`,
    /// which is component-wise: `x` scales only the width and `y` only the
    /// height. Zoom happens to be uniform here (`Point::splat`), but the
    /// operator is not an area scale and must not be treated as one.
    #[must_use]
    pub fn scrollable_content_size(&self, content: Size) -> Size {
        let props = self.scroll_props();
        let mut size = content;
        size += props.content_inset.total();
        size *= Point::splat(props.clamped_zoom_scale());
        size
    }

    /// State reflecting the given children frames.
    ///
    /// Layout is done elsewhere; the tree clones this node with the returned
    /// state once the children have frames.
    #[must_use]
    pub fn state_for_children(&self, frames: &[Rect]) -> ScrollViewState {
        let content_bounding_rect = frames
            .iter()
            .copied()
            .reduce(|bounds, frame| bounds.union(&frame))
            .unwrap_or_default();

        let state = ScrollViewState {
            content_offset: self.content_offset(),
            content_bounding_rect,
        };
        tracing::trace!(
            tag = self.data.family().tag(),
            width = state.content_size().width,
            height = state.content_size().height,
            "scroll view content measured"
        );
        state
    }
}
