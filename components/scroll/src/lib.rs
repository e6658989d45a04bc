//! The `ScrollView` component kind.
//!
//! Scrolling itself is the mounting layer's job. The shadow node only keeps
//! what layout and the tree need: the declared [`ScrollViewProps`] and a
//! [`ScrollViewState`] with the scroll position and the content's bounding
//! box.

mod node;
mod props;

pub use node::{ScrollViewShadowNode, ScrollViewState};
pub use props::{EdgeInsets, ScrollViewProps};

/// Descriptor of the `ScrollView` kind.
pub type ScrollViewComponentDescriptor =
    arbor_core::ConcreteComponentDescriptor<ScrollViewShadowNode>;
