//! Families: identity shared by every revision of one logical node.

use crate::component::{ComponentHandle, ComponentName};

/// Per-surface identifier of a logical node.
pub type Tag = i32;

/// Identifier of the surface (root view) a tree is rendered into.
pub type SurfaceId = i32;

/// The information needed to create a [`ShadowNodeFamily`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct ShadowNodeFamilyFragment {
    /// Tag of the logical node.
    pub tag: Tag,
    /// Surface the node belongs to.
    pub surface_id: SurfaceId,
}

impl ShadowNodeFamilyFragment {
    /// Creates a fragment for `tag` on `surface_id`.
    #[must_use]
    pub const fn new(tag: Tag, surface_id: SurfaceId) -> Self {
        Self { tag, surface_id }
    }
}

/// Stable identity grouping all clones of the same logical node.
///
/// A family is created once, by a component descriptor, and then shared by
/// `Arc` with every node cloned from the first one. Two nodes belong to the
/// same family exactly when they point at the same allocation.
#[derive(Debug)]
pub struct ShadowNodeFamily {
    tag: Tag,
    surface_id: SurfaceId,
    component_name: ComponentName,
    component_handle: ComponentHandle,
}

impl ShadowNodeFamily {
    /// Creates a family for a node of the given component kind.
    #[must_use]
    pub const fn new(
        fragment: ShadowNodeFamilyFragment,
        component_name: ComponentName,
        component_handle: ComponentHandle,
    ) -> Self {
        Self {
            tag: fragment.tag,
            surface_id: fragment.surface_id,
            component_name,
            component_handle,
        }
    }

    /// Tag of the logical node.
    #[must_use]
    pub const fn tag(&self) -> Tag {
        self.tag
    }

    /// Surface the node is rendered into.
    #[must_use]
    pub const fn surface_id(&self) -> SurfaceId {
        self.surface_id
    }

    /// Name of the component kind this family was created for.
    #[must_use]
    pub const fn component_name(&self) -> &ComponentName {
        &self.component_name
    }

    /// Handle of the component kind this family was created for.
    #[must_use]
    pub const fn component_handle(&self) -> ComponentHandle {
        self.component_handle
    }
}
