#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

pub mod logging;

#[doc(inline)]
pub use arbor_core as shadow;
#[doc(inline)]
pub use arbor_geometry as geometry;
#[doc(inline)]
pub use arbor_scroll as scroll;

#[doc(inline)]
pub use arbor_core::{
    ComponentDescriptor, ComponentDescriptorProvider, ComponentDescriptorRegistry,
    ComponentHandle, ComponentName, ConcreteComponentDescriptor, ConcreteShadowNode, Error,
    RawProps, RegistryOptions, Result, ShadowNode, ShadowNodeFamily, ShadowNodeFamilyFragment,
    ShadowNodeFragment, ShadowNodeHandle,
};
#[doc(inline)]
pub use arbor_geometry::{Point, Rect, Size, SizeMap};

pub mod prelude {
    //! Commonly used types and traits.
    //!
    //! ```
    //! use arbor::prelude::*;
    //!
    //! let registry = registry_with_builtins().unwrap();
    //! assert!(registry.contains("ScrollView"));
    //! ```
    pub use super::registry_with_builtins;
    pub use arbor_core::{
        ComponentDescriptor, ComponentDescriptorRegistry, ConcreteShadowNode, RawProps,
        ShadowNode, ShadowNodeFamilyFragment, ShadowNodeFragment,
    };
    pub use arbor_geometry::{Point, Rect, Size};
    pub use arbor_scroll::{ScrollViewComponentDescriptor, ScrollViewShadowNode};
}

/// A registry holding every component kind shipped with this crate.
///
/// # Errors
///
/// Only fails if two built-in kinds share a name.
pub fn registry_with_builtins() -> Result<ComponentDescriptorRegistry> {
    registry_with_options(RegistryOptions::default())
}

/// Like [`registry_with_builtins`], with the given options.
///
/// # Errors
///
/// Only fails if two built-in kinds share a name.
pub fn registry_with_options(options: RegistryOptions) -> Result<ComponentDescriptorRegistry> {
    let mut registry = ComponentDescriptorRegistry::with_options(options);
    registry.add_provider(&ComponentDescriptorProvider::of::<
        arbor_scroll::ScrollViewShadowNode,
    >())?;
    Ok(registry)
}
