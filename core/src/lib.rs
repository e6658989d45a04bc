//! Component descriptors and immutable shadow nodes for the `arbor` rendering
//! tree.
//!
//! The tree is built from [`ShadowNode`]s: immutable snapshots shared between
//! tree revisions by `Arc`. Nodes of every component kind are created and
//! cloned through that kind's [`ComponentDescriptor`], looked up by name or
//! [`ComponentHandle`] in a [`ComponentDescriptorRegistry`].
//!
//! # Adding a component kind
//!
//! Define the node type and instantiate the generic descriptor over it:
//!
//! ```
//! use arbor_core::{ConcreteComponentDescriptor, ConcreteShadowNode, ShadowNodeData};
//!
//! #[derive(Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
//! struct TextProps {
//!     text: String,
//! }
//!
//! #[derive(Debug)]
//! struct TextShadowNode(ShadowNodeData<TextProps, ()>);
//!
//! impl ConcreteShadowNode for TextShadowNode {
//!     const NAME: &'static str = "Text";
//!     type Props = TextProps;
//!     type State = ();
//!
//!     fn from_data(data: ShadowNodeData<TextProps, ()>) -> Self {
//!         Self(data)
//!     }
//!
//!     fn data(&self) -> &ShadowNodeData<TextProps, ()> {
//!         &self.0
//!     }
//! }
//!
//! type TextComponentDescriptor = ConcreteComponentDescriptor<TextShadowNode>;
//! ```
//!
//! Nothing else in the tree needs to know about the new kind.

pub mod component;
pub mod descriptor;
pub mod error;
pub mod family;
pub mod node;
pub mod props;
pub mod registry;
pub mod state;

pub use component::{ComponentHandle, ComponentName};
pub use descriptor::{ComponentDescriptor, ConcreteComponentDescriptor, SharedComponentDescriptor};
pub use error::{Error, PropsError, RegistryError, Result, ShadowNodeError};
pub use family::{ShadowNodeFamily, ShadowNodeFamilyFragment, SurfaceId, Tag};
pub use node::{
    ConcreteShadowNode, ShadowNode, ShadowNodeData, ShadowNodeFragment, ShadowNodeHandle,
    SharedChildren,
};
pub use props::{ConcreteProps, Props, RawProps, SharedProps};
pub use registry::{ComponentDescriptorProvider, ComponentDescriptorRegistry, RegistryOptions};
pub use state::{SharedState, State};

#[cfg(test)]
mod tests;
