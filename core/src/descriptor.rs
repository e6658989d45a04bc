//! Component descriptors: per-kind node factories.
//!
//! The tree manipulates nodes of every kind through the object-safe
//! [`ComponentDescriptor`] trait. [`ConcreteComponentDescriptor<N>`] is the
//! one implementation, binding that interface to a concrete node type `N` at
//! compile time. A new kind needs nothing beyond its node type:
//!
//! ```ignore
//! pub type ScrollViewComponentDescriptor = ConcreteComponentDescriptor<ScrollViewShadowNode>;
//! ```
//!
//! Descriptors hold no mutable state, so a registered descriptor can be used
//! from any number of threads at once.

use core::any::type_name;
use core::fmt::{self, Debug};
use core::marker::PhantomData;
use std::sync::Arc;

use crate::component::{ComponentHandle, ComponentName};
use crate::error::{PropsError, ShadowNodeError};
use crate::family::{ShadowNodeFamily, ShadowNodeFamilyFragment};
use crate::node::{ConcreteShadowNode, ShadowNode, ShadowNodeData, ShadowNodeFragment, ShadowNodeHandle};
use crate::props::{RawProps, SharedProps, downcast_props, parse_props};
use crate::state::{SharedState, downcast_state};

/// Factory and identity of one component kind.
pub trait ComponentDescriptor: Debug + Send + Sync + 'static {
    /// Name this descriptor is registered under.
    fn component_name(&self) -> &ComponentName;

    /// Cheap-to-compare identity of the kind; unique per name.
    fn component_handle(&self) -> ComponentHandle;

    /// Creates the family for a new logical node of this kind.
    fn create_family(&self, fragment: ShadowNodeFamilyFragment) -> Arc<ShadowNodeFamily>;

    /// Parses `raw` on top of `props` (or of the kind's default props).
    ///
    /// When `raw` is empty and `props` is given, `props` is returned as is.
    ///
    /// # Errors
    ///
    /// Returns a [`PropsError`] if `props` belong to another kind or the
    /// merged props do not parse.
    fn clone_props(
        &self,
        props: Option<&SharedProps>,
        raw: &RawProps,
    ) -> Result<SharedProps, PropsError>;

    /// State a node of this kind starts with, given its props.
    ///
    /// # Errors
    ///
    /// Returns [`ShadowNodeError::PropsTypeMismatch`] if `props` belong to
    /// another kind.
    fn create_initial_state(
        &self,
        props: &SharedProps,
        family: &ShadowNodeFamily,
    ) -> Result<Option<SharedState>, ShadowNodeError>;

    /// Creates the first node of `family`.
    ///
    /// Missing props default to the kind's default props, missing state to
    /// the kind's initial state, missing children to none.
    ///
    /// # Errors
    ///
    /// Returns a [`ShadowNodeError`] if `family` or any value in `fragment`
    /// belongs to another kind.
    fn create_shadow_node(
        &self,
        fragment: ShadowNodeFragment,
        family: Arc<ShadowNodeFamily>,
    ) -> Result<ShadowNodeHandle, ShadowNodeError>;

    /// Creates a new revision of `source`.
    ///
    /// The clone shares `source`'s family; each field set in `fragment`
    /// replaces the source's, every other field is shared with `source`.
    /// `source` itself is never modified.
    ///
    /// # Errors
    ///
    /// Returns a [`ShadowNodeError`] if `source` or any value in `fragment`
    /// belongs to another kind.
    fn clone_shadow_node(
        &self,
        source: &dyn ShadowNode,
        fragment: ShadowNodeFragment,
    ) -> Result<ShadowNodeHandle, ShadowNodeError>;
}

/// Shared pointer to a descriptor of any kind.
pub type SharedComponentDescriptor = Arc<dyn ComponentDescriptor>;

/// The descriptor of the component kind whose nodes are `N`.
pub struct ConcreteComponentDescriptor<N> {
    name: ComponentName,
    handle: ComponentHandle,
    _node: PhantomData<fn() -> N>,
}

impl<N: ConcreteShadowNode> ConcreteComponentDescriptor<N> {
    /// Creates the descriptor under the node type's own name, [`N::NAME`](ConcreteShadowNode::NAME).
    #[must_use]
    pub fn new() -> Self {
        Self::with_name(N::NAME)
    }

    /// Creates the descriptor under a different name.
    ///
    /// The same node type registered under two names yields two kinds with
    /// distinct handles.
    #[must_use]
    pub fn with_name(name: impl Into<ComponentName>) -> Self {
        let name = name.into();
        let handle = name.handle();
        Self {
            name,
            handle,
            _node: PhantomData,
        }
    }

    fn typed_props(&self, props: &SharedProps) -> Result<Arc<N::Props>, ShadowNodeError> {
        downcast_props(props).ok_or_else(|| ShadowNodeError::PropsTypeMismatch {
            component: self.name.clone(),
        })
    }

    fn typed_state(&self, state: &SharedState) -> Result<Arc<N::State>, ShadowNodeError> {
        downcast_state(state).ok_or_else(|| ShadowNodeError::StateTypeMismatch {
            component: self.name.clone(),
        })
    }

    fn check_family(&self, family: &ShadowNodeFamily) -> Result<(), ShadowNodeError> {
        if family.component_handle() == self.handle {
            Ok(())
        } else {
            Err(ShadowNodeError::ComponentMismatch {
                expected: self.name.clone(),
                found: family.component_name().clone(),
            })
        }
    }
}

impl<N: ConcreteShadowNode> Default for ConcreteComponentDescriptor<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Debug for ConcreteComponentDescriptor<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcreteComponentDescriptor")
            .field("name", &self.name)
            .field("handle", &self.handle)
            .field("node", &type_name::<N>())
            .finish()
    }
}

impl<N: ConcreteShadowNode> ComponentDescriptor for ConcreteComponentDescriptor<N> {
    fn component_name(&self) -> &ComponentName {
        &self.name
    }

    fn component_handle(&self) -> ComponentHandle {
        self.handle
    }

    fn create_family(&self, fragment: ShadowNodeFamilyFragment) -> Arc<ShadowNodeFamily> {
        Arc::new(ShadowNodeFamily::new(
            fragment,
            self.name.clone(),
            self.handle,
        ))
    }

    fn clone_props(
        &self,
        props: Option<&SharedProps>,
        raw: &RawProps,
    ) -> Result<SharedProps, PropsError> {
        let base = match props {
            Some(props) => Some(downcast_props::<N::Props>(props).ok_or_else(|| {
                PropsError::TypeMismatch {
                    component: self.name.clone(),
                }
            })?),
            None => None,
        };

        if raw.is_empty()
            && let Some(base) = &base
        {
            let shared: SharedProps = base.clone();
            return Ok(shared);
        }

        let parsed = parse_props(&self.name, base.as_deref(), raw)?;
        Ok(Arc::new(parsed))
    }

    fn create_initial_state(
        &self,
        props: &SharedProps,
        family: &ShadowNodeFamily,
    ) -> Result<Option<SharedState>, ShadowNodeError> {
        let props = self.typed_props(props)?;
        Ok(N::initial_state(&props, family).map(|state| -> SharedState { Arc::new(state) }))
    }

    fn create_shadow_node(
        &self,
        fragment: ShadowNodeFragment,
        family: Arc<ShadowNodeFamily>,
    ) -> Result<ShadowNodeHandle, ShadowNodeError> {
        self.check_family(&family)?;

        let props = match &fragment.props {
            Some(props) => self.typed_props(props)?,
            None => Arc::new(N::Props::default()),
        };
        let state = match &fragment.state {
            Some(state) => Some(self.typed_state(state)?),
            None => N::initial_state(&props, &family).map(Arc::new),
        };
        let children = fragment.children.unwrap_or_else(|| Arc::from([]));

        tracing::trace!(
            component = %self.name,
            tag = family.tag(),
            surface = family.surface_id(),
            "creating shadow node"
        );

        let node = N::from_data(ShadowNodeData::new(family, props, children, state));
        Ok(Arc::new(node))
    }

    fn clone_shadow_node(
        &self,
        source: &dyn ShadowNode,
        fragment: ShadowNodeFragment,
    ) -> Result<ShadowNodeHandle, ShadowNodeError> {
        let Some(source) = source.downcast_ref::<N>() else {
            return Err(ShadowNodeError::ComponentMismatch {
                expected: self.name.clone(),
                found: source.component_name().clone(),
            });
        };
        let data = source.data();
        self.check_family(data.family())?;

        let props = match &fragment.props {
            Some(props) => self.typed_props(props)?,
            None => Arc::clone(data.props()),
        };
        let state = match &fragment.state {
            Some(state) => Some(self.typed_state(state)?),
            None => data.state().cloned(),
        };
        let children = fragment
            .children
            .unwrap_or_else(|| Arc::clone(data.children()));

        tracing::trace!(
            component = %self.name,
            tag = data.family().tag(),
            "cloning shadow node"
        );

        let clone = source.clone_with(ShadowNodeData::new(
            Arc::clone(data.family()),
            props,
            children,
            state,
        ));
        Ok(Arc::new(clone))
    }
}
