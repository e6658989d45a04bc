//! Immutable shadow nodes.
//!
//! A shadow node is a snapshot of one element in one tree revision. Once
//! built it is never modified: "changing" a node means cloning it through its
//! component descriptor with a [`ShadowNodeFragment`] of overrides. Nodes are
//! shared between revisions (and threads) by `Arc` and dropped when the last
//! revision referencing them goes away.
//!
//! Component kinds implement [`ConcreteShadowNode`]; the type-erased
//! [`ShadowNode`] interface used by the rest of the tree comes for free.

use core::any::Any;
use core::fmt::{self, Debug};
use std::sync::Arc;

use crate::component::{ComponentHandle, ComponentName};
use crate::family::{ShadowNodeFamily, Tag};
use crate::props::{ConcreteProps, SharedProps};
use crate::state::{SharedState, State};

/// Shared pointer to a node of any kind.
pub type ShadowNodeHandle = Arc<dyn ShadowNode>;

/// Children of a node, shared between revisions that did not change them.
pub type SharedChildren = Arc<[ShadowNodeHandle]>;

/// Optional replacements applied when creating or cloning a node.
///
/// Every field left as `None` is taken from the source node when cloning, or
/// from the kind's defaults when creating.
#[derive(Debug, Clone, Default)]
pub struct ShadowNodeFragment {
    /// Replacement props.
    pub props: Option<SharedProps>,
    /// Replacement children.
    pub children: Option<SharedChildren>,
    /// Replacement state.
    pub state: Option<SharedState>,
}

impl ShadowNodeFragment {
    /// A fragment that overrides nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the props.
    #[must_use]
    pub fn props(mut self, props: impl ConcreteProps) -> Self {
        self.props = Some(Arc::new(props));
        self
    }

    /// Overrides the props with an already shared value.
    #[must_use]
    pub fn shared_props(mut self, props: SharedProps) -> Self {
        self.props = Some(props);
        self
    }

    /// Overrides the children.
    #[must_use]
    pub fn children(mut self, children: impl Into<SharedChildren>) -> Self {
        self.children = Some(children.into());
        self
    }

    /// Overrides the state.
    #[must_use]
    pub fn state(mut self, state: impl State) -> Self {
        self.state = Some(Arc::new(state));
        self
    }

    /// Overrides the state with an already shared value.
    #[must_use]
    pub fn shared_state(mut self, state: SharedState) -> Self {
        self.state = Some(state);
        self
    }
}

/// The fields every node carries, typed by its kind's props and state.
pub struct ShadowNodeData<P, S> {
    family: Arc<ShadowNodeFamily>,
    props: Arc<P>,
    children: SharedChildren,
    state: Option<Arc<S>>,
}

impl<P, S> ShadowNodeData<P, S> {
    /// Assembles node data.
    #[must_use]
    pub const fn new(
        family: Arc<ShadowNodeFamily>,
        props: Arc<P>,
        children: SharedChildren,
        state: Option<Arc<S>>,
    ) -> Self {
        Self {
            family,
            props,
            children,
            state,
        }
    }

    /// The node's family.
    #[must_use]
    pub const fn family(&self) -> &Arc<ShadowNodeFamily> {
        &self.family
    }

    /// The node's typed props.
    #[must_use]
    pub const fn props(&self) -> &Arc<P> {
        &self.props
    }

    /// The node's children.
    #[must_use]
    pub const fn children(&self) -> &SharedChildren {
        &self.children
    }

    /// The node's typed state, if the kind keeps any.
    #[must_use]
    pub const fn state(&self) -> Option<&Arc<S>> {
        self.state.as_ref()
    }
}

impl<P, S> Clone for ShadowNodeData<P, S> {
    fn clone(&self) -> Self {
        Self {
            family: Arc::clone(&self.family),
            props: Arc::clone(&self.props),
            children: Arc::clone(&self.children),
            state: self.state.clone(),
        }
    }
}

impl<P: Debug, S: Debug> Debug for ShadowNodeData<P, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShadowNodeData")
            .field("tag", &self.family.tag())
            .field("component", self.family.component_name())
            .field("props", &self.props)
            .field("children", &self.children.len())
            .field("state", &self.state)
            .finish()
    }
}

/// A node of any component kind, as seen by the tree.
pub trait ShadowNode: Debug + Send + Sync + 'static {
    /// The family shared with every revision of this logical node.
    fn family(&self) -> &Arc<ShadowNodeFamily>;

    /// The node's props.
    fn props(&self) -> SharedProps;

    /// The node's children.
    fn children(&self) -> &SharedChildren;

    /// The node's state, if its kind keeps any.
    fn state(&self) -> Option<SharedState>;

    /// Returns `self` as [`Any`] for downcasting to the concrete kind.
    fn as_any(&self) -> &dyn Any;

    /// Tag of the logical node.
    fn tag(&self) -> Tag {
        self.family().tag()
    }

    /// Name of the node's component kind.
    fn component_name(&self) -> &ComponentName {
        self.family().component_name()
    }

    /// Handle of the node's component kind.
    fn component_handle(&self) -> ComponentHandle {
        self.family().component_handle()
    }

    /// Returns true if both nodes are revisions of the same logical node.
    fn same_family(&self, other: &dyn ShadowNode) -> bool {
        Arc::ptr_eq(self.family(), other.family())
    }
}

impl dyn ShadowNode {
    /// Returns the node as `N` if that is its concrete kind.
    #[must_use]
    pub fn downcast_ref<N: ShadowNode>(&self) -> Option<&N> {
        self.as_any().downcast_ref()
    }
}

/// A concrete component kind's node type.
///
/// Implementing this trait, plus instantiating
/// [`ConcreteComponentDescriptor`](crate::ConcreteComponentDescriptor) over the
/// type, is all it takes to add a component kind.
pub trait ConcreteShadowNode: Debug + Send + Sync + Sized + 'static {
    /// Default name the kind registers under.
    const NAME: &'static str;

    /// Typed props.
    type Props: ConcreteProps;

    /// Typed state; `()` for kinds that keep none.
    type State: State;

    /// Builds a node from its data.
    fn from_data(data: ShadowNodeData<Self::Props, Self::State>) -> Self;

    /// The node's data.
    fn data(&self) -> &ShadowNodeData<Self::Props, Self::State>;

    /// State given to a freshly created node when none is supplied.
    fn initial_state(_props: &Self::Props, _family: &ShadowNodeFamily) -> Option<Self::State> {
        None
    }

    /// Builds a revision of `self` from `data`.
    ///
    /// Kinds that cache values derived from other nodes can carry them over
    /// here; by default the clone is rebuilt from `data` alone.
    #[must_use]
    fn clone_with(&self, data: ShadowNodeData<Self::Props, Self::State>) -> Self {
        Self::from_data(data)
    }
}

impl<N: ConcreteShadowNode> ShadowNode for N {
    fn family(&self) -> &Arc<ShadowNodeFamily> {
        self.data().family()
    }

    fn props(&self) -> SharedProps {
        let props: SharedProps = self.data().props().clone();
        props
    }

    fn children(&self) -> &SharedChildren {
        self.data().children()
    }

    fn state(&self) -> Option<SharedState> {
        self.data()
            .state()
            .map(|state| -> SharedState { state.clone() })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
