//! Error types for props parsing, node construction and registry lookup.

use thiserror::Error;

use crate::component::ComponentName;

/// Failure to turn raw props into a component's typed props.
#[derive(Debug, Error)]
pub enum PropsError {
    /// The raw props did not match the component's props schema.
    #[error("malformed props for `{component}`: {source}")]
    Malformed {
        /// Component whose props failed to parse.
        component: ComponentName,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },
    /// The props to overlay hold values JSON cannot carry, such as
    /// non-finite floats, so merging them would lose data.
    #[error("props of `{component}` hold values JSON cannot represent")]
    Unrepresentable {
        /// Component whose props could not be merged.
        component: ComponentName,
    },
    /// Raw props must be a JSON object.
    #[error("raw props must be a JSON object")]
    NotAnObject,
    /// Base props belong to a different component kind.
    #[error("base props are not props of `{component}`")]
    TypeMismatch {
        /// Component that was asked to clone the props.
        component: ComponentName,
    },
}

/// Failure to create or clone a shadow node.
///
/// These all mean a value produced for one component kind was handed to the
/// descriptor of another.
#[derive(Debug, Error)]
pub enum ShadowNodeError {
    /// The node or family belongs to a different component kind.
    #[error("`{expected}` descriptor cannot handle a `{found}` node")]
    ComponentMismatch {
        /// Kind the descriptor manufactures.
        expected: ComponentName,
        /// Kind of the node or family that was supplied.
        found: ComponentName,
    },
    /// Props override of the wrong type.
    #[error("props override is not props of `{component}`")]
    PropsTypeMismatch {
        /// Component the node belongs to.
        component: ComponentName,
    },
    /// State override of the wrong type.
    #[error("state override is not state of `{component}`")]
    StateTypeMismatch {
        /// Component the node belongs to.
        component: ComponentName,
    },
}

/// Failure to register or look up a component descriptor.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A descriptor with this name is already registered.
    #[error("component `{name}` is already registered")]
    Duplicate {
        /// The contested name.
        name: ComponentName,
    },
    /// No descriptor registered for this kind and no fallback available.
    #[error("no descriptor registered for component `{name}`")]
    Unregistered {
        /// The name that was looked up.
        name: ComponentName,
    },
    /// No descriptor registered under this handle and no fallback available.
    #[error("no descriptor registered for component handle {handle}")]
    UnregisteredHandle {
        /// The raw handle that was looked up.
        handle: u64,
    },
}

/// Any error produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// See [`PropsError`].
    #[error(transparent)]
    Props(#[from] PropsError),
    /// See [`ShadowNodeError`].
    #[error(transparent)]
    ShadowNode(#[from] ShadowNodeError),
    /// See [`RegistryError`].
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Result alias defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;
