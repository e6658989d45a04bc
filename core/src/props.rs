//! Props: the declared configuration of a node.
//!
//! Props arrive from the outer layer as [`RawProps`] (a JSON object) and are
//! parsed by the component descriptor into the node's typed props. Inside the
//! tree they travel type-erased as [`SharedProps`] and are downcast back by
//! the node that owns them.

use core::any::Any;
use core::fmt::Debug;
use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::component::ComponentName;
use crate::error::PropsError;

/// Type-erased props of some component kind.
///
/// Implemented for every [`ConcreteProps`] type; there is nothing to
/// implement by hand.
pub trait Props: Debug + Send + Sync + 'static {
    /// Returns `self` as [`Any`] for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Converts a shared pointer to `self` into a shared [`Any`].
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

/// Requirements on the typed props of a concrete node.
///
/// `Default` supplies the props of a node created without any, `Serialize`
/// and `Deserialize` let raw props be overlaid on existing values.
pub trait ConcreteProps:
    Debug + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
}

impl<T> ConcreteProps for T where
    T: Debug + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
}

impl<T: ConcreteProps> Props for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

/// Props shared between node revisions.
pub type SharedProps = Arc<dyn Props>;

impl dyn Props {
    /// Returns the props as `P` if that is their concrete type.
    #[must_use]
    pub fn downcast_ref<P: ConcreteProps>(&self) -> Option<&P> {
        self.as_any().downcast_ref()
    }
}

/// Recovers typed props from [`SharedProps`], sharing the allocation.
///
/// Returns `None` if the props belong to another component kind.
#[must_use]
pub fn downcast_props<P: ConcreteProps>(props: &SharedProps) -> Option<Arc<P>> {
    Arc::clone(props).into_any().downcast::<P>().ok()
}

/// Untyped props as received from the outer layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawProps(Map<String, Value>);

impl RawProps {
    /// Creates empty raw props.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a JSON value, which must be an object (or `null`, meaning empty).
    ///
    /// # Errors
    ///
    /// Returns [`PropsError::NotAnObject`] for any other JSON value.
    pub fn from_value(value: Value) -> Result<Self, PropsError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::default()),
            _ => Err(PropsError::NotAnObject),
        }
    }

    /// Sets a single prop.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Returns the value of a prop.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns true if no props are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of props set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Map<String, Value>> for RawProps {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}

/// Overlays `raw` on `base` (or on `P::default()`) and parses the result.
///
/// Keys absent from `raw` keep their value from `base`; keys present replace
/// it. Unknown keys are handled by `P`'s own `Deserialize` implementation.
///
/// # Errors
///
/// Returns [`PropsError::Unrepresentable`] if the base props do not survive a
/// trip through JSON (a non-finite float, say), and
/// [`PropsError::Malformed`] if the merged object does not parse as `P`.
pub fn parse_props<P: ConcreteProps>(
    component: &ComponentName,
    base: Option<&P>,
    raw: &RawProps,
) -> Result<P, PropsError> {
    let malformed = |source| PropsError::Malformed {
        component: component.clone(),
        source,
    };

    let mut merged = match base {
        Some(base) => base_value(component, base)?,
        None => base_value(component, &P::default())?,
    };

    match &mut merged {
        Value::Object(fields) => {
            for (key, value) in &raw.0 {
                fields.insert(key.clone(), value.clone());
            }
        }
        // Props serialized as something other than an object (a unit struct,
        // say) can only be replaced wholesale.
        other if !raw.is_empty() => *other = Value::Object(raw.0.clone()),
        _ => {}
    }

    serde_json::from_value(merged).map_err(malformed)
}

/// Serializes `base`, rejecting props JSON would silently alter.
///
/// `serde_json` writes `NaN` and infinities as `null`, which then either fails
/// to parse or reads back as a different value.
fn base_value<P: ConcreteProps>(component: &ComponentName, base: &P) -> Result<Value, PropsError> {
    let unrepresentable = || PropsError::Unrepresentable {
        component: component.clone(),
    };

    let value = serde_json::to_value(base).map_err(|_| unrepresentable())?;
    match serde_json::from_value::<P>(value.clone()) {
        Ok(read_back) if read_back == *base => Ok(value),
        _ => Err(unrepresentable()),
    }
}
