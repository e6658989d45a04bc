//! The registry of component descriptors.
//!
//! A registry is populated through `&mut self` and then shared, typically as
//! `Arc<ComponentDescriptorRegistry>`. Once shared it can only be read, so
//! every registration happens-before every concurrent lookup without any
//! locking.

use core::fmt::{self, Debug};
use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;

use crate::component::{ComponentHandle, ComponentName};
use crate::descriptor::{ComponentDescriptor, ConcreteComponentDescriptor, SharedComponentDescriptor};
use crate::error::{RegistryError, Result};
use crate::family::ShadowNodeFamilyFragment;
use crate::node::{ConcreteShadowNode, ShadowNodeFragment, ShadowNodeHandle};
use crate::props::RawProps;

/// Registry configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistryOptions {
    /// Kind to fall back to when a lookup finds no descriptor.
    ///
    /// The fallback must itself be registered. Without one, unknown kinds are
    /// an error.
    pub fallback: Option<String>,
}

type Constructor = fn(ComponentName) -> SharedComponentDescriptor;

/// A deferred descriptor registration: name, handle and constructor.
///
/// Providers let a list of kinds be assembled (and compared by handle) before
/// any descriptor is built.
#[derive(Clone)]
pub struct ComponentDescriptorProvider {
    name: ComponentName,
    handle: ComponentHandle,
    constructor: Constructor,
}

impl ComponentDescriptorProvider {
    /// Creates a provider calling `constructor` with `name`.
    #[must_use]
    pub fn new(name: impl Into<ComponentName>, constructor: Constructor) -> Self {
        let name = name.into();
        let handle = name.handle();
        Self {
            name,
            handle,
            constructor,
        }
    }

    /// Provider of `ConcreteComponentDescriptor<N>` under `N::NAME`.
    #[must_use]
    pub fn of<N: ConcreteShadowNode>() -> Self {
        Self::named::<N>(N::NAME)
    }

    /// Provider of `ConcreteComponentDescriptor<N>` under `name`.
    #[must_use]
    pub fn named<N: ConcreteShadowNode>(name: impl Into<ComponentName>) -> Self {
        Self::new(name, |name: ComponentName| -> SharedComponentDescriptor {
            Arc::new(ConcreteComponentDescriptor::<N>::with_name(name))
        })
    }

    /// Name the descriptor will be registered under.
    #[must_use]
    pub const fn name(&self) -> &ComponentName {
        &self.name
    }

    /// Handle of the kind.
    #[must_use]
    pub const fn handle(&self) -> ComponentHandle {
        self.handle
    }

    /// Builds the descriptor.
    #[must_use]
    pub fn create(&self) -> SharedComponentDescriptor {
        (self.constructor)(self.name.clone())
    }
}

impl Debug for ComponentDescriptorProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentDescriptorProvider")
            .field("name", &self.name)
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

/// Descriptors of every known component kind, by name and by handle.
#[derive(Debug, Default)]
pub struct ComponentDescriptorRegistry {
    options: RegistryOptions,
    by_name: HashMap<ComponentName, SharedComponentDescriptor>,
    by_handle: HashMap<ComponentHandle, SharedComponentDescriptor>,
}

impl ComponentDescriptorRegistry {
    /// Creates an empty registry without a fallback.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with the given options.
    #[must_use]
    pub fn with_options(options: RegistryOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// The registry's options.
    #[must_use]
    pub const fn options(&self) -> &RegistryOptions {
        &self.options
    }

    /// Registers a descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if the name is already taken; the
    /// existing registration is kept.
    pub fn add(&mut self, descriptor: impl ComponentDescriptor) -> Result<(), RegistryError> {
        self.add_shared(Arc::new(descriptor))
    }

    /// Registers an already shared descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if the name is already taken.
    pub fn add_shared(
        &mut self,
        descriptor: SharedComponentDescriptor,
    ) -> Result<(), RegistryError> {
        let name = descriptor.component_name().clone();
        if self.by_name.contains_key(&name) {
            tracing::warn!(component = %name, "component registered twice");
            return Err(RegistryError::Duplicate { name });
        }

        tracing::debug!(
            component = %name,
            handle = descriptor.component_handle().get(),
            "registered component descriptor"
        );
        self.by_handle
            .insert(descriptor.component_handle(), Arc::clone(&descriptor));
        self.by_name.insert(name, descriptor);
        Ok(())
    }

    /// Builds and registers the descriptor of `provider`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if the name is already taken.
    pub fn add_provider(
        &mut self,
        provider: &ComponentDescriptorProvider,
    ) -> Result<(), RegistryError> {
        if self.by_name.contains_key(provider.name()) {
            return Err(RegistryError::Duplicate {
                name: provider.name().clone(),
            });
        }
        self.add_shared(provider.create())
    }

    /// Registers `ConcreteComponentDescriptor<N>` under `N::NAME`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if the name is already taken.
    pub fn register<N: ConcreteShadowNode>(&mut self) -> Result<(), RegistryError> {
        self.add(ConcreteComponentDescriptor::<N>::new())
    }

    /// Number of registered kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Returns true if a descriptor is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Iterates over registered descriptors in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &SharedComponentDescriptor> {
        self.by_name.values()
    }

    /// The fallback descriptor, if one is configured and registered.
    #[must_use]
    pub fn fallback(&self) -> Option<&SharedComponentDescriptor> {
        self.options
            .fallback
            .as_deref()
            .and_then(|name| self.by_name.get(name))
    }

    /// Looks up the descriptor registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Unregistered`] if neither `name` nor a
    /// fallback is registered.
    pub fn get(&self, name: &str) -> Result<&SharedComponentDescriptor, RegistryError> {
        if let Some(descriptor) = self.by_name.get(name) {
            return Ok(descriptor);
        }

        let fallback = self.fallback().ok_or_else(|| RegistryError::Unregistered {
            name: ComponentName::from(name),
        })?;
        tracing::warn!(
            component = name,
            fallback = %fallback.component_name(),
            "no descriptor registered, using fallback"
        );
        Ok(fallback)
    }

    /// Looks up the descriptor registered under `handle`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnregisteredHandle`] if neither `handle` nor a
    /// fallback is registered.
    pub fn get_by_handle(
        &self,
        handle: ComponentHandle,
    ) -> Result<&SharedComponentDescriptor, RegistryError> {
        if let Some(descriptor) = self.by_handle.get(&handle) {
            return Ok(descriptor);
        }

        let fallback = self
            .fallback()
            .ok_or(RegistryError::UnregisteredHandle {
                handle: handle.get(),
            })?;
        tracing::warn!(
            handle = handle.get(),
            fallback = %fallback.component_name(),
            "no descriptor registered, using fallback"
        );
        Ok(fallback)
    }

    /// Creates the first node of a new logical node of kind `name`.
    ///
    /// Creates the family, parses `raw` over the kind's default props, and
    /// builds the node with its initial state and no children.
    ///
    /// # Errors
    ///
    /// Fails if the kind is unknown (and there is no fallback) or `raw` does
    /// not parse.
    pub fn create_node(
        &self,
        name: &str,
        family: ShadowNodeFamilyFragment,
        raw: &RawProps,
    ) -> Result<ShadowNodeHandle> {
        let descriptor = self.get(name)?;
        let family = descriptor.create_family(family);
        let props = descriptor.clone_props(None, raw)?;
        let node = descriptor
            .create_shadow_node(ShadowNodeFragment::new().shared_props(props), family)?;
        Ok(node)
    }
}
