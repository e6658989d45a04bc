//! Identity of component kinds: names and handles.
//!
//! A [`ComponentName`] is what a kind is registered under. A
//! [`ComponentHandle`] is the same identity as a single integer, for hot
//! reconciliation paths where comparing strings would be wasteful.

use core::borrow::Borrow;
use core::fmt;
use core::num::NonZeroU64;
use core::ops::Deref;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

/// Name a component kind is registered under, such as `"ScrollView"`.
///
/// Cloning is a reference-count bump.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentName(Arc<str>);

impl ComponentName {
    /// Creates a component name.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the process-wide handle for this name.
    #[must_use]
    pub fn handle(&self) -> ComponentHandle {
        ComponentHandle::for_name(self)
    }
}

impl Deref for ComponentName {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ComponentName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ComponentName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ComponentName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl PartialEq<str> for ComponentName {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for ComponentName {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

/// Opaque token identifying a component kind.
///
/// Handles are interned per distinct name: asking twice for the same name
/// yields the same handle for the rest of the process, and two different
/// names never share one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentHandle(NonZeroU64);

type HandleTable = RwLock<HashMap<Box<str>, ComponentHandle>>;

static HANDLES: OnceLock<HandleTable> = OnceLock::new();

impl ComponentHandle {
    /// Returns the handle interned for `name`, allocating one on first use.
    #[must_use]
    pub fn for_name(name: &str) -> Self {
        let table = HANDLES.get_or_init(HandleTable::default);

        if let Some(handle) = table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
        {
            return *handle;
        }

        let mut table = table.write().unwrap_or_else(PoisonError::into_inner);
        let next = NonZeroU64::MIN.saturating_add(table.len() as u64);
        *table.entry(Box::from(name)).or_insert(Self(next))
    }

    /// Returns the raw integer value of the handle.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}
