//! Item definitions
//!
//! Definitions are immutable catalog records. Stacks hold them through an
//! `Arc` and compare them by pointer, so two definitions with the same id
//! loaded twice are still different item types.

use crate::StackSize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use void_core::NamedId;

/// Opaque item identifier (e.g. `"iron_ore"`)
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ItemId(NamedId);

impl ItemId {
    /// Create a new item id
    pub fn new(name: &str) -> Self {
        Self(NamedId::new(name))
    }

    /// Get the id as a string
    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.name()
    }
}

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemId({:?})", self.as_str())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(NamedId::from(s))
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0.into()
    }
}

/// Item definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDefinition {
    /// Unique identifier
    pub id: ItemId,
    /// Maximum units a single stack may hold (0 = cannot be held)
    pub max_stack_size: StackSize,
}

impl ItemDefinition {
    /// Create a new item definition
    pub fn new(id: impl Into<ItemId>, max_stack_size: StackSize) -> Self {
        Self {
            id: id.into(),
            max_stack_size,
        }
    }

    /// Wrap this definition in the shared handle stacks refer to
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Check if more than one unit fits in a stack
    pub fn is_stackable(&self) -> bool {
        self.max_stack_size > 1
    }
}
