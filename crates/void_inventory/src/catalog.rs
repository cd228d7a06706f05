//! Item catalog
//!
//! Holds the shared definition records that stacks point at. Records are
//! supplied by whatever loads game data; the catalog only indexes them.

use crate::definition::{ItemDefinition, ItemId};
use crate::error::{InventoryError, Result};
use crate::stack::ItemStack;
use crate::StackSize;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of item definitions keyed by id
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    definitions: HashMap<ItemId, Arc<ItemDefinition>>,
}

impl ItemCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog, failing on the first duplicate id
    pub fn from_definitions(definitions: impl IntoIterator<Item = ItemDefinition>) -> Result<Self> {
        let mut catalog = Self::new();
        for definition in definitions {
            catalog.register(definition)?;
        }
        Ok(catalog)
    }

    /// Register a definition and return the shared handle stacks should use
    pub fn register(&mut self, definition: ItemDefinition) -> Result<Arc<ItemDefinition>> {
        if self.definitions.contains_key(&definition.id) {
            return Err(InventoryError::DuplicateDefinition(definition.id));
        }
        let shared = definition.shared();
        self.definitions.insert(shared.id.clone(), Arc::clone(&shared));
        log::debug!("Registered item '{}' (max stack {})", shared.id, shared.max_stack_size);
        Ok(shared)
    }

    /// Look up a definition
    pub fn get(&self, id: &str) -> Option<&Arc<ItemDefinition>> {
        self.definitions.get(&ItemId::new(id))
    }

    /// Create a stack of `quantity` units of `id`
    pub fn stack(&self, id: &str, quantity: StackSize) -> Result<ItemStack> {
        let definition = self
            .get(id)
            .ok_or_else(|| InventoryError::UnknownDefinition(id.to_string()))?;
        ItemStack::try_new(Arc::clone(definition), quantity)
    }

    /// Number of registered definitions
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Check if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// All definitions, in no particular order
    pub fn definitions(&self) -> impl Iterator<Item = &Arc<ItemDefinition>> {
        self.definitions.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ItemCatalog {
        ItemCatalog::from_definitions([
            ItemDefinition::new("iron_ore", 64),
            ItemDefinition::new("sword", 1),
        ])
        .unwrap()
    }

    #[test]
    fn test_lookup() {
        let catalog = catalog();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("sword").unwrap().max_stack_size, 1);
        assert!(catalog.get("shield").is_none());
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut catalog = catalog();
        let err = catalog.register(ItemDefinition::new("sword", 5)).unwrap_err();

        assert_eq!(err, InventoryError::DuplicateDefinition(ItemId::new("sword")));
        assert_eq!(catalog.get("sword").unwrap().max_stack_size, 1);
    }

    #[test]
    fn test_stacks_share_definition() {
        let catalog = catalog();
        let a = catalog.stack("iron_ore", 10).unwrap();
        let b = catalog.stack("iron_ore", 30).unwrap();

        assert!(a.can_stack_with(&b));
        assert!(a.is_definition_equal(catalog.get("iron_ore").unwrap()));
    }

    #[test]
    fn test_stack_errors() {
        let catalog = catalog();

        assert_eq!(
            catalog.stack("shield", 1).unwrap_err(),
            InventoryError::UnknownDefinition("shield".into())
        );
        assert!(matches!(
            catalog.stack("sword", 2),
            Err(InventoryError::QuantityOutOfRange { quantity: 2, max: 1, .. })
        ));
    }
}
