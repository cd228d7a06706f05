//! Container component and its configuration

use crate::container::{DistributeOutcome, InsertOutcome, ItemContainer};
use crate::error::{InventoryError, Result};
use crate::stack::ItemStack;
use serde::{Deserialize, Serialize};

/// Container configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// Number of slots
    pub capacity: usize,
    /// Name used in log output
    pub label: String,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            capacity: 20,
            label: String::from("container"),
        }
    }
}

impl ContainerConfig {
    /// Create a config with `capacity` slots
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Default::default()
        }
    }

    /// Set label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Check the configuration
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(InventoryError::InvalidConfig(format!(
                "'{}' needs at least one slot",
                self.label
            )));
        }
        Ok(())
    }
}

/// Owner-side wrapper around a container, built from configuration
#[derive(Debug, Clone)]
pub struct ItemContainerComponent {
    label: String,
    container: ItemContainer,
}

impl ItemContainerComponent {
    /// Create a component from a validated config
    pub fn new(config: ContainerConfig) -> Result<Self> {
        config.validate()?;
        log::debug!("Creating '{}' with {} slots", config.label, config.capacity);
        Ok(Self {
            container: ItemContainer::new(config.capacity),
            label: config.label,
        })
    }

    /// Label from the config
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the container
    pub fn container(&self) -> &ItemContainer {
        &self.container
    }

    /// Get the container mutably
    pub fn container_mut(&mut self) -> &mut ItemContainer {
        &mut self.container
    }

    /// Consume the component, keeping its container
    pub fn into_container(self) -> ItemContainer {
        self.container
    }

    /// Insert a picked-up stack into the first slot that takes it
    pub fn insert(&mut self, incoming: ItemStack) -> InsertOutcome {
        let outcome = self.container.try_insert_stack(incoming);
        if !outcome.is_inserted() {
            log::debug!("'{}' declined {} units", self.label, outcome.remainder.quantity());
        }
        outcome
    }

    /// Insert a stack across as many slots as needed
    pub fn insert_all(&mut self, incoming: ItemStack) -> DistributeOutcome {
        self.container.try_insert_stack_all(incoming)
    }

    /// Withdraw the stack at `index`
    pub fn pickup(&mut self, index: usize) -> Option<ItemStack> {
        self.container.try_pickup_stack(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::ItemDefinition;
    use std::sync::Arc;

    #[test]
    fn test_default_config() {
        let config = ContainerConfig::default();
        assert_eq!(config.capacity, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = ContainerConfig::new(0).with_label("chest");
        let err = ItemContainerComponent::new(config).unwrap_err();
        assert!(matches!(err, InventoryError::InvalidConfig(msg) if msg.contains("chest")));
    }

    #[test]
    fn test_config_from_json_fills_defaults() {
        let config: ContainerConfig = serde_json::from_str(r#"{ "capacity": 9 }"#).unwrap();
        assert_eq!(config.capacity, 9);
        assert_eq!(config.label, "container");
    }

    #[test]
    fn test_component_forwards() {
        let apple = ItemDefinition::new("apple", 5).shared();
        let config = ContainerConfig::new(2).with_label("bag");
        let mut component = ItemContainerComponent::new(config).unwrap();

        assert_eq!(component.label(), "bag");
        assert_eq!(component.container().len(), 2);

        let outcome = component.insert(ItemStack::new(Arc::clone(&apple), 3));
        assert_eq!(outcome.index, Some(0));

        let outcome = component.insert_all(ItemStack::new(Arc::clone(&apple), 5));
        assert_eq!(outcome.indices, vec![0, 1]);
        assert_eq!(component.container().count_of(&apple), 8);

        assert_eq!(component.pickup(1).unwrap().quantity(), 3);
        assert!(component.into_container().is_slot_empty(1));
    }
}
