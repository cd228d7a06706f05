//! Error types for the inventory system
//!
//! Caller bugs (quantity outside a stack's bounds, reading a missing
//! definition) are `debug_assert!`s, and ordinary refusals (full slot,
//! incompatible items) are `bool`/`Option` results. This type only covers
//! the fallible constructors, the catalog, configuration, and the mailbox.

use crate::definition::ItemId;
use crate::StackSize;
use thiserror::Error;

/// Inventory errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// Quantity does not fit the definition's capacity
    #[error("Quantity {quantity} is outside 0..={max} for '{item}'")]
    QuantityOutOfRange {
        item: String,
        quantity: StackSize,
        max: StackSize,
    },

    /// Definition registered twice
    #[error("Item definition already registered: {0}")]
    DuplicateDefinition(ItemId),

    /// Definition not in the catalog
    #[error("Unknown item definition: {0}")]
    UnknownDefinition(String),

    /// Invalid container configuration
    #[error("Invalid container configuration: {0}")]
    InvalidConfig(String),

    /// The container's owner thread could not be started
    #[error("Failed to start container mailbox: {0}")]
    MailboxSpawn(String),

    /// The container's owner thread is gone
    #[error("Container mailbox is closed")]
    MailboxClosed,
}

/// Result type for inventory operations
pub type Result<T> = std::result::Result<T, InventoryError>;
